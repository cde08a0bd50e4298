//! Exact rational arithmetic for problem parameters.
//!
//! Values stay small (sampled coefficients and survey counts), so `i64`
//! components are plenty. Every value is kept reduced with a positive
//! denominator.

use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};

/// Greatest common divisor of two non-negative integers.
pub fn gcd(mut a: i64, mut b: i64) -> i64 {
    a = a.abs();
    b = b.abs();
    while b != 0 {
        let t = a % b;
        a = b;
        b = t;
    }
    a
}

/// Least common multiple of two positive integers.
pub fn lcm(a: i64, b: i64) -> i64 {
    a / gcd(a, b) * b
}

/// An exact rational number, always reduced, denominator always positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rational {
    num: i64,
    den: i64,
}

impl Rational {
    /// Build a reduced rational. Panics on a zero denominator.
    pub fn new(num: i64, den: i64) -> Self {
        assert!(den != 0, "zero denominator");
        let g = gcd(num, den);
        let sign = if den < 0 { -1 } else { 1 };
        Self {
            num: sign * num / g,
            den: sign * den / g,
        }
    }

    pub fn zero() -> Self {
        Self { num: 0, den: 1 }
    }

    pub fn numerator(&self) -> i64 {
        self.num
    }

    pub fn denominator(&self) -> i64 {
        self.den
    }

    pub fn is_zero(&self) -> bool {
        self.num == 0
    }

    pub fn is_integer(&self) -> bool {
        self.den == 1
    }

    pub fn is_negative(&self) -> bool {
        self.num < 0
    }

    pub fn abs(&self) -> Self {
        Self {
            num: self.num.abs(),
            den: self.den,
        }
    }

    /// Greatest common divisor of two rationals:
    /// gcd of numerators over lcm of denominators.
    pub fn gcd(&self, other: &Self) -> Self {
        if self.is_zero() {
            return *other;
        }
        if other.is_zero() {
            return *self;
        }
        Self::new(gcd(self.num, other.num), lcm(self.den, other.den))
    }

    /// Render as LaTeX: integers plain, otherwise `\frac`, sign out front.
    pub fn latex(&self) -> String {
        if self.is_integer() {
            return self.num.to_string();
        }
        let sign = if self.num < 0 { "-" } else { "" };
        format!(r"{}\frac{{{}}}{{{}}}", sign, self.num.abs(), self.den)
    }
}

impl From<i64> for Rational {
    fn from(n: i64) -> Self {
        Self { num: n, den: 1 }
    }
}

impl fmt::Display for Rational {
    /// Plain-text rendering for prose contexts: `3`, `-3`, `7/2`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_integer() {
            write!(f, "{}", self.num)
        } else {
            write!(f, "{}/{}", self.num, self.den)
        }
    }
}

impl Add for Rational {
    type Output = Rational;
    fn add(self, rhs: Rational) -> Rational {
        Rational::new(self.num * rhs.den + rhs.num * self.den, self.den * rhs.den)
    }
}

impl Sub for Rational {
    type Output = Rational;
    fn sub(self, rhs: Rational) -> Rational {
        Rational::new(self.num * rhs.den - rhs.num * self.den, self.den * rhs.den)
    }
}

impl Mul for Rational {
    type Output = Rational;
    fn mul(self, rhs: Rational) -> Rational {
        Rational::new(self.num * rhs.num, self.den * rhs.den)
    }
}

impl Div for Rational {
    type Output = Rational;
    fn div(self, rhs: Rational) -> Rational {
        assert!(!rhs.is_zero(), "division by zero");
        Rational::new(self.num * rhs.den, self.den * rhs.num)
    }
}

impl Neg for Rational {
    type Output = Rational;
    fn neg(self) -> Rational {
        Rational {
            num: -self.num,
            den: self.den,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reduction_and_sign() {
        let r = Rational::new(4, -6);
        assert_eq!(r.numerator(), -2);
        assert_eq!(r.denominator(), 3);
        assert!(r.is_negative());
    }

    #[test]
    fn test_arithmetic() {
        let half = Rational::new(1, 2);
        let third = Rational::new(1, 3);
        assert_eq!(half + third, Rational::new(5, 6));
        assert_eq!(half - third, Rational::new(1, 6));
        assert_eq!(half * third, Rational::new(1, 6));
        assert_eq!(half / third, Rational::new(3, 2));
        assert_eq!(-half, Rational::new(-1, 2));
    }

    #[test]
    fn test_gcd_of_fractions() {
        // gcd(1/10, 3/10, 1/5) = 1/10, so the common population is 10
        let a = Rational::new(1, 10);
        let b = Rational::new(3, 10);
        let c = Rational::new(1, 5);
        let g = a.gcd(&b).gcd(&c);
        assert_eq!(g, Rational::new(1, 10));
        assert_eq!(g.denominator(), 10);
    }

    #[test]
    fn test_latex() {
        assert_eq!(Rational::from(7).latex(), "7");
        assert_eq!(Rational::from(-7).latex(), "-7");
        assert_eq!(Rational::new(3, 4).latex(), r"\frac{3}{4}");
        assert_eq!(Rational::new(-3, 4).latex(), r"-\frac{3}{4}");
    }

    #[test]
    fn test_display() {
        assert_eq!(Rational::new(7, 2).to_string(), "7/2");
        assert_eq!(Rational::from(5).to_string(), "5");
    }
}
