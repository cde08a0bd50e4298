//! Linear expressions `a*x + b` over rationals.

use super::rational::{lcm, Rational};

/// A linear expression in one variable: `a*x + b`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LinearExpr {
    pub a: Rational,
    pub b: Rational,
}

impl LinearExpr {
    pub fn new(a: impl Into<Rational>, b: impl Into<Rational>) -> Self {
        Self {
            a: a.into(),
            b: b.into(),
        }
    }

    /// The bare variable `x`.
    pub fn x() -> Self {
        Self::new(1, 0)
    }

    /// A constant expression.
    pub fn constant(b: impl Into<Rational>) -> Self {
        Self::new(0, b)
    }

    /// Shift by a constant: `self - c`.
    pub fn sub_const(&self, c: Rational) -> Self {
        Self {
            a: self.a,
            b: self.b - c,
        }
    }

    /// Multiply through by an integer factor.
    pub fn scale(&self, k: i64) -> Self {
        let k = Rational::from(k);
        Self {
            a: self.a * k,
            b: self.b * k,
        }
    }

    /// Clear denominators, returning the scale factor applied and the
    /// integer-coefficient expression.
    pub fn clear_denoms(&self) -> (i64, Self) {
        let scale = lcm(self.a.denominator(), self.b.denominator());
        (scale, self.scale(scale))
    }

    /// Render as LaTeX with conventional coefficient elision.
    pub fn latex(&self) -> String {
        if self.a.is_zero() {
            return self.b.latex();
        }

        let x_term = if self.a == Rational::from(1) {
            "x".to_string()
        } else if self.a == Rational::from(-1) {
            "-x".to_string()
        } else {
            format!("{}x", self.a.latex())
        };

        if self.b.is_zero() {
            x_term
        } else if self.b.is_negative() {
            format!("{} - {}", x_term, self.b.abs().latex())
        } else {
            format!("{} + {}", x_term, self.b.latex())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latex_elision() {
        assert_eq!(LinearExpr::new(34, 56).latex(), "34x + 56");
        assert_eq!(LinearExpr::new(1, -3).latex(), "x - 3");
        assert_eq!(LinearExpr::new(-1, 0).latex(), "-x");
        assert_eq!(LinearExpr::new(0, -5).latex(), "-5");
        assert_eq!(
            LinearExpr::new(Rational::new(1, 2), Rational::zero()).latex(),
            r"\frac{1}{2}x"
        );
    }

    #[test]
    fn test_clear_denoms() {
        // x - 7/2 scales by 2 to 2x - 7
        let e = LinearExpr::new(Rational::from(1), Rational::new(-7, 2));
        let (scale, cleared) = e.clear_denoms();
        assert_eq!(scale, 2);
        assert_eq!(cleared, LinearExpr::new(2, -7));

        // Already integral: scale is 1
        let e = LinearExpr::new(3, 4);
        let (scale, cleared) = e.clear_denoms();
        assert_eq!(scale, 1);
        assert_eq!(cleared, e);
    }

    #[test]
    fn test_shift() {
        let e = LinearExpr::new(34, 56);
        assert_eq!(e.sub_const(Rational::from(56)), LinearExpr::new(34, 0));
    }
}
