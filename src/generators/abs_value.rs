//! Absolute-value inequality problems.

use super::Problem;
use crate::math::{LinearExpr, Rational};
use rand::Rng;

/// Comparison operator in a sampled inequality.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompareOp {
    Greater,
    GreaterEq,
    Less,
    LessEq,
}

impl CompareOp {
    fn sample<R: Rng>(rng: &mut R) -> Self {
        match rng.gen_range(0..4) {
            0 => Self::Greater,
            1 => Self::GreaterEq,
            2 => Self::Less,
            _ => Self::LessEq,
        }
    }

    pub fn latex(&self) -> &'static str {
        match self {
            Self::Greater => ">",
            Self::GreaterEq => r"\geq",
            Self::Less => "<",
            Self::LessEq => r"\leq",
        }
    }

    pub fn is_greater(&self) -> bool {
        matches!(self, Self::Greater | Self::GreaterEq)
    }

    pub fn is_strict(&self) -> bool {
        matches!(self, Self::Greater | Self::Less)
    }
}

/// Solve `|ax + b| ? c` for a sampled comparison operator for the range of acceptable x's.
///
/// A negative bound makes the problem a trick question: always true for the
/// greater variants, never true for the less variants.
#[derive(Debug, Clone)]
pub struct AbsValueInequality {
    a: i64,
    b: i64,
    c: i64,
    op: CompareOp,
}

impl AbsValueInequality {
    pub fn sample<R: Rng>(rng: &mut R) -> Self {
        Self::new(
            rng.gen_range(1..=100),
            rng.gen_range(0..=100),
            rng.gen_range(-10..=100),
            CompareOp::sample(rng),
        )
    }

    pub fn new(a: i64, b: i64, c: i64, op: CompareOp) -> Self {
        Self { a, b, c, op }
    }

    fn lhs(&self) -> LinearExpr {
        LinearExpr::new(self.a, self.b)
    }

    /// The two boundary points `(-c - b)/a` and `(c - b)/a`.
    fn zeros(&self) -> (Rational, Rational) {
        let a = Rational::from(self.a);
        let b = Rational::from(self.b);
        let c = Rational::from(self.c);
        (((-c - b) / a), ((c - b) / a))
    }

    fn trick_solution(&self) -> String {
        if self.op.is_greater() {
            "An absolute value is always positive or zero, so it will always \
             be greater than a negative number.  Hence, this inequality is \
             true for all real numbers."
                .to_string()
        } else {
            "An absolute value can never be negative, so there is no solution \
             to this inequality."
                .to_string()
        }
    }

    /// Split `|L| > c` into the disjunction `L < -c or L > c` and solve both.
    fn greater_solution(&self) -> String {
        let (opop, openbrak, closebrak) = if self.op.is_strict() {
            ("<", "(", ")")
        } else {
            (r"\leq", "[", "]")
        };
        let (z0, z1) = self.zeros();
        format!(
            r"First, eliminate the absolute value bars by splitting the
inequality into two inequalities:
\[
{lhs} {opop} {nrhs} \qquad \text{{or}} \qquad {lhs} {compop} {rhs}.
\]
Then solve each inequality normally.
\begin{{align*}}
{lhs1} {opop} {nrhs1} \qquad &\text{{or}} \qquad {lhs1} {compop} {rhs1} \\
x {opop} {nrhs2} \qquad &\text{{or}} \qquad x {compop} {rhs2}.
\end{{align*}}
The solution to the inequality can be expressed in either of the
following ways:
\begin{{align*}}
x {opop} {nrhs2} \qquad &\text{{or}} \qquad x {compop} {rhs2} \\
\left(-\infty, {nrhs2}\right{closebrak}
&\cup
\left{openbrak}{rhs2}, \infty\right)
\end{{align*}}
",
            lhs = self.lhs().latex(),
            opop = opop,
            nrhs = -self.c,
            compop = self.op.latex(),
            rhs = self.c,
            lhs1 = LinearExpr::new(self.a, 0).latex(),
            nrhs1 = -self.c - self.b,
            rhs1 = self.c - self.b,
            nrhs2 = z0.latex(),
            rhs2 = z1.latex(),
            openbrak = openbrak,
            closebrak = closebrak,
        )
    }

    /// Rewrite `|L| < c` as the double inequality `-c < L < c` and solve it.
    fn less_solution(&self) -> String {
        let (openbrak, closebrak) = if self.op.is_strict() {
            ("(", ")")
        } else {
            ("[", "]")
        };
        let (z0, z1) = self.zeros();
        format!(
            r"First, eliminate the absolute value by transforming the
inequality into a linear inequality:
\[
{lb} {compop} {lhs} {compop} {ub}.
\]
Then solve the linear inequality in the usual way
\begin{{align*}}
{lb1} &{compop} {lhs1} {compop} {ub1} \\
{lb2} &{compop} x {compop} {ub2}
\end{{align*}}
So the solution can be expressed in either of the following ways:
\begin{{align*}}
&{lb2} {compop} x {compop} {ub2} \\
&\left{openbrak}{lb2}, {ub2}\right{closebrak}
\end{{align*}}
",
            lb = -self.c,
            compop = self.op.latex(),
            lhs = self.lhs().latex(),
            ub = self.c,
            lb1 = -self.c - self.b,
            lhs1 = LinearExpr::new(self.a, 0).latex(),
            ub1 = self.c - self.b,
            lb2 = z0.latex(),
            ub2 = z1.latex(),
            openbrak = openbrak,
            closebrak = closebrak,
        )
    }
}

impl Problem for AbsValueInequality {
    fn statement(&self) -> String {
        format!(
            r"Solve $\abs{{{}}} {} {}$.",
            self.lhs().latex(),
            self.op.latex(),
            self.c
        )
    }

    fn answer(&self) -> String {
        if self.c < 0 {
            return if self.op.is_greater() {
                "All real numbers.".to_string()
            } else {
                "No solution.".to_string()
            };
        }

        let (z0, z1) = self.zeros();
        if self.op.is_greater() {
            let opop = if self.op.is_strict() { "<" } else { r"\leq" };
            format!(
                "$x {} {}$ or $x {} {}$",
                opop,
                z0.latex(),
                self.op.latex(),
                z1.latex()
            )
        } else {
            format!(
                "${} {} x {} {}$",
                z0.latex(),
                self.op.latex(),
                self.op.latex(),
                z1.latex()
            )
        }
    }

    fn solution(&self) -> String {
        if self.c < 0 {
            self.trick_solution()
        } else if self.op.is_greater() {
            self.greater_solution()
        } else {
            self.less_solution()
        }
    }
}

/// Given an interval, derive the absolute-value inequality characterizing it.
///
/// Two scenarios: containment (`lo < x < hi`) and the union of two rays
/// (`x < lo or x > hi`). The midpoint shift can introduce a half-integer;
/// `full_simplify` clears it by scaling both sides.
#[derive(Debug, Clone)]
pub struct ReverseAbsValue {
    lower: i64,
    upper: i64,
    inner: bool,
    endp: bool,
    full_simplify: bool,
}

impl ReverseAbsValue {
    pub fn sample<R: Rng>(rng: &mut R, full_simplify: bool) -> Self {
        // Distinct endpoints; equal ones would describe a zero-width band.
        let (lower, upper) = loop {
            let a = rng.gen_range(-10..10);
            let b = rng.gen_range(-10..10);
            if a != b {
                break (a.min(b), a.max(b));
            }
        };
        Self::new(lower, upper, rng.gen(), rng.gen(), full_simplify)
    }

    pub fn new(lower: i64, upper: i64, inner: bool, endp: bool, full_simplify: bool) -> Self {
        Self {
            lower,
            upper,
            inner,
            endp,
            full_simplify,
        }
    }

    /// Midpoint of the interval; subtracting it centers the interval at 0.
    fn shift(&self) -> Rational {
        Rational::new(self.lower + self.upper, 2)
    }

    /// `x - shift`.
    fn inside(&self) -> LinearExpr {
        LinearExpr::x().sub_const(self.shift())
    }

    /// Half the interval width.
    fn bound(&self) -> Rational {
        Rational::new(self.upper - self.lower, 2)
    }

    /// The comparison used in the final absolute-value form.
    fn comp(&self) -> &'static str {
        match (self.inner, self.endp) {
            (true, true) => r"\leq",
            (true, false) => "<",
            (false, true) => r"\geq",
            (false, false) => ">",
        }
    }

    /// Inside expression and bound after optional denominator clearing.
    fn final_form(&self) -> (LinearExpr, Rational) {
        let inside = self.inside();
        let bound = self.bound();
        if self.full_simplify {
            let (scale, cleared) = inside.clear_denoms();
            (cleared, bound * Rational::from(scale))
        } else {
            (inside, bound)
        }
    }
}

impl Problem for ReverseAbsValue {
    fn statement(&self) -> String {
        if self.inner {
            let comp = if self.endp { r"\leq" } else { "<" };
            format!(
                r"Find the absolute-value inequality statement that
corresponds to the following inequality
\[
{lower} {comp} x {comp} {upper}
\]",
                lower = self.lower,
                comp = comp,
                upper = self.upper
            )
        } else {
            let (lcomp, gcomp) = if self.endp {
                (r"\leq", r"\geq")
            } else {
                ("<", ">")
            };
            format!(
                r"Find the absolute-value inequality statement that
corresponds to the inequalities
\[
x {lcomp} {lower} \qquad \text{{or}} \qquad x {gcomp} {upper}
\]",
                lcomp = lcomp,
                lower = self.lower,
                gcomp = gcomp,
                upper = self.upper
            )
        }
    }

    fn answer(&self) -> String {
        let (inside, bound) = self.final_form();
        format!(
            r"$\abs{{{}}} {} {}$",
            inside.latex(),
            self.comp(),
            bound.latex()
        )
    }

    fn solution(&self) -> String {
        let shift = self.shift();
        let inside = self.inside();
        let bound = self.bound();
        let diff = Rational::from(self.upper - self.lower);

        let mut soln = if self.inner {
            let comp = if self.endp { r"\leq" } else { "<" };
            format!(
                r"First look at the endpoints of the interval.  ${upper}$
and ${lower}$ are ${diff}$ units apart, and half of ${diff}$ is
${bound}$. So you want to adjust the inequality so that it relates
$-{bound}$ to ${bound}$, instead of ${lower}$ to ${upper}$.  To do
this, subtract ${shift}$ from every term
\begin{{align*}}
&{lower} {comp} x {comp} {upper} \\
&{lower} - \left({shift}\right) {comp} x - \left({shift}\right)
{comp} {upper} - \left({shift}\right) \\
&-{bound} {comp} {inside} {comp} {bound}.
\end{{align*}}
This gives the inequality
\[
\abs{{{inside}}} {comp} {bound}.
\]
",
                upper = self.upper,
                lower = self.lower,
                diff = diff.latex(),
                bound = bound.latex(),
                shift = shift.latex(),
                comp = comp,
                inside = inside.latex(),
            )
        } else {
            let (lcomp, gcomp) = if self.endp {
                (r"\leq", r"\geq")
            } else {
                ("<", ">")
            };
            format!(
                r"First look at the endpoints.  ${upper}$ and ${lower}$ are
${diff}$ units apart, and half of ${diff}$ is ${bound}$.  So
you want to adjust the inequality so that it relates $-{bound}$
and ${bound}$.  To do this, subtract ${shift}$ from both sides
of both inequalities:
\begin{{align*}}
x {lcomp} {lower} \qquad &\text{{or}} \qquad x {gcomp} {upper} \\
x - \left({shift}\right) {lcomp} {lower} - \left({shift}\right)
\qquad &\text{{or}} \qquad
x - \left({shift}\right) {gcomp} {upper} - \left({shift}\right) \\
{inside} {lcomp} -{bound}
\qquad &\text{{or}} \qquad
{inside} {gcomp} {bound}.
\end{{align*}}
This gives the inequality
\[
\abs{{{inside}}} {gcomp} {bound}.
\]
",
                upper = self.upper,
                lower = self.lower,
                diff = diff.latex(),
                bound = bound.latex(),
                shift = shift.latex(),
                lcomp = lcomp,
                gcomp = gcomp,
                inside = inside.latex(),
            )
        };

        if self.full_simplify {
            let (scale, cleared) = inside.clear_denoms();
            if scale != 1 {
                let scaled_bound = bound * Rational::from(scale);
                soln.push_str(&format!(
                    r"This can be simplified by multiplying
through by the denominator of the right-hand side
\[
\abs{{{inside}}} {comp} {bound}.
\]
",
                    inside = cleared.latex(),
                    comp = self.comp(),
                    bound = scaled_bound.latex(),
                ));
            }
        }

        soln
    }
}
