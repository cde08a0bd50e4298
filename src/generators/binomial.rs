//! Binomial theorem problems over polynomials of the form `(a*x + b)^c`.

use super::Problem;
use crate::math::{binomial, ipow, LinearExpr, Polynomial};
use rand::Rng;

/// Random nonzero integer in `lo..hi`.
fn nonzero_range<R: Rng>(rng: &mut R, lo: i64, hi: i64) -> i64 {
    loop {
        let v = rng.gen_range(lo..hi);
        if v != 0 {
            return v;
        }
    }
}

/// English ordinal suffix: 1st, 2nd, 3rd, 4th, ... 11th, 12th, 21st.
fn ordinal(value: usize) -> String {
    let suffix = if value % 100 / 10 == 1 {
        "th"
    } else {
        match value % 10 {
            1 => "st",
            2 => "nd",
            3 => "rd",
            _ => "th",
        }
    };
    format!("{value}{suffix}")
}

/// Join rendered terms with signs pulled out of negative terms.
fn join_signed(terms: &[String]) -> String {
    let mut out = String::new();
    for term in terms {
        if out.is_empty() {
            out.push_str(term);
        } else if let Some(rest) = term.strip_prefix('-') {
            out.push_str(" - ");
            out.push_str(rest);
        } else {
            out.push_str(" + ");
            out.push_str(term);
        }
    }
    out
}

/// Join terms in groups of `per_line`, continuing each new line in an
/// `align*` with a phantom-aligned sign.
fn join_grouped(terms: &[String], per_line: usize) -> String {
    let lines: Vec<String> = terms.chunks(per_line).map(join_signed).collect();
    let mut out = String::new();
    for line in lines {
        if out.is_empty() {
            out.push_str(&line);
        } else if let Some(rest) = line.strip_prefix('-') {
            out.push_str(" \\\\\n&\\phantom{=} - ");
            out.push_str(rest);
        } else {
            out.push_str(" \\\\\n&\\phantom{=} + ");
            out.push_str(&line);
        }
    }
    out
}

/// Shared sampled parameters for the binomial family.
#[derive(Debug, Clone)]
struct BinomialParams {
    a: i64,
    b: i64,
    c: u32,
    poly: Polynomial,
}

impl BinomialParams {
    fn sample<R: Rng>(rng: &mut R) -> Self {
        Self::new(
            nonzero_range(rng, -6, 6),
            nonzero_range(rng, -6, 6),
            rng.gen_range(2..10),
        )
    }

    fn new(a: i64, b: i64, c: u32) -> Self {
        Self {
            a,
            b,
            c,
            poly: Polynomial::binomial_power(a, b, c),
        }
    }

    fn inner(&self) -> LinearExpr {
        LinearExpr::new(self.a, self.b)
    }
}

/// Expand `(a*x + b)^c` into the full polynomial.
#[derive(Debug, Clone)]
pub struct BinomialExpansion {
    params: BinomialParams,
}

impl BinomialExpansion {
    pub fn sample<R: Rng>(rng: &mut R) -> Self {
        Self {
            params: BinomialParams::sample(rng),
        }
    }

    pub fn new(a: i64, b: i64, c: u32) -> Self {
        Self {
            params: BinomialParams::new(a, b, c),
        }
    }
}

impl Problem for BinomialExpansion {
    fn statement(&self) -> String {
        format!(
            r"Expand $\left({}\right)^{{{}}}$.",
            self.params.inner().latex(),
            self.params.c
        )
    }

    fn answer(&self) -> String {
        format!("${}$", self.params.poly.latex())
    }

    fn solution(&self) -> String {
        let p = &self.params;

        // Symbolic binomial-theorem terms.
        let terms: Vec<String> = (0..=p.c)
            .map(|k| {
                format!(
                    r"\binom{{{c}}}{{{k}}}({a}x)^{{{k}}}({b})^{{{m}}}",
                    c = p.c,
                    k = k,
                    a = p.a,
                    b = p.b,
                    m = p.c - k
                )
            })
            .collect();

        // Each factor evaluated separately.
        let terms2: Vec<String> = (0..=p.c)
            .map(|k| {
                format!(
                    "({})({})({})",
                    binomial(p.c, k),
                    Polynomial::monomial(ipow(p.a, k), k as usize).latex(),
                    ipow(p.b, p.c - k)
                )
            })
            .collect();

        // Fully collected terms, ascending power.
        let terms3: Vec<String> = (0..=p.c)
            .map(|k| Polynomial::monomial(p.poly.nth(k as usize), k as usize).latex())
            .collect();

        format!(
            r"Applying the binomial theorem:
\begin{{align*}}
\left({inner}\right)^{{{c}}} &= {expanded} \\
&= {expanded2} \\
&= {expanded3}
\end{{align*}}
",
            inner = p.inner().latex(),
            c = p.c,
            expanded = join_grouped(&terms, 3),
            expanded2 = join_grouped(&terms2, 3),
            expanded3 = join_grouped(&terms3, 4),
        )
    }
}

/// Find one coefficient of the expansion of `(a*x + b)^c`.
#[derive(Debug, Clone)]
pub struct BinomialNthTerm {
    params: BinomialParams,
    n: u32,
}

impl BinomialNthTerm {
    pub fn sample<R: Rng>(rng: &mut R) -> Self {
        let params = BinomialParams::sample(rng);
        let n = rng.gen_range(0..=params.c);
        Self { params, n }
    }

    pub fn new(a: i64, b: i64, c: u32, n: u32) -> Self {
        Self {
            params: BinomialParams::new(a, b, c),
            n,
        }
    }

    /// The requested coefficient: `C(c, n)*a^n*b^(c-n)`.
    pub fn coefficient(&self) -> i64 {
        self.params.poly.nth(self.n as usize)
    }
}

impl Problem for BinomialNthTerm {
    fn statement(&self) -> String {
        format!(
            r"Find the coefficient of $x^{{{n}}}$ in the expansion of $({inner})^{{{c}}}$.",
            n = self.n,
            inner = self.params.inner().latex(),
            c = self.params.c
        )
    }

    fn answer(&self) -> String {
        self.coefficient().to_string()
    }

    fn solution(&self) -> String {
        let p = &self.params;
        format!(
            r"The {nth} term of a binomial expansion is given by
\[
\binom{{{c}}}{{{n}}}({a}x)^{{{n}}}({b})^{{{k}}}
= ({binterm})({aterm})({bterm})
= {soln}
\]
",
            nth = ordinal(self.n as usize),
            c = p.c,
            n = self.n,
            a = p.a,
            b = p.b,
            k = p.c - self.n,
            binterm = binomial(p.c, self.n),
            aterm = Polynomial::monomial(ipow(p.a, self.n), self.n as usize).latex(),
            bterm = ipow(p.b, p.c - self.n),
            soln = self.coefficient(),
        )
    }
}

/// Recover `(a*x + b)^c` from its fully expanded form.
///
/// `a` is kept positive so the even-root sign bookkeeping stays honest.
#[derive(Debug, Clone)]
pub struct BinomialContraction {
    params: BinomialParams,
}

impl BinomialContraction {
    pub fn sample<R: Rng>(rng: &mut R) -> Self {
        let a = nonzero_range(rng, 0, 6);
        let b = nonzero_range(rng, -6, 6);
        let c = rng.gen_range(2..10);
        Self::new(a, b, c)
    }

    pub fn new(a: i64, b: i64, c: u32) -> Self {
        Self {
            params: BinomialParams::new(a, b, c),
        }
    }
}

impl Problem for BinomialContraction {
    fn statement(&self) -> String {
        format!(
            r"Express ${}$ in the form $(ax + b)^{{n}}$.",
            self.params.poly.latex()
        )
    }

    fn answer(&self) -> String {
        format!(
            r"$({})^{{{}}}$",
            self.params.inner().latex(),
            self.params.c
        )
    }

    fn solution(&self) -> String {
        let p = &self.params;
        let (are, posneg, absp) = if p.b < 0 {
            ("are", "negative", "the absolute value of ")
        } else {
            ("aren't any", "positive", "")
        };
        let deg = if p.c == 2 {
            String::new()
        } else {
            format!("[{}]", p.c)
        };
        let lc = p.poly.leading_coefficient();
        format!(
            r"The leading term is ${lt}$, and the power on $x$ is {lpow},
so $n = {c}$.  There {are} minuses, so we know that $b$ is
{posneg}.  To find $a$, we take the {ord} root of ${alc}$:
\[
a = \sqrt{deg}{{{alc}}} = {a}
\]
to find $b$, we take the {ord} root of {absp}the constant term:
\[
b = \sqrt{deg}{{{tc}}} = {b}
\]
So the polynomial can be written as {ans}.
",
            lt = format!("{lc}x^{{{c}}}", lc = lc, c = p.c),
            lpow = p.poly.degree(),
            c = p.c,
            are = are,
            posneg = posneg,
            ord = ordinal(p.c as usize),
            alc = lc.abs(),
            deg = deg,
            a = p.a.abs(),
            absp = absp,
            tc = p.poly.constant_term().abs(),
            b = p.b.abs(),
            ans = self.answer(),
        )
    }
}
