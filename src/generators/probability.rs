//! Probability problems: survey partitions, urn compositions, coverage
//! choices, and inclusion-exclusion over two or three events.

use super::Problem;
use crate::math::Rational;
use rand::Rng;

/// A survey condition in singular and plural prose forms.
#[derive(Debug, Clone, Copy)]
struct Condition {
    sing: &'static str,
    plural: &'static str,
}

/// A survey scenario: a population and a pool of conditions to draw from.
struct Scenario {
    scale: i64,
    ptype: &'static str,
    conditions: &'static [Condition],
}

static SCENARIOS: &[Scenario] = &[Scenario {
    scale: 1000,
    ptype: "Canadian hockey fans",
    conditions: &[
        Condition {
            sing: "a Canucks fan",
            plural: "Canucks fans",
        },
        Condition {
            sing: "an Oilers fan",
            plural: "Oilers fans",
        },
        Condition {
            sing: "a Flames fan",
            plural: "Flames fans",
        },
        Condition {
            sing: "a Jets fan",
            plural: "Jets fans",
        },
        Condition {
            sing: "a Maple Leafs fan",
            plural: "Maple Leafs fans",
        },
        Condition {
            sing: "a Senators fan",
            plural: "Senators fans",
        },
        Condition {
            sing: "a Canadiens fan",
            plural: "Canadiens fans",
        },
    ],
}];

/// Percentage with at most one decimal place, e.g. `40\%` or `12.3\%`.
fn format_percent(count: i64, total: i64) -> String {
    let scaled = count * 100;
    if scaled % total == 0 {
        format!("{}\\%", scaled / total)
    } else {
        format!("{:.1}\\%", count as f64 * 100.0 / total as f64)
    }
}

/// Integer percentage of a count over a universe, e.g. `25\%`.
fn pct(count: i64, universe: i64) -> String {
    format!("{}\\%", count * 100 / universe)
}

/// Two-decimal probability rendering used in worked solutions.
fn dec2(x: f64) -> String {
    format!("{x:.2}")
}

/// A fraction usable in prose: integers plain, otherwise wrapped so the
/// `\frac` is legal outside math mode.
fn prose_fraction(r: Rational) -> String {
    if r.is_integer() {
        r.to_string()
    } else {
        format!(
            r"\ensuremath{{\frac{{{}}}{{{}}}}}",
            r.numerator(),
            r.denominator()
        )
    }
}

/// Survey of a population split across two overlapping conditions; find
/// P(A but not B).
#[derive(Debug, Clone)]
pub struct SurveyProbability {
    scenario: usize,
    only_a: i64,
    only_b: i64,
    both: i64,
    cond_a: usize,
    cond_b: usize,
}

impl SurveyProbability {
    pub fn sample<R: Rng>(rng: &mut R) -> Self {
        let scenario = rng.gen_range(0..SCENARIOS.len());
        let u = SCENARIOS[scenario].scale;
        let only_a = rng.gen_range(0..u);
        let only_b = rng.gen_range(0..u - only_a);
        let both = rng.gen_range(0..u - only_a - only_b);

        let n = SCENARIOS[scenario].conditions.len();
        let cond_a = rng.gen_range(0..n);
        let cond_b = loop {
            let j = rng.gen_range(0..n);
            if j != cond_a {
                break j;
            }
        };

        Self {
            scenario,
            only_a,
            only_b,
            both,
            cond_a,
            cond_b,
        }
    }

    fn universe(&self) -> i64 {
        SCENARIOS[self.scenario].scale
    }

    fn count_a(&self) -> i64 {
        self.only_a + self.both
    }

    fn count_b(&self) -> i64 {
        self.only_b + self.both
    }

    fn conds(&self) -> (&Condition, &Condition) {
        let conditions = SCENARIOS[self.scenario].conditions;
        (&conditions[self.cond_a], &conditions[self.cond_b])
    }
}

impl Problem for SurveyProbability {
    fn statement(&self) -> String {
        let (ca, cb) = self.conds();
        format!(
            "A survey of {u} {ptype} shows that {a} are {apl}, {b} are {bpl} \
             and {ab} are both {apl} and {bpl}.  What is the probability that \
             a randomly chosen person from this survey is {asing} but is not \
             {bsing}?",
            u = self.universe(),
            ptype = SCENARIOS[self.scenario].ptype,
            a = self.count_a(),
            apl = ca.plural,
            b = self.count_b(),
            bpl = cb.plural,
            ab = self.both,
            asing = ca.sing,
            bsing = cb.sing,
        )
    }

    fn answer(&self) -> String {
        format_percent(self.count_a() - self.both, self.universe())
    }

    fn solution(&self) -> String {
        let (ca, cb) = self.conds();
        format!(
            r"{a} of the {u} surveyed are {apl}, and {ab} of those are also
{bpl}.  So ${a} - {ab} = {diff}$ people are {apl} but not {bpl}, and
\[
P(\text{{{asing} but not {bsing}}}) = \frac{{{diff}}}{{{u}}} = {ans}
\]
",
            a = self.count_a(),
            u = self.universe(),
            apl = ca.plural,
            ab = self.both,
            bpl = cb.plural,
            diff = self.count_a() - self.both,
            asing = ca.sing,
            bsing = cb.sing,
            ans = self.answer(),
        )
    }
}

/// Two urns of red and blue balls; recover the second urn's unknown blue
/// count from the probability that two independent draws match in color.
#[derive(Debug, Clone)]
pub struct TwoUrn {
    red: [i64; 2],
    blue: [i64; 2],
}

impl TwoUrn {
    pub fn sample<R: Rng>(rng: &mut R) -> Self {
        // Each urn holds at most 20 balls and at least one of each color.
        let limit = 20;
        let red = [rng.gen_range(1..limit), rng.gen_range(1..limit)];
        let blue = [
            rng.gen_range(1..=limit).min(limit - red[0]),
            rng.gen_range(1..=limit).min(limit - red[1]),
        ];
        Self::new(red, blue)
    }

    pub fn new(red: [i64; 2], blue: [i64; 2]) -> Self {
        Self { red, blue }
    }

    fn total(&self, i: usize) -> i64 {
        self.red[i] + self.blue[i]
    }

    fn p_red(&self, i: usize) -> f64 {
        self.red[i] as f64 / self.total(i) as f64
    }

    fn p_blue(&self, i: usize) -> f64 {
        self.blue[i] as f64 / self.total(i) as f64
    }

    fn prob_same(&self) -> f64 {
        self.p_red(0) * self.p_red(1) + self.p_blue(0) * self.p_blue(1)
    }
}

impl Problem for TwoUrn {
    fn statement(&self) -> String {
        format!(
            "An urn contains {ltot} balls: {lred} red and {lblue} blue.  A \
             second urn contains {rred} red balls and an unknown number of \
             blue balls.  A single ball is drawn from each urn.  The \
             probability that both balls are the same color is {sameprob}.  \
             Calculate the number of blue balls in the second urn.",
            ltot = self.total(0),
            lred = self.red[0],
            lblue = self.blue[0],
            rred = self.red[1],
            sameprob = dec2(self.prob_same()),
        )
    }

    fn answer(&self) -> String {
        self.blue[1].to_string()
    }

    fn solution(&self) -> String {
        let sameprob = self.prob_same();
        format!(
            r"Since we're given all of the details of the first urn, we can
calculate the probability of each color being drawn from the first urn:
\[
P_{{1}}(\text{{red}}) = \frac{{\text{{{lred} red balls}}}}{{
                         \text{{{ltot} total balls}}}}
                = {lpred},
\qquad
P_{{1}}(\text{{blue}}) = \frac{{\text{{{lblue} blue balls}}}}{{
                         \text{{{ltot} total balls}}}}
                 = {lpblue}.
\]
We know that there are {rred} red balls in the second urn.  Suppose
there are \(x\) blue balls in the second urn, so that there are
\({rred} + x\) balls total.  So
\[
P_{{2}}(\text{{red}}) = \frac{{\text{{{rred} red balls}}}}{{
                         {rred} + x\text{{ total balls}}}},
\qquad
P_{{2}}(\text{{blue}}) = \frac{{x\text{{ blue balls}}}}{{
                         {rred} + x\text{{ total balls}}}}.
\]

Now, if we draw two balls from the urns, the outcome that they will
both be red is mutually exclusive with the outcome that they will both
be blue.  So the probability that either will happen is
\(P(\text{{both red}}) + P(\text{{both blue}})\).  Since the two
draws are independent, \(P(\text{{both red}}) =
P_{{1}}(\text{{red}}) \times P_{{2}}(\text{{red}})\), so
\begin{{align*}}
P(\text{{both red}})
&= P_{{1}}(\text{{red}}) \times P_{{2}}(\text{{red}})
= {lpred} \times \frac{{{rred}}}{{{rred} + x}}
=\frac{{{redsimp}}}{{{rred} + x}} \\
P(\text{{both blue}})
&= P_{{1}}(\text{{blue}}) \times P_{{2}}(\text{{blue}})
= {lpblue} \times \frac{{x}}{{ {rred} + x}}
= \frac{{{lpblue}x}}{{ {rred} + x}} \\
\end{{align*}}
and so
\[
P(\text{{same}})
= {sameprob}
= \frac{{{redsimp}}}{{{rred} + x}}
    + \frac{{{lpblue}x}}{{ {rred} + x}}
= \frac{{{redsimp} + {lpblue}x}}{{ {rred} + x}}
\]
Now we just need to solve for \(x\):
\begin{{align*}}
{sameprob} &= \frac{{{redsimp} + {lpblue}x}}{{ {rred} + x}} \\
{lhs1} + {sameprob}x &= {redsimp} + {lpblue}x \\
{lhs2} &= {rhs2}x \\
x &= {rblue}
\end{{align*}}
",
            lred = self.red[0],
            ltot = self.total(0),
            lpred = dec2(self.p_red(0)),
            lblue = self.blue[0],
            lpblue = dec2(self.p_blue(0)),
            rred = self.red[1],
            redsimp = dec2(self.p_red(0) * self.red[1] as f64),
            sameprob = dec2(sameprob),
            lhs1 = dec2(sameprob * self.red[1] as f64),
            lhs2 = dec2(sameprob * self.red[1] as f64 - self.p_red(0) * self.red[1] as f64),
            rhs2 = dec2(self.p_blue(0) - sameprob),
            rblue = self.blue[1],
        )
    }
}

/// Everyone picks exactly two of three options, or none at all; recover the
/// proportion that picked none.
#[derive(Debug, Clone)]
pub struct CoverageChoice {
    flavor: CoverageFlavor,
    count_a: i64,
    count_b: i64,
    count_c: i64,
    count_none: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CoverageFlavor {
    Insurance,
    IceCream,
}

/// Population base the proportions are sampled over.
const COVERAGE_BASE: i64 = 20;

impl CoverageChoice {
    pub fn sample<R: Rng>(rng: &mut R) -> Self {
        let flavor = if rng.gen() {
            CoverageFlavor::Insurance
        } else {
            CoverageFlavor::IceCream
        };

        let count_none = rng.gen_range(1..COVERAGE_BASE);
        let mut counts = [0i64; 3];
        for _ in 0..(COVERAGE_BASE - count_none) {
            // Uniform over the three unordered pairs of options.
            let skipped = rng.gen_range(0..3);
            for (i, count) in counts.iter_mut().enumerate() {
                if i != skipped {
                    *count += 1;
                }
            }
        }

        Self {
            flavor,
            count_a: counts[0],
            count_b: counts[1],
            count_c: counts[2],
            count_none,
        }
    }

    fn prop(&self, count: i64) -> Rational {
        Rational::new(count, COVERAGE_BASE)
    }

    /// Smallest population that makes every proportion a whole count:
    /// the denominator of the gcd of the three proportions.
    fn people(&self) -> i64 {
        self.prop(self.count_a)
            .gcd(&self.prop(self.count_b))
            .gcd(&self.prop(self.count_c))
            .denominator()
    }
}

impl Problem for CoverageChoice {
    fn statement(&self) -> String {
        let propa = prose_fraction(self.prop(self.count_a));
        let propb = prose_fraction(self.prop(self.count_b));
        let propc = prose_fraction(self.prop(self.count_c));
        match self.flavor {
            CoverageFlavor::Insurance => format!(
                "An insurer offers a health plan to the employees of a large \
                 company.  As part of this plan, the individual employees may \
                 choose exactly two of the supplementary coverages A, B, and \
                 C, or they may choose no supplementary coverage.  The \
                 proportions of the company's employees that choose coverages \
                 A, B, and C are {propa}, {propb}, and {propc}, respectively.  \
                 Determine the probability that a randomly chosen employee \
                 will choose no supplementary coverage.",
            ),
            CoverageFlavor::IceCream => format!(
                "An ice cream store sells single- and double-scoop ice cream \
                 cones in vanilla, chocolate, and strawberry flavors.  \
                 Customers who order a double-scoop must choose exactly two \
                 of these flavors.  {propa} of the customers choose a \
                 double-scoop with vanilla, {propb} choose a double-scoop \
                 with chocolate, and {propc} choose a double-scoop with \
                 strawberry.  Determine the probability that a randomly \
                 chosen customer will choose a single-scoop ice cream cone.",
            ),
        }
    }

    fn answer(&self) -> String {
        prose_fraction(self.prop(self.count_none))
    }

    fn solution(&self) -> String {
        let people = self.people();
        let scale = Rational::from(people);
        let choose_a = self.prop(self.count_a) * scale;
        let choose_b = self.prop(self.count_b) * scale;
        let choose_c = self.prop(self.count_c) * scale;
        let total_choices = choose_a + choose_b + choose_c;
        let chose_pair = total_choices / Rational::from(2);
        let choose_none = self.prop(self.count_none) * scale;
        let answer = self.answer();

        match self.flavor {
            CoverageFlavor::Insurance => format!(
                "For simplicity, let's work with numbers of people, instead \
                 of proportions.  The g.c.d.~of the three proportions is \
                 {people}, so suppose there are {people} people.  Then \
                 {choose_a} chose A, {choose_b} chose B, and {choose_c} \
                 chose C, and {total_choices} choices were made in total.  \
                 But each person made 2 choices, so {chose_pair} chose to \
                 take supplementary coverage.  This leaves {choose_none} of \
                 {people} people who made no choice, or a proportion of \
                 {answer}.\n",
            ),
            CoverageFlavor::IceCream => format!(
                "For simplicity, let's work with numbers of people, instead \
                 of proportions.  The g.c.d.~of the three proportions is \
                 {people}, so suppose there are {people} people.  Then \
                 {choose_a} chose vanilla, {choose_b} chose chocolate, and \
                 {choose_c} chose strawberry, and {total_choices} choices \
                 were made in total.  But each person made 2 choices, so \
                 {chose_pair} chose to take a double-scoop.  This leaves \
                 {choose_none} of {people} people who took a single-scoop, \
                 or a proportion of {answer}.\n",
            ),
        }
    }
}

/// Three symmetric risk factors; find the conditional probability of having
/// none, given the absence of one.
///
/// Probabilities are stored in integer percent units: `single` is the chance
/// of exactly one given factor, `pair` of exactly two, and `triple` seeds the
/// all-three region via the stated conditional.
#[derive(Debug, Clone)]
pub struct RiskFactor {
    single: i64,
    pair: i64,
    triple: i64,
}

impl RiskFactor {
    pub fn sample<R: Rng>(rng: &mut R) -> Self {
        // Reject parameter sets whose "none of the three" region would be
        // empty or negative.
        loop {
            let pair = rng.gen_range(2..30);
            let single = rng.gen_range(1..pair);
            let triple = rng.gen_range(1..10);
            if 3 * single + 3 * pair + triple < 100 {
                return Self {
                    single,
                    pair,
                    triple,
                };
            }
        }
    }

    pub fn new(single: i64, pair: i64, triple: i64) -> Self {
        Self {
            single,
            pair,
            triple,
        }
    }

    fn s(&self) -> f64 {
        self.single as f64 / 100.0
    }

    fn d(&self) -> f64 {
        self.pair as f64 / 100.0
    }

    fn t(&self) -> f64 {
        self.triple as f64 / 100.0
    }

    /// P(all three | two given factors) = t / (t + d).
    fn conditional(&self) -> f64 {
        self.t() / (self.t() + self.d())
    }

    fn numeric_answer(&self) -> f64 {
        (1.0 - (3.0 * self.s() + 3.0 * self.d() + self.t()))
            / (1.0 - (self.s() + 2.0 * self.d() + self.t()))
    }
}

impl Problem for RiskFactor {
    fn statement(&self) -> String {
        format!(
            "An actuary is studying the prevalence of three health risk \
             factors, denoted by A, B, and C, within a population of women.  \
             For each of the three factors, the probability is {sprob} that \
             a woman in the population has only this risk factor (and no \
             others).  For any two of the three factors, the probability is \
             {dprob} that she has exactly these two risk factors (but not \
             the other).  The probability that a woman has all three risk \
             factors, given that she has A and B, is {pprob}.  What is the \
             probability that a woman has none of the three risk factors, \
             given that she does not have risk factor A?",
            sprob = dec2(self.s()),
            dprob = dec2(self.d()),
            pprob = dec2(self.conditional()),
        )
    }

    fn answer(&self) -> String {
        format!("{:.3}", self.numeric_answer())
    }

    fn solution(&self) -> String {
        let p_a = self.s() + 2.0 * self.d() + self.t();
        format!(
            r"We are given
\[
P(A \cap B' \cap C') = P(A' \cap B \cap C') = P(A' \cap B' \cap C) =
{sprob}
\]
(having exactly one risk factor means not having either of the other
two).  We are also given
\[
P(A \cap B \cap C') = P(A \cap B' \cap C) = P(A' \cap B \cap C) =
{dprob}.
\]
Finally, we are given
\[
P(A \cap B \cap C \mid A \cap B) = {pprob}.
\]
Then
\[
P(A \cap B \cap C \mid A \cap B) = \frac{{P(A \cap B \cap C)}}{{P(A \cap
B)}} = {pprob}
\]
so
\[
P(A \cap B \cap C) = {pprob} \cdot P(A \cap B).
\]
Let $P(A \cap B \cap C) = x$, so that $P(A \cap B) = x + {dprob}$.  Then
\[
x = P(A \cap B \cap C) = {pprob} \cdot P(A \cap B) = {pprob}(x+{dprob})
\]
So $x = {tprob}$.  The four regions of A then sum to $P(A) =
{sprob} + {dprob} + {dprob} + {tprob} = {aprob}$, so
$P(A') = 1 - P(A) = {approb}$.  The problem asks for
\[
P(A' \cap B' \cap C' \mid A') = \frac{{P(A' \cap B' \cap C')}}{{P(A')}}
= \frac{{P(A' \cap B' \cap C')}}{{{approb}}}
\]
And the numerator is just the complement of all the numbered regions:
\[
P(A' \cap B' \cap C' \mid A') = \frac{{1-(3 \times {sprob} + 3
\times {dprob} + {tprob})}}{{{approb}}} =
\frac{{{num}}}{{{approb}}} = {ans}
\]
",
            sprob = dec2(self.s()),
            dprob = dec2(self.d()),
            tprob = dec2(self.t()),
            pprob = dec2(self.conditional()),
            aprob = dec2(p_a),
            approb = dec2(1.0 - p_a),
            num = dec2(1.0 - (3.0 * self.s() + 3.0 * self.d() + self.t())),
            ans = self.answer(),
        )
    }
}

/// Membership probability for the sampled event sets.
const EVENT_MEMBERSHIP_P: f64 = 0.25;

/// Two overlapping events over a 100-element universe.
#[derive(Debug, Clone)]
pub struct TwoEvent {
    flavor: TwoEventFlavor,
    l: i64,
    r: i64,
    both: i64,
    u: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TwoEventFlavor {
    /// Inclusion-exclusion from the complement of the union
    LabReferral,
    /// `P(A ∪ B) + P(A ∪ B') = P(A) + 1`
    UnionComplement,
}

impl TwoEvent {
    pub fn sample<R: Rng>(rng: &mut R) -> Self {
        let flavor = if rng.gen() {
            TwoEventFlavor::LabReferral
        } else {
            TwoEventFlavor::UnionComplement
        };

        let u = 100;
        let (mut l, mut r, mut both) = (0, 0, 0);
        for _ in 0..u {
            let in_l = rng.gen_bool(EVENT_MEMBERSHIP_P);
            let in_r = rng.gen_bool(EVENT_MEMBERSHIP_P);
            l += i64::from(in_l);
            r += i64::from(in_r);
            both += i64::from(in_l && in_r);
        }

        Self { flavor, l, r, both, u }
    }

    fn union(&self) -> i64 {
        self.l + self.r - self.both
    }

    fn p(&self, count: i64) -> String {
        dec2(count as f64 / self.u as f64)
    }
}

impl Problem for TwoEvent {
    fn statement(&self) -> String {
        match self.flavor {
            TwoEventFlavor::LabReferral => format!(
                "The probability that a visit to a primary care physician's \
                 (PCP) office results in neither lab work nor referral to a \
                 specialist is {pp_neither}.  Of those coming to a PCP's \
                 office, {pp_r} are referred to specialists and {pp_l} \
                 require lab work.  Determine the probability that a visit \
                 to a PCP's office results in both lab work and referral to \
                 a specialist.",
                pp_neither = pct(self.u - self.union(), self.u),
                pp_r = pct(self.r, self.u),
                pp_l = pct(self.l, self.u),
            ),
            TwoEventFlavor::UnionComplement => format!(
                r"You are given $P(A \cup B) = {p_union}$ and $P(A \cup B') = {p_l_or_nr}$.  Determine $P(A)$.",
                p_union = self.p(self.union()),
                p_l_or_nr = self.p(self.u - (self.r - self.both)),
            ),
        }
    }

    fn answer(&self) -> String {
        match self.flavor {
            TwoEventFlavor::LabReferral => self.p(self.both),
            TwoEventFlavor::UnionComplement => self.p(self.l),
        }
    }

    fn solution(&self) -> String {
        match self.flavor {
            TwoEventFlavor::LabReferral => format!(
                r"Label the classes like so:
\begin{{itemize}}
\item[$L$:] lab work needed
\item[$R$:] referral to a specialist given
\end{{itemize}}
We are given $P(L' \cap R') = {p_neither}$, $P(R) ={p_r}$, and $P(L)={p_l}$.
It follows that $P(L \cup R) = 1 - P(L' \cap R') = {p_union}$, and then
\[
P(L \cap R) = P(L) + P(R) - P(L \cup R) = {p_l} + {p_r} - {p_union} =
{p_both}.
\]
So the probability of both is ${p_both}$.
",
                p_neither = self.p(self.u - self.union()),
                p_r = self.p(self.r),
                p_l = self.p(self.l),
                p_union = self.p(self.union()),
                p_both = self.p(self.both),
            ),
            TwoEventFlavor::UnionComplement => format!(
                r"$P(A \cup B) = P(A) + P(B) - P(A \cap B)$ and $P(A \cup
B') = P(A) + P(B') - P(A \cap B')$.  We use the relationship $P(A) =
P(A \cap B) + P(A \cap B')$.  Then
\begin{{align*}}
P(A \cup B) + P(A \cup B')
&= P(A) + P(B) - P(A \cap B) \\&\phantom{{=}}+ P(A) + P(B') - P(A \cap B')\\
&= 2P(A) + 1 - P(A) = P(A) + 1
\end{{align*}}
Since $P(B) + P(B') = 1$.  Therefore, ${p_union} + {p_l_or_nr} = P(A) + 1$ so
that $P(A) = {p_l}$.
",
                p_union = self.p(self.union()),
                p_l_or_nr = self.p(self.u - (self.r - self.both)),
                p_l = self.p(self.l),
            ),
        }
    }
}

/// Three overlapping events over a 100-element universe; find the percentage
/// outside all three by DeMorgan plus inclusion-exclusion.
#[derive(Debug, Clone)]
pub struct ThreeEvent {
    a: i64,
    b: i64,
    c: i64,
    ab: i64,
    ac: i64,
    bc: i64,
    abc: i64,
    u: i64,
}

impl ThreeEvent {
    pub fn sample<R: Rng>(rng: &mut R) -> Self {
        let u = 100;
        let mut counts = Self {
            a: 0,
            b: 0,
            c: 0,
            ab: 0,
            ac: 0,
            bc: 0,
            abc: 0,
            u,
        };
        for _ in 0..u {
            let in_a = rng.gen_bool(EVENT_MEMBERSHIP_P);
            let in_b = rng.gen_bool(EVENT_MEMBERSHIP_P);
            let in_c = rng.gen_bool(EVENT_MEMBERSHIP_P);
            counts.a += i64::from(in_a);
            counts.b += i64::from(in_b);
            counts.c += i64::from(in_c);
            counts.ab += i64::from(in_a && in_b);
            counts.ac += i64::from(in_a && in_c);
            counts.bc += i64::from(in_b && in_c);
            counts.abc += i64::from(in_a && in_b && in_c);
        }
        counts
    }

    fn union(&self) -> i64 {
        self.a + self.b + self.c - self.ab - self.ac - self.bc + self.abc
    }
}

impl Problem for ThreeEvent {
    fn statement(&self) -> String {
        format!(
            r"A survey of a group's viewing habits over the last
year revealed the following information:
\begin{{itemize}}
\item {pp_a} watched gymnastics
\item {pp_b} watched baseball
\item {pp_c} watched soccer
\item {pp_ab} watched gymnastics and baseball
\item {pp_bc} watched baseball and soccer
\item {pp_ac} watched gymnastics and soccer
\item {pp_abc} watched all three sports
\end{{itemize}}
Calculate the percentage of the group that watched none of the three
sports during the last year.",
            pp_a = pct(self.a, self.u),
            pp_b = pct(self.b, self.u),
            pp_c = pct(self.c, self.u),
            pp_ab = pct(self.ab, self.u),
            pp_bc = pct(self.bc, self.u),
            pp_ac = pct(self.ac, self.u),
            pp_abc = pct(self.abc, self.u),
        )
    }

    fn answer(&self) -> String {
        pct(self.u - self.union(), self.u)
    }

    fn solution(&self) -> String {
        format!(
            r"Label the classes as follows:
\begin{{itemize}}
\item[$G$:] watched gymnastics
\item[$B$:] watched baseball
\item[$S$:] watched soccer
\end{{itemize}}
We need to find $P(G' \cap B' \cap S')$.  By DeMorgan's law we have
\[
P(G' \cap B' \cap S') = 1 - P(G \cup B \cup S).
\]
We use the relationship
\begin{{align*}}
P(G \cup B \cup S) &= P(G) + P(B) + P(S) \\&\phantom{{=}}- (P(G \cap B) + P(G \cap S) +
P(B \cap S)) \\&\phantom{{=}}+ P(G \cap B \cap S)
\end{{align*}}
and the values from the statement:
\begin{{itemize}}
\item $P(G) = {pp_a}$
\item $P(B) = {pp_b}$
\item $P(S) = {pp_c}$
\item $P(G\cap B) = {pp_ab}$
\item $P(B\cap S) = {pp_bc}$
\item $P(G\cap S) = {pp_ac}$
\item $P(G\cap B\cap S) = {pp_abc}$
\end{{itemize}}
Then $P(G \cup B \cup S) = {p_union}$ and $P(G' \cap B' \cap S') = 1 -
{p_union} = {p_none}$.
",
            pp_a = pct(self.a, self.u),
            pp_b = pct(self.b, self.u),
            pp_c = pct(self.c, self.u),
            pp_ab = pct(self.ab, self.u),
            pp_bc = pct(self.bc, self.u),
            pp_ac = pct(self.ac, self.u),
            pp_abc = pct(self.abc, self.u),
            p_union = dec2(self.union() as f64 / self.u as f64),
            p_none = dec2((self.u - self.union()) as f64 / self.u as f64),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_format_percent() {
        assert_eq!(format_percent(400, 1000), "40\\%");
        assert_eq!(format_percent(123, 1000), "12.3\\%");
        assert_eq!(pct(25, 100), "25\\%");
    }

    #[test]
    fn test_prose_fraction() {
        assert_eq!(prose_fraction(Rational::from(3)), "3");
        assert_eq!(
            prose_fraction(Rational::new(7, 10)),
            r"\ensuremath{\frac{7}{10}}"
        );
    }

    #[test]
    fn test_survey_partition_is_consistent() {
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..100 {
            let prob = SurveyProbability::sample(&mut rng);
            let u = prob.universe();
            assert!(prob.only_a + prob.only_b + prob.both < u);
            assert_ne!(prob.cond_a, prob.cond_b);
            // Statement names both conditions
            let statement = prob.statement();
            let (ca, cb) = prob.conds();
            assert!(statement.contains(ca.plural));
            assert!(statement.contains(cb.sing));
        }
    }

    #[test]
    fn test_survey_answer_percent() {
        let prob = SurveyProbability {
            scenario: 0,
            only_a: 400,
            only_b: 100,
            both: 77,
            cond_a: 0,
            cond_b: 1,
        };
        // (477 - 77) / 1000 = 40%
        assert_eq!(prob.answer(), "40\\%");
    }

    #[test]
    fn test_two_urn_answer_is_blue_count() {
        let prob = TwoUrn::new([12, 5], [8, 14]);
        assert_eq!(prob.answer(), "14");
        assert!(prob.solution().contains("x &= 14"));
        // Statement describes the second urn's red count
        assert!(prob.statement().contains("second urn contains 5 red balls"));
    }

    #[test]
    fn test_two_urn_sample_bounds() {
        let mut rng = StdRng::seed_from_u64(5);
        for _ in 0..200 {
            let prob = TwoUrn::sample(&mut rng);
            for i in 0..2 {
                assert!(prob.red[i] >= 1 && prob.blue[i] >= 1);
                assert!(prob.total(i) <= 20);
            }
        }
    }

    #[test]
    fn test_coverage_choice_accounting() {
        let mut rng = StdRng::seed_from_u64(13);
        for _ in 0..100 {
            let prob = CoverageChoice::sample(&mut rng);
            // Every chooser made exactly two choices
            assert_eq!(
                prob.count_a + prob.count_b + prob.count_c,
                2 * (COVERAGE_BASE - prob.count_none)
            );
        }
    }

    #[test]
    fn test_coverage_choice_solution_population() {
        let prob = CoverageChoice {
            flavor: CoverageFlavor::Insurance,
            count_a: 4,
            count_b: 4,
            count_c: 4,
            count_none: 14,
        };
        // Proportions 1/5 each: common population is 5
        assert_eq!(prob.people(), 5);
        assert_eq!(prob.answer(), r"\ensuremath{\frac{7}{10}}");
        assert!(prob.solution().contains("suppose there are 5 people"));
    }

    #[test]
    fn test_risk_factor_answer_formula() {
        let prob = RiskFactor::new(10, 12, 5);
        // (1 - (0.30 + 0.36 + 0.05)) / (1 - (0.10 + 0.24 + 0.05)) = 0.29/0.61
        assert_eq!(prob.answer(), "0.475");
        assert!(prob.statement().contains("0.10"));
        assert!(prob.statement().contains("0.12"));
    }

    #[test]
    fn test_risk_factor_sampling_stays_feasible() {
        let mut rng = StdRng::seed_from_u64(17);
        for _ in 0..200 {
            let prob = RiskFactor::sample(&mut rng);
            assert!(prob.single < prob.pair);
            assert!(3 * prob.single + 3 * prob.pair + prob.triple < 100);
            assert!(prob.numeric_answer() > 0.0);
        }
    }

    #[test]
    fn test_two_event_lab_referral_identity() {
        let prob = TwoEvent {
            flavor: TwoEventFlavor::LabReferral,
            l: 30,
            r: 25,
            both: 10,
            u: 100,
        };
        // P(L ∩ R) = P(L) + P(R) - P(L ∪ R)
        assert_eq!(prob.answer(), "0.10");
        assert!(prob.statement().contains("55\\%")); // neither: 100 - 45
        assert!(prob.solution().contains("0.45")); // union
    }

    #[test]
    fn test_two_event_union_complement_identity() {
        let prob = TwoEvent {
            flavor: TwoEventFlavor::UnionComplement,
            l: 30,
            r: 25,
            both: 10,
            u: 100,
        };
        // P(A ∪ B) + P(A ∪ B') = P(A) + 1
        assert_eq!(prob.answer(), "0.30");
        assert!(prob.statement().contains("0.45"));
        assert!(prob.statement().contains("0.85")); // 1 - (r - both)/u
    }

    #[test]
    fn test_three_event_inclusion_exclusion() {
        let prob = ThreeEvent {
            a: 28,
            b: 29,
            c: 19,
            ab: 14,
            ac: 10,
            bc: 12,
            abc: 8,
            u: 100,
        };
        assert_eq!(prob.union(), 48);
        assert_eq!(prob.answer(), "52\\%");
        assert!(prob.solution().contains("0.48"));
        assert!(prob.solution().contains("0.52"));
    }

    #[test]
    fn test_three_event_counts_are_nested() {
        let mut rng = StdRng::seed_from_u64(23);
        for _ in 0..50 {
            let prob = ThreeEvent::sample(&mut rng);
            assert!(prob.abc <= prob.ab && prob.ab <= prob.a);
            assert!(prob.abc <= prob.bc && prob.bc <= prob.b);
            assert!(prob.abc <= prob.ac && prob.ac <= prob.c);
            assert!(prob.union() <= prob.u);
        }
    }
}
