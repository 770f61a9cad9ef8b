//! Exact eigenvalue solving and closed-form classification.
//!
//! A gate-passing factorization is solved factor by factor. Working in the
//! even part `h(y)` (with `y = x²`), the magnitudes of the purely imaginary
//! eigenvalues are square roots of the negated `h`-roots:
//!
//! - linear factor `(y + c)`, `c > 0` → magnitude `√c`, simplified exactly;
//! - irreducible quadratic `(y² + by + c)` → magnitudes
//!   `√((b ± √(b²−4c))/2)`, recognized as `2·cos(kπ/n)` / `2·sin(kπ/n)` by
//!   numeric proximity, denested to `(√(b+2s) ± √(b−2s))/2` when `c = s²`,
//!   or kept as a depth-2 nested radical;
//! - higher-degree factors (reachable only through the known-family bypass
//!   or a raised gate threshold) are solved numerically and accepted as
//!   closed forms only when a trigonometric match lands — an unmatched
//!   numeric root stays a floating-point approximation and is never nice.
//!
//! Niceness is decided from the structural representation, never by
//! inspecting rendered text; the display-length guard remains only as an
//! anti-pathology backstop. A negative magnitude-square (real eigenvalues)
//! or a complex one cannot arise from a skew-symmetric matrix and is
//! surfaced as a `real` / `complex` anomaly rather than hidden.

use crate::config::SearchConfig;
use crate::factor::{integer_sqrt, Factorization};
use crate::poly::IntPoly;

/// Trigonometric flavor of a recognized magnitude.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrigKind {
    /// `2·cos(kπ/n)`
    Cos,
    /// `2·sin(kπ/n)`
    Sin,
}

/// A reduced radical expression `(num/den)·√radicand`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Radical {
    /// Numerator of the rational coefficient.
    pub num: i64,
    /// Denominator of the rational coefficient (positive).
    pub den: i64,
    /// Square-free radicand (1 for rational values).
    pub radicand: i64,
}

impl Radical {
    /// Builds and fully reduces `(num/den)·√radicand`: square factors move
    /// out of the radicand, then the fraction is lowered.
    #[must_use]
    pub fn reduced(mut num: i64, mut den: i64, mut radicand: i64) -> Self {
        debug_assert!(den > 0 && radicand >= 0);
        if radicand == 0 {
            return Self { num: 0, den: 1, radicand: 1 };
        }
        let mut f = 2i64;
        while f * f <= radicand {
            while radicand % (f * f) == 0 {
                radicand /= f * f;
                num *= f;
            }
            f += 1;
        }
        let g = gcd(num.unsigned_abs(), den.unsigned_abs()).max(1) as i64;
        num /= g;
        den /= g;
        Self { num, den, radicand }
    }

    /// Whether the value is rational (radicand reduced to 1).
    #[must_use]
    pub fn is_rational(&self) -> bool {
        self.radicand == 1
    }

    /// Floating-point value.
    #[must_use]
    pub fn approx(&self) -> f64 {
        self.num as f64 / self.den as f64 * (self.radicand as f64).sqrt()
    }

    /// Plain-text form, e.g. `sqrt(2)`, `2*sqrt(2)`, `sqrt(2)/2`, `3/2`.
    #[must_use]
    pub fn raw(&self) -> String {
        let core = if self.radicand == 1 {
            self.num.to_string()
        } else if self.num == 1 {
            format!("sqrt({})", self.radicand)
        } else if self.num == -1 {
            format!("-sqrt({})", self.radicand)
        } else {
            format!("{}*sqrt({})", self.num, self.radicand)
        };
        if self.den == 1 {
            core
        } else {
            format!("{core}/{}", self.den)
        }
    }

    /// Unicode display form, e.g. `√2`, `2√2`, `√2/2`.
    #[must_use]
    pub fn display(&self) -> String {
        let core = if self.radicand == 1 {
            self.num.to_string()
        } else if self.num == 1 {
            format!("√{}", self.radicand)
        } else if self.num == -1 {
            format!("-√{}", self.radicand)
        } else {
            format!("{}√{}", self.num, self.radicand)
        };
        if self.den == 1 {
            core
        } else {
            format!("{core}/{}", self.den)
        }
    }
}

fn gcd(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        let t = a % b;
        a = b;
        b = t;
    }
    a
}

/// Structured closed-form descriptor for an eigenvalue magnitude.
#[derive(Debug, Clone, PartialEq)]
pub enum ClosedForm {
    /// An exact integer.
    Integer(i64),
    /// A single reduced radical `k·√d`.
    Sqrt(Radical),
    /// `2·cos(kπ/n)` or `2·sin(kπ/n)`.
    Trig {
        /// Cosine or sine.
        kind: TrigKind,
        /// Numerator of the angle fraction.
        k: u32,
        /// Denominator of the angle fraction.
        den: u32,
    },
    /// A denested sum `a ± b` of two reduced radicals (`a` the larger).
    SqrtSum {
        /// Leading term.
        a: Radical,
        /// Trailing term.
        b: Radical,
        /// Whether the trailing term is subtracted.
        minus: bool,
    },
    /// Depth-2 nested radical `√((base ± √disc)/2)`.
    Nested {
        /// Rational part of the doubled inner value.
        base: i64,
        /// Discriminant under the inner root.
        disc: i64,
        /// Sign choice of the inner root.
        plus: bool,
    },
    /// Floating-point approximation only — never a nice closed form.
    Approximate(f64),
}

impl ClosedForm {
    /// Floating-point value of the magnitude.
    #[must_use]
    pub fn approx(&self) -> f64 {
        match self {
            Self::Integer(v) => *v as f64,
            Self::Sqrt(r) => r.approx(),
            Self::Trig { kind, k, den } => {
                let angle = std::f64::consts::PI * f64::from(*k) / f64::from(*den);
                match kind {
                    TrigKind::Cos => 2.0 * angle.cos(),
                    TrigKind::Sin => 2.0 * angle.sin(),
                }
            }
            Self::SqrtSum { a, b, minus } => {
                if *minus {
                    a.approx() - b.approx()
                } else {
                    a.approx() + b.approx()
                }
            }
            Self::Nested { base, disc, plus } => {
                let inner = (*disc as f64).sqrt();
                let doubled = if *plus {
                    *base as f64 + inner
                } else {
                    *base as f64 - inner
                };
                (doubled / 2.0).sqrt()
            }
            Self::Approximate(v) => *v,
        }
    }

    /// Whether this is an exact symbolic representation (not a float).
    #[must_use]
    pub fn is_exact(&self) -> bool {
        !matches!(self, Self::Approximate(_))
    }

    /// Plain-text magnitude, sympy-flavored.
    #[must_use]
    pub fn raw(&self) -> String {
        match self {
            Self::Integer(v) => v.to_string(),
            Self::Sqrt(r) => r.raw(),
            Self::Trig { kind, k, den } => {
                let func = match kind {
                    TrigKind::Cos => "cos",
                    TrigKind::Sin => "sin",
                };
                let angle = if *k == 1 {
                    format!("pi/{den}")
                } else {
                    format!("{k}*pi/{den}")
                };
                format!("2*{func}({angle})")
            }
            Self::SqrtSum { a, b, minus } => {
                let op = if *minus { "-" } else { "+" };
                format!("({} {} {})", a.raw(), op, b.raw())
            }
            Self::Nested { base, disc, plus } => {
                format!("sqrt({})", nested_inner(*base, *disc, *plus, false))
            }
            Self::Approximate(v) => format!("{v}"),
        }
    }

    /// Unicode display magnitude.
    #[must_use]
    pub fn display(&self) -> String {
        match self {
            Self::Integer(v) => v.to_string(),
            Self::Sqrt(r) => r.display(),
            Self::Trig { kind, k, den } => {
                let func = match kind {
                    TrigKind::Cos => "cos",
                    TrigKind::Sin => "sin",
                };
                let angle = if *k == 1 {
                    format!("π/{den}")
                } else {
                    format!("{k}π/{den}")
                };
                format!("2{func}({angle})")
            }
            Self::SqrtSum { a, b, minus } => {
                let op = if *minus { "-" } else { "+" };
                format!("({} {} {})", a.display(), op, b.display())
            }
            Self::Nested { base, disc, plus } => {
                format!("√({})", nested_inner(*base, *disc, *plus, true))
            }
            Self::Approximate(v) => format!("{v:.6}"),
        }
    }

    /// Short tag for the output document's `js.type` field.
    #[must_use]
    pub fn type_tag(&self) -> &'static str {
        match self {
            Self::Integer(_) => "integer",
            Self::Sqrt(_) => "sqrt",
            Self::Trig { .. } => "trig",
            Self::SqrtSum { .. } | Self::Nested { .. } => "radical",
            Self::Approximate(_) => "approx",
        }
    }
}

/// Renders the inner expression of `√((base ± √disc)/2)` with the inner
/// radical reduced, folding the halving into the terms when both are even.
fn nested_inner(base: i64, disc: i64, plus: bool, unicode: bool) -> String {
    let inner = Radical::reduced(1, 1, disc);
    let op = if plus { "+" } else { "-" };
    let render = |r: &Radical| if unicode { r.display() } else { r.raw() };
    if base % 2 == 0 && inner.num % 2 == 0 && inner.den == 1 {
        let halved = Radical::reduced(inner.num / 2, 1, inner.radicand);
        format!("{} {op} {}", base / 2, render(&halved))
    } else {
        let halved = Radical::reduced(inner.num, inner.den * 2, inner.radicand);
        let base_str = if base % 2 == 0 {
            (base / 2).to_string()
        } else {
            format!("{base}/2")
        };
        format!("{base_str} {op} {}", render(&halved))
    }
}

/// One exactly-solved root of the characteristic polynomial.
#[derive(Debug, Clone, PartialEq)]
pub enum RootValue {
    /// The zero eigenvalue.
    Zero,
    /// `±i` times an exact or approximate magnitude.
    Imaginary {
        /// Sign of the imaginary part.
        positive: bool,
        /// Magnitude descriptor.
        magnitude: ClosedForm,
    },
    /// A real eigenvalue — impossible for a skew-symmetric input, surfaced
    /// as an anomaly.
    Real {
        /// Sign of the value.
        positive: bool,
        /// Magnitude descriptor.
        magnitude: ClosedForm,
    },
    /// A non-real, non-imaginary root — likewise an anomaly.
    Complex,
    /// Root solving produced no usable value.
    Unknown,
}

impl RootValue {
    /// Category string for the output document.
    #[must_use]
    pub fn category(&self) -> &'static str {
        match self {
            Self::Zero => "zero",
            Self::Imaginary { .. } => "pure_imaginary",
            Self::Real { .. } => "real",
            Self::Complex => "complex",
            Self::Unknown => "unknown",
        }
    }

    fn category_rank(&self) -> u8 {
        match self {
            Self::Zero => 0,
            Self::Imaginary { .. } => 1,
            Self::Real { .. } => 2,
            Self::Complex => 3,
            Self::Unknown => 4,
        }
    }

    /// Signed numeric value of the "interesting" part: the imaginary part
    /// for imaginary roots, the value itself for real roots.
    #[must_use]
    pub fn approx(&self) -> Option<f64> {
        match self {
            Self::Zero => Some(0.0),
            Self::Imaginary { positive, magnitude } | Self::Real { positive, magnitude } => {
                let m = magnitude.approx();
                Some(if *positive { m } else { -m })
            }
            Self::Complex | Self::Unknown => None,
        }
    }
}

/// One eigenvalue with multiplicity.
#[derive(Debug, Clone, PartialEq)]
pub struct EigenvalueRecord {
    /// The solved root.
    pub value: RootValue,
    /// Algebraic multiplicity.
    pub multiplicity: u32,
}

impl EigenvalueRecord {
    /// Sympy-flavored exact text, e.g. `sqrt(3)*I`.
    #[must_use]
    pub fn raw(&self) -> String {
        match &self.value {
            RootValue::Zero => "0".to_string(),
            RootValue::Imaginary { positive, magnitude } => {
                let sign = if *positive { "" } else { "-" };
                match magnitude {
                    ClosedForm::Integer(1) => format!("{sign}I"),
                    _ => format!("{sign}{}*I", magnitude.raw()),
                }
            }
            RootValue::Real { positive, magnitude } => {
                let sign = if *positive { "" } else { "-" };
                format!("{sign}{}", magnitude.raw())
            }
            RootValue::Complex => "unresolved complex pair".to_string(),
            RootValue::Unknown => "unresolved root".to_string(),
        }
    }

    /// Human display, e.g. `±√3·i` (both members of a conjugate pair carry
    /// the `±` form, matching the report convention).
    #[must_use]
    pub fn display(&self) -> String {
        match &self.value {
            RootValue::Zero => "0".to_string(),
            RootValue::Imaginary { magnitude, .. } => match magnitude {
                ClosedForm::Integer(1) => "±i".to_string(),
                _ => format!("±{}·i", magnitude.display()),
            },
            RootValue::Real { positive, magnitude } => {
                let sign = if *positive { "" } else { "-" };
                format!("{sign}{}", magnitude.display())
            }
            RootValue::Complex => "complex (anomaly)".to_string(),
            RootValue::Unknown => "unresolved".to_string(),
        }
    }

    /// Structural niceness: exact representation, within the display guard.
    #[must_use]
    pub fn is_nice(&self, config: &SearchConfig) -> bool {
        let exact = match &self.value {
            RootValue::Zero => true,
            RootValue::Imaginary { magnitude, .. } | RootValue::Real { magnitude, .. } => {
                magnitude.is_exact()
            }
            RootValue::Complex | RootValue::Unknown => false,
        };
        exact && self.display().len() <= config.display_length_guard
    }
}

/// Result of classifying one polynomial's roots.
#[derive(Debug, Clone, PartialEq)]
pub struct Classification {
    /// All roots with multiplicities, deterministically ordered.
    pub records: Vec<EigenvalueRecord>,
    /// Whether every root is a nice closed form.
    pub all_nice: bool,
}

/// Solves and classifies every root of a factored characteristic polynomial.
///
/// Never fails outright: anomalies and unsolved factors become `real` /
/// `complex` / `unknown` records with `all_nice = false`, and the caller
/// decides the statistics bucket.
#[must_use]
pub fn classify(factorization: &Factorization, config: &SearchConfig) -> Classification {
    let mut records = Vec::new();

    if factorization.zero_multiplicity > 0 {
        records.push(EigenvalueRecord {
            value: RootValue::Zero,
            multiplicity: factorization.zero_multiplicity,
        });
    }

    for factor in &factorization.even_factors {
        let m = factor.multiplicity;
        match factor.poly.degree() {
            1 => classify_linear(&factor.poly, m, &mut records),
            2 => classify_quadratic(&factor.poly, m, config, &mut records),
            _ => classify_numeric(&factor.poly, m, config, &mut records),
        }
    }

    records.sort_by(|a, b| {
        let ka = (a.value.category_rank(), a.value.approx().map(f64::abs));
        let kb = (b.value.category_rank(), b.value.approx().map(f64::abs));
        ka.partial_cmp(&kb).unwrap_or(std::cmp::Ordering::Equal).then(
            // Positive member of a conjugate pair first.
            b.value
                .approx()
                .partial_cmp(&a.value.approx())
                .unwrap_or(std::cmp::Ordering::Equal),
        )
    });

    let all_nice = records.iter().all(|r| r.is_nice(config));
    Classification { records, all_nice }
}

/// Linear factor `y + c`: magnitude squared is exactly `c`.
fn classify_linear(poly: &IntPoly, multiplicity: u32, records: &mut Vec<EigenvalueRecord>) {
    let Ok(c) = i64::try_from(poly.constant()) else {
        records.push(EigenvalueRecord {
            value: RootValue::Unknown,
            multiplicity: 2 * multiplicity,
        });
        return;
    };
    if c > 0 {
        let magnitude = exact_sqrt_form(c);
        push_pair(records, multiplicity, |positive| RootValue::Imaginary {
            positive,
            magnitude: magnitude.clone(),
        });
    } else {
        // Positive h-root: real eigenvalues, a spectral anomaly.
        let magnitude = exact_sqrt_form(-c);
        push_pair(records, multiplicity, |positive| RootValue::Real {
            positive,
            magnitude: magnitude.clone(),
        });
    }
}

/// Irreducible quadratic `y² + by + c`: two magnitude squares
/// `(b ± √(b²−4c))/2`.
fn classify_quadratic(
    poly: &IntPoly,
    multiplicity: u32,
    config: &SearchConfig,
    records: &mut Vec<EigenvalueRecord>,
) {
    let (Ok(b), Ok(c)) = (i64::try_from(poly.coeff(1)), i64::try_from(poly.constant())) else {
        records.push(EigenvalueRecord {
            value: RootValue::Unknown,
            multiplicity: 4 * multiplicity,
        });
        return;
    };
    let disc = b as i128 * b as i128 - 4 * c as i128;
    if disc < 0 {
        // Complex magnitude squares: cannot happen for a skew input.
        records.push(EigenvalueRecord {
            value: RootValue::Complex,
            multiplicity: 4 * multiplicity,
        });
        return;
    }
    let Ok(disc) = i64::try_from(disc) else {
        records.push(EigenvalueRecord {
            value: RootValue::Unknown,
            multiplicity: 4 * multiplicity,
        });
        return;
    };

    for plus in [false, true] {
        let sqrt_disc = (disc as f64).sqrt();
        let mag_sq = if plus {
            (b as f64 + sqrt_disc) / 2.0
        } else {
            (b as f64 - sqrt_disc) / 2.0
        };
        if mag_sq < 0.0 {
            // Real eigenvalues with an exactly known nested magnitude.
            let magnitude = ClosedForm::Nested { base: -b, disc, plus: !plus };
            push_pair(records, multiplicity, |positive| RootValue::Real {
                positive,
                magnitude: magnitude.clone(),
            });
            continue;
        }
        let mu = mag_sq.sqrt();
        let magnitude = match_trig(mu, config)
            .or_else(|| denest(b, c, plus))
            .unwrap_or(ClosedForm::Nested { base: b, disc, plus });
        push_pair(records, multiplicity, |positive| RootValue::Imaginary {
            positive,
            magnitude: magnitude.clone(),
        });
    }
}

/// Degree ≥ 3 factor: roots found numerically, accepted as closed forms
/// only through trigonometric recognition.
fn classify_numeric(
    poly: &IntPoly,
    multiplicity: u32,
    config: &SearchConfig,
    records: &mut Vec<EigenvalueRecord>,
) {
    let degree = poly.degree();
    let roots = real_roots(poly);
    if roots.len() != degree {
        records.push(EigenvalueRecord {
            value: RootValue::Unknown,
            multiplicity: 2 * degree as u32 * multiplicity,
        });
        return;
    }
    for root in roots {
        let mag_sq = -root;
        if mag_sq < 0.0 {
            let magnitude = ClosedForm::Approximate((-mag_sq).sqrt());
            push_pair(records, multiplicity, |positive| RootValue::Real {
                positive,
                magnitude: magnitude.clone(),
            });
            continue;
        }
        let mu = mag_sq.sqrt();
        let magnitude = match_trig(mu, config).unwrap_or(ClosedForm::Approximate(mu));
        push_pair(records, multiplicity, |positive| RootValue::Imaginary {
            positive,
            magnitude: magnitude.clone(),
        });
    }
}

fn push_pair(
    records: &mut Vec<EigenvalueRecord>,
    multiplicity: u32,
    mut make: impl FnMut(bool) -> RootValue,
) {
    for positive in [true, false] {
        records.push(EigenvalueRecord {
            value: make(positive),
            multiplicity,
        });
    }
}

/// Exact form of `√v` for a positive integer `v`.
fn exact_sqrt_form(v: i64) -> ClosedForm {
    match integer_sqrt(i128::from(v)) {
        Some(s) => ClosedForm::Integer(s as i64),
        None => ClosedForm::Sqrt(Radical::reduced(1, 1, v)),
    }
}

/// Attempts to denest `√((b ± √(b²−4c))/2)` into `(√(b+2s) ± √(b−2s))/2`,
/// which works exactly when `c = s²`.
fn denest(b: i64, c: i64, plus: bool) -> Option<ClosedForm> {
    let s = integer_sqrt(i128::from(c))? as i64;
    if b - 2 * s < 0 || b + 2 * s < 0 {
        return None;
    }
    let a = Radical::reduced(1, 2, b + 2 * s);
    let t = Radical::reduced(1, 2, b - 2 * s);
    Some(ClosedForm::SqrtSum { a, b: t, minus: !plus })
}

/// Matches a magnitude against `2·cos(kπ/n)` and `2·sin(kπ/n)` for coprime
/// `k < n` up to the configured denominator limit, smallest denominator
/// first, cosine before sine.
fn match_trig(mu: f64, config: &SearchConfig) -> Option<ClosedForm> {
    let tol = config.match_tolerance;
    if !(tol..=2.0 + tol).contains(&mu) {
        return None;
    }
    for den in 2..=config.trig_denominator_limit {
        for k in 1..den {
            if gcd(u64::from(k), u64::from(den)) != 1 {
                continue;
            }
            let angle = std::f64::consts::PI * f64::from(k) / f64::from(den);
            if (2.0 * angle.cos() - mu).abs() < tol {
                return Some(ClosedForm::Trig { kind: TrigKind::Cos, k, den });
            }
        }
        for k in 1..=den / 2 {
            if gcd(u64::from(k), u64::from(den)) != 1 {
                continue;
            }
            let angle = std::f64::consts::PI * f64::from(k) / f64::from(den);
            if (2.0 * angle.sin() - mu).abs() < tol {
                return Some(ClosedForm::Trig { kind: TrigKind::Sin, k, den });
            }
        }
    }
    None
}

/// All real roots of a polynomial with distinct real roots, ascending.
/// Sign-change scan inside the Cauchy bound plus bisection.
fn real_roots(poly: &IntPoly) -> Vec<f64> {
    let bound = 1.0
        + poly
            .coeffs()
            .iter()
            .map(|c| (*c as f64).abs())
            .fold(0.0f64, f64::max);
    let steps = 20_000usize;
    let width = 2.0 * bound / steps as f64;
    let mut roots = Vec::new();
    let mut prev_x = -bound;
    let mut prev_v = poly.eval_f64(prev_x);
    for i in 1..=steps {
        let x = -bound + i as f64 * width;
        let v = poly.eval_f64(x);
        if prev_v == 0.0 {
            roots.push(prev_x);
        } else if prev_v * v < 0.0 {
            roots.push(bisect(poly, prev_x, x));
        }
        prev_x = x;
        prev_v = v;
    }
    if prev_v == 0.0 {
        roots.push(prev_x);
    }
    roots
}

fn bisect(poly: &IntPoly, mut lo: f64, mut hi: f64) -> f64 {
    let mut flo = poly.eval_f64(lo);
    for _ in 0..200 {
        let mid = (lo + hi) / 2.0;
        let fmid = poly.eval_f64(mid);
        if fmid == 0.0 {
            return mid;
        }
        if flo * fmid < 0.0 {
            hi = mid;
        } else {
            lo = mid;
            flo = fmid;
        }
    }
    (lo + hi) / 2.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::factor::factor;
    use crate::graph::Graph;
    use crate::matrix::SkewMatrix;
    use crate::poly::CharPoly;

    fn classify_graph(n: usize, edges: Vec<(usize, usize)>) -> Classification {
        let g = Graph::new(n, edges);
        let p = CharPoly::compute(&SkewMatrix::from_graph(&g)).unwrap();
        classify(&factor(&p).unwrap(), &SearchConfig::default())
    }

    #[test]
    fn radical_reduction() {
        assert_eq!(Radical::reduced(1, 2, 8), Radical { num: 1, den: 1, radicand: 2 });
        assert_eq!(Radical::reduced(1, 2, 4), Radical { num: 1, den: 1, radicand: 1 });
        assert_eq!(Radical::reduced(1, 1, 12), Radical { num: 2, den: 1, radicand: 3 });
        assert_eq!(Radical::reduced(1, 2, 2).raw(), "sqrt(2)/2");
    }

    #[test]
    fn empty_graph_is_all_zero() {
        let c = classify_graph(3, vec![]);
        assert!(c.all_nice);
        assert_eq!(c.records.len(), 1);
        assert_eq!(c.records[0].value, RootValue::Zero);
        assert_eq!(c.records[0].multiplicity, 3);
    }

    #[test]
    fn triangle_has_sqrt3_magnitudes() {
        let c = classify_graph(3, vec![(0, 1), (0, 2), (1, 2)]);
        assert!(c.all_nice);
        assert_eq!(c.records.len(), 3);
        assert_eq!(c.records[0].value, RootValue::Zero);
        let mags: Vec<f64> = c.records[1..]
            .iter()
            .filter_map(|r| r.value.approx())
            .collect();
        assert!((mags[0] - 3.0f64.sqrt()).abs() < 1e-12);
        assert!((mags[1] + 3.0f64.sqrt()).abs() < 1e-12);
        assert_eq!(c.records[1].raw(), "sqrt(3)*I");
        assert_eq!(c.records[2].raw(), "-sqrt(3)*I");
        assert_eq!(c.records[1].display(), "±√3·i");
    }

    #[test]
    fn single_edge_is_plus_minus_i() {
        let c = classify_graph(2, vec![(0, 1)]);
        assert!(c.all_nice);
        assert_eq!(c.records[0].raw(), "I");
        assert_eq!(c.records[1].raw(), "-I");
        assert_eq!(c.records[0].display(), "±i");
    }

    #[test]
    fn path_p4_matches_golden_ratio_cosines() {
        let c = classify_graph(4, vec![(0, 1), (1, 2), (2, 3)]);
        assert!(c.all_nice);
        assert_eq!(c.records.len(), 4);
        for r in &c.records {
            match &r.value {
                RootValue::Imaginary { magnitude, .. } => {
                    assert!(matches!(
                        magnitude,
                        ClosedForm::Trig { kind: TrigKind::Cos, den: 5, .. }
                    ));
                }
                other => panic!("unexpected root {other:?}"),
            }
        }
        // Magnitudes are 2cos(π/5) = φ and 2cos(2π/5) = 1/φ.
        let phi = (1.0 + 5.0f64.sqrt()) / 2.0;
        let approx: Vec<f64> = c.records.iter().filter_map(|r| r.value.approx()).collect();
        assert!(approx.iter().any(|v| (v - phi).abs() < 1e-9));
        assert!(approx.iter().any(|v| (v - (phi - 1.0)).abs() < 1e-9));
    }

    #[test]
    fn complete_k4_denests_to_sqrt2_plus_minus_one() {
        let c = classify_graph(4, vec![(0, 1), (0, 2), (0, 3), (1, 2), (1, 3), (2, 3)]);
        assert!(c.all_nice);
        let approx: Vec<f64> = c.records.iter().filter_map(|r| r.value.approx()).collect();
        let r2 = 2.0f64.sqrt();
        assert!(approx.iter().any(|v| (v - (r2 + 1.0)).abs() < 1e-9));
        assert!(approx.iter().any(|v| (v - (r2 - 1.0)).abs() < 1e-9));
        // Denested forms, not nested radicals.
        for r in &c.records {
            if let RootValue::Imaginary { magnitude, .. } = &r.value {
                assert!(
                    matches!(magnitude, ClosedForm::SqrtSum { .. }),
                    "expected denested form, got {magnitude:?}"
                );
            }
        }
        let raws: Vec<String> = c.records.iter().map(EigenvalueRecord::raw).collect();
        assert!(raws.contains(&"(sqrt(2) + 1)*I".to_string()));
        assert!(raws.contains(&"(sqrt(2) - 1)*I".to_string()));
    }

    #[test]
    fn complete_k5_keeps_nested_radicals() {
        let edges: Vec<(usize, usize)> = (0..5)
            .flat_map(|i| ((i + 1)..5).map(move |j| (i, j)))
            .collect();
        let c = classify_graph(5, edges);
        assert!(c.all_nice);
        // Spectrum: 0 and ±i·sqrt(5 ± 2·sqrt(5)).
        assert_eq!(c.records[0].value, RootValue::Zero);
        let raws: Vec<String> = c.records.iter().map(|r| r.raw()).collect();
        assert!(raws.contains(&"sqrt(5 + 2*sqrt(5))*I".to_string()), "{raws:?}");
        assert!(raws.contains(&"sqrt(5 - 2*sqrt(5))*I".to_string()), "{raws:?}");
    }

    #[test]
    fn four_cycle_magnitudes_with_multiplicity() {
        let c = classify_graph(4, vec![(0, 1), (1, 2), (2, 3), (0, 3)]);
        assert!(c.all_nice);
        assert_eq!(c.records.len(), 2);
        for r in &c.records {
            assert_eq!(r.multiplicity, 2);
            match &r.value {
                RootValue::Imaginary { magnitude, .. } => {
                    assert!((magnitude.approx() - 2.0f64.sqrt()).abs() < 1e-12);
                    assert!(matches!(magnitude, ClosedForm::Sqrt(_)));
                }
                other => panic!("unexpected root {other:?}"),
            }
        }
    }

    /// Seven-cycle: the even part has an irreducible cubic factor, solved
    /// numerically and recognized as cosines of sevenths of π.
    #[test]
    fn seven_cycle_matches_sevenths() {
        let edges = vec![(0, 1), (1, 2), (2, 3), (3, 4), (4, 5), (5, 6), (0, 6)];
        let c = classify_graph(7, edges);
        assert!(c.all_nice);
        let mut dens = std::collections::HashSet::new();
        for r in &c.records {
            match &r.value {
                RootValue::Zero => {}
                RootValue::Imaginary { magnitude: ClosedForm::Trig { den, .. }, .. } => {
                    dens.insert(*den);
                }
                other => panic!("unexpected root {other:?}"),
            }
        }
        assert!(dens.iter().all(|&d| d == 7 || d == 14), "{dens:?}");
    }

    #[test]
    fn trig_match_prefers_smallest_denominator() {
        let config = SearchConfig::default();
        let phi = (1.0 + 5.0f64.sqrt()) / 2.0;
        assert_eq!(
            match_trig(phi, &config),
            Some(ClosedForm::Trig { kind: TrigKind::Cos, k: 1, den: 5 })
        );
        assert_eq!(match_trig(2.5, &config), None);
        assert_eq!(match_trig(-0.3, &config), None);
    }

    #[test]
    fn real_root_isolation() {
        // (y+1)(y+2)(y+4) = y^3 + 7y^2 + 14y + 8
        let p = IntPoly::new(vec![8, 14, 7, 1]);
        let roots = real_roots(&p);
        assert_eq!(roots.len(), 3);
        assert!((roots[0] + 4.0).abs() < 1e-9);
        assert!((roots[1] + 2.0).abs() < 1e-9);
        assert!((roots[2] + 1.0).abs() < 1e-9);
    }
}
