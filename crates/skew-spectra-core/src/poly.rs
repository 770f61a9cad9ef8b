//! Exact integer polynomials and characteristic-polynomial computation.
//!
//! All arithmetic is exact over `i128`; floating point never enters the
//! polynomial pipeline. The characteristic polynomial is computed with the
//! Faddeev–LeVerrier recurrence, whose trace divisions are exact for integer
//! matrices.

use crate::error::{AnalysisError, AnalysisResult};
use crate::matrix::SkewMatrix;

/// A polynomial with exact integer coefficients, stored in ascending order
/// (`coeffs[k]` multiplies `x^k`). Normalized: no trailing zero
/// coefficients; the zero polynomial has an empty coefficient vector.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct IntPoly {
    coeffs: Vec<i128>,
}

impl IntPoly {
    /// Builds a polynomial from ascending coefficients, trimming trailing
    /// zeros.
    #[must_use]
    pub fn new(mut coeffs: Vec<i128>) -> Self {
        while coeffs.last() == Some(&0) {
            coeffs.pop();
        }
        Self { coeffs }
    }

    /// The monomial `x^k`.
    #[must_use]
    pub fn monomial(k: usize) -> Self {
        let mut coeffs = vec![0; k + 1];
        coeffs[k] = 1;
        Self { coeffs }
    }

    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.coeffs.is_empty()
    }

    /// Degree; 0 for constants and for the zero polynomial.
    #[must_use]
    pub fn degree(&self) -> usize {
        self.coeffs.len().saturating_sub(1)
    }

    /// Ascending coefficients.
    #[must_use]
    pub fn coeffs(&self) -> &[i128] {
        &self.coeffs
    }

    /// Coefficient of `x^k` (zero beyond the stored degree).
    #[must_use]
    pub fn coeff(&self, k: usize) -> i128 {
        self.coeffs.get(k).copied().unwrap_or(0)
    }

    /// Leading coefficient (zero for the zero polynomial).
    #[must_use]
    pub fn leading(&self) -> i128 {
        self.coeffs.last().copied().unwrap_or(0)
    }

    /// Constant term.
    #[must_use]
    pub fn constant(&self) -> i128 {
        self.coeff(0)
    }

    /// Exact evaluation at an integer point.
    #[must_use]
    pub fn eval_i128(&self, x: i128) -> i128 {
        self.coeffs.iter().rev().fold(0i128, |acc, &c| acc * x + c)
    }

    /// Floating-point evaluation, used only for root isolation and
    /// closed-form matching, never for exact decisions.
    #[must_use]
    pub fn eval_f64(&self, x: f64) -> f64 {
        self.coeffs.iter().rev().fold(0.0f64, |acc, &c| acc * x + c as f64)
    }

    /// Product of two polynomials.
    #[must_use]
    pub fn mul(&self, other: &Self) -> Self {
        if self.is_zero() || other.is_zero() {
            return Self::new(vec![]);
        }
        let mut out = vec![0i128; self.coeffs.len() + other.coeffs.len() - 1];
        for (i, &a) in self.coeffs.iter().enumerate() {
            for (j, &b) in other.coeffs.iter().enumerate() {
                out[i + j] += a * b;
            }
        }
        Self::new(out)
    }

    /// Exact division: returns `Some(quotient)` iff `divisor` divides `self`
    /// with zero remainder over the integers. Requires a monic divisor.
    #[must_use]
    pub fn div_exact(&self, divisor: &Self) -> Option<Self> {
        debug_assert_eq!(divisor.leading(), 1, "divisor must be monic");
        if self.is_zero() {
            return Some(Self::new(vec![]));
        }
        if divisor.degree() > self.degree() {
            return None;
        }
        let mut rem = self.coeffs.clone();
        let dd = divisor.degree();
        let mut quot = vec![0i128; self.degree() - dd + 1];
        for k in (0..quot.len()).rev() {
            let q = rem[k + dd];
            quot[k] = q;
            if q != 0 {
                for (i, &dc) in divisor.coeffs.iter().enumerate() {
                    rem[k + i] -= q * dc;
                }
            }
        }
        if rem.iter().all(|&c| c == 0) {
            Some(Self::new(quot))
        } else {
            None
        }
    }

    /// Renders the polynomial in descending powers, e.g. `"x^4 + 3*x^2 + 1"`
    /// or `"-x^3 - 3*x"`. The zero polynomial renders as `"0"`.
    #[must_use]
    pub fn render(&self, var: &str) -> String {
        if self.is_zero() {
            return "0".to_string();
        }
        let mut out = String::new();
        for (exp, &c) in self.coeffs.iter().enumerate().rev() {
            if c == 0 {
                continue;
            }
            let mag = c.unsigned_abs();
            if out.is_empty() {
                if c < 0 {
                    out.push('-');
                }
            } else if c < 0 {
                out.push_str(" - ");
            } else {
                out.push_str(" + ");
            }
            let body = match (exp, mag) {
                (0, m) => m.to_string(),
                (1, 1) => var.to_string(),
                (1, m) => format!("{m}*{var}"),
                (e, 1) => format!("{var}^{e}"),
                (e, m) => format!("{m}*{var}^{e}"),
            };
            out.push_str(&body);
        }
        out
    }
}

/// The exact characteristic polynomial of a skew-symmetric matrix.
///
/// Internally stored as the monic polynomial `det(xI − A)`; the canonical
/// text form follows the `det(A − xI)` convention, i.e. carries a leading
/// coefficient of `(−1)^n`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharPoly {
    n: usize,
    monic: IntPoly,
}

impl CharPoly {
    /// Computes `det(A − xI)` exactly via the Faddeev–LeVerrier recurrence.
    ///
    /// Fails only on internal resource exhaustion (`i128` coefficient
    /// overflow for very large matrices); such a failure is per-graph, the
    /// caller skips the graph and continues.
    pub fn compute(matrix: &SkewMatrix) -> AnalysisResult<Self> {
        let n = matrix.size();
        let overflow = || AnalysisError::CoefficientOverflow {
            operation: "faddeev-leverrier",
            n,
        };

        let a: Vec<i128> = (0..n * n)
            .map(|idx| i128::from(matrix.get(idx / n, idx % n)))
            .collect();

        // coeffs[n - k] accumulates the coefficient of x^(n-k).
        let mut coeffs = vec![0i128; n + 1];
        coeffs[n] = 1;

        // M starts as the identity; each step forms A*M, extracts the next
        // coefficient from its trace, and shifts by a multiple of I.
        let mut m: Vec<i128> = (0..n * n)
            .map(|idx| i128::from(idx / n == idx % n))
            .collect();

        for step in 1..=n {
            let mut am = vec![0i128; n * n];
            for i in 0..n {
                for k in 0..n {
                    let aik = a[i * n + k];
                    if aik == 0 {
                        continue;
                    }
                    for j in 0..n {
                        let term = aik.checked_mul(m[k * n + j]).ok_or_else(overflow)?;
                        am[i * n + j] = am[i * n + j].checked_add(term).ok_or_else(overflow)?;
                    }
                }
            }
            let trace: i128 = (0..n).map(|i| am[i * n + i]).sum();
            if trace % (step as i128) != 0 {
                return Err(AnalysisError::InexactDivision { step });
            }
            let c = -trace / (step as i128);
            coeffs[n - step] = c;
            for i in 0..n {
                am[i * n + i] = am[i * n + i].checked_add(c).ok_or_else(overflow)?;
            }
            m = am;
        }

        Ok(Self {
            n,
            monic: IntPoly::new(coeffs),
        })
    }

    /// Matrix dimension (= polynomial degree).
    #[must_use]
    pub fn size(&self) -> usize {
        self.n
    }

    /// The monic form `det(xI − A)`.
    #[must_use]
    pub fn monic(&self) -> &IntPoly {
        &self.monic
    }

    /// Canonical text of `det(A − xI)`: the monic form negated for odd `n`.
    /// Used verbatim as the polynomial grouping key.
    #[must_use]
    pub fn text(&self) -> String {
        if self.n % 2 == 0 {
            self.monic.render("x")
        } else {
            let negated = IntPoly::new(self.monic.coeffs().iter().map(|&c| -c).collect());
            negated.render("x")
        }
    }
}
