//! # Piecewise Polynomials
//!
//! Internal functions (shear, moment, slope, deflection, torque, twist) are
//! exact piecewise polynomials over the span. Each segment stores its
//! polynomial in the local coordinate `t = x − start`, which keeps the
//! coefficients well conditioned on long spans.
//!
//! Evaluation is right-continuous: at an interior boundary [`PiecewiseFunction::value_at`]
//! returns the right limit, and at the end of the span the left limit.
//! [`PiecewiseFunction::left_limit`] and [`PiecewiseFunction::right_limit`] expose both sides.

use serde::{Deserialize, Serialize};

/// Bisection steps when isolating a root
const ROOT_ITERATIONS: usize = 200;

/// Polynomial with coefficients in ascending powers
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Polynomial {
    coeffs: Vec<f64>,
}

impl Polynomial {
    pub fn new(coeffs: Vec<f64>) -> Self {
        Polynomial { coeffs }
    }

    pub fn constant(c: f64) -> Self {
        Polynomial { coeffs: vec![c] }
    }

    /// c0 + c1·t
    pub fn linear(c0: f64, c1: f64) -> Self {
        Polynomial { coeffs: vec![c0, c1] }
    }

    pub fn coefficients(&self) -> &[f64] {
        &self.coeffs
    }

    /// Highest power with a non-zero coefficient (0 for the zero polynomial)
    pub fn degree(&self) -> usize {
        self.coeffs.iter().rposition(|&c| c != 0.0).unwrap_or(0)
    }

    /// Horner evaluation
    pub fn eval(&self, t: f64) -> f64 {
        self.coeffs.iter().rev().fold(0.0, |acc, &c| acc * t + c)
    }

    pub fn derivative(&self) -> Polynomial {
        let coeffs = self
            .coeffs
            .iter()
            .enumerate()
            .skip(1)
            .map(|(k, &c)| c * k as f64)
            .collect();
        Polynomial { coeffs }
    }

    /// Antiderivative with value `c0` at t = 0
    pub fn integral(&self, c0: f64) -> Polynomial {
        let mut coeffs = Vec::with_capacity(self.coeffs.len() + 1);
        coeffs.push(c0);
        coeffs.extend(self.coeffs.iter().enumerate().map(|(k, &c)| c / (k + 1) as f64));
        Polynomial { coeffs }
    }

    pub fn scaled(&self, factor: f64) -> Polynomial {
        Polynomial {
            coeffs: self.coeffs.iter().map(|c| c * factor).collect(),
        }
    }

    /// Sum of |cₖ·tᵏ|, the magnitude against which a value at `t` is judged zero
    fn magnitude_at(&self, t: f64) -> f64 {
        self.coeffs
            .iter()
            .enumerate()
            .map(|(k, c)| (c * t.powi(k as i32)).abs())
            .sum()
    }

    /// Real roots in the open interval (lo, hi), ascending.
    ///
    /// The interval is split at the roots of the derivative so every piece
    /// is monotonic, then each sign change is bisected. A touching root
    /// (double root at an extremum) is reported once.
    pub fn roots_in(&self, lo: f64, hi: f64) -> Vec<f64> {
        if !(hi > lo) {
            return Vec::new();
        }
        match self.degree() {
            0 => Vec::new(),
            1 => {
                let t = -self.coeffs[0] / self.coeffs[1];
                if t > lo && t < hi {
                    vec![t]
                } else {
                    Vec::new()
                }
            }
            _ => {
                let mut knots = vec![lo];
                knots.extend(self.derivative().roots_in(lo, hi));
                knots.push(hi);

                let mut roots: Vec<f64> = Vec::new();
                for pair in knots.windows(2) {
                    let (a, b) = (pair[0], pair[1]);
                    let (fa, fb) = (self.eval(a), self.eval(b));
                    if a > lo && fa.abs() <= 1e-12 * self.magnitude_at(a) {
                        roots.push(a);
                    } else if fa * fb < 0.0 {
                        roots.push(self.bisect(a, b, fa));
                    }
                }
                roots.dedup_by(|x, y| (*x - *y).abs() <= 1e-12 * (hi - lo));
                roots
            }
        }
    }

    fn bisect(&self, mut a: f64, mut b: f64, mut fa: f64) -> f64 {
        for _ in 0..ROOT_ITERATIONS {
            let m = 0.5 * (a + b);
            if m <= a || m >= b {
                break;
            }
            let fm = self.eval(m);
            if fm == 0.0 {
                return m;
            }
            if fa * fm < 0.0 {
                b = m;
            } else {
                a = m;
                fa = fm;
            }
        }
        0.5 * (a + b)
    }
}

/// One polynomial piece over [start, end]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub start_mm: f64,
    pub end_mm: f64,
    /// Polynomial in t = x − start
    pub poly: Polynomial,
}

impl Segment {
    pub fn length(&self) -> f64 {
        self.end_mm - self.start_mm
    }

    pub fn value_at(&self, x: f64) -> f64 {
        self.poly.eval(x - self.start_mm)
    }

    pub fn start_value(&self) -> f64 {
        self.poly.eval(0.0)
    }

    pub fn end_value(&self) -> f64 {
        self.poly.eval(self.length())
    }
}

/// Signed extreme value of a function and where it occurs
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Extremum {
    pub position_mm: f64,
    pub value: f64,
}

impl Extremum {
    pub fn abs(&self) -> f64 {
        self.value.abs()
    }
}

/// Piecewise polynomial over contiguous segments
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PiecewiseFunction {
    segments: Vec<Segment>,
}

impl PiecewiseFunction {
    /// Segments must be contiguous and ordered
    pub fn from_segments(segments: Vec<Segment>) -> Self {
        debug_assert!(segments.windows(2).all(|w| w[0].end_mm == w[1].start_mm));
        PiecewiseFunction { segments }
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn start(&self) -> f64 {
        self.segments.first().map_or(0.0, |s| s.start_mm)
    }

    pub fn end(&self) -> f64 {
        self.segments.last().map_or(0.0, |s| s.end_mm)
    }

    /// Segment boundaries including both ends of the domain
    pub fn boundaries(&self) -> Vec<f64> {
        let mut xs: Vec<f64> = self.segments.iter().map(|s| s.start_mm).collect();
        if let Some(last) = self.segments.last() {
            xs.push(last.end_mm);
        }
        xs
    }

    /// Value with the right-continuous convention (left limit at the span end)
    pub fn value_at(&self, x: f64) -> f64 {
        if x >= self.end() {
            return self.left_limit(x);
        }
        self.right_limit(x)
    }

    /// Limit approaching `x` from the left (start value at the domain start)
    pub fn left_limit(&self, x: f64) -> f64 {
        if self.segments.is_empty() {
            return 0.0;
        }
        let i = self
            .segments
            .partition_point(|s| s.end_mm < x)
            .min(self.segments.len() - 1);
        let seg = &self.segments[i];
        seg.value_at(x.clamp(seg.start_mm, seg.end_mm))
    }

    /// Limit approaching `x` from the right (end value at the domain end)
    pub fn right_limit(&self, x: f64) -> f64 {
        if self.segments.is_empty() {
            return 0.0;
        }
        let i = self
            .segments
            .partition_point(|s| s.end_mm <= x)
            .min(self.segments.len() - 1);
        let seg = &self.segments[i];
        seg.value_at(x.clamp(seg.start_mm, seg.end_mm))
    }

    /// Right limit minus left limit at `x`
    pub fn jump_at(&self, x: f64) -> f64 {
        self.right_limit(x) - self.left_limit(x)
    }

    /// Continuous antiderivative with value `initial` at the domain start
    pub fn integral(&self, initial: f64) -> PiecewiseFunction {
        let mut running = initial;
        let segments = self
            .segments
            .iter()
            .map(|seg| {
                let poly = seg.poly.integral(running);
                running = poly.eval(seg.length());
                Segment {
                    start_mm: seg.start_mm,
                    end_mm: seg.end_mm,
                    poly,
                }
            })
            .collect();
        PiecewiseFunction { segments }
    }

    pub fn scaled(&self, factor: f64) -> PiecewiseFunction {
        PiecewiseFunction {
            segments: self
                .segments
                .iter()
                .map(|seg| Segment {
                    start_mm: seg.start_mm,
                    end_mm: seg.end_mm,
                    poly: seg.poly.scaled(factor),
                })
                .collect(),
        }
    }

    /// Interior stationary points of each segment (roots of the derivative)
    pub fn critical_points(&self) -> Vec<f64> {
        let mut xs = Vec::new();
        for seg in &self.segments {
            let roots = seg.poly.derivative().roots_in(0.0, seg.length());
            xs.extend(roots.into_iter().map(|t| seg.start_mm + t));
        }
        xs
    }

    /// Largest |value| over the domain, including both limits at every boundary.
    ///
    /// Ties keep the leftmost location.
    pub fn extreme_abs(&self) -> Extremum {
        let mut best = Extremum {
            position_mm: self.start(),
            value: 0.0,
        };
        let mut consider = |x: f64, v: f64| {
            if v.abs() > best.value.abs() {
                best = Extremum { position_mm: x, value: v };
            }
        };
        for seg in &self.segments {
            consider(seg.start_mm, seg.start_value());
            for t in seg.poly.derivative().roots_in(0.0, seg.length()) {
                consider(seg.start_mm + t, seg.poly.eval(t));
            }
            consider(seg.end_mm, seg.end_value());
        }
        best
    }
}
