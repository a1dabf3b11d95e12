use std::fmt;
use std::str::FromStr;

use crate::error::WavetableError;

/// Number of entries in every generated wavetable.
pub const TABLE_SIZE: usize = 512;

/// Cubic interpolation needs four knots to be determined.
pub const MIN_INPUT_LEN: usize = 4;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Interpolation {
    /// Local cubic Hermite with centred-difference tangents.
    #[default]
    CatmullRom,
    /// C2 cubic spline with not-a-knot end conditions.
    NotAKnot,
}

impl FromStr for Interpolation {
    type Err = WavetableError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "catmull-rom" | "catmull" => Ok(Interpolation::CatmullRom),
            "spline" | "not-a-knot" => Ok(Interpolation::NotAKnot),
            _ => Err(WavetableError::UnknownInterpolation(s.to_string())),
        }
    }
}

impl fmt::Display for Interpolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Interpolation::CatmullRom => write!(f, "catmull-rom"),
            Interpolation::NotAKnot => write!(f, "spline"),
        }
    }
}

/// A curve through knots placed at integer positions `0..n`.
trait Interpolant {
    fn knots(&self) -> &[f64];
    fn segment(&self, i: usize, s: f64) -> f64;

    fn eval(&self, u: f64) -> f64 {
        let last = self.knots().len() - 1;
        let i = (u.floor().max(0.0) as usize).min(last - 1);
        self.segment(i, u - i as f64)
    }
}

struct CatmullRom<'a> {
    y: &'a [f64],
    tangents: Vec<f64>,
}

impl<'a> CatmullRom<'a> {
    fn new(y: &'a [f64]) -> Self {
        let n = y.len();
        let tangents = (0..n)
            .map(|i| {
                let prev = y[i.saturating_sub(1)];
                let next = y[(i + 1).min(n - 1)];
                (next - prev) * 0.5
            })
            .collect();
        CatmullRom { y, tangents }
    }
}

impl Interpolant for CatmullRom<'_> {
    fn knots(&self) -> &[f64] {
        self.y
    }

    fn segment(&self, i: usize, s: f64) -> f64 {
        let s2 = s * s;
        let s3 = s2 * s;
        let h00 = 2.0 * s3 - 3.0 * s2 + 1.0;
        let h10 = s3 - 2.0 * s2 + s;
        let h01 = -2.0 * s3 + 3.0 * s2;
        let h11 = s3 - s2;
        h00 * self.y[i] + h10 * self.tangents[i] + h01 * self.y[i + 1] + h11 * self.tangents[i + 1]
    }
}

struct CubicSpline<'a> {
    y: &'a [f64],
    // Second derivatives at each knot, in knot-index units.
    m: Vec<f64>,
}

impl<'a> CubicSpline<'a> {
    fn new(y: &'a [f64]) -> Self {
        let n = y.len();
        let inner = n - 2;

        // Interior rows: m[i-1] + 4 m[i] + m[i+1] = 6 (y[i-1] - 2 y[i] + y[i+1]).
        // Not-a-knot gives m[0] = 2 m[1] - m[2] and m[n-1] = 2 m[n-2] - m[n-3];
        // substituting them turns the first and last rows into 6 m[i] = rhs.
        let mut sub = vec![1.0; inner];
        let mut diag = vec![4.0; inner];
        let mut sup = vec![1.0; inner];
        let mut rhs: Vec<f64> = (1..n - 1)
            .map(|i| 6.0 * (y[i - 1] - 2.0 * y[i] + y[i + 1]))
            .collect();

        sub[0] = 0.0;
        sup[inner - 1] = 0.0;
        diag[0] = 6.0;
        sup[0] = 0.0;
        diag[inner - 1] = 6.0;
        sub[inner - 1] = 0.0;

        // Thomas forward sweep; the system is diagonally dominant.
        for j in 1..inner {
            let w = sub[j] / diag[j - 1];
            diag[j] -= w * sup[j - 1];
            rhs[j] -= w * rhs[j - 1];
        }
        let mut interior = vec![0.0; inner];
        interior[inner - 1] = rhs[inner - 1] / diag[inner - 1];
        for j in (0..inner - 1).rev() {
            interior[j] = (rhs[j] - sup[j] * interior[j + 1]) / diag[j];
        }

        let mut m = Vec::with_capacity(n);
        m.push(2.0 * interior[0] - interior[1]);
        m.extend_from_slice(&interior);
        m.push(2.0 * interior[inner - 1] - interior[inner - 2]);

        CubicSpline { y, m }
    }
}

impl Interpolant for CubicSpline<'_> {
    fn knots(&self) -> &[f64] {
        self.y
    }

    fn segment(&self, i: usize, s: f64) -> f64 {
        let t = 1.0 - s;
        t * self.y[i]
            + s * self.y[i + 1]
            + ((t * t * t - t) * self.m[i] + (s * s * s - s) * self.m[i + 1]) / 6.0
    }
}

/// Resamples `samples` onto `len` evenly spaced points of the unit interval.
///
/// The input knots sit at `i / (n - 1)` and the outputs at `k / (len - 1)`, so
/// the first and last outputs are the first and last inputs exactly.
pub fn resample(
    samples: &[f64],
    len: usize,
    interpolation: Interpolation,
) -> Result<Vec<f64>, WavetableError> {
    if samples.len() < MIN_INPUT_LEN {
        return Err(WavetableError::TooFewSamples {
            found: samples.len(),
        });
    }
    if len < 2 {
        return Err(WavetableError::InvalidTableLength(len));
    }

    let out = match interpolation {
        Interpolation::CatmullRom => evaluate(&CatmullRom::new(samples), len),
        Interpolation::NotAKnot => evaluate(&CubicSpline::new(samples), len),
    };
    Ok(out)
}

fn evaluate<I: Interpolant>(curve: &I, len: usize) -> Vec<f64> {
    let span = (curve.knots().len() - 1) as f64;
    let steps = (len - 1) as f64;
    (0..len)
        .map(|k| curve.eval(k as f64 * span / steps))
        .collect()
}
