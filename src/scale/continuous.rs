use crate::state::ViewTransform;

const E10: f64 = 7.0710678118654755; // sqrt(50)
const E5: f64 = 3.1622776601683795; // sqrt(10)
const E2: f64 = std::f64::consts::SQRT_2;

/// Upper bound on generated ticks, guards against degenerate domains
const MAX_TICKS: f64 = 10_000.0;

fn tick_spec(start: f64, stop: f64, count: f64) -> (f64, f64, f64) {
    let step = (stop - start) / count.max(0.0);
    let power = step.log10().floor();
    let error = step / 10f64.powf(power);
    let factor = if error >= E10 {
        10.0
    } else if error >= E5 {
        5.0
    } else if error >= E2 {
        2.0
    } else {
        1.0
    };

    let (mut i1, mut i2, inc);
    if power < 0.0 {
        let base = 10f64.powf(-power) / factor;
        i1 = (start * base).round();
        i2 = (stop * base).round();
        if i1 / base < start {
            i1 += 1.0;
        }
        if i2 / base > stop {
            i2 -= 1.0;
        }
        inc = -base;
    } else {
        let base = 10f64.powf(power) * factor;
        i1 = (start / base).round();
        i2 = (stop / base).round();
        if i1 * base < start {
            i1 += 1.0;
        }
        if i2 * base > stop {
            i2 -= 1.0;
        }
        inc = base;
    }

    if i2 < i1 && (0.5..2.0).contains(&count) {
        return tick_spec(start, stop, count * 2.0);
    }
    (i1, i2, inc)
}

/// Signed tick step; negative values mean "divide by |step|"
fn tick_increment(start: f64, stop: f64, count: f64) -> f64 {
    tick_spec(start, stop, count).2
}

/// Roughly `count` evenly spaced round values between `start` and `stop`
///
/// Steps are 1, 2 or 5 times a power of ten. Reversed bounds yield reversed ticks.
pub fn ticks(start: f64, stop: f64, count: usize) -> Vec<f64> {
    let count = count as f64;
    if !(count > 0.0) || !start.is_finite() || !stop.is_finite() {
        return Vec::new();
    }
    if start == stop {
        return vec![start];
    }

    let reverse = stop < start;
    let (lo, hi) = if reverse { (stop, start) } else { (start, stop) };
    let (i1, i2, inc) = tick_spec(lo, hi, count);
    if !(i2 >= i1) || !inc.is_finite() || i2 - i1 >= MAX_TICKS {
        return Vec::new();
    }

    let n = (i2 - i1 + 1.0) as usize;
    let mut out: Vec<f64> = (0..n)
        .map(|i| {
            let k = i1 + i as f64;
            if inc < 0.0 { k / -inc } else { k * inc }
        })
        .collect();
    if reverse {
        out.reverse();
    }
    out
}

fn normalize(a: f64, b: f64, x: f64) -> f64 {
    let span = b - a;
    if span == 0.0 || span.is_nan() {
        if span.is_nan() { f64::NAN } else { 0.5 }
    } else {
        (x - a) / span
    }
}

fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a * (1.0 - t) + b * t
}

/// Linear map from a domain to a range
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScaleLinear {
    domain: (f64, f64),
    range: (f64, f64),
}

impl ScaleLinear {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    pub fn domain(&self) -> (f64, f64) {
        self.domain
    }

    pub fn range(&self) -> (f64, f64) {
        self.range
    }

    pub fn with_domain(self, domain: (f64, f64)) -> Self {
        Self { domain, ..self }
    }

    pub fn map(&self, x: f64) -> f64 {
        lerp(self.range.0, self.range.1, normalize(self.domain.0, self.domain.1, x))
    }

    pub fn invert(&self, y: f64) -> f64 {
        lerp(self.domain.0, self.domain.1, normalize(self.range.0, self.range.1, y))
    }

    pub fn ticks(&self, count: usize) -> Vec<f64> {
        ticks(self.domain.0, self.domain.1, count)
    }

    /// Extend the domain outward to round tick values
    pub fn nice(self, count: usize) -> Self {
        let (mut start, mut stop) = self.domain;
        let reverse = stop < start;
        if reverse {
            std::mem::swap(&mut start, &mut stop);
        }

        let mut prestep = f64::NAN;
        for _ in 0..10 {
            let step = tick_increment(start, stop, count as f64);
            if step == prestep {
                break;
            } else if step > 0.0 {
                start = (start / step).floor() * step;
                stop = (stop / step).ceil() * step;
            } else if step < 0.0 {
                start = (start * step).ceil() / step;
                stop = (stop * step).floor() / step;
            } else {
                break;
            }
            prestep = step;
        }

        let domain = if reverse { (stop, start) } else { (start, stop) };
        self.with_domain(domain)
    }
}

/// Logarithmic map; non-positive inputs map to NaN
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScaleLog {
    domain: (f64, f64),
    range: (f64, f64),
    base: f64,
}

impl ScaleLog {
    /// Base-10 log scale
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self {
            domain,
            range,
            base: 10.0,
        }
    }

    pub fn domain(&self) -> (f64, f64) {
        self.domain
    }

    pub fn range(&self) -> (f64, f64) {
        self.range
    }

    pub fn with_domain(self, domain: (f64, f64)) -> Self {
        Self { domain, ..self }
    }

    fn log(&self, x: f64) -> f64 {
        if !(x > 0.0) {
            f64::NAN
        } else if self.base == 10.0 {
            x.log10()
        } else {
            x.log(self.base)
        }
    }

    fn linear(&self) -> ScaleLinear {
        ScaleLinear::new((self.log(self.domain.0), self.log(self.domain.1)), self.range)
    }

    pub fn map(&self, x: f64) -> f64 {
        self.linear().map(self.log(x))
    }

    pub fn invert(&self, y: f64) -> f64 {
        self.base.powf(self.linear().invert(y))
    }

    /// Extend the domain to whole powers of the base
    pub fn nice(self) -> Self {
        let (d0, d1) = self.domain;
        let (lo, hi, reverse) = if d1 < d0 { (d1, d0, true) } else { (d0, d1, false) };
        let lo = self.base.powf(self.log(lo).floor());
        let hi = self.base.powf(self.log(hi).ceil());
        self.with_domain(if reverse { (hi, lo) } else { (lo, hi) })
    }

    /// Powers of the base, with 1..9 multiples when the domain spans few decades
    pub fn ticks(&self, count: usize) -> Vec<f64> {
        let (d0, d1) = self.domain;
        let reverse = d1 < d0;
        let (u, v) = if reverse { (d1, d0) } else { (d0, d1) };
        if !(u > 0.0) || !v.is_finite() {
            return Vec::new();
        }

        let n = count as f64;
        let i = self.log(u);
        let j = self.log(v);
        let mut out = Vec::new();

        if self.base.fract() == 0.0 && j - i < n {
            let lo = i.floor() as i32;
            let hi = j.ceil() as i32;
            'outer: for e in lo..=hi {
                let mut k = 1.0;
                while k < self.base {
                    let t = if e < 0 {
                        k / self.base.powi(-e)
                    } else {
                        k * self.base.powi(e)
                    };
                    k += 1.0;
                    if t < u {
                        continue;
                    }
                    if t > v {
                        break 'outer;
                    }
                    out.push(t);
                }
            }
            if (out.len() * 2) < count {
                out = ticks(u, v, count);
            }
        } else {
            out = ticks(i, j, (j - i).min(n) as usize)
                .into_iter()
                .map(|e| self.base.powf(e))
                .collect();
        }

        if reverse {
            out.reverse();
        }
        out
    }
}

/// Power map with a sign-preserving exponent
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScalePow {
    domain: (f64, f64),
    range: (f64, f64),
    exponent: f64,
}

impl ScalePow {
    pub fn new(domain: (f64, f64), range: (f64, f64), exponent: f64) -> Self {
        Self {
            domain,
            range,
            exponent,
        }
    }

    fn raise(x: f64, exponent: f64) -> f64 {
        x.signum() * x.abs().powf(exponent)
    }

    fn linear(&self) -> ScaleLinear {
        ScaleLinear::new(
            (
                Self::raise(self.domain.0, self.exponent),
                Self::raise(self.domain.1, self.exponent),
            ),
            self.range,
        )
    }

    pub fn map(&self, x: f64) -> f64 {
        self.linear().map(Self::raise(x, self.exponent))
    }
}

/// Any continuous position scale
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ContinuousScale {
    Linear(ScaleLinear),
    Log(ScaleLog),
}

impl ContinuousScale {
    pub fn map(&self, x: f64) -> f64 {
        match self {
            ContinuousScale::Linear(s) => s.map(x),
            ContinuousScale::Log(s) => s.map(x),
        }
    }

    pub fn invert(&self, y: f64) -> f64 {
        match self {
            ContinuousScale::Linear(s) => s.invert(y),
            ContinuousScale::Log(s) => s.invert(y),
        }
    }

    pub fn domain(&self) -> (f64, f64) {
        match self {
            ContinuousScale::Linear(s) => s.domain(),
            ContinuousScale::Log(s) => s.domain(),
        }
    }

    pub fn range(&self) -> (f64, f64) {
        match self {
            ContinuousScale::Linear(s) => s.range(),
            ContinuousScale::Log(s) => s.range(),
        }
    }

    pub fn ticks(&self, count: usize) -> Vec<f64> {
        match self {
            ContinuousScale::Linear(s) => s.ticks(count),
            ContinuousScale::Log(s) => s.ticks(count),
        }
    }

    fn with_domain(self, domain: (f64, f64)) -> Self {
        match self {
            ContinuousScale::Linear(s) => ContinuousScale::Linear(s.with_domain(domain)),
            ContinuousScale::Log(s) => ContinuousScale::Log(s.with_domain(domain)),
        }
    }

    /// Copy of this scale whose domain is the data shown under `transform`
    ///
    /// The range is unchanged, so `rescaled(t).map(x) == t.apply_x(self.map(x))`.
    pub fn rescaled(&self, transform: &ViewTransform) -> Self {
        let (r0, r1) = self.range();
        let d0 = self.invert(transform.invert_x(r0));
        let d1 = self.invert(transform.invert_x(r1));
        self.with_domain((d0, d1))
    }
}
