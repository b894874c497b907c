use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

/// Index of one output class of a quantile or quantize scale
///
/// Buckets are numbered from 0 in range order, so they are stable for a given
/// scale regardless of the colour each one maps to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ColorBucketId(pub usize);

impl ColorBucketId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// Number of thresholds <= x
fn bisect_right(thresholds: &[f64], x: f64) -> usize {
    thresholds.partition_point(|t| *t <= x)
}

/// Interpolated p-quantile of an ascending slice
fn quantile_sorted(sorted: &[f64], p: f64) -> f64 {
    let n = sorted.len();
    if n == 0 {
        return f64::NAN;
    }
    if p <= 0.0 || n < 2 {
        return sorted[0];
    }
    if p >= 1.0 {
        return sorted[n - 1];
    }
    let i = (n - 1) as f64 * p;
    let i0 = i.floor() as usize;
    let v0 = sorted[i0];
    let v1 = sorted[i0 + 1];
    v0 + (v1 - v0) * (i - i0 as f64)
}

/// Evenly spaced positions for a list of categories
///
/// Categories sit on the range endpoints and in between, in domain order; a
/// reversed range puts the first category at the larger coordinate.
#[derive(Debug, Clone, PartialEq)]
pub struct ScalePoint {
    domain: IndexSet<String>,
    range: (f64, f64),
}

impl ScalePoint {
    pub fn new<I, S>(domain: I, range: (f64, f64)) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            domain: domain.into_iter().map(Into::into).collect(),
            range,
        }
    }

    pub fn domain(&self) -> impl Iterator<Item = &str> {
        self.domain.iter().map(String::as_str)
    }

    pub fn range(&self) -> (f64, f64) {
        self.range
    }

    /// Distance between neighbouring categories (always non-negative)
    pub fn step(&self) -> f64 {
        let (r0, r1) = self.range;
        let span = (r1 - r0).abs();
        let n = self.domain.len() as f64;
        span / (n - 1.0).max(1.0)
    }

    fn position(&self, index: usize) -> f64 {
        let (r0, r1) = self.range;
        let n = self.domain.len();
        let step = self.step();
        let lo = r0.min(r1);
        let span = (r1 - r0).abs();
        let start = lo + (span - step * (n as f64 - 1.0)) * 0.5;

        let slot = if r1 < r0 { n - 1 - index } else { index };
        start + step * slot as f64
    }

    /// Position of `category`, or None for an unknown category
    pub fn map(&self, category: &str) -> Option<f64> {
        self.domain.get_index_of(category).map(|i| self.position(i))
    }

    /// Every category with its position, in domain order
    pub fn positions(&self) -> impl Iterator<Item = (&str, f64)> {
        self.domain
            .iter()
            .enumerate()
            .map(|(i, c)| (c.as_str(), self.position(i)))
    }
}

/// Equal-frequency classes over a sample
///
/// Thresholds are the sample quantiles at 1/n, 2/n, ... where n is the
/// number of outputs.
#[derive(Debug, Clone, PartialEq)]
pub struct ScaleQuantile<R> {
    sorted: Vec<f64>,
    thresholds: Vec<f64>,
    range: Vec<R>,
}

impl<R> ScaleQuantile<R> {
    /// NaN samples are ignored
    pub fn new(sample: impl IntoIterator<Item = f64>, range: Vec<R>) -> Self {
        let mut sorted: Vec<f64> = sample.into_iter().filter(|v| !v.is_nan()).collect();
        sorted.sort_by(f64::total_cmp);

        let n = range.len();
        let thresholds = if sorted.is_empty() || n == 0 {
            Vec::new()
        } else {
            (1..n)
                .map(|i| quantile_sorted(&sorted, i as f64 / n as f64))
                .collect()
        };

        Self {
            sorted,
            thresholds,
            range,
        }
    }

    pub fn quantiles(&self) -> &[f64] {
        &self.thresholds
    }

    pub fn range(&self) -> &[R] {
        &self.range
    }

    /// Class of `x`, or None for NaN and empty scales
    pub fn bucket_of(&self, x: f64) -> Option<ColorBucketId> {
        if x.is_nan() || self.sorted.is_empty() || self.range.is_empty() {
            return None;
        }
        Some(ColorBucketId(bisect_right(&self.thresholds, x)))
    }

    pub fn map(&self, x: f64) -> Option<&R> {
        self.bucket_of(x).and_then(|b| self.range.get(b.0))
    }

    pub fn output(&self, bucket: ColorBucketId) -> Option<&R> {
        self.range.get(bucket.0)
    }

    /// Sample interval covered by `bucket`
    pub fn invert_extent(&self, bucket: ColorBucketId) -> Option<(f64, f64)> {
        let i = bucket.0;
        let (first, last) = (self.sorted.first()?, self.sorted.last()?);
        if i >= self.range.len() {
            return None;
        }
        let lo = if i > 0 { self.thresholds[i - 1] } else { *first };
        let hi = self.thresholds.get(i).copied().unwrap_or(*last);
        Some((lo, hi))
    }

    /// Every bucket with its output value, in range order
    pub fn buckets(&self) -> impl Iterator<Item = (ColorBucketId, &R)> {
        self.range.iter().enumerate().map(|(i, r)| (ColorBucketId(i), r))
    }
}

/// Equal-width classes over a continuous domain
#[derive(Debug, Clone, PartialEq)]
pub struct ScaleQuantize<R> {
    thresholds: Vec<f64>,
    range: Vec<R>,
}

impl<R> ScaleQuantize<R> {
    pub fn new(domain: (f64, f64), range: Vec<R>) -> Self {
        let (x0, x1) = domain;
        let n = range.len().saturating_sub(1);
        let thresholds = (0..n)
            .map(|i| {
                let i = i as f64;
                let n = n as f64;
                ((i + 1.0) * x1 - (i - n) * x0) / (n + 1.0)
            })
            .collect();
        Self { thresholds, range }
    }

    pub fn thresholds(&self) -> &[f64] {
        &self.thresholds
    }

    pub fn bucket_of(&self, x: f64) -> Option<ColorBucketId> {
        if x.is_nan() || self.range.is_empty() {
            return None;
        }
        Some(ColorBucketId(bisect_right(&self.thresholds, x)))
    }

    pub fn map(&self, x: f64) -> Option<&R> {
        self.bucket_of(x).and_then(|b| self.range.get(b.0))
    }
}

/// Categorical lookup with a cycling range
#[derive(Debug, Clone, PartialEq)]
pub struct ScaleOrdinal<R> {
    domain: IndexSet<String>,
    range: Vec<R>,
}

impl<R> ScaleOrdinal<R> {
    pub fn new(range: Vec<R>) -> Self {
        Self {
            domain: IndexSet::new(),
            range,
        }
    }

    fn at(&self, index: usize) -> Option<&R> {
        if self.range.is_empty() {
            None
        } else {
            self.range.get(index % self.range.len())
        }
    }

    /// Output for `key`, appending unseen keys to the domain
    pub fn map_or_insert(&mut self, key: &str) -> Option<&R> {
        let index = match self.domain.get_index_of(key) {
            Some(i) => i,
            None => self.domain.insert_full(key.to_string()).0,
        };
        self.at(index)
    }
}
