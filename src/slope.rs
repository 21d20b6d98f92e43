//! # Least-Squares Slope
//!
//! Ordinary least squares of pressure (`y`) against elapsed seconds (`x`):
//!
//! ```text
//! slope = (n·Σxy − Σx·Σy) / (n·Σx² − (Σx)²)
//! ```
//!
//! The five sums are collected in one forward pass with Neumaier
//! compensated summation, so long runs of large elapsed values do not lose
//! low-order bits.

use crate::buffer::PointBuffer;
use crate::error::{Result, SlopeError};
use crate::Point;
use serde::Serialize;

/// Running sum with a compensation term for lost low-order bits.
#[derive(Clone, Copy, Debug, Default)]
struct CompensatedSum {
    sum: f64,
    carry: f64,
}

impl CompensatedSum {
    fn add(&mut self, value: f64) {
        let t = self.sum + value;
        if self.sum.abs() >= value.abs() {
            self.carry += (self.sum - t) + value;
        } else {
            self.carry += (value - t) + self.sum;
        }
        self.sum = t;
    }

    fn value(&self) -> f64 {
        self.sum + self.carry
    }
}

/// Regression sums over a set of points.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct RegressionSums {
    pub n: usize,
    pub sum_x: f64,
    pub sum_y: f64,
    pub sum_xy: f64,
    pub sum_xx: f64,
}

impl RegressionSums {
    pub fn accumulate<'a, I>(points: I) -> Self
    where
        I: IntoIterator<Item = &'a Point>,
    {
        let mut n = 0usize;
        let (mut x, mut y, mut xy, mut xx) = (
            CompensatedSum::default(),
            CompensatedSum::default(),
            CompensatedSum::default(),
            CompensatedSum::default(),
        );
        for p in points {
            n += 1;
            x.add(p.elapsed);
            y.add(p.pressure);
            xy.add(p.elapsed * p.pressure);
            xx.add(p.elapsed * p.elapsed);
        }
        RegressionSums {
            n,
            sum_x: x.value(),
            sum_y: y.value(),
            sum_xy: xy.value(),
            sum_xx: xx.value(),
        }
    }

    /// Closed-form slope from the sums.
    pub fn slope(&self) -> Result<f64> {
        if self.n < 2 {
            return Err(SlopeError::InsufficientData { points: self.n });
        }
        let n = self.n as f64;
        let denominator = n * self.sum_xx - self.sum_x * self.sum_x;
        if denominator == 0.0 {
            return Err(SlopeError::DegenerateRange);
        }
        Ok((n * self.sum_xy - self.sum_x * self.sum_y) / denominator)
    }
}

/// Least-squares slope of a finished buffer, in pressure units per second.
pub fn estimate(buffer: &PointBuffer) -> Result<f64> {
    estimate_with_sums(buffer).map(|(slope, _)| slope)
}

/// Like [`estimate`], also returning the sums for diagnostics.
pub fn estimate_with_sums(buffer: &PointBuffer) -> Result<(f64, RegressionSums)> {
    if buffer.size() < 2 {
        return Err(SlopeError::InsufficientData {
            points: buffer.size(),
        });
    }
    let sums = RegressionSums::accumulate(buffer);
    let slope = sums.slope()?;
    Ok((slope, sums))
}
