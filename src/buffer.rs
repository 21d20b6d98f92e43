//! # Point Buffer
//!
//! Ordered, growable storage for the points selected by a scan. Growth
//! follows a doubling policy: when the buffer is full its capacity doubles
//! before the next point is stored, so `n` appends cost `O(n)` in total.
//! Allocation failures are reported as `AllocationError` instead of
//! aborting the process.

use crate::error::{Result, SlopeError};
use crate::Point;
use std::num::NonZeroUsize;

/// Initial capacity used when none is configured.
pub const DEFAULT_INITIAL_CAPACITY: usize = 10;

#[derive(Clone, Debug)]
pub struct PointBuffer {
    points: Vec<Point>,
    capacity: usize,
}

impl PointBuffer {
    /// Allocate room for `initial_capacity` points.
    pub fn new(initial_capacity: NonZeroUsize) -> Result<Self> {
        let capacity = initial_capacity.get();
        let mut points = Vec::new();
        points
            .try_reserve_exact(capacity)
            .map_err(|_| SlopeError::AllocationError {
                requested: capacity,
            })?;
        Ok(PointBuffer { points, capacity })
    }

    /// Append a point, doubling capacity first when the buffer is full.
    ///
    /// On failure the buffer keeps every point appended so far.
    pub fn append(&mut self, point: Point) -> Result<()> {
        if self.points.len() == self.capacity {
            let grown = self
                .capacity
                .checked_mul(2)
                .ok_or(SlopeError::AllocationError {
                    requested: usize::MAX,
                })?;
            self.points
                .try_reserve_exact(grown - self.points.len())
                .map_err(|_| SlopeError::AllocationError { requested: grown })?;
            self.capacity = grown;
        }
        self.points.push(point);
        Ok(())
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn size(&self) -> usize {
        self.points.len()
    }

    /// Logical capacity under the doubling policy.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Point> {
        self.points.iter()
    }

    pub fn as_slice(&self) -> &[Point] {
        &self.points
    }

    pub fn first(&self) -> Option<&Point> {
        self.points.first()
    }

    pub fn last(&self) -> Option<&Point> {
        self.points.last()
    }
}

impl<'a> IntoIterator for &'a PointBuffer {
    type Item = &'a Point;
    type IntoIter = std::slice::Iter<'a, Point>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
