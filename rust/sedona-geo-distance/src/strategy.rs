// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.
//! Pluggable metrics.
//!
//! Every distance algorithm in this crate is composed from the two primitive evaluations
//! of a [`MetricStrategy`]: point to point and point to segment. Each strategy has a
//! *comparable* form that preserves the ordering of distances while skipping expensive
//! operations, plus a conversion from comparable values back to true distances.
use geo_types::Coord;
use num_traits::Float;

use crate::GeoFloat;

/// A distance metric over planar coordinates.
///
/// Implementations must guarantee that for any fixed strategy the ordering of
/// `comparable().point_point(..)` values matches the ordering of `point_point(..)` values
/// and that `comparable_to_regular` maps the former onto the latter.
///
/// The spatial indexes used for large inputs order candidates by Cartesian distance, so
/// strategies must also be monotonic in Euclidean distance: if `a` is closer to `p` than
/// `b` in the Euclidean sense, it must not be farther under the strategy.
pub trait MetricStrategy<F: GeoFloat> {
    /// The comparable form of this strategy
    type Comparable: MetricStrategy<F>;

    /// Distance between two points
    fn point_point(&self, a: Coord<F>, b: Coord<F>) -> F;

    /// Distance from a point to the segment `start`-`end`. A degenerate segment behaves
    /// like a point.
    fn point_segment(&self, p: Coord<F>, start: Coord<F>, end: Coord<F>) -> F;

    /// The comparable form of this strategy
    fn comparable(&self) -> Self::Comparable;

    /// Convert a value produced by [`Self::comparable`] into a value of this strategy
    fn comparable_to_regular(&self, value: F) -> F;
}

/// Pythagorean distance in the plane
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Euclidean;

/// Squared Euclidean distance
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ComparableEuclidean;

/// The strategy used when none is given
pub fn default_strategy() -> Euclidean {
    Euclidean
}

impl<F: GeoFloat> MetricStrategy<F> for Euclidean {
    type Comparable = ComparableEuclidean;

    fn point_point(&self, a: Coord<F>, b: Coord<F>) -> F {
        (a.x - b.x).hypot(a.y - b.y)
    }

    fn point_segment(&self, p: Coord<F>, start: Coord<F>, end: Coord<F>) -> F {
        // Degenerate case: segment is a point
        if start == end {
            return self.point_point(p, start);
        }

        let dx = end.x - start.x;
        let dy = end.y - start.y;
        let d_squared = dx * dx + dy * dy;
        let r = ((p.x - start.x) * dx + (p.y - start.y) * dy) / d_squared;

        if r <= F::zero() {
            return self.point_point(p, start);
        }
        if r >= F::one() {
            return self.point_point(p, end);
        }

        // Closest point is inside the segment, use the perpendicular distance
        let s = ((start.y - p.y) * dx - (start.x - p.x) * dy) / d_squared;
        Float::abs(s) * dx.hypot(dy)
    }

    fn comparable(&self) -> ComparableEuclidean {
        ComparableEuclidean
    }

    fn comparable_to_regular(&self, value: F) -> F {
        value.sqrt()
    }
}

impl<F: GeoFloat> MetricStrategy<F> for ComparableEuclidean {
    type Comparable = ComparableEuclidean;

    fn point_point(&self, a: Coord<F>, b: Coord<F>) -> F {
        let dx = a.x - b.x;
        let dy = a.y - b.y;
        dx * dx + dy * dy
    }

    fn point_segment(&self, p: Coord<F>, start: Coord<F>, end: Coord<F>) -> F {
        if start == end {
            return self.point_point(p, start);
        }

        let dx = end.x - start.x;
        let dy = end.y - start.y;
        let d_squared = dx * dx + dy * dy;
        let r = ((p.x - start.x) * dx + (p.y - start.y) * dy) / d_squared;

        if r <= F::zero() {
            return self.point_point(p, start);
        }
        if r >= F::one() {
            return self.point_point(p, end);
        }

        let s = ((start.y - p.y) * dx - (start.x - p.x) * dy) / d_squared;
        s * s * d_squared
    }

    fn comparable(&self) -> ComparableEuclidean {
        ComparableEuclidean
    }

    fn comparable_to_regular(&self, value: F) -> F {
        value
    }
}
