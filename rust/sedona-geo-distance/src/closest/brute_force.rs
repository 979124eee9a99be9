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
//! Exhaustive pairwise scans, the baseline of the accelerated searches and the per-cell
//! helper of the grid search.
use geo_types::{Coord, Line};

use crate::strategy::MetricStrategy;
use crate::GeoFloat;

/// Minimum distance between two point sets. `None` if either set is empty.
pub fn points_to_points<F, S>(a: &[Coord<F>], b: &[Coord<F>], strategy: &S) -> Option<F>
where
    F: GeoFloat,
    S: MetricStrategy<F>,
{
    if b.is_empty() {
        return None;
    }
    let mut best: Option<F> = None;
    for &p in a {
        for &q in b {
            let d = strategy.point_point(p, q);
            if best.map_or(true, |best| d < best) {
                best = Some(d);
                if d == F::zero() {
                    return best;
                }
            }
        }
    }
    best
}

/// Minimum distance from a point set to a segment set. `None` if either set is empty.
pub fn points_to_segments<F, S>(
    points: &[Coord<F>],
    segments: &[Line<F>],
    strategy: &S,
) -> Option<F>
where
    F: GeoFloat,
    S: MetricStrategy<F>,
{
    if segments.is_empty() {
        return None;
    }
    let mut best: Option<F> = None;
    for &p in points {
        for segment in segments {
            let d = strategy.point_segment(p, segment.start, segment.end);
            if best.map_or(true, |best| d < best) {
                best = Some(d);
                if d == F::zero() {
                    return best;
                }
            }
        }
    }
    best
}

/// Minimum distance between the points of `a` and `b` selected by the index lists
pub(crate) fn indexed_points_to_points<F, S>(
    a: &[Coord<F>],
    a_indices: &[usize],
    b: &[Coord<F>],
    b_indices: &[usize],
    strategy: &S,
) -> Option<F>
where
    F: GeoFloat,
    S: MetricStrategy<F>,
{
    let mut best: Option<F> = None;
    for &i in a_indices {
        for &j in b_indices {
            let d = strategy.point_point(a[i], b[j]);
            if best.map_or(true, |best| d < best) {
                best = Some(d);
                if d == F::zero() {
                    return best;
                }
            }
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::strategy::{ComparableEuclidean, Euclidean};
    use approx::assert_relative_eq;
    use geo_types::coord;

    #[test]
    fn closest_points() {
        let a = vec![coord! { x: 0.0, y: 0.0 }, coord! { x: 5.0, y: 5.0 }];
        let b = vec![coord! { x: 0.0, y: 1.0 }, coord! { x: 10.0, y: 10.0 }];
        assert_relative_eq!(points_to_points(&a, &b, &Euclidean).unwrap(), 1.0);
        assert_relative_eq!(points_to_points(&b, &a, &ComparableEuclidean).unwrap(), 1.0);

        let b = vec![coord! { x: 8.0, y: 9.0 }];
        assert_relative_eq!(points_to_points(&a, &b, &Euclidean).unwrap(), 5.0);
    }

    #[test]
    fn empty_sides() {
        let a = vec![coord! { x: 0.0, y: 0.0 }];
        let empty: Vec<Coord<f64>> = vec![];
        assert!(points_to_points(&a, &empty, &Euclidean).is_none());
        assert!(points_to_points(&empty, &a, &Euclidean).is_none());
        assert!(points_to_segments(&a, &[], &Euclidean).is_none());
    }

    #[test]
    fn coincident_points() {
        let a = vec![coord! { x: 1.0, y: 1.0 }, coord! { x: 2.0, y: 2.0 }];
        let b = vec![coord! { x: 7.0, y: 1.0 }, coord! { x: 2.0, y: 2.0 }];
        assert_eq!(points_to_points(&a, &b, &Euclidean), Some(0.0));
        assert_eq!(
            indexed_points_to_points(&a, &[1], &b, &[0, 1], &Euclidean),
            Some(0.0)
        );
        assert_relative_eq!(
            indexed_points_to_points(&a, &[0], &b, &[0], &Euclidean).unwrap(),
            6.0
        );
    }

    #[test]
    fn closest_point_segment() {
        let points = vec![coord! { x: 5.0, y: 4.0 }, coord! { x: -3.0, y: 4.0 }];
        let segments = vec![
            Line::new(coord! { x: 0.0, y: 0.0 }, coord! { x: 10.0, y: 0.0 }),
            Line::new(coord! { x: 20.0, y: 0.0 }, coord! { x: 20.0, y: 10.0 }),
        ];
        assert_relative_eq!(
            points_to_segments(&points, &segments, &Euclidean).unwrap(),
            4.0
        );
        assert_relative_eq!(
            points_to_segments(&points, &segments, &ComparableEuclidean).unwrap(),
            16.0
        );
    }
}
