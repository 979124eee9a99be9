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
//! Closest pair searches between large element sets.
//!
//! Every search takes the metric strategy to evaluate candidates with and returns values
//! in that strategy's units. Candidates are ordered by Cartesian distance inside the
//! spatial indexes, which is valid for every strategy that is monotonic in Euclidean
//! distance (see [`MetricStrategy`]).
use geo::{BoundingRect, Intersects};
use geo_types::{Coord, Line, Rect};

use crate::options::{ClosestPairAlgorithm, DistanceOptions};
use crate::predicates::{any_segments_intersect, clamp_to_rect};
use crate::strategy::MetricStrategy;
use crate::GeoFloat;

pub mod brute_force;
pub mod grid;
pub mod index;

use index::{to_point, IndexedEnvelope, IndexedPoint, IndexedSegment, SpatialIndex};

/// The segments of one or more linear or areal geometries together with their end points
#[derive(Debug, Clone, Default)]
pub struct SegmentSet<F: GeoFloat> {
    vertices: Vec<Coord<F>>,
    segments: Vec<Line<F>>,
}

impl<F: GeoFloat> SegmentSet<F> {
    pub fn new(segments: impl IntoIterator<Item = Line<F>>) -> Self {
        let segments: Vec<_> = segments.into_iter().collect();
        let mut vertices = Vec::with_capacity(segments.len() * 2);
        for segment in &segments {
            vertices.push(segment.start);
            if segment.end != segment.start {
                vertices.push(segment.end);
            }
        }
        Self { vertices, segments }
    }

    pub fn vertices(&self) -> &[Coord<F>] {
        &self.vertices
    }

    pub fn segments(&self) -> &[Line<F>] {
        &self.segments
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}

/// Minimum distance between two point sets using the configured closest pair algorithm.
///
/// The R-tree search indexes the smaller set and queries the nearest neighbor of every
/// point of the larger one. Inputs below the index threshold are scanned pairwise.
pub fn points_to_points<F, S>(
    a: &[Coord<F>],
    b: &[Coord<F>],
    strategy: &S,
    options: &DistanceOptions,
) -> Option<F>
where
    F: GeoFloat,
    S: MetricStrategy<F>,
{
    if a.is_empty() || b.is_empty() {
        return None;
    }

    match options.closest_pair {
        ClosestPairAlgorithm::BruteForce => brute_force::points_to_points(a, b, strategy),
        ClosestPairAlgorithm::Grid => {
            let mut rng = options.rng();
            grid::closest_pair(a, b, strategy, options.samples_per_element, &mut rng)
        }
        ClosestPairAlgorithm::RTree => {
            if !options.use_index(a.len(), b.len()) {
                return brute_force::points_to_points(a, b, strategy);
            }
            let (indexed, queries) = if a.len() <= b.len() { (a, b) } else { (b, a) };
            log::debug!(
                "closest pair: rtree over {} points, {} queries",
                indexed.len(),
                queries.len()
            );
            let index = SpatialIndex::bulk_load(
                indexed
                    .iter()
                    .enumerate()
                    .map(|(index, &coord)| IndexedPoint { coord, index })
                    .collect(),
            );
            min_over(queries.iter().copied(), |q| {
                index
                    .nearest_one(&to_point(q))
                    .map(|nearest| strategy.point_point(q, nearest.coord))
            })
        }
    }
}

/// Minimum distance from a point set to a segment set
pub fn points_to_segments<F, S>(
    points: &[Coord<F>],
    segments: &[Line<F>],
    strategy: &S,
    options: &DistanceOptions,
) -> Option<F>
where
    F: GeoFloat,
    S: MetricStrategy<F>,
{
    if points.is_empty() || segments.is_empty() {
        return None;
    }
    if !options.use_index(points.len(), segments.len()) {
        return brute_force::points_to_segments(points, segments, strategy);
    }

    log::debug!(
        "points to segments: rtree over {} segments, {} queries",
        segments.len(),
        points.len()
    );
    let index = segment_index(segments);
    min_over(points.iter().copied(), |p| {
        index
            .nearest_one(&to_point(p))
            .map(|nearest| strategy.point_segment(p, nearest.segment.start, nearest.segment.end))
    })
}

/// Minimum distance between two segment sets that do not intersect.
///
/// For disjoint segments the minimum is always attained at an end point of one of them,
/// so every vertex of each set is matched against the segments of the other.
pub fn segments_to_segments<F, S>(
    a: &SegmentSet<F>,
    b: &SegmentSet<F>,
    strategy: &S,
    options: &DistanceOptions,
) -> Option<F>
where
    F: GeoFloat,
    S: MetricStrategy<F>,
{
    let forward = points_to_segments(a.vertices(), b.segments(), strategy, options)?;
    if forward == F::zero() {
        return Some(forward);
    }
    let backward = points_to_segments(b.vertices(), a.segments(), strategy, options)?;
    Some(forward.min(backward))
}

/// Whether any segment of `a` meets any segment of `b`
pub fn segments_intersect_any<F: GeoFloat>(
    a: &SegmentSet<F>,
    b: &SegmentSet<F>,
    options: &DistanceOptions,
) -> bool {
    if a.is_empty() || b.is_empty() {
        return false;
    }
    if !options.use_index(a.len(), b.len()) {
        return any_segments_intersect(
            a.segments().iter().copied(),
            b.segments().iter().copied(),
        );
    }

    let (indexed, queries) = if a.len() >= b.len() { (a, b) } else { (b, a) };
    log::debug!(
        "segment intersection: rtree over {} segments, {} queries",
        indexed.len(),
        queries.len()
    );
    let index = segment_index(indexed.segments());
    queries.segments().iter().any(|&query| {
        let envelope = query.bounding_rect();
        let aabb = rstar::AABB::from_corners(to_point(envelope.min()), to_point(envelope.max()));
        index
            .intersecting(&aabb)
            .any(|candidate| query.intersects(&candidate.segment))
    })
}

/// Minimum distance from a point set to a set of members known by their envelopes.
///
/// For every query point the member envelopes are visited in increasing distance, and the
/// visit stops as soon as the distance to the next envelope is not below the current best.
/// `member_distance(point, member_index)` evaluates the exact distance in `strategy` units.
pub fn points_to_envelopes<F, S, D>(
    points: &[Coord<F>],
    envelopes: &[(usize, Rect<F>)],
    strategy: &S,
    mut member_distance: D,
) -> Option<F>
where
    F: GeoFloat,
    S: MetricStrategy<F>,
    D: FnMut(Coord<F>, usize) -> F,
{
    if points.is_empty() || envelopes.is_empty() {
        return None;
    }

    log::debug!(
        "points to envelopes: rtree over {} envelopes, {} queries",
        envelopes.len(),
        points.len()
    );
    let index = SpatialIndex::bulk_load(
        envelopes
            .iter()
            .map(|&(index, rect)| IndexedEnvelope { rect, index })
            .collect(),
    );

    let mut best: Option<F> = None;
    for &p in points {
        for (candidate, _) in index.nearest_iter(&to_point(p)) {
            let lower_bound = strategy.point_point(p, clamp_to_rect(p, candidate.rect));
            if best.is_some_and(|best| lower_bound >= best) {
                break;
            }
            let d = member_distance(p, candidate.index);
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

fn segment_index<F: GeoFloat>(segments: &[Line<F>]) -> SpatialIndex<IndexedSegment<F>> {
    SpatialIndex::bulk_load(
        segments
            .iter()
            .enumerate()
            .map(|(index, &segment)| IndexedSegment { segment, index })
            .collect(),
    )
}

/// Running minimum over per-item results with a zero early exit
fn min_over<F, T>(items: impl Iterator<Item = T>, mut f: impl FnMut(T) -> Option<F>) -> Option<F>
where
    F: GeoFloat,
{
    let mut best: Option<F> = None;
    for item in items {
        if let Some(d) = f(item) {
            if best.map_or(true, |best| d < best) {
                best = Some(d);
                if d == F::zero() {
                    break;
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
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};
    use rstest::rstest;

    fn random_coords(rng: &mut StdRng, n: usize, offset: f64) -> Vec<Coord<f64>> {
        (0..n)
            .map(|_| {
                let x = rng.gen_range(0.0..100.0) + offset;
                coord! { x: x, y: rng.gen_range(0.0..100.0) }
            })
            .collect()
    }

    fn random_segments(rng: &mut StdRng, n: usize, offset: f64) -> Vec<Line<f64>> {
        (0..n)
            .map(|_| {
                let x = rng.gen_range(0.0..100.0) + offset;
                let start = coord! { x: x, y: rng.gen_range(0.0..100.0) };
                let (dx, dy) = (rng.gen_range(-3.0..3.0), rng.gen_range(-3.0..3.0));
                let end = coord! { x: start.x + dx, y: start.y + dy };
                Line::new(start, end)
            })
            .collect()
    }

    #[rstest]
    fn points_to_points_matches_brute_force(
        #[values(
            ClosestPairAlgorithm::RTree,
            ClosestPairAlgorithm::Grid,
            ClosestPairAlgorithm::BruteForce
        )]
        algorithm: ClosestPairAlgorithm,
        #[values(1, 10, 300)] n: usize,
    ) {
        let mut rng = StdRng::seed_from_u64(n as u64);
        let options = DistanceOptions::default()
            .with_closest_pair(algorithm)
            .with_index_threshold(0);
        for round in 0..5 {
            let a = random_coords(&mut rng, n, round as f64 * 10.0);
            let b = random_coords(&mut rng, n / 2 + 1, 50.0);
            let expected = brute_force::points_to_points(&a, &b, &Euclidean).unwrap();
            let actual = points_to_points(&a, &b, &Euclidean, &options).unwrap();
            assert_relative_eq!(actual, expected);
            let actual = points_to_points(&b, &a, &ComparableEuclidean, &options).unwrap();
            assert_relative_eq!(actual, expected * expected, max_relative = 1e-12);
        }
    }

    #[test]
    fn points_to_points_empty() {
        let a = vec![coord! { x: 0.0, y: 0.0 }];
        let options = DistanceOptions::default();
        assert!(points_to_points(&a, &[], &Euclidean, &options).is_none());
        assert!(points_to_segments(&a, &[], &Euclidean, &options).is_none());
    }

    #[rstest]
    fn points_to_segments_matches_brute_force(#[values(0, 1_000_000)] threshold: usize) {
        let mut rng = StdRng::seed_from_u64(99);
        let options = DistanceOptions::default().with_index_threshold(threshold);
        for _ in 0..10 {
            let points = random_coords(&mut rng, 80, 0.0);
            let segments = random_segments(&mut rng, 120, 30.0);
            let expected = brute_force::points_to_segments(&points, &segments, &Euclidean).unwrap();
            let actual = points_to_segments(&points, &segments, &Euclidean, &options).unwrap();
            assert_relative_eq!(actual, expected);
        }
    }

    #[test]
    fn parallel_segment_sets() {
        let a = SegmentSet::new([
            Line::new(coord! { x: 0.0, y: 0.0 }, coord! { x: 0.0, y: 2.0 }),
            Line::new(coord! { x: 0.0, y: 2.0 }, coord! { x: 0.0, y: 4.0 }),
        ]);
        let b = SegmentSet::new([Line::new(coord! { x: 1.0, y: 3.0 }, coord! { x: 1.0, y: -5.0 })]);
        assert_eq!(a.len(), 2);
        assert_eq!(a.vertices().len(), 4);

        for threshold in [0, 1000] {
            let options = DistanceOptions::default().with_index_threshold(threshold);
            assert!(!segments_intersect_any(&a, &b, &options));
            let d = segments_to_segments(&a, &b, &Euclidean, &options).unwrap();
            assert_relative_eq!(d, 1.0);
        }
    }

    #[rstest]
    fn segment_intersection_with_index(#[values(0, 1_000_000)] threshold: usize) {
        let options = DistanceOptions::default().with_index_threshold(threshold);
        // a long zig-zag crossed once by a vertical segment
        let zigzag = SegmentSet::new((0..100).map(|i| {
            let x = i as f64;
            let (y1, y2) = if i % 2 == 0 { (0.0, 1.0) } else { (1.0, 0.0) };
            Line::new(coord! { x: x, y: y1 }, coord! { x: x + 1.0, y: y2 })
        }));
        let crossing = SegmentSet::new([Line::new(
            coord! { x: 50.5, y: -1.0 },
            coord! { x: 50.5, y: 2.0 },
        )]);
        let above = SegmentSet::new([Line::new(
            coord! { x: 10.0, y: 3.0 },
            coord! { x: 90.0, y: 3.0 },
        )]);

        assert!(segments_intersect_any(&zigzag, &crossing, &options));
        assert!(segments_intersect_any(&crossing, &zigzag, &options));
        assert!(!segments_intersect_any(&zigzag, &above, &options));
        assert!(!segments_intersect_any(&zigzag, &SegmentSet::default(), &options));

        let d = segments_to_segments(&zigzag, &above, &Euclidean, &options).unwrap();
        assert_relative_eq!(d, 2.0);
    }

    #[test]
    fn envelope_stream_pruning() {
        let boxes: Vec<_> = (0..50)
            .map(|i| {
                let x = (i * 4) as f64;
                (i, Rect::new(coord! { x: x, y: 0.0 }, coord! { x: x + 1.0, y: 1.0 }))
            })
            .collect();
        let points = vec![coord! { x: 40.5, y: 3.0 }, coord! { x: 300.0, y: 0.5 }];

        let mut evaluated = 0;
        let d = points_to_envelopes(&points, &boxes, &Euclidean, |p, i| {
            evaluated += 1;
            let rect = boxes[i].1;
            Euclidean.point_point(p, clamp_to_rect(p, rect))
        })
        .unwrap();
        assert_relative_eq!(d, 2.0);
        // only a handful of members are evaluated out of the fifty
        assert!(evaluated < 10, "evaluated {evaluated} members");

        let empty = points_to_envelopes(&points, &[], &Euclidean, |_, _| 0.0);
        assert!(empty.is_none());
    }
}
