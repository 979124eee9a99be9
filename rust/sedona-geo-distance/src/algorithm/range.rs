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
use geo_types::{Line, Rect};

use crate::algorithm::point::{point_box, point_range, point_segment};
use crate::closest::{segments_intersect_any, segments_to_segments, SegmentSet};
use crate::geometry::RangeView;
use crate::options::DistanceOptions;
use crate::predicates::{range_intersects_rect, range_intersects_segment, rect_corners};
use crate::strategy::MetricStrategy;
use crate::GeoFloat;

/// Distance between a linestring (or ring boundary) and a segment
pub(crate) fn range_segment<F, S>(range: &RangeView<'_, F>, segment: Line<F>, strategy: &S) -> F
where
    F: GeoFloat,
    S: MetricStrategy<F>,
{
    if range_intersects_segment(range, segment) {
        return F::zero();
    }

    let mut best = point_range(segment.start, range, strategy)
        .min(point_range(segment.end, range, strategy));
    for v in range.vertices() {
        best = best.min(point_segment(v, segment, strategy));
    }
    best
}

/// Distance between a linestring (or ring boundary) and a box
pub(crate) fn range_box<F, S>(range: &RangeView<'_, F>, rect: Rect<F>, strategy: &S) -> F
where
    F: GeoFloat,
    S: MetricStrategy<F>,
{
    if range_intersects_rect(range, rect) {
        return F::zero();
    }

    let mut best = F::infinity();
    for v in range.vertices() {
        best = best.min(point_box(v, rect, strategy));
    }
    for corner in rect_corners(rect) {
        best = best.min(point_range(corner, range, strategy));
    }
    best
}

/// Distance between two linestrings
pub(crate) fn range_range<F, S>(
    a: &RangeView<'_, F>,
    b: &RangeView<'_, F>,
    strategy: &S,
    options: &DistanceOptions,
) -> F
where
    F: GeoFloat,
    S: MetricStrategy<F>,
{
    let a = SegmentSet::new(a.segments());
    let b = SegmentSet::new(b.segments());
    linear_linear(&a, &b, strategy, options)
}

/// Distance between two segment sets: zero if they meet, the closest end point to segment
/// distance otherwise
pub(crate) fn linear_linear<F, S>(
    a: &SegmentSet<F>,
    b: &SegmentSet<F>,
    strategy: &S,
    options: &DistanceOptions,
) -> F
where
    F: GeoFloat,
    S: MetricStrategy<F>,
{
    if segments_intersect_any(a, b, options) {
        return F::zero();
    }
    segments_to_segments(a, b, strategy, options).unwrap_or_else(F::infinity)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::strategy::Euclidean;
    use approx::assert_relative_eq;
    use geo_types::{coord, line_string, LineString};

    fn line(x1: f64, y1: f64, x2: f64, y2: f64) -> Line<f64> {
        Line::new(coord! { x: x1, y: y1 }, coord! { x: x2, y: y2 })
    }

    #[test]
    fn linestring_to_segment() {
        let ls: LineString<f64> =
            line_string![(x: 0.0, y: 0.0), (x: 4.0, y: 0.0), (x: 4.0, y: 4.0)];
        let view = RangeView::linear(&ls);

        // crossing
        assert_relative_eq!(range_segment(&view, line(2.0, -1.0, 2.0, 1.0), &Euclidean), 0.0);
        // segment end point closest
        assert_relative_eq!(range_segment(&view, line(2.0, 3.0, 2.0, 1.0), &Euclidean), 1.0);
        // linestring vertex closest
        assert_relative_eq!(range_segment(&view, line(6.0, 0.0, 6.0, 8.0), &Euclidean), 2.0);
    }

    #[test]
    fn linestring_to_box() {
        let ls: LineString<f64> = line_string![(x: 0.0, y: 0.0), (x: 10.0, y: 0.0)];
        let view = RangeView::linear(&ls);

        let rect = Rect::new(coord! { x: 4.0, y: 2.0 }, coord! { x: 6.0, y: 3.0 });
        // box corner closest to the interior of the linestring
        assert_relative_eq!(range_box(&view, rect, &Euclidean), 2.0);

        let rect = Rect::new(coord! { x: 12.0, y: 0.0 }, coord! { x: 13.0, y: 1.0 });
        assert_relative_eq!(range_box(&view, rect, &Euclidean), 2.0);

        // passes through the box
        let rect = Rect::new(coord! { x: 4.0, y: -1.0 }, coord! { x: 6.0, y: 1.0 });
        assert_relative_eq!(range_box(&view, rect, &Euclidean), 0.0);

        // fully inside
        let rect = Rect::new(coord! { x: -1.0, y: -1.0 }, coord! { x: 11.0, y: 1.0 });
        assert_relative_eq!(range_box(&view, rect, &Euclidean), 0.0);
    }

    #[test]
    fn ring_boundary_to_box() {
        let ls: LineString<f64> =
            line_string![(x: 0.0, y: 0.0), (x: 4.0, y: 0.0), (x: 0.0, y: 4.0)];
        let view = RangeView::ring(&ls);
        // only the implicit closing edge x = 0 is near the box
        let rect = Rect::new(coord! { x: -3.0, y: 1.0 }, coord! { x: -1.0, y: 2.0 });
        assert_relative_eq!(range_box(&view, rect, &Euclidean), 1.0);
    }

    #[test]
    fn linestring_to_linestring() {
        let options = DistanceOptions::default();
        let a: LineString<f64> = line_string![(x: 0.0, y: 0.0), (x: 10.0, y: 0.0)];
        let b: LineString<f64> = line_string![(x: 3.0, y: 5.0), (x: 5.0, y: 2.0), (x: 7.0, y: 5.0)];
        let c: LineString<f64> = line_string![(x: 3.0, y: 5.0), (x: 5.0, y: -2.0)];
        let (a, b, c) = (RangeView::linear(&a), RangeView::linear(&b), RangeView::linear(&c));
        assert_relative_eq!(range_range(&a, &b, &Euclidean, &options), 2.0);
        assert_relative_eq!(range_range(&b, &a, &Euclidean, &options), 2.0);
        assert_relative_eq!(range_range(&a, &c, &Euclidean, &options), 0.0);
    }
}
