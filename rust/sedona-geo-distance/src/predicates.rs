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
//! Intersection and containment tests used to short-circuit distance computations.
//!
//! All predicates are boundary inclusive: touching geometries intersect, and a point on
//! the boundary of an areal geometry is covered by it.
use geo::coordinate_position::{coord_pos_relative_to_ring, CoordPos};
use geo::{BoundingRect, GeoNum, Intersects};
use geo_types::{Coord, CoordNum, Line, Rect};
use num_traits::clamp;

use crate::geometry::{Areal, RangeView};

/// Position of a point relative to a ring or an areal geometry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Containment {
    Inside,
    Boundary,
    Outside,
}

impl Containment {
    /// Inside or on the boundary
    pub fn is_covered(&self) -> bool {
        !matches!(self, Containment::Outside)
    }
}

impl From<CoordPos> for Containment {
    fn from(position: CoordPos) -> Self {
        match position {
            CoordPos::Inside => Containment::Inside,
            CoordPos::OnBoundary => Containment::Boundary,
            CoordPos::Outside => Containment::Outside,
        }
    }
}

/// The four corners of a box, counter clockwise from the minimum corner
pub fn rect_corners<T: CoordNum>(rect: Rect<T>) -> [Coord<T>; 4] {
    let min = rect.min();
    let max = rect.max();
    [
        min,
        Coord { x: max.x, y: min.y },
        max,
        Coord { x: min.x, y: max.y },
    ]
}

/// The point of a box closest to `p`
#[inline]
pub fn clamp_to_rect<T: CoordNum>(p: Coord<T>, rect: Rect<T>) -> Coord<T> {
    let (min, max) = (rect.min(), rect.max());
    Coord {
        x: clamp(p.x, min.x, max.x),
        y: clamp(p.y, min.y, max.y),
    }
}

/// Position of a point relative to a ring
pub(crate) fn ring_containment<T: GeoNum>(p: Coord<T>, ring: &RangeView<'_, T>) -> Containment {
    coord_pos_relative_to_ring(p, &ring.closed()).into()
}

/// Position of a point relative to a polygon or ring.
///
/// A point is inside when it is inside the exterior and not strictly inside any hole.
/// Overlapping holes are invalid input: a point covered by two holes is reported as
/// outside, like a point covered by one.
pub(crate) fn areal_containment<T: GeoNum>(p: Coord<T>, areal: &Areal<'_, T>) -> Containment {
    match ring_containment(p, &areal.exterior()) {
        Containment::Inside => {}
        other => return other,
    }
    for hole in areal.interiors() {
        match ring_containment(p, &hole) {
            Containment::Inside => return Containment::Outside,
            Containment::Boundary => return Containment::Boundary,
            Containment::Outside => {}
        }
    }
    Containment::Inside
}

/// Whether any edge of `a` meets any edge of `b`, by pairwise comparison
pub(crate) fn any_segments_intersect<T: GeoNum>(
    a: impl Iterator<Item = Line<T>>,
    b: impl Iterator<Item = Line<T>> + Clone,
) -> bool {
    a.into_iter().any(|sa| {
        let envelope = sa.bounding_rect();
        b.clone()
            .any(|sb| envelope.intersects(&sb.bounding_rect()) && sa.intersects(&sb))
    })
}

/// Whether a range (linestring or ring boundary) meets a segment
pub(crate) fn range_intersects_segment<T: GeoNum>(
    range: &RangeView<'_, T>,
    segment: Line<T>,
) -> bool {
    any_segments_intersect(range.segments(), std::iter::once(segment))
}

/// Whether a range (linestring or ring boundary) meets a box
pub(crate) fn range_intersects_rect<T: GeoNum>(range: &RangeView<'_, T>, rect: Rect<T>) -> bool {
    range.segments().any(|segment| rect.intersects(&segment))
}

/// Whether an areal geometry meets a segment: either the segment crosses the boundary or
/// lies inside the areal geometry.
pub(crate) fn areal_intersects_segment<T: GeoNum>(
    areal: &Areal<'_, T>,
    segment: Line<T>,
) -> bool {
    areal_containment(segment.start, areal).is_covered()
        || any_segments_intersect(areal.segments(), std::iter::once(segment))
}

/// Whether an areal geometry meets a box: the boundary crosses the box, or the box lies
/// inside the areal geometry.
pub(crate) fn areal_intersects_rect<T: GeoNum>(areal: &Areal<'_, T>, rect: Rect<T>) -> bool {
    areal.segments().any(|segment| rect.intersects(&segment))
        || areal_containment(rect.min(), areal).is_covered()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Ring;
    use geo_types::{coord, line_string, polygon, LineString};

    fn line(x1: f64, y1: f64, x2: f64, y2: f64) -> Line<f64> {
        Line::new(coord! { x: x1, y: y1 }, coord! { x: x2, y: y2 })
    }

    #[test]
    fn box_corners_and_clamping() {
        let rect = Rect::new(coord! { x: 0.0, y: 0.0 }, coord! { x: 2.0, y: 3.0 });
        assert_eq!(
            rect_corners(rect),
            [
                coord! { x: 0.0, y: 0.0 },
                coord! { x: 2.0, y: 0.0 },
                coord! { x: 2.0, y: 3.0 },
                coord! { x: 0.0, y: 3.0 },
            ]
        );
        assert_eq!(
            clamp_to_rect(coord! { x: -1.0, y: 1.0 }, rect),
            coord! { x: 0.0, y: 1.0 }
        );
        assert_eq!(
            clamp_to_rect(coord! { x: 3.0, y: 5.0 }, rect),
            coord! { x: 2.0, y: 3.0 }
        );
        assert_eq!(
            clamp_to_rect(coord! { x: 1.0, y: 1.5 }, rect),
            coord! { x: 1.0, y: 1.5 }
        );
    }

    #[test]
    fn ring_positions() {
        let square = Ring::open(vec![(0.0, 0.0), (4.0, 0.0), (4.0, 4.0), (0.0, 4.0)]);
        let view = RangeView::ring(square.coords());
        assert_eq!(ring_containment(coord! { x: 2.0, y: 2.0 }, &view), Containment::Inside);
        assert_eq!(ring_containment(coord! { x: 0.0, y: 2.0 }, &view), Containment::Boundary);
        assert_eq!(ring_containment(coord! { x: 4.0, y: 4.0 }, &view), Containment::Boundary);
        assert_eq!(ring_containment(coord! { x: 5.0, y: 2.0 }, &view), Containment::Outside);
        // left of the implicit closing edge
        assert_eq!(ring_containment(coord! { x: -1.0, y: 2.0 }, &view), Containment::Outside);

        // clockwise orientation gives the same answer
        let clockwise = Ring::closed(vec![(0.0, 0.0), (0.0, 4.0), (4.0, 4.0), (4.0, 0.0)]);
        let view = RangeView::ring(clockwise.coords());
        assert_eq!(ring_containment(coord! { x: 2.0, y: 2.0 }, &view), Containment::Inside);
        assert_eq!(ring_containment(coord! { x: -1.0, y: 4.0 }, &view), Containment::Outside);
        assert_eq!(ring_containment(coord! { x: 4.0, y: -1.0 }, &view), Containment::Outside);

        let empty: LineString<f64> = LineString::new(vec![]);
        let view = RangeView::ring(&empty);
        assert_eq!(ring_containment(coord! { x: 0.0, y: 0.0 }, &view), Containment::Outside);
    }

    #[test]
    fn polygon_with_hole() {
        let poly = polygon![
            exterior: [(x: 0.0, y: 0.0), (x: 10.0, y: 0.0), (x: 10.0, y: 10.0), (x: 0.0, y: 10.0)],
            interiors: [[(x: 4.0, y: 4.0), (x: 6.0, y: 4.0), (x: 6.0, y: 6.0), (x: 4.0, y: 6.0)]],
        ];
        let areal = Areal::from_polygon(&poly);
        assert_eq!(areal_containment(coord! { x: 1.0, y: 1.0 }, &areal), Containment::Inside);
        assert_eq!(areal_containment(coord! { x: 5.0, y: 5.0 }, &areal), Containment::Outside);
        assert_eq!(areal_containment(coord! { x: 4.0, y: 5.0 }, &areal), Containment::Boundary);
        assert_eq!(areal_containment(coord! { x: 11.0, y: 5.0 }, &areal), Containment::Outside);

        // segment fully inside the hole does not touch the polygon
        assert!(!areal_intersects_segment(&areal, line(4.5, 4.5, 5.5, 5.5)));
        // segment inside the polygon body
        assert!(areal_intersects_segment(&areal, line(1.0, 1.0, 2.0, 1.0)));
        // segment crossing the exterior from outside
        assert!(areal_intersects_segment(&areal, line(-1.0, 5.0, 1.0, 5.0)));

        let inside_hole = Rect::new(coord! { x: 4.5, y: 4.5 }, coord! { x: 5.5, y: 5.5 });
        assert!(!areal_intersects_rect(&areal, inside_hole));
        let covering = Rect::new(coord! { x: -1.0, y: -1.0 }, coord! { x: 11.0, y: 11.0 });
        assert!(areal_intersects_rect(&areal, covering));
        let inside_body = Rect::new(coord! { x: 1.0, y: 1.0 }, coord! { x: 2.0, y: 2.0 });
        assert!(areal_intersects_rect(&areal, inside_body));
    }

    #[test]
    fn range_predicates() {
        let ls: LineString<f64> =
            line_string![(x: 0.0, y: 0.0), (x: 2.0, y: 0.0), (x: 2.0, y: 2.0)];
        let view = RangeView::linear(&ls);
        assert!(range_intersects_segment(&view, line(1.0, -1.0, 1.0, 1.0)));
        assert!(!range_intersects_segment(&view, line(0.0, 1.0, 1.0, 2.0)));
        // touching an end point counts
        assert!(range_intersects_segment(&view, line(2.0, 2.0, 3.0, 3.0)));

        let rect = Rect::new(coord! { x: 0.5, y: 0.5 }, coord! { x: 1.5, y: 1.5 });
        assert!(!range_intersects_rect(&view, rect));
        let rect = Rect::new(coord! { x: 1.5, y: 0.5 }, coord! { x: 2.5, y: 1.5 });
        assert!(range_intersects_rect(&view, rect));
    }

    #[test]
    fn pairwise_segment_intersection() {
        let a = [line(0.0, 0.0, 2.0, 2.0), line(5.0, 5.0, 6.0, 5.0)];
        let b = [line(0.0, 2.0, 2.0, 0.0)];
        assert!(any_segments_intersect(a.into_iter(), b.into_iter()));

        let b = [line(0.0, 1.0, 0.5, 2.0), line(1.0, 1.0, 1.0, 1.0)];
        assert!(any_segments_intersect(a.into_iter(), b.into_iter()));

        let b = [line(0.0, 1.0, 0.5, 2.0), line(10.0, 0.0, 10.0, 3.0)];
        assert!(!any_segments_intersect(a.into_iter(), b.into_iter()));
    }
}
