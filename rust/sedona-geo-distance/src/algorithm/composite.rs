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
use geo::Intersects;
use geo_types::{Line, Rect};

use crate::algorithm::point::{point_box, point_range, point_segment};
use crate::algorithm::range::{linear_linear, range_segment};
use crate::closest::SegmentSet;
use crate::geometry::{Areal, RangeView};
use crate::options::DistanceOptions;
use crate::predicates::{
    areal_containment, areal_intersects_rect, areal_intersects_segment, rect_corners,
};
use crate::strategy::MetricStrategy;
use crate::GeoFloat;

pub(crate) fn segment_segment<F, S>(a: Line<F>, b: Line<F>, strategy: &S) -> F
where
    F: GeoFloat,
    S: MetricStrategy<F>,
{
    if a.intersects(&b) {
        return F::zero();
    }
    point_segment(a.start, b, strategy)
        .min(point_segment(a.end, b, strategy))
        .min(point_segment(b.start, a, strategy))
        .min(point_segment(b.end, a, strategy))
}

pub(crate) fn segment_box<F, S>(segment: Line<F>, rect: Rect<F>, strategy: &S) -> F
where
    F: GeoFloat,
    S: MetricStrategy<F>,
{
    if rect.intersects(&segment) {
        return F::zero();
    }
    let mut best =
        point_box(segment.start, rect, strategy).min(point_box(segment.end, rect, strategy));
    for corner in rect_corners(rect) {
        best = best.min(point_segment(corner, segment, strategy));
    }
    best
}

pub(crate) fn box_box<F, S>(a: Rect<F>, b: Rect<F>, strategy: &S) -> F
where
    F: GeoFloat,
    S: MetricStrategy<F>,
{
    if a.intersects(&b) {
        return F::zero();
    }
    let mut best = F::infinity();
    for corner in rect_corners(a) {
        best = best.min(point_box(corner, b, strategy));
    }
    for corner in rect_corners(b) {
        best = best.min(point_box(corner, a, strategy));
    }
    best
}

/// Distance between a polygon (or ring) and a segment: the closest ring wins
pub(crate) fn areal_segment<F, S>(areal: &Areal<'_, F>, segment: Line<F>, strategy: &S) -> F
where
    F: GeoFloat,
    S: MetricStrategy<F>,
{
    if areal_intersects_segment(areal, segment) {
        return F::zero();
    }
    let mut best = F::infinity();
    for ring in areal.rings() {
        best = best.min(range_segment(&ring, segment, strategy));
        if best == F::zero() {
            break;
        }
    }
    best
}

pub(crate) fn areal_box<F, S>(areal: &Areal<'_, F>, rect: Rect<F>, strategy: &S) -> F
where
    F: GeoFloat,
    S: MetricStrategy<F>,
{
    if areal_intersects_rect(areal, rect) {
        return F::zero();
    }
    // the corners are outside the areal geometry, so only its boundary matters
    let mut best = F::infinity();
    for corner in rect_corners(rect) {
        for ring in areal.rings() {
            best = best.min(point_range(corner, &ring, strategy));
        }
    }
    for v in areal.vertices() {
        best = best.min(point_box(v, rect, strategy));
    }
    best
}

/// Distance between a polygon (or ring) and a linestring
pub(crate) fn areal_linear<F, S>(
    areal: &Areal<'_, F>,
    linear: &RangeView<'_, F>,
    strategy: &S,
    options: &DistanceOptions,
) -> F
where
    F: GeoFloat,
    S: MetricStrategy<F>,
{
    if let Some(first) = linear.vertices().next() {
        if areal_containment(first, areal).is_covered() {
            return F::zero();
        }
    }
    let boundary = SegmentSet::new(areal.segments());
    let linear = SegmentSet::new(linear.segments());
    linear_linear(&boundary, &linear, strategy, options)
}

/// Distance between two polygons (or rings)
pub(crate) fn areal_areal<F, S>(
    a: &Areal<'_, F>,
    b: &Areal<'_, F>,
    strategy: &S,
    options: &DistanceOptions,
) -> F
where
    F: GeoFloat,
    S: MetricStrategy<F>,
{
    // one inside the other, the boundaries need not cross
    let a_first = a.exterior().vertices().next();
    let b_first = b.exterior().vertices().next();
    if a_first.is_some_and(|c| areal_containment(c, b).is_covered())
        || b_first.is_some_and(|c| areal_containment(c, a).is_covered())
    {
        return F::zero();
    }
    let a = SegmentSet::new(a.segments());
    let b = SegmentSet::new(b.segments());
    linear_linear(&a, &b, strategy, options)
}
