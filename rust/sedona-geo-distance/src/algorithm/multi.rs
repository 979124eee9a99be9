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
//! Reductions over the members of multi geometries.
//!
//! Members are compared in the comparable space of the strategy and the final minimum is
//! converted back once. Empty members are skipped and an exact zero stops the reduction.
use geo::BoundingRect;
use geo_types::{Coord, Line, LineString, Point};

use crate::algorithm::point::point_areal;
use crate::algorithm::range::linear_linear;
use crate::closest::{self, SegmentSet};
use crate::dispatch;
use crate::geometry::{Areal, Multi, RangeView, Single};
use crate::options::DistanceOptions;
use crate::strategy::MetricStrategy;
use crate::GeoFloat;

/// Distance between a single geometry and a multi geometry
pub(crate) fn single_to_multi<F, S>(
    single: Single<'_, F>,
    multi: Multi<'_, F>,
    strategy: &S,
    options: &DistanceOptions,
) -> F
where
    F: GeoFloat,
    S: MetricStrategy<F>,
{
    let comparable = strategy.comparable();
    let value = match (single, multi) {
        (Single::Segment(segment), Multi::Points(points)) => {
            closest::points_to_segments(&coords(points), &[segment], &comparable, options)
        }
        (Single::Linear(ls), Multi::Points(points)) => {
            log::trace!("linestring to multipoint via point to segment search");
            let segments: Vec<Line<F>> = RangeView::linear(ls).segments().collect();
            closest::points_to_segments(&coords(points), &segments, &comparable, options)
        }
        (Single::Linear(ls), Multi::Lines(lines)) => {
            log::trace!("linestring to multilinestring via segment set search");
            let a = SegmentSet::new(RangeView::linear(ls).segments());
            let b = lines_segment_set(lines);
            Some(linear_linear(&a, &b, &comparable, options))
        }
        _ => Some(reduce(
            multi
                .members()
                .map(|member| dispatch::single(single, member, &comparable, options)),
        )),
    };
    strategy.comparable_to_regular(value.unwrap_or_else(F::infinity))
}

/// Distance between two multi geometries
pub(crate) fn multi_to_multi<F, S>(
    a: Multi<'_, F>,
    b: Multi<'_, F>,
    strategy: &S,
    options: &DistanceOptions,
) -> F
where
    F: GeoFloat,
    S: MetricStrategy<F>,
{
    let comparable = strategy.comparable();
    let value = match (a, b) {
        (Multi::Points(a), Multi::Points(b)) => {
            log::trace!("multipoint to multipoint via {} closest pair", options.closest_pair);
            closest::points_to_points(&coords(a), &coords(b), &comparable, options)
        }
        (Multi::Points(points), Multi::Lines(lines))
        | (Multi::Lines(lines), Multi::Points(points)) => {
            let segments = lines_segment_set(lines);
            closest::points_to_segments(&coords(points), segments.segments(), &comparable, options)
        }
        (Multi::Lines(a), Multi::Lines(b)) => Some(linear_linear(
            &lines_segment_set(a),
            &lines_segment_set(b),
            &comparable,
            options,
        )),
        (Multi::Points(points), Multi::Polygons(polygons))
        | (Multi::Polygons(polygons), Multi::Points(points))
            if options.use_index(points.len(), polygons.len()) =>
        {
            let envelopes: Vec<_> = polygons
                .iter()
                .enumerate()
                .filter_map(|(i, poly)| poly.bounding_rect().map(|rect| (i, rect)))
                .collect();
            closest::points_to_envelopes(&coords(points), &envelopes, &comparable, |p, i| {
                point_areal(p, &Areal::from_polygon(&polygons[i]), &comparable)
            })
        }
        _ => Some(reduce(a.members().map(|left| {
            reduce(
                b.members()
                    .map(|right| dispatch::single(left, right, &comparable, options)),
            )
        }))),
    };
    strategy.comparable_to_regular(value.unwrap_or_else(F::infinity))
}

/// Minimum of a lazily evaluated sequence, stopping at the first exact zero
fn reduce<F: GeoFloat>(values: impl Iterator<Item = F>) -> F {
    let mut best = F::infinity();
    for d in values {
        if d < best {
            best = d;
            if best == F::zero() {
                break;
            }
        }
    }
    best
}

fn coords<F: GeoFloat>(points: &[Point<F>]) -> Vec<Coord<F>> {
    points.iter().map(|p| p.0).collect()
}

fn lines_segment_set<F: GeoFloat>(lines: &[LineString<F>]) -> SegmentSet<F> {
    SegmentSet::new(lines.iter().flat_map(|ls| RangeView::linear(ls).segments()))
}
