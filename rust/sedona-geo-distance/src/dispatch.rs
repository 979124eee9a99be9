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
//! The distance entry points and the pairwise dispatch table.
use geo_types::Geometry;

use crate::algorithm::composite::{
    areal_areal, areal_box, areal_linear, areal_segment, box_box, segment_box, segment_segment,
};
use crate::algorithm::multi::{multi_to_multi, single_to_multi};
use crate::algorithm::point::{point_areal, point_box, point_range, point_segment};
use crate::algorithm::range::{range_box, range_range, range_segment};
use crate::error::{DistanceError, Operand, Result};
use crate::geometry::{geometry_name, AsGeometryRef, GeometryRef, RangeView, Single, Split};
use crate::options::DistanceOptions;
use crate::strategy::{Euclidean, MetricStrategy};
use crate::GeoFloat;

/// Minimum Euclidean distance between two geometries.
///
/// ```
/// use sedona_geo_distance::{distance, line_string, point};
///
/// let ls = line_string![(x: 0.0, y: 0.0), (x: 10.0, y: 0.0)];
/// let p = point!(x: 5.0, y: 3.0);
/// assert_eq!(distance(&p, &ls).unwrap(), 3.0);
/// ```
///
/// # Errors
///
/// Returns [`DistanceError::EmptyInput`] if either geometry is empty.
pub fn distance<F, A, B>(a: &A, b: &B) -> Result<F>
where
    F: GeoFloat,
    A: AsGeometryRef<F> + ?Sized,
    B: AsGeometryRef<F> + ?Sized,
{
    distance_with(a, b, &Euclidean)
}

/// Minimum distance between two geometries under `strategy`
pub fn distance_with<F, A, B, S>(a: &A, b: &B, strategy: &S) -> Result<F>
where
    F: GeoFloat,
    A: AsGeometryRef<F> + ?Sized,
    B: AsGeometryRef<F> + ?Sized,
    S: MetricStrategy<F>,
{
    distance_with_options(a, b, strategy, &DistanceOptions::default())
}

/// Minimum distance between two geometries under `strategy`, with explicit options for the
/// accelerated multi geometry paths
pub fn distance_with_options<F, A, B, S>(
    a: &A,
    b: &B,
    strategy: &S,
    options: &DistanceOptions,
) -> Result<F>
where
    F: GeoFloat,
    A: AsGeometryRef<F> + ?Sized,
    B: AsGeometryRef<F> + ?Sized,
    S: MetricStrategy<F>,
{
    dispatch(a.as_geometry_ref(), b.as_geometry_ref(), strategy, options)
}

/// Squared Euclidean distance between two geometries. Orders pairs of geometries like
/// [`distance`] without taking a square root.
pub fn comparable_distance<F, A, B>(a: &A, b: &B) -> Result<F>
where
    F: GeoFloat,
    A: AsGeometryRef<F> + ?Sized,
    B: AsGeometryRef<F> + ?Sized,
{
    comparable_distance_with(a, b, &Euclidean)
}

/// Distance between two geometries under the comparable form of `strategy`
pub fn comparable_distance_with<F, A, B, S>(a: &A, b: &B, strategy: &S) -> Result<F>
where
    F: GeoFloat,
    A: AsGeometryRef<F> + ?Sized,
    B: AsGeometryRef<F> + ?Sized,
    S: MetricStrategy<F>,
{
    distance_with(a, b, &strategy.comparable())
}

/// Minimum Euclidean distance between two `geo_types::Geometry` values.
///
/// # Errors
///
/// Returns [`DistanceError::UnsupportedCombination`] if either geometry is a
/// `GeometryCollection` or a `Triangle`, and [`DistanceError::EmptyInput`] if either
/// geometry is empty.
pub fn distance_geometry<F: GeoFloat>(a: &Geometry<F>, b: &Geometry<F>) -> Result<F> {
    match (GeometryRef::from_geometry(a), GeometryRef::from_geometry(b)) {
        (Some(left), Some(right)) => {
            dispatch(left, right, &Euclidean, &DistanceOptions::default())
        }
        _ => Err(DistanceError::UnsupportedCombination {
            left: geometry_name(a),
            right: geometry_name(b),
        }),
    }
}

/// Distance methods on every geometry
pub trait DistanceExt<F: GeoFloat>: AsGeometryRef<F> {
    fn distance_ext<B>(&self, other: &B) -> Result<F>
    where
        B: AsGeometryRef<F> + ?Sized,
    {
        distance(self, other)
    }

    fn distance_with_ext<B, S>(&self, other: &B, strategy: &S) -> Result<F>
    where
        B: AsGeometryRef<F> + ?Sized,
        S: MetricStrategy<F>,
    {
        distance_with(self, other, strategy)
    }

    fn comparable_distance_ext<B>(&self, other: &B) -> Result<F>
    where
        B: AsGeometryRef<F> + ?Sized,
    {
        comparable_distance(self, other)
    }
}

impl<F: GeoFloat, G: AsGeometryRef<F> + ?Sized> DistanceExt<F> for G {}

fn check_not_empty<F: GeoFloat>(geometry: &GeometryRef<'_, F>, operand: Operand) -> Result<()> {
    if geometry.is_empty() {
        return Err(DistanceError::EmptyInput {
            operand,
            kind: geometry.kind(),
        });
    }
    Ok(())
}

fn dispatch<F, S>(
    a: GeometryRef<'_, F>,
    b: GeometryRef<'_, F>,
    strategy: &S,
    options: &DistanceOptions,
) -> Result<F>
where
    F: GeoFloat,
    S: MetricStrategy<F>,
{
    check_not_empty(&a, Operand::Left)?;
    check_not_empty(&b, Operand::Right)?;
    log::trace!(
        "distance between {} ({} points) and {} ({} points)",
        a.kind(),
        a.num_points(),
        b.kind(),
        b.num_points()
    );

    let value = match (a.split(), b.split()) {
        (Split::Single(a), Split::Single(b)) => single(a, b, strategy, options),
        (Split::Single(one), Split::Multi(many)) | (Split::Multi(many), Split::Single(one)) => {
            single_to_multi(one, many, strategy, options)
        }
        (Split::Multi(a), Split::Multi(b)) => multi_to_multi(a, b, strategy, options),
    };
    Ok(value)
}

/// Distance between two non-empty single geometries.
///
/// Each unordered pair of kinds is implemented once with the lower kind first; the
/// remaining pairs swap their operands.
pub(crate) fn single<F, S>(
    a: Single<'_, F>,
    b: Single<'_, F>,
    strategy: &S,
    options: &DistanceOptions,
) -> F
where
    F: GeoFloat,
    S: MetricStrategy<F>,
{
    match (a, b) {
        (Single::Point(p), Single::Point(q)) => strategy.point_point(p, q),
        (Single::Point(p), Single::Segment(segment)) => point_segment(p, segment, strategy),
        (Single::Point(p), Single::Box(rect)) => point_box(p, rect, strategy),
        (Single::Point(p), Single::Linear(ls)) => point_range(p, &RangeView::linear(ls), strategy),
        (Single::Point(p), Single::Areal(areal)) => point_areal(p, &areal, strategy),

        (Single::Segment(a), Single::Segment(b)) => segment_segment(a, b, strategy),
        (Single::Segment(segment), Single::Box(rect)) => segment_box(segment, rect, strategy),
        (Single::Segment(segment), Single::Linear(ls)) => {
            range_segment(&RangeView::linear(ls), segment, strategy)
        }
        (Single::Segment(segment), Single::Areal(areal)) => {
            areal_segment(&areal, segment, strategy)
        }

        (Single::Box(a), Single::Box(b)) => box_box(a, b, strategy),
        (Single::Box(rect), Single::Linear(ls)) => {
            range_box(&RangeView::linear(ls), rect, strategy)
        }
        (Single::Box(rect), Single::Areal(areal)) => areal_box(&areal, rect, strategy),

        (Single::Linear(a), Single::Linear(b)) => {
            range_range(&RangeView::linear(a), &RangeView::linear(b), strategy, options)
        }
        (Single::Linear(ls), Single::Areal(areal)) => {
            areal_linear(&areal, &RangeView::linear(ls), strategy, options)
        }

        (Single::Areal(a), Single::Areal(b)) => areal_areal(&a, &b, strategy, options),

        (a, b) => {
            debug_assert!(a.rank() > b.rank(), "pair should have matched an arm above");
            single(b, a, strategy, options)
        }
    }
}
