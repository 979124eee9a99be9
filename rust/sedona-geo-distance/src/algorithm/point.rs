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
use geo_types::{Coord, Line, Rect};

use crate::geometry::{Areal, RangeView};
use crate::predicates::{areal_containment, clamp_to_rect, Containment};
use crate::strategy::MetricStrategy;
use crate::GeoFloat;

pub(crate) fn point_segment<F, S>(p: Coord<F>, segment: Line<F>, strategy: &S) -> F
where
    F: GeoFloat,
    S: MetricStrategy<F>,
{
    strategy.point_segment(p, segment.start, segment.end)
}

/// Distance to the point of the box nearest to `p`, zero inside or on the boundary
pub(crate) fn point_box<F, S>(p: Coord<F>, rect: Rect<F>, strategy: &S) -> F
where
    F: GeoFloat,
    S: MetricStrategy<F>,
{
    strategy.point_point(p, clamp_to_rect(p, rect))
}

/// Running minimum over segments, stopping at the first exact zero
pub(crate) fn point_segments<F, S>(
    p: Coord<F>,
    segments: impl IntoIterator<Item = Line<F>>,
    strategy: &S,
) -> F
where
    F: GeoFloat,
    S: MetricStrategy<F>,
{
    let mut best = F::infinity();
    for segment in segments {
        let d = point_segment(p, segment, strategy);
        if d < best {
            best = d;
            if best == F::zero() {
                break;
            }
        }
    }
    best
}

/// Distance to a linestring or ring boundary. A single point range behaves like a point.
pub(crate) fn point_range<F, S>(p: Coord<F>, range: &RangeView<'_, F>, strategy: &S) -> F
where
    F: GeoFloat,
    S: MetricStrategy<F>,
{
    point_segments(p, range.segments(), strategy)
}

/// Distance to a polygon or ring: zero when the point is covered, the distance to the
/// nearest boundary edge otherwise. A point inside a hole measures to the hole boundary.
pub(crate) fn point_areal<F, S>(p: Coord<F>, areal: &Areal<'_, F>, strategy: &S) -> F
where
    F: GeoFloat,
    S: MetricStrategy<F>,
{
    match areal_containment(p, areal) {
        Containment::Inside | Containment::Boundary => F::zero(),
        Containment::Outside => point_segments(p, areal.segments(), strategy),
    }
}
