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
//! Bulk-loaded R-tree over points, segments and member envelopes.
use geo_types::{Coord, Line, Rect};
use rstar::{Envelope, PointDistance, RTree, RTreeObject, AABB};

use crate::predicates::clamp_to_rect;
use crate::strategy::{ComparableEuclidean, MetricStrategy};
use crate::GeoFloat;

#[inline]
pub(crate) fn to_point<F: GeoFloat>(coord: Coord<F>) -> [F; 2] {
    [coord.x, coord.y]
}

/// A packed R-tree built once from a complete element set
pub struct SpatialIndex<E: RTreeObject> {
    tree: RTree<E>,
}

impl<E: RTreeObject> SpatialIndex<E> {
    pub fn bulk_load(elements: Vec<E>) -> Self {
        Self {
            tree: RTree::bulk_load(elements),
        }
    }

    pub fn len(&self) -> usize {
        self.tree.size()
    }

    pub fn is_empty(&self) -> bool {
        self.tree.size() == 0
    }

    /// Elements whose envelope intersects `envelope`
    pub fn intersecting<'a>(&'a self, envelope: &E::Envelope) -> impl Iterator<Item = &'a E> + 'a
    where
        E::Envelope: 'a,
    {
        self.tree.locate_in_envelope_intersecting(envelope)
    }
}

impl<E: PointDistance> SpatialIndex<E> {
    /// The `k` elements nearest to `query`, closest first
    pub fn nearest(&self, query: &<E::Envelope as Envelope>::Point, k: usize) -> Vec<&E> {
        self.tree.nearest_neighbor_iter(query).take(k).collect()
    }

    pub fn nearest_one(&self, query: &<E::Envelope as Envelope>::Point) -> Option<&E> {
        self.tree.nearest_neighbor(query)
    }

    /// Lazy stream of elements in increasing distance from `query`, paired with their
    /// squared Euclidean distance
    pub fn nearest_iter<'a>(
        &'a self,
        query: &<E::Envelope as Envelope>::Point,
    ) -> impl Iterator<
        Item = (
            &'a E,
            <<E::Envelope as Envelope>::Point as rstar::Point>::Scalar,
        ),
    > + 'a {
        self.tree.nearest_neighbor_iter_with_distance_2(query)
    }
}

/// A point tagged with its position in the input
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IndexedPoint<F: GeoFloat> {
    pub coord: Coord<F>,
    pub index: usize,
}

impl<F: GeoFloat> RTreeObject for IndexedPoint<F> {
    type Envelope = AABB<[F; 2]>;

    fn envelope(&self) -> Self::Envelope {
        AABB::from_point(to_point(self.coord))
    }
}

impl<F: GeoFloat> PointDistance for IndexedPoint<F> {
    fn distance_2(&self, point: &[F; 2]) -> F {
        let dx = self.coord.x - point[0];
        let dy = self.coord.y - point[1];
        dx * dx + dy * dy
    }
}

/// A segment tagged with its position in the input
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IndexedSegment<F: GeoFloat> {
    pub segment: Line<F>,
    pub index: usize,
}

impl<F: GeoFloat> RTreeObject for IndexedSegment<F> {
    type Envelope = AABB<[F; 2]>;

    fn envelope(&self) -> Self::Envelope {
        AABB::from_corners(to_point(self.segment.start), to_point(self.segment.end))
    }
}

impl<F: GeoFloat> PointDistance for IndexedSegment<F> {
    fn distance_2(&self, point: &[F; 2]) -> F {
        let p = Coord {
            x: point[0],
            y: point[1],
        };
        ComparableEuclidean.point_segment(p, self.segment.start, self.segment.end)
    }
}

/// The bounding box of a multi geometry member, tagged with the member index
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IndexedEnvelope<F: GeoFloat> {
    pub rect: Rect<F>,
    pub index: usize,
}

impl<F: GeoFloat> RTreeObject for IndexedEnvelope<F> {
    type Envelope = AABB<[F; 2]>;

    fn envelope(&self) -> Self::Envelope {
        AABB::from_corners(to_point(self.rect.min()), to_point(self.rect.max()))
    }
}

impl<F: GeoFloat> PointDistance for IndexedEnvelope<F> {
    /// Zero inside the box, a lower bound of the distance to the member otherwise
    fn distance_2(&self, point: &[F; 2]) -> F {
        let p = Coord {
            x: point[0],
            y: point[1],
        };
        ComparableEuclidean.point_point(p, clamp_to_rect(p, self.rect))
    }
}
