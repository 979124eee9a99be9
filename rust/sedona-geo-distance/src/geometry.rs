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
//! The geometry model accepted by the distance entry points.
//!
//! Value types come from `geo_types`. This module adds the [`Ring`] type with an
//! explicit [`Closure`] policy, the [`GeometryKind`] tag, and the borrowed
//! [`GeometryRef`] view every public operation accepts.
use std::borrow::Cow;
use std::fmt;

use geo_types::{
    Coord, CoordNum, Geometry, Line, LineString, MultiLineString, MultiPoint, MultiPolygon,
    Point, Polygon, Rect,
};

/// Whether a ring stores its closing point.
///
/// The closure only describes the storage. A ring whose last coordinate differs from its
/// first one is bounded by an implicit closing edge under either policy.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Closure {
    /// The first coordinate is repeated as the last one
    #[default]
    Closed,
    /// The edge from the last coordinate back to the first one is implicit
    Open,
}

/// A linear ring: an areal geometry bounded by a single closed path.
///
/// Unlike a [`LineString`], the interior of a ring counts for containment, so a point
/// inside a ring is at distance zero from it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Ring<T: CoordNum = f64> {
    coords: LineString<T>,
    closure: Closure,
}

impl<T: CoordNum> Ring<T> {
    pub fn new(coords: impl Into<LineString<T>>, closure: Closure) -> Self {
        Self {
            coords: coords.into(),
            closure,
        }
    }

    /// A ring whose coordinates repeat the first point as the last one
    pub fn closed(coords: impl Into<LineString<T>>) -> Self {
        Self::new(coords, Closure::Closed)
    }

    /// A ring with an implicit closing edge
    pub fn open(coords: impl Into<LineString<T>>) -> Self {
        Self::new(coords, Closure::Open)
    }

    pub fn coords(&self) -> &LineString<T> {
        &self.coords
    }

    pub fn closure(&self) -> Closure {
        self.closure
    }

    pub fn is_empty(&self) -> bool {
        self.coords.0.is_empty()
    }

    /// The boundary edges of the ring, including the implicit closing edge
    pub fn segments(&self) -> impl Iterator<Item = Line<T>> + '_ {
        RangeView::ring(&self.coords).segments()
    }

    /// The polygon with this ring as its exterior and no holes
    pub fn to_polygon(&self) -> Polygon<T> {
        Polygon::new(self.coords.clone(), vec![])
    }
}

/// The category of a geometry.
///
/// Kinds are totally ordered. The dispatch engine implements each unordered pair of kinds
/// once, with the lower kind as the first operand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum GeometryKind {
    Point,
    Segment,
    Box,
    LineString,
    Ring,
    Polygon,
    MultiPoint,
    MultiLineString,
    MultiPolygon,
}

impl GeometryKind {
    pub const ALL: [GeometryKind; 9] = [
        GeometryKind::Point,
        GeometryKind::Segment,
        GeometryKind::Box,
        GeometryKind::LineString,
        GeometryKind::Ring,
        GeometryKind::Polygon,
        GeometryKind::MultiPoint,
        GeometryKind::MultiLineString,
        GeometryKind::MultiPolygon,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            GeometryKind::Point => "Point",
            GeometryKind::Segment => "Segment",
            GeometryKind::Box => "Box",
            GeometryKind::LineString => "LineString",
            GeometryKind::Ring => "Ring",
            GeometryKind::Polygon => "Polygon",
            GeometryKind::MultiPoint => "MultiPoint",
            GeometryKind::MultiLineString => "MultiLineString",
            GeometryKind::MultiPolygon => "MultiPolygon",
        }
    }

    pub fn is_multi(&self) -> bool {
        matches!(
            self,
            GeometryKind::MultiPoint | GeometryKind::MultiLineString | GeometryKind::MultiPolygon
        )
    }
}

impl fmt::Display for GeometryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A borrowed geometry of any supported kind
#[derive(Debug, Clone, Copy)]
pub enum GeometryRef<'a, T: CoordNum> {
    Point(&'a Point<T>),
    Segment(&'a Line<T>),
    Box(&'a Rect<T>),
    LineString(&'a LineString<T>),
    Ring(&'a Ring<T>),
    Polygon(&'a Polygon<T>),
    MultiPoint(&'a MultiPoint<T>),
    MultiLineString(&'a MultiLineString<T>),
    MultiPolygon(&'a MultiPolygon<T>),
}

impl<'a, T: CoordNum> GeometryRef<'a, T> {
    pub fn kind(&self) -> GeometryKind {
        match self {
            GeometryRef::Point(_) => GeometryKind::Point,
            GeometryRef::Segment(_) => GeometryKind::Segment,
            GeometryRef::Box(_) => GeometryKind::Box,
            GeometryRef::LineString(_) => GeometryKind::LineString,
            GeometryRef::Ring(_) => GeometryKind::Ring,
            GeometryRef::Polygon(_) => GeometryKind::Polygon,
            GeometryRef::MultiPoint(_) => GeometryKind::MultiPoint,
            GeometryRef::MultiLineString(_) => GeometryKind::MultiLineString,
            GeometryRef::MultiPolygon(_) => GeometryKind::MultiPolygon,
        }
    }

    /// Number of stored coordinates, counting every ring of a polygon
    pub fn num_points(&self) -> usize {
        match self {
            GeometryRef::Point(_) => 1,
            GeometryRef::Segment(_) => 2,
            GeometryRef::Box(_) => 4,
            GeometryRef::LineString(ls) => ls.0.len(),
            GeometryRef::Ring(ring) => ring.coords().0.len(),
            GeometryRef::Polygon(poly) => polygon_num_points(poly),
            GeometryRef::MultiPoint(mp) => mp.0.len(),
            GeometryRef::MultiLineString(mls) => mls.0.iter().map(|ls| ls.0.len()).sum(),
            GeometryRef::MultiPolygon(mpoly) => mpoly.0.iter().map(polygon_num_points).sum(),
        }
    }

    /// Whether the geometry has nothing to measure a distance to.
    ///
    /// Polygons and rings are empty when their exterior is empty. An empty interior ring
    /// does not make a polygon empty: it bounds no area and has no edges, so it is ignored.
    /// Multi geometries are empty when every member is empty.
    pub fn is_empty(&self) -> bool {
        match self {
            GeometryRef::Point(_) | GeometryRef::Segment(_) | GeometryRef::Box(_) => false,
            GeometryRef::LineString(ls) => ls.0.is_empty(),
            GeometryRef::Ring(ring) => ring.is_empty(),
            GeometryRef::Polygon(poly) => poly.exterior().0.is_empty(),
            GeometryRef::MultiPoint(mp) => mp.0.is_empty(),
            GeometryRef::MultiLineString(mls) => mls.0.iter().all(|ls| ls.0.is_empty()),
            GeometryRef::MultiPolygon(mpoly) => {
                mpoly.0.iter().all(|poly| poly.exterior().0.is_empty())
            }
        }
    }

    /// View a `geo_types::Geometry` as a supported kind. Returns `None` for geometry
    /// collections and triangles.
    pub fn from_geometry(geometry: &'a Geometry<T>) -> Option<Self> {
        match geometry {
            Geometry::Point(g) => Some(GeometryRef::Point(g)),
            Geometry::Line(g) => Some(GeometryRef::Segment(g)),
            Geometry::Rect(g) => Some(GeometryRef::Box(g)),
            Geometry::LineString(g) => Some(GeometryRef::LineString(g)),
            Geometry::Polygon(g) => Some(GeometryRef::Polygon(g)),
            Geometry::MultiPoint(g) => Some(GeometryRef::MultiPoint(g)),
            Geometry::MultiLineString(g) => Some(GeometryRef::MultiLineString(g)),
            Geometry::MultiPolygon(g) => Some(GeometryRef::MultiPolygon(g)),
            Geometry::GeometryCollection(_) | Geometry::Triangle(_) => None,
        }
    }

    pub(crate) fn split(self) -> Split<'a, T> {
        match self {
            GeometryRef::Point(p) => Split::Single(Single::Point(p.0)),
            GeometryRef::Segment(line) => Split::Single(Single::Segment(*line)),
            GeometryRef::Box(rect) => Split::Single(Single::Box(*rect)),
            GeometryRef::LineString(ls) => Split::Single(Single::Linear(ls)),
            GeometryRef::Ring(ring) => Split::Single(Single::Areal(Areal::from_ring(ring))),
            GeometryRef::Polygon(poly) => {
                Split::Single(Single::Areal(Areal::from_polygon(poly)))
            }
            GeometryRef::MultiPoint(mp) => Split::Multi(Multi::Points(&mp.0)),
            GeometryRef::MultiLineString(mls) => Split::Multi(Multi::Lines(&mls.0)),
            GeometryRef::MultiPolygon(mpoly) => Split::Multi(Multi::Polygons(&mpoly.0)),
        }
    }
}

/// Name of a `geo_types::Geometry` variant, for error reporting
pub(crate) fn geometry_name<T: CoordNum>(geometry: &Geometry<T>) -> &'static str {
    match geometry {
        Geometry::Point(_) => "Point",
        Geometry::Line(_) => "Line",
        Geometry::LineString(_) => "LineString",
        Geometry::Polygon(_) => "Polygon",
        Geometry::MultiPoint(_) => "MultiPoint",
        Geometry::MultiLineString(_) => "MultiLineString",
        Geometry::MultiPolygon(_) => "MultiPolygon",
        Geometry::GeometryCollection(_) => "GeometryCollection",
        Geometry::Rect(_) => "Rect",
        Geometry::Triangle(_) => "Triangle",
    }
}

fn polygon_num_points<T: CoordNum>(poly: &Polygon<T>) -> usize {
    poly.exterior().0.len() + poly.interiors().iter().map(|r| r.0.len()).sum::<usize>()
}

/// Conversion into a [`GeometryRef`]
pub trait AsGeometryRef<T: CoordNum> {
    fn as_geometry_ref(&self) -> GeometryRef<'_, T>;
}

macro_rules! impl_as_geometry_ref {
    ($($ty:ident => $variant:ident),* $(,)?) => {
        $(
            impl<T: CoordNum> AsGeometryRef<T> for $ty<T> {
                fn as_geometry_ref(&self) -> GeometryRef<'_, T> {
                    GeometryRef::$variant(self)
                }
            }

            impl<'a, T: CoordNum> From<&'a $ty<T>> for GeometryRef<'a, T> {
                fn from(value: &'a $ty<T>) -> Self {
                    GeometryRef::$variant(value)
                }
            }
        )*
    };
}

impl_as_geometry_ref!(
    Point => Point,
    Line => Segment,
    Rect => Box,
    LineString => LineString,
    Ring => Ring,
    Polygon => Polygon,
    MultiPoint => MultiPoint,
    MultiLineString => MultiLineString,
    MultiPolygon => MultiPolygon,
);

impl<T: CoordNum> AsGeometryRef<T> for GeometryRef<'_, T> {
    fn as_geometry_ref(&self) -> GeometryRef<'_, T> {
        *self
    }
}

/// A geometry reference separated into single and multi geometries
#[derive(Debug, Clone, Copy)]
pub(crate) enum Split<'a, T: CoordNum> {
    Single(Single<'a, T>),
    Multi(Multi<'a, T>),
}

/// A single geometry in the shape the algorithms consume. Rings and polygons share the
/// areal representation.
#[derive(Debug, Clone, Copy)]
pub(crate) enum Single<'a, T: CoordNum> {
    Point(Coord<T>),
    Segment(Line<T>),
    Box(Rect<T>),
    Linear(&'a LineString<T>),
    Areal(Areal<'a, T>),
}

impl<T: CoordNum> Single<'_, T> {
    /// Position in the dispatch order
    pub(crate) fn rank(&self) -> u8 {
        match self {
            Single::Point(_) => 0,
            Single::Segment(_) => 1,
            Single::Box(_) => 2,
            Single::Linear(_) => 3,
            Single::Areal(_) => 4,
        }
    }

    pub(crate) fn is_empty(&self) -> bool {
        match self {
            Single::Point(_) | Single::Segment(_) | Single::Box(_) => false,
            Single::Linear(ls) => ls.0.is_empty(),
            Single::Areal(areal) => areal.is_empty(),
        }
    }
}

/// The members of a multi geometry
#[derive(Debug, Clone, Copy)]
pub(crate) enum Multi<'a, T: CoordNum> {
    Points(&'a [Point<T>]),
    Lines(&'a [LineString<T>]),
    Polygons(&'a [Polygon<T>]),
}

impl<'a, T: CoordNum> Multi<'a, T> {
    pub(crate) fn len(&self) -> usize {
        match self {
            Multi::Points(points) => points.len(),
            Multi::Lines(lines) => lines.len(),
            Multi::Polygons(polys) => polys.len(),
        }
    }

    pub(crate) fn member(&self, index: usize) -> Single<'a, T> {
        match self {
            Multi::Points(points) => Single::Point(points[index].0),
            Multi::Lines(lines) => Single::Linear(&lines[index]),
            Multi::Polygons(polys) => Single::Areal(Areal::from_polygon(&polys[index])),
        }
    }

    /// Non-empty members in storage order
    pub(crate) fn members(&self) -> impl Iterator<Item = Single<'a, T>> + 'a {
        let multi = *self;
        (0..self.len())
            .map(move |i| multi.member(i))
            .filter(|member| !member.is_empty())
    }
}

/// A sequence of coordinates read either as an open path or as a ring.
#[derive(Debug, Clone, Copy)]
pub(crate) struct RangeView<'a, T: CoordNum> {
    ls: &'a LineString<T>,
    close: bool,
}

impl<'a, T: CoordNum> RangeView<'a, T> {
    pub(crate) fn linear(ls: &'a LineString<T>) -> Self {
        Self { ls, close: false }
    }

    /// A ring view. A ring whose end points differ gets an implicit closing edge.
    pub(crate) fn ring(ls: &'a LineString<T>) -> Self {
        let close = ls.0.len() >= 2 && ls.0.first() != ls.0.last();
        Self { ls, close }
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.ls.0.is_empty()
    }

    pub(crate) fn vertices(&self) -> impl Iterator<Item = Coord<T>> + 'a {
        self.ls.0.iter().copied()
    }

    /// The coordinates as a closed `LineString`, copied only when the closing point is
    /// implicit
    pub(crate) fn closed(&self) -> Cow<'a, LineString<T>> {
        if self.close {
            let mut ls = self.ls.clone();
            ls.close();
            Cow::Owned(ls)
        } else {
            Cow::Borrowed(self.ls)
        }
    }

    /// The edges of the range. A single coordinate yields one degenerate edge so that
    /// segment based algorithms still see the point.
    pub(crate) fn segments(&self) -> impl Iterator<Item = Line<T>> + 'a {
        let coords = self.ls.0.as_slice();
        let degenerate = match coords {
            [only] => Some(Line::new(*only, *only)),
            _ => None,
        };
        let closing = match (self.close, coords.first(), coords.last()) {
            (true, Some(first), Some(last)) => Some(Line::new(*last, *first)),
            _ => None,
        };
        coords
            .windows(2)
            .map(|w| Line::new(w[0], w[1]))
            .chain(degenerate)
            .chain(closing)
    }
}

/// The boundary rings of a polygon or ring
#[derive(Debug, Clone, Copy)]
pub(crate) struct Areal<'a, T: CoordNum> {
    exterior: &'a LineString<T>,
    interiors: &'a [LineString<T>],
}

impl<'a, T: CoordNum> Areal<'a, T> {
    pub(crate) fn from_polygon(poly: &'a Polygon<T>) -> Self {
        Self {
            exterior: poly.exterior(),
            interiors: poly.interiors(),
        }
    }

    pub(crate) fn from_ring(ring: &'a Ring<T>) -> Self {
        Self {
            exterior: ring.coords(),
            interiors: &[],
        }
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.exterior.0.is_empty()
    }

    pub(crate) fn exterior(&self) -> RangeView<'a, T> {
        RangeView::ring(self.exterior)
    }

    pub(crate) fn interiors(&self) -> impl Iterator<Item = RangeView<'a, T>> + 'a {
        self.interiors.iter().map(RangeView::ring)
    }

    /// The exterior followed by every hole
    pub(crate) fn rings(&self) -> impl Iterator<Item = RangeView<'a, T>> + 'a {
        std::iter::once(self.exterior()).chain(self.interiors())
    }

    pub(crate) fn segments(&self) -> impl Iterator<Item = Line<T>> + 'a {
        self.rings().flat_map(|ring| ring.segments())
    }

    pub(crate) fn vertices(&self) -> impl Iterator<Item = Coord<T>> + 'a {
        self.rings().flat_map(|ring| ring.vertices())
    }
}
