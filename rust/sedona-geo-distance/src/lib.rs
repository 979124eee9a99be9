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
//! Minimum distance between planar geometries.
//!
//! The entry points ([`distance`], [`distance_with`], [`comparable_distance`] and the
//! [`DistanceExt`] extension trait) accept any pair of points, segments, boxes,
//! linestrings, rings, polygons and their multi-geometry collections. A type-driven
//! dispatch table picks one algorithm per pair of [`GeometryKind`]s and composes it from
//! point-to-point and point-to-segment evaluations supplied by a [`MetricStrategy`].
//!
//! Reductions over many elements run in "comparable" space (squared distances for the
//! Euclidean metric) and convert back to a true distance once at the end. Large inputs are
//! served by bulk-loaded R-trees, a sampling-bounded grid, or a brute-force scan, see the
//! [`closest`] module and [`DistanceOptions`].
//!
//! ```
//! use sedona_geo_distance::{distance, Point, Rect, coord};
//!
//! let point = Point::new(0.0, 0.0);
//! let rect = Rect::new(coord! { x: 1.0, y: 1.0 }, coord! { x: 2.0, y: 2.0 });
//! let d: f64 = distance(&point, &rect).unwrap();
//! assert!((d - 2f64.sqrt()).abs() < 1e-12);
//! ```
pub use geo_types::{
    coord, line_string, point, polygon, Coord, Geometry, Line, LineString, MultiLineString,
    MultiPoint, MultiPolygon, Point, Polygon, Rect,
};

pub(crate) mod algorithm;
pub mod closest;
pub mod dispatch;
pub mod error;
pub mod geometry;
pub mod options;
pub mod predicates;
pub mod strategy;

pub use dispatch::{
    comparable_distance, comparable_distance_with, distance, distance_geometry, distance_with,
    distance_with_options, DistanceExt,
};
pub use error::{DistanceError, Operand, Result};
pub use geometry::{AsGeometryRef, Closure, GeometryKind, GeometryRef, Ring};
pub use options::{ClosestPairAlgorithm, DistanceOptions};
pub use strategy::{default_strategy, ComparableEuclidean, Euclidean, MetricStrategy};

/// A prelude which re-exports the traits needed to call the extension methods of this
/// crate. Typically imported with `use sedona_geo_distance::prelude::*`.
pub mod prelude {
    pub use crate::geometry::AsGeometryRef;
    pub use crate::strategy::MetricStrategy;
    pub use crate::DistanceExt;
}

/// The numeric trait required by the distance algorithms.
///
/// This is `geo`'s [`geo::GeoFloat`] (robust predicates, float operations) combined with
/// [`rstar::RTreeNum`] so that coordinates can be loaded into the spatial indexes used for
/// large inputs. Both `f32` and `f64` implement it.
pub trait GeoFloat: geo::GeoFloat + rstar::RTreeNum {}

impl<T> GeoFloat for T where T: geo::GeoFloat + rstar::RTreeNum {}
