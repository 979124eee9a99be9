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
//! Small named geometries shared by tests and benchmarks.
use std::str::FromStr;

use geo_types::{LineString, MultiPoint, MultiPolygon, Polygon};
use wkt::{TryFromWkt, WktFloat};

/// A 10 x 10 square with a 4 x 4 square hole in its center
pub const SQUARE_WITH_HOLE_WKT: &str =
    "POLYGON ((0 0, 10 0, 10 10, 0 10, 0 0), (3 3, 7 3, 7 7, 3 7, 3 3))";

/// A comb: a horizontal spine with vertical teeth pointing up
pub const COMB_WKT: &str =
    "LINESTRING (0 0, 1 0, 1 5, 2 5, 2 0, 3 0, 3 5, 4 5, 4 0, 5 0, 5 5, 6 5, 6 0)";

/// Two triangles far apart
pub const TWO_TRIANGLES_WKT: &str =
    "MULTIPOLYGON (((0 0, 2 0, 1 2, 0 0)), ((20 20, 22 20, 21 22, 20 20)))";

pub const CORNER_POINTS_WKT: &str = "MULTIPOINT ((0 0), (5 5), (0 1), (10 10))";

pub fn square_with_hole<T>() -> Polygon<T>
where
    T: WktFloat + Default + FromStr,
{
    Polygon::try_from_wkt_str(SQUARE_WITH_HOLE_WKT).unwrap()
}

pub fn comb<T>() -> LineString<T>
where
    T: WktFloat + Default + FromStr,
{
    LineString::try_from_wkt_str(COMB_WKT).unwrap()
}

pub fn two_triangles<T>() -> MultiPolygon<T>
where
    T: WktFloat + Default + FromStr,
{
    MultiPolygon::try_from_wkt_str(TWO_TRIANGLES_WKT).unwrap()
}

pub fn corner_points<T>() -> MultiPoint<T>
where
    T: WktFloat + Default + FromStr,
{
    MultiPoint::try_from_wkt_str(CORNER_POINTS_WKT).unwrap()
}
