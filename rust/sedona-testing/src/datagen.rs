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
use std::f64::consts::TAU;

use geo_types::{
    Coord, Line, LineString, MultiLineString, MultiPoint, MultiPolygon, Point, Polygon, Rect,
};
use rand::distributions::Uniform;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Generator of deterministic random geometries.
///
/// Geometries are placed within the configured bounds and sized within the configured
/// size range. Using the same seed and the same sequence of calls produces identical
/// geometries, which is useful for comparing accelerated algorithms against exhaustive
/// ones.
///
/// # Example
///
/// ```rust
/// use sedona_testing::datagen::RandomGeometryGenerator;
/// use geo_types::{Coord, Rect};
///
/// let mut generator = RandomGeometryGenerator::new(42)
///     .bounds(Rect::new(Coord { x: 0.0, y: 0.0 }, Coord { x: 100.0, y: 100.0 }))
///     .size_range((1.0, 5.0));
/// let points = generator.multi_point(1000);
/// let polygons = generator.multi_polygon(50, 8);
/// assert_eq!(points.0.len(), 1000);
/// assert_eq!(polygons.0.len(), 50);
/// ```
#[derive(Debug, Clone)]
pub struct RandomGeometryGenerator {
    rng: StdRng,
    bounds: Rect,
    size_range: (f64, f64),
}

impl RandomGeometryGenerator {
    /// Creates a generator with the given seed.
    ///
    /// Default configuration:
    /// - bounds: (0,0) to (100,100)
    /// - size_range: 1.0 to 10.0
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            bounds: Rect::new(Coord { x: 0.0, y: 0.0 }, Coord { x: 100.0, y: 100.0 }),
            size_range: (1.0, 10.0),
        }
    }

    /// Sets the spatial bounds for geometry generation.
    ///
    /// Points and vertices are placed within these bounds. For polygons, the bounds
    /// constrain the center, so shapes may extend past the bounds by their size.
    pub fn bounds(mut self, bounds: Rect) -> Self {
        self.bounds = bounds;
        self
    }

    /// Sets the size range for generated geometries.
    ///
    /// For polygons this is the radius of the generated shape, for linestrings and
    /// segments the length of each step.
    pub fn size_range(mut self, size_range: (f64, f64)) -> Self {
        self.size_range = size_range;
        self
    }

    pub fn coord(&mut self) -> Coord {
        let x_dist = Uniform::new_inclusive(self.bounds.min().x, self.bounds.max().x);
        let y_dist = Uniform::new_inclusive(self.bounds.min().y, self.bounds.max().y);
        Coord {
            x: self.rng.sample(x_dist),
            y: self.rng.sample(y_dist),
        }
    }

    pub fn point(&mut self) -> Point {
        Point(self.coord())
    }

    fn size(&mut self) -> f64 {
        self.rng
            .sample(Uniform::new_inclusive(self.size_range.0, self.size_range.1))
    }

    fn step_from(&mut self, from: Coord) -> Coord {
        let length = self.size();
        let angle = self.rng.sample(Uniform::new(0.0, TAU));
        Coord {
            x: from.x + length * angle.cos(),
            y: from.y + length * angle.sin(),
        }
    }

    pub fn line(&mut self) -> Line {
        let start = self.coord();
        let end = self.step_from(start);
        Line::new(start, end)
    }

    pub fn rect(&mut self) -> Rect {
        let min = self.coord();
        let max = Coord {
            x: min.x + self.size(),
            y: min.y + self.size(),
        };
        Rect::new(min, max)
    }

    /// A random walk with `num_vertices` vertices starting inside the bounds
    pub fn line_string(&mut self, num_vertices: usize) -> LineString {
        let mut coords = Vec::with_capacity(num_vertices);
        if num_vertices > 0 {
            coords.push(self.coord());
        }
        while coords.len() < num_vertices {
            let last = coords[coords.len() - 1];
            let next = self.step_from(last);
            coords.push(next);
        }
        LineString::new(coords)
    }

    /// A star shaped polygon with `num_vertices` vertices around a random center
    ///
    /// The vertices are placed at increasing angles with jittered radii, so the exterior
    /// never self-intersects.
    pub fn polygon(&mut self, num_vertices: usize) -> Polygon {
        let center = self.coord();
        let radius = self.size();
        Polygon::new(self.star(center, radius, num_vertices.max(3)), vec![])
    }

    /// A diamond (square rotated 45 degrees) around a random center
    pub fn diamond(&mut self) -> Polygon {
        let center = self.coord();
        let half_size = self.size();
        let coords = vec![
            Coord {
                x: center.x,
                y: center.y + half_size,
            }, // Top
            Coord {
                x: center.x + half_size,
                y: center.y,
            }, // Right
            Coord {
                x: center.x,
                y: center.y - half_size,
            }, // Bottom
            Coord {
                x: center.x - half_size,
                y: center.y,
            }, // Left
            Coord {
                x: center.x,
                y: center.y + half_size,
            }, // Close the ring
        ];
        Polygon::new(LineString::from(coords), vec![])
    }

    /// A regular polygon with a concentric hole of a third of its radius
    pub fn polygon_with_hole(&mut self, num_vertices: usize) -> Polygon {
        let center = self.coord();
        let radius = self.size();
        let n = num_vertices.max(3);
        let exterior = regular_ring(center, radius, n);
        let hole = regular_ring(center, radius / 3.0, n);
        Polygon::new(exterior, vec![hole])
    }

    pub fn multi_point(&mut self, num_points: usize) -> MultiPoint {
        MultiPoint::new((0..num_points).map(|_| self.point()).collect())
    }

    pub fn multi_line_string(&mut self, num_lines: usize, num_vertices: usize) -> MultiLineString {
        MultiLineString::new(
            (0..num_lines)
                .map(|_| self.line_string(num_vertices))
                .collect(),
        )
    }

    pub fn multi_polygon(&mut self, num_polygons: usize, num_vertices: usize) -> MultiPolygon {
        MultiPolygon::new(
            (0..num_polygons)
                .map(|_| self.polygon(num_vertices))
                .collect(),
        )
    }

    fn star(&mut self, center: Coord, radius: f64, num_vertices: usize) -> LineString {
        let jitter = Uniform::new_inclusive(0.5, 1.0);
        let coords: Vec<Coord> = (0..num_vertices)
            .map(|i| {
                let angle = TAU * i as f64 / num_vertices as f64;
                let r = radius * self.rng.sample(jitter);
                Coord {
                    x: center.x + r * angle.cos(),
                    y: center.y + r * angle.sin(),
                }
            })
            .collect();
        LineString::new(coords)
    }
}

fn regular_ring(center: Coord, radius: f64, num_vertices: usize) -> LineString {
    (0..num_vertices)
        .map(|i| {
            let angle = TAU * i as f64 / num_vertices as f64;
            Coord {
                x: center.x + radius * angle.cos(),
                y: center.y + radius * angle.sin(),
            }
        })
        .collect::<Vec<_>>()
        .into()
}
