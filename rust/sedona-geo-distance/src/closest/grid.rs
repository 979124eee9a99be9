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
use std::collections::HashMap;

use fastrand::Rng;
use geo_types::Coord;

use crate::closest::brute_force;
use crate::strategy::{ComparableEuclidean, MetricStrategy};
use crate::GeoFloat;

type CellKey = (i64, i64);

/// Bichromatic closest pair search by uniform grid binning.
///
/// # Algorithm
///
/// 1. **Sampling**: draw random pairs, one point from each set, and keep the pair with the
///    smallest Euclidean distance. The number of trials is `samples_per_element` times the
///    combined size of both sets (at least one). The sampled pair bounds the answer from
///    above.
///
/// 2. **Binning**: both sets are binned into square cells whose side is the Euclidean
///    length of the best sampled pair, keyed by the floor-divided offset from the sampled
///    point of `a`.
///
/// 3. **Neighborhood scan**: the true closest pair is at most one cell side apart, so each
///    occupied cell of `a` only needs to be compared against the 3x3 block of cells of `b`
///    around it.
///
/// The search stops as soon as a distance of zero is found. If a cell key cannot be
/// represented as an `i64` (extreme coordinate ranges relative to the cell side) the
/// search falls back to a brute-force scan.
///
/// Returns `None` when either set is empty.
pub fn closest_pair<F, S>(
    a: &[Coord<F>],
    b: &[Coord<F>],
    strategy: &S,
    samples_per_element: usize,
    rng: &mut Rng,
) -> Option<F>
where
    F: GeoFloat,
    S: MetricStrategy<F>,
{
    if a.is_empty() || b.is_empty() {
        return None;
    }

    let (i, j) = sample_best_pair(a, b, samples_per_element, rng);
    let mut best = strategy.point_point(a[i], b[j]);
    let cell_size = ComparableEuclidean.point_point(a[i], b[j]).sqrt();
    if cell_size == F::zero() {
        return Some(best);
    }

    let origin = a[i];
    let (Some(a_cells), Some(b_cells)) = (bin(a, origin, cell_size), bin(b, origin, cell_size))
    else {
        log::debug!("grid cell keys out of range for cell size {cell_size:?}, scanning all pairs");
        return brute_force::points_to_points(a, b, strategy);
    };

    log::debug!(
        "grid closest pair: cell size {cell_size:?}, {} and {} occupied cells",
        a_cells.len(),
        b_cells.len()
    );

    for (&(cx, cy), a_indices) in &a_cells {
        for dx in -1i64..=1 {
            for dy in -1i64..=1 {
                let (Some(nx), Some(ny)) = (cx.checked_add(dx), cy.checked_add(dy)) else {
                    continue;
                };
                let Some(b_indices) = b_cells.get(&(nx, ny)) else {
                    continue;
                };
                if let Some(d) =
                    brute_force::indexed_points_to_points(a, a_indices, b, b_indices, strategy)
                {
                    if d < best {
                        best = d;
                    }
                }
                if best == F::zero() {
                    return Some(best);
                }
            }
        }
    }

    Some(best)
}

/// Index pair of the closest of the randomly sampled pairs, by Euclidean distance
fn sample_best_pair<F: GeoFloat>(
    a: &[Coord<F>],
    b: &[Coord<F>],
    samples_per_element: usize,
    rng: &mut Rng,
) -> (usize, usize) {
    let trials = samples_per_element
        .saturating_mul(a.len().saturating_add(b.len()))
        .max(1);

    let mut best_pair = (0, 0);
    let mut best = ComparableEuclidean.point_point(a[0], b[0]);
    for _ in 0..trials {
        let i = rng.usize(..a.len());
        let j = rng.usize(..b.len());
        let d = ComparableEuclidean.point_point(a[i], b[j]);
        if d < best {
            best = d;
            best_pair = (i, j);
        }
    }
    best_pair
}

fn cell_key<F: GeoFloat>(c: Coord<F>, origin: Coord<F>, cell_size: F) -> Option<CellKey> {
    let kx = ((c.x - origin.x) / cell_size).floor().to_i64()?;
    let ky = ((c.y - origin.y) / cell_size).floor().to_i64()?;
    Some((kx, ky))
}

fn bin<F: GeoFloat>(
    coords: &[Coord<F>],
    origin: Coord<F>,
    cell_size: F,
) -> Option<HashMap<CellKey, Vec<usize>>> {
    let mut cells: HashMap<CellKey, Vec<usize>> = HashMap::new();
    for (index, &c) in coords.iter().enumerate() {
        let key = cell_key(c, origin, cell_size)?;
        cells.entry(key).or_default().push(index);
    }
    Some(cells)
}
