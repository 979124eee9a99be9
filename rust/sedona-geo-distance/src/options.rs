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
//! Tuning knobs for the accelerated distance paths.
use std::fmt::Display;
use std::str::FromStr;

use crate::error::DistanceError;

/// Default minimum product of element counts before a spatial index is built. Smaller
/// inputs are scanned pairwise.
pub const DEFAULT_INDEX_THRESHOLD: usize = 64;

/// Default seed for the random pair sampler of the grid closest pair search.
pub const DEFAULT_SEED: u64 = 42;

/// Default number of random pairs sampled per input element by the grid search.
pub const DEFAULT_SAMPLES_PER_ELEMENT: usize = 1;

/// The algorithm used to find the closest pair between two point sets
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum ClosestPairAlgorithm {
    /// Bulk-load the smaller set into an R-tree and query the nearest neighbor of every
    /// point of the other set.
    #[default]
    RTree,

    /// Bin both sets into a uniform grid whose cell size is bounded by a random sample
    /// of pairs, then compare neighboring cells only.
    Grid,

    /// Compare every pair.
    BruteForce,
}

impl Display for ClosestPairAlgorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let value = match self {
            ClosestPairAlgorithm::RTree => "rtree",
            ClosestPairAlgorithm::Grid => "grid",
            ClosestPairAlgorithm::BruteForce => "brute_force",
        };
        write!(f, "{value}")
    }
}

impl FromStr for ClosestPairAlgorithm {
    type Err = DistanceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "rtree" => Ok(ClosestPairAlgorithm::RTree),
            "grid" => Ok(ClosestPairAlgorithm::Grid),
            "brute_force" => Ok(ClosestPairAlgorithm::BruteForce),
            _ => Err(DistanceError::Configuration(format!(
                "unknown closest pair algorithm: {s}. Expected one of: rtree, grid, brute_force"
            ))),
        }
    }
}

/// Options controlling how multi-geometry distances are evaluated.
///
/// The options never change the result of a distance computation, only the work done to
/// get it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DistanceOptions {
    /// Algorithm used for multipoint to multipoint distances
    pub closest_pair: ClosestPairAlgorithm,

    /// Minimum product of element counts before a spatial index is built
    pub index_threshold: usize,

    /// Seed of the random generator used by the grid search
    pub seed: u64,

    /// Number of random pairs sampled per input element by the grid search
    pub samples_per_element: usize,
}

impl Default for DistanceOptions {
    fn default() -> Self {
        Self {
            closest_pair: ClosestPairAlgorithm::default(),
            index_threshold: DEFAULT_INDEX_THRESHOLD,
            seed: DEFAULT_SEED,
            samples_per_element: DEFAULT_SAMPLES_PER_ELEMENT,
        }
    }
}

impl DistanceOptions {
    pub fn with_closest_pair(mut self, closest_pair: ClosestPairAlgorithm) -> Self {
        self.closest_pair = closest_pair;
        self
    }

    pub fn with_index_threshold(mut self, index_threshold: usize) -> Self {
        self.index_threshold = index_threshold;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_samples_per_element(mut self, samples_per_element: usize) -> Self {
        self.samples_per_element = samples_per_element;
        self
    }

    /// Whether a pairwise evaluation of `left` by `right` elements is large enough to be
    /// worth building an index
    pub(crate) fn use_index(&self, left: usize, right: usize) -> bool {
        left.saturating_mul(right) >= self.index_threshold
    }

    /// A fresh random generator for the grid sampler
    pub(crate) fn rng(&self) -> fastrand::Rng {
        fastrand::Rng::with_seed(self.seed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("rtree", ClosestPairAlgorithm::RTree)]
    #[case("RTREE", ClosestPairAlgorithm::RTree)]
    #[case("grid", ClosestPairAlgorithm::Grid)]
    #[case("brute_force", ClosestPairAlgorithm::BruteForce)]
    fn parse_closest_pair(#[case] value: &str, #[case] expected: ClosestPairAlgorithm) {
        let parsed: ClosestPairAlgorithm = value.parse().unwrap();
        assert_eq!(parsed, expected);
        assert_eq!(parsed.to_string(), value.to_lowercase());
    }

    #[test]
    fn parse_closest_pair_invalid() {
        let err = "kdtree".parse::<ClosestPairAlgorithm>().unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid distance option: unknown closest pair algorithm: kdtree. \
             Expected one of: rtree, grid, brute_force"
        );
    }

    #[test]
    fn defaults_and_builders() {
        let options = DistanceOptions::default();
        assert_eq!(options.closest_pair, ClosestPairAlgorithm::RTree);
        assert_eq!(options.index_threshold, DEFAULT_INDEX_THRESHOLD);
        assert_eq!(options.seed, DEFAULT_SEED);
        assert_eq!(options.samples_per_element, DEFAULT_SAMPLES_PER_ELEMENT);

        let options = options
            .with_closest_pair(ClosestPairAlgorithm::Grid)
            .with_index_threshold(0)
            .with_seed(7)
            .with_samples_per_element(3);
        assert_eq!(options.closest_pair, ClosestPairAlgorithm::Grid);
        assert!(options.use_index(0, 0));
        assert_eq!(options.seed, 7);
        assert_eq!(options.samples_per_element, 3);
    }

    #[test]
    fn index_threshold() {
        let options = DistanceOptions::default().with_index_threshold(100);
        assert!(!options.use_index(9, 11));
        assert!(options.use_index(10, 10));
        assert!(options.use_index(usize::MAX, 2));
    }
}
