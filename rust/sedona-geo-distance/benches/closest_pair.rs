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
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use sedona_geo_distance::{distance_with_options, ClosestPairAlgorithm, DistanceOptions, Euclidean};
use sedona_testing::datagen::RandomGeometryGenerator;

const ALGORITHMS: [ClosestPairAlgorithm; 3] = [
    ClosestPairAlgorithm::RTree,
    ClosestPairAlgorithm::Grid,
    ClosestPairAlgorithm::BruteForce,
];

fn bench_multipoint(c: &mut Criterion) {
    let mut group = c.benchmark_group("multipoint_to_multipoint");
    for size in [100, 1000, 5000] {
        let mut generator = RandomGeometryGenerator::new(size as u64);
        let a = generator.multi_point(size);
        let b = generator.multi_point(size);
        for algorithm in ALGORITHMS {
            if algorithm == ClosestPairAlgorithm::BruteForce && size > 1000 {
                continue;
            }
            let options = DistanceOptions::default().with_closest_pair(algorithm);
            let id = BenchmarkId::new(algorithm.to_string(), size);
            group.bench_with_input(id, &size, |bencher, _| {
                bencher.iter(|| {
                    criterion::black_box(distance_with_options(
                        criterion::black_box(&a),
                        criterion::black_box(&b),
                        &Euclidean,
                        &options,
                    ))
                });
            });
        }
    }
    group.finish();
}

fn bench_multipoint_to_multipolygon(c: &mut Criterion) {
    let mut group = c.benchmark_group("multipoint_to_multipolygon");
    let mut generator = RandomGeometryGenerator::new(7).size_range((1.0, 3.0));
    let points = generator.multi_point(2000);
    let polygons = generator.multi_polygon(200, 12);
    for (name, threshold) in [("indexed", 0), ("scan", usize::MAX)] {
        let options = DistanceOptions::default().with_index_threshold(threshold);
        group.bench_function(name, |bencher| {
            bencher.iter(|| {
                criterion::black_box(distance_with_options(
                    criterion::black_box(&points),
                    criterion::black_box(&polygons),
                    &Euclidean,
                    &options,
                ))
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_multipoint, bench_multipoint_to_multipolygon);
criterion_main!(benches);
