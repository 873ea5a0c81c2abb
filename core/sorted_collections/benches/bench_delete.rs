//! Benchmarks for the delete operations of the flat containers.
//!
//! This benchmark tests the performance of erasing every key, in random order, from a [SortedSet] and compares it
//! with [BTreeSet] at 32bit, 128bit and 384bit key widths.
//!
//! ## Benchmark execution
//!
//! `> cargo bench -p sorted_collections --bench bench_delete`
//!
//! If you wish to run a subset of benchmarks in this file, you can filter them by name:
//!
//! `> cargo bench -p sorted_collections --bench bench_delete -- <filter>`
//!
//! ## License
//!
//! Copyright (C) Microsoft Corporation. All rights reserved.
//!
//! SPDX-License-Identifier: BSD-2-Clause-Patent
//!
use criterion::{BenchmarkGroup, BenchmarkId, Criterion, criterion_group, criterion_main, measurement::WallTime};
use rand::{Rng, prelude::SliceRandom};
use ruint::Uint;
use sorted_collections::SortedSet;
use std::{
    collections::{BTreeSet, HashSet},
    hash::Hash,
};

const MAX_SIZE: usize = 4096;

type U384 = Uint<384, 6>;

fn random_numbers<D>(min: D, max: D) -> Vec<D>
where
    D: Copy + Eq + std::cmp::PartialOrd + Hash + rand::distributions::uniform::SampleUniform,
{
    let mut rng = rand::thread_rng();
    let mut nums: HashSet<D> = HashSet::new();
    while nums.len() < MAX_SIZE {
        let num: D = rng.gen_range(min..=max);
        nums.insert(num);
    }
    nums.into_iter().collect()
}

fn bench_delete_width<K>(group: &mut BenchmarkGroup<'_, WallTime>, width: &str, nums: &[K])
where
    K: Copy + Ord,
{
    let mut nums_shuffled = nums.to_vec();
    nums_shuffled.shuffle(&mut rand::thread_rng());

    group.bench_function(BenchmarkId::new("sorted_set", width), |b| {
        b.iter_batched_ref(
            || nums.iter().copied().collect::<SortedSet<K>>(),
            |set| {
                for i in &nums_shuffled {
                    assert_eq!(set.erase(i), 1);
                }
            },
            criterion::BatchSize::PerIteration,
        );
    });

    group.bench_function(BenchmarkId::new("sorted_set_by_position", width), |b| {
        b.iter_batched_ref(
            || nums.iter().copied().collect::<SortedSet<K>>(),
            |set| {
                for i in &nums_shuffled {
                    let pos = set.find(i).unwrap();
                    set.remove_at(pos).unwrap();
                }
            },
            criterion::BatchSize::PerIteration,
        );
    });

    group.bench_function(BenchmarkId::new("btree_set", width), |b| {
        b.iter_batched_ref(
            || nums.iter().copied().collect::<BTreeSet<K>>(),
            |set| {
                for i in &nums_shuffled {
                    assert!(set.remove(i));
                }
            },
            criterion::BatchSize::PerIteration,
        );
    });
}

fn benchmark_delete_function(c: &mut Criterion) {
    let mut group = c.benchmark_group("delete");

    let nums = random_numbers::<u32>(0, 100_000);
    bench_delete_width(&mut group, "32bit", &nums);

    let nums = random_numbers::<u128>(0, 100_000);
    bench_delete_width(&mut group, "128bit", &nums);

    let nums = random_numbers::<u32>(0, 100_000).into_iter().map(Uint::from).collect::<Vec<U384>>();
    bench_delete_width(&mut group, "384bit", &nums);

    group.finish()
}

criterion_group!(benches, benchmark_delete_function);
criterion_main!(benches);
