use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use lotfit::entities::{Catalog, Listing, VehicleRequest, flatten_vehicles};
use lotfit::packing::pack;
use lotfit::solve::compute_results;
use rand::prelude::SmallRng;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};
use std::hint::black_box;

criterion_main!(benches);
criterion_group!(benches, pack_bench, compute_results_bench);

const N_VEHICLES: [usize; 3] = [5, 20, 80];
const N_LOCATIONS: [usize; 3] = [10, 100, 1000];
const VEHICLE_LENGTHS: [u32; 6] = [10, 15, 20, 30, 40, 50];

fn create_vehicles(rng: &mut SmallRng, n: usize) -> Vec<u32> {
    let requests = (0..n)
        .map(|_| VehicleRequest::new(*VEHICLE_LENGTHS.choose(rng).unwrap(), 1))
        .collect::<Vec<_>>();
    flatten_vehicles(&requests)
}

fn create_catalog(rng: &mut SmallRng, n_locations: usize) -> Catalog {
    let listings = (0..n_locations)
        .flat_map(|loc| (0..5).map(move |i| (loc, i)))
        .map(|(loc, i)| {
            Listing::new(
                format!("l{loc}_{i}"),
                format!("loc{loc}"),
                rng.random_range(10..200),
                rng.random_range(10..100),
                rng.random_range(0..10_000),
            )
        })
        .collect();
    Catalog::new(listings)
}

/// Packing a growing number of vehicles onto a single large listing
fn pack_bench(c: &mut Criterion) {
    let mut rng = SmallRng::seed_from_u64(0);
    let listing = Listing::new("l", "loc", 300, 150, 0);

    let mut group = c.benchmark_group("pack");
    for n in N_VEHICLES {
        let vehicles = create_vehicles(&mut rng, n);
        group.bench_function(BenchmarkId::from_parameter(n), |b| {
            b.iter(|| pack(black_box(&listing), black_box(&vehicles)))
        });
    }
    group.finish();
}

/// Full search over catalogs with a growing number of locations (5 listings each)
fn compute_results_bench(c: &mut Criterion) {
    let mut rng = SmallRng::seed_from_u64(0);
    let vehicles = create_vehicles(&mut rng, 10);

    let mut group = c.benchmark_group("compute_results");
    for n in N_LOCATIONS {
        let catalog = create_catalog(&mut rng, n);
        group.bench_function(BenchmarkId::from_parameter(n), |b| {
            b.iter(|| compute_results(black_box(&vehicles), black_box(&catalog)))
        });
    }
    group.finish();
}
