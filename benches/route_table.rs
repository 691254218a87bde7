use env_logger::Env;

use criterion::{criterion_group, criterion_main, Criterion};

use nanorand::{Rng, WyRand};
use site_routing::prelude::*;

/// A `width * height` grid where every Node is connected to its right and upper neighbor.
///
/// Weights are random tiers, so every third Edge or so is a crossing.
fn grid_site(width: usize, height: usize, seed: u64) -> Graph {
    let mut rng = WyRand::new_seed(seed);
    let policy = WeightPolicy::DEFAULT;
    let id = |x: usize, y: usize| (x + y * width) as NodeID;

    let mut builder = GraphBuilder::new();
    for y in 0..height {
        for x in 0..width {
            builder = builder.node(id(x, y), Some((x, y)));
        }
    }
    for y in 0..height {
        for x in 0..width {
            let tier = WeightTier::ALL[rng.generate_range(0..WeightTier::ALL.len())];
            if x + 1 < width {
                builder = builder.tier_edge(id(x, y), id(x + 1, y), tier, &policy);
            }
            if y + 1 < height {
                builder = builder.tier_edge(id(x, y), id(x, y + 1), tier, &policy);
            }
        }
    }
    builder.build().unwrap()
}

#[allow(unused)]
// Setup logging output
fn init() {
    let env = Env::default()
        .filter_or("ROUTE_LOG_LEVEL", "warn") // debug or trace show the timings of every search
        .write_style_or("ROUTE_LOG_STYLE", "always");

    let _ = env_logger::Builder::from_env(env).is_test(true).try_init();
}

fn bench_reference_site(c: &mut Criterion) {
    let mut group = c.benchmark_group("Reference Site");
    init();

    let site = SiteTopology::reference();
    let policy = WeightPolicy::DEFAULT;
    let graph = site.build_graph(&policy).unwrap();

    group.bench_function("Build Graph", |b| {
        b.iter(|| site.build_graph(&policy).unwrap())
    });
    group.bench_function("Routes to home", |b| {
        b.iter(|| compute_shortest_paths(&graph, site.home).unwrap())
    });

    let routes = compute_shortest_paths(&graph, site.home).unwrap();
    group.bench_function("Export", |b| {
        b.iter(|| {
            RouteDocument::for_site(&site, &policy, &routes)
                .to_yaml()
                .unwrap()
        })
    });
}

fn bench_grid_site(c: &mut Criterion) {
    let mut group = c.benchmark_group("Grid Site");

    for size in [16, 64, 256] {
        let graph = grid_site(size, size, 4);

        let id = format!("Routes to corner, Grid Size: ({}, {})", size, size);
        group.bench_function(&id, |b| {
            b.iter(|| compute_shortest_paths(&graph, 0).unwrap())
        });
    }

    // every destination of a small grid
    group.sample_size(10);
    let graph = grid_site(16, 16, 4);
    group.bench_function("Route cache, every destination, Grid Size: (16, 16)", |b| {
        b.iter(|| {
            let cache = RouteCache::new(&graph);
            for destination in graph.node_ids() {
                cache.get_or_compute(destination).unwrap();
            }
            cache.len()
        })
    });
}

criterion_group!(benches, bench_reference_site, bench_grid_site);
criterion_main!(benches);
