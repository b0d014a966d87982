//! Criterion benchmarks for grasple.

use criterion::{criterion_group, criterion_main, Criterion};
use rand::Rng;

use grasple::graph::{DepthFirstTraverser, GraphBuilder, IndexedGraph};
use grasple::tree::{LmrTree, TraversalOrder};

/// Build a random undirected graph through the builder.
fn make_random_graph(vertex_count: usize, edges_per_vertex: usize) -> IndexedGraph<u64> {
    let mut rng = rand::thread_rng();
    let mut builder = GraphBuilder::new();
    for i in 0..vertex_count {
        builder.vertex(i as u64);
    }
    for i in 0..vertex_count {
        for _ in 0..edges_per_vertex {
            let target = rng.gen_range(0..vertex_count);
            if target != i {
                builder.link(i as u64, target as u64);
            }
        }
    }
    builder.build().unwrap()
}

/// Build an LMR tree of random values drawn from a small range, so
/// duplicates are common.
fn make_random_tree(size: usize, range: i64) -> LmrTree<i64> {
    let mut rng = rand::thread_rng();
    let mut tree = LmrTree::new(range / 2);
    for _ in 0..size {
        tree.add(rng.gen_range(0..range));
    }
    tree
}

fn bench_graph_connect(c: &mut Criterion) {
    let mut graph = make_random_graph(10_000, 3);

    c.bench_function("connect_in_10k", |b| {
        let mut rng = rand::thread_rng();
        b.iter(|| {
            let a = rng.gen_range(0..10_000u64);
            let z = rng.gen_range(0..10_000u64);
            let _ = graph.connect(a, z);
        })
    });
}

fn bench_dfs_100k(c: &mut Criterion) {
    let graph = make_random_graph(100_000, 3);

    c.bench_function("dfs_100k", |b| {
        b.iter(|| {
            let mut traverser = DepthFirstTraverser::new(&graph, 0);
            traverser.run().unwrap();
            traverser.visited().len()
        })
    });
}

fn bench_components_100k(c: &mut Criterion) {
    let graph = make_random_graph(100_000, 1);

    c.bench_function("components_100k", |b| {
        b.iter(|| graph.find_connected_components().unwrap().len())
    });
}

fn bench_tree_add(c: &mut Criterion) {
    let mut tree = make_random_tree(10_000, 100_000);

    c.bench_function("lmr_add_to_10k", |b| {
        let mut rng = rand::thread_rng();
        b.iter(|| tree.add(rng.gen_range(0..100_000)))
    });
}

fn bench_tree_find_all(c: &mut Criterion) {
    let tree = make_random_tree(100_000, 1_000);

    c.bench_function("lmr_find_all_100k", |b| {
        let mut rng = rand::thread_rng();
        b.iter(|| tree.find_all(&rng.gen_range(0..1_000)).len())
    });
}

fn bench_tree_inorder(c: &mut Criterion) {
    let tree = make_random_tree(100_000, 100_000);

    c.bench_function("lmr_inorder_100k", |b| {
        b.iter(|| {
            let mut sum = 0i64;
            tree.traverse(TraversalOrder::Inorder, |v| sum += v);
            sum
        })
    });
}

criterion_group!(
    benches,
    bench_graph_connect,
    bench_dfs_100k,
    bench_components_100k,
    bench_tree_add,
    bench_tree_find_all,
    bench_tree_inorder,
);
criterion_main!(benches);
