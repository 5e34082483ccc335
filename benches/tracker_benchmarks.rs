// Performance benchmarks for the tracker registry
// Run with: cargo bench

use std::hint::black_box;
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use p2p_tracker::tracker::enums::tracker_request::TrackerRequest;
use p2p_tracker::tracker::structs::node_address::NodeAddress;
use p2p_tracker::tracker::structs::node_id::NodeId;
use p2p_tracker::tracker::structs::node_key::NodeKey;
use p2p_tracker::tracker::structs::tracker_state::TrackerState;

fn node_key(id: u64) -> NodeKey {
    NodeKey::new(NodeId(id), NodeAddress::new("127.0.0.1", 7000 + (id % 1000) as u16))
}

fn populated_state(nodes: u64, files_per_node: u64) -> TrackerState {
    let mut state = TrackerState::default();
    for id in 0..nodes {
        state.liveness.register(node_key(id));
        for file in 0..files_per_node {
            state.announce_ownership(&format!("file_{file}.bin"), node_key(id));
        }
    }
    state
}

fn bench_add_ownership(c: &mut Criterion) {
    c.bench_function("add_ownership_1000_nodes", |b| {
        b.iter(|| {
            let mut state = TrackerState::default();
            for id in 0..1000 {
                state.announce_ownership(black_box("shared.bin"), node_key(id));
            }
            black_box(state)
        });
    });
}

fn bench_search_owners(c: &mut Criterion) {
    let mut group = c.benchmark_group("search_owners");
    for nodes in [10u64, 100, 1000] {
        let state = populated_state(nodes, 4);
        group.bench_with_input(BenchmarkId::from_parameter(nodes), &state, |b, state| {
            b.iter(|| black_box(state.registry.search_owners(black_box("file_2.bin"))));
        });
    }
    group.finish();
}

fn bench_sweep(c: &mut Criterion) {
    let mut group = c.benchmark_group("sweep");
    for nodes in [100u64, 1000] {
        group.bench_with_input(BenchmarkId::from_parameter(nodes), &nodes, |b, &nodes| {
            b.iter_batched(
                || populated_state(nodes, 4),
                |mut state| {
                    state.sweep();
                    black_box(state.sweep())
                },
                criterion::BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

fn bench_parse_request(c: &mut Criterion) {
    let body = br#"{"mode":"OWN","node_id":17,"address":["127.0.0.1",7017],"filename":"file_1.bin"}"#;
    c.bench_function("parse_own_request", |b| {
        b.iter(|| black_box(TrackerRequest::from_slice(black_box(body))))
    });
}

criterion_group!(
    benches,
    bench_add_ownership,
    bench_search_owners,
    bench_sweep,
    bench_parse_request
);
criterion_main!(benches);
