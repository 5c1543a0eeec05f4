//! Benchmark tests for the flattening pass

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use nestmap::mapper::{flatten, ColumnDecorator, NoDecoration, NodeKind, TreeNode};

/// Build a complete tree with `fanout` children per node, `depth` levels deep,
/// in ascending `left` order
fn build_tree(fanout: u64, depth: u32) -> Vec<TreeNode> {
    fn visit(
        nodes: &mut Vec<TreeNode>,
        next_id: &mut u64,
        counter: &mut u64,
        parent: u64,
        fanout: u64,
        depth: u32,
    ) {
        *next_id += 1;
        let id = *next_id;
        *counter += 1;
        let left = *counter;
        let index = nodes.len();

        let kind = if depth == 0 { NodeKind::Leaf } else { NodeKind::Category };
        nodes.push(
            TreeNode::new(id, parent, left, 0, kind, format!("node{}", id)).with_extra("enabled", id % 2 == 0),
        );

        if depth > 0 {
            for _ in 0..fanout {
                visit(nodes, next_id, counter, id, fanout, depth - 1);
            }
        }

        *counter += 1;
        nodes[index].right = *counter;
    }

    let mut nodes = Vec::new();
    let (mut next_id, mut counter) = (0, 0);
    for _ in 0..fanout {
        visit(&mut nodes, &mut next_id, &mut counter, 0, fanout, depth);
    }
    nodes
}

fn benchmark_flatten(c: &mut Criterion) {
    let mut group = c.benchmark_group("flatten");

    for depth in [2u32, 4, 6].iter() {
        let nodes = build_tree(4, *depth);

        group.bench_with_input(BenchmarkId::new("plain", nodes.len()), &nodes, |b, nodes| {
            b.iter(|| flatten(black_box(nodes), "", "", &NoDecoration))
        });

        let decorator = ColumnDecorator::new(["enabled"]);
        group.bench_with_input(BenchmarkId::new("decorated", nodes.len()), &nodes, |b, nodes| {
            b.iter(|| flatten(black_box(nodes), "", "", &decorator))
        });
    }

    group.finish();
}

criterion_group!(benches, benchmark_flatten);
criterion_main!(benches);
