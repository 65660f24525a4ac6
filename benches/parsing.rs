use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use sgf_tree::{from_str, sgf_node, to_string, GameTree};

const COLUMNS: &[u8] = b"abcdefghijklmnopqrs";

fn point(i: usize) -> String {
    let x = COLUMNS[i % 19] as char;
    let y = COLUMNS[(i / 19) % 19] as char;
    format!("{}{}", x, y)
}

fn linear_game(moves: usize) -> GameTree {
    let mut tree = GameTree::from(sgf_node! { "FF" => 4, "GM" => 1, "SZ" => 19, "KM" => 6.5 });
    for i in 0..moves {
        let color = if i % 2 == 0 { "B" } else { "W" };
        tree.push_node(sgf_node! { color => point(i) });
    }
    tree
}

fn branching_game(depth: usize, width: usize) -> GameTree {
    let mut tree = GameTree::from(sgf_node! { "B" => point(depth), "C" => "a \\ comment ] here" });
    if depth > 0 {
        for _ in 0..width {
            tree.push_variation(branching_game(depth - 1, width));
        }
    }
    tree
}

fn benchmark_parse_linear(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_linear");

    for moves in [50, 250, 1000].iter() {
        let text = to_string(&linear_game(*moves)).unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(moves), &text, |b, text| {
            b.iter(|| from_str(black_box(text)))
        });
    }

    group.finish();
}

fn benchmark_serialize_linear(c: &mut Criterion) {
    let mut group = c.benchmark_group("serialize_linear");

    for moves in [50, 250, 1000].iter() {
        let tree = linear_game(*moves);
        group.bench_with_input(BenchmarkId::from_parameter(moves), &tree, |b, tree| {
            b.iter(|| to_string(black_box(tree)))
        });
    }

    group.finish();
}

fn benchmark_variations(c: &mut Criterion) {
    let tree = branching_game(6, 3);
    let text = to_string(&tree).unwrap();

    c.bench_function("parse_variations", |b| b.iter(|| from_str(black_box(&text))));
    c.bench_function("serialize_variations", |b| {
        b.iter(|| to_string(black_box(&tree)))
    });
}

criterion_group!(
    benches,
    benchmark_parse_linear,
    benchmark_serialize_linear,
    benchmark_variations
);
criterion_main!(benches);
