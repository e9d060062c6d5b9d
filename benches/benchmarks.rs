criterion::criterion_main!(benches);
criterion::criterion_group! {
    name = benches;
    config = criterion::Criterion::default()
        .without_plots()
        .noise_threshold(3.0)
        .significance_level(0.01)
        .sample_size(10)
        .measurement_time(std::time::Duration::from_secs(1));
    targets =
        parsing_short_path,
        parsing_noisy_path,
        walking_deep_path,
        restoring_address,
}

use movepath::*;

/// a main line of `n` moves with a two-way fork at every node
fn bushy(n: usize) -> MoveTree {
    let mut tree = MoveTree::from(Size::square(52));
    for i in 0..n {
        let x = (i % 50) as u8 + 1;
        let y = (i / 50) as u8 + 1;
        tree.play(Move::stone(Color::White, x, y)).unwrap();
        tree.retreat(Stride::By(1));
        tree.play(Move::stone(Color::Black, x, y)).unwrap();
        tree.select(-1);
    }
    tree.focus(tree.root());
    tree
}

fn parsing_short_path(c: &mut criterion::Criterion) {
    c.bench_function("parse a short Path", |b| b.iter(|| Path::from("5N2B1")));
}

fn parsing_noisy_path(c: &mut criterion::Criterion) {
    let noisy = "12, b3; n 7 B 2 x 40 b1 ".repeat(64);
    c.bench_function("parse a long noisy Path", |b| {
        b.iter(|| Path::from(noisy.as_str()))
    });
}

fn walking_deep_path(c: &mut criterion::Criterion) {
    let mut tree = bushy(1000);
    let path = Path::from(format!("{}B2", "B1".repeat(999)).as_str());
    c.bench_function("walk 1000 Branch segments", |b| {
        b.iter(|| {
            tree.focus(tree.root());
            Navigator::from(&mut tree).walk(&path)
        })
    });
}

fn restoring_address(c: &mut criterion::Criterion) {
    let mut tree = bushy(1000);
    c.bench_function("restore a deep Address", |b| {
        b.iter(|| Navigator::from(&mut tree).restore(Address::from((900, 2))))
    });
}
