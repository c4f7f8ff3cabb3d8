use divan::{Bencher, black_box};
use pathfinder::{HintConfig, NodePath, SourceTree, Tree, find, hints_for_path, index_for_hint};

fn main() {
    divan::main();
}

/// A stylesheet with `rules` repeated rule blocks, each holding a few
/// declarations and a nested block.
fn stylesheet(rules: usize) -> String {
    let mut source = String::new();
    for i in 0..rules {
        source.push_str(&format!(
            ".rule-{} {{ color: red; margin: 0; .inner {{ padding: {i}px; }} }}\n",
            i % 10
        ));
    }
    source
}

/// The same stylesheet with every seventh rule dropped.
fn edited(rules: usize) -> String {
    let mut source = String::new();
    for i in (0..rules).filter(|i| i % 7 != 3) {
        source.push_str(&format!(
            ".rule-{} {{ color: red; margin: 0; .inner {{ padding: {i}px; }} }}\n",
            i % 10
        ));
    }
    source
}

fn parse(source: &str) -> Tree {
    pathfinder_source::parse(source).unwrap()
}

#[divan::bench(args = [100, 1000])]
fn find_with_hints(bencher: Bencher, rules: usize) {
    let origin = parse(&stylesheet(rules));
    let target = parse(&edited(rules));
    let rule = origin.child_at(origin.root, rules / 2).unwrap();
    let node = origin.child_at(rule, 2).unwrap();
    let path = NodePath::of(&origin, node);
    let hints = hints_for_path(&origin, node, &HintConfig::default());

    bencher.bench_local(|| {
        black_box(find(black_box(&target), &path, &hints));
    });
}

#[divan::bench(args = [100, 1000])]
fn find_without_hints(bencher: Bencher, rules: usize) {
    let origin = parse(&stylesheet(rules));
    let target = parse(&edited(rules));
    let rule = origin.child_at(origin.root, rules / 2).unwrap();
    let path = NodePath::of(&origin, rule);

    bencher.bench_local(|| {
        black_box(find(black_box(&target), &path, &[]));
    });
}

#[divan::bench(args = [100, 1000])]
fn insertion_point(bencher: Bencher, rules: usize) {
    let origin = parse(&stylesheet(rules));
    let target = parse(&edited(rules));
    // index 3 is dropped from the edited copy
    let missing = origin.child_at(origin.root, 3).unwrap();
    let hints = hints_for_path(&origin, missing, &HintConfig::default());
    let hint = hints.last().and_then(Option::as_ref);

    bencher.bench_local(|| {
        black_box(index_for_hint(black_box(&target), target.root, hint));
    });
}

#[divan::bench(args = [100, 1000])]
fn parse_stylesheet(bencher: Bencher, rules: usize) {
    let source = stylesheet(rules);
    bencher.bench_local(|| {
        black_box(parse(black_box(&source)));
    });
}
