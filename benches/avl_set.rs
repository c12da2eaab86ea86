use avl_set::avl_tree::AvlSet;
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::Rng;
use std::collections::BTreeSet;

const NUM_OF_OPERATIONS: usize = 100;

fn bench_btreeset_insert(c: &mut Criterion) {
    c.bench_function("bench btreeset insert", |b| {
        b.iter(|| {
            let mut rng: rand::XorShiftRng = rand::SeedableRng::from_seed([1, 1, 1, 1]);
            let mut set = BTreeSet::new();
            for _ in 0..NUM_OF_OPERATIONS {
                set.insert(rng.next_u32());
            }
        })
    });
}

fn bench_avl_set_insert(c: &mut Criterion) {
    c.bench_function("bench avl_set insert", |b| {
        b.iter(|| {
            let mut rng: rand::XorShiftRng = rand::SeedableRng::from_seed([1, 1, 1, 1]);
            let mut set = AvlSet::new();
            for _ in 0..NUM_OF_OPERATIONS {
                set.insert(rng.next_u32());
            }
        })
    });
}

fn bench_avl_set_insert_sequential(c: &mut Criterion) {
    c.bench_function("bench avl_set insert sequential", |b| {
        b.iter(|| {
            let mut set = AvlSet::new();
            for key in 0..NUM_OF_OPERATIONS {
                set.insert(key);
            }
        })
    });
}

fn bench_avl_set_contains(c: &mut Criterion) {
    let mut rng: rand::XorShiftRng = rand::SeedableRng::from_seed([1, 1, 1, 1]);
    let mut set = AvlSet::new();
    let mut values = Vec::new();
    for _ in 0..NUM_OF_OPERATIONS {
        let key = rng.next_u32();
        set.insert(key);
        values.push(key);
    }

    c.bench_function("bench avl_set contains", move |b| {
        b.iter(|| {
            for key in &values {
                black_box(set.contains(key));
            }
        })
    });
}

fn bench_avl_set_preorder(c: &mut Criterion) {
    let mut rng: rand::XorShiftRng = rand::SeedableRng::from_seed([1, 1, 1, 1]);
    let mut set = AvlSet::new();
    for _ in 0..NUM_OF_OPERATIONS {
        set.insert(rng.next_u32());
    }

    c.bench_function("bench avl_set preorder", move |b| {
        b.iter(|| {
            for key in set.preorder() {
                black_box(key);
            }
        })
    });
}

criterion_group!(
    benches,
    bench_btreeset_insert,
    bench_avl_set_insert,
    bench_avl_set_insert_sequential,
    bench_avl_set_contains,
    bench_avl_set_preorder,
);
criterion_main!(benches);
