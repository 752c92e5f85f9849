use std::hint::black_box;

use criterion::{BatchSize, Criterion, criterion_group, criterion_main};
use indexed_heap::IndexedHeap;

const NUM_ITEMS: u32 = 10_000;

fn shuffled_items(seed: u64) -> Vec<u32> {
    let mut rng = fastrand::Rng::with_seed(seed);
    let mut items: Vec<u32> = (0..NUM_ITEMS).collect();
    rng.shuffle(&mut items);
    items
}

fn bench_offer_poll(c: &mut Criterion) {
    let items = shuffled_items(12345);

    c.bench_function("offer_poll", |b| {
        b.iter(|| {
            let mut heap = IndexedHeap::new();
            for &item in &items {
                heap.offer(black_box(item));
            }
            while let Ok(item) = heap.poll() {
                black_box(item);
            }
        })
    });
}

fn bench_remove_arbitrary(c: &mut Criterion) {
    let items = shuffled_items(12345);
    let removals = shuffled_items(54321);

    c.bench_function("remove_arbitrary", |b| {
        b.iter_batched(
            || items.iter().copied().collect::<IndexedHeap<u32>>(),
            |mut heap| {
                for item in &removals {
                    black_box(heap.remove(item).ok());
                }
            },
            BatchSize::LargeInput,
        )
    });
}

#[derive(Clone)]
struct Task {
    id: u32,
    priority: u64,
}

impl PartialEq for Task {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Task {}

impl std::hash::Hash for Task {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl std::borrow::Borrow<u32> for Task {
    fn borrow(&self) -> &u32 {
        &self.id
    }
}

fn bench_update_with(c: &mut Criterion) {
    let mut rng = fastrand::Rng::with_seed(999);
    let updates: Vec<(u32, u64)> = (0..NUM_ITEMS)
        .map(|_| (rng.u32(0..NUM_ITEMS), rng.u64(..)))
        .collect();

    c.bench_function("update_with", |b| {
        b.iter_batched(
            || {
                let mut heap = IndexedHeap::by_key(|t: &Task| t.priority);
                for id in 0..NUM_ITEMS {
                    heap.offer(Task {
                        id,
                        priority: id as u64,
                    });
                }
                heap
            },
            |mut heap| {
                for &(id, priority) in &updates {
                    let _ = heap.update_with(&id, |t| t.priority = priority);
                }
                black_box(heap.len());
            },
            BatchSize::LargeInput,
        )
    });
}

criterion_group!(
    benches,
    bench_offer_poll,
    bench_remove_arbitrary,
    bench_update_with
);
criterion_main!(benches);
