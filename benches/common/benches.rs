use criterion::Bencher;
use ordered_queue::{OrderedQueue, Priority};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn random_keys(n: usize) -> Vec<Priority> {
    let mut rng = StdRng::seed_from_u64(42);
    (0..n)
        .map(|_| Priority::from(rng.gen_range(-1000..1000_i32)))
        .collect()
}

fn filled(keys: &[Priority]) -> OrderedQueue<usize> {
    keys.iter().copied().enumerate().collect()
}

pub fn insert_random(b: &mut Bencher, n: usize) {
    let keys = random_keys(n);
    b.iter_batched(
        || (OrderedQueue::with_capacity(n), keys.clone()),
        |(mut q, keys)| {
            for (i, k) in keys.into_iter().enumerate() {
                q.insert(i, k);
            }
            q
        },
        criterion::BatchSize::SmallInput,
    );
}

pub fn insert_ascending(b: &mut Bencher, n: usize) {
    b.iter_batched(
        OrderedQueue::new,
        |mut q| {
            for i in 0..n {
                q.insert(i, Priority::from(i as u32));
            }
            q
        },
        criterion::BatchSize::SmallInput,
    );
}

pub fn iterate(b: &mut Bencher, n: usize) {
    let q = filled(&random_keys(n));
    b.iter(|| q.iter().map(|(v, _)| *v).sum::<usize>());
}

pub fn drain(b: &mut Bencher, n: usize) {
    let keys = random_keys(n);
    b.iter_batched(
        || filled(&keys),
        |mut q| q.drain().count(),
        criterion::BatchSize::SmallInput,
    );
}
