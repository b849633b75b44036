use super::Key;
use ::quickcheck::{Arbitrary, Gen};
use ordered_queue::OrderedQueue;

/// Range of generated keys; kept narrow so that ties are common.
const KEY_SPREAD: i8 = 16;

#[derive(Debug, Clone, Copy)]
pub enum Decision {
    Insert(i8),
    Remove,
    RemoveBack,
    Clear,
}

impl Arbitrary for Decision {
    fn arbitrary(g: &mut Gen) -> Self {
        match u8::arbitrary(g) % 8 {
            0 | 1 => Decision::Remove,
            2 => Decision::RemoveBack,
            3 if u8::arbitrary(g) % 16 == 0 => Decision::Clear,
            _ => Decision::Insert(i8::arbitrary(g) % KEY_SPREAD),
        }
    }

    fn shrink(&self) -> Box<dyn Iterator<Item = Self>> {
        match *self {
            Decision::Insert(k) => Box::new(k.shrink().map(Decision::Insert)),
            _ => Box::new(std::iter::empty()),
        }
    }
}

#[derive(Clone, Debug)]
pub struct Decisions(pub Vec<Decision>);

impl Arbitrary for Decisions {
    fn arbitrary(g: &mut Gen) -> Self {
        Decisions(Vec::arbitrary(g))
    }

    fn shrink(&self) -> Box<dyn Iterator<Item = Self>> {
        Box::new(self.0.shrink().map(Decisions))
    }
}

/// Replay `ds` against both a queue and a sorted `Vec` model, checking they agree after every step.
pub fn qc_model_common<K: Key>(ds: Decisions) -> bool {
    let mut queue: OrderedQueue<usize, K> = OrderedQueue::new();
    let mut model: Vec<(usize, K)> = vec![];

    for (seq, &d) in ds.0.iter().enumerate() {
        match d {
            Decision::Insert(k) => {
                let key = K::key(k as i32);
                // New entries go in front of equal keys.
                let at = model.partition_point(|(_, e)| *e < key);
                model.insert(at, (seq, key.clone()));
                if queue.insert(seq, key) != model.len() {
                    println!("step {seq}: insert reported the wrong length");
                    return false;
                }
            }
            Decision::Remove => {
                let expected = (!model.is_empty()).then(|| model.remove(0));
                if queue.remove() != expected {
                    println!("step {seq}: remove disagrees with model");
                    return false;
                }
            }
            Decision::RemoveBack => {
                if queue.remove_back() != model.pop() {
                    println!("step {seq}: remove_back disagrees with model");
                    return false;
                }
            }
            Decision::Clear => {
                queue.clear();
                model.clear();
            }
        }

        let contents: Vec<(usize, K)> = queue.iter().map(|(v, k)| (*v, k.clone())).collect();
        if queue.len() != model.len() || contents != model {
            println!("step {seq}: queue {contents:?} != model {model:?}");
            return false;
        }
    }
    true
}

/// Whatever the operations, iteration is ascending and draining matches it.
pub fn qc_drain_common<K: Key>(ks: Vec<i8>) -> bool {
    let mut queue: OrderedQueue<usize, K> = ks
        .iter()
        .enumerate()
        .map(|(i, &k)| (i, K::key(k as i32)))
        .collect();

    let iterated: Vec<(usize, K)> = queue.iter().map(|(v, k)| (*v, k.clone())).collect();
    if iterated.windows(2).any(|w| w[0].1 > w[1].1) {
        println!("iteration out of order: {iterated:?}");
        return false;
    }

    let drained: Vec<(usize, K)> = queue.drain().collect();
    drained == iterated && queue.is_empty()
}
