// src/generators/shuffle.rs
use rand::seq::SliceRandom;
use rand::Rng;
use crate::models::ShuffleMode;

pub fn shuffle<T, R: Rng + ?Sized>(items: &mut Vec<T>, mode: ShuffleMode, rng: &mut R) {
    match mode {
        ShuffleMode::FisherYates => items.shuffle(rng),
        ShuffleMode::RandomSort => random_sort(items, rng),
    }
}

/// Merge sort whose comparator answers with a coin flip.
///
/// Reproduces the "sort with a random comparator" behaviour of the browser
/// generator. `slice::sort_by` is not used because it may panic on a
/// comparator that is not a total order.
pub fn random_sort<T, R: Rng + ?Sized>(items: &mut Vec<T>, rng: &mut R) {
    if items.len() < 2 {
        return;
    }

    let mut right = items.split_off(items.len() / 2);
    random_sort(items, rng);
    random_sort(&mut right, rng);

    let left = std::mem::take(items);
    items.reserve(left.len() + right.len());

    let mut left = left.into_iter().peekable();
    let mut right = right.into_iter().peekable();

    while left.peek().is_some() && right.peek().is_some() {
        let next = if rng.gen_bool(0.5) { left.next() } else { right.next() };
        items.extend(next);
    }
    items.extend(left);
    items.extend(right);
}
