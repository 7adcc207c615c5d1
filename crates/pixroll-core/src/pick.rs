use rand::seq::SliceRandom;

/// Picks one element of `items` uniformly at random.
///
/// # Panics
///
/// Panics if `items` is empty. Callers hold a non-empty sequence by
/// construction (see [`UrlPool`][crate::pool::UrlPool]); an empty one here is a bug.
pub fn pick_random<T>(items: &[T]) -> &T {
    items
        .choose(&mut rand::thread_rng())
        .expect("pick_random called with an empty sequence")
}
