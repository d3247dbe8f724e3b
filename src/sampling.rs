use crate::error::InputError;
use rand::Rng;
use tracing::trace;

/// Offline sampling: after the call `values[..k]` is a uniformly random `k`-subset of the
/// original values, which is also what is returned. The rest of the slice keeps the others.
pub fn random_subset<'a, T, R>(
    values: &'a mut [T],
    k: usize,
    rng: &mut R,
) -> Result<&'a [T], InputError>
where
    R: Rng + ?Sized,
{
    if k > values.len() {
        return Err(InputError::SampleTooLarge {
            k,
            len: values.len(),
        });
    }

    for i in 0..k {
        let chosen = rng.gen_range(i..values.len());
        trace!("position {} takes {}", i, chosen);
        values.swap(i, chosen);
    }
    Ok(&values[..k])
}

/// Online sampling of `k` items from a stream of unknown length (reservoir sampling).
///
/// Item number `n` (counting from 1) replaces a random reservoir slot with probability `k/n`.
/// Streams shorter than `k` are returned whole.
pub fn reservoir_sample<T, I, R>(stream: I, k: usize, rng: &mut R) -> Vec<T>
where
    I: IntoIterator<Item = T>,
    R: Rng + ?Sized,
{
    let mut stream = stream.into_iter();
    let mut reservoir: Vec<T> = stream.by_ref().take(k).collect();
    if reservoir.len() < k || k == 0 {
        return reservoir;
    }

    for (seen, item) in (k + 1..).zip(stream) {
        let slot = rng.gen_range(0..seen);
        if slot < k {
            reservoir[slot] = item;
        }
    }
    reservoir
}
