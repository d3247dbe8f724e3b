use crate::error::InputError;
use tracing::debug;

/// Sieve of Eratosthenes: every prime `p <= n`.
///
/// Crossing out starts at `p * p`, smaller multiples were crossed out by smaller primes.
/// The sieve holds `n + 1` flags, so `n == usize::MAX` is rejected with `Overflow`.
pub fn primes_up_to(n: usize) -> Result<Vec<usize>, InputError> {
    let len = n.checked_add(1).ok_or(InputError::Overflow)?;
    if n < 2 {
        return Ok(Vec::new());
    }

    let mut is_prime = vec![true; len];
    is_prime[0] = false;
    is_prime[1] = false;

    let mut p = 2;
    while p <= n / p {
        if is_prime[p] {
            for multiple in (p * p..=n).step_by(p) {
                is_prime[multiple] = false;
            }
        }
        p += 1;
    }

    let primes: Vec<usize> = is_prime
        .iter()
        .enumerate()
        .filter_map(|(i, &prime)| prime.then_some(i))
        .collect();
    debug!("{} primes up to {}", primes.len(), n);
    Ok(primes)
}
