//! Uniform random selection over quote lines
//!
//! The generator is always passed in by the caller so selection stays
//! deterministic under a seeded `StdRng`.

use rand::rngs::StdRng;
use rand::seq::index;
use rand::{Rng, SeedableRng};
use std::time::{SystemTime, UNIX_EPOCH};

/// Build the process generator, seeded once from the clock and pid
pub fn seeded_rng() -> StdRng {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or_default();
    let pid = u64::from(std::process::id());

    StdRng::seed_from_u64(nanos ^ pid.rotate_left(32))
}

/// Pick one line with equal probability
pub fn pick<'a, S, R>(lines: &'a [S], rng: &mut R) -> Option<&'a str>
where
    S: AsRef<str>,
    R: Rng + ?Sized,
{
    if lines.is_empty() {
        return None;
    }

    let i = rng.gen_range(0..lines.len());
    Some(lines[i].as_ref())
}

/// Pick up to `count` distinct lines, returned in their original order
pub fn pick_many<'a, S, R>(lines: &'a [S], count: usize, rng: &mut R) -> Vec<&'a str>
where
    S: AsRef<str>,
    R: Rng + ?Sized,
{
    let amount = count.min(lines.len());
    let mut indices = index::sample(rng, lines.len(), amount).into_vec();
    indices.sort_unstable();

    indices.into_iter().map(|i| lines[i].as_ref()).collect()
}
