use crate::{Life, NiceInt};
use num_bigint::BigInt;
use std::time::Instant;
use tracing::{info, warn};

/// Compares two Life implementations by advancing them to equal virtual
/// generation counts and requiring identical signatures at every
/// synchronization point.
///
/// Whichever instance has the smaller generation counter is advanced, so
/// an implementation stepping `2^(level-1)` generations at a time can be
/// checked against a per-generation oracle. Runs until both the
/// elapsed-time budget and the minimum-generation goal are satisfied; the
/// budget is checked between whole steps only.
///
/// A divergence is reported with the generation and both signatures and
/// yields `false`; it is a result, not an error.
pub fn validate(
    a: &mut dyn Life,
    b: &mut dyn Life,
    seconds: f64,
    min_generations: u64,
) -> bool {
    let (sig_a, sig_b) = (a.signature(), b.signature());
    if sig_a != sig_b {
        warn!(
            a = a.name(),
            b = b.name(),
            "initial configurations differ: {sig_a:?} vs {sig_b:?}"
        );
        return false;
    }

    let timer = Instant::now();
    let goal = BigInt::from(min_generations);
    let mut gen_a = BigInt::from(0u32);
    let mut gen_b = BigInt::from(0u32);
    let mut synced = BigInt::from(0u32);
    loop {
        if gen_a <= gen_b {
            a.step();
            gen_a += a.generation_step();
        } else {
            b.step();
            gen_b += b.generation_step();
        }
        if gen_a != gen_b {
            continue;
        }
        let (sig_a, sig_b) = (a.signature(), b.signature());
        if sig_a != sig_b {
            warn!(
                a = a.name(),
                b = b.name(),
                generation = %gen_a,
                "signatures diverged: {sig_a:?} vs {sig_b:?}"
            );
            return false;
        }
        synced.clone_from(&gen_a);
        if timer.elapsed().as_secs_f64() >= seconds && synced >= goal {
            break;
        }
    }
    info!(
        a = a.name(),
        b = b.name(),
        generation = %synced,
        "signatures agree"
    );
    true
}

/// Benchmark helper: steps `life` until the wall-clock budget elapses
/// (whole steps only; a hyper step in progress is never interrupted) and
/// reports throughput and engine stats.
pub fn measure(life: &mut dyn Life, seconds: f64) -> String {
    let timer = Instant::now();
    let mut steps = 0u64;
    let mut generations = BigInt::from(0u32);
    while timer.elapsed().as_secs_f64() < seconds {
        life.step();
        steps += 1;
        generations += life.generation_step();
    }
    let elapsed = timer.elapsed().as_secs_f64();
    let gens_per_sec = steps as f64 * life.generation_step() as f64 / elapsed;
    let mut s = format!(
        "{}: {} steps, {} generations in {:.3} s ({} generations/s)\n",
        life.name(),
        NiceInt::from(steps),
        generations,
        elapsed,
        NiceInt::from_f64(gens_per_sec),
    );
    let extra = life.extra_info();
    if !extra.is_empty() {
        s.push_str(&extra);
    }
    s
}
