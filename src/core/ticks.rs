//! Axis tick generation for value axes.
//!
//! Both generators always include the domain ends so the axis line is labeled
//! at its edges, and both are bounded so a pathological step cannot loop.

const TICK_TOLERANCE: f64 = 1e-9;
const MAX_TICKS: usize = 200;

/// "Nice" 1-2-5 ticks across `[min, max]` aiming for `target` intervals.
#[must_use]
pub fn nice_ticks(min: f64, max: f64, target: usize) -> Vec<f64> {
    if !min.is_finite() || !max.is_finite() {
        return Vec::new();
    }
    let (lo, hi) = ordered(min, max);
    if (hi - lo).abs() < TICK_TOLERANCE {
        return vec![lo];
    }
    if target == 0 {
        return with_domain_ends(Vec::new(), lo, hi);
    }

    let step = nice_step((hi - lo) / target as f64);
    let first = (lo / step).ceil() as i64;
    let last = (hi / step).floor() as i64;
    let ticks = (first..=last)
        .take(MAX_TICKS)
        .map(|index| index as f64 * step)
        .collect();

    with_domain_ends(ticks, lo, hi)
}

/// Ticks at `min + i * step` up to `max`.
///
/// Returns only the domain ends when `step` is not positive and finite.
#[must_use]
pub fn stepped_ticks(min: f64, max: f64, step: f64) -> Vec<f64> {
    if !min.is_finite() || !max.is_finite() {
        return Vec::new();
    }
    let (lo, hi) = ordered(min, max);
    if (hi - lo).abs() < TICK_TOLERANCE {
        return vec![lo];
    }
    if !step.is_finite() || step <= 0.0 {
        return with_domain_ends(Vec::new(), lo, hi);
    }

    let ticks = (0..MAX_TICKS)
        .map(|index| lo + index as f64 * step)
        .take_while(|tick| *tick <= hi + TICK_TOLERANCE)
        .collect();

    with_domain_ends(ticks, lo, hi)
}

/// Rounds a raw step to 1, 2, 5 or 10 times a power of ten.
#[must_use]
pub fn nice_step(raw: f64) -> f64 {
    if !raw.is_finite() || raw <= 0.0 {
        return 1.0;
    }
    let power = raw.log10().floor();
    let base = 10f64.powf(power);
    let normalized = raw / base;
    let nice = if normalized <= 1.0 {
        1.0
    } else if normalized <= 2.0 {
        2.0
    } else if normalized <= 5.0 {
        5.0
    } else {
        10.0
    };
    nice * base
}

fn ordered(a: f64, b: f64) -> (f64, f64) {
    if a <= b { (a, b) } else { (b, a) }
}

fn with_domain_ends(mut ticks: Vec<f64>, lo: f64, hi: f64) -> Vec<f64> {
    ticks.retain(|tick| {
        tick.is_finite() && *tick >= lo - TICK_TOLERANCE && *tick <= hi + TICK_TOLERANCE
    });
    for tick in &mut ticks {
        if (*tick - lo).abs() < TICK_TOLERANCE {
            *tick = lo;
        } else if (*tick - hi).abs() < TICK_TOLERANCE {
            *tick = hi;
        }
    }
    ticks.push(lo);
    ticks.push(hi);
    ticks.sort_by(f64::total_cmp);
    ticks.dedup_by(|a, b| (*a - *b).abs() < TICK_TOLERANCE);
    ticks
}
