//! Synthetic CPU load.
//!
//! A request may ask the server to keep a core busy for `id × 1000` ms
//! before answering. The burn is a plain busy loop on the calling thread:
//! it never sleeps and never yields back to the runtime, so the worker
//! that runs it is unavailable to other requests until it finishes.

use rand::Rng;
use std::f64::consts::PI;
use std::hint::black_box;
use std::time::{Duration, Instant};
use tracing::{info, warn};

/// Milliseconds of load per unit of requested factor.
pub const BASE_UNIT_MS: f64 = 1000.0;

const OUTER_ITERATIONS: u32 = 50;
const INNER_STRIDE: u32 = 50;

/// Numeric value of a path identifier.
///
/// Surrounding whitespace is ignored and an empty string is zero.
/// Unsigned `0x`, `0o` and `0b` literals are read in their radix.
/// Anything else that is not a decimal number is `NaN`.
pub fn requested_factor(id: &str) -> f64 {
    let trimmed = id.trim();
    if trimmed.is_empty() {
        return 0.0;
    }
    if let Some(value) = radix_literal(trimmed) {
        return value;
    }
    trimmed.parse::<f64>().unwrap_or(f64::NAN)
}

/// `Some` for any string carrying a radix prefix; `NaN` if its digits are bad.
fn radix_literal(s: &str) -> Option<f64> {
    let radix = match s.get(..2)? {
        "0x" | "0X" => 16,
        "0o" | "0O" => 8,
        "0b" | "0B" => 2,
        _ => return None,
    };
    let digits = &s[2..];
    if digits.is_empty() {
        return Some(f64::NAN);
    }
    let value = digits.chars().try_fold(0.0f64, |acc, c| {
        c.to_digit(radix).map(|d| acc * f64::from(radix) + f64::from(d))
    });
    Some(value.unwrap_or(f64::NAN))
}

/// Load derived from a single request.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LoadRequest {
    pub duration_ms: f64,
}

impl LoadRequest {
    pub fn from_id(id: &str) -> Self {
        Self {
            duration_ms: requested_factor(id) * BASE_UNIT_MS,
        }
    }

    /// `None` when there is nothing to burn (NaN, infinite, zero or negative).
    pub fn duration(&self) -> Option<Duration> {
        if !self.duration_ms.is_finite() || self.duration_ms <= 0.0 {
            return None;
        }
        Duration::try_from_secs_f64(self.duration_ms / 1000.0).ok()
    }
}

/// Outcome of a single burn.
#[derive(Debug, Clone, Copy)]
pub struct BurnReport {
    pub requested: Duration,
    pub elapsed: Duration,
    pub passes: u64,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct LoadGenerator {
    max_burn: Option<Duration>,
}

impl LoadGenerator {
    pub fn new(max_burn: Option<Duration>) -> Self {
        Self { max_burn }
    }

    /// Burn CPU for the load carried by `request`, if any.
    pub fn apply(&self, request: LoadRequest) -> Option<BurnReport> {
        let Some(duration) = request.duration() else {
            info!(duration_ms = request.duration_ms, "no cpu load to process");
            return None;
        };
        Some(self.burn(duration))
    }

    /// Occupy the calling thread until at least `duration` has elapsed.
    pub fn burn(&self, duration: Duration) -> BurnReport {
        let requested = match self.max_burn {
            Some(cap) if duration > cap => {
                warn!(
                    requested_ms = duration.as_millis() as u64,
                    cap_ms = cap.as_millis() as u64,
                    "cpu load clamped to configured maximum"
                );
                cap
            }
            _ => duration,
        };

        info!(duration_ms = requested.as_millis() as u64, "processing cpu load");

        let mut rng = rand::thread_rng();
        let start = Instant::now();
        let mut elapsed = start.elapsed();
        let mut passes = 0u64;
        while elapsed < requested {
            black_box(busy_pass(&mut rng, elapsed.as_secs_f64()));
            passes += 1;
            elapsed = start.elapsed();
        }

        info!(
            requested_ms = requested.as_millis() as u64,
            elapsed_ms = elapsed.as_millis() as u64,
            passes,
            "cpu load processed"
        );

        BurnReport {
            requested,
            elapsed,
            passes,
        }
    }
}

/// One outer pass of the workload: a triangular nest of float divisions.
fn busy_pass<R: Rng>(rng: &mut R, seed: f64) -> f64 {
    let mut sink = 0.0;
    for i in 0..OUTER_ITERATIONS {
        for _ in 0..i * INNER_STRIDE {
            let exponent = rng.gen_range(1..=10);
            sink += black_box(seed) / PI.powi(exponent);
        }
    }
    sink
}
