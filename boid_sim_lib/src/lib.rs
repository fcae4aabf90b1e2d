use glam::Vec2;

pub mod boid;
pub mod error;
pub mod flock;
pub mod math_helpers;
pub mod options;

use error::SimResult;
use flock::Flock;
use options::SimOptions;

/// Builds a flock and advances it `no_ticks` times with no active target,
/// for headless runs (benchmarks, experiments).
pub fn run_headless(no_ticks: u64, options: &SimOptions) -> SimResult<Flock> {
    let mut flock = Flock::new(options)?;

    (0..no_ticks).for_each(|_| flock.update(Vec2::ZERO));

    Ok(flock)
}
