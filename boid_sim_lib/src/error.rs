use thiserror::Error;

pub type SimResult<T> = Result<T, SimError>;

/// Errors raised by the simulation core.
///
/// Construction is the only fallible operation; every per-tick computation
/// is total (empty neighbour sets and zero distances are guarded at the
/// call sites).
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum SimError {
    #[error("invalid parameter: {name} was {value}, must not be negative")]
    InvalidParameter { name: &'static str, value: f32 },
}
