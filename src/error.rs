use crate::token::TokenId;
use thiserror::Error;

/// Why a grab request was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GrabDenied {
    /// Some modality already holds the token.
    #[error("token is already held")]
    AlreadyHeld,
    /// Marker-first turn order: the requested token is not grabbable yet.
    #[error("token is not grabbable in the current turn phase")]
    WrongPhase,
}

/// Why a release (or held-state update) was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ReleaseDenied {
    #[error("token is not currently held")]
    NotHeld,
}

/// Recoverable failures reported back to the input shell. None of these end
/// the session; the offending call is a no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SimError {
    #[error("grab denied: {0}")]
    Grab(#[from] GrabDenied),
    #[error("release denied: {0}")]
    Release(#[from] ReleaseDenied),
    #[error("unknown token id {0}")]
    UnknownToken(TokenId),
}

/// Invalid setup, rejected before the simulation runs.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("{name} must be strictly between 0 and 1, got {value}")]
    OutsideUnitInterval { name: &'static str, value: f64 },
    #[error("gravity acceleration must be negative, got {0}")]
    GravityNotNegative(f64),
    #[error("{name} must be positive, got {value}")]
    NotPositive { name: &'static str, value: f64 },
    #[error("{name} must not be negative, got {value}")]
    Negative { name: &'static str, value: f64 },
    #[error("token {0} has non-positive half-height {1}")]
    HalfHeightNotPositive(TokenId, f64),
    #[error("token id {0} is already registered")]
    DuplicateTokenId(TokenId),
    #[error("a marker token is already registered")]
    SecondMarker,
    #[error("marker token {0} must not have an owner")]
    MarkerWithOwner(TokenId),
    #[error("player token {0} must have an owner")]
    PlayerWithoutOwner(TokenId),
}
