use crate::config::SimConfig;
use crate::error::{GrabDenied, ReleaseDenied};
use crate::estimator::ThrowEstimator;
use crate::token::{HeldState, HolderRef, Modality, Token, TokenKind};
use crate::vec3::Vec3;

/// Turn-phase state for one play session. Owned by the sim, passed
/// explicitly wherever the phase matters; no ambient globals.
#[derive(Debug, Clone, Default)]
pub struct SessionState {
    /// Set the first time the marker leaves a hand. Gates both grab
    /// eligibility and scoring.
    pub marker_thrown: bool,
}

/// Marker-first turn order: until the marker has been thrown, only the
/// marker may be grabbed; afterwards, only player tokens.
fn grab_eligible(token: &Token, session: &SessionState) -> bool {
    match token.kind {
        TokenKind::Marker => !session.marker_thrown,
        TokenKind::Player => session.marker_thrown,
    }
}

/// Free -> Held transition. On success the token's motion is pinned to zero
/// and a fresh estimator starts tracking the hold; on failure nothing
/// changes.
pub fn try_grab(
    token: &mut Token,
    session: &SessionState,
    modality: Modality,
    holder: HolderRef,
    config: &SimConfig,
) -> Result<(), GrabDenied> {
    if token.is_held() {
        return Err(GrabDenied::AlreadyHeld);
    }
    if !grab_eligible(token, session) {
        return Err(GrabDenied::WrongPhase);
    }

    token.velocity = Vec3::zero();
    token.angular_velocity = Vec3::zero();
    token.last_world_pos = token.pos;
    token.held = HeldState::Held {
        modality,
        holder,
        estimator: ThrowEstimator::for_modality(modality, token.pos, config),
    };
    tracing::debug!(token = token.id, ?modality, holder, "token grabbed");
    Ok(())
}

/// Held -> Free transition. Commits the estimator into the token's velocity
/// and spin; releasing the marker flips the session into the player-throw
/// phase.
pub fn release(
    token: &mut Token,
    session: &mut SessionState,
    config: &SimConfig,
) -> Result<(), ReleaseDenied> {
    match std::mem::replace(&mut token.held, HeldState::Free) {
        HeldState::Free => Err(ReleaseDenied::NotHeld),
        HeldState::Held { estimator, .. } => {
            let (velocity, angular_velocity) = estimator.commit(token.pos, config);
            token.velocity = velocity;
            token.angular_velocity = angular_velocity;
            if token.kind == TokenKind::Marker && !session.marker_thrown {
                session.marker_thrown = true;
                tracing::info!(token = token.id, "marker thrown");
            } else {
                tracing::debug!(token = token.id, "token released");
            }
            Ok(())
        }
    }
}
