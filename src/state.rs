use crate::config::SimConfig;
use crate::error::{ConfigError, GrabDenied, ReleaseDenied, SimError};
use crate::grab::{self, SessionState};
use crate::integrator;
use crate::registry::TokenRegistry;
use crate::scoring::{self, Leaderboard};
use crate::snapshot::{LeaderboardView, TokenView};
use crate::token::{HeldState, HolderRef, Modality, Token, TokenId};
use crate::vec3::Vec3;

/// Central simulation state: registry, turn phase, and the most recent
/// leaderboard. One instance per play session, driven synchronously by the
/// host shell — input transitions first, then `tick`, then snapshot reads.
pub struct ThrowSim {
    registry: TokenRegistry,
    session: SessionState,
    config: SimConfig,
    leaderboard: Leaderboard,
}

impl ThrowSim {
    /// Build a simulation from a validated config. Out-of-range tuning is a
    /// setup error, never discovered mid-simulation.
    pub fn new(config: SimConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            registry: TokenRegistry::new(),
            session: SessionState::default(),
            config,
            leaderboard: Leaderboard::default(),
        })
    }

    /// Register a token at scene setup.
    pub fn register_token(&mut self, token: Token) -> Result<(), ConfigError> {
        self.registry.register(token)
    }

    /// Input shell: request a grab on behalf of a modality.
    pub fn try_grab(
        &mut self,
        id: TokenId,
        modality: Modality,
        holder: HolderRef,
    ) -> Result<(), SimError> {
        let token = self
            .registry
            .get_mut(id)
            .ok_or(SimError::UnknownToken(id))?;
        grab::try_grab(token, &self.session, modality, holder, &self.config)?;
        Ok(())
    }

    /// Input shell: release a held token, committing the estimated throw.
    pub fn release(&mut self, id: TokenId) -> Result<(), SimError> {
        let token = self
            .registry
            .get_mut(id)
            .ok_or(SimError::UnknownToken(id))?;
        grab::release(token, &mut self.session, &self.config)?;
        Ok(())
    }

    /// Shell-reported world position for a held token. `dt` is the time
    /// since the previous report, measured by the caller — the core never
    /// reads a clock.
    pub fn update_held_position(
        &mut self,
        id: TokenId,
        world_pos: Vec3,
        dt: f64,
    ) -> Result<(), SimError> {
        let token = self
            .registry
            .get_mut(id)
            .ok_or(SimError::UnknownToken(id))?;
        match &mut token.held {
            HeldState::Free => Err(ReleaseDenied::NotHeld.into()),
            HeldState::Held { estimator, .. } => {
                estimator.sample(token.pos, dt);
                token.pos = world_pos;
                token.last_world_pos = world_pos;
                Ok(())
            }
        }
    }

    /// Shell-reported aim for a held token (keyboard aim-and-throw).
    pub fn update_held_aim(
        &mut self,
        id: TokenId,
        force: f64,
        direction: f64,
    ) -> Result<(), SimError> {
        let token = self
            .registry
            .get_mut(id)
            .ok_or(SimError::UnknownToken(id))?;
        match &mut token.held {
            HeldState::Free => Err(ReleaseDenied::NotHeld.into()),
            HeldState::Held { estimator, .. } => {
                estimator.set_aim(force, direction);
                Ok(())
            }
        }
    }

    /// Advance every free token by `delta` seconds, then refresh the
    /// leaderboard, so scores always reflect post-integration positions.
    /// Apply the frame's grab/release transitions before calling this.
    pub fn tick(&mut self, delta: f64) {
        for token in self.registry.iter_mut() {
            integrator::step(token, &self.config, delta);
        }
        self.leaderboard = scoring::evaluate(&self.registry, &self.session);
    }

    /// Put a free token back at a rest pose with no motion (between turns).
    pub fn reset_token(&mut self, id: TokenId, pos: Vec3) -> Result<(), SimError> {
        let token = self
            .registry
            .get_mut(id)
            .ok_or(SimError::UnknownToken(id))?;
        if token.is_held() {
            return Err(GrabDenied::AlreadyHeld.into());
        }
        token.pos = pos;
        token.last_world_pos = pos;
        token.yaw = 0.0;
        token.velocity = Vec3::zero();
        token.angular_velocity = Vec3::zero();
        Ok(())
    }

    pub fn marker_thrown(&self) -> bool {
        self.session.marker_thrown
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    pub fn token_view(&self, id: TokenId) -> Option<TokenView> {
        self.registry.get(id).map(TokenView::from_token)
    }

    /// Snapshots of every token in registration order.
    pub fn token_views(&self) -> Vec<TokenView> {
        self.registry.all().iter().map(TokenView::from_token).collect()
    }

    /// Leaderboard as of the last `tick`.
    pub fn leaderboard(&self) -> LeaderboardView {
        LeaderboardView::from_board(&self.leaderboard)
    }
}
