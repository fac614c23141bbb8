use crate::error::ConfigError;
use crate::token::{Token, TokenId, TokenKind};
use std::collections::HashMap;

/// Owns every physics-bearing token for the session. Registration happens
/// once at scene setup; tokens are never destroyed, only re-held or reset.
/// Iteration order is registration order, which scoring relies on for
/// tie-breaking.
#[derive(Debug, Default)]
pub struct TokenRegistry {
    tokens: Vec<Token>,
    index: HashMap<TokenId, usize>,
    marker_idx: Option<usize>,
}

impl TokenRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a token. Rejects ill-formed tokens up front so the integrator
    /// never has to deal with them mid-simulation.
    pub fn register(&mut self, token: Token) -> Result<(), ConfigError> {
        if token.half_height <= 0.0 {
            return Err(ConfigError::HalfHeightNotPositive(
                token.id,
                token.half_height,
            ));
        }
        if self.index.contains_key(&token.id) {
            return Err(ConfigError::DuplicateTokenId(token.id));
        }
        match token.kind {
            TokenKind::Marker => {
                if self.marker_idx.is_some() {
                    return Err(ConfigError::SecondMarker);
                }
                if token.owner_id.is_some() {
                    return Err(ConfigError::MarkerWithOwner(token.id));
                }
            }
            TokenKind::Player => {
                if token.owner_id.is_none() {
                    return Err(ConfigError::PlayerWithoutOwner(token.id));
                }
            }
        }

        let idx = self.tokens.len();
        self.index.insert(token.id, idx);
        if token.kind == TokenKind::Marker {
            self.marker_idx = Some(idx);
        }
        self.tokens.push(token);
        Ok(())
    }

    pub fn get(&self, id: TokenId) -> Option<&Token> {
        self.index.get(&id).map(|&i| &self.tokens[i])
    }

    pub fn get_mut(&mut self, id: TokenId) -> Option<&mut Token> {
        let idx = *self.index.get(&id)?;
        Some(&mut self.tokens[idx])
    }

    /// All tokens in registration order.
    pub fn all(&self) -> &[Token] {
        &self.tokens
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Token> {
        self.tokens.iter_mut()
    }

    pub fn marker(&self) -> Option<&Token> {
        self.marker_idx.map(|i| &self.tokens[i])
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}
