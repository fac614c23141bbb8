use crate::grab::SessionState;
use crate::registry::TokenRegistry;
use crate::token::{PlayerId, TokenId, TokenKind};
use crate::vec3::distance;

/// One player token's distance to the marker.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreEntry {
    pub token_id: TokenId,
    pub owner_id: Option<PlayerId>,
    pub distance: f64,
}

/// Ranking of player tokens by proximity to the marker, closest first.
/// Empty until the marker has been thrown.
#[derive(Debug, Clone, Default)]
pub struct Leaderboard {
    pub ranking: Vec<ScoreEntry>,
}

impl Leaderboard {
    pub fn leader(&self) -> Option<&ScoreEntry> {
        self.ranking.first()
    }
}

/// Compute the current ranking from token positions. Only player tokens are
/// scored; the marker is the target, never a competitor. Reads state, never
/// mutates it.
pub fn evaluate(registry: &TokenRegistry, session: &SessionState) -> Leaderboard {
    if !session.marker_thrown {
        return Leaderboard::default();
    }
    let Some(marker) = registry.marker() else {
        return Leaderboard::default();
    };
    let marker_pos = marker.pos;

    let mut ranking: Vec<ScoreEntry> = registry
        .all()
        .iter()
        .filter(|t| t.kind == TokenKind::Player)
        .map(|t| ScoreEntry {
            token_id: t.id,
            owner_id: t.owner_id,
            distance: distance(t.pos, marker_pos),
        })
        .collect();

    // Stable sort: equal distances keep registration order, so the
    // first-registered token wins ties.
    ranking.sort_by(|a, b| a.distance.total_cmp(&b.distance));

    Leaderboard { ranking }
}
