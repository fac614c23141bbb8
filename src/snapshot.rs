use crate::scoring::{Leaderboard, ScoreEntry};
use crate::token::{HeldState, HolderRef, Modality, PlayerId, Token, TokenId, TokenKind};
use serde::{Deserialize, Serialize};

/// Round to 4 decimal places (plenty for display, saves JSON size when a
/// shell forwards snapshots over a bridge).
#[inline]
fn round4(v: f64) -> f64 {
    (v * 10000.0).round() / 10000.0
}

/// Hold state as the shell sees it: enough to attach/detach visuals,
/// nothing about the estimator internals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum HeldView {
    Free,
    Held {
        modality: Modality,
        holder: HolderRef,
    },
}

/// Read-only per-token snapshot for the rendering/UI shell.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenView {
    pub id: TokenId,
    pub kind: TokenKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner_id: Option<PlayerId>,
    pub pos: [f64; 3],
    pub yaw: f64,
    pub velocity: [f64; 3],
    pub held: HeldView,
}

impl TokenView {
    pub fn from_token(token: &Token) -> Self {
        Self {
            id: token.id,
            kind: token.kind,
            owner_id: token.owner_id,
            pos: [
                round4(token.pos.x),
                round4(token.pos.y),
                round4(token.pos.z),
            ],
            yaw: round4(token.yaw),
            velocity: [
                round4(token.velocity.x),
                round4(token.velocity.y),
                round4(token.velocity.z),
            ],
            held: match token.held {
                HeldState::Free => HeldView::Free,
                HeldState::Held {
                    modality, holder, ..
                } => HeldView::Held { modality, holder },
            },
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreView {
    pub token_id: TokenId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner_id: Option<PlayerId>,
    pub distance: f64,
}

impl ScoreView {
    fn from_entry(entry: &ScoreEntry) -> Self {
        Self {
            token_id: entry.token_id,
            owner_id: entry.owner_id,
            distance: round4(entry.distance),
        }
    }
}

/// Leaderboard snapshot for the UI: the leader (absent until the marker has
/// been thrown) plus the full ascending ranking.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardView {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub leader: Option<ScoreView>,
    pub ranking: Vec<ScoreView>,
}

impl LeaderboardView {
    pub fn from_board(board: &Leaderboard) -> Self {
        Self {
            leader: board.leader().map(ScoreView::from_entry),
            ranking: board.ranking.iter().map(ScoreView::from_entry).collect(),
        }
    }
}
