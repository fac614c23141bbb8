use crate::estimator::ThrowEstimator;
use crate::vec3::Vec3;

pub type TokenId = u32;
pub type PlayerId = u32;
/// Opaque shell-side handle to whatever does the holding: a controller
/// index, a pointer id, a keyboard focus slot.
pub type HolderRef = u32;

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenKind {
    /// The target token, thrown first. At most one per session.
    Marker,
    /// A scoreable token belonging to a player.
    Player,
}

/// Which kind of input currently drives a held token. The modality decides
/// how the release velocity is estimated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Modality {
    ControllerTrigger,
    ControllerGrip,
    PointerDrag,
    KeyboardAim,
}

/// Hold state of a token. The throw estimator lives inside `Held`, so it
/// exists exactly while the token is held and is consumed at release.
#[derive(Debug, Clone)]
pub enum HeldState {
    Free,
    Held {
        modality: Modality,
        holder: HolderRef,
        estimator: ThrowEstimator,
    },
}

/// One rigid token on the court. Created at scene setup, lives for the
/// whole session.
#[derive(Debug, Clone)]
pub struct Token {
    pub id: TokenId,
    pub kind: TokenKind,
    pub owner_id: Option<PlayerId>,
    pub pos: Vec3,
    /// Yaw accumulator in radians, advanced by spin magnitude. The renderer
    /// owns any richer rotation state.
    pub yaw: f64,
    pub velocity: Vec3,
    /// Spin: direction is the axis, magnitude the rate in rad/s.
    pub angular_velocity: Vec3,
    /// Centre-to-resting-face distance. Ground contact is at pos.y == half_height.
    pub half_height: f64,
    pub held: HeldState,
    /// Most recent shell-reported world position while held.
    pub last_world_pos: Vec3,
}

impl Token {
    pub fn marker(id: TokenId, pos: Vec3, half_height: f64) -> Self {
        Self::new(id, TokenKind::Marker, None, pos, half_height)
    }

    pub fn player(id: TokenId, owner_id: PlayerId, pos: Vec3, half_height: f64) -> Self {
        Self::new(id, TokenKind::Player, Some(owner_id), pos, half_height)
    }

    fn new(
        id: TokenId,
        kind: TokenKind,
        owner_id: Option<PlayerId>,
        pos: Vec3,
        half_height: f64,
    ) -> Self {
        Self {
            id,
            kind,
            owner_id,
            pos,
            yaw: 0.0,
            velocity: Vec3::zero(),
            angular_velocity: Vec3::zero(),
            half_height,
            held: HeldState::Free,
            last_world_pos: pos,
        }
    }

    pub fn is_held(&self) -> bool {
        matches!(self.held, HeldState::Held { .. })
    }

    pub fn is_free(&self) -> bool {
        matches!(self.held, HeldState::Free)
    }
}
