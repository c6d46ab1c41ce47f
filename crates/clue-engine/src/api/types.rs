use serde::Serialize;

/// Identifies one shown notification. Tokens are never reused within a session,
/// so an expiry for an old message can never be mistaken for the current one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct MessageToken(pub u64);

/// A game event communicated from Rust to the JS renderer.
/// Serialized as JSON with a `type` tag; see `bridge::protocol`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum GameEvent {
    /// A notification became the active message, replacing any previous one.
    MessageShown {
        token: MessageToken,
        text: String,
        duration_ms: u32,
    },
    /// The active message expired or was cleared.
    MessageCleared { token: MessageToken },
    /// A collectible entered the inventory. `row` is its 1-based journal row.
    ItemCollected { id: String, name: String, row: usize },
    /// Game-defined event: `kind` identifies it, `a/b/c` carry the payload.
    Custom { kind: u32, a: f32, b: f32, c: f32 },
}

impl GameEvent {
    /// Convenience constructor for a custom event with a single value.
    pub fn custom(kind: u32, a: f32) -> Self {
        GameEvent::Custom { kind, a, b: 0.0, c: 0.0 }
    }
}
