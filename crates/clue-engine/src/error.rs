use thiserror::Error;

/// A command referenced a collectible id the registry does not know.
/// Correctly wired renderers only forward ids they got from the registry,
/// so this points at a wiring bug rather than at player input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown collectible `{0}`")]
pub struct UnknownItemError(pub String);

/// Failure to load or validate a scene manifest.
#[derive(Debug, Error)]
pub enum ManifestError {
    #[error("failed to parse scene manifest: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("collectible `{0}` is declared more than once")]
    DuplicateCollectible(String),
    #[error("puzzle trigger `{0}` is not a declared collectible")]
    UnknownTrigger(String),
    #[error("invalid puzzle configuration: {0}")]
    InvalidPuzzle(String),
    #[error("this game does not accept scene manifests")]
    Unsupported,
}
