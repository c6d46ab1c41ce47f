use serde::{Deserialize, Serialize};

use crate::assets::registry::CollectibleRegistry;
use crate::error::ManifestError;

/// Scene manifest describing the collectibles and puzzle of one scene.
/// Loaded from a JSON file at runtime or embedded by the game.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneManifest {
    /// Collectibles in placement order.
    pub collectibles: Vec<CollectibleDescriptor>,
    /// Optional counter puzzle gated by a collectible.
    #[serde(default)]
    pub puzzle: Option<PuzzleDescriptor>,
    /// Objective line shown in the corner of the scene.
    #[serde(default)]
    pub objective: Option<String>,
    /// Override for how long notifications stay on screen.
    #[serde(default)]
    pub message_duration_ms: Option<u32>,
}

/// Describes a single collectible.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CollectibleDescriptor {
    /// Unique key, also the sprite key on the JS side (e.g., "lapis_bead").
    pub id: String,
    /// Human-readable name shown in tooltips and the journal.
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// World position of the sprite.
    pub x: f32,
    pub y: f32,
}

/// Describes the counter puzzle: which item starts it and what to match.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PuzzleDescriptor {
    /// Collectible id whose collection activates the puzzle.
    pub trigger: String,
    #[serde(default = "default_target")]
    pub target: i32,
    #[serde(default = "default_step")]
    pub step: i32,
}

fn default_target() -> i32 {
    100
}

fn default_step() -> i32 {
    5
}

impl SceneManifest {
    /// Parse and validate a manifest from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, ManifestError> {
        let manifest: Self = serde_json::from_str(json)?;
        manifest.validate()?;
        Ok(manifest)
    }

    /// Check ids are unique, the puzzle trigger exists and its numbers are usable.
    pub fn validate(&self) -> Result<(), ManifestError> {
        let registry = CollectibleRegistry::from_manifest(self)?;

        if let Some(puzzle) = &self.puzzle {
            if !registry.exists(&puzzle.trigger) {
                return Err(ManifestError::UnknownTrigger(puzzle.trigger.clone()));
            }
            if puzzle.target <= 0 {
                return Err(ManifestError::InvalidPuzzle(format!(
                    "target must be positive, got {}",
                    puzzle.target
                )));
            }
            if puzzle.step <= 0 {
                return Err(ManifestError::InvalidPuzzle(format!(
                    "step must be positive, got {}",
                    puzzle.step
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_minimal_manifest() {
        let json = r#"{
            "collectibles": [
                { "id": "lapis_bead", "name": "Lapis Lazuli Bead", "x": 400, "y": 400 }
            ]
        }"#;
        let manifest = SceneManifest::from_json(json).unwrap();
        assert_eq!(manifest.collectibles.len(), 1);
        assert_eq!(manifest.collectibles[0].description, "");
        assert!(manifest.puzzle.is_none());
        assert!(manifest.message_duration_ms.is_none());
    }

    #[test]
    fn puzzle_defaults_to_hundred_in_fives() {
        let json = r#"{
            "collectibles": [
                { "id": "copper_weights", "name": "Copper Weights", "x": 600, "y": 350 }
            ],
            "puzzle": { "trigger": "copper_weights" }
        }"#;
        let puzzle = SceneManifest::from_json(json).unwrap().puzzle.unwrap();
        assert_eq!(puzzle.target, 100);
        assert_eq!(puzzle.step, 5);
    }

    #[test]
    fn rejects_unknown_trigger() {
        let json = r#"{
            "collectibles": [],
            "puzzle": { "trigger": "copper_weights" }
        }"#;
        let err = SceneManifest::from_json(json).unwrap_err();
        assert!(matches!(err, ManifestError::UnknownTrigger(id) if id == "copper_weights"));
    }

    #[test]
    fn rejects_zero_step() {
        let json = r#"{
            "collectibles": [ { "id": "w", "name": "W", "x": 0, "y": 0 } ],
            "puzzle": { "trigger": "w", "step": 0 }
        }"#;
        let err = SceneManifest::from_json(json).unwrap_err();
        assert!(matches!(err, ManifestError::InvalidPuzzle(_)));
    }

    #[test]
    fn rejects_duplicate_ids() {
        let json = r#"{
            "collectibles": [
                { "id": "a", "name": "A", "x": 0, "y": 0 },
                { "id": "a", "name": "A again", "x": 1, "y": 1 }
            ]
        }"#;
        let err = SceneManifest::from_json(json).unwrap_err();
        assert!(matches!(err, ManifestError::DuplicateCollectible(id) if id == "a"));
    }

    #[test]
    fn reports_syntax_errors() {
        let err = SceneManifest::from_json("{ not json").unwrap_err();
        assert!(matches!(err, ManifestError::Parse(_)));
    }
}
