use std::collections::HashMap;

use glam::Vec2;

use crate::assets::manifest::SceneManifest;
use crate::error::ManifestError;

/// Immutable definition of a collectible, shared read-only for a whole session.
#[derive(Debug, Clone, PartialEq)]
pub struct CollectibleDefinition {
    pub id: String,
    pub display_name: String,
    pub description: String,
    pub position: Vec2,
}

/// Registry of collectibles, built from a SceneManifest.
/// Keeps load order for sprite placement and an index for id lookups.
#[derive(Debug, Clone, Default)]
pub struct CollectibleRegistry {
    items: Vec<CollectibleDefinition>,
    index: HashMap<String, usize>,
}

impl CollectibleRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a registry from a manifest. Fails on duplicate ids.
    pub fn from_manifest(manifest: &SceneManifest) -> Result<Self, ManifestError> {
        Self::from_definitions(manifest.collectibles.iter().map(|desc| CollectibleDefinition {
            id: desc.id.clone(),
            display_name: desc.name.clone(),
            description: desc.description.clone(),
            position: Vec2::new(desc.x, desc.y),
        }))
    }

    pub fn from_definitions(
        definitions: impl IntoIterator<Item = CollectibleDefinition>,
    ) -> Result<Self, ManifestError> {
        let mut registry = Self::new();
        for def in definitions {
            if registry.index.contains_key(&def.id) {
                return Err(ManifestError::DuplicateCollectible(def.id));
            }
            registry.index.insert(def.id.clone(), registry.items.len());
            registry.items.push(def);
        }
        Ok(registry)
    }

    /// All definitions in load order.
    pub fn all(&self) -> &[CollectibleDefinition] {
        &self.items
    }

    /// Look up a collectible by id. Returns None if not found.
    pub fn get(&self, id: &str) -> Option<&CollectibleDefinition> {
        self.index.get(id).map(|&idx| &self.items[idx])
    }

    pub fn exists(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn manifest() -> SceneManifest {
        SceneManifest::from_json(
            r#"{
                "collectibles": [
                    { "id": "bull_figurine", "name": "Clay Bull Figurine",
                      "description": "An ancient symbol of economic power", "x": 200, "y": 300 },
                    { "id": "lapis_bead", "name": "Lapis Lazuli Bead", "x": 400, "y": 400 }
                ]
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn loads_from_manifest_in_order() {
        let reg = CollectibleRegistry::from_manifest(&manifest()).unwrap();
        let ids: Vec<_> = reg.all().iter().map(|d| d.id.as_str()).collect();
        assert_eq!(ids, ["bull_figurine", "lapis_bead"]);

        let bull = reg.get("bull_figurine").expect("bull should exist");
        assert_eq!(bull.display_name, "Clay Bull Figurine");
        assert_eq!(bull.description, "An ancient symbol of economic power");
        assert_eq!(bull.position, Vec2::new(200.0, 300.0));
    }

    #[test]
    fn unknown_returns_none() {
        let reg = CollectibleRegistry::from_manifest(&manifest()).unwrap();
        assert!(reg.get("nonexistent").is_none());
        assert!(!reg.exists("nonexistent"));
        assert!(reg.exists("lapis_bead"));
        assert_eq!(reg.len(), 2);
    }

    #[test]
    fn duplicate_definitions_are_rejected() {
        let def = CollectibleDefinition {
            id: "a".into(),
            display_name: "A".into(),
            description: String::new(),
            position: Vec2::ZERO,
        };
        let err = CollectibleRegistry::from_definitions([def.clone(), def]).unwrap_err();
        assert!(matches!(err, ManifestError::DuplicateCollectible(id) if id == "a"));
    }
}
