use std::collections::HashSet;

use crate::assets::registry::CollectibleRegistry;
use crate::error::UnknownItemError;

/// Result of a `collect` call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CollectResult {
    /// The item was new. The caller should announce `"{display_name} collected!"`.
    Collected { display_name: String },
    /// Already in the inventory; nothing changed.
    AlreadyCollected,
}

impl CollectResult {
    pub fn added(&self) -> bool {
        matches!(self, CollectResult::Collected { .. })
    }

    pub fn display_name(&self) -> Option<&str> {
        match self {
            CollectResult::Collected { display_name } => Some(display_name),
            CollectResult::AlreadyCollected => None,
        }
    }
}

/// Items the player has picked up this session.
/// Membership is a set; `collection_order` keeps the journal row order.
#[derive(Debug, Clone, Default)]
pub struct Inventory {
    collected: HashSet<String>,
    order: Vec<String>,
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `id` to the inventory. Idempotent: a second call returns
    /// `AlreadyCollected`. Unknown ids leave the inventory untouched.
    pub fn collect(
        &mut self,
        registry: &CollectibleRegistry,
        id: &str,
    ) -> Result<CollectResult, UnknownItemError> {
        let def = registry
            .get(id)
            .ok_or_else(|| UnknownItemError(id.to_string()))?;

        if !self.collected.insert(def.id.clone()) {
            return Ok(CollectResult::AlreadyCollected);
        }
        self.order.push(def.id.clone());

        Ok(CollectResult::Collected {
            display_name: def.display_name.clone(),
        })
    }

    pub fn is_collected(&self, id: &str) -> bool {
        self.collected.contains(id)
    }

    /// Ids in the order they were collected.
    pub fn collection_order(&self) -> &[String] {
        &self.order
    }

    /// Number of distinct items collected.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}
