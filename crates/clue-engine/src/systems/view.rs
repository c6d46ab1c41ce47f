use serde::Serialize;

use crate::assets::registry::CollectibleRegistry;
use crate::core::inventory::Inventory;
use crate::core::notify::Notification;

/// Scale applied to the sprite under the cursor.
pub const HOVER_SCALE: f32 = 1.2;
/// Tooltips float this far above the hovered sprite.
pub const TOOLTIP_OFFSET_Y: f32 = 40.0;
/// Journal rows start here (panel-local y) and advance by the spacing per row.
pub const JOURNAL_ROW_ORIGIN: f32 = 40.0;
pub const JOURNAL_ROW_SPACING: f32 = 20.0;

/// Everything the renderer needs to draw one frame, rebuilt after every tick.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SceneView {
    /// Collectible sprites still in the world.
    pub sprites: Vec<SpriteView>,
    /// Journal rows in collection order.
    pub journal: Vec<JournalRow>,
    pub message: Option<MessageView>,
    pub tooltip: Option<TooltipView>,
    /// Game-defined text labels (objective, counters, ...).
    pub labels: Vec<LabelView>,
    /// Game-defined widgets whose visibility the game controls.
    pub widgets: Vec<WidgetView>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpriteView {
    pub id: String,
    pub x: f32,
    pub y: f32,
    pub scale: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct JournalRow {
    pub id: String,
    pub name: String,
    pub y: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MessageView {
    pub token: u64,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TooltipView {
    pub text: String,
    pub x: f32,
    pub y: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LabelView {
    pub key: String,
    pub text: String,
}

impl LabelView {
    pub fn new(key: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            text: text.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WidgetView {
    pub key: String,
    pub visible: bool,
}

impl WidgetView {
    pub fn new(key: impl Into<String>, visible: bool) -> Self {
        Self {
            key: key.into(),
            visible,
        }
    }
}

impl SceneView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.sprites.clear();
        self.journal.clear();
        self.message = None;
        self.tooltip = None;
        self.labels.clear();
        self.widgets.clear();
    }

    /// Mirror the active notification.
    pub fn set_message(&mut self, message: Option<&Notification>) {
        self.message = message.map(|n| MessageView {
            token: n.token.0,
            text: n.text.clone(),
        });
    }
}

/// Row position for the `row`-th collected item (1-based).
pub fn journal_row_y(row: usize) -> f32 {
    JOURNAL_ROW_ORIGIN + row as f32 * JOURNAL_ROW_SPACING
}

/// Push a sprite for every collectible not yet picked up, in load order.
/// The hovered one is drawn at `HOVER_SCALE`.
pub fn build_collectible_sprites(
    registry: &CollectibleRegistry,
    inventory: &Inventory,
    hovered: Option<&str>,
    view: &mut SceneView,
) {
    for def in registry.all() {
        if inventory.is_collected(&def.id) {
            continue;
        }
        let scale = if hovered == Some(def.id.as_str()) {
            HOVER_SCALE
        } else {
            1.0
        };
        view.sprites.push(SpriteView {
            id: def.id.clone(),
            x: def.position.x,
            y: def.position.y,
            scale,
        });
    }
}

/// Push one journal row per collected item.
pub fn build_journal(registry: &CollectibleRegistry, inventory: &Inventory, view: &mut SceneView) {
    for (idx, id) in inventory.collection_order().iter().enumerate() {
        let Some(def) = registry.get(id) else {
            continue;
        };
        view.journal.push(JournalRow {
            id: def.id.clone(),
            name: def.display_name.clone(),
            y: journal_row_y(idx + 1),
        });
    }
}

/// Set the tooltip for the hovered collectible, if it is still in the world.
pub fn build_tooltip(
    registry: &CollectibleRegistry,
    inventory: &Inventory,
    hovered: Option<&str>,
    view: &mut SceneView,
) {
    view.tooltip = hovered
        .filter(|id| !inventory.is_collected(id))
        .and_then(|id| registry.get(id))
        .map(|def| TooltipView {
            text: def.display_name.clone(),
            x: def.position.x,
            y: def.position.y - TOOLTIP_OFFSET_Y,
        });
}
