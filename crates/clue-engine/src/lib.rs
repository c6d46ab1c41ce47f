pub mod api;
pub mod assets;
pub mod bridge;
pub mod core;
pub mod error;
pub mod input;
pub mod systems;

// Re-export key types at crate root for convenience
pub use crate::api::game::{Game, GameConfig, EngineContext, RenderContext};
pub use crate::api::types::{GameEvent, MessageToken};
pub use crate::assets::manifest::{SceneManifest, CollectibleDescriptor, PuzzleDescriptor};
pub use crate::assets::registry::{CollectibleDefinition, CollectibleRegistry};
pub use crate::bridge::protocol::{encode_events, encode_view, PROTOCOL_VERSION};
pub use crate::core::inventory::{CollectResult, Inventory};
pub use crate::core::notify::{Notification, NotificationEmitter, DEFAULT_MESSAGE_DURATION_MS};
pub use crate::core::timer::{TimerId, TimerQueue};
pub use crate::error::{ManifestError, UnknownItemError};
pub use crate::input::queue::{InputEvent, InputQueue};
pub use crate::systems::view::{
    SceneView, SpriteView, JournalRow, MessageView, TooltipView, LabelView, WidgetView,
    build_collectible_sprites, build_journal, build_tooltip, journal_row_y,
};
