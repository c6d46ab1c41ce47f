//! JSON wire format between Rust and the JS renderer.
//! Must stay in sync with the TypeScript `protocol.ts`.
//!
//! Two documents cross the boundary after every tick:
//! ```text
//! view:   { "version": 1, "view": SceneView }
//! events: { "version": 1, "events": [GameEvent, ...] }
//! ```
//!
//! Events are tagged by `type` (`message_shown`, `message_cleared`,
//! `item_collected`, `custom`).

use serde::Serialize;

use crate::api::types::GameEvent;
use crate::systems::view::SceneView;

/// Protocol version written into every document.
pub const PROTOCOL_VERSION: u32 = 1;

#[derive(Serialize)]
struct ViewDocument<'a> {
    version: u32,
    view: &'a SceneView,
}

#[derive(Serialize)]
struct EventsDocument<'a> {
    version: u32,
    events: &'a [GameEvent],
}

/// Encode the scene view for the renderer.
pub fn encode_view(view: &SceneView) -> Result<String, serde_json::Error> {
    serde_json::to_string(&ViewDocument {
        version: PROTOCOL_VERSION,
        view,
    })
}

/// Encode this frame's events for the renderer.
pub fn encode_events(events: &[GameEvent]) -> Result<String, serde_json::Error> {
    serde_json::to_string(&EventsDocument {
        version: PROTOCOL_VERSION,
        events,
    })
}
