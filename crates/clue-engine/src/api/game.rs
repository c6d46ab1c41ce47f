use log::warn;

use crate::api::types::{GameEvent, MessageToken};
use crate::assets::manifest::SceneManifest;
use crate::core::notify::{Notification, NotificationEmitter, DEFAULT_MESSAGE_DURATION_MS};
use crate::error::ManifestError;
use crate::input::queue::InputQueue;
use crate::systems::view::SceneView;

/// Configuration for the engine, provided by the game.
#[derive(Debug, Clone)]
pub struct GameConfig {
    /// World width in game units.
    pub world_width: f32,
    /// World height in game units.
    pub world_height: f32,
    /// How long a notification stays on screen (default: 3000 ms).
    pub message_duration_ms: u32,
    /// Maximum number of game events per frame (default: 32). Message events
    /// (`MessageShown`/`MessageCleared`) are never dropped; the cap only
    /// applies to the rest.
    pub max_events: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            world_width: 800.0,
            world_height: 600.0,
            message_duration_ms: DEFAULT_MESSAGE_DURATION_MS,
            max_events: 32,
        }
    }
}

/// The core contract every game must fulfill.
pub trait Game {
    /// Return engine configuration. Called once before init.
    fn config(&self) -> GameConfig {
        GameConfig::default()
    }

    /// Setup initial state and greet the player.
    fn init(&mut self, ctx: &mut EngineContext);

    /// Handle this frame's input. Called once per tick after timers advance.
    fn update(&mut self, ctx: &mut EngineContext, input: &InputQueue);

    /// Read-only pass that fills the scene view for the renderer.
    fn render(&self, _ctx: &mut RenderContext) {}

    /// Replace the scene content from a manifest supplied by the host.
    fn load_manifest(
        &mut self,
        _ctx: &mut EngineContext,
        _manifest: SceneManifest,
    ) -> Result<(), ManifestError> {
        Err(ManifestError::Unsupported)
    }
}

/// Mutable access to engine state, passed to Game::init and Game::update.
pub struct EngineContext {
    pub events: Vec<GameEvent>,
    notifications: NotificationEmitter,
    max_events: usize,
}

impl EngineContext {
    pub fn new() -> Self {
        Self::with_config(&GameConfig::default())
    }

    pub fn with_config(config: &GameConfig) -> Self {
        Self {
            events: Vec::with_capacity(config.max_events),
            notifications: NotificationEmitter::new(config.message_duration_ms),
            max_events: config.max_events,
        }
    }

    /// Emit a game event to be forwarded to JS. Events past the per-frame
    /// capacity are dropped, except message events: the renderer must see
    /// every message change to stay in sync with the message slot.
    pub fn emit_event(&mut self, event: GameEvent) {
        let is_message = matches!(
            event,
            GameEvent::MessageShown { .. } | GameEvent::MessageCleared { .. }
        );
        if !is_message && self.events.len() >= self.max_events {
            warn!("event capacity ({}) reached, dropping {:?}", self.max_events, event);
            return;
        }
        self.events.push(event);
    }

    /// Show a notification, replacing the current one.
    pub fn show_message(&mut self, text: impl Into<String>) -> MessageToken {
        let shown = self.notifications.show(text);
        let token = shown.token;
        let event = GameEvent::MessageShown {
            token,
            text: shown.text.clone(),
            duration_ms: shown.duration_ms,
        };
        self.emit_event(event);
        token
    }

    /// Remove the current notification, if any.
    pub fn clear_message(&mut self) {
        if let Some(cleared) = self.notifications.clear() {
            self.emit_event(GameEvent::MessageCleared { token: cleared.token });
        }
    }

    /// The notification currently on screen.
    pub fn message(&self) -> Option<&Notification> {
        self.notifications.current()
    }

    pub fn set_message_duration(&mut self, duration_ms: u32) {
        self.notifications.set_duration_ms(duration_ms);
    }

    /// Advance engine time, expiring notifications whose time is up.
    pub fn advance_time(&mut self, dt_ms: f64) {
        if let Some(expired) = self.notifications.advance(dt_ms) {
            self.emit_event(GameEvent::MessageCleared { token: expired.token });
        }
    }

    /// Clear per-frame transient data (events).
    pub fn clear_frame_data(&mut self) {
        self.events.clear();
    }
}

impl Default for EngineContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Render context handed to Game::render.
pub struct RenderContext<'a> {
    pub view: &'a mut SceneView,
}
