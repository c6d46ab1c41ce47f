use clue_engine::{
    encode_events, encode_view, EngineContext, Game, GameConfig, InputEvent, InputQueue,
    RenderContext, SceneManifest, SceneView,
};
use log::{debug, error};

/// Generic game runner that wires up the engine loop.
///
/// Each concrete game creates a `thread_local!` GameRunner and exports free
/// functions via `#[wasm_bindgen]` (see `export_game!`), because wasm-bindgen
/// cannot export generic structs directly.
pub struct GameRunner<G: Game> {
    game: G,
    ctx: EngineContext,
    input: InputQueue,
    view: SceneView,
    config: GameConfig,
    initialized: bool,
}

impl<G: Game> GameRunner<G> {
    pub fn new(game: G) -> Self {
        let config = game.config();
        Self {
            game,
            ctx: EngineContext::with_config(&config),
            input: InputQueue::new(),
            view: SceneView::new(),
            config,
            initialized: false,
        }
    }

    /// Initialize the game. Call once after construction.
    /// Events emitted here stay readable until the first tick.
    pub fn init(&mut self) {
        self.game.init(&mut self.ctx);
        self.rebuild_view();
        self.initialized = true;
    }

    /// Push an input event into the queue.
    pub fn push_input(&mut self, event: InputEvent) {
        self.input.push(event);
    }

    /// Run one frame tick: advance timers, update game, rebuild the view.
    /// `dt` is the frame time in seconds.
    pub fn tick(&mut self, dt: f32) {
        if !self.initialized {
            return;
        }

        // Clear per-frame transient data
        self.ctx.clear_frame_data();

        self.ctx.advance_time(dt as f64 * 1000.0);
        self.game.update(&mut self.ctx, &self.input);

        // Drain input after update
        self.input.drain();

        self.rebuild_view();
    }

    /// Replace the scene content from a JSON manifest.
    /// Returns false (and keeps the current scene) if it is rejected.
    pub fn load_manifest(&mut self, json: &str) -> bool {
        let result = SceneManifest::from_json(json)
            .and_then(|manifest| self.game.load_manifest(&mut self.ctx, manifest));
        match result {
            Ok(()) => {
                debug!("scene manifest loaded");
                self.rebuild_view();
                true
            }
            Err(err) => {
                error!("rejected scene manifest: {err}");
                false
            }
        }
    }

    fn rebuild_view(&mut self) {
        self.view.clear();
        self.view.set_message(self.ctx.message());
        let mut render_ctx = RenderContext {
            view: &mut self.view,
        };
        self.game.render(&mut render_ctx);
    }

    pub fn view(&self) -> &SceneView {
        &self.view
    }

    pub fn context(&self) -> &EngineContext {
        &self.ctx
    }

    pub fn game(&self) -> &G {
        &self.game
    }

    // ---- JSON accessors read by JS via wasm_bindgen exports ----

    pub fn view_json(&self) -> String {
        encode_view(&self.view).unwrap_or_else(|err| {
            error!("failed to encode scene view: {err}");
            String::from("null")
        })
    }

    pub fn events_json(&self) -> String {
        encode_events(&self.ctx.events).unwrap_or_else(|err| {
            error!("failed to encode events: {err}");
            String::from("null")
        })
    }

    pub fn world_width(&self) -> f32 {
        self.config.world_width
    }

    pub fn world_height(&self) -> f32 {
        self.config.world_height
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clue_engine::{GameEvent, LabelView};

    /// Counts clicks and echoes them as messages.
    struct ClickCounter {
        clicks: u32,
    }

    impl Game for ClickCounter {
        fn init(&mut self, ctx: &mut EngineContext) {
            ctx.show_message("ready");
        }

        fn update(&mut self, ctx: &mut EngineContext, input: &InputQueue) {
            for event in input.iter() {
                if let InputEvent::PointerDown { target } = event {
                    self.clicks += 1;
                    ctx.show_message(format!("clicked {target}"));
                }
            }
        }

        fn render(&self, ctx: &mut RenderContext) {
            ctx.view.labels.push(LabelView::new("clicks", self.clicks.to_string()));
        }
    }

    fn runner() -> GameRunner<ClickCounter> {
        let mut runner = GameRunner::new(ClickCounter { clicks: 0 });
        runner.init();
        runner
    }

    #[test]
    fn init_events_survive_until_first_tick() {
        let mut runner = runner();
        assert_eq!(runner.context().events.len(), 1);
        assert_eq!(runner.view().message.as_ref().map(|m| m.text.as_str()), Some("ready"));

        runner.tick(0.016);
        assert!(runner.context().events.is_empty());
    }

    #[test]
    fn tick_applies_input_then_drains() {
        let mut runner = runner();
        runner.push_input(InputEvent::PointerDown { target: "door".into() });
        runner.tick(0.016);
        assert_eq!(runner.game().clicks, 1);
        assert_eq!(runner.view().labels[0].text, "1");
        assert_eq!(
            runner.view().message.as_ref().map(|m| m.text.as_str()),
            Some("clicked door")
        );

        runner.tick(0.016);
        assert_eq!(runner.game().clicks, 1);
    }

    #[test]
    fn messages_expire_with_frame_time() {
        let mut runner = runner();
        runner.tick(2.0);
        assert!(runner.view().message.is_some());
        runner.tick(1.0);
        assert!(runner.view().message.is_none());
        assert!(matches!(
            runner.context().events.as_slice(),
            [GameEvent::MessageCleared { .. }]
        ));
    }

    #[test]
    fn tick_before_init_is_ignored() {
        let mut runner = GameRunner::new(ClickCounter { clicks: 0 });
        runner.push_input(InputEvent::PointerDown { target: "door".into() });
        runner.tick(0.016);
        assert_eq!(runner.game().clicks, 0);
    }

    #[test]
    fn unsupported_manifest_is_rejected() {
        let mut runner = runner();
        assert!(!runner.load_manifest(r#"{ "collectibles": [] }"#));
        assert!(!runner.load_manifest("not json"));
    }

    #[test]
    fn json_accessors_carry_version() {
        let runner = runner();
        assert!(runner.view_json().starts_with(r#"{"version":1"#));
        assert!(runner.events_json().contains(r#""type":"message_shown""#));
    }
}
