use clue_engine::*;
use log::{debug, info, warn};

use crate::puzzle::{AdjustOutcome, MiniGameState, WeightPuzzle};
use crate::script;

const MANIFEST_JSON: &str = include_str!("../assets/marketplace.json");

// Game event kinds (Rust → JS)
pub const EVENT_PUZZLE_STARTED: u32 = 1;
pub const EVENT_WEIGHT_CHANGED: u32 = 2;
pub const EVENT_PUZZLE_SOLVED: u32 = 3;

// Custom event kinds (JS → Rust)
pub const CUSTOM_WEIGHT_DOWN: u32 = 1;
pub const CUSTOM_WEIGHT_UP: u32 = 2;
pub const CUSTOM_START_PUZZLE: u32 = 3;

// View keys shared with the renderer
pub const LABEL_OBJECTIVE: &str = "objective";
pub const LABEL_WEIGHT: &str = "weight";
pub const WIDGET_SCALE: &str = "merchant_scale";

/// The marketplace scene: collectibles, the detective's journal and the
/// merchant's scale.
pub struct MarketplaceScene {
    registry: CollectibleRegistry,
    inventory: Inventory,
    puzzle: WeightPuzzle,
    /// Collecting this item activates the puzzle.
    trigger: String,
    objective: String,
    message_duration_ms: u32,
    hovered: Option<String>,
}

impl MarketplaceScene {
    /// The scene as shipped, from the embedded manifest.
    pub fn new() -> Self {
        let manifest = SceneManifest::from_json(MANIFEST_JSON)
            .expect("embedded marketplace manifest is valid");
        Self::from_manifest(&manifest).expect("embedded marketplace manifest is valid")
    }

    /// Build a fresh session from a manifest. The manifest must declare a puzzle.
    pub fn from_manifest(manifest: &SceneManifest) -> Result<Self, ManifestError> {
        manifest.validate()?;
        let puzzle = manifest.puzzle.as_ref().ok_or_else(|| {
            ManifestError::InvalidPuzzle("the marketplace needs a puzzle section".into())
        })?;

        Ok(Self {
            registry: CollectibleRegistry::from_manifest(manifest)?,
            inventory: Inventory::new(),
            puzzle: WeightPuzzle::new(puzzle.target, puzzle.step),
            trigger: puzzle.trigger.clone(),
            objective: manifest
                .objective
                .clone()
                .unwrap_or_else(|| script::DEFAULT_OBJECTIVE.to_string()),
            message_duration_ms: manifest
                .message_duration_ms
                .unwrap_or(DEFAULT_MESSAGE_DURATION_MS),
            hovered: None,
        })
    }

    // ---- Commands ----

    /// Pick up a collectible. New items are announced and journaled; the
    /// trigger item also starts the puzzle. Repeats are silent no-ops.
    pub fn collect(
        &mut self,
        ctx: &mut EngineContext,
        id: &str,
    ) -> Result<CollectResult, UnknownItemError> {
        let result = self.inventory.collect(&self.registry, id)?;

        if let CollectResult::Collected { display_name } = &result {
            debug!("collected {id} ({} in journal)", self.inventory.len());
            if self.hovered.as_deref() == Some(id) {
                self.hovered = None;
            }
            ctx.emit_event(GameEvent::ItemCollected {
                id: id.to_string(),
                name: display_name.clone(),
                row: self.inventory.len(),
            });
            ctx.show_message(script::collected(display_name));

            if id == self.trigger {
                self.start_mini_game(ctx);
            }
        }
        Ok(result)
    }

    /// Start the scale puzzle. Only possible once the trigger item is in the
    /// journal, and only once per session.
    pub fn start_mini_game(&mut self, ctx: &mut EngineContext) -> bool {
        if !self.inventory.is_collected(&self.trigger) || !self.puzzle.start() {
            return false;
        }
        debug!("scale puzzle started, target {}", self.puzzle.target());

        ctx.show_message(script::PUZZLE_INTRO);
        ctx.show_message(script::PUZZLE_MONOLOGUE);
        ctx.emit_event(GameEvent::Custom {
            kind: EVENT_PUZZLE_STARTED,
            a: self.puzzle.weight() as f32,
            b: self.puzzle.target() as f32,
            c: self.puzzle.step() as f32,
        });
        true
    }

    /// Nudge the scale by `+step` or `-step`. Ignored unless the puzzle is
    /// active; other deltas are ignored too.
    pub fn adjust_weight(&mut self, ctx: &mut EngineContext, delta: i32) -> AdjustOutcome {
        let outcome = self.puzzle.adjust(delta);
        match outcome {
            AdjustOutcome::Ignored => {}
            AdjustOutcome::Adjusted { weight } => {
                ctx.emit_event(GameEvent::custom(EVENT_WEIGHT_CHANGED, weight as f32));
            }
            AdjustOutcome::Solved { weight } => {
                info!("scale puzzle solved at {weight}");
                ctx.emit_event(GameEvent::custom(EVENT_WEIGHT_CHANGED, weight as f32));
                ctx.show_message(script::PUZZLE_SOLVED);
                ctx.show_message(script::DEDUCTION);
                ctx.emit_event(GameEvent::custom(EVENT_PUZZLE_SOLVED, weight as f32));
            }
        }
        outcome
    }

    /// The cursor entered a sprite. Only collectibles still in the world hover.
    pub fn pointer_over(&mut self, id: &str) -> bool {
        if !self.registry.exists(id) || self.inventory.is_collected(id) {
            return false;
        }
        self.hovered = Some(id.to_string());
        true
    }

    /// The cursor left a sprite.
    pub fn pointer_out(&mut self, id: &str) {
        if self.hovered.as_deref() == Some(id) {
            self.hovered = None;
        }
    }

    // ---- Queries ----

    pub fn is_collected(&self, id: &str) -> bool {
        self.inventory.is_collected(id)
    }

    pub fn inventory_size(&self) -> usize {
        self.inventory.len()
    }

    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    pub fn mini_game_state(&self) -> MiniGameState {
        self.puzzle.state()
    }

    pub fn registry(&self) -> &CollectibleRegistry {
        &self.registry
    }

    pub fn hovered(&self) -> Option<&str> {
        self.hovered.as_deref()
    }
}

impl Default for MarketplaceScene {
    fn default() -> Self {
        Self::new()
    }
}

impl Game for MarketplaceScene {
    fn config(&self) -> GameConfig {
        GameConfig {
            message_duration_ms: self.message_duration_ms,
            ..GameConfig::default()
        }
    }

    fn init(&mut self, ctx: &mut EngineContext) {
        info!(
            "marketplace session started with {} collectibles",
            self.registry.len()
        );
        ctx.show_message(script::WELCOME);
    }

    fn update(&mut self, ctx: &mut EngineContext, input: &InputQueue) {
        for event in input.iter() {
            match event {
                InputEvent::PointerOver { target } => {
                    self.pointer_over(target);
                }
                InputEvent::PointerOut { target } => self.pointer_out(target),
                InputEvent::PointerDown { target } => {
                    if let Err(err) = self.collect(ctx, target) {
                        warn!("ignoring click: {err}");
                    }
                }
                InputEvent::Custom { kind, .. } => match *kind {
                    CUSTOM_WEIGHT_DOWN => {
                        self.adjust_weight(ctx, -self.puzzle.step());
                    }
                    CUSTOM_WEIGHT_UP => {
                        self.adjust_weight(ctx, self.puzzle.step());
                    }
                    CUSTOM_START_PUZZLE => {
                        self.start_mini_game(ctx);
                    }
                    other => debug!("unhandled custom event kind {other}"),
                },
            }
        }
    }

    fn render(&self, ctx: &mut RenderContext) {
        let hovered = self.hovered.as_deref();
        build_collectible_sprites(&self.registry, &self.inventory, hovered, ctx.view);
        build_journal(&self.registry, &self.inventory, ctx.view);
        build_tooltip(&self.registry, &self.inventory, hovered, ctx.view);

        ctx.view.labels.push(LabelView::new(LABEL_OBJECTIVE, self.objective.as_str()));
        ctx.view.labels.push(LabelView::new(LABEL_WEIGHT, self.puzzle.weight().to_string()));
        ctx.view.widgets.push(WidgetView::new(WIDGET_SCALE, self.puzzle.is_active()));
    }

    fn load_manifest(
        &mut self,
        ctx: &mut EngineContext,
        manifest: SceneManifest,
    ) -> Result<(), ManifestError> {
        *self = Self::from_manifest(&manifest)?;
        ctx.set_message_duration(self.message_duration_ms);
        ctx.clear_message();
        self.init(ctx);
        Ok(())
    }
}
