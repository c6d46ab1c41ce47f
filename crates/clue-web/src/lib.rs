pub mod runner;

pub use runner::GameRunner;

// Paths used by `export_game!` expansions, so calling crates do not need
// these as direct dependencies.
#[doc(hidden)]
pub use clue_engine;
#[doc(hidden)]
pub use console_error_panic_hook;
#[doc(hidden)]
pub use console_log;
#[doc(hidden)]
pub use log;
#[doc(hidden)]
pub use wasm_bindgen;

/// Generate all `#[wasm_bindgen]` exports for a game.
///
/// Generates:
/// - `thread_local!` storage for the GameRunner
/// - `with_runner()` helper function
/// - All wasm-bindgen exports (game_init, game_tick, input handlers, JSON accessors)
///
/// # Usage
///
/// ```ignore
/// mod game;
/// use game::MyGame;
///
/// clue_web::export_game!(MyGame, "my-game");
/// ```
///
/// The calling crate must also depend on `wasm-bindgen` directly: the code
/// generated by `#[wasm_bindgen]` names that crate by its own path. Logging
/// and the panic hook come through `clue_web`.
///
/// # Arguments
///
/// - `$game_type`: The game struct type that implements `clue_engine::Game`
///   and has a `new()` constructor
/// - `$game_name`: A string literal used in the initialization log message
#[macro_export]
macro_rules! export_game {
    ($game_type:ty, $game_name:literal) => {
        use std::cell::RefCell;

        thread_local! {
            static RUNNER: RefCell<Option<$crate::GameRunner<$game_type>>> = RefCell::new(None);
        }

        fn with_runner<R>(f: impl FnOnce(&mut $crate::GameRunner<$game_type>) -> R) -> R {
            RUNNER.with(|cell| {
                let mut borrow = cell.borrow_mut();
                let runner = borrow.as_mut().expect("Game not initialized. Call game_init() first.");
                f(runner)
            })
        }

        #[$crate::wasm_bindgen::prelude::wasm_bindgen]
        pub fn game_init() {
            $crate::console_error_panic_hook::set_once();
            let _ = $crate::console_log::init_with_level($crate::log::Level::Info);

            let game = <$game_type>::new();
            let runner = $crate::GameRunner::new(game);

            RUNNER.with(|cell| {
                *cell.borrow_mut() = Some(runner);
            });

            with_runner(|r| r.init());
            $crate::log::info!("{}: initialized", $game_name);
        }

        #[$crate::wasm_bindgen::prelude::wasm_bindgen]
        pub fn game_tick(dt: f32) {
            with_runner(|r| r.tick(dt));
        }

        #[$crate::wasm_bindgen::prelude::wasm_bindgen]
        pub fn game_pointer_over(target: &str) {
            with_runner(|r| r.push_input($crate::clue_engine::InputEvent::PointerOver { target: target.to_string() }));
        }

        #[$crate::wasm_bindgen::prelude::wasm_bindgen]
        pub fn game_pointer_out(target: &str) {
            with_runner(|r| r.push_input($crate::clue_engine::InputEvent::PointerOut { target: target.to_string() }));
        }

        #[$crate::wasm_bindgen::prelude::wasm_bindgen]
        pub fn game_pointer_down(target: &str) {
            with_runner(|r| r.push_input($crate::clue_engine::InputEvent::PointerDown { target: target.to_string() }));
        }

        #[$crate::wasm_bindgen::prelude::wasm_bindgen]
        pub fn game_custom_event(kind: u32, a: f32, b: f32, c: f32) {
            with_runner(|r| r.push_input($crate::clue_engine::InputEvent::Custom { kind, a, b, c }));
        }

        #[$crate::wasm_bindgen::prelude::wasm_bindgen]
        pub fn game_load_manifest(json: &str) -> bool {
            with_runner(|r| r.load_manifest(json))
        }

        // ---- Data accessors ----

        #[$crate::wasm_bindgen::prelude::wasm_bindgen]
        pub fn get_view_json() -> String {
            with_runner(|r| r.view_json())
        }

        #[$crate::wasm_bindgen::prelude::wasm_bindgen]
        pub fn get_events_json() -> String {
            with_runner(|r| r.events_json())
        }

        #[$crate::wasm_bindgen::prelude::wasm_bindgen]
        pub fn get_world_width() -> f32 {
            with_runner(|r| r.world_width())
        }

        #[$crate::wasm_bindgen::prelude::wasm_bindgen]
        pub fn get_world_height() -> f32 {
            with_runner(|r| r.world_height())
        }

        #[$crate::wasm_bindgen::prelude::wasm_bindgen]
        pub fn get_protocol_version() -> u32 {
            $crate::clue_engine::PROTOCOL_VERSION
        }
    };
}
