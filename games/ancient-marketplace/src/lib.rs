pub mod puzzle;
pub mod scene;
mod script;

pub use puzzle::{AdjustOutcome, MiniGameState, PuzzlePhase, WeightPuzzle};
pub use scene::MarketplaceScene;

clue_web::export_game!(MarketplaceScene, "ancient-marketplace");
