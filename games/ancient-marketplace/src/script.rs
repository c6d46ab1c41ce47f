// Player-facing text for the marketplace scene.

pub const WELCOME: &str = "Welcome to the Ancient Marketplace! Find the hidden artifacts.";

pub const DEFAULT_OBJECTIVE: &str = "Current Objective: Find the historical artifacts";

pub const PUZZLE_INTRO: &str = "Let's see if I can match these weights...";

pub const PUZZLE_MONOLOGUE: &str = "This place is ancient, yet their trade systems are surprisingly advanced. These weights… they must have been crucial for their commerce.";

pub const PUZZLE_SOLVED: &str = "Correct weight! You've solved the puzzle!";

pub const DEDUCTION: &str = "The balance must be perfect. The syndicate likely used these very systems to win over the trust of the locals—always staying one step ahead. I need to move fast before they disappear.";

pub fn collected(display_name: &str) -> String {
    format!("{display_name} collected!")
}
