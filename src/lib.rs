// Library interface for lucky-vault
// This allows integration tests to access internal modules

pub mod cli;
pub mod config;
pub mod feedback;
pub mod game_state;
pub mod logging;
pub mod score_store;
pub mod session_log;
pub mod wordbank;

// Re-export commonly used items for easier testing
pub use config::GamePaths;
pub use feedback::{Outcome, Turn, count_position_matches, matches_secret};
pub use game_state::{GameInterface, GuessSession, SessionOutcome, play_session, run_game};
pub use score_store::ScoreStore;
pub use session_log::SessionLog;
pub use wordbank::{load_words_from_file, load_words_from_str};
