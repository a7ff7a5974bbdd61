// Library surface for the binary and for headless/integration tests.
pub mod app_dirs;
pub mod assets;
pub mod config;
pub mod corpus;
pub mod game;
pub mod input;
pub mod language;
pub mod scoring;
pub mod session;
pub mod ui;
pub mod util;

pub use game::{Game, GameError, Round};
pub use session::{GameSettings, RoundOutcome, SessionSummary};
