//! Constants, configuration and the session runtime.

pub mod config;
pub mod constants;
pub mod game_loop;

pub use config::Config;
pub use constants::*;
pub use game_loop::{SessionClock, SessionRuntime, UpdateReport};
