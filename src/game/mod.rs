//! Game sessions.
//!
//! `MemoryGame` ties a `GameConfig` to the round currently on the board
//! and handles restarts. The rules themselves live on `Round`.

mod session;

pub use session::MemoryGame;
