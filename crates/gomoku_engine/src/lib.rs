//! Gomoku engine - pure five-in-a-row game logic.
//!
//! # Architecture
//!
//! - **Board**: square grid with bounds-checked access
//! - **Game**: turn state machine that freezes on the first five-in-a-row
//! - **Rules**: win detection through the last move played
//! - **Agent**: one-ply heuristic opponent playing White
//!
//! Everything here is synchronous and owns its state; callers that share a
//! game across threads provide their own lock.
//!
//! # Example
//!
//! ```
//! use gomoku_engine::{Game, Point, Stone, agent};
//!
//! let mut game = Game::new(15)?;
//! game.play(Point::new(7, 7))?;
//! assert_eq!(game.turn(), Stone::White);
//!
//! let reply = agent::play(&mut game)?;
//! assert_eq!(reply, Some(Point::new(6, 6)));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod agent;
mod board;
mod error;
mod game;
pub mod rules;
mod types;

pub use agent::Difficulty;
pub use board::{Board, MAX_SIZE, STANDARD_SIZE};
pub use error::{BoardError, MoveError};
pub use game::Game;
pub use rules::{WinningLine, find_winning_line};
pub use types::{GameStatus, Point, Stone};
