//! A minimal 2D chessboard viewer.
//!
//! Draws a board texture and the 32 piece sprites of the starting position as
//! textured quads, and reports which square or piece a left click lands on.
//! Nothing ever moves; there is no rule engine behind the board.

pub mod app;
pub mod assets;
pub mod board;
pub mod config;
pub mod error;
pub mod input;
pub mod piece;
pub mod piece_manager;
pub mod renderer;
pub mod view;

pub use config::{Config, Variant};
pub use error::{AssetError, ConfigError, LayoutError, RenderError, ShaderError};
pub use piece::{Kind, Piece, Square, Team};
pub use piece_manager::PieceManager;
