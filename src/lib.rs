#![warn(clippy::all)]

mod gui;
mod model;
mod utils;

pub use gui::{App, Config};
pub use model::{DragState, GameField, GridGeometry, PlayState, Playback, Session};
