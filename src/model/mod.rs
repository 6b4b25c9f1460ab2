mod field;
mod geometry;
mod playback;
mod session;

pub use field::GameField;
pub use geometry::GridGeometry;
pub use playback::{PlayState, Playback};
pub use session::{DragState, Session};
