//! Input adapter boundary.
//!
//! Physical keys and buttons are translated into [`InputToken`]s here;
//! the engine only ever sees tokens.

mod keymap;
mod token;

pub use keymap::KeyMap;
pub use token::InputToken;
