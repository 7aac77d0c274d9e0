//! UI module - rendering and input handling
//!
//! - `render`: Main render function and layout
//! - `input`: Keyboard input handling
//! - `styles`: Color scheme and styles
//! - `pages`: Individual page rendering

pub mod input;
pub mod pages;
pub mod render;
pub mod styles;
