//! Effectful display shell using Stillwater 0.11.0.
//!
//! This module is the "imperative shell" around the pure engine. A
//! [`Session`] applies input tokens to its engine and hands back an
//! effect that paints the resulting [`DisplaySnapshot`] on whatever
//! [`Screen`] the environment provides.
//!
//! [`DisplaySnapshot`]: crate::engine::DisplaySnapshot

mod screen;
mod session;

pub use screen::{RenderError, Screen};
pub use session::{render, Session};
