//! Terminal Keypad
//!
//! This demo drives a calculator session from the keyboard layout used in
//! the browser, painting each frame to the terminal.
//!
//! Key concepts:
//! - Key names resolve to logical tokens through a `KeyMap`
//! - The engine transitions synchronously
//! - Painting is an effect run against a `Screen` environment
//!
//! Run with: echo "9 ^ 2 Enter" | cargo run --example keypad
//! Set RUST_LOG=abacus=debug to trace each transition.

use abacus::builder::{EngineBuilder, KeyMapBuilder};
use abacus::effects::{RenderError, Screen, Session};
use abacus::engine::DisplaySnapshot;
use abacus::input::InputToken;
use std::io::{self, BufRead, Write};
use stillwater::effect::Effect;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Clone)]
struct Terminal;

impl Screen for Terminal {
    fn paint(&self, frame: &DisplaySnapshot) -> Result<(), RenderError> {
        let marker = frame.active_button().unwrap_or("-");
        let mut out = io::stdout().lock();
        writeln!(
            out,
            "[{marker:>8}] {:>24} | {:<24} | {}",
            frame.expression, frame.primary, frame.history
        )
        .map_err(|e| RenderError::Write(e.to_string()))
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let engine = EngineBuilder::new().build()?;
    let keymap = KeyMapBuilder::new()
        .defaults()
        .bind("h", InputToken::RecallHistory)?
        .build()?;
    let mut session: Session<Terminal> = Session::new(engine, keymap);

    session.refresh().run(&Terminal).await?;

    for line in io::stdin().lock().lines() {
        for key in line?.split_whitespace() {
            match session.press_key(key) {
                Some(effect) => {
                    effect.run(&Terminal).await?;
                }
                None => info!(key, "unbound key ignored"),
            }
        }
    }

    Ok(())
}
