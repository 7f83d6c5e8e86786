//! Session that drives an engine and paints each resulting frame.

use crate::effects::screen::{RenderError, Screen};
use crate::engine::{CalculatorEngine, DisplaySnapshot};
use crate::input::{InputToken, KeyMap};
use std::marker::PhantomData;
use stillwater::effect::Effect;
use stillwater::prelude::*;
use tracing::trace;

/// Pairs an engine with a key map and renders through `Env`.
///
/// Transitions run immediately and synchronously; painting is returned
/// as an effect for the caller to run against its environment.
pub struct Session<Env: Screen + Clone + Send + Sync + 'static> {
    engine: CalculatorEngine,
    keymap: KeyMap,
    _phantom: PhantomData<Env>,
}

impl<Env: Screen + Clone + Send + Sync + 'static> Session<Env> {
    /// Create a session over an engine and key map
    pub fn new(engine: CalculatorEngine, keymap: KeyMap) -> Self {
        Self {
            engine,
            keymap,
            _phantom: PhantomData,
        }
    }

    /// Get the engine (pure)
    pub fn engine(&self) -> &CalculatorEngine {
        &self.engine
    }

    /// Get the key map (pure)
    pub fn keymap(&self) -> &KeyMap {
        &self.keymap
    }

    /// Apply a token, then return the effect that paints the new frame.
    pub fn dispatch(
        &mut self,
        token: InputToken,
    ) -> impl Effect<Output = DisplaySnapshot, Error = RenderError, Env = Env> {
        self.engine.apply(token);
        self.refresh()
    }

    /// Resolve a key name and dispatch its token.
    /// Returns `None` for unbound keys, leaving the engine untouched.
    pub fn press_key(
        &mut self,
        key: &str,
    ) -> Option<impl Effect<Output = DisplaySnapshot, Error = RenderError, Env = Env>> {
        let token = self.keymap.resolve(key)?;
        Some(self.dispatch(token))
    }

    /// Paint the current frame without changing state.
    pub fn refresh(&self) -> impl Effect<Output = DisplaySnapshot, Error = RenderError, Env = Env> {
        render(self.engine.snapshot())
    }
}

/// Effect that paints `frame` on the environment's screen and yields it.
pub fn render<Env>(
    frame: DisplaySnapshot,
) -> impl Effect<Output = DisplaySnapshot, Error = RenderError, Env = Env>
where
    Env: Screen + Clone + Send + Sync + 'static,
{
    from_fn(move |env: &Env| {
        trace!(primary = %frame.primary, expression = %frame.expression, "painting frame");
        env.paint(&frame)?;
        Ok::<_, RenderError>(frame.clone())
    })
    .boxed()
}
