//! Conversion wizard - state machine, key bindings, and text rendering
//!
//! The wizard walks through four steps: choose the input base, choose the
//! output base (the input base is never offered), enter a value, and show
//! the result. `WizardState::apply` is the only way state changes and
//! `render` is a pure function of the state, so both run without a terminal.

mod keys;
mod render;
mod state;

pub use keys::action_for_key;
pub use render::{render, CURSOR_MARKER};
pub use state::{Action, StepOutcome, WizardState, WizardStep};
