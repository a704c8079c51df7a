//! Wizard state machine: steps, user actions, and the transition function

use std::fmt;

use crate::convert::{convert, Base, ConversionError};

// ============================================================================
// Step Definitions
// ============================================================================

/// One of the four sequential wizard screens
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardStep {
    ChooseInputBase,
    ChooseOutputBase,
    EnterValue,
    ShowResult,
}

impl WizardStep {
    /// Total number of steps in the wizard
    pub const COUNT: usize = 4;

    /// Zero-based position of this step in the flow
    pub fn index(self) -> usize {
        match self {
            WizardStep::ChooseInputBase => 0,
            WizardStep::ChooseOutputBase => 1,
            WizardStep::EnterValue => 2,
            WizardStep::ShowResult => 3,
        }
    }

    /// Get the display title for this step
    pub fn title(self) -> &'static str {
        match self {
            WizardStep::ChooseInputBase => "Input Base",
            WizardStep::ChooseOutputBase => "Output Base",
            WizardStep::EnterValue => "Enter Value",
            WizardStep::ShowResult => "Result",
        }
    }

    pub fn is_initial(self) -> bool {
        self == WizardStep::ChooseInputBase
    }
}

impl fmt::Display for WizardStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.title())
    }
}

// ============================================================================
// Action Types
// ============================================================================

/// Discrete user action delivered by the event loop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    MoveCursorUp,
    MoveCursorDown,
    Confirm,
    AppendChar(char),
    Backspace,
    Reset,
    Quit,
}

/// What the event loop should do after an action is applied
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepOutcome {
    /// Keep running with the new state
    Continue(WizardState),
    /// Stop the event loop
    Quit,
}

// ============================================================================
// Wizard State Machine
// ============================================================================

/// Complete wizard state, owned by the event loop and replaced on every action
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WizardState {
    pub step: WizardStep,
    pub input_base: Option<Base>,
    pub output_base: Option<Base>,
    /// Output bases still selectable; never contains `input_base`
    pub output_choices: Vec<Base>,
    /// Index into the active choice list
    pub cursor: usize,
    pub raw_input: String,
    pub result: Option<String>,
    pub error: Option<ConversionError>,
}

impl Default for WizardState {
    fn default() -> Self {
        Self {
            step: WizardStep::ChooseInputBase,
            input_base: None,
            output_base: None,
            output_choices: Base::ALL.to_vec(),
            cursor: 0,
            raw_input: String::new(),
            result: None,
            error: None,
        }
    }
}

impl WizardState {
    /// Create new wizard state at the initial step
    pub fn new() -> Self {
        Self::default()
    }

    /// Choices offered at the current step (empty outside the selection steps)
    pub fn choices(&self) -> &[Base] {
        match self.step {
            WizardStep::ChooseInputBase => Base::ALL.as_slice(),
            WizardStep::ChooseOutputBase => self.output_choices.as_slice(),
            WizardStep::EnterValue | WizardStep::ShowResult => &[],
        }
    }

    /// Apply a single user action, consuming the current state
    pub fn apply(mut self, action: Action) -> StepOutcome {
        tracing::debug!(step = %self.step, ?action, "applying action");

        match action {
            Action::Quit => return StepOutcome::Quit,
            Action::Reset => {
                if !self.step.is_initial() {
                    tracing::info!("wizard reset");
                    return StepOutcome::Continue(Self::new());
                }
            }
            Action::MoveCursorUp => {
                if !self.choices().is_empty() && self.cursor > 0 {
                    self.cursor -= 1;
                }
            }
            Action::MoveCursorDown => {
                if self.cursor + 1 < self.choices().len() {
                    self.cursor += 1;
                }
            }
            Action::Confirm => return self.confirm(),
            Action::AppendChar(c) => {
                if self.step == WizardStep::EnterValue {
                    self.raw_input.push(c);
                    self.error = None;
                }
            }
            Action::Backspace => {
                if self.step == WizardStep::EnterValue && self.raw_input.pop().is_some() {
                    self.error = None;
                }
            }
        }

        StepOutcome::Continue(self)
    }

    fn confirm(mut self) -> StepOutcome {
        match self.step {
            WizardStep::ChooseInputBase => {
                let selected = self.choices().get(self.cursor).copied();
                let Some(base) = selected else {
                    return StepOutcome::Continue(self);
                };
                self.input_base = Some(base);
                self.output_choices = Base::ALL.into_iter().filter(|b| *b != base).collect();
                self.cursor = 0;
                self.step = WizardStep::ChooseOutputBase;
            }
            WizardStep::ChooseOutputBase => {
                let selected = self.choices().get(self.cursor).copied();
                let Some(base) = selected else {
                    return StepOutcome::Continue(self);
                };
                self.output_base = Some(base);
                // Unreachable while output_choices excludes the input base
                if self.input_base != Some(base) {
                    self.step = WizardStep::EnterValue;
                }
            }
            WizardStep::EnterValue => {
                let (Some(source), Some(dest)) = (self.input_base, self.output_base) else {
                    return StepOutcome::Continue(self);
                };
                match convert(&self.raw_input, source, dest) {
                    Ok(result) => {
                        tracing::info!(input = %self.raw_input, %source, %dest, %result, "converted");
                        self.result = Some(result);
                        self.error = None;
                        self.step = WizardStep::ShowResult;
                    }
                    Err(err) => {
                        tracing::warn!(input = %self.raw_input, %source, error = %err, "conversion failed");
                        self.error = Some(err);
                        self.raw_input.clear();
                    }
                }
            }
            WizardStep::ShowResult => return StepOutcome::Continue(Self::new()),
        }

        StepOutcome::Continue(self)
    }
}
