//! Unit tests for the wizard state machine
//!
//! These tests verify the wizard's pure logic components:
//! - Step sequencing and the output-base exclusion invariant
//! - Entry, backspace, and error recovery
//! - Reset and quit handling
//! - Rendered text for each step
//!
//! Terminal setup and key polling are not exercised here.

use bhd::convert::{Base, ConversionError};
use bhd::wizard::{render, Action, StepOutcome, WizardState, WizardStep};

/// Apply a sequence of actions, panicking if any of them quits
fn run(actions: &[Action]) -> WizardState {
    actions
        .iter()
        .fold(WizardState::new(), |state, action| match state.apply(*action) {
            StepOutcome::Continue(next) => next,
            StepOutcome::Quit => panic!("wizard quit on {:?}", action),
        })
}

fn type_text(text: &str) -> Vec<Action> {
    text.chars().map(Action::AppendChar).collect()
}

/// Actions that pick `input` then `output` from the choice lists
fn choose(input: Base, output: Base) -> Vec<Action> {
    let mut actions = Vec::new();
    let input_pos = Base::ALL.iter().position(|b| *b == input).unwrap();
    actions.extend(std::iter::repeat(Action::MoveCursorDown).take(input_pos));
    actions.push(Action::Confirm);

    let remaining: Vec<Base> = Base::ALL.into_iter().filter(|b| *b != input).collect();
    let output_pos = remaining.iter().position(|b| *b == output).unwrap();
    actions.extend(std::iter::repeat(Action::MoveCursorDown).take(output_pos));
    actions.push(Action::Confirm);
    actions
}

// ============================================================================
// Step sequencing
// ============================================================================

#[test]
fn test_initial_state() {
    let wizard = WizardState::new();
    assert_eq!(wizard.step, WizardStep::ChooseInputBase);
    assert_eq!(wizard.cursor, 0);
    assert_eq!(wizard.choices(), &Base::ALL);
    assert!(wizard.raw_input.is_empty());
    assert!(wizard.result.is_none());
    assert!(wizard.error.is_none());
}

#[test]
fn test_steps_only_move_forward() {
    let mut wizard = WizardState::new();
    let mut seen = vec![wizard.step.index()];

    for action in choose(Base::Decimal, Base::Hexadecimal)
        .into_iter()
        .chain(type_text("42"))
        .chain([Action::Confirm])
    {
        wizard = match wizard.apply(action) {
            StepOutcome::Continue(next) => next,
            StepOutcome::Quit => unreachable!(),
        };
        seen.push(wizard.step.index());
    }

    assert!(seen.windows(2).all(|w| w[0] <= w[1]), "steps went backwards: {:?}", seen);
    assert_eq!(wizard.step, WizardStep::ShowResult);
}

#[test]
fn test_output_choices_exclude_input_base() {
    for (i, input) in Base::ALL.into_iter().enumerate() {
        let mut actions = vec![Action::MoveCursorDown; i];
        actions.push(Action::Confirm);
        let wizard = run(&actions);

        assert_eq!(wizard.step, WizardStep::ChooseOutputBase);
        assert_eq!(wizard.input_base, Some(input));
        assert_eq!(wizard.cursor, 0, "cursor resets on the output step");
        assert_eq!(wizard.choices().len(), 2);
        assert!(!wizard.choices().contains(&input));
    }
}

#[test]
fn test_output_cursor_clamps_to_shorter_list() {
    let mut actions = vec![Action::Confirm];
    actions.extend([Action::MoveCursorDown; 5]);
    let wizard = run(&actions);
    assert_eq!(wizard.cursor, 1);
}

// ============================================================================
// Conversion scenarios
// ============================================================================

#[test]
fn test_decimal_to_hex_scenario() {
    let mut actions = choose(Base::Decimal, Base::Hexadecimal);
    actions.extend(type_text("255"));
    actions.push(Action::Confirm);

    let wizard = run(&actions);
    assert_eq!(wizard.step, WizardStep::ShowResult);
    assert_eq!(wizard.result.as_deref(), Some("ff"));
    assert_eq!(wizard.raw_input, "255");
}

#[test]
fn test_hex_to_binary_scenario() {
    let mut actions = choose(Base::Hexadecimal, Base::Binary);
    actions.extend(type_text("ff.ab"));
    actions.push(Action::Confirm);

    let wizard = run(&actions);
    assert_eq!(wizard.result.as_deref(), Some("11111111.10101011"));

    let view = render(&wizard);
    assert!(view.contains("Input (hexadecimal): ff.ab\n"));
    assert!(view.contains("Output (binary): 11111111.10101011\n"));
    assert!(view.contains("Press Enter to start over."));
}

#[test]
fn test_invalid_input_forces_reentry() {
    let mut actions = choose(Base::Binary, Base::Decimal);
    actions.extend(type_text("12"));
    actions.push(Action::Confirm);

    let wizard = run(&actions);
    assert_eq!(wizard.step, WizardStep::EnterValue);
    assert_eq!(wizard.error, Some(ConversionError::InvalidInput));
    assert!(wizard.raw_input.is_empty(), "bad input is cleared");
    assert!(wizard.result.is_none());

    let view = render(&wizard);
    assert!(view.contains("Error: Invalid input. Press Enter to try again."));
}

#[test]
fn test_empty_submission_is_invalid() {
    let mut actions = choose(Base::Binary, Base::Decimal);
    actions.push(Action::Confirm);
    let wizard = run(&actions);
    assert_eq!(wizard.error, Some(ConversionError::InvalidInput));
}

#[test]
fn test_recovery_after_error() {
    let mut actions = choose(Base::Binary, Base::Decimal);
    actions.extend(type_text("2"));
    actions.push(Action::Confirm);
    actions.extend(type_text("101"));
    actions.push(Action::Confirm);

    let wizard = run(&actions);
    assert_eq!(wizard.step, WizardStep::ShowResult);
    assert_eq!(wizard.result.as_deref(), Some("5"));
    assert!(wizard.error.is_none());
}

// ============================================================================
// Editing
// ============================================================================

#[test]
fn test_backspace_removes_last_char() {
    let mut actions = choose(Base::Decimal, Base::Binary);
    actions.extend(type_text("123"));
    actions.push(Action::Backspace);
    let wizard = run(&actions);
    assert_eq!(wizard.raw_input, "12");
}

#[test]
fn test_backspace_on_empty_input_is_noop() {
    let mut actions = choose(Base::Decimal, Base::Binary);
    actions.push(Action::Backspace);
    let wizard = run(&actions);
    assert_eq!(wizard.step, WizardStep::EnterValue);
    assert!(wizard.raw_input.is_empty());
}

#[test]
fn test_typing_ignored_outside_entry() {
    let wizard = run(&type_text("101"));
    assert!(wizard.raw_input.is_empty());
    assert_eq!(wizard.step, WizardStep::ChooseInputBase);
}

#[test]
fn test_entry_view_echoes_input() {
    let mut actions = choose(Base::Hexadecimal, Base::Decimal);
    actions.extend(type_text("c0.a8"));
    let view = render(&run(&actions));
    assert!(view.starts_with("Enter your hexadecimal input:\n> c0.a8\n"));
    assert!(view.ends_with("Press q to quit.\nPress r to reset.\n"));
}

// ============================================================================
// Reset and quit
// ============================================================================

#[test]
fn test_reset_returns_fresh_state() {
    let mut actions = choose(Base::Decimal, Base::Hexadecimal);
    actions.extend(type_text("99"));
    actions.push(Action::Reset);
    assert_eq!(run(&actions), WizardState::new());
}

#[test]
fn test_confirm_on_result_restarts() {
    let mut actions = choose(Base::Decimal, Base::Hexadecimal);
    actions.extend(type_text("1"));
    actions.push(Action::Confirm);
    actions.push(Action::Confirm);
    assert_eq!(run(&actions), WizardState::new());
}

#[test]
fn test_quit_from_any_step() {
    let mut actions = choose(Base::Decimal, Base::Hexadecimal);
    actions.extend(type_text("7"));

    let mut wizard = WizardState::new();
    for action in actions {
        assert_eq!(wizard.clone().apply(Action::Quit), StepOutcome::Quit);
        wizard = match wizard.apply(action) {
            StepOutcome::Continue(next) => next,
            StepOutcome::Quit => unreachable!(),
        };
    }
    assert_eq!(wizard.apply(Action::Quit), StepOutcome::Quit);
}
