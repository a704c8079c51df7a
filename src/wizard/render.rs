//! Plain-text view of the wizard, one string per screen

use super::state::{WizardState, WizardStep};

/// Marker placed in front of the selected choice and the input echo
pub const CURSOR_MARKER: &str = "> ";

/// Render the wizard state as the text shown on screen.
///
/// Pure function of `state`; the terminal layer only adds styling.
pub fn render(state: &WizardState) -> String {
    let mut lines: Vec<String> = Vec::new();

    match state.step {
        WizardStep::ChooseInputBase => {
            lines.push("What type of input would you like to convert?".to_string());
            lines.push(String::new());
            push_choices(&mut lines, state);
        }
        WizardStep::ChooseOutputBase => {
            lines.push("What type of output would you like?".to_string());
            lines.push(String::new());
            push_choices(&mut lines, state);
        }
        WizardStep::EnterValue => {
            lines.push(format!("Enter your {} input:", base_name(state.input_base)));
            lines.push(format!("{}{}", CURSOR_MARKER, state.raw_input));
            if let Some(err) = &state.error {
                lines.push(String::new());
                lines.push(format!("Error: {}. Press Enter to try again.", err));
            }
        }
        WizardStep::ShowResult => {
            lines.push(format!(
                "Input ({}): {}",
                base_name(state.input_base),
                state.raw_input
            ));
            lines.push(format!(
                "Output ({}): {}",
                base_name(state.output_base),
                state.result.as_deref().unwrap_or_default()
            ));
            lines.push(String::new());
            lines.push("Press Enter to start over.".to_string());
        }
    }

    lines.push(String::new());
    lines.push("Press q to quit.".to_string());
    if !state.step.is_initial() {
        lines.push("Press r to reset.".to_string());
    }

    let mut text = lines.join("\n");
    text.push('\n');
    text
}

fn push_choices(lines: &mut Vec<String>, state: &WizardState) {
    for (i, choice) in state.choices().iter().enumerate() {
        let marker = if i == state.cursor { CURSOR_MARKER } else { "  " };
        lines.push(format!("{}{}", marker, choice));
    }
}

fn base_name(base: Option<crate::convert::Base>) -> &'static str {
    base.map(|b| b.name()).unwrap_or("unknown")
}
