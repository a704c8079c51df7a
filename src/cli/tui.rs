//! Terminal session for the conversion wizard
//!
//! Owns raw mode, the alternate screen, and the key event loop. All wizard
//! behaviour lives in `crate::wizard`; this module only feeds it key presses
//! and draws whatever `render` returns.

use std::io::{stdout, Stdout};

use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event, KeyEventKind},
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Alignment, Rect},
    prelude::*,
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Terminal,
};

use crate::wizard::{action_for_key, render, StepOutcome, WizardState, WizardStep, CURSOR_MARKER};

/// Xterm-256 pink used for the input caret
const CARET_COLOR: Color = Color::Indexed(205);

/// Narrowest box drawn, so short screens keep a steady frame
const MIN_BOX_WIDTH: u16 = 60;

/// Columns taken by the two borders plus one column of padding on each side
const HORIZONTAL_CHROME: u16 = 4;

/// Rows taken by the two borders, the top padding row and the bottom padding row
const VERTICAL_CHROME: u16 = 4;

// ============================================================================
// Terminal Setup
// ============================================================================

/// Setup terminal for TUI rendering with panic-safe cleanup
fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
    enable_raw_mode()?;

    // Raw mode is already on, so any failure past this point must undo it
    let terminal = open_or_restore(open_terminal, teardown_terminal)?;

    // Install panic hook for clean terminal restoration
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        teardown_terminal();
        original_hook(panic_info);
    }));

    Ok(terminal)
}

fn open_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
    stdout().execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout());
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

/// Run `open`, calling `restore` before returning its error
fn open_or_restore<T>(open: impl FnOnce() -> Result<T>, restore: impl FnOnce()) -> Result<T> {
    open().inspect_err(|_| restore())
}

/// Restore terminal to normal state
fn teardown_terminal() {
    let _ = disable_raw_mode();
    let _ = stdout().execute(LeaveAlternateScreen);
}

// ============================================================================
// Entry Point
// ============================================================================

/// Run the wizard in full-screen mode until the user quits
pub fn run_tui() -> Result<()> {
    let mut terminal = setup_terminal().context("Failed to initialise terminal")?;
    tracing::info!("wizard session started");

    let result = run_event_loop(&mut terminal);

    teardown_terminal();
    tracing::info!("wizard session ended");

    result
}

/// Main wizard event loop
fn run_event_loop(terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
    let mut wizard = WizardState::new();

    loop {
        terminal.draw(|f| draw_wizard(f, &wizard))?;

        let Event::Key(key) = event::read()? else {
            continue;
        };

        // Only handle key press events, not release
        if key.kind != KeyEventKind::Press {
            continue;
        }

        let Some(action) = action_for_key(key) else {
            continue;
        };

        wizard = match wizard.apply(action) {
            StepOutcome::Continue(next) => next,
            StepOutcome::Quit => return Ok(()),
        };
    }
}

// ============================================================================
// Rendering
// ============================================================================

/// Create a centered rectangle with fixed dimensions
fn centered_fixed_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.width.saturating_sub(width) / 2;
    let y = area.height.saturating_sub(height) / 2;
    Rect::new(x, y, width.min(area.width), height.min(area.height))
}

/// Get semantic color for a step
fn step_color(step: WizardStep) -> Color {
    match step {
        WizardStep::ChooseInputBase | WizardStep::ChooseOutputBase => Color::Cyan,
        WizardStep::EnterValue => Color::Yellow,
        WizardStep::ShowResult => Color::Green,
    }
}

/// Rows needed to show `lines` wrapped at `width` columns.
///
/// Word wrapping can break earlier than the column limit, so each wrapped
/// line gets one spare row.
fn wrapped_height(lines: &[Line], width: u16) -> u16 {
    let width = usize::from(width.max(1));
    let rows: usize = lines
        .iter()
        .map(|line| match line.width() {
            0 => 1,
            w if w <= width => 1,
            w => w.div_ceil(width) + 1,
        })
        .sum();
    u16::try_from(rows).unwrap_or(u16::MAX)
}

/// Draw the rendered wizard text inside a titled box sized to fit it
fn draw_wizard(f: &mut Frame, wizard: &WizardState) {
    let area = f.area();
    let text = render(wizard);
    let lines: Vec<Line<'static>> = text.lines().map(style_line).collect();

    let longest = lines.iter().map(Line::width).max().unwrap_or(0);
    let box_width = u16::try_from(longest)
        .unwrap_or(u16::MAX)
        .saturating_add(HORIZONTAL_CHROME)
        .max(MIN_BOX_WIDTH)
        .min(area.width);
    let content_width = box_width.saturating_sub(HORIZONTAL_CHROME);
    let box_height = wrapped_height(&lines, content_width).saturating_add(VERTICAL_CHROME);

    let box_area = centered_fixed_rect(box_width, box_height, area);
    f.render_widget(Clear, box_area);

    let color = step_color(wizard.step);
    let title_text = format!(
        " Step {}/{} \u{00b7} {} ",
        wizard.step.index() + 1,
        WizardStep::COUNT,
        wizard.step.title()
    );

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color))
        .title(title_text)
        .title_style(Style::default().fg(color).bold())
        .title_alignment(Alignment::Center);

    let inner = block.inner(box_area);
    f.render_widget(block, box_area);

    let content = Rect::new(
        inner.x + 1,
        inner.y + 1,
        inner.width.saturating_sub(2),
        inner.height.saturating_sub(1),
    );
    f.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), content);
}

/// Apply colours to one line of rendered wizard text
fn style_line(line: &str) -> Line<'static> {
    if let Some(rest) = line.strip_prefix(CURSOR_MARKER) {
        return Line::from(vec![
            Span::styled(CURSOR_MARKER, Style::default().fg(CARET_COLOR)),
            Span::styled(rest.to_string(), Style::default().fg(Color::White).bold()),
        ]);
    }

    let style = if line.starts_with("Error:") {
        Style::default().fg(Color::Red)
    } else if line.starts_with("Press ") {
        Style::default().fg(Color::DarkGray)
    } else {
        Style::default()
    };
    Line::from(Span::styled(line.to_string(), style))
}
