//! Terminal mode setup and restoration.

use crossterm::{
    cursor::Show,
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};

type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Enter raw mode on the alternate screen with mouse capture enabled.
///
/// Mouse capture is required: the scrollbar thumb and the "Show more"
/// button are pointer-driven.
pub fn setup_terminal() -> Result<()> {
    enable_raw_mode()?;
    execute!(std::io::stdout(), EnterAlternateScreen, EnableMouseCapture)?;
    Ok(())
}

/// Undo [`setup_terminal`], returning the user's shell to normal. The
/// cursor is re-shown explicitly in case a draw left it hidden.
pub fn restore_terminal() -> Result<()> {
    disable_raw_mode()?;
    execute!(std::io::stdout(), DisableMouseCapture, LeaveAlternateScreen, Show)?;
    Ok(())
}
