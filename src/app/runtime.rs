//! The event loop driving the collection page.

use std::time::Instant;

type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

use crossterm::event::Event as CEvent;
use ratatui::{Terminal, backend::CrosstermBackend};
use tokio::{
    select,
    sync::mpsc,
    time::Duration,
};

use crate::args::Args;
use crate::state::AppState;
use crate::ui::ui;

use super::terminal::{restore_terminal, setup_terminal};

/// Tick period driving debounce deadlines, scroll animation sampling, and
/// highlight expiry.
const TICK_MS: u64 = 50;

/// What: Run the platter TUI end-to-end: initialize terminal and state,
/// spawn the input and tick feeds, drive the event loop, and restore the
/// terminal on exit.
///
/// Inputs:
/// - `args`: Parsed command line (catalog and config-dir overrides).
///
/// Output:
/// - `Ok(())` when the UI exits cleanly; `Err` on unrecoverable terminal
///   errors.
///
/// Details:
/// - Config/catalog: loads `platter.conf` (honoring `--config-dir`), then
///   the catalog (`--catalog` wins over the configured path, demo catalog as
///   fallback).
/// - Startup mirrors page load: one forced visibility pass, scrollbar
///   controller attached with an immediate geometry refresh.
/// - Event loop: draws a frame per iteration, then waits on either a
///   terminal event or the periodic tick; the tick settles debounced
///   resizes, samples scroll animations, and expires reveal highlights.
/// - Shutdown mirrors page unload: the scrollbar controller is disposed so
///   nothing remains pending, then terminal modes are restored.
/// - Headless mode (`PLATTER_TEST_HEADLESS=1`) skips terminal setup and
///   input capture so tests can exercise the loop plumbing.
pub async fn run(args: &Args) -> Result<()> {
    let headless = std::env::var("PLATTER_TEST_HEADLESS").ok().as_deref() == Some("1");
    if !headless {
        setup_terminal()?;
    }
    let mut terminal = if headless {
        None
    } else {
        Some(Terminal::new(CrosstermBackend::new(std::io::stdout()))?)
    };

    let mut settings = args.config_dir.as_deref().map_or_else(
        crate::config::settings,
        crate::config::load_from,
    );
    if let Some(path) = &args.catalog {
        settings.catalog_path = Some(path.clone());
    }
    let products = crate::catalog::load(settings.catalog_path.as_deref());
    tracing::info!(
        products = products.len(),
        narrow_threshold = settings.narrow_threshold,
        featured_strip = settings.featured_strip,
        "platter starting"
    );

    let mut app = AppState::new(settings, products);
    if let Some(t) = terminal.as_ref() {
        let size = t.size()?;
        app.term_width = size.width;
        app.term_height = size.height;
    }
    tracing::debug!(
        width = app.term_width,
        height = app.term_height,
        "initial terminal size"
    );
    // Page-load analog: a forced visibility pass establishes the initial
    // card set for the current width.
    app.apply_visibility(true, Instant::now());

    let (event_tx, mut event_rx) = mpsc::unbounded_channel::<CEvent>();
    if !headless {
        std::thread::spawn(move || {
            loop {
                match crossterm::event::read() {
                    Ok(ev) => {
                        if event_tx.send(ev).is_err() {
                            break;
                        }
                    }
                    Err(_) => {
                        // ignore transient read errors and continue
                    }
                }
            }
        });
    }

    let (tick_tx, mut tick_rx) = mpsc::unbounded_channel::<()>();
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(Duration::from_millis(TICK_MS));
        loop {
            interval.tick().await;
            if tick_tx.send(()).is_err() {
                break;
            }
        }
    });

    loop {
        if let Some(t) = terminal.as_mut() {
            let _ = t.draw(|f| ui(f, &mut app));
        }

        select! {
            Some(ev) = event_rx.recv() => {
                if crate::events::handle_event(ev, &mut app) { break; }
            }
            Some(()) = tick_rx.recv() => {
                crate::logic::on_tick(&mut app, Instant::now());
            }
            else => { break; }
        }
    }

    // Page-unload analog: detach the scrollbar so no work stays pending.
    app.scrollbar.dispose();

    if !headless {
        restore_terminal()?;
    }
    tracing::info!("platter exited");
    Ok(())
}
