//! Matrix rain screensaver (default binary).
//!
//! Queries the terminal size, animates one falling-glyph column per terminal
//! column, and runs until interrupted. The terminal is restored (cursor,
//! raw mode, alternate screen) on every exit path.

use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::Result;
use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind};

use matrix_rain::core::RainField;
use matrix_rain::input::{handle_key_event, should_quit};
use matrix_rain::term::{draw_paused_overlay, FrameBuffer, RainView, TerminalRenderer, Viewport};
use matrix_rain::types::{ColorScheme, RainAction, DEFAULT_COLS, DEFAULT_ROWS, TICK_MS};

#[derive(Parser, Debug)]
#[command(name = "matrix-rain", about = "Matrix rain screensaver for the terminal", version)]
struct Cli {
    /// Use the red color scheme.
    #[arg(short = 'r', long)]
    red: bool,

    /// Frame interval in milliseconds.
    #[arg(long, default_value_t = TICK_MS as u64)]
    tick_ms: u64,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &cli);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer, cli: &Cli) -> Result<()> {
    let (w, h) = crossterm::terminal::size().unwrap_or((DEFAULT_COLS, DEFAULT_ROWS));
    let mut field = RainField::new(clock_seed(), w, h);
    let mut scheme = if cli.red {
        ColorScheme::Red
    } else {
        ColorScheme::Green
    };

    let view = RainView;
    let mut fb = FrameBuffer::new(w, h);
    let mut paused = false;

    let tick_duration = Duration::from_millis(cli.tick_ms.max(1));
    let mut last_tick = Instant::now();

    loop {
        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((DEFAULT_COLS, DEFAULT_ROWS));
        if (w, h) != (field.cols(), field.rows()) {
            field.resize(w, h);
            term.invalidate();
        }
        view.render_into(&field, scheme, Viewport::new(w, h), &mut fb);
        if paused {
            draw_paused_overlay(&mut fb);
        }
        term.draw_swap(&mut fb)?;

        // Input with timeout until next tick.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if should_quit(key) {
                        return Ok(());
                    }
                    match handle_key_event(key) {
                        Some(RainAction::TogglePause) => paused = !paused,
                        Some(RainAction::ToggleScheme) => scheme = scheme.toggled(),
                        None => {}
                    }
                }
                Event::Resize(w, h) => {
                    field.resize(w, h);
                    term.invalidate();
                }
                _ => {}
            }
        }

        // Tick.
        if last_tick.elapsed() >= tick_duration {
            last_tick = Instant::now();
            if !paused {
                field.tick();
            }
        }
    }
}

/// Seed the animation from the wall clock so every run differs.
fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ (d.as_secs() as u32))
        .unwrap_or(0x9E37_79B9)
}
