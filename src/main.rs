//! Terminal memory game runner (default binary).
//!
//! Uses crossterm for input and the framebuffer renderer from the `term`
//! crate. Logs go to a file because the terminal is in raw mode.

use std::fs::{self, OpenOptions};
use std::path::Path;
use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use tui_memory::store::FileStore;
use tui_memory::term::{terminal_size, FrameBuffer, RenderThrottle, TerminalRenderer, Viewport};
use tui_memory::types::TICK_MS;
use tui_memory::{App, AppConfig};

/// Redraw at least this often even when nothing changed.
const STATIC_REDRAW_MS: u64 = 500;

fn main() -> Result<()> {
    let config = AppConfig::from_env();
    init_logging(&config.log_path);

    let seed = config.seed.unwrap_or_else(clock_seed);
    log::info!(
        "starting: seed={seed} variant={:?} contact={:?} data_dir={}",
        config.game.display,
        config.game.contact,
        config.data_dir.display()
    );

    let mut app = App::new(&config, FileStore::new(&config.data_dir), seed);

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &mut app);

    // Always try to restore terminal state.
    let _ = term.exit();
    if let Err(e) = &result {
        log::error!("exiting with error: {e:#}");
    }
    result
}

fn run(term: &mut TerminalRenderer, app: &mut App<FileStore>) -> Result<()> {
    let started = Instant::now();
    let now_ms = || started.elapsed().as_millis() as u64;

    let tick_duration = Duration::from_millis(TICK_MS as u64);
    let mut last_tick = Instant::now();
    let mut throttle = RenderThrottle::new(STATIC_REDRAW_MS);
    let mut fb = FrameBuffer::new(0, 0);

    loop {
        // Render.
        let now = now_ms();
        if throttle.should_render(now, app.fingerprint(now)) {
            let (w, h) = terminal_size();
            app.render_into(now, Viewport::new(w, h), &mut fb);
            term.draw_swap(&mut fb)?;
        }

        // Input with timeout until next tick.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or(Duration::ZERO);

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    app.handle_key(key, now_ms());
                    if app.should_quit() {
                        log::info!("quit");
                        return Ok(());
                    }
                }
                Event::Resize(..) => {
                    term.invalidate();
                    throttle.reset();
                }
                _ => {}
            }
        }

        // Tick.
        if last_tick.elapsed() >= tick_duration {
            last_tick = Instant::now();
            app.tick(now_ms());
        }
    }
}

/// Send `log` output to `path`. Logging is skipped if the file cannot be
/// opened; the game still runs.
fn init_logging(path: &Path) {
    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        let _ = fs::create_dir_all(dir);
    }
    let Ok(file) = OpenOptions::new().create(true).append(true).open(path) else {
        return;
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .init();
}

fn clock_seed() -> u32 {
    let ms = tui_memory::store::now_ms();
    (ms as u64 ^ (ms as u64 >> 32)) as u32
}
