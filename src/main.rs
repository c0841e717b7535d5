use memviz::app::App;
use memviz::cli::{parse_args, run_cli_command};
use memviz::events::{self, InputEvent};
use memviz::logging::{default_log_path, init_logging};
use memviz::startup::{load_glyphs, VisualizerConfig};
use memviz::terminal::{setup_panic_hook, TerminalManager};
use memviz::ui;

use color_eyre::Result;
use crossterm::event::EventStream;
use futures::StreamExt;
use ratatui::Terminal;
use std::time::Duration;

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    if let Some(result) = run_cli_command(parse_args(std::env::args())) {
        if let Err(e) = result {
            eprintln!("Error: {}", e);
            std::process::exit(2);
        }
        return Ok(());
    }

    let config = VisualizerConfig::from_env()?;

    let log_path = config.log_file.clone().unwrap_or_else(default_log_path);
    if let Err(e) = init_logging(&log_path) {
        if !e.is_recoverable() {
            return Err(e.into());
        }
        eprintln!("Warning: {} ({})", e, e.error_code());
    }
    tracing::info!(
        "Starting with {} blocks, tick {}ms",
        config.block_count,
        config.tick_rate_ms
    );

    let glyphs = load_glyphs(config.glyphs.as_deref());
    tracing::info!("Using {:?} glyphs", glyphs.style);

    setup_panic_hook();
    let mut term_manager = TerminalManager::new()?;

    let mut app = App::new(config, glyphs);
    let size = term_manager.size()?;
    app.update_terminal_dimensions(size.width, size.height);

    let result = run_app(term_manager.terminal(), &mut app).await;

    term_manager.restore()?;
    match &result {
        Ok(()) => tracing::info!("Exited normally"),
        Err(e) => tracing::error!("Exited with error: {}", e),
    }
    result
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    let mut event_stream = EventStream::new();
    let tick_rate = Duration::from_millis(app.config.tick_rate_ms);

    loop {
        if app.needs_redraw {
            terminal.draw(|f| ui::render(f, app))?;
            app.needs_redraw = false;
        }

        let timeout = tokio::time::sleep(tick_rate);

        tokio::select! {
            // Animation clock
            _ = timeout => {
                app.tick();
            }

            event_result = event_stream.next() => {
                match event_result {
                    Some(Ok(event)) => {
                        if let Some(input) = events::translate(&event) {
                            app.handle_event(input);
                        }
                    }
                    Some(Err(e)) => return Err(e.into()),
                    // Input closed
                    None => app.handle_event(InputEvent::Quit),
                }
            }
        }

        if app.should_quit {
            return Ok(());
        }
    }
}
