//! project-board - move projects between Active and Finished lists
//!
//! Entry point: load config, start file logging, build the board and run
//! the terminal event loop.

mod action;
mod app;
mod board;
mod component;
mod components;
mod config;
mod error;
mod logging;
mod model;
mod surface;
mod tui;

use crate::action::Action;
use crate::app::App;
use crate::component::Component;
use crate::config::Config;
use crate::tui::Tui;
use anyhow::Result;
use crossterm::event::Event;

fn main() -> Result<()> {
    let config = Config::load()?;

    // Keep the handle alive so buffered records are flushed on exit
    let logger = match config.log_dir() {
        Some(dir) => match logging::init(&config.log_level, &dir) {
            Ok(handle) => Some(handle),
            Err(e) => {
                eprintln!("Logging disabled: {:#}", e);
                None
            }
        },
        None => None,
    };

    let mut app = App::new(config)?;
    app.init()?;

    let mut tui = Tui::new()?
        .with_tick_rate(app.config.tick_rate())
        .with_mouse(app.config.mouse);
    tui.enter()?;

    let result = run_app(&mut tui, &mut app);

    tui.exit()?;

    if let Err(err) = result {
        log::error!("event=app_exit status=error error={:#}", err);
        logging::flush(logger.as_ref());
        eprintln!("Error: {:?}", err);
        std::process::exit(1);
    }

    log::info!("event=app_exit status=ok");
    Ok(())
}

/// Run the main application loop
fn run_app(tui: &mut Tui, app: &mut App) -> Result<()> {
    while !app.should_quit {
        tui.draw(|frame| {
            let area = frame.area();
            if let Err(e) = app.draw(frame, area) {
                log::error!("event=draw_error error={}", e);
            }
        })?;

        if let Some(event) = tui.next_event()? {
            let action = match event {
                Event::Key(key) => app.handle_key_event(key)?,
                Event::Mouse(mouse) => app.handle_mouse_event(mouse)?,
                Event::Resize(w, h) => Some(Action::Resize(w, h)),
                _ => None,
            };

            if let Some(action) = action {
                app.dispatch(action)?;
            }
        } else {
            app.update(Action::Tick)?;
        }
    }

    Ok(())
}
