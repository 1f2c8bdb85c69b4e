use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use tracing::{error, info};

use wslaunch::app::{Action, App};
use wslaunch::dispatcher::LaunchDispatcher;
use wslaunch::repository;
use wslaunch::settings::{SettingsManager, WindowSize};
use wslaunch::single_instance::{InstanceLock, PidFileLock};
use wslaunch::terminal::TerminalGuard;
use wslaunch::{logging, ui};

fn main() {
    let _logging = logging::init();

    // Single-instance check happens before any terminal setup so a
    // duplicate launch never flashes a window.
    let mut lock = match PidFileLock::in_config_dir() {
        Ok(lock) => lock,
        Err(e) => {
            error!(error = %e, "cannot create instance lock");
            eprintln!("wslaunch: cannot create instance lock: {e:#}");
            std::process::exit(1);
        }
    };
    match lock.try_acquire() {
        Ok(true) => {}
        Ok(false) => {
            info!("another instance is already running, exiting");
            eprintln!("wslaunch is already running");
            return;
        }
        Err(e) => {
            error!(error = %e, "instance lock failed");
            eprintln!("wslaunch: instance lock failed: {e:#}");
            std::process::exit(1);
        }
    }

    info!("====== application starting ======");

    if let Err(e) = run() {
        error!(error = %e, "fatal error");
        eprintln!("wslaunch: {e:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let manager = SettingsManager::new()?;
    // Without a valid config there is nothing to launch; this is the
    // one error that terminates startup.
    let settings = manager.load()?;

    let mut state = manager.load_state();
    if let Some(size) = state.window {
        info!(width = size.width, height = size.height, "restored window size");
    }

    let items = repository::discover(&settings);
    info!(count = items.len(), "workspaces discovered");

    let dispatcher = LaunchDispatcher::new(settings);
    let mut app = App::new(items, state.variant());

    let mut guard = TerminalGuard::new()?;
    loop {
        guard.terminal().draw(|f| ui::render(f, &app))?;

        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => match app.handle_key(key) {
                Action::Quit => break,
                Action::Launch(i) => {
                    let item = app.items[i].clone();
                    match dispatcher.launch(&item, app.variant) {
                        Ok(()) => app.note_launched(&item),
                        Err(e) => app.note_launch_failed(&e.to_string()),
                    }
                }
                Action::VariantChanged(variant) => {
                    manager.save_variant(&mut state, variant);
                }
                Action::None => {}
            },
            Event::Resize(width, height) => {
                manager.save_window_size(&mut state, WindowSize { width, height });
            }
            _ => {}
        }
    }

    if let Ok((width, height)) = crossterm::terminal::size() {
        manager.save_window_size(&mut state, WindowSize { width, height });
    }

    info!("exiting");
    Ok(())
}
