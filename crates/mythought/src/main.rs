use anyhow::Context;
use ratatui::{
    backend::CrosstermBackend,
    crossterm::{
        event::{
            self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind, MouseEventKind,
        },
        execute,
        terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    },
    layout::Rect,
    Terminal,
};
use std::io;
use std::sync::Arc;
use std::time::{Duration, Instant};

mod logger;

use mythought::actions::{Action, BootstrapAction, GlobalAction};
use mythought::content;
use mythought::middleware;
use mythought::persistence::{self, Persister};
use mythought::scene::Scene;
use mythought::scheduler::{Clock, SystemClock};
use mythought::store::Store;
use mythought::views;
use mythought_config::{load_snapshot, AppConfig, FileStorage, MemoryStorage, SnapshotStorage};

/// Rows scrolled per mouse wheel notch
const WHEEL_ROWS: i32 = 3;

fn main() -> anyhow::Result<()> {
    let log_file = logger::init()?;
    log::info!("Starting mythought, logging to {}", log_file.display());

    let config = AppConfig::load();
    let mut store = build_store(&config);

    // Setup terminal
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut scene = Scene::new(&config, content::partner_logos(), Instant::now());
    let result = run_app(&mut terminal, &mut store, &mut scene, &config);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = &result {
        log::error!("Exiting with error: {:?}", err);
    }
    log::info!("Exiting mythought");
    result
}

/// Restore persisted state and wire store, middleware and persistence
fn build_store(config: &AppConfig) -> Store {
    let storage: Box<dyn SnapshotStorage> = match FileStorage::for_namespace(&config.storage_namespace)
    {
        Ok(storage) => {
            log::info!("UI state stored at {}", storage.path().display());
            Box::new(storage)
        }
        Err(e) => {
            log::warn!("No data directory ({}), UI state will not survive restarts", e);
            Box::new(MemoryStorage::new())
        }
    };

    let persisted = load_snapshot(storage.as_ref());
    let mut store = Store::new(persistence::restore(&persisted, config.clone()));

    let clock: Arc<dyn Clock> = Arc::new(SystemClock);
    let toast_duration = Duration::from_millis(config.toast_duration_ms);
    for middleware in middleware::default_chain(clock, toast_duration) {
        store.add_middleware(middleware);
    }

    let mut persister = Persister::new(storage, Some(persisted));
    store.subscribe(move |state| persister.observe(state));

    store.dispatch(Action::Bootstrap(BootstrapAction::Start));
    store
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    store: &mut Store,
    scene: &mut Scene,
    config: &AppConfig,
) -> anyhow::Result<()> {
    let tick_rate = Duration::from_millis(config.tick_rate_ms.max(1));
    let mut last_tick = Instant::now();

    loop {
        let size = terminal.size()?;
        scene.sync(
            store.state(),
            Rect::new(0, 0, size.width, size.height),
            Instant::now(),
        );

        terminal.draw(|frame| {
            let area = frame.area();
            views::render(store.state(), scene, area, frame);
        })?;

        // Check if we should quit
        if !store.state().running {
            break;
        }

        let timeout = tick_rate.saturating_sub(last_tick.elapsed());
        if event::poll(timeout)? {
            match event::read()? {
                // Only process key press events (ignore key release)
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    store.dispatch(Action::Global(GlobalAction::KeyPressed(key)));
                }
                Event::Mouse(mouse) => match mouse.kind {
                    MouseEventKind::Moved | MouseEventKind::Drag(_) => {
                        scene.on_pointer(mouse.column, mouse.row, Instant::now());
                    }
                    MouseEventKind::ScrollDown => {
                        store.dispatch(Action::Global(GlobalAction::ScrollBy(WHEEL_ROWS)));
                    }
                    MouseEventKind::ScrollUp => {
                        store.dispatch(Action::Global(GlobalAction::ScrollBy(-WHEEL_ROWS)));
                    }
                    _ => {}
                },
                Event::Resize(_, _) => scene.on_resize(Instant::now()),
                _ => {}
            }
        }

        if last_tick.elapsed() >= tick_rate {
            store.tick();
            last_tick = Instant::now();
        }
    }

    Ok(())
}
