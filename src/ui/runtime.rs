use crate::catalog::{CompletionSink, FetchCompletion, FetchOrchestrator, HttpProductApi, ProductApi};
use crate::config::Config;
use crate::ui::app::App;
use crate::ui::catalog::CatalogView;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use std::sync::mpsc::RecvTimeoutError;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

/// Run the catalog browser until the user quits.
///
/// The UI thread owns all state. HTTP requests run on a small tokio
/// runtime and report back through the event queue.
pub fn run(config: &Config, initial_category: Option<String>) -> anyhow::Result<()> {
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(2)
        .thread_name("rentcat-http")
        .enable_all()
        .build()?;

    let api: Arc<dyn ProductApi> = Arc::new(HttpProductApi::new(&config.api)?);
    let tick_rate = Duration::from_millis(config.ui.tick_rate_ms);
    let events = EventHandler::new(tick_rate);

    let completions = events.sender();
    let sink: CompletionSink = Arc::new(move |completion: FetchCompletion| {
        let _ = completions.send(AppEvent::FetchComplete(completion));
    });
    let orchestrator = FetchOrchestrator::new(
        api,
        runtime.handle().clone(),
        sink,
        config.search.default_radius_km,
    );

    let mut app = App::new(CatalogView::new(orchestrator));
    if let Some(category) = initial_category {
        app.preset_category(category);
    }

    let (mut terminal, guard) = setup_terminal()?;
    info!(base_url = %config.api.base_url, "Catalog view mounted");
    app.mount();

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Key(key)) => handle_key(&mut app, key),
            Ok(AppEvent::Tick) => app.on_tick(),
            // Redrawn at the new size on the next iteration
            Ok(AppEvent::Resize(_, _)) => {}
            Ok(AppEvent::FetchComplete(completion)) => app.on_fetch_complete(completion),
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => break,
        }
    }

    app.unmount();
    drop(guard);
    runtime.shutdown_timeout(Duration::from_millis(200));
    info!("Catalog view unmounted");
    Ok(())
}
