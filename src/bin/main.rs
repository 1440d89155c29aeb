use core::cell::Cell;

use embassy_executor::Spawner;
use embassy_time::{Duration, Instant, Timer};
use folio_core::{
    app::{PortfolioApp, TickResult},
    clipboard::MemoryClipboard,
    page::PageConfig,
};
use log::{error, info, warn};
use tracing_subscriber::EnvFilter;

use settings_file::FileSettingsStore;
use terminal::TerminalRenderer;
use visitor::{SESSION, ScriptedVisitor};

#[path = "main/settings_file.rs"]
mod settings_file;
#[path = "main/terminal.rs"]
mod terminal;
#[path = "main/visitor.rs"]
mod visitor;

const DEFAULT_SETTINGS_PATH: &str = "folio-settings.txt";
const DEFAULT_TICK_MS: u64 = 16;
const DEFAULT_SESSION_MS: u64 = 20_000;
const REPORT_INTERVAL_SECS: u64 = 5;

struct HostConfig {
    settings_path: String,
    tick_ms: u64,
    session_ms: u64,
}

impl HostConfig {
    fn from_env() -> Self {
        Self {
            settings_path: std::env::var("FOLIO_SETTINGS_PATH")
                .unwrap_or_else(|_| DEFAULT_SETTINGS_PATH.to_owned()),
            tick_ms: env_millis("FOLIO_TICK_MS", DEFAULT_TICK_MS).max(1),
            session_ms: env_millis("FOLIO_SESSION_MS", DEFAULT_SESSION_MS),
        }
    }
}

fn env_millis(key: &str, default: u64) -> u64 {
    match std::env::var(key) {
        Ok(raw) => raw.trim().parse().unwrap_or_else(|_| {
            warn!("{key}={raw:?} is not a number of milliseconds; using {default}");
            default
        }),
        Err(_) => default,
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    init_logging();

    let host = HostConfig::from_env();
    let started = Instant::now();
    let visitor = ScriptedVisitor::new(started, &SESSION);
    let store = FileSettingsStore::new(&host.settings_path);

    let clipboard = MemoryClipboard::new();

    let mut app = match PortfolioApp::new(visitor, store, clipboard, PageConfig::default(), 0) {
        Ok(app) => app,
        Err(err) => {
            error!("page: invalid configuration: {:?}", err);
            std::process::exit(1);
        }
    };

    info!(
        "folio started: tick_ms={} session_ms={} settings={} theme={}",
        host.tick_ms,
        host.session_ms,
        host.settings_path,
        app.theme().as_str()
    );

    let mut renderer = TerminalRenderer::new();
    let rendered = Cell::new(0u64);

    let ui_future = async {
        loop {
            let now_ms = started.elapsed().as_millis();

            if app.tick(now_ms) == TickResult::RenderRequested {
                app.with_screen(now_ms, |screen| renderer.render(screen));
                rendered.set(renderer.frames());
            }

            if let Some(target) = app.take_scroll_request() {
                let from = app.scroll_offset();
                info!("nav: smooth scroll {} -> {}", from, target);
                app.input_mut().glide(from, target, now_ms);
            }

            if now_ms >= host.session_ms && app.input_mut().is_finished() {
                info!(
                    "session finished: section={:?} theme={} clipboard={:?}",
                    app.current_section(),
                    app.theme().as_str(),
                    app.clipboard().text()
                );
                break;
            }

            let wake_ms = app
                .next_due_ms(now_ms)
                .clamp(now_ms + 1, now_ms + host.tick_ms);
            Timer::after_millis(wake_ms - now_ms).await;
        }
    };

    let report_future = async {
        let mut last = 0u64;
        loop {
            Timer::after(Duration::from_secs(REPORT_INTERVAL_SECS)).await;
            let frames = rendered.get();
            info!(
                "frames={} (+{} in {}s)",
                frames,
                frames.saturating_sub(last),
                REPORT_INTERVAL_SECS
            );
            last = frames;
        }
    };

    embassy_futures::select::select(ui_future, report_future).await;

    // The std executor keeps polling forever once main returns.
    std::process::exit(0);
}
