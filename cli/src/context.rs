use bosswatch_core::{AppConfig, Catalog, ChannelId, JsonlStore, LiveBoard};
use std::sync::Arc;
use tokio::sync::{Mutex, RwLock};
use tokio::task::JoinHandle;

use crate::surface::TermSurface;

/// The terminal is the only surface the CLI publishes to.
pub const TERMINAL_CHANNEL: ChannelId = 0;

#[derive(Default)]
pub struct BackgroundTasks {
    pub refresh: Option<JoinHandle<()>>,
}

impl BackgroundTasks {
    pub async fn abort_all(&mut self) {
        if let Some(handle) = self.refresh.take() {
            handle.abort();
        }
    }
}

/// Holds all shared state for the CLI application.
/// This is a lightweight container - logic lives in the individual state types.
#[derive(Clone)]
pub struct CliContext {
    pub config: Arc<RwLock<AppConfig>>,
    pub catalog: Arc<Catalog>,
    pub store: Arc<JsonlStore>,
    pub board: LiveBoard<JsonlStore, TermSurface>,
    pub tasks: Arc<Mutex<BackgroundTasks>>,
}

impl CliContext {
    pub fn new() -> Self {
        let config = AppConfig::load();
        let catalog = Arc::new(Catalog::new());
        let store = Arc::new(JsonlStore::new(config.data_file_path()));
        let config = Arc::new(RwLock::new(config));

        let board = LiveBoard::new(
            Arc::clone(&catalog),
            Arc::clone(&store),
            Arc::new(TermSurface::new()),
            Arc::clone(&config),
        );

        Self {
            config,
            catalog,
            store,
            board,
            tasks: Arc::new(Mutex::new(BackgroundTasks::default())),
        }
    }
}

impl Default for CliContext {
    fn default() -> Self {
        Self::new()
    }
}
