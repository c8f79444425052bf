pub mod catalog;
pub mod config;
pub mod game_data;
pub mod live;
pub mod respawn;
pub mod storage;
pub mod view;

// Re-exports for convenience
pub use catalog::Catalog;
pub use config::{AppConfig, ConfigError, parse_offset};
pub use game_data::{BOSS_DATA, BossEntry};
pub use live::{ChannelId, GatewayError, LiveBoard, LiveError, LiveRegistry, MessageId, SurfaceGateway};
pub use respawn::{RespawnPolicy, SpawnSlot, TimeLeft};
pub use storage::{JsonlStore, ObservationRecord, ObservationStore, StorageError};
pub use view::render_table;
