//! API endpoint implementations.

mod auth;
mod memory;
mod message;
mod plugins;
mod rabbithole;
mod settings;
mod status;
mod users;

pub use auth::AuthApi;
pub use memory::{MemoryApi, PointsQuery};
pub use message::MessageApi;
pub use plugins::PluginsApi;
pub use rabbithole::RabbitholeApi;
pub use settings::SettingsApi;
pub use status::StatusApi;
pub use users::UsersApi;
