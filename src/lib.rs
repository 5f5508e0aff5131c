pub mod config;
pub mod models;
pub mod store;

pub use config::CoreConfig;
pub use models::{Contacts, FilterState, FriendFilter, NotificationCategory, NotificationItem};
pub use store::{FeedEvent, NotificationFeed, SettingsStore};
