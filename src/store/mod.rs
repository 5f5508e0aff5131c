pub mod feed;
pub mod settings;

pub use feed::{FeedEvent, NotificationFeed};
pub use settings::{
    pk_setting_key, SettingsError, SettingsStore, FRIEND_FILTER, NOTIFICATION_FILTER_STATE,
};
