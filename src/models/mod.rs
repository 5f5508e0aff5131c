pub mod contacts;
pub mod filter;
pub mod notification;

pub use contacts::Contacts;
pub use filter::{FilterState, FriendFilter, NotificationCategory};
pub use notification::{
    NotificationContent, NotificationItem, Reaction, ReactionGroup, ReplyInfo, ZapGroup, ZapInfo,
};
