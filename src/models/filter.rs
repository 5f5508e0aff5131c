use super::contacts::Contacts;
use super::notification::NotificationItem;

/// Top-level notification tab: which category of notifications is shown.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum NotificationCategory {
    #[default]
    All,
    Zaps,
    Replies,
}

impl NotificationCategory {
    /// Stored-setting tag. Round-trips through [`NotificationCategory::parse`].
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Zaps => "zaps",
            Self::Replies => "replies",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "all" => Some(Self::All),
            "zaps" => Some(Self::Zaps),
            "replies" => Some(Self::Replies),
            _ => None,
        }
    }

    /// Tab label. Replies are presented to users as "Mentions".
    pub fn label(&self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Zaps => "Zaps",
            Self::Replies => "Mentions",
        }
    }

    pub fn matches(&self, item: &NotificationItem) -> bool {
        match self {
            Self::All => true,
            Self::Zaps => item.is_zap().is_some(),
            Self::Replies => item.is_reply().is_some(),
        }
    }

    /// Neither a zap nor a reply (reactions and the like).
    pub fn is_other(item: &NotificationItem) -> bool {
        item.is_zap().is_none() && item.is_reply().is_none()
    }
}

/// Friends-only narrowing applied within a category.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FriendFilter {
    #[default]
    All,
    Friends,
}

impl FriendFilter {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Friends => "friends",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "all" => Some(Self::All),
            "friends" => Some(Self::Friends),
            _ => None,
        }
    }

    pub fn matches(&self, contacts: &Contacts, pubkey: &str) -> bool {
        match self {
            Self::All => true,
            Self::Friends => contacts.is_in_friendosphere(pubkey),
        }
    }
}

/// Active filter configuration for the notification feed: one category tab
/// plus the friends-only narrowing. The two axes are independent.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FilterState {
    pub category: NotificationCategory,
    pub friend_filter: FriendFilter,
}

impl FilterState {
    pub fn new(category: NotificationCategory, friend_filter: FriendFilter) -> Self {
        Self {
            category,
            friend_filter,
        }
    }

    pub fn toggle_friend_filter(&mut self) {
        self.friend_filter = match self.friend_filter {
            FriendFilter::All => FriendFilter::Friends,
            FriendFilter::Friends => FriendFilter::All,
        };
    }

    /// Boolean projection of the friend filter, for binding to an on/off
    /// control. Derived, not stored.
    pub fn friends_only(&self) -> bool {
        self.friend_filter == FriendFilter::Friends
    }

    pub fn set_friends_only(&mut self, on: bool) {
        self.friend_filter = if on { FriendFilter::Friends } else { FriendFilter::All };
    }

    /// Apply both stages over `items`, preserving input order.
    ///
    /// An entry survives iff it matches the category and its own
    /// narrow-or-drop pass against the friend filter keeps something.
    pub fn filter(&self, contacts: &Contacts, items: &[NotificationItem]) -> Vec<NotificationItem> {
        items
            .iter()
            .filter(|item| self.category.matches(item))
            .filter_map(|item| item.filter(|pk| self.friend_filter.matches(contacts, pk)))
            .collect()
    }

    /// Would enabling friends-only change what the current tab shows?
    ///
    /// Gates the friends toggle: there is no point offering it when every
    /// author in the category-filtered set is already in the friendosphere.
    pub fn would_exclude_any(&self, contacts: &Contacts, items: &[NotificationItem]) -> bool {
        items
            .iter()
            .filter(|item| self.category.matches(item))
            .any(|item| item.would_filter(|pk| FriendFilter::Friends.matches(contacts, pk)))
    }
}
