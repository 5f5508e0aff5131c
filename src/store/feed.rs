use std::sync::mpsc::{channel, Receiver, Sender};

use crate::models::{Contacts, FilterState, NotificationCategory, NotificationItem};
use crate::store::SettingsStore;

/// Change notifications emitted by [`NotificationFeed`] for the view layer.
#[derive(Debug, Clone, PartialEq)]
pub enum FeedEvent {
    FilterChanged(FilterState),
}

/// Controller for one user's notification feed view.
///
/// Owns the active [`FilterState`], loads it from settings when the view
/// appears, writes each axis through on mutation, and fans change events out
/// to subscribers. All mutation happens on the UI's sequencing context; a
/// second feed over the same settings file is last-write-wins.
pub struct NotificationFeed {
    settings: SettingsStore,
    pubkey: String,
    filter: FilterState,
    subscribers: Vec<Sender<FeedEvent>>,
}

impl NotificationFeed {
    pub fn new(settings: SettingsStore, pubkey: impl Into<String>) -> Self {
        Self {
            settings,
            pubkey: pubkey.into(),
            filter: FilterState::default(),
            subscribers: Vec::new(),
        }
    }

    pub fn filter_state(&self) -> FilterState {
        self.filter
    }

    pub fn settings(&self) -> &SettingsStore {
        &self.settings
    }

    /// Register a change listener. Dropped receivers are pruned on the next
    /// emit.
    pub fn subscribe(&mut self) -> Receiver<FeedEvent> {
        let (tx, rx) = channel();
        self.subscribers.push(tx);
        rx
    }

    fn emit_filter_changed(&mut self) {
        let event = FeedEvent::FilterChanged(self.filter);
        self.subscribers.retain(|tx| tx.send(event.clone()).is_ok());
    }

    /// View-appear hook: replace the in-memory state with the persisted one.
    ///
    /// Both axes are overwritten, not merged; whatever the feed held before
    /// first appearance is discarded. Does not write back.
    pub fn on_appear(&mut self) {
        let loaded = self.settings.load_filter_state(&self.pubkey);
        if loaded != self.filter {
            self.filter = loaded;
            self.emit_filter_changed();
        }
    }

    /// Tab selection. Persists and notifies only on an actual change.
    pub fn select_category(&mut self, category: NotificationCategory) {
        if self.filter.category == category {
            return;
        }
        self.filter.category = category;
        self.settings.save_category(&self.pubkey, category);
        self.emit_filter_changed();
    }

    /// Friends-only toggle tap.
    pub fn toggle_friend_filter(&mut self) {
        self.filter.toggle_friend_filter();
        self.settings.save_friend_filter(&self.pubkey, self.filter.friend_filter);
        self.emit_filter_changed();
    }

    /// On/off binding for the friends toggle control.
    pub fn set_friends_only(&mut self, on: bool) {
        if self.filter.friends_only() == on {
            return;
        }
        self.filter.set_friends_only(on);
        self.settings.save_friend_filter(&self.pubkey, self.filter.friend_filter);
        self.emit_filter_changed();
    }

    /// Items to render for the current filter state, in input order.
    pub fn visible(&self, contacts: &Contacts, items: &[NotificationItem]) -> Vec<NotificationItem> {
        self.filter.filter(contacts, items)
    }

    /// Whether the friends-only toggle should be offered at all for the
    /// current tab's content.
    pub fn should_show_friends_toggle(&self, contacts: &Contacts, items: &[NotificationItem]) -> bool {
        self.filter.would_exclude_any(contacts, items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CoreConfig;
    use crate::models::{FriendFilter, ReplyInfo, ZapInfo};
    use tempfile::tempdir;

    fn open_store(dir: &std::path::Path) -> SettingsStore {
        SettingsStore::open(&CoreConfig::new(dir)).unwrap()
    }

    #[test]
    fn test_on_appear_replaces_default_state_with_persisted() {
        let dir = tempdir().unwrap();
        let mut store = open_store(dir.path());
        store.save_category("pk1", NotificationCategory::Zaps);
        store.save_friend_filter("pk1", FriendFilter::Friends);

        let mut feed = NotificationFeed::new(open_store(dir.path()), "pk1");
        assert_eq!(feed.filter_state(), FilterState::default());
        let rx = feed.subscribe();

        feed.on_appear();

        let expected = FilterState::new(NotificationCategory::Zaps, FriendFilter::Friends);
        assert_eq!(feed.filter_state(), expected);
        assert_eq!(rx.try_recv().unwrap(), FeedEvent::FilterChanged(expected));
    }

    #[test]
    fn test_on_appear_is_quiet_when_nothing_was_persisted() {
        let dir = tempdir().unwrap();
        let mut feed = NotificationFeed::new(open_store(dir.path()), "pk1");
        let rx = feed.subscribe();

        feed.on_appear();

        assert_eq!(feed.filter_state(), FilterState::default());
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn test_mutations_persist_write_through() {
        let dir = tempdir().unwrap();
        let mut feed = NotificationFeed::new(open_store(dir.path()), "pk1");

        feed.select_category(NotificationCategory::Zaps);
        feed.toggle_friend_filter();

        // A fresh store over the same file sees both axes.
        let reopened = open_store(dir.path());
        assert_eq!(
            reopened.load_filter_state("pk1"),
            FilterState::new(NotificationCategory::Zaps, FriendFilter::Friends)
        );
    }

    #[test]
    fn test_subscribers_receive_change_events() {
        let dir = tempdir().unwrap();
        let mut feed = NotificationFeed::new(open_store(dir.path()), "pk1");
        let rx = feed.subscribe();

        feed.select_category(NotificationCategory::Replies);
        feed.set_friends_only(true);

        assert_eq!(
            rx.try_recv().unwrap(),
            FeedEvent::FilterChanged(FilterState::new(
                NotificationCategory::Replies,
                FriendFilter::All
            ))
        );
        assert_eq!(
            rx.try_recv().unwrap(),
            FeedEvent::FilterChanged(FilterState::new(
                NotificationCategory::Replies,
                FriendFilter::Friends
            ))
        );
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn test_unchanged_mutations_do_not_save_or_notify() {
        let dir = tempdir().unwrap();
        let mut feed = NotificationFeed::new(open_store(dir.path()), "pk1");
        let rx = feed.subscribe();

        feed.select_category(NotificationCategory::All);
        feed.set_friends_only(false);

        assert!(rx.try_recv().is_err());
        assert!(feed.settings().get("pk1", crate::store::NOTIFICATION_FILTER_STATE).is_none());
    }

    #[test]
    fn test_dropped_subscribers_are_pruned() {
        let dir = tempdir().unwrap();
        let mut feed = NotificationFeed::new(open_store(dir.path()), "pk1");
        let dead = feed.subscribe();
        drop(dead);
        let live = feed.subscribe();

        feed.toggle_friend_filter();
        assert!(live.try_recv().is_ok());
    }

    #[test]
    fn test_feed_queries_delegate_to_filter_state() {
        let dir = tempdir().unwrap();
        let mut feed = NotificationFeed::new(open_store(dir.path()), "me");

        let mut contacts = Contacts::new("me");
        contacts.add_friend("friend");
        let items = vec![
            NotificationItem::zaps(
                "a",
                100,
                vec![ZapInfo {
                    sender: "friend".to_string(),
                    amount_msat: 1000,
                }],
            )
            .unwrap(),
            NotificationItem::reply(
                "b",
                "stranger",
                101,
                ReplyInfo {
                    note_id: "note1".to_string(),
                },
            ),
        ];

        assert!(feed.should_show_friends_toggle(&contacts, &items));

        feed.set_friends_only(true);
        let ids: Vec<String> = feed.visible(&contacts, &items).into_iter().map(|i| i.id).collect();
        assert_eq!(ids, ["a"]);
    }
}
