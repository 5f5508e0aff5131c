/// A single entry in the notification feed.
///
/// Zaps and reactions arrive grouped: one feed entry can aggregate sub-events
/// from several authors targeting the same note. `pubkey` is the primary
/// (most recent) author; for grouped entries it is re-derived whenever the
/// group is narrowed.
#[derive(Debug, Clone, PartialEq)]
pub struct NotificationItem {
    pub id: String,
    pub pubkey: String,
    pub created_at: u64,
    pub content: NotificationContent,
}

#[derive(Debug, Clone, PartialEq)]
pub enum NotificationContent {
    Reply(ReplyInfo),
    Zap(ZapGroup),
    Reaction(ReactionGroup),
}

/// A reply to one of the user's notes.
#[derive(Debug, Clone, PartialEq)]
pub struct ReplyInfo {
    /// The user's note being replied to.
    pub note_id: String,
}

/// Zaps grouped by target note, most recent sender first.
#[derive(Debug, Clone, PartialEq)]
pub struct ZapGroup {
    pub zaps: Vec<ZapInfo>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ZapInfo {
    pub sender: String,
    pub amount_msat: u64,
}

impl ZapGroup {
    pub fn total_msat(&self) -> u64 {
        self.zaps.iter().map(|z| z.amount_msat).sum()
    }
}

/// Reactions grouped by target note, most recent first.
#[derive(Debug, Clone, PartialEq)]
pub struct ReactionGroup {
    pub reactions: Vec<Reaction>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Reaction {
    pub pubkey: String,
    pub content: String,
}

impl NotificationItem {
    pub fn reply(id: impl Into<String>, pubkey: impl Into<String>, created_at: u64, info: ReplyInfo) -> Self {
        Self {
            id: id.into(),
            pubkey: pubkey.into(),
            created_at,
            content: NotificationContent::Reply(info),
        }
    }

    /// Build a grouped zap entry. The primary author is the first sender.
    pub fn zaps(id: impl Into<String>, created_at: u64, zaps: Vec<ZapInfo>) -> Option<Self> {
        let pubkey = zaps.first()?.sender.clone();
        Some(Self {
            id: id.into(),
            pubkey,
            created_at,
            content: NotificationContent::Zap(ZapGroup { zaps }),
        })
    }

    /// Build a grouped reaction entry. The primary author is the first reactor.
    pub fn reactions(id: impl Into<String>, created_at: u64, reactions: Vec<Reaction>) -> Option<Self> {
        let pubkey = reactions.first()?.pubkey.clone();
        Some(Self {
            id: id.into(),
            pubkey,
            created_at,
            content: NotificationContent::Reaction(ReactionGroup { reactions }),
        })
    }

    pub fn is_zap(&self) -> Option<&ZapGroup> {
        match &self.content {
            NotificationContent::Zap(group) => Some(group),
            _ => None,
        }
    }

    pub fn is_reply(&self) -> Option<&ReplyInfo> {
        match &self.content {
            NotificationContent::Reply(info) => Some(info),
            _ => None,
        }
    }

    /// Narrow-or-drop: keep only sub-events whose author passes `keep`.
    ///
    /// Single-author entries are kept whole or dropped. Grouped entries come
    /// back as a narrowed copy with the primary pubkey re-derived from the
    /// surviving sub-events, or `None` when nothing survives.
    pub fn filter(&self, keep: impl Fn(&str) -> bool) -> Option<NotificationItem> {
        match &self.content {
            NotificationContent::Reply(_) => keep(&self.pubkey).then(|| self.clone()),
            NotificationContent::Zap(group) => {
                let zaps: Vec<ZapInfo> = group.zaps.iter().filter(|z| keep(&z.sender)).cloned().collect();
                let pubkey = zaps.first()?.sender.clone();
                Some(NotificationItem {
                    id: self.id.clone(),
                    pubkey,
                    created_at: self.created_at,
                    content: NotificationContent::Zap(ZapGroup { zaps }),
                })
            }
            NotificationContent::Reaction(group) => {
                let reactions: Vec<Reaction> =
                    group.reactions.iter().filter(|r| keep(&r.pubkey)).cloned().collect();
                let pubkey = reactions.first()?.pubkey.clone();
                Some(NotificationItem {
                    id: self.id.clone(),
                    pubkey,
                    created_at: self.created_at,
                    content: NotificationContent::Reaction(ReactionGroup { reactions }),
                })
            }
        }
    }

    /// Read-only probe: would `filter(keep)` narrow or drop this entry?
    pub fn would_filter(&self, keep: impl Fn(&str) -> bool) -> bool {
        match &self.content {
            NotificationContent::Reply(_) => !keep(&self.pubkey),
            NotificationContent::Zap(group) => group.zaps.iter().any(|z| !keep(&z.sender)),
            NotificationContent::Reaction(group) => group.reactions.iter().any(|r| !keep(&r.pubkey)),
        }
    }
}
