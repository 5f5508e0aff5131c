use std::collections::HashSet;

/// Contact graph for the signed-in user.
///
/// The "friendosphere" is the user themselves, everyone they follow, and
/// everyone those follows follow. Friend-filtered views admit exactly this set.
#[derive(Debug, Clone, Default)]
pub struct Contacts {
    our_pubkey: String,
    friends: HashSet<String>,
    friend_of_friends: HashSet<String>,
}

impl Contacts {
    pub fn new(our_pubkey: impl Into<String>) -> Self {
        Self {
            our_pubkey: our_pubkey.into(),
            friends: HashSet::new(),
            friend_of_friends: HashSet::new(),
        }
    }

    pub fn our_pubkey(&self) -> &str {
        &self.our_pubkey
    }

    pub fn add_friend(&mut self, pubkey: &str) {
        self.friends.insert(pubkey.to_string());
    }

    pub fn add_friend_of_friend(&mut self, pubkey: &str) {
        self.friend_of_friends.insert(pubkey.to_string());
    }

    pub fn is_friend(&self, pubkey: &str) -> bool {
        self.friends.contains(pubkey)
    }

    pub fn is_friend_or_self(&self, pubkey: &str) -> bool {
        pubkey == self.our_pubkey || self.is_friend(pubkey)
    }

    pub fn is_in_friendosphere(&self, pubkey: &str) -> bool {
        self.is_friend_or_self(pubkey) || self.friend_of_friends.contains(pubkey)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_friendosphere_membership() {
        let mut contacts = Contacts::new("me");
        contacts.add_friend("alice");
        contacts.add_friend_of_friend("bob");

        assert!(contacts.is_in_friendosphere("me"));
        assert!(contacts.is_in_friendosphere("alice"));
        assert!(contacts.is_in_friendosphere("bob"));
        assert!(!contacts.is_in_friendosphere("mallory"));
    }

    #[test]
    fn test_friend_of_friend_is_not_a_friend() {
        let mut contacts = Contacts::new("me");
        contacts.add_friend_of_friend("bob");

        assert!(!contacts.is_friend("bob"));
        assert!(!contacts.is_friend_or_self("bob"));
        assert!(contacts.is_in_friendosphere("bob"));
    }
}
