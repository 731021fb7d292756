use super::balance::Friend;
use crate::app::types::FriendId;

/// Ordered list of friends. Insertion order is display order and friends
/// are never removed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Roster {
    friends: Vec<Friend>,
}

impl Roster {
    pub fn new() -> Self {
        Roster::default()
    }

    /// Append `friend` at the end. Id uniqueness is the caller's concern.
    pub fn append(&mut self, friend: Friend) {
        self.friends.push(friend);
    }

    /// Add `delta` to the balance of the friend with `id`.
    ///
    /// Returns `false` and leaves the roster untouched when no friend has
    /// that id.
    pub fn apply_settlement(&mut self, id: &FriendId, delta: i64) -> bool {
        match self.friends.iter_mut().find(|f| &f.id == id) {
            Some(friend) => {
                friend.balance = friend.balance.saturating_add(delta);
                true
            }
            None => false,
        }
    }

    pub fn get(&self, id: &FriendId) -> Option<&Friend> {
        self.friends.iter().find(|f| &f.id == id)
    }

    pub fn position(&self, id: &FriendId) -> Option<usize> {
        self.friends.iter().position(|f| &f.id == id)
    }

    pub fn at(&self, index: usize) -> Option<&Friend> {
        self.friends.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Friend> {
        self.friends.iter()
    }

    pub fn len(&self) -> usize {
        self.friends.len()
    }

    pub fn is_empty(&self) -> bool {
        self.friends.is_empty()
    }

    /// Roster used when no friends are configured.
    pub fn sample() -> Self {
        let seed = [("118836", "Clark", -7), ("933372", "Sarah", 20), ("499476", "Anthony", 0)];
        seed.into_iter()
            .map(|(id, name, balance)| {
                Friend::new(
                    FriendId::from(id),
                    name,
                    format!("https://i.pravatar.cc/48?u={}", id),
                )
                .with_balance(balance)
            })
            .collect()
    }
}

impl FromIterator<Friend> for Roster {
    fn from_iter<I: IntoIterator<Item = Friend>>(iter: I) -> Self {
        Roster {
            friends: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Roster {
    type Item = &'a Friend;
    type IntoIter = std::slice::Iter<'a, Friend>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
