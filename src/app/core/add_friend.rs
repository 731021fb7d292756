use super::balance::Friend;
use crate::app::types::{AddFriendField, FriendId};

/// Avatar service used when the configuration does not name one.
pub const DEFAULT_AVATAR_BASE: &str = "https://i.pravatar.cc/48";

/// Fields of the add-friend form while it is open.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AddFriendForm {
    pub name: String,
    pub image: String,
    pub focus: AddFriendField,
    default_image: String,
}

impl AddFriendForm {
    /// Empty name, image pre-filled with `default_image`.
    pub fn new(default_image: impl Into<String>) -> Self {
        let default_image = default_image.into();
        AddFriendForm {
            name: String::new(),
            image: default_image.clone(),
            focus: AddFriendField::Name,
            default_image,
        }
    }

    /// Text of the focused field, for editing.
    pub fn focused_text(&self) -> &str {
        match self.focus {
            AddFriendField::Name => &self.name,
            AddFriendField::Image => &self.image,
        }
    }

    /// Build the new friend from the current fields.
    ///
    /// Returns `None` (fields untouched) when the name or image is empty
    /// or blank. The name is stored as typed. On success the fields go back
    /// to their defaults.
    pub fn submit(&mut self, id: FriendId) -> Option<Friend> {
        if self.name.trim().is_empty() || self.image.trim().is_empty() {
            return None;
        }
        let image = avatar_url(&self.image, &id);
        let friend = Friend::new(id, self.name.clone(), image);
        self.reset();
        Some(friend)
    }

    pub fn reset(&mut self) {
        self.name.clear();
        self.image = self.default_image.clone();
        self.focus = AddFriendField::Name;
    }
}

impl Default for AddFriendForm {
    fn default() -> Self {
        AddFriendForm::new(DEFAULT_AVATAR_BASE)
    }
}

/// Append the friend's id to `base` as the `u` query parameter so two
/// friends sharing a base URL still get distinct avatars.
pub fn avatar_url(base: &str, id: &FriendId) -> String {
    let sep = if base.contains('?') { '&' } else { '?' };
    format!("{}{}u={}", base, sep, id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn submit_builds_settled_friend_and_resets() {
        let mut form = AddFriendForm::default();
        form.name = "Mia".into();
        form.focus = AddFriendField::Image;

        let friend = form.submit(FriendId::from("abc")).unwrap();
        assert_eq!(friend.name, "Mia");
        assert_eq!(friend.balance, 0);
        assert_eq!(friend.image, "https://i.pravatar.cc/48?u=abc");

        assert_eq!(form, AddFriendForm::default());
    }

    #[test]
    fn submit_rejects_missing_fields_and_keeps_values() {
        let mut form = AddFriendForm::default();
        form.name = "   ".into();
        assert!(form.submit(FriendId::from("1")).is_none());
        assert_eq!(form.name, "   ");

        form.name = "Ana".into();
        form.image.clear();
        assert!(form.submit(FriendId::from("2")).is_none());
        assert_eq!(form.name, "Ana");
        assert_eq!(form.image, "");
    }

    #[test]
    fn name_is_stored_as_typed() {
        let mut form = AddFriendForm::default();
        form.name = " Mia ".into();
        let friend = form.submit(FriendId::from("m")).unwrap();
        assert_eq!(friend.name, " Mia ");
        assert_eq!(friend.status_line(), "You are even with  Mia ");
    }

    #[test]
    fn avatar_url_respects_existing_query() {
        let id = FriendId::from("7");
        assert_eq!(avatar_url("https://a.test/img", &id), "https://a.test/img?u=7");
        assert_eq!(avatar_url("https://a.test/img?s=48", &id), "https://a.test/img?s=48&u=7");
    }

    #[test]
    fn reset_uses_configured_default_image() {
        let mut form = AddFriendForm::new("https://avatars.test/x");
        form.name = "Bo".into();
        assert!(form.submit(FriendId::from("9")).is_some());
        assert_eq!(form.image, "https://avatars.test/x");
        assert_eq!(form.focused_text(), "");
    }
}
