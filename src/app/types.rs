use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque identifier of a friend. Unique within a roster; the value itself
/// carries no meaning beyond equality.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FriendId(String);

impl FriendId {
    pub fn new(raw: impl Into<String>) -> Self {
        FriendId(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FriendId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for FriendId {
    fn from(s: &str) -> Self {
        FriendId::new(s)
    }
}

impl From<String> for FriendId {
    fn from(s: String) -> Self {
        FriendId(s)
    }
}

/// Which party fronted the whole bill.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Payer {
    #[default]
    User,
    Friend,
}

impl Payer {
    pub fn toggled(self) -> Self {
        match self {
            Payer::User => Payer::Friend,
            Payer::Friend => Payer::User,
        }
    }
}

/// Input field of the add-friend form that currently has focus.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AddFriendField {
    #[default]
    Name,
    Image,
}

impl AddFriendField {
    pub fn next(self) -> Self {
        match self {
            AddFriendField::Name => AddFriendField::Image,
            AddFriendField::Image => AddFriendField::Name,
        }
    }
}

/// Input field of the split-bill form that currently has focus. The
/// friend's share is derived and never focusable.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SplitField {
    #[default]
    Bill,
    UserPaid,
    Payer,
}

impl SplitField {
    pub fn next(self) -> Self {
        match self {
            SplitField::Bill => SplitField::UserPaid,
            SplitField::UserPaid => SplitField::Payer,
            SplitField::Payer => SplitField::Bill,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            SplitField::Bill => SplitField::Payer,
            SplitField::UserPaid => SplitField::Bill,
            SplitField::Payer => SplitField::UserPaid,
        }
    }
}

/// Every user-initiated event the reducer understands.
///
/// Actions that target a form are ignored unless that form is open, so the
/// key handlers can emit them without first inspecting the mode.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Action {
    /// Show the add-friend form, or hide it if already shown.
    ToggleAddForm,
    /// Select a friend; selecting the selected friend clears the selection.
    SelectFriend(FriendId),
    /// `SelectFriend` for the friend under the cursor.
    SelectHighlighted,
    CursorUp,
    CursorDown,
    FocusNext,
    FocusPrev,
    EditName(String),
    EditImage(String),
    /// Submit the add-friend form using the freshly drawn `id`.
    SubmitAddFriend { id: FriendId },
    EditBill(Option<i64>),
    EditUserPaid(Option<i64>),
    SetPayer(Payer),
    TogglePayer,
    SubmitSplit,
}
