use super::add_friend::{AddFriendForm, DEFAULT_AVATAR_BASE};
use super::balance::Friend;
use super::roster::Roster;
use super::split::SplitDraft;
use crate::app::types::{Action, FriendId, SplitField};

/// A selected friend together with the split being drafted for them. The
/// draft lives and dies with the selection.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SplitSession {
    pub friend_id: FriendId,
    pub draft: SplitDraft,
    pub focus: SplitField,
}

impl SplitSession {
    pub fn new(friend_id: FriendId) -> Self {
        SplitSession {
            friend_id,
            draft: SplitDraft::new(),
            focus: SplitField::Bill,
        }
    }
}

/// What the screen is doing besides listing friends. At most one of
/// "a friend is selected" and "the add-friend form is open" holds.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Mode {
    #[default]
    Idle,
    Selected(SplitSession),
    AddingFriend(AddFriendForm),
}

impl Mode {
    pub fn selected_id(&self) -> Option<&FriendId> {
        match self {
            Mode::Selected(session) => Some(&session.friend_id),
            _ => None,
        }
    }

    pub fn is_adding_friend(&self) -> bool {
        matches!(self, Mode::AddingFriend(_))
    }

    pub fn label(&self) -> &'static str {
        match self {
            Mode::Idle => "idle",
            Mode::Selected(_) => "selected",
            Mode::AddingFriend(_) => "adding-friend",
        }
    }
}

/// Complete state of the bill-splitting screen.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppState {
    pub roster: Roster,
    pub mode: Mode,
    /// Highlighted roster row for keyboard navigation (not the selection).
    pub cursor: usize,
    /// Image URL a freshly opened add-friend form starts with.
    pub avatar_base: String,
}

impl AppState {
    pub fn new(roster: Roster, avatar_base: impl Into<String>) -> Self {
        AppState {
            roster,
            mode: Mode::Idle,
            cursor: 0,
            avatar_base: avatar_base.into(),
        }
    }

    pub fn highlighted(&self) -> Option<&Friend> {
        self.roster.at(self.cursor)
    }

    pub fn selected_friend(&self) -> Option<&Friend> {
        self.mode.selected_id().and_then(|id| self.roster.get(id))
    }
}

impl Default for AppState {
    fn default() -> Self {
        AppState::new(Roster::new(), DEFAULT_AVATAR_BASE)
    }
}

/// Apply one action to `state` and return the next state.
///
/// Never fails: actions whose preconditions do not hold (a form action with
/// the form closed, an incomplete submission, an unknown friend) return the
/// state unchanged.
pub fn reduce(mut state: AppState, action: Action) -> AppState {
    match action {
        Action::ToggleAddForm => {
            state.mode = match state.mode {
                Mode::AddingFriend(_) => Mode::Idle,
                _ => Mode::AddingFriend(AddFriendForm::new(state.avatar_base.clone())),
            };
        }
        Action::SelectFriend(id) => select(&mut state, id),
        Action::SelectHighlighted => {
            if let Some(id) = state.highlighted().map(|f| f.id.clone()) {
                select(&mut state, id);
            }
        }
        Action::CursorUp => state.cursor = state.cursor.saturating_sub(1),
        Action::CursorDown => {
            if state.cursor + 1 < state.roster.len() {
                state.cursor += 1;
            }
        }
        Action::FocusNext => move_focus(&mut state, true),
        Action::FocusPrev => move_focus(&mut state, false),
        Action::EditName(text) => {
            if let Mode::AddingFriend(form) = &mut state.mode {
                form.name = text;
            }
        }
        Action::EditImage(text) => {
            if let Mode::AddingFriend(form) = &mut state.mode {
                form.image = text;
            }
        }
        Action::SubmitAddFriend { id } => {
            if let Mode::AddingFriend(form) = &mut state.mode {
                if let Some(friend) = form.submit(id) {
                    state.roster.append(friend);
                    state.mode = Mode::Idle;
                }
            }
        }
        Action::EditBill(bill) => {
            if let Mode::Selected(session) = &mut state.mode {
                session.draft.set_bill(bill);
            }
        }
        Action::EditUserPaid(paid) => {
            if let Mode::Selected(session) = &mut state.mode {
                session.draft.set_user_paid(paid);
            }
        }
        Action::SetPayer(payer) => {
            if let Mode::Selected(session) = &mut state.mode {
                session.draft.payer = payer;
            }
        }
        Action::TogglePayer => {
            if let Mode::Selected(session) = &mut state.mode {
                session.draft.payer = session.draft.payer.toggled();
            }
        }
        Action::SubmitSplit => {
            if let Mode::Selected(session) = &state.mode {
                if let Some(delta) = session.draft.settlement_delta() {
                    state.roster.apply_settlement(&session.friend_id, delta);
                    state.mode = Mode::Idle;
                }
            }
        }
    }
    state
}

fn move_focus(state: &mut AppState, forward: bool) {
    match &mut state.mode {
        Mode::AddingFriend(form) => form.focus = form.focus.next(),
        Mode::Selected(session) => {
            session.focus = if forward {
                session.focus.next()
            } else {
                session.focus.prev()
            };
        }
        Mode::Idle => {}
    }
}

fn select(state: &mut AppState, id: FriendId) {
    let Some(position) = state.roster.position(&id) else {
        return;
    };
    if state.mode.selected_id() == Some(&id) {
        state.mode = Mode::Idle;
    } else {
        state.cursor = position;
        state.mode = Mode::Selected(SplitSession::new(id));
    }
}
