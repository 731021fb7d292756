use tracing::{debug, info};

use self::ids::{IdSource, UuidIds};
use self::roster::Roster;
use self::state::{reduce, AppState, Mode};
use super::settings::Settings;
use super::types::Action;

// submodules live in `src/app/core/`
pub mod add_friend;
pub mod balance;
pub mod ids;
pub mod roster;
pub mod split;
pub mod state;

/// Application shell: owns the screen state and feeds actions through
/// `reduce`, one at a time.
pub struct App {
    pub state: AppState,
    pub settings: Settings,
    ids: Box<dyn IdSource>,
    pub should_quit: bool,
}

impl App {
    /// Build the app from settings, seeding the roster from the configured
    /// friends or the built-in sample roster.
    pub fn new(settings: Settings) -> Self {
        Self::with_ids(settings, UuidIds)
    }

    pub fn with_ids(settings: Settings, ids: impl IdSource + 'static) -> Self {
        let roster = if settings.friends.is_empty() {
            Roster::sample()
        } else {
            settings.friends.iter().cloned().collect()
        };
        let state = AppState::new(roster, settings.avatar_base.clone());
        App {
            state,
            settings,
            ids: Box::new(ids),
            should_quit: false,
        }
    }

    pub fn mode(&self) -> &Mode {
        &self.state.mode
    }

    pub fn roster(&self) -> &Roster {
        &self.state.roster
    }

    /// Run one action through the reducer.
    pub fn dispatch(&mut self, action: Action) {
        let from = self.state.mode.label();
        let settling = self.state.selected_friend().map(|f| (f.id.clone(), f.balance));
        let roster_len = self.state.roster.len();

        let state = std::mem::take(&mut self.state);
        self.state = reduce(state, action.clone());

        debug!(?action, from, to = self.state.mode.label(), "dispatched");
        match action {
            Action::SubmitAddFriend { id } if self.state.roster.len() > roster_len => {
                info!(%id, "friend added");
            }
            Action::SubmitSplit if matches!(self.state.mode, Mode::Idle) => {
                if let Some((id, before)) = settling {
                    let after = self.state.roster.get(&id).map(|f| f.balance);
                    info!(%id, before, ?after, "bill split settled");
                }
            }
            _ => {}
        }
    }

    /// Submit the add-friend form with a freshly drawn id.
    pub fn submit_add_friend(&mut self) {
        let id = self.ids.next_id();
        self.dispatch(Action::SubmitAddFriend { id });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::core::balance::Friend;
    use crate::app::core::ids::SequentialIds;
    use crate::app::types::FriendId;

    #[test]
    fn new_app_uses_sample_roster_without_configured_friends() {
        let app = App::new(Settings::default());
        assert_eq!(app.roster().len(), 3);
        assert_eq!(app.mode(), &Mode::Idle);
        assert!(!app.should_quit);
    }

    #[test]
    fn configured_friends_replace_sample() {
        let settings = Settings {
            friends: vec![Friend::new(FriendId::from("z"), "Zoe", "img").with_balance(5)],
            ..Settings::default()
        };
        let app = App::new(settings);
        assert_eq!(app.roster().len(), 1);
        assert_eq!(app.roster().at(0).map(|f| f.status_line()), Some("Zoe owes you 5$".to_string()));
    }

    #[test]
    fn submit_add_friend_draws_fresh_ids() {
        let mut app = App::with_ids(Settings::default(), SequentialIds::new("id-"));
        for name in ["Mia", "Noa"] {
            app.dispatch(Action::ToggleAddForm);
            app.dispatch(Action::EditName(name.into()));
            app.submit_add_friend();
        }
        let ids: Vec<&str> = app.roster().iter().skip(3).map(|f| f.id.as_str()).collect();
        assert_eq!(ids, ["id-1", "id-2"]);
    }
}
