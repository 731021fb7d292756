pub mod core;
pub mod settings;
pub mod types;

pub use self::core::add_friend::AddFriendForm;
pub use self::core::balance::{BalanceStatus, Friend};
pub use self::core::ids::{IdSource, SequentialIds, UuidIds};
pub use self::core::roster::Roster;
pub use self::core::split::SplitDraft;
pub use self::core::state::{reduce, AppState, Mode, SplitSession};
pub use self::core::App;
pub use types::{Action, AddFriendField, FriendId, Payer, SplitField};
