//! Key handlers: one submodule per mode, each translating key presses into
//! reducer actions.

pub mod add_friend;
pub mod normal;
pub mod split_bill;

pub use add_friend::handle_add_friend;
pub use normal::handle_normal;
pub use split_bill::handle_split_bill;

use crate::app::{App, Mode};
use crate::input::{is_interrupt, KeyCode, KeyEvent};

/// Top-level key handler. Returns `true` when the app should exit.
pub fn handle_key(app: &mut App, key: KeyEvent) -> bool {
    if is_interrupt(&key) {
        app.should_quit = true;
        return true;
    }
    let handler: fn(&mut App, KeyCode) = match app.mode() {
        Mode::Idle => handle_normal,
        Mode::Selected(_) => handle_split_bill,
        Mode::AddingFriend(_) => handle_add_friend,
    };
    handler(app, key.code);
    app.should_quit
}
