pub mod add_friend_form;
pub mod footer;
pub mod friend_list;
pub mod header;
pub mod split_form;
