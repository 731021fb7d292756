use crate::app::types::FriendId;
use uuid::Uuid;

/// Source of fresh friend identifiers.
pub trait IdSource {
    fn next_id(&mut self) -> FriendId;
}

/// Random v4 UUIDs.
#[derive(Debug, Default, Clone, Copy)]
pub struct UuidIds;

impl IdSource for UuidIds {
    fn next_id(&mut self) -> FriendId {
        FriendId::new(Uuid::new_v4().to_string())
    }
}

/// Deterministic ids `<prefix>1`, `<prefix>2`, ... for tests and demos.
#[derive(Debug, Clone)]
pub struct SequentialIds {
    prefix: String,
    next: u64,
}

impl SequentialIds {
    pub fn new(prefix: impl Into<String>) -> Self {
        SequentialIds {
            prefix: prefix.into(),
            next: 1,
        }
    }
}

impl IdSource for SequentialIds {
    fn next_id(&mut self) -> FriendId {
        let id = FriendId::new(format!("{}{}", self.prefix, self.next));
        self.next += 1;
        id
    }
}
