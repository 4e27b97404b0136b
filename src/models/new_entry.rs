use serde::Serialize;

use super::timestamp::ResolvedTimestamp;

/// Body of `POST /api/entry`.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct NewEntry {
    pub time: String,
    pub estimated: bool,
}

impl NewEntry {
    pub fn new(time: &ResolvedTimestamp, estimated: bool) -> Self {
        Self {
            time: time.to_wire(),
            estimated,
        }
    }
}
