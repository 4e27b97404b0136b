use serde::Serialize;

/// State of the user between two consecutive entries.
///
/// Entries carry no explicit state: it is implied by alternation, so the
/// state of a span is a pure function of the global index of the entry that
/// closes it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SleepState {
    Awake,
    Asleep,
}

impl SleepState {
    /// State of the span that ends at entry `index`.
    ///
    /// With `start_parity == 0`, even indices are awake and odd ones asleep;
    /// any odd `start_parity` flips the mapping.
    pub fn from_index(index: usize, start_parity: usize) -> Self {
        if (index + start_parity) % 2 == 0 {
            SleepState::Awake
        } else {
            SleepState::Asleep
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SleepState::Awake => "awake",
            SleepState::Asleep => "asleep",
        }
    }
}
