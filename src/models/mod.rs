pub mod entry;
pub mod new_entry;
pub mod sleep_state;
pub mod stats;
pub mod timestamp;
