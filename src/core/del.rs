use crate::api::SleepApi;
use crate::core::dashboard::Dashboard;
use crate::errors::{AppError, AppResult};
use crate::models::entry::Entry;

pub struct DeleteLogic;

impl DeleteLogic {
    /// The entry a removal would delete.
    pub fn preview<A: SleepApi>(dashboard: &Dashboard<A>) -> AppResult<Entry> {
        dashboard
            .entries()?
            .iter()
            .max()
            .copied()
            .ok_or_else(|| AppError::Other("No entries to remove".into()))
    }

    /// Remove the most recent entry; arbitrary deletion is not supported.
    pub fn apply<A: SleepApi>(dashboard: &Dashboard<A>) -> AppResult<()> {
        dashboard.remove_last()
    }
}
