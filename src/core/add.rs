use chrono::NaiveDate;

use crate::api::SleepApi;
use crate::core::dashboard::Dashboard;
use crate::core::time_resolver::{TimeParsePolicy, resolve_with};
use crate::errors::AppResult;
use crate::models::timestamp::ResolvedTimestamp;

/// High-level business logic for the `add` command.
pub struct AddLogic;

impl AddLogic {
    /// Resolve the form input and send it; returns the timestamp that was
    /// stored.
    pub fn apply<A: SleepApi>(
        dashboard: &Dashboard<A>,
        date: NaiveDate,
        time_text: &str,
        estimated: bool,
        policy: TimeParsePolicy,
    ) -> AppResult<ResolvedTimestamp> {
        let resolved = resolve_with(date, time_text, policy)?;
        dashboard.add_entry(&resolved, estimated)?;
        Ok(resolved)
    }
}
