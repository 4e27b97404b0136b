use crate::api::SleepApi;
use crate::core::replay::ReplayCell;
use crate::errors::AppResult;
use crate::models::entry::Entry;
use crate::models::new_entry::NewEntry;
use crate::models::stats::Stats;
use crate::models::timestamp::ResolvedTimestamp;

/// Entry list and stats of one API, kept fresh across mutations.
///
/// Every add/remove is followed by exactly one re-fetch of the entry list;
/// stats are re-fetched too once somebody has read or subscribed to them.
/// A mutation the server accepted is reported as done even when that
/// re-fetch fails; the caches are then dropped so the next read retries.
pub struct Dashboard<A: SleepApi> {
    api: A,
    entries: ReplayCell<Vec<Entry>>,
    stats: ReplayCell<Stats>,
}

impl<A: SleepApi> Dashboard<A> {
    pub fn new(api: A) -> Self {
        Self {
            api,
            entries: ReplayCell::new(),
            stats: ReplayCell::new(),
        }
    }

    pub fn entries(&self) -> AppResult<Vec<Entry>> {
        self.entries.get_or_fetch(|| self.api.get_entries())
    }

    pub fn stats(&self) -> AppResult<Stats> {
        self.stats.get_or_fetch(|| self.api.get_stats())
    }

    pub fn on_entries<F>(&self, observer: F)
    where
        F: Fn(&Vec<Entry>) + Send + Sync + 'static,
    {
        self.entries.subscribe(observer);
    }

    pub fn on_stats<F>(&self, observer: F)
    where
        F: Fn(&Stats) + Send + Sync + 'static,
    {
        self.stats.subscribe(observer);
    }

    pub fn add_entry(&self, time: &ResolvedTimestamp, estimated: bool) -> AppResult<()> {
        let body = NewEntry::new(time, estimated);
        tracing::info!(time = %body.time, estimated, "adding entry");
        self.after_mutation(self.api.add_entry(&body))
    }

    pub fn remove_last(&self) -> AppResult<()> {
        tracing::info!("removing most recent entry");
        self.after_mutation(self.api.remove_entry())
    }

    /// Re-fetch everything that is currently being watched.
    pub fn reload(&self) -> AppResult<()> {
        self.entries.reload(|| self.api.get_entries())?;
        if self.stats.latest().is_some() || self.stats.has_observers() {
            self.stats.reload(|| self.api.get_stats())?;
        }
        Ok(())
    }

    fn after_mutation(&self, outcome: AppResult<()>) -> AppResult<()> {
        if let Err(e) = outcome {
            tracing::warn!(error = %e, "request failed, dropping cached state");
            self.invalidate();
            return Err(e);
        }

        if let Err(e) = self.reload() {
            tracing::warn!(error = %e, "change saved but refresh failed, dropping cached state");
            self.invalidate();
        }
        Ok(())
    }

    fn invalidate(&self) {
        self.entries.invalidate();
        self.stats.invalidate();
    }
}
