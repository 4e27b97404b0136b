//! Access to the remote sleep tracking API.

pub mod client;

pub use client::ApiClient;

use crate::errors::AppResult;
use crate::models::entry::Entry;
use crate::models::new_entry::NewEntry;
use crate::models::stats::Stats;

/// Operations offered by the server. Storage and statistics live there; the
/// client only reads and toggles.
pub trait SleepApi {
    /// `GET /api/entries`, in the order the server returns them.
    fn get_entries(&self) -> AppResult<Vec<Entry>>;

    /// `POST /api/entry`.
    fn add_entry(&self, entry: &NewEntry) -> AppResult<()>;

    /// `DELETE /api/entry`: removes the most recent entry.
    fn remove_entry(&self) -> AppResult<()>;

    /// `GET /api/stats`.
    fn get_stats(&self) -> AppResult<Stats>;
}

impl<T: SleepApi + ?Sized> SleepApi for &T {
    fn get_entries(&self) -> AppResult<Vec<Entry>> {
        (**self).get_entries()
    }

    fn add_entry(&self, entry: &NewEntry) -> AppResult<()> {
        (**self).add_entry(entry)
    }

    fn remove_entry(&self) -> AppResult<()> {
        (**self).remove_entry()
    }

    fn get_stats(&self) -> AppResult<Stats> {
        (**self).get_stats()
    }
}
