pub mod add;
pub mod chart;
pub mod config;
pub mod del;
pub mod entries;
pub mod init;
pub mod resolve;
pub mod stats;

use chrono::NaiveDate;

use crate::api::ApiClient;
use crate::config::Config;
use crate::core::dashboard::Dashboard;
use crate::errors::{AppError, AppResult};
use crate::utils::date;

/// Dashboard backed by the API configured in `cfg`.
pub(crate) fn open_dashboard(cfg: &Config) -> AppResult<Dashboard<ApiClient>> {
    tracing::debug!(api = %cfg.api_url, "connecting");
    Ok(Dashboard::new(ApiClient::from_config(cfg)?))
}

/// Date argument of the form commands, defaulting to today.
pub(crate) fn date_or_today(arg: &Option<String>) -> AppResult<NaiveDate> {
    match arg {
        Some(s) => date::parse_date_arg(s).ok_or_else(|| AppError::InvalidDate(s.to_string())),
        None => Ok(date::today()),
    }
}
