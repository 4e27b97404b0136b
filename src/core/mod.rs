pub mod add;
pub mod calculator;
pub mod config;
pub mod dashboard;
pub mod del;
pub mod logic;
pub mod replay;
pub mod time_resolver;
