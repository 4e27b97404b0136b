pub mod chart;
pub mod messages;
pub mod stats;
