pub mod adjustments;
pub mod chat;
pub mod config;
pub mod entries;
pub mod payments;
pub mod reports;
pub mod workers;
