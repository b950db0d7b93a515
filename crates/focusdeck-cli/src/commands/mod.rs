pub mod auth;
pub mod calendar;
pub mod config;
pub mod plan;
pub mod profile;
pub mod project;
pub mod stats;
pub mod tag;
pub mod task;
pub mod timer;
