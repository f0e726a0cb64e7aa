pub mod cli;
pub mod config;
pub mod logging;
pub mod manifest;
pub mod timestamp;
pub mod updater;
pub mod version;
