pub mod config;
pub mod create;
pub mod del;
pub mod list;
pub mod log;
pub mod reset;
