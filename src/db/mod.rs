pub mod app_log;
pub mod audit;
pub mod db_utils;
pub mod initialize;
pub mod migrate;
pub mod pool;
pub mod stats;
pub mod streaks;
