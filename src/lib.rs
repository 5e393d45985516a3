pub mod commands;
pub mod config;
pub mod icon;
pub mod utils;
