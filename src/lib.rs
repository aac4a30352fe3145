pub mod api;
pub mod commands;
pub mod config;
pub mod detail;
pub mod enrich;
pub mod error;
pub mod format;
pub mod logging;
pub mod models;
pub mod render;
pub mod view;

#[cfg(test)]
mod testing;
