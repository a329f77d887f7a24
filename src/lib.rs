pub mod api;
pub mod config;
pub mod editor;
pub mod errors;
pub mod models;
pub mod stats;
pub mod sync;
