pub mod app;
pub mod config;
pub mod content;
pub mod solution;
pub mod util;
