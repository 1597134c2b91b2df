pub mod api;
pub mod cli;
pub mod config;
pub mod export;
pub mod logging;
pub mod mutation;
pub mod ui;
pub mod view;
