pub mod app;
pub mod catalog;
pub mod command;
pub mod config;
pub mod error;
pub mod event;
pub mod gesture;
pub mod input;
pub mod logging;
pub mod nav;
pub mod selection;
pub mod theme;
pub mod ui;
