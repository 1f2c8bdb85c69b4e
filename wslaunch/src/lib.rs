// Library interface for testing
// This exposes internal modules for integration testing

pub mod app;
pub mod dispatcher;
pub mod logging;
pub mod path_guard;
pub mod repository;
pub mod settings;
pub mod single_instance;
pub mod terminal;
pub mod ui;
