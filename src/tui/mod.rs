pub mod app;
pub mod handlers;
pub mod keyboard;
pub mod search;
pub mod ui;
