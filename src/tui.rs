//! Terminal UI: a menu to configure a match and a table view to play it.

pub mod app;
pub mod controller;
mod ui;
