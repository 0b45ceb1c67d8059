//! GUI module - User interface components

mod app;
mod gallery;
mod images;
mod nav_panel;
mod pages;
mod widgets;

pub use app::DashboardApp;
