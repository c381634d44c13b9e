pub mod api;
pub mod app;
pub mod charts;
pub mod config;
pub mod controls;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod monthly;
pub mod mood;
pub mod page;
pub mod session;
pub mod state;
pub mod submit;
pub mod toast;
pub mod ui;
pub mod weekly;

#[cfg(test)]
mod test_utils;

pub use api::{HttpApi, MoodApi};
pub use app::{dispatch, Action};
pub use config::DashboardConfig;
pub use page::{Page, Widgets};
pub use state::AppState;
