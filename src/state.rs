use crate::config::DashboardConfig;
use crate::page::{Page, Widgets};
use std::sync::{
    atomic::{AtomicBool, AtomicU64},
    Arc,
};
use tokio::sync::Mutex;

pub struct AppState<A> {
    pub config: Arc<DashboardConfig>,
    pub api: Arc<A>,
    pub page: Arc<Mutex<Page>>,
    pub submitting: Arc<AtomicBool>,
    pub weekly_generation: Arc<AtomicU64>,
    pub monthly_generation: Arc<AtomicU64>,
}

impl<A> AppState<A> {
    pub fn new(config: DashboardConfig, api: A, widgets: Widgets) -> Self {
        let page = Page::new(widgets, config.toast_duration);
        Self {
            config: Arc::new(config),
            api: Arc::new(api),
            page: Arc::new(Mutex::new(page)),
            submitting: Arc::new(AtomicBool::new(false)),
            weekly_generation: Arc::new(AtomicU64::new(0)),
            monthly_generation: Arc::new(AtomicU64::new(0)),
        }
    }
}

impl<A> Clone for AppState<A> {
    fn clone(&self) -> Self {
        Self {
            config: Arc::clone(&self.config),
            api: Arc::clone(&self.api),
            page: Arc::clone(&self.page),
            submitting: Arc::clone(&self.submitting),
            weekly_generation: Arc::clone(&self.weekly_generation),
            monthly_generation: Arc::clone(&self.monthly_generation),
        }
    }
}
