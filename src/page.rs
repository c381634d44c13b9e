use crate::charts::ChartRegistry;
use crate::controls::{Controls, MoodForm};
use crate::monthly::CalendarGrid;
use crate::session::{self, MenuItem};
use crate::toast::Toaster;
use crate::weekly::WeeklySummary;
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Home,
    Dashboard,
}

/// Containers present in the page markup. A renderer whose container is
/// missing does nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Widgets {
    pub weekly: bool,
    pub monthly: bool,
}

impl Widgets {
    pub fn all() -> Self {
        Self {
            weekly: true,
            monthly: true,
        }
    }

    pub fn none() -> Self {
        Self {
            weekly: false,
            monthly: false,
        }
    }
}

#[derive(Debug)]
pub struct Page {
    pub widgets: Widgets,
    pub section: Section,
    pub authenticated: bool,
    pub username: String,
    pub menu: Vec<MenuItem>,
    pub controls: Controls,
    pub form: MoodForm,
    pub toasts: Toaster,
    pub alerts: Vec<String>,
    pub location: Option<String>,
    pub charts: ChartRegistry,
    pub weekly: Option<WeeklySummary>,
    pub calendar: Option<CalendarGrid>,
}

impl Page {
    pub fn new(widgets: Widgets, toast_duration: Duration) -> Self {
        Self {
            widgets,
            section: Section::Home,
            authenticated: false,
            username: String::new(),
            menu: session::profile_menu(false),
            controls: Controls::default(),
            form: MoodForm::default(),
            toasts: Toaster::new(toast_duration),
            alerts: Vec::new(),
            location: None,
            charts: ChartRegistry::default(),
            weekly: None,
            calendar: None,
        }
    }

    pub fn set_authenticated(&mut self, authenticated: bool) {
        self.authenticated = authenticated;
        self.username = if authenticated {
            session::SIGNED_IN_NAME.to_string()
        } else {
            String::new()
        };
        self.menu = session::profile_menu(authenticated);
    }
}
