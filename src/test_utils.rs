use crate::api::MoodApi;
use crate::config::{DashboardConfig, WeeklyWindow};
use crate::errors::ClientError;
use crate::models::{LogMoodRequest, MoodEntry};
use crate::page::Widgets;
use crate::state::AppState;
use chrono::NaiveDate;
use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Arc, Mutex,
};
use tokio::sync::Notify;

#[derive(Default)]
pub struct FakeApi {
    pub authenticated: bool,
    pub probe_error: bool,
    pub entries: Mutex<Vec<MoodEntry>>,
    pub log_error: Mutex<Option<ClientError>>,
    pub weekly_error: Mutex<Option<ClientError>>,
    pub monthly_error: Mutex<Option<ClientError>>,
    pub logged: Mutex<Vec<LogMoodRequest>>,
    pub weekly_dates: Mutex<Vec<Option<NaiveDate>>>,
    pub monthly_calls: AtomicUsize,
    /// When set, `log_mood` waits for a permit before answering.
    pub log_gate: Option<Arc<Notify>>,
    /// When set, the first `weekly` call waits for a permit before answering.
    pub weekly_gate: Option<Arc<Notify>>,
    /// Same as `weekly_gate`, for the first `monthly` call.
    pub monthly_gate: Option<Arc<Notify>>,
}

impl FakeApi {
    pub fn with_entries(entries: Vec<MoodEntry>) -> Self {
        Self {
            authenticated: true,
            entries: Mutex::new(entries),
            ..Self::default()
        }
    }

    pub fn log_calls(&self) -> usize {
        self.logged.lock().unwrap().len()
    }
}

impl MoodApi for FakeApi {
    async fn probe_session(&self) -> Result<bool, ClientError> {
        if self.probe_error {
            return Err(ClientError::network("connection refused"));
        }
        Ok(self.authenticated)
    }

    async fn log_mood(&self, request: &LogMoodRequest) -> Result<(), ClientError> {
        self.logged.lock().unwrap().push(request.clone());
        if let Some(gate) = &self.log_gate {
            gate.notified().await;
        }
        match self.log_error.lock().unwrap().clone() {
            Some(err) => Err(err),
            None => {
                self.entries
                    .lock()
                    .unwrap()
                    .push(MoodEntry::new("2024-06-12", request.mood));
                Ok(())
            }
        }
    }

    async fn weekly(&self, date: Option<NaiveDate>) -> Result<Vec<MoodEntry>, ClientError> {
        let first = {
            let mut dates = self.weekly_dates.lock().unwrap();
            dates.push(date);
            dates.len() == 1
        };
        if first {
            if let Some(gate) = &self.weekly_gate {
                gate.notified().await;
            }
        }
        match self.weekly_error.lock().unwrap().clone() {
            Some(err) => Err(err),
            None => Ok(self.entries.lock().unwrap().clone()),
        }
    }

    async fn monthly(&self) -> Result<Vec<MoodEntry>, ClientError> {
        let first = self.monthly_calls.fetch_add(1, Ordering::SeqCst) == 0;
        if first {
            if let Some(gate) = &self.monthly_gate {
                gate.notified().await;
            }
        }
        match self.monthly_error.lock().unwrap().clone() {
            Some(err) => Err(err),
            None => Ok(self.entries.lock().unwrap().clone()),
        }
    }
}

pub fn state_with(api: FakeApi, window: WeeklyWindow, widgets: Widgets) -> AppState<FakeApi> {
    let config = DashboardConfig {
        weekly_window: window,
        ..DashboardConfig::default()
    };
    AppState::new(config, api, widgets)
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}
