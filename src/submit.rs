use crate::api::MoodApi;
use crate::errors::ClientError;
use crate::handlers;
use crate::state::AppState;
use crate::toast::ToastKind;
use std::sync::atomic::{AtomicBool, Ordering};
use tracing::{debug, info, warn};

pub const SAVED_MESSAGE: &str = "Mood saved!";

#[derive(Debug, Clone)]
pub enum SubmitOutcome {
    Saved,
    Invalid,
    Busy,
    Failed(ClientError),
}

pub struct InFlight<'a> {
    flag: &'a AtomicBool,
}

impl<'a> InFlight<'a> {
    pub fn acquire(flag: &'a AtomicBool) -> Option<Self> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| Self { flag })
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::Release);
    }
}

pub async fn submit_mood<A: MoodApi>(state: &AppState<A>) -> SubmitOutcome {
    let Some(_in_flight) = InFlight::acquire(&state.submitting) else {
        debug!("submission already in flight");
        return SubmitOutcome::Busy;
    };

    let request = {
        let mut page = state.page.lock().await;
        match page.form.to_request() {
            Ok(request) => {
                page.form.save.busy();
                request
            }
            Err(err) => {
                page.toasts.show(ToastKind::Error, err.toast_message());
                return SubmitOutcome::Invalid;
            }
        }
    };

    let result = state.api.log_mood(&request).await;

    let widgets = {
        let mut page = state.page.lock().await;
        page.form.save.idle();
        match result {
            Ok(()) => {
                info!(mood = %request.mood, "mood saved");
                page.toasts.show(ToastKind::Success, SAVED_MESSAGE);
                page.form.reset();
                page.controls.close_popup();
                page.widgets
            }
            Err(err) => {
                warn!("saving mood failed: {err}");
                page.toasts.show(ToastKind::Error, err.toast_message());
                return SubmitOutcome::Failed(err);
            }
        }
    };

    if widgets.weekly {
        handlers::load_weekly(state, None).await;
    }
    if widgets.monthly {
        handlers::load_monthly(state, None).await;
    }
    SubmitOutcome::Saved
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::WeeklyWindow;
    use crate::controls::{NO_MOOD_MESSAGE, SAVE_LABEL, SAVING_LABEL};
    use crate::mood::Mood;
    use crate::page::Widgets;
    use crate::test_utils::{state_with, FakeApi};
    use std::sync::Arc;
    use tokio::sync::Notify;

    async fn ready_state(api: FakeApi, widgets: Widgets) -> AppState<FakeApi> {
        let state = state_with(api, WeeklyWindow::ServerQuery, widgets);
        handlers::boot(&state).await;
        handlers::open_popup(&state).await;
        state
    }

    #[test]
    fn flag_is_released_on_drop() {
        let flag = AtomicBool::new(false);
        let first = InFlight::acquire(&flag);
        assert!(first.is_some());
        assert!(InFlight::acquire(&flag).is_none());
        drop(first);
        assert!(InFlight::acquire(&flag).is_some());
    }

    #[tokio::test]
    async fn missing_mood_sends_nothing() {
        let state = ready_state(FakeApi::with_entries(vec![]), Widgets::all()).await;
        let outcome = submit_mood(&state).await;

        assert!(matches!(outcome, SubmitOutcome::Invalid));
        assert_eq!(state.api.log_calls(), 0);
        let mut page = state.page.lock().await;
        assert_eq!(page.toasts.shown_count(), 1);
        assert_eq!(page.toasts.current().unwrap().message, NO_MOOD_MESSAGE);
        assert_eq!(page.form.validation.as_deref(), Some(NO_MOOD_MESSAGE));
        assert!(page.controls.popup_visible);
        assert!(!state.submitting.load(Ordering::SeqCst));
    }

    #[tokio::test]
    async fn success_resets_form_and_refreshes_widgets() {
        let state = ready_state(FakeApi::with_entries(vec![]), Widgets::all()).await;
        handlers::select_mood(&state, Mood::Happy).await;
        handlers::set_tag(&state, "gym".to_string()).await;

        let outcome = submit_mood(&state).await;
        assert!(matches!(outcome, SubmitOutcome::Saved));

        let logged = state.api.logged.lock().unwrap().clone();
        assert_eq!(logged.len(), 1);
        assert_eq!(logged[0].mood, Mood::Happy);
        assert_eq!(logged[0].tag.as_deref(), Some("gym"));

        let mut page = state.page.lock().await;
        assert_eq!(page.toasts.current().unwrap().message, SAVED_MESSAGE);
        assert!(!page.controls.popup_visible);
        assert_eq!(page.form.mood, None);
        assert_eq!(page.form.save.label, SAVE_LABEL);
        assert_eq!(page.weekly.as_ref().unwrap().total(), 1);
        assert!(page.calendar.is_some());
    }

    #[tokio::test]
    async fn success_without_containers_skips_refresh() {
        let state = ready_state(FakeApi::with_entries(vec![]), Widgets::none()).await;
        handlers::select_mood(&state, Mood::Sad).await;
        assert!(matches!(submit_mood(&state).await, SubmitOutcome::Saved));
        assert!(state.api.weekly_dates.lock().unwrap().is_empty());
        assert_eq!(state.api.monthly_calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn failure_keeps_form_for_retry() {
        let api = FakeApi::with_entries(vec![]);
        *api.log_error.lock().unwrap() = Some(ClientError::status(500));
        let state = ready_state(api, Widgets::all()).await;
        handlers::select_mood(&state, Mood::Neutral).await;

        let outcome = submit_mood(&state).await;
        assert!(matches!(outcome, SubmitOutcome::Failed(_)));

        let mut page = state.page.lock().await;
        assert_eq!(page.toasts.current().unwrap().message, "Error saving mood");
        assert_eq!(page.form.mood, Some(Mood::Neutral));
        assert!(page.controls.popup_visible);
        assert!(!page.form.save.disabled);
        assert!(page.weekly.is_none());
    }

    #[tokio::test]
    async fn network_failure_says_network_error() {
        let api = FakeApi::with_entries(vec![]);
        *api.log_error.lock().unwrap() = Some(ClientError::network("reset by peer"));
        let state = ready_state(api, Widgets::all()).await;
        handlers::select_mood(&state, Mood::Neutral).await;

        submit_mood(&state).await;
        let mut page = state.page.lock().await;
        assert_eq!(page.toasts.current().unwrap().message, "Network error");
    }

    #[tokio::test]
    async fn second_submit_while_in_flight_is_rejected() {
        let gate = Arc::new(Notify::new());
        let api = FakeApi {
            log_gate: Some(Arc::clone(&gate)),
            ..FakeApi::with_entries(vec![])
        };
        let state = ready_state(api, Widgets::none()).await;
        handlers::select_mood(&state, Mood::VeryHappy).await;

        let (first, second) = tokio::join!(submit_mood(&state), async {
            let outcome = submit_mood(&state).await;
            {
                let page = state.page.lock().await;
                assert!(page.form.save.disabled);
                assert_eq!(page.form.save.label, SAVING_LABEL);
            }
            assert_eq!(state.api.log_calls(), 1);
            gate.notify_one();
            outcome
        });

        assert!(matches!(first, SubmitOutcome::Saved));
        assert!(matches!(second, SubmitOutcome::Busy));
        assert_eq!(state.api.log_calls(), 1);
        assert!(!state.submitting.load(Ordering::SeqCst));
    }
}
