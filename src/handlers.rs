use crate::api::MoodApi;
use crate::app::NavTarget;
use crate::charts::{DOUGHNUT_CANVAS, WEEKLY_CANVAS};
use crate::config::WeeklyWindow;
use crate::controls::ClickTarget;
use crate::models::MoodEntry;
use crate::monthly::build_calendar;
use crate::mood::Mood;
use crate::page::Section;
use crate::session;
use crate::state::AppState;
use crate::toast::ToastKind;
use crate::weekly::{WeekWindow, WeeklySummary};
use chrono::{Local, NaiveDate};
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::{debug, info, warn};

pub const LOGIN_REQUIRED_MESSAGE: &str = "Please login first!";
pub const INVALID_DATE_MESSAGE: &str = "Please pick a valid date";
pub const LOAD_FAILED_MESSAGE: &str = "Could not load moods";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    Rendered,
    Skipped,
    Stale,
    Failed,
}

pub async fn boot<A: MoodApi>(state: &AppState<A>) -> bool {
    let authenticated = session::probe(state.api.as_ref()).await;
    state.page.lock().await.set_authenticated(authenticated);
    authenticated
}

pub async fn click<A: MoodApi>(state: &AppState<A>, target: ClickTarget) {
    state.page.lock().await.controls.click(target);
}

pub async fn navigate<A: MoodApi>(state: &AppState<A>, target: NavTarget) {
    let pending = state
        .page
        .lock()
        .await
        .controls
        .navigate(state.config.url(target.path()), state.config.nav_delay);

    tokio::time::sleep(pending.delay).await;
    info!(url = %pending.url, "navigating");
    state.page.lock().await.location = Some(pending.url);
}

pub async fn show_dashboard<A: MoodApi>(state: &AppState<A>) {
    {
        let mut page = state.page.lock().await;
        page.controls.dropdown_open = false;
        page.section = Section::Dashboard;
    }
    load_weekly(state, None).await;
    load_monthly(state, None).await;
}

pub async fn open_popup<A: MoodApi>(state: &AppState<A>) {
    let mut page = state.page.lock().await;
    let authenticated = page.authenticated;
    if !page.controls.open_popup(authenticated) {
        page.alerts.push(LOGIN_REQUIRED_MESSAGE.to_string());
    }
}

pub async fn close_popup<A: MoodApi>(state: &AppState<A>) {
    state.page.lock().await.controls.close_popup();
}

pub async fn toggle_emoji_picker<A: MoodApi>(state: &AppState<A>) {
    state.page.lock().await.controls.toggle_emoji_picker();
}

pub async fn pick_emoji<A: MoodApi>(state: &AppState<A>, glyph: &str) {
    let mut page = state.page.lock().await;
    page.form.pick_emoji(glyph);
    page.controls.emoji_picker_open = false;
}

pub async fn select_mood<A: MoodApi>(state: &AppState<A>, mood: Mood) {
    state.page.lock().await.form.select_mood(mood);
}

pub async fn set_tag<A: MoodApi>(state: &AppState<A>, tag: String) {
    state.page.lock().await.form.tag = tag;
}

pub async fn load_week_from_input<A: MoodApi>(state: &AppState<A>, text: &str) -> LoadOutcome {
    match NaiveDate::parse_from_str(text.trim(), "%Y-%m-%d") {
        Ok(date) if WeekWindow::containing(date).is_some() => {
            load_weekly(state, Some(date)).await
        }
        Ok(date) => {
            debug!(%date, "week around date is out of range");
            invalid_date(state).await
        }
        Err(err) => {
            debug!("rejected date input '{text}': {err}");
            invalid_date(state).await
        }
    }
}

pub async fn load_weekly<A: MoodApi>(
    state: &AppState<A>,
    reference: Option<NaiveDate>,
) -> LoadOutcome {
    if !state.page.lock().await.widgets.weekly {
        return LoadOutcome::Skipped;
    }

    let window = match state.config.weekly_window {
        WeeklyWindow::ClientFiltered => {
            match WeekWindow::containing(reference.unwrap_or_else(today)) {
                Some(window) => Some(window),
                None => return invalid_date(state).await,
            }
        }
        WeeklyWindow::ServerQuery => None,
    };

    let generation = next_generation(&state.weekly_generation);
    let fetched = match window {
        Some(_) => state.api.weekly(None).await,
        None => state.api.weekly(reference).await,
    };

    if is_stale(&state.weekly_generation, generation) {
        debug!(generation, "dropping stale weekly response");
        return LoadOutcome::Stale;
    }

    let entries = match fetched {
        Ok(entries) => entries,
        Err(err) => return load_failed(state, "weekly", err).await,
    };

    let summary = WeeklySummary::build(entries, window);
    info!(points = summary.points.len(), total = summary.total(), "weekly moods rendered");

    let mut page = state.page.lock().await;
    page.charts.replace(WEEKLY_CANVAS, summary.line_chart());
    page.charts.replace(DOUGHNUT_CANVAS, summary.doughnut_chart());
    page.weekly = Some(summary);
    LoadOutcome::Rendered
}

pub async fn load_monthly<A: MoodApi>(
    state: &AppState<A>,
    reference: Option<NaiveDate>,
) -> LoadOutcome {
    if !state.page.lock().await.widgets.monthly {
        return LoadOutcome::Skipped;
    }

    let generation = next_generation(&state.monthly_generation);
    let fetched = state.api.monthly().await;

    if is_stale(&state.monthly_generation, generation) {
        debug!(generation, "dropping stale monthly response");
        return LoadOutcome::Stale;
    }

    let entries: Vec<MoodEntry> = match fetched {
        Ok(entries) => entries,
        Err(err) => return load_failed(state, "monthly", err).await,
    };

    let grid = build_calendar(&entries, reference.unwrap_or_else(today));
    info!(month = %grid.title, "calendar rendered");
    state.page.lock().await.calendar = Some(grid);
    LoadOutcome::Rendered
}

async fn load_failed<A: MoodApi>(
    state: &AppState<A>,
    what: &str,
    err: crate::errors::ClientError,
) -> LoadOutcome {
    warn!("loading {what} moods failed: {err}");
    state
        .page
        .lock()
        .await
        .toasts
        .show(ToastKind::Error, LOAD_FAILED_MESSAGE);
    LoadOutcome::Failed
}

async fn invalid_date<A: MoodApi>(state: &AppState<A>) -> LoadOutcome {
    state
        .page
        .lock()
        .await
        .toasts
        .show(ToastKind::Error, INVALID_DATE_MESSAGE);
    LoadOutcome::Failed
}

fn next_generation(counter: &AtomicU64) -> u64 {
    counter.fetch_add(1, Ordering::AcqRel).wrapping_add(1)
}

fn is_stale(counter: &AtomicU64, generation: u64) -> bool {
    counter.load(Ordering::Acquire) != generation
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}
