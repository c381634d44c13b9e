use crate::api::MoodApi;
use crate::config::{LOGIN_PATH, LOGOUT_PATH};
use crate::controls::ClickTarget;
use crate::handlers;
use crate::mood::Mood;
use crate::state::AppState;
use crate::submit;
use chrono::NaiveDate;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavTarget {
    Login,
    Logout,
}

impl NavTarget {
    pub fn path(self) -> &'static str {
        match self {
            NavTarget::Login => LOGIN_PATH,
            NavTarget::Logout => LOGOUT_PATH,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            NavTarget::Login => "login",
            NavTarget::Logout => "logout",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "login" => Some(NavTarget::Login),
            "logout" => Some(NavTarget::Logout),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Click(ClickTarget),
    Navigate(NavTarget),
    ShowDashboard,
    OpenPopup,
    ClosePopup,
    ToggleEmojiPicker,
    PickEmoji(String),
    SelectMood(Mood),
    SetTag(String),
    Submit,
    LoadWeek(String),
    ShowMonth(NaiveDate),
}

impl Action {
    pub fn data_attrs(&self) -> (&'static str, Option<(&'static str, String)>) {
        match self {
            Action::Click(ClickTarget::Trigger) => ("toggle-menu", None),
            Action::Click(ClickTarget::Dropdown) => ("menu", None),
            Action::Click(ClickTarget::Elsewhere) => ("outside", None),
            Action::Navigate(target) => {
                ("navigate", Some(("data-target", target.as_str().to_string())))
            }
            Action::ShowDashboard => ("show-dashboard", None),
            Action::OpenPopup => ("open-popup", None),
            Action::ClosePopup => ("close-popup", None),
            Action::ToggleEmojiPicker => ("toggle-emoji", None),
            Action::PickEmoji(glyph) => ("pick-emoji", Some(("data-emoji", glyph.clone()))),
            Action::SelectMood(mood) => {
                ("select-mood", Some(("data-mood", mood.label().to_string())))
            }
            Action::SetTag(tag) => ("set-tag", Some(("data-tag", tag.clone()))),
            Action::Submit => ("submit", None),
            Action::LoadWeek(text) => ("load-week", Some(("data-date", text.clone()))),
            Action::ShowMonth(month) => (
                "show-month",
                Some(("data-month", month.format("%Y-%m-%d").to_string())),
            ),
        }
    }

    pub fn from_data_attrs(action: &str, value: Option<&str>) -> Option<Self> {
        let action = match action {
            "toggle-menu" => Action::Click(ClickTarget::Trigger),
            "menu" => Action::Click(ClickTarget::Dropdown),
            "outside" => Action::Click(ClickTarget::Elsewhere),
            "navigate" => Action::Navigate(NavTarget::parse(value?)?),
            "show-dashboard" => Action::ShowDashboard,
            "open-popup" => Action::OpenPopup,
            "close-popup" => Action::ClosePopup,
            "toggle-emoji" => Action::ToggleEmojiPicker,
            "pick-emoji" => Action::PickEmoji(value?.to_string()),
            "select-mood" => Action::SelectMood(Mood::parse(value?)?),
            "set-tag" => Action::SetTag(value.unwrap_or_default().to_string()),
            "submit" => Action::Submit,
            "load-week" => Action::LoadWeek(value.unwrap_or_default().to_string()),
            "show-month" => {
                Action::ShowMonth(NaiveDate::parse_from_str(value?, "%Y-%m-%d").ok()?)
            }
            _ => return None,
        };
        Some(action)
    }
}

pub async fn dispatch<A: MoodApi>(state: &AppState<A>, action: Action) {
    match action {
        Action::Click(target) => handlers::click(state, target).await,
        Action::Navigate(target) => handlers::navigate(state, target).await,
        Action::ShowDashboard => handlers::show_dashboard(state).await,
        Action::OpenPopup => handlers::open_popup(state).await,
        Action::ClosePopup => handlers::close_popup(state).await,
        Action::ToggleEmojiPicker => handlers::toggle_emoji_picker(state).await,
        Action::PickEmoji(glyph) => handlers::pick_emoji(state, &glyph).await,
        Action::SelectMood(mood) => handlers::select_mood(state, mood).await,
        Action::SetTag(tag) => handlers::set_tag(state, tag).await,
        Action::Submit => {
            submit::submit_mood(state).await;
        }
        Action::LoadWeek(text) => {
            handlers::load_week_from_input(state, &text).await;
        }
        Action::ShowMonth(month) => {
            handlers::load_monthly(state, Some(month)).await;
        }
    }
}
