use crate::errors::ClientError;
use crate::models::LogMoodRequest;
use crate::mood::Mood;
use std::time::Duration;

pub const EMOJI_BUTTON_LABEL: &str = "Pick emoji";
pub const SAVE_LABEL: &str = "Save";
pub const SAVING_LABEL: &str = "Saving...";
pub const NO_MOOD_MESSAGE: &str = "Please select a mood";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    Trigger,
    Dropdown,
    Elsewhere,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingNavigation {
    pub url: String,
    pub delay: Duration,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Controls {
    pub dropdown_open: bool,
    pub popup_visible: bool,
    pub emoji_picker_open: bool,
}

impl Controls {
    pub fn toggle_dropdown(&mut self) {
        self.dropdown_open = !self.dropdown_open;
    }

    pub fn click(&mut self, target: ClickTarget) {
        match target {
            ClickTarget::Trigger => self.toggle_dropdown(),
            ClickTarget::Dropdown => {}
            ClickTarget::Elsewhere => self.dropdown_open = false,
        }
    }

    pub fn navigate(&mut self, url: impl Into<String>, delay: Duration) -> PendingNavigation {
        self.dropdown_open = false;
        PendingNavigation {
            url: url.into(),
            delay,
        }
    }

    /// Returns `false` and leaves the popup hidden when not logged in.
    pub fn open_popup(&mut self, authenticated: bool) -> bool {
        if !authenticated {
            return false;
        }
        self.popup_visible = true;
        true
    }

    pub fn close_popup(&mut self) {
        self.popup_visible = false;
        self.emoji_picker_open = false;
    }

    pub fn toggle_emoji_picker(&mut self) {
        self.emoji_picker_open = !self.emoji_picker_open;
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaveButton {
    pub disabled: bool,
    pub label: &'static str,
}

impl Default for SaveButton {
    fn default() -> Self {
        Self {
            disabled: false,
            label: SAVE_LABEL,
        }
    }
}

impl SaveButton {
    pub fn busy(&mut self) {
        self.disabled = true;
        self.label = SAVING_LABEL;
    }

    pub fn idle(&mut self) {
        *self = Self::default();
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoodForm {
    pub mood: Option<Mood>,
    pub tag: String,
    pub tag_emoji: String,
    pub emoji_button_label: String,
    pub validation: Option<String>,
    pub save: SaveButton,
}

impl Default for MoodForm {
    fn default() -> Self {
        Self {
            mood: None,
            tag: String::new(),
            tag_emoji: String::new(),
            emoji_button_label: EMOJI_BUTTON_LABEL.to_string(),
            validation: None,
            save: SaveButton::default(),
        }
    }
}

impl MoodForm {
    pub fn select_mood(&mut self, mood: Mood) {
        self.mood = Some(mood);
        self.validation = None;
    }

    pub fn pick_emoji(&mut self, glyph: &str) {
        self.tag_emoji = glyph.to_string();
        self.emoji_button_label = glyph.to_string();
    }

    pub fn to_request(&mut self) -> Result<LogMoodRequest, ClientError> {
        let Some(mood) = self.mood else {
            self.validation = Some(NO_MOOD_MESSAGE.to_string());
            return Err(ClientError::validation(NO_MOOD_MESSAGE));
        };
        self.validation = None;
        Ok(LogMoodRequest::new(mood, &self.tag, &self.tag_emoji))
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
