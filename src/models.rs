use crate::mood::{self, Mood};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoodEntry {
    pub date: String,
    pub mood: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag_emoji: Option<String>,
}

impl MoodEntry {
    pub fn new(date: impl Into<String>, mood: Mood) -> Self {
        Self {
            date: date.into(),
            mood: mood.label().to_string(),
            tag: None,
            tag_emoji: None,
        }
    }

    /// Calendar day of the entry. Accepts plain dates and timestamps.
    pub fn day(&self) -> Option<NaiveDate> {
        let head = self.date.get(..10)?;
        NaiveDate::parse_from_str(head, "%Y-%m-%d").ok()
    }

    pub fn parsed_mood(&self) -> Option<Mood> {
        Mood::parse(&self.mood)
    }

    pub fn value(&self) -> Option<u8> {
        mood::value_for_label(&self.mood)
    }

    pub fn color(&self) -> &'static str {
        mood::color_for_label(&self.mood)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogMoodRequest {
    pub mood: Mood,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag_emoji: Option<String>,
}

impl LogMoodRequest {
    pub fn new(mood: Mood, tag: &str, tag_emoji: &str) -> Self {
        Self {
            mood,
            tag: non_empty(tag),
            tag_emoji: non_empty(tag_emoji),
        }
    }
}

fn non_empty(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
