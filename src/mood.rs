use serde::{Deserialize, Serialize};
use std::fmt;

pub const FALLBACK_COLOR: &str = "#000000";
pub const EMPTY_DAY_COLOR: &str = "#e6e6e6";

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Mood {
    #[serde(rename = "Very Sad")]
    VerySad,
    #[serde(rename = "Sad")]
    Sad,
    #[serde(rename = "Neutral")]
    Neutral,
    #[serde(rename = "Happy")]
    Happy,
    #[serde(rename = "Very Happy")]
    VeryHappy,
}

impl Mood {
    pub const ALL: [Mood; 5] = [
        Mood::VerySad,
        Mood::Sad,
        Mood::Neutral,
        Mood::Happy,
        Mood::VeryHappy,
    ];

    pub fn parse(label: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|mood| mood.label() == label.trim())
    }

    pub fn label(self) -> &'static str {
        match self {
            Mood::VerySad => "Very Sad",
            Mood::Sad => "Sad",
            Mood::Neutral => "Neutral",
            Mood::Happy => "Happy",
            Mood::VeryHappy => "Very Happy",
        }
    }

    pub fn value(self) -> u8 {
        match self {
            Mood::VerySad => 15,
            Mood::Sad => 35,
            Mood::Neutral => 55,
            Mood::Happy => 75,
            Mood::VeryHappy => 95,
        }
    }

    pub fn color(self) -> &'static str {
        match self {
            Mood::VerySad => "#ff7a7a",
            Mood::Sad => "#c1a0ff",
            Mood::Neutral => "#7db3ff",
            Mood::Happy => "#66ea86",
            Mood::VeryHappy => "#ffcf5b",
        }
    }

    pub fn emoji(self) -> &'static str {
        match self {
            Mood::VerySad => "😢",
            Mood::Sad => "🙁",
            Mood::Neutral => "😐",
            Mood::Happy => "🙂",
            Mood::VeryHappy => "😄",
        }
    }

    pub fn index(self) -> usize {
        match self {
            Mood::VerySad => 0,
            Mood::Sad => 1,
            Mood::Neutral => 2,
            Mood::Happy => 3,
            Mood::VeryHappy => 4,
        }
    }

    pub fn for_value(value: i64) -> Option<Self> {
        match value {
            0..=19 => Some(Mood::VerySad),
            20..=39 => Some(Mood::Sad),
            40..=59 => Some(Mood::Neutral),
            60..=79 => Some(Mood::Happy),
            80..=100 => Some(Mood::VeryHappy),
            _ => None,
        }
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Maps a 0..=100 mood value to its bucket color. Anything outside the scale is black.
pub fn color_for_value(value: i64) -> &'static str {
    Mood::for_value(value).map_or(FALLBACK_COLOR, Mood::color)
}

pub fn value_for_label(label: &str) -> Option<u8> {
    Mood::parse(label).map(Mood::value)
}

pub fn color_for_label(label: &str) -> &'static str {
    Mood::parse(label).map_or(FALLBACK_COLOR, Mood::color)
}

/// Mean of mood values rounded half away from zero, so it can be bucketed by
/// [`color_for_value`].
pub fn rounded_average(values: &[u8]) -> Option<i64> {
    if values.is_empty() {
        return None;
    }
    let sum: u64 = values.iter().map(|value| u64::from(*value)).sum();
    let mean = sum as f64 / values.len() as f64;
    Some(mean.round() as i64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_label_has_value_and_color() {
        for mood in Mood::ALL {
            assert_eq!(Mood::parse(mood.label()), Some(mood));
            assert_eq!(value_for_label(mood.label()), Some(mood.value()));
            assert_ne!(color_for_label(mood.label()), FALLBACK_COLOR);
            assert_eq!(Mood::ALL[mood.index()], mood);
        }
    }

    #[test]
    fn unknown_label_falls_back() {
        assert_eq!(Mood::parse("Ecstatic"), None);
        assert_eq!(value_for_label("Ecstatic"), None);
        assert_eq!(color_for_label("Ecstatic"), FALLBACK_COLOR);
    }

    #[test]
    fn color_buckets_use_exact_cut_points() {
        let cases = [
            (0, Mood::VerySad),
            (19, Mood::VerySad),
            (20, Mood::Sad),
            (39, Mood::Sad),
            (40, Mood::Neutral),
            (59, Mood::Neutral),
            (60, Mood::Happy),
            (79, Mood::Happy),
            (80, Mood::VeryHappy),
            (100, Mood::VeryHappy),
        ];
        for (value, mood) in cases {
            assert_eq!(color_for_value(value), mood.color(), "value {value}");
        }
        assert_eq!(color_for_value(-1), FALLBACK_COLOR);
        assert_eq!(color_for_value(101), FALLBACK_COLOR);
    }

    #[test]
    fn mood_values_land_in_their_own_bucket() {
        for mood in Mood::ALL {
            assert_eq!(Mood::for_value(i64::from(mood.value())), Some(mood));
        }
    }

    #[test]
    fn sad_and_happy_average_to_neutral() {
        let average = rounded_average(&[35, 75]).unwrap();
        assert_eq!(average, 55);
        assert_eq!(color_for_value(average), Mood::Neutral.color());
    }

    #[test]
    fn average_rounds_before_bucketing() {
        // 15, 15, 35 -> 21.67 -> 22
        assert_eq!(rounded_average(&[15, 15, 35]), Some(22));
        assert_eq!(rounded_average(&[]), None);
    }

    #[test]
    fn serde_uses_display_labels() {
        let json = serde_json::to_string(&Mood::VeryHappy).unwrap();
        assert_eq!(json, "\"Very Happy\"");
        let mood: Mood = serde_json::from_str("\"Very Sad\"").unwrap();
        assert_eq!(mood, Mood::VerySad);
    }
}
