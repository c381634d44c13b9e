use crate::charts::{ChartConfig, ChartData, ChartKind, Dataset};
use crate::models::MoodEntry;
use crate::mood::Mood;
use chrono::{Datelike, Duration, NaiveDate};
use serde_json::{json, Map, Value};

const Y_STEP: i64 = 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeekWindow {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl WeekWindow {
    /// `None` when the week runs past the calendar's representable range.
    pub fn containing(date: NaiveDate) -> Option<Self> {
        let start = week_start(date)?;
        let end = start.checked_add_signed(Duration::days(6))?;
        Some(Self { start, end })
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}

pub fn week_start(date: NaiveDate) -> Option<NaiveDate> {
    let back = i64::from(date.weekday().num_days_from_monday());
    date.checked_sub_signed(Duration::days(back))
}

#[derive(Debug, Clone, PartialEq)]
pub struct WeekPoint {
    pub label: String,
    pub value: Option<u8>,
    pub color: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Badge {
    pub mood: Mood,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct WeeklySummary {
    pub window: Option<WeekWindow>,
    pub points: Vec<WeekPoint>,
    pub counts: [usize; 5],
}

impl WeeklySummary {
    pub fn build(entries: Vec<MoodEntry>, window: Option<WeekWindow>) -> Self {
        let mut entries: Vec<MoodEntry> = match window {
            Some(window) => entries
                .into_iter()
                .filter(|entry| entry.day().is_some_and(|day| window.contains(day)))
                .collect(),
            None => entries,
        };
        entries.sort_by(|a, b| a.day().cmp(&b.day()).then_with(|| a.date.cmp(&b.date)));

        let mut counts = [0usize; 5];
        let points = entries
            .iter()
            .map(|entry| {
                if let Some(mood) = entry.parsed_mood() {
                    counts[mood.index()] = counts[mood.index()].saturating_add(1);
                }
                WeekPoint {
                    label: entry
                        .day()
                        .map_or_else(|| entry.date.clone(), day_label),
                    value: entry.value(),
                    color: entry.color(),
                }
            })
            .collect();

        Self {
            window,
            points,
            counts,
        }
    }

    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }

    pub fn total_label(&self) -> String {
        match self.total() {
            1 => "1 mood logged".to_string(),
            n => format!("{n} moods logged"),
        }
    }

    pub fn count(&self, mood: Mood) -> usize {
        self.counts[mood.index()]
    }

    pub fn badges(&self) -> Vec<Badge> {
        Mood::ALL
            .into_iter()
            .map(|mood| Badge {
                mood,
                count: self.count(mood),
            })
            .filter(|badge| badge.count > 0)
            .collect()
    }

    pub fn day_dividers(&self) -> Vec<usize> {
        self.points
            .windows(2)
            .enumerate()
            .filter(|(_, pair)| pair[0].label != pair[1].label)
            .map(|(index, _)| index + 1)
            .collect()
    }

    pub fn line_chart(&self) -> ChartConfig {
        let colors: Vec<String> = self.points.iter().map(|p| p.color.to_string()).collect();
        let data = self
            .points
            .iter()
            .map(|point| point.value.map(f64::from))
            .collect();

        ChartConfig {
            kind: ChartKind::Line,
            data: ChartData {
                labels: self.points.iter().map(|p| p.label.clone()).collect(),
                datasets: vec![Dataset {
                    label: "Mood".to_string(),
                    data,
                    background_color: colors.clone(),
                    point_background_color: Some(colors.clone()),
                    segment_colors: Some(colors),
                    span_gaps: Some(true),
                }],
            },
            options: json!({
                "responsive": true,
                "plugins": {
                    "legend": { "display": false },
                    "dayDividers": { "indices": self.day_dividers() },
                },
                "scales": {
                    "y": {
                        "min": 0,
                        "max": 100,
                        "ticks": { "stepSize": Y_STEP, "emoji": emoji_ticks() },
                    },
                },
            }),
        }
    }

    pub fn doughnut_chart(&self) -> ChartConfig {
        ChartConfig {
            kind: ChartKind::Doughnut,
            data: ChartData {
                labels: Mood::ALL.iter().map(|m| m.label().to_string()).collect(),
                datasets: vec![Dataset {
                    label: "Moods".to_string(),
                    data: self.counts.iter().map(|c| Some(*c as f64)).collect(),
                    background_color: Mood::ALL.iter().map(|m| m.color().to_string()).collect(),
                    point_background_color: None,
                    segment_colors: None,
                    span_gaps: None,
                }],
            },
            options: json!({
                "rotation": -90,
                "circumference": 180,
                "plugins": { "legend": { "display": false } },
            }),
        }
    }
}

pub fn emoji_ticks() -> Value {
    let mut ticks = Map::new();
    for tick in (0..=100).step_by(Y_STEP as usize) {
        let emoji = if tick == 100 {
            ""
        } else {
            Mood::for_value(tick).map_or("", Mood::emoji)
        };
        ticks.insert(tick.to_string(), Value::String(emoji.to_string()));
    }
    Value::Object(ticks)
}

fn day_label(day: NaiveDate) -> String {
    day.format("%a %-d %b").to_string()
}
