use crate::models::MoodEntry;
use crate::mood::{self, EMPTY_DAY_COLOR};
use chrono::{Datelike, Months, NaiveDate};
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq)]
pub struct DayCell {
    pub day: u32,
    pub average: Option<i64>,
    pub color: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CalendarGrid {
    pub month: NaiveDate,
    pub title: String,
    /// Empty cells before the 1st, Sunday-first.
    pub leading_blanks: u32,
    pub cells: Vec<DayCell>,
}

impl CalendarGrid {
    pub fn previous(&self) -> Option<NaiveDate> {
        prev_month(self.month)
    }

    pub fn next(&self) -> Option<NaiveDate> {
        next_month(self.month)
    }

    pub fn cell(&self, day: u32) -> Option<&DayCell> {
        self.cells.iter().find(|cell| cell.day == day)
    }
}

pub fn build_calendar(entries: &[MoodEntry], reference: NaiveDate) -> CalendarGrid {
    let month = first_of_month(reference);

    let mut by_day: BTreeMap<u32, Vec<u8>> = BTreeMap::new();
    for entry in entries {
        let Some(day) = entry.day() else { continue };
        if day.year() != month.year() || day.month() != month.month() {
            continue;
        }
        if let Some(value) = entry.value() {
            by_day.entry(day.day()).or_default().push(value);
        }
    }

    let cells = (1..=days_in_month(month))
        .map(|day| {
            let average = by_day
                .get(&day)
                .and_then(|values| mood::rounded_average(values));
            DayCell {
                day,
                average,
                color: average.map_or(EMPTY_DAY_COLOR, mood::color_for_value),
            }
        })
        .collect();

    CalendarGrid {
        month,
        title: month.format("%B %Y").to_string(),
        leading_blanks: month.weekday().num_days_from_sunday(),
        cells,
    }
}

pub fn first_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

pub fn next_month(date: NaiveDate) -> Option<NaiveDate> {
    first_of_month(date).checked_add_months(Months::new(1))
}

pub fn prev_month(date: NaiveDate) -> Option<NaiveDate> {
    first_of_month(date).checked_sub_months(Months::new(1))
}

pub fn days_in_month(date: NaiveDate) -> u32 {
    (29..=31)
        .rev()
        .find(|&day| date.with_day(day).is_some())
        .unwrap_or(28)
}
