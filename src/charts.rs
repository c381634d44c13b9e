use serde::Serialize;
use serde_json::Value;
use std::collections::HashMap;
use tracing::debug;

pub const WEEKLY_CANVAS: &str = "weeklyChart";
pub const DOUGHNUT_CANVAS: &str = "moodCountChart";

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    Line,
    Doughnut,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    pub label: String,
    /// `None` is serialized as `null`, which Chart.js treats as a gap.
    pub data: Vec<Option<f64>>,
    pub background_color: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub point_background_color: Option<Vec<String>>,
    /// Border color per line segment, keyed by the segment's starting point.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub segment_colors: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub span_gaps: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartData {
    pub labels: Vec<String>,
    pub datasets: Vec<Dataset>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartConfig {
    #[serde(rename = "type")]
    pub kind: ChartKind,
    pub data: ChartData,
    pub options: Value,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChartInstance {
    pub id: u64,
    pub canvas: String,
    pub config: ChartConfig,
}

#[derive(Debug, Default)]
pub struct ChartRegistry {
    charts: HashMap<String, ChartInstance>,
    next_id: u64,
    destroyed: u64,
}

impl ChartRegistry {
    pub fn replace(&mut self, canvas: &str, config: ChartConfig) -> u64 {
        if let Some(previous) = self.charts.remove(canvas) {
            self.destroyed = self.destroyed.saturating_add(1);
            debug!(canvas, id = previous.id, "destroyed chart");
        }

        self.next_id = self.next_id.saturating_add(1);
        let id = self.next_id;
        self.charts.insert(
            canvas.to_string(),
            ChartInstance {
                id,
                canvas: canvas.to_string(),
                config,
            },
        );
        id
    }

    pub fn get(&self, canvas: &str) -> Option<&ChartInstance> {
        self.charts.get(canvas)
    }

    pub fn live_count(&self) -> usize {
        self.charts.len()
    }

    pub fn destroyed_count(&self) -> u64 {
        self.destroyed
    }

    pub fn instances(&self) -> Vec<&ChartInstance> {
        let mut instances: Vec<&ChartInstance> = self.charts.values().collect();
        instances.sort_by(|a, b| a.canvas.cmp(&b.canvas));
        instances
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn config(label: &str) -> ChartConfig {
        ChartConfig {
            kind: ChartKind::Line,
            data: ChartData {
                labels: vec![label.to_string()],
                datasets: vec![],
            },
            options: json!({}),
        }
    }

    #[test]
    fn replace_keeps_one_instance_per_canvas() {
        let mut registry = ChartRegistry::default();
        let first = registry.replace(WEEKLY_CANVAS, config("a"));
        let second = registry.replace(WEEKLY_CANVAS, config("b"));

        assert_ne!(first, second);
        assert_eq!(registry.live_count(), 1);
        assert_eq!(registry.destroyed_count(), 1);
        let live = registry.get(WEEKLY_CANVAS).unwrap();
        assert_eq!(live.id, second);
        assert_eq!(live.config.data.labels, vec!["b".to_string()]);
    }

    #[test]
    fn canvases_are_independent() {
        let mut registry = ChartRegistry::default();
        registry.replace(WEEKLY_CANVAS, config("a"));
        registry.replace(DOUGHNUT_CANVAS, config("b"));
        assert_eq!(registry.live_count(), 2);
        assert_eq!(registry.destroyed_count(), 0);
    }

    #[test]
    fn gaps_serialize_as_null() {
        let dataset = Dataset {
            label: "Mood".to_string(),
            data: vec![Some(15.0), None],
            background_color: vec![],
            point_background_color: None,
            segment_colors: None,
            span_gaps: Some(true),
        };
        let value = serde_json::to_value(&dataset).unwrap();
        assert_eq!(value["data"], json!([15.0, null]));
        assert_eq!(value["spanGaps"], json!(true));
        assert!(value.get("pointBackgroundColor").is_none());
    }
}
