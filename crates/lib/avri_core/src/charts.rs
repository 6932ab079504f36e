//! Dashboard chart model.
//!
//! Dashboard pages embed chart data as a JSON attribute on a placeholder
//! element per chart slot. This module owns the slot list, parses the
//! embedded data and builds the Chart.js configuration; the browser glue in
//! `avri_wasm` only looks elements up and hands the config to Chart.js.

use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use thiserror::Error;

/// Element attribute holding the embedded chart data.
pub const CHART_DATA_ATTRIBUTE: &str = "data-chart";

/// Slice and bar colours, applied in order.
pub const PALETTE: [&str; 14] = [
    "#4e73df", "#1cc88a", "#36b9cc", "#f6c23e", "#e74a3b", "#858796", "#5a5c69", "#36b9cc",
    "#1cc88a", "#4e73df", "#f6c23e", "#e74a3b", "#858796", "#5a5c69",
];

/// Chart width to height ratio.
pub const ASPECT_RATIO: u32 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    Bar,
    Pie,
}

impl ChartKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChartKind::Bar => "bar",
            ChartKind::Pie => "pie",
        }
    }
}

impl std::fmt::Display for ChartKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A named placeholder on the dashboard page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChartSlot {
    /// DOM id of the canvas element.
    pub element_id: &'static str,
    /// Dataset label shown in tooltips and the legend.
    pub label: &'static str,
    pub kind: ChartKind,
}

/// Chart slots rendered on the statistics dashboard, in render order.
pub const DASHBOARD_CHARTS: [ChartSlot; 7] = [
    ChartSlot {
        element_id: "userFieldChart",
        label: "Field of Study",
        kind: ChartKind::Bar,
    },
    ChartSlot {
        element_id: "educationLevelChart",
        label: "Education Level",
        kind: ChartKind::Bar,
    },
    ChartSlot {
        element_id: "activityStatusChart",
        label: "Activity Status",
        kind: ChartKind::Pie,
    },
    ChartSlot {
        element_id: "documentKeywordsChart",
        label: "Document Keywords",
        kind: ChartKind::Bar,
    },
    ChartSlot {
        element_id: "documentStatsChart",
        label: "Document Stats",
        kind: ChartKind::Bar,
    },
    ChartSlot {
        element_id: "authorStatsChart",
        label: "Author Stats",
        kind: ChartKind::Bar,
    },
    ChartSlot {
        element_id: "sessionsByDayChart",
        label: "Sessions by Day",
        kind: ChartKind::Bar,
    },
];

/// Whether a page whose `document.readyState` is `ready_state` has already
/// parsed its markup, so chart elements can be looked up right away.
///
/// Scripts that finish loading after `DOMContentLoaded` has fired must
/// render immediately instead of waiting for the event.
pub fn document_is_parsed(ready_state: &str) -> bool {
    ready_state != "loading"
}

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("Invalid chart data: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Embedded chart data; `labels[i]` names `values[i]`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChartData {
    pub labels: Vec<String>,
    pub values: Vec<f64>,
}

impl ChartData {
    /// Parses the contents of a [`CHART_DATA_ATTRIBUTE`].
    pub fn parse(raw: &str) -> Result<Self, ChartError> {
        Ok(serde_json::from_str(raw)?)
    }

    pub fn total(&self) -> f64 {
        self.values.iter().sum()
    }

    /// Percentage label for every value, in order.
    pub fn share_labels(&self) -> Vec<String> {
        let total = self.total();
        self.values.iter().map(|v| share_label(*v, total)).collect()
    }
}

/// Formats `value` as a percentage of `total` with one decimal, e.g. `"37.5%"`.
///
/// A zero total labels every slice `"0.0%"`.
pub fn share_label(value: f64, total: f64) -> String {
    if total == 0.0 {
        return "0.0%".to_string();
    }
    format!("{:.1}%", value / total * 100.0)
}

/// Chart.js configuration for `slot`.
///
/// Pie charts enable the datalabels plugin; its `formatter` callback is a
/// JavaScript function and is attached by the caller at
/// `options.plugins.datalabels.formatter`.
pub fn chart_config(slot: &ChartSlot, data: &ChartData) -> Value {
    let is_pie = slot.kind == ChartKind::Pie;
    let datalabels = if is_pie {
        json!({
            "color": "#fff",
            "font": { "weight": "bold" }
        })
    } else {
        Value::Bool(false)
    };

    json!({
        "type": slot.kind.as_str(),
        "data": {
            "labels": data.labels,
            "datasets": [{
                "label": slot.label,
                "data": data.values,
                "backgroundColor": PALETTE,
            }]
        },
        "options": {
            "responsive": true,
            "aspectRatio": ASPECT_RATIO,
            "plugins": {
                "legend": { "display": is_pie },
                "datalabels": datalabels
            }
        }
    })
}
