//! Tunables for the value chart and the score gauge.
//!
//! Every field has a default, so a JSON override only needs to name what it
//! changes:
//!
//! ```ignore
//! let config = DashboardConfig::from_json_str(r#"{ "chart": { "tension": 0.2 } }"#)?;
//! ```

use serde::{Deserialize, Serialize};

use super::curve::DEFAULT_TENSION;
use super::error::{ChartError, ChartResult};
use super::gauge::{GaugeGeometry, DEFAULT_GAUGE_MS};
use super::inspect::TooltipLayout;
use super::reveal::DEFAULT_REVEAL_MS;
use super::scale::Margins;
use super::series::{Period, PeriodWindows};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    pub chart: ChartConfig,
    pub gauge: GaugeConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartConfig {
    pub height: f64,
    pub margins: Margins,
    pub tension: f64,
    pub tooltip: TooltipLayout,
    pub reveal_ms: f64,
    pub windows: PeriodWindows,
    pub initial_period: Period,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            height: 160.0,
            margins: Margins::default(),
            tension: DEFAULT_TENSION,
            tooltip: TooltipLayout::default(),
            reveal_ms: DEFAULT_REVEAL_MS,
            windows: PeriodWindows::default(),
            initial_period: Period::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GaugeConfig {
    pub geometry: GaugeGeometry,
    pub duration_ms: f64,
}

impl Default for GaugeConfig {
    fn default() -> Self {
        Self {
            geometry: GaugeGeometry::default(),
            duration_ms: DEFAULT_GAUGE_MS,
        }
    }
}

impl DashboardConfig {
    pub fn from_json_str(raw: &str) -> ChartResult<Self> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> ChartResult<()> {
        let chart = &self.chart;
        let gauge = &self.gauge;

        let non_negative = [
            ("chart.height", chart.height),
            ("chart.tooltip.width", chart.tooltip.width),
            ("chart.reveal_ms", chart.reveal_ms),
            ("gauge.duration_ms", gauge.duration_ms),
            ("gauge.geometry.width", gauge.geometry.width),
            ("gauge.geometry.height", gauge.geometry.height),
            ("gauge.geometry.stroke_width", gauge.geometry.stroke_width),
        ];
        for (name, value) in non_negative {
            if !value.is_finite() || value < 0.0 {
                return Err(invalid(format!("{name} must be non-negative, got {value}")));
            }
        }

        if !(0.0..=1.0).contains(&chart.tension) {
            return Err(invalid(format!(
                "chart.tension must be within 0..=1, got {}",
                chart.tension
            )));
        }
        if !gauge.geometry.radius.is_finite() || gauge.geometry.radius <= 0.0 {
            return Err(invalid(format!(
                "gauge.geometry.radius must be positive, got {}",
                gauge.geometry.radius
            )));
        }
        if let Some(period) = Period::ALL
            .into_iter()
            .find(|&period| chart.windows.window(period) == 0)
        {
            return Err(invalid(format!(
                "window for {} must hold at least one day",
                period.code()
            )));
        }
        Ok(())
    }
}

fn invalid(message: String) -> ChartError {
    ChartError::InvalidSetting(message)
}
