//! Dioxus bindings that render the core's scenes and forward input to it.

mod health_gauge;
mod value_chart;

pub use health_gauge::HealthScoreGauge;
pub use value_chart::ValueChartCard;
