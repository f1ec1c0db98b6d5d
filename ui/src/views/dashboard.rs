use dioxus::prelude::*;
use tracing::warn;

use crate::components::{HealthScoreGauge, ValueChartCard};
use crate::core::{mock, DashboardConfig};

/// Score shown until portfolio analysis is wired in.
const DEMO_HEALTH_SCORE: i32 = 76;

const CONFIG_JSON: &str = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/assets/dashboard.json"));

/// Embedded dashboard settings, falling back to defaults if they don't parse.
pub fn load_config() -> DashboardConfig {
    DashboardConfig::from_json_str(CONFIG_JSON).unwrap_or_else(|err| {
        warn!("using default dashboard config: {err}");
        DashboardConfig::default()
    })
}

#[component]
pub fn Dashboard() -> Element {
    let config = use_hook(load_config);
    let values = use_hook(mock::demo_values);

    rsx! {
        section { class: "page page-dashboard",
            ValueChartCard { values, config: config.chart.clone() }

            section { class: "dashboard-card health-card",
                div { class: "dashboard-card__header",
                    h2 { "Portfolio Health" }
                    span { class: "dashboard-card__meta", "Updated daily" }
                }
                HealthScoreGauge { score: DEMO_HEALTH_SCORE, config: config.gauge.clone() }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_config_parses() {
        assert!(DashboardConfig::from_json_str(CONFIG_JSON).is_ok());
    }
}
