//! Platform-agnostic chart and gauge logic. Nothing in here touches Dioxus;
//! the components in `crate::components` render what these modules compute.

pub mod animation;
pub mod chart;
pub mod config;
pub mod curve;
pub mod error;
pub mod format;
pub mod gauge;
pub mod inspect;
pub mod mock;
pub mod reveal;
pub mod scale;
pub mod scene;
pub mod series;
pub mod timing;

pub use chart::{ChartGeometry, ValueChart, ValueSummary};
pub use config::{ChartConfig, DashboardConfig, GaugeConfig};
pub use error::{ChartError, ChartResult};
pub use gauge::{GaugeAnimator, ScoreLabel};
pub use inspect::{ActiveSample, InputEvent};
pub use series::{Period, Sample, SeriesStore};
