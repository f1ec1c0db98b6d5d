//! The interactive portfolio value chart.
//!
//! [`ValueChart`] owns everything one chart instance needs: the canonical
//! series, the selected period, the derived geometry, the reveal boundary and
//! the inspection state. View bindings call into it from their event handlers
//! and animation loop and render the [`ChartScene`] it produces.

use tracing::{debug, info};

use super::config::ChartConfig;
use super::curve::{area_path, build_points, smooth_path, ChartPoint, Path};
use super::error::ChartResult;
use super::inspect::{ActiveSample, InputEvent, InspectionController, InspectionOutcome};
use super::reveal::RevealController;
use super::scale::{ScaleMapper, Viewport};
use super::scene::{chart_scene, ChartScene};
use super::series::{Period, Sample, SeriesStore};

/// Points and paths for one slice drawn into one viewport.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartGeometry {
    samples: Vec<Sample>,
    viewport: Viewport,
    scale: ScaleMapper,
    points: Vec<ChartPoint>,
    line: Path,
    area: Path,
}

impl ChartGeometry {
    pub fn build(samples: Vec<Sample>, viewport: Viewport, tension: f64) -> ChartResult<Self> {
        let scale = ScaleMapper::new(&samples, &viewport)?;
        let points = build_points(&samples, &scale);
        let line = smooth_path(&points, tension);
        let area = area_path(&line, &points, viewport.baseline_y());
        Ok(Self {
            samples,
            viewport,
            scale,
            points,
            line,
            area,
        })
    }

    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn scale(&self) -> &ScaleMapper {
        &self.scale
    }

    pub fn points(&self) -> &[ChartPoint] {
        &self.points
    }

    pub fn line(&self) -> &Path {
        &self.line
    }

    pub fn area(&self) -> &Path {
        &self.area
    }
}

/// Headline figures above the chart.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValueSummary {
    pub value: f64,
    pub change: f64,
    pub change_percent: f64,
    pub is_positive: bool,
    pub period: Period,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ValueChart {
    store: SeriesStore,
    config: ChartConfig,
    period: Period,
    geometry: ChartGeometry,
    reveal: RevealController,
    inspector: InspectionController,
}

impl ValueChart {
    /// Build a chart `width` pixels wide for the configured initial period and
    /// start the draw-in sweep.
    pub fn new(store: SeriesStore, config: ChartConfig, width: f64, now_ms: f64) -> ChartResult<Self> {
        let store = store.with_windows(config.windows);
        let period = config.initial_period;
        let viewport = Viewport::new(width, config.height, config.margins)?;
        let geometry = ChartGeometry::build(store.slice(period)?, viewport, config.tension)?;
        let inspector =
            InspectionController::new(geometry.points.clone(), viewport, config.tooltip)?;
        let mut reveal = RevealController::new(viewport.width, config.reveal_ms);
        reveal.on_data_change(now_ms);

        info!(
            samples = store.len(),
            period = period.code(),
            width,
            "value chart ready"
        );

        Ok(Self {
            store,
            config,
            period,
            geometry,
            reveal,
            inspector,
        })
    }

    pub fn period(&self) -> Period {
        self.period
    }

    pub fn geometry(&self) -> &ChartGeometry {
        &self.geometry
    }

    pub fn reveal(&self) -> &RevealController {
        &self.reveal
    }

    pub fn active(&self) -> Option<&ActiveSample> {
        self.inspector.active()
    }

    /// Switch to another trailing window. Any hover is dropped and the reveal
    /// sweep restarts from zero for the new data.
    pub fn select_period(&mut self, period: Period, now_ms: f64) -> ChartResult<()> {
        let samples = self.store.slice(period)?;
        self.rebuild(samples, self.geometry.viewport)?;
        self.reveal.on_data_change(now_ms);
        self.period = period;
        debug!(period = period.code(), "period selected");
        Ok(())
    }

    /// Adapt to a new surface width, keeping the current period. An active
    /// hover is dropped since its pixel position no longer applies.
    pub fn resize(&mut self, width: f64, now_ms: f64) -> ChartResult<()> {
        if (width - self.geometry.viewport.width).abs() < f64::EPSILON {
            return Ok(());
        }
        let viewport = Viewport::new(width, self.config.height, self.config.margins)?;
        let was_hovering = self.inspector.active().is_some();
        self.rebuild(self.geometry.samples.clone(), viewport)?;
        self.reveal.set_width(width, now_ms);
        if was_hovering {
            self.reveal.on_hover_end();
        }
        debug!(width, "value chart resized");
        Ok(())
    }

    /// Page x of the chart surface's left edge.
    pub fn set_origin(&mut self, origin_x: f64) -> ChartResult<()> {
        self.inspector.set_origin(origin_x)
    }

    pub fn handle_input(&mut self, event: InputEvent) -> ChartResult<InspectionOutcome> {
        self.inspector.handle(event, &mut self.reveal)
    }

    /// Advance animations; returns whether another frame is needed.
    pub fn tick(&mut self, now_ms: f64) -> bool {
        self.reveal.tick(now_ms);
        self.reveal.is_animating()
    }

    pub fn scene(&self, now_ms: f64) -> ChartScene {
        chart_scene(
            &self.geometry,
            self.reveal.boundary_at(now_ms),
            self.inspector.active(),
        )
    }

    pub fn summary(&self) -> ChartResult<ValueSummary> {
        let latest = self.store.latest()?;
        let (value, change, base) = match self.inspector.active() {
            Some(active) => (active.sample.value, active.sample.value - latest, latest),
            None => {
                let start = self.store.period_start(self.period)?;
                (latest, latest - start, start)
            }
        };
        let change_percent = if base != 0.0 { change / base * 100.0 } else { 0.0 };

        Ok(ValueSummary {
            value,
            change,
            change_percent,
            is_positive: change >= 0.0,
            period: self.period,
        })
    }

    fn rebuild(&mut self, samples: Vec<Sample>, viewport: Viewport) -> ChartResult<()> {
        let geometry = ChartGeometry::build(samples, viewport, self.config.tension)?;
        let mut inspector =
            InspectionController::new(geometry.points.clone(), viewport, self.config.tooltip)?;
        inspector.set_origin(self.inspector.origin())?;

        self.geometry = geometry;
        self.inspector = inspector;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::ChartError;
    use crate::core::series::PeriodWindows;
    use time::macros::date;

    fn chart(values: Vec<f64>, windows: PeriodWindows) -> ValueChart {
        let store = SeriesStore::new(values, date!(2026 - 10 - 19)).unwrap();
        let config = ChartConfig {
            windows,
            ..ChartConfig::default()
        };
        ValueChart::new(store, config, 358.0, 0.0).unwrap()
    }

    #[test]
    fn starts_with_draw_in_sweep() {
        let mut chart = chart((0..90).map(|i| 1000.0 + i as f64).collect(), PeriodWindows::default());
        assert_eq!(chart.period(), Period::ThreeMonths);
        assert_eq!(chart.reveal().boundary_at(0.0), 0.0);
        assert!(chart.tick(400.0));
        assert!(!chart.tick(800.0));
        assert_eq!(chart.reveal().boundary_at(800.0), 358.0);
    }

    #[test]
    fn period_switch_restarts_sweep_and_clears_hover() {
        let mut chart = chart((0..90).map(|i| 1000.0 + i as f64).collect(), PeriodWindows::default());
        chart.tick(900.0);
        chart
            .handle_input(InputEvent::PointerMove { client_x: 100.0 })
            .unwrap();
        assert!(chart.active().is_some());

        chart.select_period(Period::OneWeek, 1000.0).unwrap();
        assert_eq!(chart.geometry().samples().len(), 7);
        assert!(chart.active().is_none());
        assert_eq!(chart.reveal().boundary_at(1000.0), 0.0);
        assert!(chart.reveal().is_animating());
    }

    #[test]
    fn summary_follows_hover() {
        let mut chart = chart(vec![100.0, 110.0, 90.0, 120.0], PeriodWindows::uniform(4));
        let idle = chart.summary().unwrap();
        assert_eq!(idle.value, 120.0);
        assert_eq!(idle.change, 20.0);
        assert!((idle.change_percent - 20.0).abs() < 1e-9);
        assert!(idle.is_positive);

        chart
            .handle_input(InputEvent::PointerMove { client_x: 200.0 })
            .unwrap();
        let hovered = chart.summary().unwrap();
        assert_eq!(hovered.value, 90.0);
        assert_eq!(hovered.change, -30.0);
        assert!((hovered.change_percent + 25.0).abs() < 1e-9);
        assert!(!hovered.is_positive);
    }

    #[test]
    fn resize_keeps_period_and_hover_origin() {
        let mut chart = chart(vec![100.0, 110.0, 90.0, 120.0], PeriodWindows::uniform(4));
        chart.set_origin(10.0).unwrap();
        chart.resize(458.0, 0.0).unwrap();
        assert_eq!(chart.geometry().viewport().plot_width(), 400.0);
        let outcome = chart
            .handle_input(InputEvent::PointerMove { client_x: 410.0 })
            .unwrap();
        assert_eq!(outcome.active.map(|a| a.sample.index), Some(3));
    }

    #[test]
    fn non_finite_pointer_leaves_chart_untouched() {
        let mut chart = chart(vec![100.0, 110.0, 90.0, 120.0], PeriodWindows::uniform(4));
        chart.tick(1000.0);
        let err = chart
            .handle_input(InputEvent::PointerMove { client_x: f64::NAN })
            .unwrap_err();
        assert!(matches!(err, ChartError::InvalidCoordinate { .. }));
        assert!(chart.active().is_none());
        assert_eq!(chart.reveal().boundary_at(1000.0), 358.0);
        assert!(chart.set_origin(f64::INFINITY).is_err());
    }

    #[test]
    fn empty_series_never_builds() {
        let store = SeriesStore::new(Vec::new(), date!(2026 - 10 - 19)).unwrap();
        let err = ValueChart::new(store, ChartConfig::default(), 358.0, 0.0).unwrap_err();
        assert!(matches!(err, ChartError::EmptySeries));
    }
}
