//! Declarative description of what to draw.
//!
//! Scenes are rebuilt from state on every frame; the view layer reconciles
//! them onto whatever surface it renders to (SVG in the Dioxus components).

use super::chart::ChartGeometry;
use super::curve::Path;
use super::format;
use super::gauge::{GaugeAnimator, LabelColors, ScoreLabel};
use super::inspect::ActiveSample;

pub const LINE_COLOR: &str = "#00b8d9";
pub const MUTED_LINE_COLOR: &str = "#d1d5db";
pub const MUTED_LINE_OPACITY: f64 = 0.5;
pub const GUIDE_COLOR: &str = "rgba(0, 184, 217, 0.35)";
pub const AXIS_LABEL_COLOR: &str = "#9ca3af";
pub const TRACK_COLOR: &str = "#e5e7eb";

const AXIS_LABEL_GAP: f64 = 8.0;
const AXIS_LABEL_BASELINE: f64 = 5.0;
const HOVER_DOT_RADIUS: f64 = 5.0;
const GAUGE_DOT_RADIUS: f64 = 5.5;
const GAUGE_HALO_RADIUS: f64 = 11.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    pub cx: f64,
    pub cy: f64,
    pub r: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AxisLabel {
    pub x: f64,
    pub y: f64,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Tooltip {
    /// Horizontal centre of the pill.
    pub x: f64,
    pub y: f64,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChartScene {
    pub width: f64,
    pub height: f64,
    pub line: Path,
    pub area: Path,
    /// Coloured part of the line and area.
    pub revealed: Rect,
    /// Muted remainder of the line.
    pub unrevealed: Rect,
    pub guide: Option<Segment>,
    pub hover_dot: Option<Circle>,
    pub tooltip: Option<Tooltip>,
    pub max_label: AxisLabel,
    pub min_label: AxisLabel,
    /// Surface that receives pointer and touch input.
    pub overlay: Rect,
}

pub fn chart_scene(
    geometry: &ChartGeometry,
    boundary: f64,
    active: Option<&ActiveSample>,
) -> ChartScene {
    let viewport = geometry.viewport();
    let scale = geometry.scale();
    let margins = viewport.margins;
    let boundary = boundary.clamp(0.0, viewport.width);
    let label_x = viewport.width - margins.right + AXIS_LABEL_GAP;

    ChartScene {
        width: viewport.width,
        height: viewport.height,
        line: geometry.line().clone(),
        area: geometry.area().clone(),
        revealed: Rect {
            x: 0.0,
            y: 0.0,
            width: boundary,
            height: viewport.height,
        },
        unrevealed: Rect {
            x: boundary,
            y: 0.0,
            width: viewport.width - boundary,
            height: viewport.height,
        },
        guide: active.map(|a| Segment {
            x1: a.pixel_x,
            y1: margins.top,
            x2: a.pixel_x,
            y2: viewport.baseline_y(),
        }),
        hover_dot: active.map(|a| Circle {
            cx: a.pixel_x,
            cy: a.pixel_y,
            r: HOVER_DOT_RADIUS,
        }),
        tooltip: active.map(|a| Tooltip {
            x: a.tooltip_x,
            y: a.tooltip_y,
            text: format::format_date(a.sample.date),
        }),
        max_label: AxisLabel {
            x: label_x,
            y: margins.top + AXIS_LABEL_BASELINE,
            text: format::format_axis_value(scale.max_value()),
        },
        min_label: AxisLabel {
            x: label_x,
            y: viewport.baseline_y() + AXIS_LABEL_BASELINE,
            text: format::format_axis_value(scale.min_value()),
        },
        overlay: Rect {
            x: margins.left,
            y: margins.top,
            width: viewport.plot_width(),
            height: viewport.plot_height(),
        },
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct GaugeScene {
    pub width: f64,
    pub height: f64,
    pub stroke_width: f64,
    pub track: String,
    pub arc_length: f64,
    pub dash_offset: f64,
    pub angle: f64,
    pub dot: Circle,
    pub halo: Circle,
    pub score_text: String,
    pub label: ScoreLabel,
    pub colors: LabelColors,
}

pub fn gauge_scene(gauge: &GaugeAnimator, now_ms: f64) -> GaugeScene {
    let geometry = gauge.geometry();
    let progress = gauge.progress_at(now_ms);
    let (cx, cy) = gauge.dot_at(now_ms);
    let label = gauge.label();

    GaugeScene {
        width: geometry.width,
        height: geometry.height,
        stroke_width: geometry.stroke_width,
        track: geometry.track_path(),
        arc_length: geometry.arc_length(),
        dash_offset: geometry.dash_offset(progress),
        angle: gauge.angle_at(now_ms),
        dot: Circle {
            cx,
            cy,
            r: GAUGE_DOT_RADIUS,
        },
        halo: Circle {
            cx,
            cy,
            r: GAUGE_HALO_RADIUS,
        },
        score_text: format::format_score(gauge.score()),
        label,
        colors: label.colors(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::gauge::{GaugeGeometry, DEFAULT_GAUGE_MS};
    use crate::core::scale::{Margins, Viewport};
    use crate::core::series::Sample;
    use time::macros::date;

    fn geometry() -> ChartGeometry {
        let samples: Vec<Sample> = [100_000.0, 110_000.0, 90_000.0, 120_000.0]
            .iter()
            .enumerate()
            .map(|(index, &value)| Sample {
                index,
                value,
                date: date!(2026 - 10 - 19),
            })
            .collect();
        let viewport = Viewport::new(358.0, 160.0, Margins::default()).unwrap();
        ChartGeometry::build(samples, viewport, 0.3).unwrap()
    }

    #[test]
    fn idle_scene_has_no_hover_marks() {
        let scene = chart_scene(&geometry(), 358.0, None);
        assert!(scene.guide.is_none());
        assert!(scene.hover_dot.is_none());
        assert!(scene.tooltip.is_none());
        assert_eq!(scene.revealed.width + scene.unrevealed.width, 358.0);
        assert_eq!(scene.max_label.text, "120.00K");
        assert_eq!(scene.min_label.text, "90.00K");
        assert_eq!(scene.max_label.x, 308.0);
        assert_eq!(scene.min_label.y, 153.0);
        assert_eq!(scene.overlay.width, 300.0);
    }

    #[test]
    fn clips_partition_the_width() {
        let scene = chart_scene(&geometry(), 1000.0, None);
        assert_eq!(scene.revealed.width, 358.0);
        assert_eq!(scene.unrevealed.width, 0.0);
        let scene = chart_scene(&geometry(), 100.0, None);
        assert_eq!(scene.unrevealed.x, 100.0);
        assert_eq!(scene.unrevealed.width, 258.0);
    }

    #[test]
    fn gauge_scene_tracks_progress() {
        let mut gauge = GaugeAnimator::new(GaugeGeometry::default(), DEFAULT_GAUGE_MS);
        gauge.animate_to(76, 0.0);
        let start = gauge_scene(&gauge, 0.0);
        assert_eq!(start.angle, 180.0);
        assert!((start.dash_offset - start.arc_length).abs() < 1e-9);
        let end = gauge_scene(&gauge, 2000.0);
        assert!((end.angle - 43.2).abs() < 1e-6);
        assert_eq!(end.score_text, "76%");
        assert_eq!(end.label, ScoreLabel::Good);
    }

    #[test]
    fn hover_marks_follow_active_sample() {
        let geometry = geometry();
        let point = geometry.points()[2];
        let active = ActiveSample {
            sample: point.sample(),
            pixel_x: point.x,
            pixel_y: point.y,
            tooltip_x: point.x,
            tooltip_y: 12.0,
        };
        let scene = chart_scene(&geometry, point.x, Some(&active));

        assert_eq!(
            scene.guide,
            Some(Segment {
                x1: point.x,
                y1: 40.0,
                x2: point.x,
                y2: 148.0,
            })
        );
        assert_eq!(
            scene.hover_dot,
            Some(Circle {
                cx: point.x,
                cy: point.y,
                r: 5.0,
            })
        );
        assert!((point.x - 200.0).abs() < 1e-9);
        assert_eq!(point.y, geometry.scale().y_for(90_000.0));
        let tooltip = scene.tooltip.unwrap();
        assert_eq!((tooltip.x, tooltip.y), (point.x, 12.0));
        assert_eq!(scene.revealed.width, point.x);
    }
}
