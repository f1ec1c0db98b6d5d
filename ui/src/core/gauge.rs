//! Semi-circular health score gauge.
//!
//! Angles are in degrees, standard math orientation (0° = right, 90° = up),
//! with the arc centre near the bottom of the canvas. Progress 0 sits at 180°
//! (far left) and progress 1 at 0° (far right).

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::animation::{Easing, Tween};

pub const DEFAULT_GAUGE_MS: f64 = 1500.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GaugeGeometry {
    pub width: f64,
    pub height: f64,
    pub radius: f64,
    pub stroke_width: f64,
    /// Distance from the canvas bottom to the arc centre.
    pub bottom_inset: f64,
}

impl Default for GaugeGeometry {
    fn default() -> Self {
        Self {
            width: 280.0,
            height: 150.0,
            radius: 110.0,
            stroke_width: 18.0,
            bottom_inset: 10.0,
        }
    }
}

impl GaugeGeometry {
    pub fn center(&self) -> (f64, f64) {
        (self.width / 2.0, self.height - self.bottom_inset)
    }

    pub fn point(&self, angle_deg: f64) -> (f64, f64) {
        let (cx, cy) = self.center();
        let rad = angle_deg.to_radians();
        (cx + self.radius * rad.cos(), cy - self.radius * rad.sin())
    }

    /// Length of the full half circle.
    pub fn arc_length(&self) -> f64 {
        PI * self.radius
    }

    /// Dash offset that shows `progress` of the track, filling left to right.
    pub fn dash_offset(&self, progress: f64) -> f64 {
        self.arc_length() * (1.0 - progress.clamp(0.0, 1.0))
    }

    /// SVG path data for the half-circle track, left to right over the top.
    pub fn track_path(&self) -> String {
        let (sx, sy) = self.point(180.0);
        let (ex, ey) = self.point(0.0);
        let r = self.radius;
        format!("M {sx} {sy} A {r} {r} 0 0 1 {ex} {ey}")
    }
}

pub fn angle_for(progress: f64) -> f64 {
    180.0 - progress * 180.0
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreLabel {
    Excellent,
    Good,
    NeedsWork,
    NeedsAttention,
}

impl ScoreLabel {
    pub fn for_score(score: u8) -> Self {
        if score >= 80 {
            ScoreLabel::Excellent
        } else if score >= 60 {
            ScoreLabel::Good
        } else if score >= 40 {
            ScoreLabel::NeedsWork
        } else {
            ScoreLabel::NeedsAttention
        }
    }

    pub fn text(self) -> &'static str {
        match self {
            ScoreLabel::Excellent => "Excellent",
            ScoreLabel::Good => "Good",
            ScoreLabel::NeedsWork => "Needs Work",
            ScoreLabel::NeedsAttention => "Needs Attention",
        }
    }

    pub fn colors(self) -> LabelColors {
        match self {
            ScoreLabel::Excellent => LabelColors {
                tone: Tone::Brand,
                background: "rgba(0,184,217,0.12)",
                text: BRAND_CYAN,
                border: "rgba(0,184,217,0.25)",
            },
            ScoreLabel::Good => LabelColors {
                tone: Tone::Brand,
                background: "rgba(0,184,217,0.10)",
                text: BRAND_CYAN,
                border: "rgba(0,184,217,0.20)",
            },
            ScoreLabel::NeedsWork | ScoreLabel::NeedsAttention => LabelColors {
                tone: Tone::Alert,
                background: "rgba(239,68,68,0.10)",
                text: ALERT_ROSE,
                border: "rgba(239,68,68,0.20)",
            },
        }
    }
}

pub const BRAND_CYAN: &str = "#00b8d9";
pub const ALERT_ROSE: &str = "#ef4444";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Brand,
    Alert,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LabelColors {
    pub tone: Tone,
    pub background: &'static str,
    pub text: &'static str,
    pub border: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GaugeAnimator {
    geometry: GaugeGeometry,
    duration_ms: f64,
    score: u8,
    progress: Tween,
}

impl GaugeAnimator {
    pub fn new(geometry: GaugeGeometry, duration_ms: f64) -> Self {
        Self {
            geometry,
            duration_ms,
            score: 0,
            progress: Tween::idle(0.0),
        }
    }

    pub fn geometry(&self) -> &GaugeGeometry {
        &self.geometry
    }

    pub fn score(&self) -> u8 {
        self.score
    }

    pub fn label(&self) -> ScoreLabel {
        ScoreLabel::for_score(self.score)
    }

    /// Animate towards `target_score` (clamped to 0..=100) from wherever the
    /// progress currently is, superseding any animation in flight.
    pub fn animate_to(&mut self, target_score: i32, now_ms: f64) {
        let score = target_score.clamp(0, 100) as u8;
        let target = f64::from(score) / 100.0;
        debug!(
            score,
            from = self.progress.value_at(now_ms),
            "retargeting gauge"
        );
        self.score = score;
        self.progress
            .retarget(target, now_ms, self.duration_ms, Easing::EaseOut);
    }

    pub fn is_animating(&self) -> bool {
        self.progress.is_animating()
    }

    pub fn tick(&mut self, now_ms: f64) -> f64 {
        self.progress.tick(now_ms)
    }

    pub fn progress_at(&self, now_ms: f64) -> f64 {
        self.progress.value_at(now_ms)
    }

    pub fn angle_at(&self, now_ms: f64) -> f64 {
        angle_for(self.progress_at(now_ms))
    }

    pub fn dot_at(&self, now_ms: f64) -> (f64, f64) {
        self.geometry.point(self.angle_at(now_ms))
    }
}
