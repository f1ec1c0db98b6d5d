//! Revealed/unrevealed split of the value chart.
//!
//! The boundary is a single x position: everything left of it is drawn in the
//! brand colour, everything right of it muted. On a data change the boundary
//! sweeps from 0 to the full width (the line "drawing in"); while inspecting,
//! it snaps to the hovered sample.

use tracing::debug;

use super::animation::{Easing, Tween};
use super::error::{finite, ChartResult};

pub const DEFAULT_REVEAL_MS: f64 = 800.0;

#[derive(Debug, Clone, PartialEq)]
pub struct RevealController {
    width: f64,
    duration_ms: f64,
    boundary: Tween,
}

impl RevealController {
    /// Starts fully revealed.
    pub fn new(width: f64, duration_ms: f64) -> Self {
        let width = width.max(0.0);
        Self {
            width,
            duration_ms,
            boundary: Tween::idle(width),
        }
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    /// Restart the draw-in sweep, cancelling any sweep already running.
    pub fn on_data_change(&mut self, now_ms: f64) {
        debug!(width = self.width, "restarting reveal sweep");
        self.boundary.jump(0.0);
        self.boundary
            .retarget(self.width, now_ms, self.duration_ms, Easing::REVEAL);
    }

    /// Snap to a hovered pixel. Positions outside the surface clamp to its
    /// edges; a non-finite position is refused and leaves the boundary as is.
    pub fn on_hover(&mut self, pixel_x: f64) -> ChartResult<()> {
        let pixel_x = finite("hover x", pixel_x)?;
        self.boundary.jump(pixel_x.clamp(0.0, self.width));
        Ok(())
    }

    pub fn on_hover_end(&mut self) {
        self.boundary.jump(self.width);
    }

    /// Resize the surface. The boundary is kept proportional and any running
    /// sweep retargets the new width.
    pub fn set_width(&mut self, width: f64, now_ms: f64) {
        let width = width.max(0.0);
        let old = self.width;
        self.width = width;
        match self.boundary {
            Tween::Animating { to, start_ms, .. } => {
                let elapsed = now_ms - start_ms;
                let remaining = (self.duration_ms - elapsed).max(0.0);
                let scaled = if to > 0.0 {
                    self.boundary.value_at(now_ms) / to * width
                } else {
                    0.0
                };
                self.boundary.jump(scaled);
                self.boundary
                    .retarget(width, now_ms, remaining, Easing::REVEAL);
            }
            Tween::Idle { value } => {
                let scaled = if old > 0.0 { value / old * width } else { width };
                self.boundary.jump(scaled.clamp(0.0, width));
            }
        }
    }

    pub fn is_animating(&self) -> bool {
        self.boundary.is_animating()
    }

    /// Advance the sweep; returns the boundary at `now_ms`.
    pub fn tick(&mut self, now_ms: f64) -> f64 {
        self.boundary.tick(now_ms).clamp(0.0, self.width)
    }

    pub fn boundary_at(&self, now_ms: f64) -> f64 {
        self.boundary.value_at(now_ms).clamp(0.0, self.width)
    }

    pub fn revealed_width(&self, now_ms: f64) -> f64 {
        self.boundary_at(now_ms)
    }

    pub fn unrevealed_width(&self, now_ms: f64) -> f64 {
        self.width - self.boundary_at(now_ms)
    }
}
