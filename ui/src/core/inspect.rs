//! Pointer/touch scrubbing over the value chart.
//!
//! Every input event is resolved synchronously to the nearest sample. The
//! controller keeps the current [`ActiveSample`] and moves the reveal boundary
//! along with it.

use serde::{Deserialize, Serialize};

use super::curve::ChartPoint;
use super::error::{finite, ChartError, ChartResult};
use super::reveal::RevealController;
use super::scale::Viewport;
use super::series::Sample;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TooltipLayout {
    /// Fixed width of the date pill.
    pub width: f64,
    /// Distance of the pill above the top margin.
    pub offset: f64,
}

impl Default for TooltipLayout {
    fn default() -> Self {
        Self {
            width: 110.0,
            offset: 28.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    PointerMove { client_x: f64 },
    TouchMove { client_x: f64 },
    PointerLeave,
    TouchEnd,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ActiveSample {
    pub sample: Sample,
    pub pixel_x: f64,
    pub pixel_y: f64,
    /// Horizontal centre of the tooltip, kept inside the viewport.
    pub tooltip_x: f64,
    pub tooltip_y: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InspectionOutcome {
    pub active: Option<ActiveSample>,
    /// The binding should cancel the platform default (touch scrolling).
    pub prevent_default: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct InspectionController {
    points: Vec<ChartPoint>,
    viewport: Viewport,
    origin_x: f64,
    tooltip: TooltipLayout,
    active: Option<ActiveSample>,
}

impl InspectionController {
    pub fn new(
        points: Vec<ChartPoint>,
        viewport: Viewport,
        tooltip: TooltipLayout,
    ) -> ChartResult<Self> {
        if points.is_empty() {
            return Err(ChartError::EmptySeries);
        }
        viewport.validate()?;
        Ok(Self {
            points,
            viewport,
            origin_x: 0.0,
            tooltip,
            active: None,
        })
    }

    /// Page x of the surface's left edge; subtracted from client coordinates.
    pub fn set_origin(&mut self, origin_x: f64) -> ChartResult<()> {
        self.origin_x = finite("surface origin", origin_x)?;
        Ok(())
    }

    pub fn origin(&self) -> f64 {
        self.origin_x
    }

    pub fn active(&self) -> Option<&ActiveSample> {
        self.active.as_ref()
    }

    pub fn handle(
        &mut self,
        event: InputEvent,
        reveal: &mut RevealController,
    ) -> ChartResult<InspectionOutcome> {
        let outcome = match event {
            InputEvent::PointerMove { client_x } => InspectionOutcome {
                active: Some(self.on_pointer_move(client_x, reveal)?),
                prevent_default: false,
            },
            InputEvent::TouchMove { client_x } => InspectionOutcome {
                active: Some(self.on_pointer_move(client_x, reveal)?),
                prevent_default: true,
            },
            InputEvent::PointerLeave | InputEvent::TouchEnd => {
                self.on_pointer_leave(reveal);
                InspectionOutcome {
                    active: None,
                    prevent_default: false,
                }
            }
        };
        Ok(outcome)
    }

    /// A non-finite `client_x` is refused before any state changes.
    pub fn on_pointer_move(
        &mut self,
        client_x: f64,
        reveal: &mut RevealController,
    ) -> ChartResult<ActiveSample> {
        let active = self.resolve(client_x)?;
        reveal.on_hover(active.pixel_x)?;
        self.active = Some(active);
        Ok(active)
    }

    pub fn on_pointer_leave(&mut self, reveal: &mut RevealController) {
        self.active = None;
        reveal.on_hover_end();
    }

    /// Index of the sample nearest to a plot-local x. Out-of-range positions
    /// clamp to the nearest end.
    pub fn nearest_index(&self, local_x: f64) -> ChartResult<usize> {
        let local_x = finite("pointer x", local_x)?;
        let last = self.points.len() - 1;
        let plot_width = self.viewport.plot_width();
        let normalized = (local_x.clamp(0.0, plot_width) / plot_width).clamp(0.0, 1.0);
        Ok(((normalized * last as f64).round() as usize).min(last))
    }

    pub fn resolve(&self, client_x: f64) -> ChartResult<ActiveSample> {
        let client_x = finite("pointer x", client_x)?;
        let local_x = client_x - self.origin_x - self.viewport.margins.left;
        let point = self.points[self.nearest_index(local_x)?];
        Ok(ActiveSample {
            sample: point.sample(),
            pixel_x: point.x,
            pixel_y: point.y,
            tooltip_x: self.tooltip_x(point.x),
            tooltip_y: self.viewport.margins.top - self.tooltip.offset,
        })
    }

    fn tooltip_x(&self, x: f64) -> f64 {
        let half = self.tooltip.width / 2.0;
        if x - half < 0.0 {
            half
        } else if x + half > self.viewport.width {
            self.viewport.width - half
        } else {
            x
        }
    }
}
