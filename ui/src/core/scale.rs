//! Value/index to pixel transforms for the value chart.

use serde::{Deserialize, Serialize};

use super::error::{ChartError, ChartResult};
use super::series::Sample;

/// Share of the value range added above the max and below the min.
const HEADROOM: f64 = 0.1;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Margins {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Default for Margins {
    fn default() -> Self {
        Self {
            top: 40.0,
            right: 58.0,
            bottom: 12.0,
            left: 0.0,
        }
    }
}

/// Size of the rendering surface, fixed for one render pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
    pub margins: Margins,
}

impl Viewport {
    pub fn new(width: f64, height: f64, margins: Margins) -> ChartResult<Self> {
        let viewport = Self {
            width,
            height,
            margins,
        };
        viewport.validate()?;
        Ok(viewport)
    }

    pub fn validate(&self) -> ChartResult<()> {
        let Margins {
            top,
            right,
            bottom,
            left,
        } = self.margins;
        for (name, value) in [
            ("width", self.width),
            ("height", self.height),
            ("top margin", top),
            ("right margin", right),
            ("bottom margin", bottom),
            ("left margin", left),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ChartError::InvalidViewport(format!(
                    "{name} must be a non-negative number, got {value}"
                )));
            }
        }
        if self.plot_width() <= 0.0 || self.plot_height() <= 0.0 {
            return Err(ChartError::InvalidViewport(format!(
                "margins leave no plot area in a {}x{} viewport",
                self.width, self.height
            )));
        }
        Ok(())
    }

    pub fn plot_width(&self) -> f64 {
        self.width - self.margins.left - self.margins.right
    }

    pub fn plot_height(&self) -> f64 {
        self.height - self.margins.top - self.margins.bottom
    }

    /// y of the chart floor, where the area fill ends.
    pub fn baseline_y(&self) -> f64 {
        self.height - self.margins.bottom
    }
}

/// Derived scale for one slice and viewport. Rebuild whenever either changes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScaleMapper {
    min_value: f64,
    max_value: f64,
    padding: f64,
    sample_count: usize,
    viewport: Viewport,
}

impl ScaleMapper {
    pub fn new(samples: &[Sample], viewport: &Viewport) -> ChartResult<Self> {
        viewport.validate()?;
        let first = samples.first().ok_or(ChartError::EmptySeries)?;

        let (mut min_value, mut max_value) = (first.value, first.value);
        for sample in samples {
            if !sample.value.is_finite() {
                return Err(ChartError::InvalidValue {
                    index: sample.index,
                    value: sample.value,
                });
            }
            min_value = min_value.min(sample.value);
            max_value = max_value.max(sample.value);
        }

        let span = max_value - min_value;
        let padding = if span > 0.0 {
            span * HEADROOM
        } else {
            // Flat series: centre the line instead of dividing by zero.
            max_value.abs().max(1.0) * HEADROOM
        };

        Ok(Self {
            min_value,
            max_value,
            padding,
            sample_count: samples.len(),
            viewport: *viewport,
        })
    }

    pub fn min_value(&self) -> f64 {
        self.min_value
    }

    pub fn max_value(&self) -> f64 {
        self.max_value
    }

    pub fn padding(&self) -> f64 {
        self.padding
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn x_for(&self, index: usize) -> f64 {
        let steps = self.sample_count.saturating_sub(1).max(1) as f64;
        self.viewport.margins.left + index as f64 / steps * self.viewport.plot_width()
    }

    pub fn y_for(&self, value: f64) -> f64 {
        let low = self.min_value - self.padding;
        let high = self.max_value + self.padding;
        let plot_height = self.viewport.plot_height();
        self.viewport.margins.top + plot_height - (value - low) / (high - low) * plot_height
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::date;

    fn samples(values: &[f64]) -> Vec<Sample> {
        values
            .iter()
            .enumerate()
            .map(|(index, &value)| Sample {
                index,
                value,
                date: date!(2026 - 10 - 19),
            })
            .collect()
    }

    fn viewport() -> Viewport {
        Viewport::new(358.0, 160.0, Margins::default()).unwrap()
    }

    #[test]
    fn x_spans_plot_width() {
        let scale = ScaleMapper::new(&samples(&[100.0, 110.0, 90.0, 120.0]), &viewport()).unwrap();
        assert_eq!(scale.x_for(0), 0.0);
        assert!((scale.x_for(3) - 300.0).abs() < 1e-9);
        assert!(scale.x_for(1) < scale.x_for(2));
    }

    #[test]
    fn y_decreases_as_value_grows() {
        let scale = ScaleMapper::new(&samples(&[100.0, 110.0, 90.0, 120.0]), &viewport()).unwrap();
        assert!(scale.y_for(120.0) < scale.y_for(110.0));
        assert!(scale.y_for(110.0) < scale.y_for(90.0));
        // Headroom keeps the extremes off the plot edges.
        assert!(scale.y_for(120.0) > 40.0);
        assert!(scale.y_for(90.0) < 148.0);
    }

    #[test]
    fn padding_is_ten_percent_of_range() {
        let scale = ScaleMapper::new(&samples(&[100.0, 200.0]), &viewport()).unwrap();
        assert!((scale.padding() - 10.0).abs() < 1e-9);
    }

    #[test]
    fn flat_series_sits_mid_plot() {
        let scale = ScaleMapper::new(&samples(&[50.0, 50.0, 50.0]), &viewport()).unwrap();
        let mid = 40.0 + 108.0 / 2.0;
        assert!((scale.y_for(50.0) - mid).abs() < 1e-9);
    }

    #[test]
    fn single_sample_maps_to_left_edge() {
        let scale = ScaleMapper::new(&samples(&[42.0]), &viewport()).unwrap();
        assert_eq!(scale.x_for(0), 0.0);
        assert!(scale.y_for(42.0).is_finite());
    }

    #[test]
    fn empty_samples_are_rejected() {
        assert!(matches!(
            ScaleMapper::new(&[], &viewport()),
            Err(ChartError::EmptySeries)
        ));
    }

    #[test]
    fn malformed_viewports_fail_fast() {
        assert!(Viewport::new(-1.0, 160.0, Margins::default()).is_err());
        assert!(Viewport::new(f64::NAN, 160.0, Margins::default()).is_err());
        assert!(Viewport::new(40.0, 160.0, Margins::default()).is_err());
    }
}
