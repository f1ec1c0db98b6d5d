//! Screen-space points and smoothed paths for the value line and its area fill.

use std::fmt;

use time::Date;

use super::scale::ScaleMapper;
use super::series::Sample;

pub const DEFAULT_TENSION: f64 = 0.3;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartPoint {
    pub x: f64,
    pub y: f64,
    pub value: f64,
    pub index: usize,
    pub date: Date,
}

impl ChartPoint {
    pub fn sample(&self) -> Sample {
        Sample {
            index: self.index,
            value: self.value,
            date: self.date,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathCommand {
    MoveTo { x: f64, y: f64 },
    LineTo { x: f64, y: f64 },
    CubicTo {
        cp1: (f64, f64),
        cp2: (f64, f64),
        to: (f64, f64),
    },
    Close,
}

/// Declarative path; `Display` renders SVG path data.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Path {
    pub commands: Vec<PathCommand>,
}

impl Path {
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, command) in self.commands.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            match command {
                PathCommand::MoveTo { x, y } => write!(f, "M {x} {y}")?,
                PathCommand::LineTo { x, y } => write!(f, "L {x} {y}")?,
                PathCommand::CubicTo { cp1, cp2, to } => write!(
                    f,
                    "C {} {}, {} {}, {} {}",
                    cp1.0, cp1.1, cp2.0, cp2.1, to.0, to.1
                )?,
                PathCommand::Close => f.write_str("Z")?,
            }
        }
        Ok(())
    }
}

pub fn build_points(samples: &[Sample], scale: &ScaleMapper) -> Vec<ChartPoint> {
    samples
        .iter()
        .map(|sample| ChartPoint {
            x: scale.x_for(sample.index),
            y: scale.y_for(sample.value),
            value: sample.value,
            index: sample.index,
            date: sample.date,
        })
        .collect()
}

/// Catmull-Rom style cubic curve through every point. Endpoints reuse
/// themselves as the missing neighbour. Fewer than two points yield an empty
/// path.
pub fn smooth_path(points: &[ChartPoint], tension: f64) -> Path {
    if points.len() < 2 {
        return Path::default();
    }

    let mut commands = Vec::with_capacity(points.len());
    commands.push(PathCommand::MoveTo {
        x: points[0].x,
        y: points[0].y,
    });

    for i in 0..points.len() - 1 {
        let p1 = &points[i];
        let p2 = &points[i + 1];
        let p0 = if i > 0 { &points[i - 1] } else { p1 };
        let p3 = points.get(i + 2).unwrap_or(p2);

        commands.push(PathCommand::CubicTo {
            cp1: (
                p1.x + (p2.x - p0.x) * tension,
                p1.y + (p2.y - p0.y) * tension,
            ),
            cp2: (
                p2.x - (p3.x - p1.x) * tension,
                p2.y - (p3.y - p1.y) * tension,
            ),
            to: (p2.x, p2.y),
        });
    }

    Path { commands }
}

/// Close `line` down to `baseline_y` for the area fill beneath it.
pub fn area_path(line: &Path, points: &[ChartPoint], baseline_y: f64) -> Path {
    let (Some(first), Some(last)) = (points.first(), points.last()) else {
        return Path::default();
    };
    if line.is_empty() {
        return Path::default();
    }

    let mut commands = line.commands.clone();
    commands.push(PathCommand::LineTo {
        x: last.x,
        y: baseline_y,
    });
    commands.push(PathCommand::LineTo {
        x: first.x,
        y: baseline_y,
    });
    commands.push(PathCommand::Close);
    Path { commands }
}
