//! Bar Chart Geometry
//!
//! Axis scaling and bar placement for the category chart. Pure math; the
//! frontend only strokes what this computes.

use crate::model::ChartDatum;

/// Horizontal grid lines drawn above the baseline
pub const DEFAULT_TICKS: usize = 5;

/// Fraction of each category slot covered by its bar
const BAR_FILL: f64 = 0.7;

/// Drawing surface and plot margins, in canvas pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartArea {
    pub width: f64,
    pub height: f64,
    pub margin_left: f64,
    pub margin_right: f64,
    pub margin_top: f64,
    pub margin_bottom: f64,
}

impl Default for ChartArea {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 400.0,
            margin_left: 60.0,
            margin_right: 20.0,
            margin_top: 20.0,
            margin_bottom: 60.0,
        }
    }
}

impl ChartArea {
    pub fn plot_width(&self) -> f64 {
        (self.width - self.margin_left - self.margin_right).max(0.0)
    }

    pub fn plot_height(&self) -> f64 {
        (self.height - self.margin_top - self.margin_bottom).max(0.0)
    }

    /// Canvas y of the zero line
    pub fn baseline(&self) -> f64 {
        self.margin_top + self.plot_height()
    }
}

/// Value axis: tick spacing and the top of the scale
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValueAxis {
    pub step: f64,
    pub max: f64,
}

impl ValueAxis {
    /// Scale that fits `max_value` using round tick steps (1, 2, 5 x 10^n).
    /// Steps never go below one since counts are integers.
    pub fn fit(max_value: u64, ticks: usize) -> Self {
        if max_value == 0 || ticks == 0 {
            return Self { step: 1.0, max: 1.0 };
        }

        let raw = max_value as f64 / ticks as f64;
        let magnitude = 10f64.powf(raw.log10().floor());
        let normalized = raw / magnitude;
        let nice = if normalized <= 1.0 {
            1.0
        } else if normalized <= 2.0 {
            2.0
        } else if normalized <= 5.0 {
            5.0
        } else {
            10.0
        };
        let step = (nice * magnitude).max(1.0);

        Self {
            step,
            max: (max_value as f64 / step).ceil() * step,
        }
    }

    /// Tick values from zero to `max`, inclusive
    pub fn ticks(&self) -> Vec<f64> {
        let count = (self.max / self.step).round() as usize;
        (0..=count).map(|i| i as f64 * self.step).collect()
    }

    /// Canvas y for `value`
    pub fn y_for(&self, value: f64, area: &ChartArea) -> f64 {
        area.baseline() - (value / self.max) * area.plot_height()
    }
}

/// One placed bar
#[derive(Debug, Clone, PartialEq)]
pub struct Bar {
    pub name: String,
    pub value: u64,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Bar {
    /// Horizontal center, where the category label goes
    pub fn center_x(&self) -> f64 {
        self.x + self.width / 2.0
    }
}

/// Place one bar per datum, left to right in input order
pub fn layout_bars(data: &[ChartDatum], axis: &ValueAxis, area: &ChartArea) -> Vec<Bar> {
    if data.is_empty() {
        return Vec::new();
    }

    let slot = area.plot_width() / data.len() as f64;
    let width = slot * BAR_FILL;

    data.iter()
        .enumerate()
        .map(|(i, datum)| {
            let y = axis.y_for(datum.value as f64, area);
            Bar {
                name: datum.name.clone(),
                value: datum.value,
                x: area.margin_left + i as f64 * slot + (slot - width) / 2.0,
                y,
                width,
                height: area.baseline() - y,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn datum(name: &str, value: u64) -> ChartDatum {
        ChartDatum {
            name: name.to_string(),
            value,
        }
    }

    fn small_area() -> ChartArea {
        ChartArea {
            width: 220.0,
            height: 120.0,
            margin_left: 10.0,
            margin_right: 10.0,
            margin_top: 10.0,
            margin_bottom: 10.0,
        }
    }

    #[test]
    fn test_axis_rounds_to_nice_steps() {
        assert_eq!(ValueAxis::fit(8, 5), ValueAxis { step: 2.0, max: 8.0 });
        assert_eq!(ValueAxis::fit(47, 5), ValueAxis { step: 10.0, max: 50.0 });
        assert_eq!(ValueAxis::fit(3, 5), ValueAxis { step: 1.0, max: 3.0 });
        assert_eq!(ValueAxis::fit(1200, 5), ValueAxis { step: 500.0, max: 1500.0 });
    }

    #[test]
    fn test_axis_for_empty_data() {
        let axis = ValueAxis::fit(0, DEFAULT_TICKS);
        assert_eq!(axis.ticks(), vec![0.0, 1.0]);
    }

    #[test]
    fn test_ticks() {
        let axis = ValueAxis::fit(8, 5);
        assert_eq!(axis.ticks(), vec![0.0, 2.0, 4.0, 6.0, 8.0]);
    }

    #[test]
    fn test_layout_bars() {
        let area = small_area();
        let data = vec![datum("A", 2), datum("B", 8)];
        let axis = ValueAxis::fit(8, 5);

        let bars = layout_bars(&data, &axis, &area);

        assert_eq!(bars.len(), 2);
        assert_eq!(bars[0].name, "A");
        assert_eq!(bars[0].x, 25.0);
        assert_eq!(bars[0].width, 70.0);
        assert_eq!(bars[0].height, 25.0);
        assert_eq!(bars[0].y, 85.0);
        assert_eq!(bars[1].x, 125.0);
        assert_eq!(bars[1].y, 10.0);
        assert_eq!(bars[1].center_x(), 160.0);
    }

    #[test]
    fn test_layout_empty() {
        let axis = ValueAxis::fit(0, 5);
        assert!(layout_bars(&[], &axis, &ChartArea::default()).is_empty());
    }

    #[test]
    fn test_degenerate_area_does_not_go_negative() {
        let area = ChartArea {
            width: 10.0,
            height: 10.0,
            ..ChartArea::default()
        };
        assert_eq!(area.plot_width(), 0.0);
        assert_eq!(area.plot_height(), 0.0);
    }
}
