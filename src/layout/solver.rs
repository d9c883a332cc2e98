use std::str::FromStr;

use crate::foundation::{
    core::{Axis, CanvasSize},
    error::{BackdropError, BackdropResult},
    math::{round_dim, round_half_even},
};

/// Convert `percent` of the canvas extent along `axis` into whole pixels.
///
/// No validation is applied; negative or oversized percentages produce the matching
/// arithmetic result.
pub fn percent_to_pixels(canvas: CanvasSize, percent: f64, axis: Axis) -> i64 {
    round_half_even(f64::from(canvas.extent(axis)) / 100.0 * percent)
}

/// Offset that centers `content` inside `container` along one axis.
pub fn centered_offset(container: u32, content: u32) -> i64 {
    round_half_even(f64::from(container) / 2.0 - f64::from(content) / 2.0)
}

/// Horizontal anchor of an element on the canvas.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum HorizontalAlign {
    /// Left edge, pushed right by the left padding.
    Left,
    /// Canvas center, shifted by `left - right` padding.
    #[default]
    Center,
    /// Right edge, shifted by the right padding.
    Right,
}

impl FromStr for HorizontalAlign {
    type Err = BackdropError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "left" => Ok(Self::Left),
            "center" => Ok(Self::Center),
            "right" => Ok(Self::Right),
            other => Err(BackdropError::validation(format!(
                "unknown horizontal alignment '{other}' (expected left, center, or right)"
            ))),
        }
    }
}

/// Vertical anchor of an element on the canvas.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum VerticalAlign {
    /// Top edge, pushed down by the top padding.
    Top,
    /// Canvas middle, shifted by `top - bottom` padding.
    #[default]
    Middle,
    /// Bottom edge, pushed up by the bottom padding.
    Bottom,
}

impl FromStr for VerticalAlign {
    type Err = BackdropError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "top" => Ok(Self::Top),
            "middle" => Ok(Self::Middle),
            "bottom" => Ok(Self::Bottom),
            other => Err(BackdropError::validation(format!(
                "unknown vertical alignment '{other}' (expected top, middle, or bottom)"
            ))),
        }
    }
}

/// Anchored placement of an element, with paddings in percent of the canvas.
///
/// Left/right paddings are percentages of canvas width, top/bottom of canvas height.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PlacementSpec {
    /// Horizontal anchor.
    pub horizontal_align: HorizontalAlign,
    /// Vertical anchor.
    pub vertical_align: VerticalAlign,
    /// Left padding, percent of canvas width.
    pub padding_left: f64,
    /// Right padding, percent of canvas width.
    pub padding_right: f64,
    /// Top padding, percent of canvas height.
    pub padding_top: f64,
    /// Bottom padding, percent of canvas height.
    pub padding_bottom: f64,
    /// Rescale the element so its height is this percent of canvas height. `0` leaves it unscaled.
    pub scaled_height_percent: Option<f64>,
}

impl Default for PlacementSpec {
    fn default() -> Self {
        Self {
            horizontal_align: HorizontalAlign::Center,
            vertical_align: VerticalAlign::Middle,
            padding_left: 0.0,
            padding_right: 0.0,
            padding_top: 0.0,
            padding_bottom: 0.0,
            scaled_height_percent: None,
        }
    }
}

impl PlacementSpec {
    /// Placement of the logo on the background: bottom center, 10% tall, 3.5% off the bottom.
    pub fn logo() -> Self {
        Self {
            horizontal_align: HorizontalAlign::Center,
            vertical_align: VerticalAlign::Bottom,
            padding_bottom: 3.5,
            scaled_height_percent: Some(10.0),
            ..Self::default()
        }
    }

    /// Reject non-finite numbers coming from user-provided layout files.
    pub fn validate(&self) -> BackdropResult<()> {
        let fields = [
            ("padding_left", self.padding_left),
            ("padding_right", self.padding_right),
            ("padding_top", self.padding_top),
            ("padding_bottom", self.padding_bottom),
        ];
        for (name, v) in fields {
            if !v.is_finite() {
                return Err(BackdropError::validation(format!("{name} must be finite")));
            }
        }
        match self.scaled_height_percent {
            Some(p) if !p.is_finite() || p < 0.0 => Err(BackdropError::validation(
                "scaled_height_percent must be finite and >= 0",
            )),
            _ => Ok(()),
        }
    }
}

/// Top-left pixel offset of a placed element. May be negative or past the canvas edge.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Placement {
    /// Horizontal offset in pixels.
    pub x: i64,
    /// Vertical offset in pixels.
    pub y: i64,
}

/// Size of `element` after applying `scaled_height_percent`, preserving aspect ratio.
pub fn scaled_element_size(
    canvas: CanvasSize,
    element: CanvasSize,
    scaled_height_percent: Option<f64>,
) -> CanvasSize {
    let Some(percent) = scaled_height_percent.filter(|p| *p != 0.0) else {
        return element;
    };
    if element.height == 0 {
        return element;
    }

    let target_height = round_half_even(f64::from(canvas.height) / (100.0 / percent));
    let factor = target_height as f64 / f64::from(element.height);
    CanvasSize::new(
        round_dim(f64::from(element.width) * factor),
        round_dim(f64::from(element.height) * factor),
    )
}

/// Compute where an element of size `element` lands on `canvas` under `spec`.
///
/// `element` is the size after any scaling. Right alignment adds the right padding, so a
/// positive value pushes the element past the right edge. Huge paddings saturate at the `i64`
/// range instead of overflowing.
pub fn resolve_placement(
    canvas: CanvasSize,
    element: CanvasSize,
    spec: &PlacementSpec,
) -> Placement {
    let pad_left = percent_to_pixels(canvas, spec.padding_left, Axis::Horizontal);
    let pad_right = percent_to_pixels(canvas, spec.padding_right, Axis::Horizontal);
    let pad_top = percent_to_pixels(canvas, spec.padding_top, Axis::Vertical);
    let pad_bottom = percent_to_pixels(canvas, spec.padding_bottom, Axis::Vertical);

    let x = match spec.horizontal_align {
        HorizontalAlign::Left => pad_left,
        HorizontalAlign::Center => round_half_even(
            f64::from(canvas.width) / 2.0 - f64::from(element.width) / 2.0 + pad_left as f64
                - pad_right as f64,
        ),
        HorizontalAlign::Right => i64::from(canvas.width)
            .saturating_sub(i64::from(element.width))
            .saturating_add(pad_right),
    };

    let y = match spec.vertical_align {
        VerticalAlign::Top => pad_top,
        VerticalAlign::Middle => round_half_even(
            f64::from(canvas.height) / 2.0 - f64::from(element.height) / 2.0 + pad_top as f64
                - pad_bottom as f64,
        ),
        VerticalAlign::Bottom => i64::from(canvas.height)
            .saturating_sub(i64::from(element.height))
            .saturating_sub(pad_bottom),
    };

    Placement { x, y }
}

#[cfg(test)]
#[path = "../../tests/unit/layout/solver.rs"]
mod tests;
