//! Popup and editable controls: combo boxes, spin boxes and line edits.
//!
//! All three share the same shape: an optional frame, an edit or label
//! field, and (for combo and spin boxes) a square button strip at the
//! trailing edge.

use crate::config::{ComboBoxConfig, LineEditConfig, SpinBoxConfig};
use crate::metrics::{Metric, MetricsProvider};
use crate::primitives::{Point, Rect, center_rect, mirror, mirror_point};
use crate::region::{ComboBoxRegion, LineEditRegion, SpinBoxRegion};

/// Rect with the frame removed, unless the control draws no frame.
fn framed_interior(rect: Rect, flat: bool, metrics: &impl MetricsProvider) -> Rect {
    if flat {
        rect
    } else {
        rect.inside_margin(metrics.metric(Metric::FrameWidth))
    }
}

/// Square button of side `width` at the trailing edge of `interior`,
/// narrowed to fit an interior smaller than the button.
pub(crate) fn trailing_button(interior: Rect, width: i32) -> Rect {
    let width = width.min(interior.width.max(0));
    let strip = Rect::new(interior.right() - width, interior.y, width, interior.height);
    center_rect(strip, width, width)
}

// =========================================================================
// Combo box
// =========================================================================

fn combo_box_logical(
    config: &ComboBoxConfig,
    region: ComboBoxRegion,
    rect: Rect,
    metrics: &impl MetricsProvider,
) -> Rect {
    let flat = config.is_flat();
    let arrow_width = metrics.metric(Metric::ComboBoxArrowButtonWidth);

    match region {
        ComboBoxRegion::Frame => {
            if flat {
                Rect::ZERO
            } else {
                rect
            }
        }
        ComboBoxRegion::ListBoxPopup => rect,
        ComboBoxRegion::Arrow => trailing_button(framed_interior(rect, flat, metrics), arrow_width),
        ComboBoxRegion::EditField => {
            let interior = framed_interior(rect, flat, metrics);
            if config.editable {
                let field = interior.adjusted(0, 0, -arrow_width, 0);
                if flat {
                    field
                } else {
                    let margin = metrics.metric(Metric::LineEditMarginWidth);
                    field.adjusted(margin, margin, 0, -margin)
                }
            } else {
                let space = metrics.metric(Metric::ComboBoxBoxTextSpace);
                let margin = metrics.metric(Metric::ComboBoxMarginWidth);
                interior
                    .adjusted(0, 0, -(arrow_width + space), 0)
                    .adjusted(margin, margin, 0, -margin)
            }
        }
    }
}

pub fn combo_box_rect(
    config: &ComboBoxConfig,
    region: ComboBoxRegion,
    rect: Rect,
    metrics: &impl MetricsProvider,
) -> Rect {
    mirror(combo_box_logical(config, region, rect, metrics), rect, config.direction)
}

pub fn classify_combo_box(
    config: &ComboBoxConfig,
    rect: Rect,
    point: Point,
    metrics: &impl MetricsProvider,
) -> Option<ComboBoxRegion> {
    if !rect.contains(point) {
        return None;
    }
    let point = mirror_point(point, rect, config.direction);
    let hit = [ComboBoxRegion::Arrow, ComboBoxRegion::EditField, ComboBoxRegion::Frame]
        .into_iter()
        .find(|region| combo_box_logical(config, *region, rect, metrics).contains(point));
    Some(hit.unwrap_or(ComboBoxRegion::ListBoxPopup))
}

// =========================================================================
// Spin box
// =========================================================================

fn spin_box_logical(
    config: &SpinBoxConfig,
    region: SpinBoxRegion,
    rect: Rect,
    metrics: &impl MetricsProvider,
) -> Rect {
    let flat = config.is_flat();
    let arrow_width = metrics.metric(Metric::SpinBoxArrowButtonWidth);

    match region {
        SpinBoxRegion::Frame => {
            if flat {
                Rect::ZERO
            } else {
                rect
            }
        }
        SpinBoxRegion::Up | SpinBoxRegion::Down => {
            let button = trailing_button(framed_interior(rect, flat, metrics), arrow_width);
            let half = Rect {
                height: button.height / 2,
                ..button
            };
            if region == SpinBoxRegion::Down {
                half.translate(Point::new(0, button.height / 2))
            } else {
                half
            }
        }
        SpinBoxRegion::EditField => {
            let interior = framed_interior(rect, flat, metrics);
            let field = interior.adjusted(0, 0, -arrow_width, 0);
            if flat {
                field
            } else {
                let margin = metrics.metric(Metric::LineEditMarginWidth);
                field.adjusted(margin, margin, 0, -margin)
            }
        }
    }
}

pub fn spin_box_rect(
    config: &SpinBoxConfig,
    region: SpinBoxRegion,
    rect: Rect,
    metrics: &impl MetricsProvider,
) -> Rect {
    mirror(spin_box_logical(config, region, rect, metrics), rect, config.direction)
}

pub fn classify_spin_box(
    config: &SpinBoxConfig,
    rect: Rect,
    point: Point,
    metrics: &impl MetricsProvider,
) -> Option<SpinBoxRegion> {
    if !rect.contains(point) {
        return None;
    }
    let point = mirror_point(point, rect, config.direction);
    [
        SpinBoxRegion::Up,
        SpinBoxRegion::Down,
        SpinBoxRegion::EditField,
        SpinBoxRegion::Frame,
    ]
    .into_iter()
    .find(|region| spin_box_logical(config, *region, rect, metrics).contains(point))
}

// =========================================================================
// Line edit
// =========================================================================

fn line_edit_logical(
    config: &LineEditConfig,
    region: LineEditRegion,
    rect: Rect,
    metrics: &impl MetricsProvider,
) -> Rect {
    let flat = !config.frame;
    match region {
        LineEditRegion::Frame if flat => Rect::ZERO,
        LineEditRegion::Frame => rect,
        LineEditRegion::Contents if flat => rect,
        LineEditRegion::Contents => rect.inside_margin(
            metrics.metric(Metric::LineEditMarginWidth) + metrics.metric(Metric::FrameWidth),
        ),
    }
}

pub fn line_edit_rect(
    config: &LineEditConfig,
    region: LineEditRegion,
    rect: Rect,
    metrics: &impl MetricsProvider,
) -> Rect {
    mirror(line_edit_logical(config, region, rect, metrics), rect, config.direction)
}

pub fn classify_line_edit(
    config: &LineEditConfig,
    rect: Rect,
    point: Point,
    metrics: &impl MetricsProvider,
) -> Option<LineEditRegion> {
    if !rect.contains(point) {
        return None;
    }
    let point = mirror_point(point, rect, config.direction);
    [LineEditRegion::Contents, LineEditRegion::Frame]
        .into_iter()
        .find(|region| line_edit_logical(config, *region, rect, metrics).contains(point))
}
