//! Radial layout for dials.

use std::f64::consts::PI;

use crate::config::{DialConfig, RangeState};
use crate::metrics::{Metric, MetricsProvider};
use crate::primitives::{Point, Rect, Size, center_rect, mirror, mirror_point};
use crate::region::DialRegion;

/// Handle angle in radians, counter-clockwise from the positive x axis.
///
/// Wrapping dials sweep the full circle starting at the bottom. Other dials
/// sweep from 240 degrees down to -60 degrees, leaving a dead zone at the
/// bottom.
pub fn dial_angle(range: &RangeState) -> f64 {
    let mut fraction = range.fraction();
    if !range.upside_down {
        fraction = 1.0 - fraction;
    }
    if range.wrapping {
        1.5 * PI - fraction * 2.0 * PI
    } else {
        (8.0 * PI - fraction * 10.0 * PI) / 6.0
    }
}

fn groove(rect: Rect, metrics: &impl MetricsProvider) -> Rect {
    let side = rect.width.min(rect.height).max(0);
    let square = center_rect(rect, side, side);
    square.inside_margin(metrics.metric(Metric::SliderControlThickness) / 2)
}

fn handle(config: &DialConfig, rect: Rect, metrics: &impl MetricsProvider) -> Rect {
    let groove = groove(rect, metrics);
    let radius = f64::from(groove.width) / 2.0;
    let angle = dial_angle(&config.range);

    let cx = f64::from(groove.x) + f64::from(groove.width) / 2.0 + radius * angle.cos();
    let cy = f64::from(groove.y) + f64::from(groove.height) / 2.0 - radius * angle.sin();
    let center = Point::new(cx.round() as i32, cy.round() as i32);

    let side = metrics.metric(Metric::SliderControlThickness);
    Rect::with_center(center, Size::new(side, side))
}

pub fn dial_rect(
    config: &DialConfig,
    region: DialRegion,
    rect: Rect,
    metrics: &impl MetricsProvider,
) -> Rect {
    let logical = match region {
        DialRegion::Groove => groove(rect, metrics),
        DialRegion::Handle => handle(config, rect, metrics),
    };
    mirror(logical, rect, config.direction)
}

pub fn classify_dial(
    config: &DialConfig,
    rect: Rect,
    point: Point,
    metrics: &impl MetricsProvider,
) -> Option<DialRegion> {
    if !rect.contains(point) {
        return None;
    }
    let point = mirror_point(point, rect, config.direction);
    if handle(config, rect, metrics).contains(point) {
        Some(DialRegion::Handle)
    } else if groove(rect, metrics).contains(point) {
        Some(DialRegion::Groove)
    } else {
        None
    }
}
