//! Check boxes, radio buttons, progress bars and header sections.

use crate::config::{CheckBoxConfig, HeaderConfig, ProgressBarConfig};
use crate::metrics::{Metric, MetricsProvider};
use crate::primitives::{Point, Rect, center_rect, mirror, mirror_point};
use crate::region::{CheckBoxRegion, HeaderRegion, ProgressBarRegion};

// =========================================================================
// Check box / radio button
// =========================================================================

fn check_box_logical(
    config: &CheckBoxConfig,
    region: CheckBoxRegion,
    rect: Rect,
    metrics: &impl MetricsProvider,
) -> Rect {
    let indicator = metrics.metric(Metric::CheckBoxSize);
    let contents = rect.adjusted(indicator + metrics.metric(Metric::CheckBoxBoxTextSpace), 0, 0, 0);

    match region {
        CheckBoxRegion::Indicator => {
            let strip = Rect {
                width: indicator.min(rect.width),
                ..rect
            };
            center_rect(strip, strip.width, indicator)
        }
        CheckBoxRegion::Contents => contents,
        CheckBoxRegion::FocusRect => match config.text {
            Some(text) => {
                let width = text.width.min(contents.width);
                let height = text.height.min(contents.height);
                Rect::new(contents.x, contents.y + (contents.height - height) / 2, width, height)
            }
            None => contents,
        },
    }
}

pub fn check_box_rect(
    config: &CheckBoxConfig,
    region: CheckBoxRegion,
    rect: Rect,
    metrics: &impl MetricsProvider,
) -> Rect {
    mirror(check_box_logical(config, region, rect, metrics), rect, config.direction)
}

pub fn classify_check_box(
    config: &CheckBoxConfig,
    rect: Rect,
    point: Point,
    metrics: &impl MetricsProvider,
) -> Option<CheckBoxRegion> {
    if !rect.contains(point) {
        return None;
    }
    let point = mirror_point(point, rect, config.direction);
    [
        CheckBoxRegion::Indicator,
        CheckBoxRegion::FocusRect,
        CheckBoxRegion::Contents,
    ]
    .into_iter()
    .find(|region| check_box_logical(config, *region, rect, metrics).contains(point))
}

// =========================================================================
// Progress bar
// =========================================================================

fn progress_groove(config: &ProgressBarConfig, rect: Rect, metrics: &impl MetricsProvider) -> Rect {
    let thickness = metrics.metric(Metric::ProgressBarThickness);
    let horizontal = config.orientation.is_horizontal();

    if config.text_visible && !config.range.is_busy() {
        if horizontal {
            let t = thickness.min(rect.height);
            Rect::new(rect.x, rect.bottom() - t, rect.width, t)
        } else {
            Rect::new(rect.x, rect.y, thickness.min(rect.width), rect.height)
        }
    } else if horizontal {
        center_rect(rect, rect.width, thickness.min(rect.height))
    } else {
        center_rect(rect, thickness.min(rect.width), rect.height)
    }
}

fn progress_contents(config: &ProgressBarConfig, rect: Rect, metrics: &impl MetricsProvider) -> Rect {
    let groove = progress_groove(config, rect, metrics);
    if config.range.is_busy() {
        return groove;
    }

    let fraction = config.range.fraction().min(1.0);
    let horizontal = config.orientation.is_horizontal();
    let span = if horizontal { groove.width } else { groove.height };
    let size = (fraction * f64::from(span)) as i32;

    if size < metrics.metric(Metric::ProgressBarThickness) {
        return Rect::ZERO;
    }

    if horizontal {
        Rect::new(groove.x, groove.y, size, groove.height)
    } else {
        Rect::new(groove.x, groove.bottom() - size, groove.width, size)
    }
}

fn progress_label(config: &ProgressBarConfig, rect: Rect, metrics: &impl MetricsProvider) -> Rect {
    if !config.text_visible {
        return Rect::ZERO;
    }
    let band = metrics.metric(Metric::ProgressBarThickness) + metrics.metric(Metric::ProgressBarBoxTextSpace);
    if config.orientation.is_horizontal() {
        Rect {
            height: (rect.height - band).max(0),
            ..rect
        }
    } else {
        rect.adjusted(band, 0, 0, 0)
    }
}

fn progress_bar_logical(
    config: &ProgressBarConfig,
    region: ProgressBarRegion,
    rect: Rect,
    metrics: &impl MetricsProvider,
) -> Rect {
    match region {
        ProgressBarRegion::Groove => progress_groove(config, rect, metrics),
        ProgressBarRegion::Contents => progress_contents(config, rect, metrics),
        ProgressBarRegion::Label => progress_label(config, rect, metrics),
    }
}

pub fn progress_bar_rect(
    config: &ProgressBarConfig,
    region: ProgressBarRegion,
    rect: Rect,
    metrics: &impl MetricsProvider,
) -> Rect {
    mirror(progress_bar_logical(config, region, rect, metrics), rect, config.direction)
}

pub fn classify_progress_bar(
    config: &ProgressBarConfig,
    rect: Rect,
    point: Point,
    metrics: &impl MetricsProvider,
) -> Option<ProgressBarRegion> {
    if !rect.contains(point) {
        return None;
    }
    let point = mirror_point(point, rect, config.direction);
    [
        ProgressBarRegion::Contents,
        ProgressBarRegion::Groove,
        ProgressBarRegion::Label,
    ]
    .into_iter()
    .find(|region| progress_bar_logical(config, *region, rect, metrics).contains(point))
}

// =========================================================================
// Header section
// =========================================================================

fn header_logical(
    config: &HeaderConfig,
    region: HeaderRegion,
    rect: Rect,
    metrics: &impl MetricsProvider,
) -> Rect {
    let inner = rect.inside_margin(metrics.metric(Metric::HeaderMarginWidth));
    let arrow = metrics.metric(Metric::HeaderArrowSize);

    match region {
        HeaderRegion::Arrow if !config.sort_indicator => Rect::ZERO,
        HeaderRegion::Arrow => {
            let width = arrow.min(inner.width);
            Rect::new(inner.right() - width, inner.y, width, inner.height)
        }
        HeaderRegion::Label if !config.sort_indicator => inner,
        HeaderRegion::Label => {
            inner.adjusted(0, 0, -(arrow + metrics.metric(Metric::HeaderBoxTextSpace)), 0)
        }
    }
}

pub fn header_rect(
    config: &HeaderConfig,
    region: HeaderRegion,
    rect: Rect,
    metrics: &impl MetricsProvider,
) -> Rect {
    mirror(header_logical(config, region, rect, metrics), rect, config.direction)
}

pub fn classify_header(
    config: &HeaderConfig,
    rect: Rect,
    point: Point,
    metrics: &impl MetricsProvider,
) -> Option<HeaderRegion> {
    if !rect.contains(point) {
        return None;
    }
    let point = mirror_point(point, rect, config.direction);
    [HeaderRegion::Arrow, HeaderRegion::Label]
        .into_iter()
        .find(|region| header_logical(config, *region, rect, metrics).contains(point))
}
