//! Linear-track layout: scroll bars and sliders.
//!
//! Everything is computed in logical (left-to-right) space along the major
//! axis, then mirrored once on the way out. Hit testing goes the other way:
//! the pointer is un-mirrored first and classified against the logical
//! geometry, so layout and classification can never disagree.

use crate::config::{ButtonCountMode, RangeState, ScrollBarConfig, SliderConfig};
use crate::metrics::{Metric, MetricsProvider};
use crate::primitives::{Direction, Orientation, Point, Rect, center_rect, mirror, mirror_point};
use crate::region::{ScrollBarRegion, SliderRegion};

// =========================================================================
// Major-axis view
// =========================================================================

/// Projects rects and points onto the major axis of a track.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Axis(pub Orientation);

impl Axis {
    pub fn start(self, rect: Rect) -> i32 {
        match self.0 {
            Orientation::Horizontal => rect.x,
            Orientation::Vertical => rect.y,
        }
    }

    pub fn len(self, rect: Rect) -> i32 {
        match self.0 {
            Orientation::Horizontal => rect.width,
            Orientation::Vertical => rect.height,
        }
    }

    pub fn end(self, rect: Rect) -> i32 {
        self.start(rect) + self.len(rect)
    }

    pub fn cross_len(self, rect: Rect) -> i32 {
        match self.0 {
            Orientation::Horizontal => rect.height,
            Orientation::Vertical => rect.width,
        }
    }

    pub fn coord(self, point: Point) -> i32 {
        match self.0 {
            Orientation::Horizontal => point.x,
            Orientation::Vertical => point.y,
        }
    }

    /// Slice of `rect` from `start` spanning `len` along the major axis,
    /// keeping the full cross extent.
    pub fn segment(self, rect: Rect, start: i32, len: i32) -> Rect {
        let len = len.max(0);
        match self.0 {
            Orientation::Horizontal => Rect::new(start, rect.y, len, rect.height),
            Orientation::Vertical => Rect::new(rect.x, start, rect.width, len),
        }
    }
}

/// Offset of a thumb of length `size` within `span`, from the range value.
fn thumb_offset(range: &RangeState, span: i32, size: i32) -> i32 {
    let travel = (span - size).max(0);
    let pos = (range.fraction() * f64::from(travel)).round() as i32;
    let pos = pos.clamp(0, travel);
    if range.upside_down { travel - pos } else { pos }
}

// =========================================================================
// Scroll bar
// =========================================================================

/// Every sub-region of a scroll bar, computed together.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollBarGeometry {
    pub sub_line: Rect,
    pub add_line: Rect,
    pub groove: Rect,
    pub slider: Rect,
    pub sub_page: Rect,
    pub add_page: Rect,
}

impl ScrollBarGeometry {
    pub fn get(&self, region: ScrollBarRegion) -> Rect {
        match region {
            ScrollBarRegion::SubLine => self.sub_line,
            ScrollBarRegion::AddLine => self.add_line,
            ScrollBarRegion::Groove => self.groove,
            ScrollBarRegion::Slider => self.slider,
            ScrollBarRegion::SubPage => self.sub_page,
            ScrollBarRegion::AddPage => self.add_page,
        }
    }

    fn mirrored(self, parent: Rect, direction: Direction) -> Self {
        Self {
            sub_line: mirror(self.sub_line, parent, direction),
            add_line: mirror(self.add_line, parent, direction),
            groove: mirror(self.groove, parent, direction),
            slider: mirror(self.slider, parent, direction),
            sub_page: mirror(self.sub_page, parent, direction),
            add_page: mirror(self.add_page, parent, direction),
        }
    }
}

/// Length of the button block at one end of the track.
pub(crate) fn button_length(mode: ButtonCountMode, metrics: &impl MetricsProvider) -> i32 {
    match mode {
        ButtonCountMode::None => metrics.metric(Metric::ScrollBarNoButtonHeight),
        ButtonCountMode::Single => metrics.metric(Metric::ScrollBarExtent),
        ButtonCountMode::Double => 2 * metrics.metric(Metric::ScrollBarExtent),
    }
}

fn scroll_bar_logical(
    config: &ScrollBarConfig,
    rect: Rect,
    metrics: &impl MetricsProvider,
) -> ScrollBarGeometry {
    let axis = Axis(config.orientation);
    let start = axis.start(rect);
    let span = axis.len(rect).max(0);

    let sub_len = button_length(config.buttons.sub_line, metrics).clamp(0, span);
    let add_len = button_length(config.buttons.add_line, metrics).clamp(0, span - sub_len);

    let sub_line = axis.segment(rect, start, sub_len);
    let add_line = axis.segment(rect, start + span - add_len, add_len);
    let groove = axis.segment(rect, start + sub_len, span - sub_len - add_len);

    let slider = scroll_bar_slider(axis, &config.range, groove, metrics);

    let (sub_page, add_page) = if slider == groove {
        (groove, groove)
    } else {
        let groove_start = axis.start(groove);
        let groove_end = axis.end(groove);
        let slider_start = axis.start(slider);
        let slider_end = axis.end(slider);
        (
            axis.segment(groove, groove_start, slider_start - groove_start),
            axis.segment(groove, slider_end, groove_end - slider_end),
        )
    };

    ScrollBarGeometry {
        sub_line,
        add_line,
        groove,
        slider,
        sub_page,
        add_page,
    }
}

fn scroll_bar_slider(
    axis: Axis,
    range: &RangeState,
    groove: Rect,
    metrics: &impl MetricsProvider,
) -> Rect {
    if range.is_busy() {
        return groove;
    }

    let space = axis.len(groove);
    let page = i64::from(range.page_step.max(0));
    let proportional = i64::from(space) * page / (range.span() + page);
    let size = (proportional as i32)
        .max(metrics.metric(Metric::ScrollBarMinSliderHeight))
        .min(space);

    if space - size <= 0 {
        return groove;
    }

    let offset = thumb_offset(range, space, size);
    axis.segment(groove, axis.start(groove) + offset, size)
}

/// All scroll bar regions, mirrored for the configured direction.
pub fn scroll_bar_geometry(
    config: &ScrollBarConfig,
    rect: Rect,
    metrics: &impl MetricsProvider,
) -> ScrollBarGeometry {
    scroll_bar_logical(config, rect, metrics).mirrored(rect, config.direction)
}

pub fn scroll_bar_rect(
    config: &ScrollBarConfig,
    region: ScrollBarRegion,
    rect: Rect,
    metrics: &impl MetricsProvider,
) -> Rect {
    let logical = scroll_bar_logical(config, rect, metrics).get(region);
    mirror(logical, rect, config.direction)
}

/// Split a double step-button block into its `(SubLine, AddLine)` halves.
///
/// `button` is a rect returned by the scroll bar layout, in physical
/// coordinates. In a right-to-left horizontal bar the logical first half is
/// the physical right half.
pub fn scroll_bar_button_halves(
    button: Rect,
    orientation: Orientation,
    direction: Direction,
) -> (Rect, Rect) {
    let axis = Axis(orientation);
    let len = axis.len(button);
    let start = axis.start(button);
    let flipped = orientation.is_horizontal() && direction.is_rtl();

    let first_len = if flipped { len - len / 2 } else { len / 2 };
    let first = axis.segment(button, start, first_len);
    let second = axis.segment(button, start + first_len, len - first_len);

    if flipped { (second, first) } else { (first, second) }
}

pub fn classify_scroll_bar(
    config: &ScrollBarConfig,
    rect: Rect,
    point: Point,
    metrics: &impl MetricsProvider,
) -> Option<ScrollBarRegion> {
    if !rect.contains(point) {
        return None;
    }

    let point = mirror_point(point, rect, config.direction);
    let axis = Axis(config.orientation);
    let geometry = scroll_bar_logical(config, rect, metrics);
    let c = axis.coord(point);

    if c < axis.start(geometry.groove) {
        return Some(classify_button(axis, config.buttons.sub_line, geometry.sub_line, c, ScrollBarRegion::SubLine));
    }
    if c >= axis.end(geometry.groove) {
        return Some(classify_button(axis, config.buttons.add_line, geometry.add_line, c, ScrollBarRegion::AddLine));
    }

    if geometry.slider.contains(point) {
        Some(ScrollBarRegion::Slider)
    } else if c < axis.start(geometry.slider) {
        Some(ScrollBarRegion::SubPage)
    } else {
        Some(ScrollBarRegion::AddPage)
    }
}

fn classify_button(
    axis: Axis,
    mode: ButtonCountMode,
    button: Rect,
    c: i32,
    single: ScrollBarRegion,
) -> ScrollBarRegion {
    if mode != ButtonCountMode::Double {
        return single;
    }
    if c < axis.start(button) + axis.len(button) / 2 {
        ScrollBarRegion::SubLine
    } else {
        ScrollBarRegion::AddLine
    }
}

// =========================================================================
// Slider
// =========================================================================

fn slider_handle_logical(config: &SliderConfig, rect: Rect, metrics: &impl MetricsProvider) -> Rect {
    let axis = Axis(config.orientation);
    let thickness = metrics.metric(Metric::SliderControlThickness);
    let span = axis.len(rect).max(0);
    let major = thickness.min(span);
    let cross = thickness.min(axis.cross_len(rect).max(0));

    let offset = thumb_offset(&config.range, span, major);
    let strip = axis.segment(rect, axis.start(rect) + offset, major);
    match config.orientation {
        Orientation::Horizontal => center_rect(strip, major, cross),
        Orientation::Vertical => center_rect(strip, cross, major),
    }
}

fn slider_groove_logical(config: &SliderConfig, rect: Rect, metrics: &impl MetricsProvider) -> Rect {
    let axis = Axis(config.orientation);
    let handle = metrics
        .metric(Metric::SliderControlThickness)
        .min(axis.len(rect).max(0));
    let travel = (axis.len(rect) - handle).max(0);
    let groove = metrics
        .metric(Metric::SliderGrooveThickness)
        .min(axis.cross_len(rect).max(0));
    match config.orientation {
        Orientation::Horizontal => center_rect(rect, travel, groove),
        Orientation::Vertical => center_rect(rect, groove, travel),
    }
}

pub fn slider_rect(
    config: &SliderConfig,
    region: SliderRegion,
    rect: Rect,
    metrics: &impl MetricsProvider,
) -> Rect {
    let logical = match region {
        SliderRegion::Groove => slider_groove_logical(config, rect, metrics),
        SliderRegion::Handle => slider_handle_logical(config, rect, metrics),
    };
    mirror(logical, rect, config.direction)
}

pub fn classify_slider(
    config: &SliderConfig,
    rect: Rect,
    point: Point,
    metrics: &impl MetricsProvider,
) -> Option<SliderRegion> {
    if !rect.contains(point) {
        return None;
    }
    let point = mirror_point(point, rect, config.direction);
    if slider_handle_logical(config, rect, metrics).contains(point) {
        Some(SliderRegion::Handle)
    } else {
        Some(SliderRegion::Groove)
    }
}
