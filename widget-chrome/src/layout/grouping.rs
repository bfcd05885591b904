//! Grouping layout: group boxes and tab widgets.

use bitflags::bitflags;

use crate::config::{GroupBoxConfig, TabShape, TabWidgetConfig};
use crate::metrics::{Metric, MetricsProvider};
use crate::primitives::{Point, Rect, Size, center_rect, mirror, mirror_point};
use crate::region::{GroupBoxRegion, TabWidgetRegion};

bitflags! {
    /// Rounded corners of a frame or tab.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Corners: u8 {
        const TOP_LEFT = 1;
        const TOP_RIGHT = 2;
        const BOTTOM_LEFT = 4;
        const BOTTOM_RIGHT = 8;

        const TOP = Self::TOP_LEFT.bits() | Self::TOP_RIGHT.bits();
        const BOTTOM = Self::BOTTOM_LEFT.bits() | Self::BOTTOM_RIGHT.bits();
        const LEFT = Self::TOP_LEFT.bits() | Self::BOTTOM_LEFT.bits();
        const RIGHT = Self::TOP_RIGHT.bits() | Self::BOTTOM_RIGHT.bits();
        const ALL = Self::TOP.bits() | Self::BOTTOM.bits();
    }
}

impl Corners {
    /// Swap left and right corners.
    pub fn mirrored(self) -> Self {
        let mut out = Corners::empty();
        if self.contains(Corners::TOP_LEFT) {
            out |= Corners::TOP_RIGHT;
        }
        if self.contains(Corners::TOP_RIGHT) {
            out |= Corners::TOP_LEFT;
        }
        if self.contains(Corners::BOTTOM_LEFT) {
            out |= Corners::BOTTOM_RIGHT;
        }
        if self.contains(Corners::BOTTOM_RIGHT) {
            out |= Corners::BOTTOM_LEFT;
        }
        out
    }
}

// =========================================================================
// Group box
// =========================================================================

/// Height of the title row itself, without margins.
fn title_row_height(config: &GroupBoxConfig, metrics: &impl MetricsProvider) -> i32 {
    let text = config.text.map_or(0, |t| t.height);
    if config.checkable {
        text.max(metrics.metric(Metric::CheckBoxSize))
    } else {
        text
    }
}

/// Width of check box plus label laid out side by side.
pub(crate) fn title_row_width(config: &GroupBoxConfig, metrics: &impl MetricsProvider) -> i32 {
    let mut width = config.text.map_or(0, |t| t.width);
    if config.checkable {
        width += metrics.metric(Metric::CheckBoxSize);
        if config.text.is_some() {
            width += metrics.metric(Metric::CheckBoxBoxTextSpace);
        }
    }
    width
}

/// Vertical band the title occupies above the contents; zero without a title.
pub(crate) fn title_band_height(config: &GroupBoxConfig, metrics: &impl MetricsProvider) -> i32 {
    let height = title_row_height(config, metrics);
    if height > 0 {
        height + 2 * metrics.metric(Metric::GroupBoxTitleMarginWidth)
    } else {
        0
    }
}

fn group_box_logical(
    config: &GroupBoxConfig,
    region: GroupBoxRegion,
    rect: Rect,
    metrics: &impl MetricsProvider,
) -> Rect {
    let interior = rect.inside_margin(metrics.metric(Metric::FrameWidth));

    match region {
        GroupBoxRegion::Frame => rect,
        GroupBoxRegion::Contents => interior.adjusted(0, title_band_height(config, metrics), 0, 0),
        GroupBoxRegion::CheckBox | GroupBoxRegion::Label => {
            let title_width = title_row_width(config, metrics);
            let title_height = title_row_height(config, metrics);
            let title = Rect {
                height: title_height,
                ..interior
            }
            .translate(Point::new(0, metrics.metric(Metric::GroupBoxTitleMarginWidth)));
            let title = center_rect(title, title_width, title_height);

            let indicator = metrics.metric(Metric::CheckBoxSize);
            if region == GroupBoxRegion::CheckBox {
                if !config.checkable {
                    return Rect::ZERO;
                }
                let row = center_rect(title, title_width, indicator);
                Rect::new(row.x, row.y, indicator, row.height)
            } else {
                let Some(text) = config.text else {
                    return Rect::ZERO;
                };
                let row = center_rect(title, title_width, text.height);
                if config.checkable {
                    row.adjusted(indicator + metrics.metric(Metric::CheckBoxBoxTextSpace), 0, 0, 0)
                } else {
                    row
                }
            }
        }
    }
}

pub fn group_box_rect(
    config: &GroupBoxConfig,
    region: GroupBoxRegion,
    rect: Rect,
    metrics: &impl MetricsProvider,
) -> Rect {
    mirror(group_box_logical(config, region, rect, metrics), rect, config.direction)
}

pub fn classify_group_box(
    config: &GroupBoxConfig,
    rect: Rect,
    point: Point,
    metrics: &impl MetricsProvider,
) -> Option<GroupBoxRegion> {
    if !rect.contains(point) {
        return None;
    }
    let point = mirror_point(point, rect, config.direction);
    [
        GroupBoxRegion::CheckBox,
        GroupBoxRegion::Label,
        GroupBoxRegion::Contents,
        GroupBoxRegion::Frame,
    ]
    .into_iter()
    .find(|region| group_box_logical(config, *region, rect, metrics).contains(point))
}

// =========================================================================
// Tab widget
// =========================================================================

/// Pixels the tab bar sinks into the pane frame.
pub(crate) fn pane_overlap(metrics: &impl MetricsProvider) -> i32 {
    (metrics.metric(Metric::TabBarBaseOverlap) - 1).max(0)
}

fn corner_logical(config: &TabWidgetConfig, right: bool, rect: Rect) -> Rect {
    let widget = if right { config.right_corner } else { config.left_corner };
    if config.shape.is_vertical() || widget.is_empty() {
        return Rect::ZERO;
    }
    let side = config.tab_bar_size.height;
    let x = if right { rect.right() - side } else { rect.x };
    let y = match config.shape {
        TabShape::South => rect.bottom() - side,
        _ => rect.y,
    };
    Rect::new(x, y, side, side)
}

fn bar_logical(config: &TabWidgetConfig, rect: Rect) -> Rect {
    let bar = config.tab_bar_size;
    match config.shape {
        TabShape::North | TabShape::South => {
            let mut left = rect.x;
            let mut right = rect.right();
            let left_corner = corner_logical(config, false, rect);
            if !left_corner.is_empty() {
                left = left_corner.right();
            }
            let right_corner = corner_logical(config, true, rect);
            if !right_corner.is_empty() {
                right = right_corner.x;
            }

            let avail = right - left;
            let width = bar.width.min(avail - 2).max(0);
            let x = left + (avail - width) / 2;
            let y = if config.shape == TabShape::North {
                rect.y + 1
            } else {
                rect.bottom() - 1 - bar.height
            };
            Rect::new(x, y, width, bar.height)
        }
        TabShape::West | TabShape::East => {
            let height = bar.height.min(rect.height - 2).max(0);
            let y = rect.y + (rect.height - height) / 2;
            let x = if config.shape == TabShape::West {
                rect.x + 1
            } else {
                rect.right() - 1 - bar.width
            };
            Rect::new(x, y, bar.width, height)
        }
    }
}

fn pane_logical(config: &TabWidgetConfig, rect: Rect, metrics: &impl MetricsProvider) -> Rect {
    let overlap = pane_overlap(metrics);
    let bar = config.tab_bar_size;
    let dy = (bar.height - overlap).max(0);
    let dx = (bar.width - overlap).max(0);
    match config.shape {
        TabShape::North => rect.adjusted(0, dy, 0, 0),
        TabShape::South => rect.adjusted(0, 0, 0, -dy),
        TabShape::West => rect.adjusted(dx, 0, 0, 0),
        TabShape::East => rect.adjusted(0, 0, -dx, 0),
    }
}

fn contents_logical(config: &TabWidgetConfig, rect: Rect, metrics: &impl MetricsProvider) -> Rect {
    let pane = pane_logical(config, rect, metrics);
    let margin = metrics.metric(Metric::TabWidgetMarginWidth);
    if !config.document_mode {
        return pane.inside_margin(margin);
    }
    match config.shape {
        TabShape::North => pane.adjusted(0, margin, 0, 0),
        TabShape::South => pane.adjusted(0, 0, 0, -margin),
        TabShape::West => pane.adjusted(margin, 0, 0, 0),
        TabShape::East => pane.adjusted(0, 0, -margin, 0),
    }
}

fn tab_widget_logical(
    config: &TabWidgetConfig,
    region: TabWidgetRegion,
    rect: Rect,
    metrics: &impl MetricsProvider,
) -> Rect {
    if config.tab_bar_size.is_empty() {
        return match region {
            TabWidgetRegion::Bar | TabWidgetRegion::Pane | TabWidgetRegion::Contents => rect,
            TabWidgetRegion::LeftCorner | TabWidgetRegion::RightCorner => Rect::ZERO,
        };
    }
    match region {
        TabWidgetRegion::Bar => bar_logical(config, rect),
        TabWidgetRegion::Pane => pane_logical(config, rect, metrics),
        TabWidgetRegion::Contents => contents_logical(config, rect, metrics),
        TabWidgetRegion::LeftCorner => corner_logical(config, false, rect),
        TabWidgetRegion::RightCorner => corner_logical(config, true, rect),
    }
}

pub fn tab_widget_rect(
    config: &TabWidgetConfig,
    region: TabWidgetRegion,
    rect: Rect,
    metrics: &impl MetricsProvider,
) -> Rect {
    mirror(tab_widget_logical(config, region, rect, metrics), rect, config.direction)
}

pub fn classify_tab_widget(
    config: &TabWidgetConfig,
    rect: Rect,
    point: Point,
    metrics: &impl MetricsProvider,
) -> Option<TabWidgetRegion> {
    if !rect.contains(point) {
        return None;
    }
    let point = mirror_point(point, rect, config.direction);
    [
        TabWidgetRegion::LeftCorner,
        TabWidgetRegion::RightCorner,
        TabWidgetRegion::Bar,
        TabWidgetRegion::Contents,
        TabWidgetRegion::Pane,
    ]
    .into_iter()
    .find(|region| tab_widget_logical(config, *region, rect, metrics).contains(point))
}

/// Rounded corners of the pane frame.
///
/// An oversized tab bar flattens the two corners on the edge it sits on.
pub fn tab_widget_frame_corners(
    config: &TabWidgetConfig,
    rect: Rect,
    metrics: &impl MetricsProvider,
) -> Corners {
    let bar: Size = config.tab_bar_size;
    if bar.is_empty() {
        return Corners::ALL;
    }

    let radius = metrics.metric(Metric::TabBarTabRadius);
    let mut corners = Corners::ALL;
    match config.shape {
        TabShape::North if bar.width >= rect.width - 2 * radius => corners.remove(Corners::TOP),
        TabShape::South if bar.width >= rect.width - 2 * radius => corners.remove(Corners::BOTTOM),
        TabShape::West if bar.height >= rect.height - 2 * radius => corners.remove(Corners::LEFT),
        TabShape::East if bar.height >= rect.height - 2 * radius => corners.remove(Corners::RIGHT),
        _ => {}
    }

    if config.direction.is_rtl() {
        corners.mirrored()
    } else {
        corners
    }
}
