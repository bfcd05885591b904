//! Push buttons and tool buttons.
//!
//! A push button keeps its label inside the frame and, with a menu, a
//! drop-down arrow square at the trailing edge. A tool button either draws
//! its menu arrow inline or splits a separate arrow button off the trailing
//! edge.

use crate::config::{PushButtonConfig, ToolButtonConfig, ToolButtonPopup};
use crate::layout::popup::trailing_button;
use crate::metrics::{Metric, MetricsProvider};
use crate::primitives::{Point, Rect, Size, mirror, mirror_point};
use crate::region::{PushButtonRegion, ToolButtonRegion};

/// Icon extent, falling back to the small icon size when none was given.
pub(crate) fn icon_extent(icon: Size, metrics: &impl MetricsProvider) -> Size {
    if icon.is_empty() {
        let side = metrics.metric(Metric::SmallIconSize);
        Size::new(side, side)
    } else {
        icon
    }
}

// =========================================================================
// Push button
// =========================================================================

fn push_button_logical(
    config: &PushButtonConfig,
    region: PushButtonRegion,
    rect: Rect,
    metrics: &impl MetricsProvider,
) -> Rect {
    let interior = rect.inside_margin(metrics.metric(Metric::FrameWidth));
    let margin = metrics.metric(Metric::ButtonMarginWidth);
    let arrow = metrics.metric(Metric::ButtonArrowButtonWidth);

    match region {
        PushButtonRegion::Frame => rect,
        PushButtonRegion::Arrow if !config.has_menu => Rect::ZERO,
        PushButtonRegion::Arrow => trailing_button(interior, arrow),
        PushButtonRegion::Contents if !config.has_menu => interior.inside_margin(margin),
        PushButtonRegion::Contents => {
            let space = if config.has_text || config.icon.is_some() {
                metrics.metric(Metric::ButtonBoxTextSpace)
            } else {
                0
            };
            interior.adjusted(margin, margin, -(arrow + space), -margin)
        }
    }
}

pub fn push_button_rect(
    config: &PushButtonConfig,
    region: PushButtonRegion,
    rect: Rect,
    metrics: &impl MetricsProvider,
) -> Rect {
    mirror(push_button_logical(config, region, rect, metrics), rect, config.direction)
}

pub fn classify_push_button(
    config: &PushButtonConfig,
    rect: Rect,
    point: Point,
    metrics: &impl MetricsProvider,
) -> Option<PushButtonRegion> {
    if !rect.contains(point) {
        return None;
    }
    let point = mirror_point(point, rect, config.direction);
    [PushButtonRegion::Arrow, PushButtonRegion::Contents, PushButtonRegion::Frame]
        .into_iter()
        .find(|region| push_button_logical(config, *region, rect, metrics).contains(point))
}

// =========================================================================
// Tool button
// =========================================================================

/// Margin between the button edge and its contents.
pub(crate) fn tool_button_margin(config: &ToolButtonConfig, metrics: &impl MetricsProvider) -> i32 {
    if config.auto_raise {
        metrics.metric(Metric::ToolButtonMarginWidth)
    } else {
        metrics.metric(Metric::ButtonMarginWidth) + metrics.metric(Metric::FrameWidth)
    }
}

fn tool_button_logical(
    config: &ToolButtonConfig,
    region: ToolButtonRegion,
    rect: Rect,
    metrics: &impl MetricsProvider,
) -> Rect {
    let arrow = metrics.metric(Metric::ToolButtonArrowButtonWidth);
    let margin = tool_button_margin(config, metrics);

    match config.popup {
        ToolButtonPopup::None => match region {
            ToolButtonRegion::Frame => rect,
            ToolButtonRegion::Contents => rect.inside_margin(margin),
            ToolButtonRegion::Arrow => Rect::ZERO,
        },
        ToolButtonPopup::Inline => {
            let inner = rect.inside_margin(margin);
            match region {
                ToolButtonRegion::Frame => rect,
                ToolButtonRegion::Contents => inner.adjusted(0, 0, -arrow, 0),
                ToolButtonRegion::Arrow => {
                    let width = arrow.min(inner.width);
                    Rect::new(inner.right() - width, inner.y, width, inner.height)
                }
            }
        }
        ToolButtonPopup::Separate => {
            let width = arrow.min(rect.width);
            let body = rect.adjusted(0, 0, -width, 0);
            match region {
                ToolButtonRegion::Frame => body,
                ToolButtonRegion::Contents => body.inside_margin(margin),
                ToolButtonRegion::Arrow => Rect::new(rect.right() - width, rect.y, width, rect.height),
            }
        }
    }
}

pub fn tool_button_rect(
    config: &ToolButtonConfig,
    region: ToolButtonRegion,
    rect: Rect,
    metrics: &impl MetricsProvider,
) -> Rect {
    mirror(tool_button_logical(config, region, rect, metrics), rect, config.direction)
}

pub fn classify_tool_button(
    config: &ToolButtonConfig,
    rect: Rect,
    point: Point,
    metrics: &impl MetricsProvider,
) -> Option<ToolButtonRegion> {
    if !rect.contains(point) {
        return None;
    }
    let point = mirror_point(point, rect, config.direction);
    [ToolButtonRegion::Arrow, ToolButtonRegion::Contents, ToolButtonRegion::Frame]
        .into_iter()
        .find(|region| tool_button_logical(config, *region, rect, metrics).contains(point))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::Metrics;
    use crate::primitives::Direction;

    // =========================================================================
    // Push button
    // =========================================================================

    #[test]
    fn plain_push_button_insets_frame_and_margin() {
        let m = Metrics::new();
        let config = PushButtonConfig {
            has_text: true,
            ..Default::default()
        };
        let rect = Rect::new(0, 0, 100, 30);
        assert_eq!(push_button_rect(&config, PushButtonRegion::Frame, rect, &m), rect);
        assert_eq!(push_button_rect(&config, PushButtonRegion::Contents, rect, &m), Rect::new(8, 8, 84, 14));
        assert!(push_button_rect(&config, PushButtonRegion::Arrow, rect, &m).is_empty());
    }

    #[test]
    fn menu_push_button_reserves_arrow() {
        let m = Metrics::new();
        let config = PushButtonConfig {
            has_menu: true,
            has_text: true,
            ..Default::default()
        };
        let rect = Rect::new(0, 0, 120, 30);
        // interior (2, 2, 116, 26)
        assert_eq!(push_button_rect(&config, PushButtonRegion::Arrow, rect, &m), Rect::new(98, 5, 20, 20));
        // 116 - 6 - 20 - 4
        assert_eq!(push_button_rect(&config, PushButtonRegion::Contents, rect, &m), Rect::new(8, 8, 86, 14));

        assert_eq!(classify_push_button(&config, rect, Point::new(105, 15), &m), Some(PushButtonRegion::Arrow));
        assert_eq!(classify_push_button(&config, rect, Point::new(40, 15), &m), Some(PushButtonRegion::Contents));
        assert_eq!(classify_push_button(&config, rect, Point::new(1, 1), &m), Some(PushButtonRegion::Frame));
    }

    #[test]
    fn push_button_arrow_leads_in_rtl() {
        let m = Metrics::new();
        let config = PushButtonConfig {
            has_menu: true,
            direction: Direction::RightToLeft,
            ..Default::default()
        };
        let rect = Rect::new(0, 0, 120, 30);
        assert_eq!(push_button_rect(&config, PushButtonRegion::Arrow, rect, &m), Rect::new(2, 5, 20, 20));
        assert_eq!(classify_push_button(&config, rect, Point::new(10, 15), &m), Some(PushButtonRegion::Arrow));
    }

    #[test]
    fn narrow_menu_push_button_arrow_fits() {
        let m = Metrics::new();
        let config = PushButtonConfig {
            has_menu: true,
            ..Default::default()
        };
        let rect = Rect::new(0, 0, 14, 30);
        let arrow = push_button_rect(&config, PushButtonRegion::Arrow, rect, &m);
        assert_eq!(arrow, Rect::new(2, 10, 10, 10));
        assert_eq!(push_button_rect(&config, PushButtonRegion::Contents, rect, &m).width, 0);
    }

    // =========================================================================
    // Tool button
    // =========================================================================

    #[test]
    fn tool_button_margins_follow_auto_raise() {
        let m = Metrics::new();
        let rect = Rect::new(0, 0, 40, 40);
        let raised = ToolButtonConfig::default();
        assert_eq!(tool_button_rect(&raised, ToolButtonRegion::Contents, rect, &m), Rect::new(8, 8, 24, 24));

        let flat = ToolButtonConfig {
            auto_raise: true,
            ..Default::default()
        };
        assert_eq!(tool_button_rect(&flat, ToolButtonRegion::Contents, rect, &m), Rect::new(2, 2, 36, 36));
        assert!(tool_button_rect(&flat, ToolButtonRegion::Arrow, rect, &m).is_empty());
    }

    #[test]
    fn inline_tool_button_arrow_sits_inside_frame() {
        let m = Metrics::new();
        let config = ToolButtonConfig {
            popup: ToolButtonPopup::Inline,
            auto_raise: true,
            ..Default::default()
        };
        let rect = Rect::new(0, 0, 60, 30);
        assert_eq!(tool_button_rect(&config, ToolButtonRegion::Frame, rect, &m), rect);
        assert_eq!(tool_button_rect(&config, ToolButtonRegion::Arrow, rect, &m), Rect::new(38, 2, 20, 26));
        assert_eq!(tool_button_rect(&config, ToolButtonRegion::Contents, rect, &m), Rect::new(2, 2, 36, 26));
    }

    #[test]
    fn separate_tool_button_arrow_splits_frame() {
        let m = Metrics::new();
        let config = ToolButtonConfig {
            popup: ToolButtonPopup::Separate,
            ..Default::default()
        };
        let rect = Rect::new(0, 0, 60, 30);
        assert_eq!(tool_button_rect(&config, ToolButtonRegion::Frame, rect, &m), Rect::new(0, 0, 40, 30));
        assert_eq!(tool_button_rect(&config, ToolButtonRegion::Arrow, rect, &m), Rect::new(40, 0, 20, 30));
        assert_eq!(classify_tool_button(&config, rect, Point::new(45, 29), &m), Some(ToolButtonRegion::Arrow));
        assert_eq!(classify_tool_button(&config, rect, Point::new(39, 29), &m), Some(ToolButtonRegion::Frame));

        let rtl = ToolButtonConfig {
            direction: Direction::RightToLeft,
            ..config
        };
        assert_eq!(tool_button_rect(&rtl, ToolButtonRegion::Arrow, rect, &m), Rect::new(0, 0, 20, 30));
        assert_eq!(classify_tool_button(&rtl, rect, Point::new(5, 15), &m), Some(ToolButtonRegion::Arrow));
    }
}
