//! Menu bar items, menu items and item view items.

use crate::config::{ItemViewItemConfig, MenuBarItemConfig, MenuItemConfig, MenuItemKind};
use crate::metrics::{Metric, MetricsProvider};
use crate::primitives::{Point, Rect, center_rect, inside_margin, mirror, mirror_point};
use crate::region::{ItemViewItemRegion, MenuBarItemRegion, MenuItemRegion};

// =========================================================================
// Menu bar item
// =========================================================================

fn menu_bar_item_logical(region: MenuBarItemRegion, rect: Rect, metrics: &impl MetricsProvider) -> Rect {
    match region {
        MenuBarItemRegion::Frame => rect,
        MenuBarItemRegion::Contents => inside_margin(
            rect,
            metrics.metric(Metric::MenuBarItemMarginWidth),
            metrics.metric(Metric::MenuBarItemMarginHeight),
        ),
    }
}

pub fn menu_bar_item_rect(
    config: &MenuBarItemConfig,
    region: MenuBarItemRegion,
    rect: Rect,
    metrics: &impl MetricsProvider,
) -> Rect {
    mirror(menu_bar_item_logical(region, rect, metrics), rect, config.direction)
}

pub fn classify_menu_bar_item(
    config: &MenuBarItemConfig,
    rect: Rect,
    point: Point,
    metrics: &impl MetricsProvider,
) -> Option<MenuBarItemRegion> {
    if !rect.contains(point) {
        return None;
    }
    let point = mirror_point(point, rect, config.direction);
    [MenuBarItemRegion::Contents, MenuBarItemRegion::Frame]
        .into_iter()
        .find(|region| menu_bar_item_logical(*region, rect, metrics).contains(point))
}

// =========================================================================
// Menu item
// =========================================================================

/// Side of the icon column: the widest icon, never below the small icon size.
pub(crate) fn menu_icon_column(config: &MenuItemConfig, metrics: &impl MetricsProvider) -> i32 {
    config.max_icon_width.max(metrics.metric(Metric::SmallIconSize))
}

/// Columns of a menu item in logical order.
struct MenuItemColumns {
    check_box: Rect,
    icon: Rect,
    contents: Rect,
    arrow: Rect,
}

impl MenuItemColumns {
    fn new(config: &MenuItemConfig, rect: Rect, metrics: &impl MetricsProvider) -> Self {
        let inner = rect.inside_margin(metrics.metric(Metric::MenuItemMarginWidth));
        let space = metrics.metric(Metric::MenuItemBoxTextSpace);
        let end = inner.right();
        let mut lead = inner.x;

        // square of `side` starting at `lead`, cut at the trailing edge
        let mut column = |side: i32| {
            let width = side.min(end - lead).max(0);
            let strip = Rect::new(lead, inner.y, width, inner.height);
            lead = (lead + side + space).min(end);
            center_rect(strip, width, side.min(inner.height))
        };

        let check_box = if config.has_checkable_items {
            column(metrics.metric(Metric::CheckBoxSize))
        } else {
            Rect::ZERO
        };
        let icon = column(menu_icon_column(config, metrics));

        let side = metrics.metric(Metric::MenuItemArrowWidth);
        let width = side.min(end - lead).max(0);
        let arrow = center_rect(Rect::new(end - width, inner.y, width, inner.height), width, side.min(inner.height));
        let trail = (end - side - space).max(lead);

        Self {
            check_box,
            icon,
            contents: Rect::new(lead, inner.y, trail - lead, inner.height),
            arrow,
        }
    }
}

fn menu_item_logical(
    config: &MenuItemConfig,
    region: MenuItemRegion,
    rect: Rect,
    metrics: &impl MetricsProvider,
) -> Rect {
    if region == MenuItemRegion::Frame {
        return rect;
    }
    if config.is_bare_separator() {
        return match region {
            MenuItemRegion::Contents => rect.inside_margin(metrics.metric(Metric::MenuItemMarginWidth)),
            _ => Rect::ZERO,
        };
    }

    let columns = MenuItemColumns::new(config, rect, metrics);
    match region {
        MenuItemRegion::Frame => rect,
        MenuItemRegion::CheckBox => columns.check_box,
        MenuItemRegion::Icon => columns.icon,
        MenuItemRegion::Contents => columns.contents,
        MenuItemRegion::Arrow if config.kind == MenuItemKind::SubMenu => columns.arrow,
        MenuItemRegion::Arrow => Rect::ZERO,
    }
}

pub fn menu_item_rect(
    config: &MenuItemConfig,
    region: MenuItemRegion,
    rect: Rect,
    metrics: &impl MetricsProvider,
) -> Rect {
    mirror(menu_item_logical(config, region, rect, metrics), rect, config.direction)
}

pub fn classify_menu_item(
    config: &MenuItemConfig,
    rect: Rect,
    point: Point,
    metrics: &impl MetricsProvider,
) -> Option<MenuItemRegion> {
    if !rect.contains(point) {
        return None;
    }
    let point = mirror_point(point, rect, config.direction);
    [
        MenuItemRegion::CheckBox,
        MenuItemRegion::Icon,
        MenuItemRegion::Arrow,
        MenuItemRegion::Contents,
        MenuItemRegion::Frame,
    ]
    .into_iter()
    .find(|region| menu_item_logical(config, *region, rect, metrics).contains(point))
}

// =========================================================================
// Item view item
// =========================================================================

fn item_view_item_logical(region: ItemViewItemRegion, rect: Rect, metrics: &impl MetricsProvider) -> Rect {
    match region {
        ItemViewItemRegion::Frame => rect,
        ItemViewItemRegion::Contents => rect.inside_margin(metrics.metric(Metric::ItemViewItemMarginWidth)),
    }
}

pub fn item_view_item_rect(
    config: &ItemViewItemConfig,
    region: ItemViewItemRegion,
    rect: Rect,
    metrics: &impl MetricsProvider,
) -> Rect {
    mirror(item_view_item_logical(region, rect, metrics), rect, config.direction)
}

pub fn classify_item_view_item(
    config: &ItemViewItemConfig,
    rect: Rect,
    point: Point,
    metrics: &impl MetricsProvider,
) -> Option<ItemViewItemRegion> {
    if !rect.contains(point) {
        return None;
    }
    let point = mirror_point(point, rect, config.direction);
    [ItemViewItemRegion::Contents, ItemViewItemRegion::Frame]
        .into_iter()
        .find(|region| item_view_item_logical(*region, rect, metrics).contains(point))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::Metrics;
    use crate::primitives::Direction;

    #[test]
    fn menu_bar_item_margins() {
        let m = Metrics::new();
        let rect = Rect::new(0, 0, 60, 28);
        let config = MenuBarItemConfig::default();
        assert_eq!(menu_bar_item_rect(&config, MenuBarItemRegion::Contents, rect, &m), Rect::new(10, 6, 40, 16));
        assert_eq!(classify_menu_bar_item(&config, rect, Point::new(2, 2), &m), Some(MenuBarItemRegion::Frame));
    }

    // =========================================================================
    // Menu item
    // =========================================================================

    fn sub_menu() -> MenuItemConfig {
        MenuItemConfig {
            kind: MenuItemKind::SubMenu,
            has_checkable_items: true,
            ..Default::default()
        }
    }

    #[test]
    fn menu_item_columns() {
        let m = Metrics::new();
        let config = sub_menu();
        let rect = Rect::new(0, 0, 200, 28);
        // inner (4, 4, 192, 20)
        assert_eq!(menu_item_rect(&config, MenuItemRegion::CheckBox, rect, &m), Rect::new(4, 4, 20, 20));
        assert_eq!(menu_item_rect(&config, MenuItemRegion::Icon, rect, &m), Rect::new(32, 6, 16, 16));
        assert_eq!(menu_item_rect(&config, MenuItemRegion::Contents, rect, &m), Rect::new(56, 4, 122, 20));
        assert_eq!(menu_item_rect(&config, MenuItemRegion::Arrow, rect, &m), Rect::new(186, 9, 10, 10));

        assert_eq!(classify_menu_item(&config, rect, Point::new(10, 10), &m), Some(MenuItemRegion::CheckBox));
        assert_eq!(classify_menu_item(&config, rect, Point::new(100, 14), &m), Some(MenuItemRegion::Contents));
        assert_eq!(classify_menu_item(&config, rect, Point::new(190, 14), &m), Some(MenuItemRegion::Arrow));
        assert_eq!(classify_menu_item(&config, rect, Point::new(1, 1), &m), Some(MenuItemRegion::Frame));
    }

    #[test]
    fn menu_item_columns_mirror_in_rtl() {
        let m = Metrics::new();
        let config = MenuItemConfig {
            direction: Direction::RightToLeft,
            ..sub_menu()
        };
        let rect = Rect::new(0, 0, 200, 28);
        assert_eq!(menu_item_rect(&config, MenuItemRegion::CheckBox, rect, &m), Rect::new(176, 4, 20, 20));
        assert_eq!(menu_item_rect(&config, MenuItemRegion::Arrow, rect, &m), Rect::new(4, 9, 10, 10));
        assert_eq!(classify_menu_item(&config, rect, Point::new(8, 14), &m), Some(MenuItemRegion::Arrow));
    }

    #[test]
    fn plain_menu_item_keeps_arrow_column_empty() {
        let m = Metrics::new();
        let config = MenuItemConfig {
            max_icon_width: 22,
            ..Default::default()
        };
        let rect = Rect::new(0, 0, 200, 30);
        assert!(menu_item_rect(&config, MenuItemRegion::CheckBox, rect, &m).is_empty());
        assert!(menu_item_rect(&config, MenuItemRegion::Arrow, rect, &m).is_empty());
        // inner (4, 4, 192, 22): icon 22 + 8, arrow column 10 + 8
        assert_eq!(menu_item_rect(&config, MenuItemRegion::Icon, rect, &m), Rect::new(4, 4, 22, 22));
        assert_eq!(menu_item_rect(&config, MenuItemRegion::Contents, rect, &m), Rect::new(34, 4, 144, 22));
    }

    #[test]
    fn bare_separator_is_a_line() {
        let m = Metrics::new();
        let config = MenuItemConfig {
            kind: MenuItemKind::Separator,
            ..Default::default()
        };
        let rect = Rect::new(0, 0, 200, 9);
        assert_eq!(menu_item_rect(&config, MenuItemRegion::Contents, rect, &m), Rect::new(4, 4, 192, 1));
        assert!(menu_item_rect(&config, MenuItemRegion::Icon, rect, &m).is_empty());

        let titled = MenuItemConfig {
            has_title: true,
            ..config
        };
        let rect = Rect::new(0, 0, 200, 28);
        assert_eq!(menu_item_rect(&titled, MenuItemRegion::Icon, rect, &m), Rect::new(4, 6, 16, 16));
    }

    #[test]
    fn narrow_menu_item_columns_stay_inside() {
        let m = Metrics::new();
        let config = sub_menu();
        let rect = Rect::new(0, 0, 30, 28);
        for region in MenuItemRegion::ALL {
            let r = menu_item_rect(&config, *region, rect, &m);
            assert!(r.width >= 0 && r.x >= rect.x && r.right() <= rect.right(), "{region:?}: {r:?}");
        }
    }

    // =========================================================================
    // Item view item
    // =========================================================================

    #[test]
    fn item_view_item_margin() {
        let m = Metrics::new();
        let config = ItemViewItemConfig::default();
        let rect = Rect::new(0, 0, 100, 20);
        assert_eq!(item_view_item_rect(&config, ItemViewItemRegion::Contents, rect, &m), Rect::new(3, 3, 94, 14));
        assert_eq!(classify_item_view_item(&config, rect, Point::new(0, 10), &m), Some(ItemViewItemRegion::Frame));
        assert_eq!(classify_item_view_item(&config, rect, Point::new(100, 10), &m), None);
    }
}
