//! Size negotiation: minimum outer size for a given content size.
//!
//! Each rule adds back exactly the chrome the matching layout function takes
//! away, so laying out the negotiated size yields a content region at least
//! as large as the content that was asked for.

use crate::config::{
    CheckBoxConfig, ComboBoxConfig, DialConfig, GroupBoxConfig, HeaderConfig, ItemViewItemConfig,
    LineEditConfig, MenuBarItemConfig, MenuItemConfig, ProgressBarConfig, PushButtonConfig,
    ScrollBarConfig, SliderConfig, SpinBoxConfig, TabBarTabConfig, TabShape, TabWidgetConfig,
    ToolButtonConfig, ToolButtonPopup,
};
use crate::layout::button::{icon_extent, tool_button_margin};
use crate::layout::grouping::{pane_overlap, title_band_height, title_row_width};
use crate::layout::item::menu_icon_column;
use crate::layout::track::button_length;
use crate::metrics::{Metric, MetricsProvider};
use crate::primitives::{Orientation, Size, expand_size};

pub fn combo_box_size(config: &ComboBoxConfig, contents: Size, metrics: &impl MetricsProvider) -> Size {
    let flat = config.is_flat();
    let arrow = metrics.metric(Metric::ComboBoxArrowButtonWidth);

    let mut size = if config.editable && !flat {
        let margin = metrics.metric(Metric::LineEditMarginWidth);
        expand_size(contents, margin, margin)
    } else if !config.editable {
        let margin = metrics.metric(Metric::ComboBoxMarginWidth);
        expand_size(contents, margin, margin)
    } else {
        contents
    };

    size.height = size.height.max(arrow);
    size.width += arrow;
    if !config.editable {
        size.width += metrics.metric(Metric::ComboBoxBoxTextSpace);
    }

    if flat {
        size
    } else {
        let frame = metrics.metric(Metric::FrameWidth);
        expand_size(size, frame, frame)
    }
}

pub fn spin_box_size(config: &SpinBoxConfig, contents: Size, metrics: &impl MetricsProvider) -> Size {
    let flat = config.is_flat();
    let arrow = metrics.metric(Metric::SpinBoxArrowButtonWidth);

    let mut size = if flat {
        contents
    } else {
        let margin = metrics.metric(Metric::LineEditMarginWidth);
        expand_size(contents, margin, margin)
    };

    size.height = size.height.max(arrow);
    size.width += arrow;

    if flat {
        size
    } else {
        let frame = metrics.metric(Metric::FrameWidth);
        expand_size(size, frame, frame)
    }
}

pub fn line_edit_size(config: &LineEditConfig, contents: Size, metrics: &impl MetricsProvider) -> Size {
    if !config.frame {
        return contents;
    }
    let margin = metrics.metric(Metric::LineEditMarginWidth) + metrics.metric(Metric::FrameWidth);
    expand_size(contents, margin, margin)
}

/// Shared by check boxes and radio buttons.
pub fn check_box_size(_config: &CheckBoxConfig, contents: Size, metrics: &impl MetricsProvider) -> Size {
    let indicator = metrics.metric(Metric::CheckBoxSize);
    let mut size = expand_size(contents, 0, metrics.metric(Metric::CheckBoxFocusMarginWidth));
    size.height = size.height.max(indicator);
    size.width += indicator + metrics.metric(Metric::CheckBoxBoxTextSpace);
    size
}

pub fn group_box_size(config: &GroupBoxConfig, contents: Size, metrics: &impl MetricsProvider) -> Size {
    let size = Size::new(
        contents.width.max(title_row_width(config, metrics)),
        contents.height + title_band_height(config, metrics),
    );
    let frame = metrics.metric(Metric::FrameWidth);
    expand_size(size, frame, frame)
}

pub fn tab_widget_size(config: &TabWidgetConfig, contents: Size, metrics: &impl MetricsProvider) -> Size {
    let bar = config.tab_bar_size;
    if bar.is_empty() {
        return contents;
    }

    let margin = metrics.metric(Metric::TabWidgetMarginWidth);
    let overlap = pane_overlap(metrics);
    let (edge, across) = if config.document_mode { (margin, 0) } else { (2 * margin, 2 * margin) };

    match config.shape {
        TabShape::North | TabShape::South => {
            let corners = [config.left_corner, config.right_corner]
                .iter()
                .filter(|corner| !corner.is_empty())
                .count() as i32
                * bar.height;
            Size::new(
                (contents.width + across).max(bar.width + 2 + corners),
                contents.height + edge + (bar.height - overlap).max(0),
            )
        }
        TabShape::West | TabShape::East => Size::new(
            contents.width + edge + (bar.width - overlap).max(0),
            (contents.height + across).max(bar.height + 2),
        ),
    }
}

pub fn tab_bar_tab_size(config: &TabBarTabConfig, contents: Size, metrics: &impl MetricsProvider) -> Size {
    let margin_w = metrics.metric(Metric::TabBarTabMarginWidth);
    let margin_h = metrics.metric(Metric::TabBarTabMarginHeight);
    let minimum = Size::new(
        metrics.metric(Metric::TabBarTabMinWidth),
        metrics.metric(Metric::TabBarTabMinHeight),
    );

    if config.shape.is_vertical() {
        expand_size(contents, margin_h, margin_w).expanded_to(minimum.transposed())
    } else {
        expand_size(contents, margin_w, margin_h).expanded_to(minimum)
    }
}

/// Orient a `(length, thickness)` pair for a linear control.
fn along(orientation: Orientation, length: i32, thickness: i32) -> Size {
    match orientation {
        Orientation::Horizontal => Size::new(length, thickness),
        Orientation::Vertical => Size::new(thickness, length),
    }
}

fn major(orientation: Orientation, size: Size) -> i32 {
    match orientation {
        Orientation::Horizontal => size.width,
        Orientation::Vertical => size.height,
    }
}

pub fn scroll_bar_size(config: &ScrollBarConfig, contents: Size, metrics: &impl MetricsProvider) -> Size {
    let minimum = button_length(config.buttons.sub_line, metrics)
        + button_length(config.buttons.add_line, metrics)
        + metrics.metric(Metric::ScrollBarMinSliderHeight);
    along(
        config.orientation,
        major(config.orientation, contents).max(minimum),
        metrics.metric(Metric::ScrollBarExtent),
    )
}

pub fn slider_size(config: &SliderConfig, contents: Size, metrics: &impl MetricsProvider) -> Size {
    let handle = metrics.metric(Metric::SliderControlThickness);
    along(
        config.orientation,
        major(config.orientation, contents).max(2 * handle),
        handle,
    )
}

pub fn dial_size(_config: &DialConfig, contents: Size, metrics: &impl MetricsProvider) -> Size {
    let side = contents
        .width
        .max(contents.height)
        .max(2 * metrics.metric(Metric::SliderControlThickness));
    Size::new(side, side)
}

pub fn progress_bar_size(config: &ProgressBarConfig, contents: Size, metrics: &impl MetricsProvider) -> Size {
    let thickness = metrics.metric(Metric::ProgressBarThickness);
    let band = thickness + metrics.metric(Metric::ProgressBarBoxTextSpace);
    let mut size = contents;

    if config.orientation.is_horizontal() {
        size.width = size.width.max(thickness);
        if config.text_visible {
            size.height += band;
        } else {
            size.height = thickness;
        }
    } else {
        size.height = size.height.max(thickness);
        if config.text_visible {
            size.width += band;
        } else {
            size.width = thickness;
        }
    }
    size
}

pub fn header_size(config: &HeaderConfig, contents: Size, metrics: &impl MetricsProvider) -> Size {
    let space = metrics.metric(Metric::HeaderBoxTextSpace);
    let icon = metrics.metric(Metric::HeaderIconSize);
    let arrow = metrics.metric(Metric::HeaderArrowSize);

    let mut width = config.text.map_or(0, |t| t.width);
    let mut height = config.text.map_or(0, |t| t.height);
    if config.has_icon {
        width += icon;
        if config.text.is_some() {
            width += space;
        }
        height = height.max(icon);
    }

    // the sort arrow sits beside the label, never over it
    let mut size = contents.expanded_to(Size::new(width, height));
    if config.orientation.is_horizontal() || config.sort_indicator {
        size.width += arrow + space;
        size.height = size.height.max(arrow);
    }

    let margin = metrics.metric(Metric::HeaderMarginWidth);
    expand_size(size, margin, margin)
}

/// Label contents plus icon spacing, margins, the menu arrow and the frame.
pub fn push_button_size(config: &PushButtonConfig, contents: Size, metrics: &impl MetricsProvider) -> Size {
    let margin = metrics.metric(Metric::ButtonMarginWidth);
    let space = metrics.metric(Metric::ButtonBoxTextSpace);
    let mut size = contents;

    if let Some(icon) = config.icon {
        size.height = size.height.max(icon_extent(icon, metrics).height);
        if config.has_text {
            size.width += space;
        }
    }

    if config.has_menu {
        let arrow = metrics.metric(Metric::ButtonArrowButtonWidth);
        size.height = (size.height + 2 * margin).max(arrow);
        size.width += margin + arrow;
        if config.has_text || config.icon.is_some() {
            size.width += space;
        }
    } else {
        size = expand_size(size, margin, margin);
    }

    let frame = metrics.metric(Metric::FrameWidth);
    expand_size(size, frame, frame)
}

pub fn tool_button_size(config: &ToolButtonConfig, contents: Size, metrics: &impl MetricsProvider) -> Size {
    let mut size = contents;
    if config.popup != ToolButtonPopup::None {
        size.width += metrics.metric(Metric::ToolButtonArrowButtonWidth);
    }
    let margin = tool_button_margin(config, metrics);
    expand_size(size, margin, margin)
}

pub fn menu_bar_item_size(_config: &MenuBarItemConfig, contents: Size, metrics: &impl MetricsProvider) -> Size {
    expand_size(
        contents,
        metrics.metric(Metric::MenuBarItemMarginWidth),
        metrics.metric(Metric::MenuBarItemMarginHeight),
    )
}

/// A bare separator is a one pixel line whatever the contents; every
/// other item reserves its check, icon and arrow columns.
pub fn menu_item_size(config: &MenuItemConfig, contents: Size, metrics: &impl MetricsProvider) -> Size {
    let margin = metrics.metric(Metric::MenuItemMarginWidth);
    if config.is_bare_separator() {
        return expand_size(Size::new(0, 1), margin, margin);
    }

    let space = metrics.metric(Metric::MenuItemBoxTextSpace);
    let check = metrics.metric(Metric::CheckBoxSize);
    let arrow = metrics.metric(Metric::MenuItemArrowWidth);
    let icon = menu_icon_column(config, metrics);

    let mut leading = icon + space;
    if config.has_checkable_items {
        leading += check + space;
    }

    let mut size = contents;
    if config.has_accelerator {
        size.width += space;
    }
    size.width += leading + arrow + space;
    size.height = size.height.max(arrow).max(check).max(icon);
    expand_size(size, margin, margin)
}

pub fn item_view_item_size(_config: &ItemViewItemConfig, contents: Size, metrics: &impl MetricsProvider) -> Size {
    let margin = metrics.metric(Metric::ItemViewItemMarginWidth);
    expand_size(contents, margin, margin)
}
