//! Layout engine: geometry, hit testing and size negotiation for every
//! control family.
//!
//! The three entry points dispatch on [`Control`]:
//!
//! - [`layout`]: rect of one [`SubRegion`] inside a bounding rect.
//! - [`classify`]: which sub-region a point falls in.
//! - [`negotiate_size`]: minimum outer size for a content size.
//!
//! None of them fail. Asking for a region of another family yields an empty
//! rect; points outside the control classify to `None`.

mod button;
mod dial;
mod grouping;
mod indicator;
mod item;
mod popup;
mod size;
mod tab;
mod track;

pub use button::{classify_push_button, classify_tool_button, push_button_rect, tool_button_rect};
pub use dial::{classify_dial, dial_angle, dial_rect};
pub use grouping::{
    Corners, classify_group_box, classify_tab_widget, group_box_rect, tab_widget_frame_corners,
    tab_widget_rect,
};
pub use indicator::{
    check_box_rect, classify_check_box, classify_header, classify_progress_bar, header_rect,
    progress_bar_rect,
};
pub use item::{
    classify_item_view_item, classify_menu_bar_item, classify_menu_item, item_view_item_rect,
    menu_bar_item_rect, menu_item_rect,
};
pub use popup::{
    classify_combo_box, classify_line_edit, classify_spin_box, combo_box_rect, line_edit_rect,
    spin_box_rect,
};
pub use size::{
    check_box_size, combo_box_size, dial_size, group_box_size, header_size, item_view_item_size,
    line_edit_size, menu_bar_item_size, menu_item_size, progress_bar_size, push_button_size,
    scroll_bar_size, slider_size, spin_box_size, tab_bar_tab_size, tab_widget_size,
    tool_button_size,
};
pub use tab::{TabShapeGeometry, classify_tab_bar_tab, drag_lock_transition, tab_bar_tab_rect, tab_shape};
pub use track::{
    ScrollBarGeometry, classify_scroll_bar, classify_slider, scroll_bar_button_halves,
    scroll_bar_geometry, scroll_bar_rect, slider_rect,
};

use crate::control::Control;
use crate::metrics::MetricsProvider;
use crate::primitives::{Point, Rect, Size};
use crate::region::SubRegion;

/// Rect of `region` for `control` laid out in `rect`.
///
/// Right-to-left controls get mirrored geometry. A region that does not
/// belong to the control's family yields [`Rect::ZERO`].
pub fn layout(
    control: &Control,
    region: SubRegion,
    rect: Rect,
    metrics: &impl MetricsProvider,
) -> Rect {
    match (control, region) {
        (Control::ScrollBar(c), SubRegion::ScrollBar(r)) => scroll_bar_rect(c, r, rect, metrics),
        (Control::Slider(c), SubRegion::Slider(r)) => slider_rect(c, r, rect, metrics),
        (Control::Dial(c), SubRegion::Dial(r)) => dial_rect(c, r, rect, metrics),
        (Control::ComboBox(c), SubRegion::ComboBox(r)) => combo_box_rect(c, r, rect, metrics),
        (Control::SpinBox(c), SubRegion::SpinBox(r)) => spin_box_rect(c, r, rect, metrics),
        (Control::GroupBox(c), SubRegion::GroupBox(r)) => group_box_rect(c, r, rect, metrics),
        (Control::TabWidget(c), SubRegion::TabWidget(r)) => tab_widget_rect(c, r, rect, metrics),
        (Control::CheckBox(c) | Control::RadioButton(c), SubRegion::CheckBox(r)) => {
            check_box_rect(c, r, rect, metrics)
        }
        (Control::LineEdit(c), SubRegion::LineEdit(r)) => line_edit_rect(c, r, rect, metrics),
        (Control::ProgressBar(c), SubRegion::ProgressBar(r)) => progress_bar_rect(c, r, rect, metrics),
        (Control::HeaderSection(c), SubRegion::Header(r)) => header_rect(c, r, rect, metrics),
        (Control::TabBarTab(c), SubRegion::TabBarTab(r)) => tab_bar_tab_rect(c, r, rect, metrics),
        (Control::PushButton(c), SubRegion::PushButton(r)) => push_button_rect(c, r, rect, metrics),
        (Control::ToolButton(c), SubRegion::ToolButton(r)) => tool_button_rect(c, r, rect, metrics),
        (Control::MenuBarItem(c), SubRegion::MenuBarItem(r)) => menu_bar_item_rect(c, r, rect, metrics),
        (Control::MenuItem(c), SubRegion::MenuItem(r)) => menu_item_rect(c, r, rect, metrics),
        (Control::ItemViewItem(c), SubRegion::ItemViewItem(r)) => item_view_item_rect(c, r, rect, metrics),
        (control, region) => {
            tracing::debug!(
                family = ?control.family(),
                ?region,
                "sub-region does not belong to control family"
            );
            Rect::ZERO
        }
    }
}

/// Sub-region of `control` under `point`, or `None` outside the control.
pub fn classify(
    control: &Control,
    rect: Rect,
    point: Point,
    metrics: &impl MetricsProvider,
) -> Option<SubRegion> {
    match control {
        Control::ScrollBar(c) => classify_scroll_bar(c, rect, point, metrics).map(SubRegion::ScrollBar),
        Control::Slider(c) => classify_slider(c, rect, point, metrics).map(SubRegion::Slider),
        Control::Dial(c) => classify_dial(c, rect, point, metrics).map(SubRegion::Dial),
        Control::ComboBox(c) => classify_combo_box(c, rect, point, metrics).map(SubRegion::ComboBox),
        Control::SpinBox(c) => classify_spin_box(c, rect, point, metrics).map(SubRegion::SpinBox),
        Control::GroupBox(c) => classify_group_box(c, rect, point, metrics).map(SubRegion::GroupBox),
        Control::TabWidget(c) => classify_tab_widget(c, rect, point, metrics).map(SubRegion::TabWidget),
        Control::CheckBox(c) | Control::RadioButton(c) => {
            classify_check_box(c, rect, point, metrics).map(SubRegion::CheckBox)
        }
        Control::LineEdit(c) => classify_line_edit(c, rect, point, metrics).map(SubRegion::LineEdit),
        Control::ProgressBar(c) => {
            classify_progress_bar(c, rect, point, metrics).map(SubRegion::ProgressBar)
        }
        Control::HeaderSection(c) => classify_header(c, rect, point, metrics).map(SubRegion::Header),
        Control::TabBarTab(c) => classify_tab_bar_tab(c, rect, point, metrics).map(SubRegion::TabBarTab),
        Control::PushButton(c) => classify_push_button(c, rect, point, metrics).map(SubRegion::PushButton),
        Control::ToolButton(c) => classify_tool_button(c, rect, point, metrics).map(SubRegion::ToolButton),
        Control::MenuBarItem(c) => {
            classify_menu_bar_item(c, rect, point, metrics).map(SubRegion::MenuBarItem)
        }
        Control::MenuItem(c) => classify_menu_item(c, rect, point, metrics).map(SubRegion::MenuItem),
        Control::ItemViewItem(c) => {
            classify_item_view_item(c, rect, point, metrics).map(SubRegion::ItemViewItem)
        }
    }
}

/// Minimum outer size of `control` able to hold `contents`.
pub fn negotiate_size(control: &Control, contents: Size, metrics: &impl MetricsProvider) -> Size {
    let contents = Size::new(contents.width.max(0), contents.height.max(0));
    match control {
        Control::ScrollBar(c) => scroll_bar_size(c, contents, metrics),
        Control::Slider(c) => slider_size(c, contents, metrics),
        Control::Dial(c) => dial_size(c, contents, metrics),
        Control::ComboBox(c) => combo_box_size(c, contents, metrics),
        Control::SpinBox(c) => spin_box_size(c, contents, metrics),
        Control::GroupBox(c) => group_box_size(c, contents, metrics),
        Control::TabWidget(c) => tab_widget_size(c, contents, metrics),
        Control::CheckBox(c) | Control::RadioButton(c) => check_box_size(c, contents, metrics),
        Control::LineEdit(c) => line_edit_size(c, contents, metrics),
        Control::ProgressBar(c) => progress_bar_size(c, contents, metrics),
        Control::HeaderSection(c) => header_size(c, contents, metrics),
        Control::TabBarTab(c) => tab_bar_tab_size(c, contents, metrics),
        Control::PushButton(c) => push_button_size(c, contents, metrics),
        Control::ToolButton(c) => tool_button_size(c, contents, metrics),
        Control::MenuBarItem(c) => menu_bar_item_size(c, contents, metrics),
        Control::MenuItem(c) => menu_item_size(c, contents, metrics),
        Control::ItemViewItem(c) => item_view_item_size(c, contents, metrics),
    }
}
