//! The closed set of control families the engine knows how to lay out.

use crate::config::{
    CheckBoxConfig, ComboBoxConfig, DialConfig, GroupBoxConfig, HeaderConfig, ItemViewItemConfig,
    LineEditConfig, MenuBarItemConfig, MenuItemConfig, ProgressBarConfig, PushButtonConfig,
    ScrollBarConfig, SliderConfig, SpinBoxConfig, TabBarTabConfig, TabWidgetConfig,
    ToolButtonConfig,
};
use crate::primitives::Direction;

/// A control family tag carrying that family's configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    ScrollBar(ScrollBarConfig),
    Slider(SliderConfig),
    Dial(DialConfig),
    ComboBox(ComboBoxConfig),
    SpinBox(SpinBoxConfig),
    GroupBox(GroupBoxConfig),
    TabWidget(TabWidgetConfig),
    CheckBox(CheckBoxConfig),
    RadioButton(CheckBoxConfig),
    LineEdit(LineEditConfig),
    ProgressBar(ProgressBarConfig),
    HeaderSection(HeaderConfig),
    TabBarTab(TabBarTabConfig),
    PushButton(PushButtonConfig),
    ToolButton(ToolButtonConfig),
    MenuBarItem(MenuBarItemConfig),
    MenuItem(MenuItemConfig),
    ItemViewItem(ItemViewItemConfig),
}

/// Family tag without configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ControlFamily {
    ScrollBar,
    Slider,
    Dial,
    ComboBox,
    SpinBox,
    GroupBox,
    TabWidget,
    CheckBox,
    RadioButton,
    LineEdit,
    ProgressBar,
    HeaderSection,
    TabBarTab,
    PushButton,
    ToolButton,
    MenuBarItem,
    MenuItem,
    ItemViewItem,
}

impl Control {
    pub fn family(&self) -> ControlFamily {
        match self {
            Control::ScrollBar(_) => ControlFamily::ScrollBar,
            Control::Slider(_) => ControlFamily::Slider,
            Control::Dial(_) => ControlFamily::Dial,
            Control::ComboBox(_) => ControlFamily::ComboBox,
            Control::SpinBox(_) => ControlFamily::SpinBox,
            Control::GroupBox(_) => ControlFamily::GroupBox,
            Control::TabWidget(_) => ControlFamily::TabWidget,
            Control::CheckBox(_) => ControlFamily::CheckBox,
            Control::RadioButton(_) => ControlFamily::RadioButton,
            Control::LineEdit(_) => ControlFamily::LineEdit,
            Control::ProgressBar(_) => ControlFamily::ProgressBar,
            Control::HeaderSection(_) => ControlFamily::HeaderSection,
            Control::TabBarTab(_) => ControlFamily::TabBarTab,
            Control::PushButton(_) => ControlFamily::PushButton,
            Control::ToolButton(_) => ControlFamily::ToolButton,
            Control::MenuBarItem(_) => ControlFamily::MenuBarItem,
            Control::MenuItem(_) => ControlFamily::MenuItem,
            Control::ItemViewItem(_) => ControlFamily::ItemViewItem,
        }
    }

    /// Reading direction the control is laid out in.
    pub fn direction(&self) -> Direction {
        match self {
            Control::ScrollBar(c) => c.direction,
            Control::Slider(c) => c.direction,
            Control::Dial(c) => c.direction,
            Control::ComboBox(c) => c.direction,
            Control::SpinBox(c) => c.direction,
            Control::GroupBox(c) => c.direction,
            Control::TabWidget(c) => c.direction,
            Control::CheckBox(c) | Control::RadioButton(c) => c.direction,
            Control::LineEdit(c) => c.direction,
            Control::ProgressBar(c) => c.direction,
            Control::HeaderSection(c) => c.direction,
            Control::TabBarTab(c) => c.direction,
            Control::PushButton(c) => c.direction,
            Control::ToolButton(c) => c.direction,
            Control::MenuBarItem(c) => c.direction,
            Control::MenuItem(c) => c.direction,
            Control::ItemViewItem(c) => c.direction,
        }
    }

    /// Same control with its reading direction replaced.
    pub fn with_direction(mut self, direction: Direction) -> Self {
        match &mut self {
            Control::ScrollBar(c) => c.direction = direction,
            Control::Slider(c) => c.direction = direction,
            Control::Dial(c) => c.direction = direction,
            Control::ComboBox(c) => c.direction = direction,
            Control::SpinBox(c) => c.direction = direction,
            Control::GroupBox(c) => c.direction = direction,
            Control::TabWidget(c) => c.direction = direction,
            Control::CheckBox(c) | Control::RadioButton(c) => c.direction = direction,
            Control::LineEdit(c) => c.direction = direction,
            Control::ProgressBar(c) => c.direction = direction,
            Control::HeaderSection(c) => c.direction = direction,
            Control::TabBarTab(c) => c.direction = direction,
            Control::PushButton(c) => c.direction = direction,
            Control::ToolButton(c) => c.direction = direction,
            Control::MenuBarItem(c) => c.direction = direction,
            Control::MenuItem(c) => c.direction = direction,
            Control::ItemViewItem(c) => c.direction = direction,
        }
        self
    }
}
