//! Per-family control configuration.
//!
//! Each composite control family gets its own strongly typed configuration
//! struct, built by the caller from the live widget state at paint or event
//! time. Defaults match a plain, enabled, left-to-right control.

use serde::{Deserialize, Serialize};

use crate::primitives::{Direction, Orientation, Size};

// =========================================================================
// Shared value state
// =========================================================================

/// Numeric value state of sliders, scroll bars, dials and progress bars.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RangeState {
    pub minimum: i32,
    pub maximum: i32,
    pub position: i32,
    pub page_step: i32,
    pub upside_down: bool,
    pub wrapping: bool,
}

impl RangeState {
    pub fn new(minimum: i32, maximum: i32, position: i32) -> Self {
        Self {
            minimum,
            maximum,
            position,
            ..Self::default()
        }
    }

    pub fn with_page_step(mut self, page_step: i32) -> Self {
        self.page_step = page_step;
        self
    }

    pub fn upside_down(mut self, upside_down: bool) -> Self {
        self.upside_down = upside_down;
        self
    }

    pub fn wrapping(mut self, wrapping: bool) -> Self {
        self.wrapping = wrapping;
        self
    }

    /// Indeterminate ("busy") state: no usable numeric span.
    pub fn is_busy(&self) -> bool {
        self.maximum <= self.minimum
    }

    /// Span `maximum - minimum` in i64 so extreme ranges cannot overflow.
    pub fn span(&self) -> i64 {
        i64::from(self.maximum) - i64::from(self.minimum)
    }

    /// Position clamped into `[minimum, maximum]`.
    pub fn clamped_position(&self) -> i32 {
        if self.is_busy() {
            return self.minimum;
        }
        self.position.clamp(self.minimum, self.maximum)
    }

    /// `(position - minimum) / (maximum - minimum)`, 0 when busy.
    pub fn fraction(&self) -> f64 {
        if self.is_busy() {
            return 0.0;
        }
        (i64::from(self.clamped_position()) - i64::from(self.minimum)) as f64 / self.span() as f64
    }
}

impl Default for RangeState {
    fn default() -> Self {
        Self {
            minimum: 0,
            maximum: 100,
            position: 0,
            page_step: 10,
            upside_down: false,
            wrapping: false,
        }
    }
}

/// Number of step buttons at one end of a scroll bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ButtonCountMode {
    None,
    #[default]
    Single,
    /// Both step buttons stacked at this end.
    Double,
}

/// Theme-wide scroll bar button setting, one mode per end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct ScrollBarButtons {
    /// Buttons at the start (top / leading) end.
    pub sub_line: ButtonCountMode,
    /// Buttons at the end (bottom / trailing) end.
    pub add_line: ButtonCountMode,
}

impl ScrollBarButtons {
    pub fn new(sub_line: ButtonCountMode, add_line: ButtonCountMode) -> Self {
        Self { sub_line, add_line }
    }
}

// =========================================================================
// Linear and radial families
// =========================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScrollBarConfig {
    pub orientation: Orientation,
    pub direction: Direction,
    pub range: RangeState,
    pub buttons: ScrollBarButtons,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SliderConfig {
    pub orientation: Orientation,
    pub direction: Direction,
    pub range: RangeState,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DialConfig {
    pub direction: Direction,
    /// `range.wrapping` selects the full-circle sweep.
    pub range: RangeState,
}

// =========================================================================
// Popup / editable families
// =========================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ComboBoxConfig {
    pub editable: bool,
    pub frame: bool,
    pub direction: Direction,
}

impl ComboBoxConfig {
    /// Editable with no frame: nothing to paint around the editor.
    pub fn is_flat(&self) -> bool {
        self.editable && !self.frame
    }
}

impl Default for ComboBoxConfig {
    fn default() -> Self {
        Self {
            editable: false,
            frame: true,
            direction: Direction::LeftToRight,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpinBoxConfig {
    pub frame: bool,
    pub direction: Direction,
}

impl SpinBoxConfig {
    pub fn is_flat(&self) -> bool {
        !self.frame
    }
}

impl Default for SpinBoxConfig {
    fn default() -> Self {
        Self {
            frame: true,
            direction: Direction::LeftToRight,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineEditConfig {
    pub frame: bool,
    pub direction: Direction,
}

impl Default for LineEditConfig {
    fn default() -> Self {
        Self {
            frame: true,
            direction: Direction::LeftToRight,
        }
    }
}

// =========================================================================
// Grouping families
// =========================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GroupBoxConfig {
    pub checkable: bool,
    /// Measured extent of the title text, `None` when the title is empty.
    pub text: Option<Size>,
    pub direction: Direction,
}

/// Edge of the tab widget the tab bar sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TabShape {
    #[default]
    North,
    South,
    West,
    East,
}

impl TabShape {
    pub fn is_vertical(self) -> bool {
        matches!(self, TabShape::West | TabShape::East)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TabWidgetConfig {
    pub shape: TabShape,
    /// Footprint of the tab bar; empty when the bar is hidden.
    pub tab_bar_size: Size,
    pub left_corner: Size,
    pub right_corner: Size,
    /// No visible frame around the pane.
    pub document_mode: bool,
    pub direction: Direction,
}

/// Where a tab sits within its bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TabPosition {
    Beginning,
    #[default]
    Middle,
    End,
    OnlyOne,
}

/// Relation of a tab to the selected tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SelectedPosition {
    #[default]
    NotAdjacent,
    /// The tab after this one is selected.
    NextIsSelected,
    /// The tab before this one is selected.
    PreviousIsSelected,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TabBarTabConfig {
    pub shape: TabShape,
    pub selected: bool,
    pub position: TabPosition,
    pub selected_position: SelectedPosition,
    /// Owning tab bar is locked to its selected tab while it is dragged.
    pub locked: bool,
    pub direction: Direction,
}

// =========================================================================
// Indicator families
// =========================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CheckBoxConfig {
    /// Measured extent of the label text, if any.
    pub text: Option<Size>,
    pub direction: Direction,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProgressBarConfig {
    pub orientation: Orientation,
    pub direction: Direction,
    pub text_visible: bool,
    pub range: RangeState,
}

impl Default for ProgressBarConfig {
    fn default() -> Self {
        Self {
            orientation: Orientation::Horizontal,
            direction: Direction::LeftToRight,
            text_visible: true,
            range: RangeState::default(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HeaderConfig {
    pub orientation: Orientation,
    pub direction: Direction,
    pub sort_indicator: bool,
    /// Measured extent of the section title, if any.
    pub text: Option<Size>,
    pub has_icon: bool,
}

// =========================================================================
// Buttons and items
// =========================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PushButtonConfig {
    /// A menu is attached; a drop-down arrow sits at the trailing edge.
    pub has_menu: bool,
    pub has_text: bool,
    /// Icon extent, `None` without an icon. An empty extent means the
    /// small icon size.
    pub icon: Option<Size>,
    pub direction: Direction,
}

/// How a tool button presents its menu, if it has one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ToolButtonPopup {
    #[default]
    None,
    /// Arrow indicator drawn inside the button frame.
    Inline,
    /// Separate arrow button split off the trailing edge.
    Separate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ToolButtonConfig {
    pub popup: ToolButtonPopup,
    /// Frameless until hovered.
    pub auto_raise: bool,
    pub direction: Direction,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MenuBarItemConfig {
    pub direction: Direction,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MenuItemKind {
    #[default]
    Normal,
    SubMenu,
    Separator,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MenuItemConfig {
    pub kind: MenuItemKind,
    /// Some item in the menu is checkable, so every item reserves the
    /// check column.
    pub has_checkable_items: bool,
    /// Widest icon in the menu; the icon column is never narrower than the
    /// small icon size.
    pub max_icon_width: i32,
    /// Text carries a tab-separated shortcut.
    pub has_accelerator: bool,
    /// A separator with text or an icon, laid out like a normal item.
    pub has_title: bool,
    pub direction: Direction,
}

impl MenuItemConfig {
    /// Plain separator line with no title.
    pub fn is_bare_separator(&self) -> bool {
        self.kind == MenuItemKind::Separator && !self.has_title
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ItemViewItemConfig {
    pub direction: Direction,
}
