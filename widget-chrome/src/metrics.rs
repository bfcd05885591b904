//! Pixel metrics table.
//!
//! Every constant the layout engine needs is looked up by [`Metric`] name
//! through a [`MetricsProvider`]. [`Metrics`] is the stock table: theme
//! defaults, optionally overridden from a JSON object such as
//! `{"ScrollBar_Extent": 16}`.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::MetricsError;

macro_rules! metrics {
    ($( $(#[$doc:meta])* $variant:ident = $name:literal => $default:expr, )*) => {
        /// Semantic name of a pixel constant.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        pub enum Metric {
            $( $(#[$doc])* #[serde(rename = $name)] $variant, )*
        }

        impl Metric {
            /// Every metric, in declaration order.
            pub const ALL: &'static [Metric] = &[ $( Metric::$variant, )* ];

            /// Number of metrics in the table.
            pub const COUNT: usize = Metric::ALL.len();

            /// Configuration name, e.g. `"ScrollBar_Extent"`.
            pub fn name(self) -> &'static str {
                match self {
                    $( Metric::$variant => $name, )*
                }
            }

            /// Theme default in pixels.
            pub fn default_value(self) -> i32 {
                match self {
                    $( Metric::$variant => $default, )*
                }
            }
        }

        impl FromStr for Metric {
            type Err = MetricsError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $( $name => Ok(Metric::$variant), )*
                    other => Err(MetricsError::UnknownMetric(other.to_string())),
                }
            }
        }
    };
}

metrics! {
    /// Width of the generic frame drawn around editors and group boxes.
    FrameWidth = "Frame_FrameWidth" => 2,

    /// Inner margin of line edits (also editable combo/spin boxes).
    LineEditMarginWidth = "LineEdit_MarginWidth" => 2,

    ComboBoxMarginWidth = "ComboBox_MarginWidth" => 6,
    ComboBoxBoxTextSpace = "ComboBox_BoxTextSpace" => 4,
    ComboBoxArrowButtonWidth = "ComboBox_ArrowButtonWidth" => 20,

    SpinBoxArrowButtonWidth = "SpinBox_ArrowButtonWidth" => 20,

    /// Side of the check box / radio indicator square.
    CheckBoxSize = "CheckBox_Size" => 20,
    CheckBoxBoxTextSpace = "CheckBox_BoxTextSpace" => 4,
    CheckBoxFocusMarginWidth = "CheckBox_FocusMarginWidth" => 2,

    /// Thickness of a scroll bar; also the length of a single step button.
    ScrollBarExtent = "ScrollBar_Extent" => 20,
    /// Length of a scroll bar end with no step button.
    ScrollBarNoButtonHeight = "ScrollBar_NoButtonHeight" => 0,
    ScrollBarMinSliderHeight = "ScrollBar_MinSliderHeight" => 20,

    /// Thickness of the slider/dial groove line.
    SliderGrooveThickness = "Slider_GrooveThickness" => 6,
    /// Side of the slider/dial handle.
    SliderControlThickness = "Slider_ControlThickness" => 20,

    GroupBoxTitleMarginWidth = "GroupBox_TitleMarginWidth" => 4,

    TabBarTabMarginWidth = "TabBar_TabMarginWidth" => 8,
    TabBarTabMarginHeight = "TabBar_TabMarginHeight" => 4,
    TabBarTabMinWidth = "TabBar_TabMinWidth" => 80,
    TabBarTabMinHeight = "TabBar_TabMinHeight" => 30,
    TabBarTabRadius = "TabBar_TabRadius" => 3,
    TabBarTabOverlap = "TabBar_TabOverlap" => 1,
    /// How far the tab bar sinks into the tab widget frame, plus one.
    TabBarBaseOverlap = "TabBar_BaseOverlap" => 2,

    TabWidgetMarginWidth = "TabWidget_MarginWidth" => 4,

    ProgressBarThickness = "ProgressBar_Thickness" => 6,
    ProgressBarBoxTextSpace = "ProgressBar_BoxTextSpace" => 4,

    HeaderMarginWidth = "Header_MarginWidth" => 6,
    HeaderBoxTextSpace = "Header_BoxTextSpace" => 4,
    HeaderArrowSize = "Header_ArrowSize" => 10,
    HeaderIconSize = "Header_IconSize" => 22,

    /// Side of a small icon when the caller gives no explicit icon size.
    SmallIconSize = "SmallIconSize" => 16,

    ButtonMarginWidth = "Button_MarginWidth" => 6,
    ButtonBoxTextSpace = "Button_BoxTextSpace" => 4,
    /// Menu arrow square of a push button with an attached menu.
    ButtonArrowButtonWidth = "Button_ArrowButtonWidth" => 20,

    /// Margin of an auto-raised (frameless) tool button.
    ToolButtonMarginWidth = "ToolButton_MarginWidth" => 2,
    ToolButtonArrowButtonWidth = "ToolButton_ArrowButtonWidth" => 20,

    MenuBarItemMarginWidth = "MenuBarItem_MarginWidth" => 10,
    MenuBarItemMarginHeight = "MenuBarItem_MarginHeight" => 6,

    MenuItemMarginWidth = "MenuItem_MarginWidth" => 4,
    MenuItemBoxTextSpace = "MenuItem_BoxTextSpace" => 8,
    /// Submenu arrow square at the trailing edge of a menu item.
    MenuItemArrowWidth = "MenuItem_ArrowWidth" => 10,

    ItemViewItemMarginWidth = "ItemView_ItemMarginWidth" => 3,
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Read-only lookup of pixel metrics by name.
///
/// Implementations must return the same value for the same metric for the
/// duration of a layout call.
pub trait MetricsProvider {
    fn metric(&self, metric: Metric) -> i32;
}

impl<T: MetricsProvider + ?Sized> MetricsProvider for &T {
    fn metric(&self, metric: Metric) -> i32 {
        (**self).metric(metric)
    }
}

/// The stock metrics table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Metrics {
    values: [i32; Metric::COUNT],
}

impl Metrics {
    /// Table holding the theme defaults.
    pub fn new() -> Self {
        let mut values = [0; Metric::COUNT];
        for (slot, metric) in values.iter_mut().zip(Metric::ALL) {
            *slot = metric.default_value();
        }
        Self { values }
    }

    /// Builder-style override of a single metric.
    pub fn with(mut self, metric: Metric, value: i32) -> Self {
        self.values[Self::index(metric)] = value;
        self
    }

    pub fn get(&self, metric: Metric) -> i32 {
        self.values[Self::index(metric)]
    }

    /// Look a metric up by its configuration name.
    pub fn get_by_name(&self, name: &str) -> Result<i32, MetricsError> {
        Ok(self.get(name.parse()?))
    }

    /// Parse overrides from a JSON object of `name -> pixels` on top of the
    /// defaults.
    pub fn from_json(json: &str) -> Result<Self, MetricsError> {
        let overrides: BTreeMap<String, i32> = serde_json::from_str(json)?;
        let mut metrics = Self::new();
        for (name, value) in overrides {
            let metric: Metric = name.parse()?;
            metrics.values[Self::index(metric)] = value;
        }
        metrics.validate()?;
        tracing::debug!("loaded metrics table with {} entries", Metric::COUNT);
        Ok(metrics)
    }

    /// Serialize the full table as a JSON object.
    pub fn to_json(&self) -> Result<String, MetricsError> {
        let map: BTreeMap<Metric, i32> = Metric::ALL.iter().map(|m| (*m, self.get(*m))).collect();
        Ok(serde_json::to_string_pretty(&map)?)
    }

    /// Reject negative pixel values.
    pub fn validate(&self) -> Result<(), MetricsError> {
        for metric in Metric::ALL {
            let value = self.get(*metric);
            if value < 0 {
                return Err(MetricsError::Negative {
                    metric: *metric,
                    value,
                });
            }
        }
        Ok(())
    }

    #[inline]
    fn index(metric: Metric) -> usize {
        metric as usize
    }
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}

impl MetricsProvider for Metrics {
    fn metric(&self, metric: Metric) -> i32 {
        self.get(metric)
    }
}
