//! Addressable sub-regions of composite controls.

use crate::control::ControlFamily;

macro_rules! region_enum {
    ($(#[$doc:meta])* $name:ident { $($variant:ident),* $(,)? }) => {
        $(#[$doc])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $($variant,)*
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant,)*];
        }
    };
}

region_enum! {
    /// Parts of a scroll bar.
    ScrollBarRegion { Groove, Slider, AddLine, SubLine, AddPage, SubPage }
}

region_enum! {
    SliderRegion { Groove, Handle }
}

region_enum! {
    DialRegion { Groove, Handle }
}

region_enum! {
    ComboBoxRegion { Frame, ListBoxPopup, Arrow, EditField }
}

region_enum! {
    SpinBoxRegion { Frame, Up, Down, EditField }
}

region_enum! {
    GroupBoxRegion { Frame, Contents, CheckBox, Label }
}

region_enum! {
    TabWidgetRegion { Bar, Pane, Contents, LeftCorner, RightCorner }
}

region_enum! {
    /// Parts of a check box or radio button.
    CheckBoxRegion { Indicator, Contents, FocusRect }
}

region_enum! {
    LineEditRegion { Frame, Contents }
}

region_enum! {
    ProgressBarRegion { Groove, Contents, Label }
}

region_enum! {
    HeaderRegion { Arrow, Label }
}

region_enum! {
    TabBarTabRegion { Shape }
}

region_enum! {
    /// Parts of a push button; `Arrow` only with an attached menu.
    PushButtonRegion { Frame, Contents, Arrow }
}

region_enum! {
    ToolButtonRegion { Frame, Contents, Arrow }
}

region_enum! {
    MenuBarItemRegion { Frame, Contents }
}

region_enum! {
    /// Columns of a menu item, leading to trailing.
    MenuItemRegion { Frame, CheckBox, Icon, Contents, Arrow }
}

region_enum! {
    ItemViewItemRegion { Frame, Contents }
}

/// A named part of some control family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SubRegion {
    ScrollBar(ScrollBarRegion),
    Slider(SliderRegion),
    Dial(DialRegion),
    ComboBox(ComboBoxRegion),
    SpinBox(SpinBoxRegion),
    GroupBox(GroupBoxRegion),
    TabWidget(TabWidgetRegion),
    /// Shared by check boxes and radio buttons.
    CheckBox(CheckBoxRegion),
    LineEdit(LineEditRegion),
    ProgressBar(ProgressBarRegion),
    Header(HeaderRegion),
    TabBarTab(TabBarTabRegion),
    PushButton(PushButtonRegion),
    ToolButton(ToolButtonRegion),
    MenuBarItem(MenuBarItemRegion),
    MenuItem(MenuItemRegion),
    ItemViewItem(ItemViewItemRegion),
}

impl SubRegion {
    /// Every region of one family, for callers that iterate a partition.
    pub fn all_for(family: ControlFamily) -> Vec<SubRegion> {
        match family {
            ControlFamily::ScrollBar => ScrollBarRegion::ALL.iter().copied().map(SubRegion::ScrollBar).collect(),
            ControlFamily::Slider => SliderRegion::ALL.iter().copied().map(SubRegion::Slider).collect(),
            ControlFamily::Dial => DialRegion::ALL.iter().copied().map(SubRegion::Dial).collect(),
            ControlFamily::ComboBox => ComboBoxRegion::ALL.iter().copied().map(SubRegion::ComboBox).collect(),
            ControlFamily::SpinBox => SpinBoxRegion::ALL.iter().copied().map(SubRegion::SpinBox).collect(),
            ControlFamily::GroupBox => GroupBoxRegion::ALL.iter().copied().map(SubRegion::GroupBox).collect(),
            ControlFamily::TabWidget => TabWidgetRegion::ALL.iter().copied().map(SubRegion::TabWidget).collect(),
            ControlFamily::CheckBox | ControlFamily::RadioButton => {
                CheckBoxRegion::ALL.iter().copied().map(SubRegion::CheckBox).collect()
            }
            ControlFamily::LineEdit => LineEditRegion::ALL.iter().copied().map(SubRegion::LineEdit).collect(),
            ControlFamily::ProgressBar => ProgressBarRegion::ALL.iter().copied().map(SubRegion::ProgressBar).collect(),
            ControlFamily::HeaderSection => HeaderRegion::ALL.iter().copied().map(SubRegion::Header).collect(),
            ControlFamily::TabBarTab => TabBarTabRegion::ALL.iter().copied().map(SubRegion::TabBarTab).collect(),
            ControlFamily::PushButton => PushButtonRegion::ALL.iter().copied().map(SubRegion::PushButton).collect(),
            ControlFamily::ToolButton => ToolButtonRegion::ALL.iter().copied().map(SubRegion::ToolButton).collect(),
            ControlFamily::MenuBarItem => MenuBarItemRegion::ALL.iter().copied().map(SubRegion::MenuBarItem).collect(),
            ControlFamily::MenuItem => MenuItemRegion::ALL.iter().copied().map(SubRegion::MenuItem).collect(),
            ControlFamily::ItemViewItem => {
                ItemViewItemRegion::ALL.iter().copied().map(SubRegion::ItemViewItem).collect()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_for_lists_family_regions() {
        let regions = SubRegion::all_for(ControlFamily::ScrollBar);
        assert_eq!(regions.len(), 6);
        assert!(regions.contains(&SubRegion::ScrollBar(ScrollBarRegion::AddPage)));

        let radio = SubRegion::all_for(ControlFamily::RadioButton);
        assert_eq!(radio, SubRegion::all_for(ControlFamily::CheckBox));

        let menu = SubRegion::all_for(ControlFamily::MenuItem);
        assert_eq!(menu.first(), Some(&SubRegion::MenuItem(MenuItemRegion::Frame)));
        assert_eq!(menu.len(), 5);
    }
}
