//! Property-based tests for the layout engine.
//! Verifies invariants hold across randomized controls, rects and points.

use proptest::prelude::*;

use widget_chrome::config::{
    ButtonCountMode, CheckBoxConfig, ComboBoxConfig, DialConfig, GroupBoxConfig, HeaderConfig,
    ItemViewItemConfig, LineEditConfig, MenuBarItemConfig, MenuItemConfig, MenuItemKind,
    ProgressBarConfig, PushButtonConfig, RangeState, ScrollBarButtons, ScrollBarConfig,
    SelectedPosition, SliderConfig, SpinBoxConfig, TabBarTabConfig, TabPosition, TabShape,
    TabWidgetConfig, ToolButtonConfig, ToolButtonPopup,
};
use widget_chrome::layout::scroll_bar_geometry;
use widget_chrome::primitives::mirror;
use widget_chrome::region::{
    CheckBoxRegion, ComboBoxRegion, GroupBoxRegion, HeaderRegion, ItemViewItemRegion,
    LineEditRegion, MenuBarItemRegion, MenuItemRegion, ProgressBarRegion, PushButtonRegion,
    ScrollBarRegion, SliderRegion, SpinBoxRegion, TabWidgetRegion, ToolButtonRegion,
};
use widget_chrome::{
    Control, Direction, Metric, Metrics, Orientation, Point, Rect, Size, SubRegion, classify,
    layout, negotiate_size,
};

fn metrics() -> Metrics {
    Metrics::new().with(Metric::ScrollBarExtent, 16)
}

// =========================================================================
// Strategies
// =========================================================================

fn orientation() -> impl Strategy<Value = Orientation> {
    prop_oneof![Just(Orientation::Horizontal), Just(Orientation::Vertical)]
}

fn direction() -> impl Strategy<Value = Direction> {
    prop_oneof![Just(Direction::LeftToRight), Just(Direction::RightToLeft)]
}

fn button_mode() -> impl Strategy<Value = ButtonCountMode> {
    prop_oneof![
        Just(ButtonCountMode::None),
        Just(ButtonCountMode::Single),
        Just(ButtonCountMode::Double),
    ]
}

fn tab_shape() -> impl Strategy<Value = TabShape> {
    prop_oneof![
        Just(TabShape::North),
        Just(TabShape::South),
        Just(TabShape::West),
        Just(TabShape::East),
    ]
}

fn range() -> impl Strategy<Value = RangeState> {
    (-100i32..100, 0i32..300, -50i32..400, 0i32..200, any::<bool>(), any::<bool>()).prop_map(
        |(minimum, span, offset, page_step, upside_down, wrapping)| {
            RangeState::new(minimum, minimum + span, minimum + offset)
                .with_page_step(page_step)
                .upside_down(upside_down)
                .wrapping(wrapping)
        },
    )
}

fn text() -> impl Strategy<Value = Option<Size>> {
    proptest::option::of((0i32..150, 1i32..40).prop_map(|(w, h)| Size::new(w, h)))
}

fn bounds() -> impl Strategy<Value = Rect> {
    (-50i32..50, -50i32..50, 0i32..400, 0i32..300).prop_map(|(x, y, w, h)| Rect::new(x, y, w, h))
}

fn linear_control() -> impl Strategy<Value = Control> {
    prop_oneof![
        (orientation(), range(), button_mode(), button_mode()).prop_map(|(orientation, range, sub, add)| {
            Control::ScrollBar(ScrollBarConfig {
                orientation,
                range,
                buttons: ScrollBarButtons::new(sub, add),
                ..Default::default()
            })
        }),
        (orientation(), range()).prop_map(|(orientation, range)| {
            Control::Slider(SliderConfig {
                orientation,
                range,
                ..Default::default()
            })
        }),
        range().prop_map(|range| Control::Dial(DialConfig {
            range,
            ..Default::default()
        })),
        (orientation(), any::<bool>(), range()).prop_map(|(orientation, text_visible, range)| {
            Control::ProgressBar(ProgressBarConfig {
                orientation,
                text_visible,
                range,
                ..Default::default()
            })
        }),
        (orientation(), any::<bool>(), text(), any::<bool>()).prop_map(
            |(orientation, sort_indicator, text, has_icon)| {
                Control::HeaderSection(HeaderConfig {
                    orientation,
                    sort_indicator,
                    text,
                    has_icon,
                    ..Default::default()
                })
            }
        ),
    ]
}

fn tab_widget_config() -> impl Strategy<Value = TabWidgetConfig> {
    (
        tab_shape(),
        (0i32..250, 0i32..40),
        proptest::option::of((1i32..30, 1i32..30)),
        proptest::option::of((1i32..30, 1i32..30)),
        any::<bool>(),
    )
        .prop_map(|(shape, (bw, bh), left, right, document_mode)| TabWidgetConfig {
            shape,
            tab_bar_size: Size::new(bw, bh),
            left_corner: left.map_or(Size::ZERO, |(w, h)| Size::new(w, h)),
            right_corner: right.map_or(Size::ZERO, |(w, h)| Size::new(w, h)),
            document_mode,
            ..Default::default()
        })
}

fn tab_position() -> impl Strategy<Value = TabPosition> {
    prop_oneof![
        Just(TabPosition::Beginning),
        Just(TabPosition::Middle),
        Just(TabPosition::End),
        Just(TabPosition::OnlyOne),
    ]
}

fn selected_position() -> impl Strategy<Value = SelectedPosition> {
    prop_oneof![
        Just(SelectedPosition::NotAdjacent),
        Just(SelectedPosition::NextIsSelected),
        Just(SelectedPosition::PreviousIsSelected),
    ]
}

fn boxed_control() -> impl Strategy<Value = Control> {
    prop_oneof![
        (any::<bool>(), any::<bool>()).prop_map(|(editable, frame)| {
            Control::ComboBox(ComboBoxConfig {
                editable,
                frame,
                ..Default::default()
            })
        }),
        any::<bool>().prop_map(|frame| Control::SpinBox(SpinBoxConfig {
            frame,
            ..Default::default()
        })),
        any::<bool>().prop_map(|frame| Control::LineEdit(LineEditConfig {
            frame,
            ..Default::default()
        })),
        (any::<bool>(), text()).prop_map(|(checkable, text)| {
            Control::GroupBox(GroupBoxConfig {
                checkable,
                text,
                ..Default::default()
            })
        }),
        tab_widget_config().prop_map(Control::TabWidget),
        (text(), any::<bool>()).prop_map(|(text, radio)| {
            let config = CheckBoxConfig {
                text,
                ..Default::default()
            };
            if radio {
                Control::RadioButton(config)
            } else {
                Control::CheckBox(config)
            }
        }),
        (tab_shape(), any::<bool>(), tab_position(), selected_position(), any::<bool>()).prop_map(
            |(shape, selected, position, selected_position, locked)| {
                Control::TabBarTab(TabBarTabConfig {
                    shape,
                    selected,
                    position,
                    selected_position,
                    locked,
                    ..Default::default()
                })
            }
        ),
    ]
}

fn tool_button_popup() -> impl Strategy<Value = ToolButtonPopup> {
    prop_oneof![
        Just(ToolButtonPopup::None),
        Just(ToolButtonPopup::Inline),
        Just(ToolButtonPopup::Separate),
    ]
}

fn menu_item_kind() -> impl Strategy<Value = MenuItemKind> {
    prop_oneof![
        Just(MenuItemKind::Normal),
        Just(MenuItemKind::SubMenu),
        Just(MenuItemKind::Separator),
    ]
}

fn item_control() -> impl Strategy<Value = Control> {
    prop_oneof![
        (
            any::<bool>(),
            any::<bool>(),
            proptest::option::of((0i32..40, 0i32..40)),
        )
            .prop_map(|(has_menu, has_text, icon)| {
                Control::PushButton(PushButtonConfig {
                    has_menu,
                    has_text,
                    icon: icon.map(|(w, h)| Size::new(w, h)),
                    ..Default::default()
                })
            }),
        (tool_button_popup(), any::<bool>()).prop_map(|(popup, auto_raise)| {
            Control::ToolButton(ToolButtonConfig {
                popup,
                auto_raise,
                ..Default::default()
            })
        }),
        Just(Control::MenuBarItem(MenuBarItemConfig::default())),
        (menu_item_kind(), any::<bool>(), 0i32..40, any::<bool>(), any::<bool>()).prop_map(
            |(kind, has_checkable_items, max_icon_width, has_accelerator, has_title)| {
                Control::MenuItem(MenuItemConfig {
                    kind,
                    has_checkable_items,
                    max_icon_width,
                    has_accelerator,
                    has_title,
                    ..Default::default()
                })
            }
        ),
        Just(Control::ItemViewItem(ItemViewItemConfig::default())),
    ]
}

fn control() -> impl Strategy<Value = Control> {
    prop_oneof![linear_control(), boxed_control(), item_control()]
}

/// Point inside a non-empty rect, picked by fractions of its size.
fn point_in(rect: Rect, fx: f64, fy: f64) -> Point {
    let dx = ((fx * f64::from(rect.width)) as i32).min(rect.width - 1);
    let dy = ((fy * f64::from(rect.height)) as i32).min(rect.height - 1);
    Point::new(rect.x + dx, rect.y + dy)
}

fn major_start(orientation: Orientation, rect: Rect) -> i32 {
    match orientation {
        Orientation::Horizontal => rect.x,
        Orientation::Vertical => rect.y,
    }
}

fn major_end(orientation: Orientation, rect: Rect) -> i32 {
    match orientation {
        Orientation::Horizontal => rect.right(),
        Orientation::Vertical => rect.bottom(),
    }
}

fn major_len(orientation: Orientation, rect: Rect) -> i32 {
    major_end(orientation, rect) - major_start(orientation, rect)
}

/// Region whose size must cover the negotiated content.
fn content_region(control: &Control) -> Option<SubRegion> {
    match control {
        Control::ComboBox(_) => Some(SubRegion::ComboBox(ComboBoxRegion::EditField)),
        Control::SpinBox(_) => Some(SubRegion::SpinBox(SpinBoxRegion::EditField)),
        Control::LineEdit(_) => Some(SubRegion::LineEdit(LineEditRegion::Contents)),
        Control::GroupBox(_) => Some(SubRegion::GroupBox(GroupBoxRegion::Contents)),
        Control::TabWidget(_) => Some(SubRegion::TabWidget(TabWidgetRegion::Contents)),
        Control::CheckBox(_) | Control::RadioButton(_) => Some(SubRegion::CheckBox(CheckBoxRegion::Contents)),
        Control::ProgressBar(c) if c.text_visible => Some(SubRegion::ProgressBar(ProgressBarRegion::Label)),
        Control::HeaderSection(_) => Some(SubRegion::Header(HeaderRegion::Label)),
        Control::PushButton(_) => Some(SubRegion::PushButton(PushButtonRegion::Contents)),
        Control::ToolButton(_) => Some(SubRegion::ToolButton(ToolButtonRegion::Contents)),
        Control::MenuBarItem(_) => Some(SubRegion::MenuBarItem(MenuBarItemRegion::Contents)),
        // a bare separator is a fixed line, sized apart from its contents
        Control::MenuItem(c) if !c.is_bare_separator() => Some(SubRegion::MenuItem(MenuItemRegion::Contents)),
        Control::ItemViewItem(_) => Some(SubRegion::ItemViewItem(ItemViewItemRegion::Contents)),
        _ => None,
    }
}

// =========================================================================
// Properties
// =========================================================================

proptest! {
    /// Right-to-left layout is the left-to-right layout reflected once.
    #[test]
    fn mirror_symmetry(control in control(), rect in bounds()) {
        let m = metrics();
        let ltr = control.with_direction(Direction::LeftToRight);
        let rtl = control.with_direction(Direction::RightToLeft);
        for region in SubRegion::all_for(control.family()) {
            let expected = mirror(layout(&ltr, region, rect, &m), rect, Direction::RightToLeft);
            prop_assert_eq!(layout(&rtl, region, rect, &m), expected, "{:?}", region);
        }
    }

    /// Whatever a point classifies to, that region's rect contains the point.
    #[test]
    fn classify_agrees_with_layout(
        control in control(),
        dir in direction(),
        rect in bounds(),
        fx in 0.0f64..1.0,
        fy in 0.0f64..1.0,
    ) {
        prop_assume!(!rect.is_empty());
        if let Control::ScrollBar(c) = &control {
            // double buttons hit-test by halves, not by block
            prop_assume!(c.buttons.sub_line != ButtonCountMode::Double);
            prop_assume!(c.buttons.add_line != ButtonCountMode::Double);
        }

        let m = metrics();
        let control = control.with_direction(dir);
        let point = point_in(rect, fx, fy);
        if let Some(region) = classify(&control, rect, point, &m) {
            // a slider's groove also answers for the empty track around it
            if region != SubRegion::Slider(SliderRegion::Groove) {
                prop_assert!(
                    layout(&control, region, rect, &m).contains(point),
                    "{:?} at {:?}", region, point
                );
            }
        }
    }

    /// Points outside the bounding rect never classify.
    #[test]
    fn outside_points_miss(control in control(), rect in bounds(), dx in 1i32..20) {
        let m = metrics();
        let point = Point::new(rect.right() + dx - 1, rect.y);
        prop_assert_eq!(classify(&control, rect, point, &m), None);
    }

    /// Buttons and groove tile the track with shared boundaries.
    #[test]
    fn scroll_bar_partition_is_complete(
        orientation in orientation(),
        sub in button_mode(),
        add in button_mode(),
        range in range(),
        length in 0i32..400,
        thickness in 1i32..40,
    ) {
        let m = metrics();
        let config = ScrollBarConfig {
            orientation,
            range,
            buttons: ScrollBarButtons::new(sub, add),
            ..Default::default()
        };
        let rect = match orientation {
            Orientation::Horizontal => Rect::new(3, 7, length, thickness),
            Orientation::Vertical => Rect::new(3, 7, thickness, length),
        };
        let g = scroll_bar_geometry(&config, rect, &m);

        prop_assert_eq!(major_start(orientation, g.sub_line), major_start(orientation, rect));
        prop_assert_eq!(major_end(orientation, g.sub_line), major_start(orientation, g.groove));
        prop_assert_eq!(major_end(orientation, g.groove), major_start(orientation, g.add_line));
        prop_assert_eq!(major_end(orientation, g.add_line), major_end(orientation, rect));

        prop_assert!(major_start(orientation, g.slider) >= major_start(orientation, g.groove));
        prop_assert!(major_end(orientation, g.slider) <= major_end(orientation, g.groove));
        if g.slider != g.groove {
            prop_assert_eq!(major_end(orientation, g.sub_page), major_start(orientation, g.slider));
            prop_assert_eq!(major_start(orientation, g.add_page), major_end(orientation, g.slider));
        }
    }

    /// Every pixel of a scroll bar leaf region classifies back to it.
    #[test]
    fn scroll_bar_regions_classify_to_themselves(
        orientation in orientation(),
        dir in direction(),
        single_sub in any::<bool>(),
        single_add in any::<bool>(),
        range in range(),
        length in 1i32..400,
        fx in 0.0f64..1.0,
        fy in 0.0f64..1.0,
    ) {
        let m = metrics();
        let mode = |single: bool| if single { ButtonCountMode::Single } else { ButtonCountMode::None };
        let config = ScrollBarConfig {
            orientation,
            direction: dir,
            range,
            buttons: ScrollBarButtons::new(mode(single_sub), mode(single_add)),
        };
        let rect = match orientation {
            Orientation::Horizontal => Rect::new(0, 0, length, 16),
            Orientation::Vertical => Rect::new(0, 0, 16, length),
        };
        let control = Control::ScrollBar(config);
        let g = scroll_bar_geometry(&config, rect, &m);

        let mut leaves = vec![ScrollBarRegion::SubLine, ScrollBarRegion::AddLine, ScrollBarRegion::Slider];
        if g.slider != g.groove {
            leaves.extend([ScrollBarRegion::SubPage, ScrollBarRegion::AddPage]);
        }
        for region in leaves {
            let r = g.get(region);
            if r.is_empty() {
                continue;
            }
            let point = point_in(r, fx, fy);
            prop_assert_eq!(classify(&control, rect, point, &m), Some(SubRegion::ScrollBar(region)));
        }
    }

    /// Moving the value forward never moves the slider backward.
    #[test]
    fn slider_offset_is_monotone(
        range in range(),
        a in -50i32..400,
        b in -50i32..400,
        length in 0i32..400,
    ) {
        let m = metrics();
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        let at = |offset: i32| {
            let config = ScrollBarConfig {
                range: RangeState { position: range.minimum + offset, ..range },
                ..Default::default()
            };
            scroll_bar_geometry(&config, Rect::new(0, 0, length, 16), &m).slider.x
        };

        if range.upside_down {
            prop_assert!(at(lo) >= at(hi));
        } else {
            prop_assert!(at(lo) <= at(hi));
        }
    }

    /// The slider never shrinks below the floor or outgrows the groove.
    #[test]
    fn slider_respects_floor(orientation in orientation(), range in range(), length in 0i32..400) {
        let m = metrics();
        let config = ScrollBarConfig {
            orientation,
            range,
            ..Default::default()
        };
        let rect = match orientation {
            Orientation::Horizontal => Rect::new(0, 0, length, 16),
            Orientation::Vertical => Rect::new(0, 0, 16, length),
        };
        let g = scroll_bar_geometry(&config, rect, &m);
        let groove = major_len(orientation, g.groove);
        let slider = major_len(orientation, g.slider);
        let floor = m.get(Metric::ScrollBarMinSliderHeight);

        prop_assert!(slider <= groove);
        prop_assert!(slider >= floor.min(groove));
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Laying out a negotiated size leaves room for the content.
    #[test]
    fn negotiated_size_holds_contents(control in control(), w in 0i32..300, h in 0i32..100) {
        let m = metrics();
        let contents = Size::new(w, h);
        let outer = negotiate_size(&control, contents, &m);
        prop_assert!(outer.width >= 0 && outer.height >= 0);

        if let Some(region) = content_region(&control) {
            let rect = layout(&control, region, Rect::from_origin_size(Point::ORIGIN, outer), &m);
            prop_assert!(
                rect.width >= contents.width && rect.height >= contents.height,
                "{:?}: {:?} from {:?}", region, rect, outer
            );
        }
    }

    /// A negotiated scroll bar always fits a full-size slider.
    #[test]
    fn negotiated_scroll_bar_fits_slider(
        orientation in orientation(),
        sub in button_mode(),
        add in button_mode(),
        length in 0i32..300,
    ) {
        let m = metrics();
        let config = ScrollBarConfig {
            orientation,
            buttons: ScrollBarButtons::new(sub, add),
            ..Default::default()
        };
        let outer = negotiate_size(&Control::ScrollBar(config), Size::new(length, length), &m);
        let g = scroll_bar_geometry(&config, Rect::from_origin_size(Point::ORIGIN, outer), &m);
        prop_assert!(major_len(orientation, g.groove) >= m.get(Metric::ScrollBarMinSliderHeight));
    }
}
