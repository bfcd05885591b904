//! Shape of a single tab in a tab bar.
//!
//! The painter asks for the adjusted tab rect and its rounded corners. Tabs
//! next to the selected one tuck under it; the first and last tabs round the
//! corner that meets the bar's ends.

use crate::config::{SelectedPosition, TabBarTabConfig, TabPosition, TabShape};
use crate::layout::grouping::Corners;
use crate::metrics::{Metric, MetricsProvider};
use crate::primitives::{Point, Rect, mirror, mirror_point};
use crate::region::TabBarTabRegion;

/// Adjusted tab rect plus the corners to round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TabShapeGeometry {
    pub rect: Rect,
    pub corners: Corners,
}

/// Neighbour flags after the drag lock has been taken into account.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Neighbours {
    first: bool,
    last: bool,
    left_of_selected: bool,
    right_of_selected: bool,
}

impl Neighbours {
    fn new(config: &TabBarTabConfig) -> Self {
        let single = config.position == TabPosition::OnlyOne;
        let left_of_selected =
            !config.locked && config.selected_position == SelectedPosition::NextIsSelected;
        let right_of_selected =
            !config.locked && config.selected_position == SelectedPosition::PreviousIsSelected;

        // A moving selected tab still reports Beginning on its old neighbour.
        let first = (single || config.position == TabPosition::Beginning) && !right_of_selected;
        let last = (single || config.position == TabPosition::End) && !left_of_selected;

        Self {
            first,
            last,
            left_of_selected,
            right_of_selected,
        }
    }
}

fn tab_shape_logical(config: &TabBarTabConfig, rect: Rect, metrics: &impl MetricsProvider) -> TabShapeGeometry {
    let radius = metrics.metric(Metric::TabBarTabRadius);
    let overlap = metrics.metric(Metric::TabBarTabOverlap);
    let n = Neighbours::new(config);

    let mut corners = Corners::empty();
    let mut rect = rect;

    match config.shape {
        TabShape::North | TabShape::South => {
            let (leading, trailing) = if config.shape == TabShape::North {
                (Corners::TOP_LEFT, Corners::TOP_RIGHT)
            } else {
                (Corners::BOTTOM_LEFT, Corners::BOTTOM_RIGHT)
            };

            if config.selected {
                corners = leading | trailing;
                rect = if config.shape == TabShape::North {
                    rect.adjusted(0, 0, 0, radius)
                } else {
                    rect.adjusted(0, -radius, 0, 0)
                };
            } else {
                rect = if config.shape == TabShape::North {
                    rect.adjusted(0, 0, 0, -1)
                } else {
                    rect.adjusted(0, 1, 0, 0)
                };
                if n.first {
                    corners |= leading;
                }
                if n.last {
                    corners |= trailing;
                }
                if n.right_of_selected {
                    rect = rect.adjusted(-radius, 0, 0, 0);
                }
                if n.left_of_selected || !n.last {
                    rect = rect.adjusted(0, 0, overlap, 0);
                }
            }
        }
        TabShape::West | TabShape::East => {
            let (leading, trailing) = if config.shape == TabShape::West {
                (Corners::TOP_LEFT, Corners::BOTTOM_LEFT)
            } else {
                (Corners::TOP_RIGHT, Corners::BOTTOM_RIGHT)
            };

            if config.selected {
                corners = leading | trailing;
                rect = if config.shape == TabShape::West {
                    rect.adjusted(0, 0, radius, 0)
                } else {
                    rect.adjusted(-radius, 0, 0, 0)
                };
            } else {
                rect = if config.shape == TabShape::West {
                    rect.adjusted(0, 0, -1, 0)
                } else {
                    rect.adjusted(1, 0, 0, 0)
                };
                if n.first {
                    corners |= leading;
                }
                if n.last {
                    corners |= trailing;
                }
                if n.right_of_selected {
                    rect = rect.adjusted(0, -radius, 0, 0);
                }
                if n.left_of_selected {
                    rect = rect.adjusted(0, 0, 0, radius);
                } else if !n.last {
                    rect = rect.adjusted(0, 0, 0, overlap);
                }
            }
        }
    }

    TabShapeGeometry { rect, corners }
}

/// Paint geometry of one tab, mirrored for right-to-left bars.
pub fn tab_shape(config: &TabBarTabConfig, rect: Rect, metrics: &impl MetricsProvider) -> TabShapeGeometry {
    let logical = tab_shape_logical(config, rect, metrics);
    if !config.direction.is_rtl() {
        return logical;
    }
    TabShapeGeometry {
        rect: mirror(logical.rect, rect, config.direction),
        corners: logical.corners.mirrored(),
    }
}

/// Next drag-lock state of a tab bar, given one of its tabs being painted.
///
/// Painting the selected tab while it is dragged locks the bar; painting it
/// again once the drag is over releases the lock.
pub fn drag_lock_transition(selected: bool, dragged: bool, locked: bool) -> bool {
    if selected && dragged {
        if !locked {
            tracing::trace!("tab bar locked to dragged tab");
        }
        true
    } else if selected && locked {
        tracing::trace!("tab bar lock released");
        false
    } else {
        locked
    }
}

pub fn tab_bar_tab_rect(
    config: &TabBarTabConfig,
    region: TabBarTabRegion,
    rect: Rect,
    metrics: &impl MetricsProvider,
) -> Rect {
    match region {
        TabBarTabRegion::Shape => tab_shape(config, rect, metrics).rect,
    }
}

pub fn classify_tab_bar_tab(
    config: &TabBarTabConfig,
    rect: Rect,
    point: Point,
    metrics: &impl MetricsProvider,
) -> Option<TabBarTabRegion> {
    if !rect.contains(point) {
        return None;
    }
    let point = mirror_point(point, rect, config.direction);
    tab_shape_logical(config, rect, metrics)
        .rect
        .contains(point)
        .then_some(TabBarTabRegion::Shape)
}
