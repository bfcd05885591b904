//! Widget Chrome: composite control layout engine
//!
//! Computes the sub-region geometry of composite controls (scroll bars,
//! sliders, dials, combo boxes, spin boxes, group boxes, tab widgets, push
//! and tool buttons, menu and item view entries, and a handful of simpler
//! indicator controls) from a bounding rect plus control state, and inverts
//! it for pointer hit testing and content-driven size negotiation.
//!
//! # Architecture
//!
//! A [`Control`] is a family tag carrying its typed configuration. Every
//! pixel constant comes from a [`MetricsProvider`]; [`Metrics`] is the stock
//! table, loadable from JSON. The engine is pure: no caches, no hidden
//! state, no I/O. Anything that persists between calls (such as a tab bar's
//! drag lock) is passed in and handed back by the caller.
//!
//! # Usage
//!
//! ```
//! use widget_chrome::{Control, Metrics, Rect, SubRegion, layout};
//! use widget_chrome::config::ScrollBarConfig;
//! use widget_chrome::region::ScrollBarRegion;
//!
//! let metrics = Metrics::new();
//! let bar = Control::ScrollBar(ScrollBarConfig::default());
//! let groove = layout(
//!     &bar,
//!     SubRegion::ScrollBar(ScrollBarRegion::Groove),
//!     Rect::new(0, 0, 200, 20),
//!     &metrics,
//! );
//! assert_eq!(groove, Rect::new(20, 0, 160, 20));
//! ```

// Core primitives
pub mod primitives;
pub mod metrics;
pub mod error;

// Control model
pub mod config;
pub mod control;
pub mod region;

// Layout, hit testing, size negotiation
pub mod layout;

pub use control::{Control, ControlFamily};
pub use error::MetricsError;
pub use layout::{Corners, classify, layout, negotiate_size};
pub use metrics::{Metric, Metrics, MetricsProvider};
pub use primitives::{Direction, Orientation, Point, Rect, Size};
pub use region::SubRegion;
