//! Circular progress gauge widget for iced
//!
//! A donut-style gauge that renders a percentage or an icon inside an
//! animated ring. The filled arc is stroked with a multi-stop sweep
//! gradient and starts at the 12-o'clock position.
//!
//! # Architecture
//!
//! - [`gauge`]: the gauge itself, a stateless `canvas::Program` plus the
//!   composed [`view_gauge`] element
//! - [`gradient`]: the multi-stop sweep gradient sampled along the arc
//! - [`icons`]: named glyphs for the gauge center
//! - [`animation`]: host-owned sweep interpolation, ticked on frames
//! - [`theme`]: default palette and dark/light aware colors
//!
//! # Example
//!
//! ```
//! use ringlet::{ProgressGauge, view_gauge};
//!
//! #[derive(Clone)]
//! enum Message {}
//!
//! let gauge = ProgressGauge::new(0.7).track_width(6.0);
//! let _element: iced::Element<'_, Message> = view_gauge(gauge, 48.0);
//! ```
//!
//! The host owns the progress value and passes a snapshot on every
//! render; the gauge never mutates it. To animate sweep changes, keep a
//! [`SweepAnimation`] in application state, feed it new progress values,
//! and tick it on `iced::window::frames()` while it reports
//! [`SweepAnimation::is_animating`].

pub mod animation;
pub mod gauge;
pub mod gradient;
pub mod icons;
pub mod theme;

pub use animation::SweepAnimation;
pub use gauge::{ProgressGauge, view_gauge};
pub use gradient::SweepGradient;
