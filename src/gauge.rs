//! Circular progress gauge
//!
//! A donut-style gauge that renders a percentage or an icon inside an
//! animated ring, using iced's Canvas.
//!
//! # Design
//!
//! The gauge is a stateless `canvas::Program`: it is rebuilt from the
//! host's progress value on every render and never mutates it. The
//! filled arc starts at the 12-o'clock position and is stroked with a
//! sweep gradient spanning the full revolution, so partial progress
//! shows only the gradient's leading portion. Interpolation between
//! successive values is the host's concern (see `crate::animation`).

use iced::widget::Canvas;
use iced::widget::canvas::{Frame, Geometry, Path, Program, Stroke};
use iced::widget::{Space, container, svg, text};
use iced::{Color, Element, Point, Radians, Renderer, Theme, mouse};

use std::f32::consts::{FRAC_PI_2, TAU};

use crate::gradient::SweepGradient;
use crate::icons;
use crate::theme;

/// Progress gauge configuration
#[derive(Debug, Clone)]
pub struct ProgressGauge {
    /// Rendered fraction (0.0 - 1.0)
    fraction: f32,
    /// Sweep gradient for the filled arc
    pub gradient: SweepGradient,
    /// Track (the empty part of the gauge) color
    pub track_color: Color,
    /// Color of the percentage text or icon
    pub label_color: Color,
    /// Size of the percentage text; icons render in a square of this side
    pub label_size: f32,
    /// Stroke width shared by the track and the filled arc
    pub track_width: f32,
    /// Whether the host should interpolate sweep changes
    pub animated: bool,
    /// Named glyph shown instead of the percentage text
    pub icon_name: Option<String>,
}

impl Default for ProgressGauge {
    fn default() -> Self {
        Self {
            fraction: 0.0,
            gradient: SweepGradient::default(),
            track_color: theme::TRACK,
            label_color: theme::LABEL,
            label_size: 12.0,
            track_width: 5.0,
            animated: true,
            icon_name: None,
        }
    }
}

/// Center overlay content, chosen per render
#[derive(Debug, Clone, PartialEq)]
enum Center {
    Percent(String),
    Glyph(&'static str),
    Empty,
}

impl ProgressGauge {
    /// Create a gauge for a progress value (0.0 - 1.0, clamped)
    pub fn new(progress: f32) -> Self {
        Self {
            fraction: progress.clamp(0.0, 1.0),
            ..Default::default()
        }
    }

    pub fn gradient(mut self, gradient: SweepGradient) -> Self {
        self.gradient = gradient;
        self
    }

    pub fn track_color(mut self, color: Color) -> Self {
        self.track_color = color;
        self
    }

    pub fn label_color(mut self, color: Color) -> Self {
        self.label_color = color;
        self
    }

    pub fn label_size(mut self, size: f32) -> Self {
        self.label_size = size;
        self
    }

    pub fn track_width(mut self, width: f32) -> Self {
        self.track_width = width;
        self
    }

    pub fn animated(mut self, animated: bool) -> Self {
        self.animated = animated;
        self
    }

    pub fn icon(mut self, name: impl Into<String>) -> Self {
        self.icon_name = Some(name.into());
        self
    }

    /// The clamped fraction used for rendering
    pub fn fraction(&self) -> f32 {
        self.fraction
    }

    /// The percentage label, e.g. "70%"
    pub fn percent_text(&self) -> String {
        format!("{}%", (self.fraction * 100.0).round() as i32)
    }

    fn center(&self) -> Center {
        match self.icon_name.as_deref() {
            None | Some("") => Center::Percent(self.percent_text()),
            Some(name) => match icons::resolve(name) {
                Some(glyph) => Center::Glyph(glyph),
                None => {
                    tracing::warn!("unknown gauge icon {name:?}, leaving the center empty");
                    Center::Empty
                }
            },
        }
    }
}

impl<Message> Program<Message> for ProgressGauge {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: iced::Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());
        let center = Point::new(bounds.width / 2.0, bounds.height / 2.0);
        let radius = (bounds.width.min(bounds.height) / 2.0) - (self.track_width / 2.0) - 1.0;

        // Track ring
        let track = Path::circle(center, radius);
        frame.stroke(
            &track,
            Stroke::default()
                .with_width(self.track_width)
                .with_color(self.track_color),
        );

        // Filled arc, swept from the top
        if self.fraction > 0.0 && radius > 0.0 {
            let start_angle = -FRAC_PI_2;
            let sweep_angle = self.fraction * TAU;

            // The canvas has no angular gradient, so the arc is drawn as
            // short sub-arcs, each solid-colored from the gradient at its
            // angular midpoint.
            let segments = segment_count(sweep_angle, radius);
            let step = sweep_angle / segments as f32;

            for i in 0..segments {
                let from = start_angle + step * i as f32;
                // overlap the next segment slightly so butt caps leave no seams
                let to = (from + step * 1.5).min(start_angle + sweep_angle);
                let t = (step * (i as f32 + 0.5)) / TAU;

                let segment = Path::new(|builder| {
                    builder.arc(iced::widget::canvas::path::Arc {
                        center,
                        radius,
                        start_angle: Radians(from),
                        end_angle: Radians(to),
                    });
                });

                frame.stroke(
                    &segment,
                    Stroke::default()
                        .with_width(self.track_width)
                        .with_color(self.gradient.sample(t)),
                );
            }
        }

        vec![frame.into_geometry()]
    }
}

/// Sub-arc count for a sweep, about three pixels of circumference each
fn segment_count(sweep_angle: f32, radius: f32) -> usize {
    ((sweep_angle * radius / 3.0).ceil() as usize).clamp(8, 256)
}

/// Create a gauge element of the given side length
///
/// Composes the ring canvas with the center overlay: the percentage text,
/// or the named glyph when one is configured. Unknown glyph names render
/// an empty center.
pub fn view_gauge<'a, Message: 'a>(gauge: ProgressGauge, size: f32) -> Element<'a, Message> {
    let label_color = gauge.label_color;
    let label_size = gauge.label_size;

    let label: Element<'a, Message> = match gauge.center() {
        Center::Percent(percent) => text(percent).size(label_size).color(label_color).into(),
        Center::Glyph(glyph) => svg(svg::Handle::from_memory(glyph.as_bytes()))
            .width(label_size)
            .height(label_size)
            .style(move |_theme, _status| svg::Style {
                color: Some(label_color),
            })
            .into(),
        Center::Empty => Space::new().width(0).height(0).into(),
    };

    let overlay = container(label)
        .width(size)
        .height(size)
        .center_x(size)
        .center_y(size);

    let ring = Canvas::new(gauge).width(size).height(size);

    iced::widget::stack![ring, overlay].into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fraction_passes_through_in_range() {
        for p in [0.0_f32, 0.25, 0.5, 0.7, 1.0] {
            assert_eq!(ProgressGauge::new(p).fraction(), p);
        }
    }

    #[test]
    fn fraction_clamps_the_upper_bound() {
        assert_eq!(ProgressGauge::new(1.7).fraction(), 1.0);
        assert_eq!(ProgressGauge::new(42.0).fraction(), 1.0);
    }

    #[test]
    fn fraction_clamps_the_lower_bound() {
        assert_eq!(ProgressGauge::new(-0.3).fraction(), 0.0);
    }

    #[test]
    fn percent_text_rounds_to_an_integer() {
        assert_eq!(ProgressGauge::new(0.7).percent_text(), "70%");
        assert_eq!(ProgressGauge::new(1.0).percent_text(), "100%");
        assert_eq!(ProgressGauge::new(0.0).percent_text(), "0%");
        assert_eq!(ProgressGauge::new(0.457).percent_text(), "46%");
        assert_eq!(ProgressGauge::new(2.5).percent_text(), "100%");
    }

    #[test]
    fn construction_applies_documented_defaults() {
        let gauge = ProgressGauge::new(0.5);
        assert_eq!(gauge.gradient, SweepGradient::default());
        assert_eq!(gauge.track_color, theme::TRACK);
        assert_eq!(gauge.label_color, theme::LABEL);
        assert_eq!(gauge.label_size, 12.0);
        assert_eq!(gauge.track_width, 5.0);
        assert!(gauge.animated);
        assert!(gauge.icon_name.is_none());
    }

    #[test]
    fn percentage_and_icon_are_mutually_exclusive() {
        assert_eq!(
            ProgressGauge::new(0.5).center(),
            Center::Percent("50%".to_string())
        );
        assert_eq!(
            ProgressGauge::new(0.7).icon("pencil-tip").center(),
            Center::Glyph(icons::PENCIL_TIP)
        );
    }

    #[test]
    fn empty_icon_name_shows_the_percentage() {
        assert_eq!(
            ProgressGauge::new(0.5).icon("").center(),
            Center::Percent("50%".to_string())
        );
    }

    #[test]
    fn unknown_icon_renders_an_empty_center() {
        assert_eq!(
            ProgressGauge::new(0.5).icon("sparkles").center(),
            Center::Empty
        );
    }

    #[test]
    fn segment_counts_stay_bounded() {
        assert_eq!(segment_count(0.001, 20.0), 8);
        assert_eq!(segment_count(TAU, 10_000.0), 256);
        let half = segment_count(TAU / 2.0, 40.0);
        let full = segment_count(TAU, 40.0);
        assert!(half < full);
    }
}
