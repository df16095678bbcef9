//! Sweep gradient for the filled arc
//!
//! A multi-stop color sequence sampled along the gauge's angular extent.
//! Stops are evenly spaced over the full revolution, so partial progress
//! shows only the leading portion of the gradient.

use iced::Color;

use crate::theme;

/// Ordered color stops defining the arc's sweep gradient
#[derive(Debug, Clone, PartialEq)]
pub struct SweepGradient {
    stops: Vec<Color>,
}

impl Default for SweepGradient {
    fn default() -> Self {
        Self {
            stops: vec![
                theme::GRADIENT_RED,
                theme::GRADIENT_ORANGE,
                theme::GRADIENT_YELLOW,
                theme::GRADIENT_GREEN,
            ],
        }
    }
}

impl SweepGradient {
    /// Create a gradient from ordered stops
    ///
    /// Stops are spaced evenly; an empty list samples as transparent.
    pub fn new(stops: Vec<Color>) -> Self {
        Self { stops }
    }

    /// The ordered stops
    pub fn stops(&self) -> &[Color] {
        &self.stops
    }

    /// Sample the gradient at `t` (0.0 - 1.0, clamped)
    pub fn sample(&self, t: f32) -> Color {
        match self.stops.as_slice() {
            [] => Color::TRANSPARENT,
            [only] => *only,
            stops => {
                let t = t.clamp(0.0, 1.0);
                let scaled = t * (stops.len() - 1) as f32;
                let index = scaled.floor() as usize;
                if index >= stops.len() - 1 {
                    return stops[stops.len() - 1];
                }
                lerp(stops[index], stops[index + 1], scaled - index as f32)
            }
        }
    }
}

/// Component-wise linear interpolation between two colors
fn lerp(from: Color, to: Color, t: f32) -> Color {
    Color::from_rgba(
        from.r + (to.r - from.r) * t,
        from.g + (to.g - from.g) * t,
        from.b + (to.b - from.b) * t,
        from.a + (to.a - from.a) * t,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: Color, b: Color) -> bool {
        (a.r - b.r).abs() < 1e-4
            && (a.g - b.g).abs() < 1e-4
            && (a.b - b.b).abs() < 1e-4
            && (a.a - b.a).abs() < 1e-4
    }

    #[test]
    fn endpoints_hit_first_and_last_stops() {
        let gradient = SweepGradient::default();
        assert_eq!(gradient.sample(0.0), theme::GRADIENT_RED);
        assert_eq!(gradient.sample(1.0), theme::GRADIENT_GREEN);
    }

    #[test]
    fn interior_stops_land_on_their_positions() {
        let gradient = SweepGradient::default();
        assert!(close(gradient.sample(1.0 / 3.0), theme::GRADIENT_ORANGE));
        assert!(close(gradient.sample(2.0 / 3.0), theme::GRADIENT_YELLOW));
    }

    #[test]
    fn midpoint_interpolates_linearly() {
        let gradient = SweepGradient::new(vec![Color::BLACK, Color::WHITE]);
        let mid = gradient.sample(0.5);
        assert!(close(mid, Color::from_rgb(0.5, 0.5, 0.5)));
    }

    #[test]
    fn out_of_range_samples_clamp() {
        let gradient = SweepGradient::default();
        assert_eq!(gradient.sample(-1.0), gradient.sample(0.0));
        assert_eq!(gradient.sample(2.0), gradient.sample(1.0));
    }

    #[test]
    fn single_stop_is_constant() {
        let gradient = SweepGradient::new(vec![Color::WHITE]);
        assert_eq!(gradient.sample(0.0), Color::WHITE);
        assert_eq!(gradient.sample(0.7), Color::WHITE);
    }

    #[test]
    fn empty_gradient_is_transparent() {
        let gradient = SweepGradient::new(vec![]);
        assert_eq!(gradient.sample(0.5), Color::TRANSPARENT);
    }
}
