//! Gauge dashboard demo
//!
//! Shows a few gauges bound to the same progress value: defaults, a
//! custom style, and an icon center. Run with:
//!
//! `cargo run --example dashboard`

use std::time::Instant;

use iced::widget::{column, container, row, slider, text, toggler};
use iced::{Alignment, Element, Fill, Subscription, Task, Theme, color};

use ringlet::{ProgressGauge, SweepAnimation, SweepGradient, view_gauge};

fn main() -> iced::Result {
    // Initialize tracing for logging
    tracing_subscriber::fmt::init();

    iced::application(Dashboard::new, Dashboard::update, Dashboard::view)
        .title("ringlet dashboard")
        .theme(Dashboard::theme)
        .subscription(Dashboard::subscription)
        .antialiasing(true)
        .run()
}

struct Dashboard {
    /// The host-owned progress value (0.0 - 1.0)
    progress: f32,
    /// Whether sweep changes animate
    animated: bool,
    /// Interpolation state shared by the rendered gauges
    sweep: SweepAnimation,
}

#[derive(Debug, Clone)]
enum Message {
    ProgressChanged(f32),
    AnimatedToggled(bool),
    AnimationTick,
}

impl Dashboard {
    fn new() -> (Self, Task<Message>) {
        (
            Self {
                progress: 0.5,
                animated: true,
                sweep: SweepAnimation::new(0.5, true),
            },
            Task::none(),
        )
    }

    fn theme(&self) -> Theme {
        Theme::Light
    }

    fn update(&mut self, message: Message) {
        match message {
            Message::ProgressChanged(value) => {
                self.progress = value;
                self.sweep.set_progress(value);
            }
            Message::AnimatedToggled(enabled) => {
                self.animated = enabled;
                self.sweep.set_animated(enabled);
            }
            Message::AnimationTick => {
                self.sweep.tick(Instant::now());
            }
        }
    }

    fn subscription(&self) -> Subscription<Message> {
        // Frames are only requested while a sweep is in flight
        if self.sweep.is_animating() {
            iced::window::frames().map(|_| Message::AnimationTick)
        } else {
            Subscription::none()
        }
    }

    fn view(&self) -> Element<'_, Message> {
        let fraction = self.sweep.value();

        let default_gauge = view_gauge(ProgressGauge::new(fraction), 96.0);

        let styled_gauge = view_gauge(
            ProgressGauge::new(fraction)
                .gradient(SweepGradient::new(vec![
                    color!(0x1e90ff),
                    color!(0x9b59ff),
                    color!(0xff1493),
                ]))
                .track_color(color!(0xe6e6ee))
                .label_color(color!(0x1e90ff))
                .label_size(16.0)
                .track_width(8.0),
            96.0,
        );

        let icon_gauge = view_gauge(
            ProgressGauge::new(fraction)
                .icon("pencil-tip")
                .label_color(color!(0x34c759))
                .label_size(28.0)
                .track_width(6.0),
            96.0,
        );

        let gauges = row![default_gauge, styled_gauge, icon_gauge]
            .spacing(48)
            .align_y(Alignment::Center);

        let controls = row![
            slider(0.0..=1.0, self.progress, Message::ProgressChanged)
                .step(0.01)
                .width(280),
            toggler(self.animated)
                .on_toggle(Message::AnimatedToggled)
                .size(24),
            text("Animate").size(14),
        ]
        .spacing(16)
        .align_y(Alignment::Center);

        container(
            column![gauges, controls]
                .spacing(40)
                .align_x(Alignment::Center),
        )
        .width(Fill)
        .height(Fill)
        .center_x(Fill)
        .center_y(Fill)
        .into()
    }
}
