// SPDX-License-Identifier: MPL-2.0
//! Before/after comparison widget.
//!
//! Owns a [`ComparisonSlider`] and the two decoded images. Mouse presses and
//! touches arrive from the canvas; while a drag is in progress a
//! window-level listener reports pointer motion and release anywhere in the
//! window. The listener is a subscription that only exists in the
//! `Dragging` phase, so dropping the state also drops the listener.

mod canvas;

pub use canvas::cover_rect;

use crate::domain::comparison::{ComparisonSlider, ContainerSpan, DragPhase, Transition};
use crate::domain::ui::SplitPercent;
use crate::error::Error;
use crate::media::{self, ImageSource, LoadedImage};
use crate::ui::design_tokens::sizing;
use canvas::ComparisonCanvas;
use iced::widget::Canvas;
use iced::{event, mouse, touch, window, Element, Event, Length, Subscription, Task};

/// Messages handled by the comparison widget.
#[derive(Debug, Clone)]
pub enum Message {
    /// Left button pressed over the widget.
    PointerPressed { x: f32, span: ContainerSpan },
    /// Window-level cursor motion, only delivered while dragging.
    PointerMoved(f32),
    /// Window-level left button release, only delivered while dragging.
    PointerReleased,
    FingerPressed { id: u64, x: f32, span: ContainerSpan },
    FingerMoved { id: u64, x: f32, span: ContainerSpan },
    FingerLifted(u64),
    /// The widget was laid out with a new horizontal geometry.
    SpanChanged(ContainerSpan),
    /// The window lost focus mid-drag.
    DragAbandoned,
    BeforeLoaded(Result<LoadedImage, Error>),
    AfterLoaded(Result<LoadedImage, Error>),
}

/// Comparison widget state.
#[derive(Debug, Default)]
pub struct State {
    slider: ComparisonSlider,
    span: Option<ContainerSpan>,
    primary_finger: Option<u64>,
    before: Option<LoadedImage>,
    after: Option<LoadedImage>,
}

impl State {
    /// Creates a fresh comparison and starts loading both images.
    ///
    /// A missing source leaves its side on the placeholder.
    pub fn new(before: Option<ImageSource>, after: Option<ImageSource>) -> (Self, Task<Message>) {
        let tasks = [
            before.map(|source| Task::perform(media::load(source), Message::BeforeLoaded)),
            after.map(|source| Task::perform(media::load(source), Message::AfterLoaded)),
        ];

        (Self::default(), Task::batch(tasks.into_iter().flatten()))
    }

    #[must_use]
    pub fn split(&self) -> SplitPercent {
        self.slider.split()
    }

    #[must_use]
    pub fn phase(&self) -> DragPhase {
        self.slider.phase()
    }

    /// Returns whether both images are decoded.
    #[must_use]
    pub fn is_ready(&self) -> bool {
        self.before.is_some() && self.after.is_some()
    }

    /// Returns whether the window-level drag listener is installed.
    #[must_use]
    pub fn is_listening(&self) -> bool {
        self.slider.is_dragging()
    }

    /// Back to the midpoint, idle.
    pub fn reset(&mut self) {
        self.primary_finger = None;
        log_transition(self.slider.reset());
    }

    pub fn update(&mut self, message: Message) {
        match message {
            Message::PointerPressed { x, span } => {
                self.span = Some(span);
                log_transition(self.slider.press(x, span));
            }
            Message::PointerMoved(x) => {
                if let Some(span) = self.span {
                    self.slider.pointer_moved(x, span);
                }
            }
            Message::PointerReleased => {
                log_transition(self.slider.release());
            }
            Message::FingerPressed { id, x, span } => {
                self.span = Some(span);
                if self.primary_finger.is_none() {
                    self.primary_finger = Some(id);
                    log_transition(self.slider.press(x, span));
                }
            }
            Message::FingerMoved { id, x, span } => {
                self.span = Some(span);
                if self.primary_finger.is_none_or(|primary| primary == id) {
                    self.slider.touch_moved(&[x], span);
                }
            }
            Message::FingerLifted(id) => {
                if self.primary_finger == Some(id) {
                    self.primary_finger = None;
                    log_transition(self.slider.release());
                }
            }
            Message::SpanChanged(span) => {
                self.span = Some(span);
            }
            Message::DragAbandoned => {
                self.primary_finger = None;
                log_transition(self.slider.abandon());
            }
            Message::BeforeLoaded(result) => {
                self.before = media::accept("before", result);
                self.restart_if_ready();
            }
            Message::AfterLoaded(result) => {
                self.after = media::accept("after", result);
                self.restart_if_ready();
            }
        }
    }

    /// A freshly completed pair starts over from the midpoint.
    fn restart_if_ready(&mut self) {
        if self.is_ready() {
            tracing::debug!("comparison images ready");
            self.reset();
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        Canvas::new(ComparisonCanvas {
            split: self.slider.split(),
            dragging: self.slider.is_dragging(),
            primary_finger: self.primary_finger,
            before: self.before.as_ref(),
            after: self.after.as_ref(),
        })
        .width(Length::Fill)
        .height(Length::Fixed(sizing::COMPARISON_HEIGHT))
        .into()
    }

    /// Window-level pointer tracking, present only while dragging.
    pub fn subscription(&self) -> Subscription<Message> {
        if self.is_listening() {
            event::listen_with(drag_listener)
        } else {
            Subscription::none()
        }
    }
}

fn drag_listener(event: Event, _status: event::Status, _window: window::Id) -> Option<Message> {
    match event {
        Event::Mouse(mouse::Event::CursorMoved { position }) => {
            Some(Message::PointerMoved(position.x))
        }
        Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left)) => {
            Some(Message::PointerReleased)
        }
        Event::Touch(touch::Event::FingerLifted { id, .. } | touch::Event::FingerLost { id, .. }) => {
            Some(Message::FingerLifted(id.0))
        }
        Event::Window(window::Event::Unfocused) => Some(Message::DragAbandoned),
        _ => None,
    }
}

fn log_transition(transition: Transition) {
    match transition {
        Transition::Started => tracing::trace!("comparison drag started"),
        Transition::Ended => tracing::trace!("comparison drag ended"),
        Transition::Unchanged => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{assert_split, TEST_SPAN as SPAN};

    fn pixel() -> LoadedImage {
        LoadedImage::from_rgba(1, 1, vec![0, 0, 0, 255])
    }

    #[test]
    fn new_without_sources_starts_idle_at_midpoint() {
        let (state, _task) = State::new(None, None);
        assert_eq!(state.phase(), DragPhase::Idle);
        assert_split(state.split(), 50.0);
        assert!(!state.is_ready());
    }

    #[test]
    fn mouse_drag_follows_window_motion() {
        let mut state = State::default();
        state.update(Message::PointerPressed { x: 300.0, span: SPAN });
        assert_eq!(state.phase(), DragPhase::Dragging);

        state.update(Message::PointerMoved(200.0));
        assert_split(state.split(), 25.0);

        state.update(Message::PointerReleased);
        state.update(Message::PointerMoved(500.0));
        assert_split(state.split(), 25.0);
        assert_eq!(state.phase(), DragPhase::Idle);
    }

    #[test]
    fn pointer_motion_before_layout_is_ignored() {
        let mut state = State::default();
        state.update(Message::PointerMoved(200.0));
        assert_split(state.split(), 50.0);
    }

    #[test]
    fn span_change_mid_drag_is_used_for_mapping() {
        let mut state = State::default();
        state.update(Message::PointerPressed { x: 300.0, span: SPAN });
        state.update(Message::SpanChanged(ContainerSpan::new(0.0, 200.0)));
        state.update(Message::PointerMoved(50.0));
        assert_split(state.split(), 25.0);
    }

    #[test]
    fn only_primary_finger_moves_the_divider() {
        let mut state = State::default();
        state.update(Message::FingerPressed { id: 1, x: 300.0, span: SPAN });
        state.update(Message::FingerPressed { id: 2, x: 400.0, span: SPAN });

        state.update(Message::FingerMoved { id: 2, x: 500.0, span: SPAN });
        assert_split(state.split(), 50.0);

        state.update(Message::FingerMoved { id: 1, x: 200.0, span: SPAN });
        assert_split(state.split(), 25.0);

        state.update(Message::FingerLifted(2));
        assert_eq!(state.phase(), DragPhase::Dragging);
        state.update(Message::FingerLifted(1));
        assert_eq!(state.phase(), DragPhase::Idle);
    }

    #[test]
    fn touch_move_without_press_updates_split() {
        let mut state = State::default();
        state.update(Message::FingerMoved { id: 7, x: 400.0, span: SPAN });
        assert_split(state.split(), 75.0);
        assert_eq!(state.phase(), DragPhase::Idle);
    }

    #[test]
    fn focus_loss_abandons_drag() {
        let mut state = State::default();
        state.update(Message::PointerPressed { x: 300.0, span: SPAN });
        state.update(Message::DragAbandoned);
        assert_eq!(state.phase(), DragPhase::Idle);
    }

    #[test]
    fn failed_load_keeps_placeholder() {
        let mut state = State::default();
        state.update(Message::BeforeLoaded(Ok(pixel())));
        state.update(Message::AfterLoaded(Err(Error::Http("404".into()))));
        assert!(!state.is_ready());

        state.update(Message::AfterLoaded(Ok(pixel())));
        assert!(state.is_ready());
    }

    #[test]
    fn completing_the_pair_recenters_the_divider() {
        let mut state = State::default();
        state.update(Message::BeforeLoaded(Ok(pixel())));
        state.update(Message::PointerPressed { x: 300.0, span: SPAN });
        state.update(Message::PointerMoved(450.0));
        assert_split(state.split(), 87.5);

        state.update(Message::AfterLoaded(Ok(pixel())));
        assert_split(state.split(), 50.0);
        assert!(!state.is_listening());
    }

    #[test]
    fn a_failed_side_does_not_recenter() {
        let mut state = State::default();
        state.update(Message::BeforeLoaded(Ok(pixel())));
        state.update(Message::FingerMoved { id: 3, x: 200.0, span: SPAN });
        state.update(Message::AfterLoaded(Err(Error::Io("gone".into()))));
        assert_split(state.split(), 25.0);
    }

    #[test]
    fn listener_exists_only_while_dragging() {
        let mut state = State::default();
        assert!(!state.is_listening());

        state.update(Message::PointerPressed { x: 300.0, span: SPAN });
        assert!(state.is_listening());
        state.update(Message::PointerMoved(250.0));
        assert!(state.is_listening());
        state.update(Message::PointerReleased);
        assert!(!state.is_listening());

        state.update(Message::PointerPressed { x: 300.0, span: SPAN });
        state.update(Message::DragAbandoned);
        assert!(!state.is_listening());

        state.update(Message::FingerPressed { id: 4, x: 300.0, span: SPAN });
        assert!(state.is_listening());
        state.update(Message::FingerLifted(9));
        assert!(state.is_listening());
        state.update(Message::FingerLifted(4));
        assert!(!state.is_listening());

        state.update(Message::PointerPressed { x: 300.0, span: SPAN });
        state.reset();
        assert!(!state.is_listening());
    }

    #[test]
    fn stray_release_while_idle_installs_nothing() {
        let mut state = State::default();
        state.update(Message::PointerReleased);
        state.update(Message::FingerLifted(1));
        state.update(Message::DragAbandoned);
        assert!(!state.is_listening());
        assert_eq!(state.phase(), DragPhase::Idle);
    }

    #[test]
    fn reset_restores_midpoint() {
        let mut state = State::default();
        state.update(Message::PointerPressed { x: 300.0, span: SPAN });
        state.update(Message::PointerMoved(480.0));
        state.reset();
        assert_split(state.split(), 50.0);
        assert_eq!(state.phase(), DragPhase::Idle);
    }

    #[test]
    fn drag_listener_maps_window_events() {
        let window = window::Id::unique();
        let moved = drag_listener(
            Event::Mouse(mouse::Event::CursorMoved {
                position: iced::Point::new(42.0, 7.0),
            }),
            event::Status::Ignored,
            window,
        );
        assert!(matches!(moved, Some(Message::PointerMoved(x)) if x == 42.0));

        let unfocused = drag_listener(
            Event::Window(window::Event::Unfocused),
            event::Status::Ignored,
            window,
        );
        assert!(matches!(unfocused, Some(Message::DragAbandoned)));
    }
}
