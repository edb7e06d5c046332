// SPDX-License-Identifier: MPL-2.0
//! Canvas program drawing the layered comparison images.
//!
//! The "after" image fills the whole area; the "before" image uses the same
//! cover geometry but is clipped to the left part of the area, up to the
//! divider.

use super::Message;
use crate::domain::comparison::ContainerSpan;
use crate::domain::content::copy::comparison as copy;
use crate::domain::ui::SplitPercent;
use crate::media::LoadedImage;
use crate::ui::design_tokens::{opacity, palette, radius, sizing, spacing, typography};
use iced::widget::canvas::{self, Frame, Path, Stroke, Text};
use iced::widget::Action;
use iced::{alignment, mouse, touch, Color, Event, Point, Rectangle, Renderer, Size, Theme};

const BADGE_WIDTH: f32 = 84.0;
const BADGE_HEIGHT: f32 = 28.0;
const ARROW_HALF: f32 = 5.0;

/// Per-frame drawing inputs of the comparison.
pub struct ComparisonCanvas<'a> {
    pub split: SplitPercent,
    pub dragging: bool,
    pub primary_finger: Option<u64>,
    pub before: Option<&'a LoadedImage>,
    pub after: Option<&'a LoadedImage>,
}

/// Last span reported to the component, so resizes are published once.
#[derive(Debug, Default)]
pub struct CanvasState {
    reported_span: Option<ContainerSpan>,
}

impl canvas::Program<Message> for ComparisonCanvas<'_> {
    type State = CanvasState;

    fn update(
        &self,
        state: &mut Self::State,
        event: &Event,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> Option<Action<Message>> {
        // Scrolling is vertical only, so horizontal layout coordinates
        // match window coordinates.
        let span = ContainerSpan::new(bounds.x, bounds.width);

        match event {
            Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)) => {
                let position = cursor.position_over(bounds)?;
                return Some(
                    Action::publish(Message::PointerPressed {
                        x: position.x,
                        span,
                    })
                    .and_capture(),
                );
            }
            Event::Touch(touch::Event::FingerPressed { id, .. }) => {
                let position = cursor.position_over(bounds)?;
                return Some(
                    Action::publish(Message::FingerPressed {
                        id: id.0,
                        x: position.x,
                        span,
                    })
                    .and_capture(),
                );
            }
            Event::Touch(touch::Event::FingerMoved { id, position }) => {
                if self.primary_finger == Some(id.0) || cursor.is_over(bounds) {
                    return Some(
                        Action::publish(Message::FingerMoved {
                            id: id.0,
                            x: position.x,
                            span,
                        })
                        .and_capture(),
                    );
                }
            }
            Event::Touch(
                touch::Event::FingerLifted { id, .. } | touch::Event::FingerLost { id, .. },
            ) if self.primary_finger == Some(id.0) => {
                return Some(Action::publish(Message::FingerLifted(id.0)));
            }
            _ => {}
        }

        if state.reported_span != Some(span) {
            state.reported_span = Some(span);
            return Some(Action::publish(Message::SpanChanged(span)));
        }

        None
    }

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<canvas::Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());
        let area = bounds.size();

        match (self.before, self.after) {
            (Some(before), Some(after)) => {
                // At an edge one side is fully hidden.
                if !self.split.is_max() {
                    frame.draw_image(
                        cover_rect(after.size(), area),
                        canvas::Image::new(after.handle.clone()),
                    );
                }

                if !self.split.is_min() {
                    let divider_x = self.split.offset_in(area.width);
                    let before_rect = cover_rect(before.size(), area);
                    frame.with_clip(
                        Rectangle::new(Point::ORIGIN, Size::new(divider_x, area.height)),
                        |frame| {
                            frame.draw_image(before_rect, canvas::Image::new(before.handle.clone()));
                        },
                    );
                }
            }
            _ => draw_placeholder(&mut frame, area),
        }

        draw_handle(&mut frame, area, self.split);
        draw_badge(
            &mut frame,
            Point::new(spacing::MD, spacing::MD),
            copy::BEFORE_BADGE,
            Color {
                a: opacity::OVERLAY_STRONG,
                ..palette::BLACK
            },
        );
        draw_badge(
            &mut frame,
            Point::new(area.width - spacing::MD - BADGE_WIDTH, spacing::MD),
            copy::AFTER_BADGE,
            Color {
                a: opacity::SURFACE,
                ..palette::CYAN_600
            },
        );
        draw_caption(&mut frame, area);

        vec![frame.into_geometry()]
    }

    fn mouse_interaction(
        &self,
        _state: &Self::State,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> mouse::Interaction {
        if self.dragging || cursor.is_over(bounds) {
            mouse::Interaction::ResizingHorizontally
        } else {
            mouse::Interaction::default()
        }
    }
}

/// Rectangle covering `area` with an image of `image` size, preserving the
/// aspect ratio and centering the overflow (CSS `object-fit: cover`).
///
/// Degenerate image sizes fall back to stretching over the area.
#[must_use]
pub fn cover_rect(image: Size, area: Size) -> Rectangle {
    if image.width <= 0.0 || image.height <= 0.0 {
        return Rectangle::with_size(area);
    }

    let scale = (area.width / image.width).max(area.height / image.height);
    let size = Size::new(image.width * scale, image.height * scale);

    Rectangle::new(
        Point::new(
            (area.width - size.width) / 2.0,
            (area.height - size.height) / 2.0,
        ),
        size,
    )
}

fn draw_placeholder(frame: &mut Frame, area: Size) {
    frame.fill_rectangle(Point::ORIGIN, area, palette::SLATE_800);
    frame.fill_text(Text {
        content: copy::LOADING.to_string(),
        position: Point::new(area.width / 2.0, area.height / 2.0),
        color: palette::SLATE_400,
        size: typography::BODY.into(),
        align_x: alignment::Horizontal::Center.into(),
        align_y: alignment::Vertical::Center,
        ..Text::default()
    });
}

fn draw_handle(frame: &mut Frame, area: Size, split: SplitPercent) {
    let x = split.offset_in(area.width);
    let center = Point::new(x, area.height / 2.0);

    frame.fill_rectangle(
        Point::new(x - sizing::COMPARISON_DIVIDER / 2.0, 0.0),
        Size::new(sizing::COMPARISON_DIVIDER, area.height),
        palette::WHITE,
    );

    let knob = Path::circle(center, sizing::COMPARISON_KNOB / 2.0);
    frame.fill(&knob, palette::WHITE);
    frame.stroke(
        &knob,
        Stroke::default()
            .with_width(1.0)
            .with_color(palette::SLATE_200),
    );

    // Left/right arrow glyph
    let gap = ARROW_HALF + 2.0;
    let arrows = Path::new(|builder| {
        builder.move_to(Point::new(center.x - gap, center.y - ARROW_HALF));
        builder.line_to(Point::new(center.x - gap - ARROW_HALF, center.y));
        builder.line_to(Point::new(center.x - gap, center.y + ARROW_HALF));
        builder.close();

        builder.move_to(Point::new(center.x + gap, center.y - ARROW_HALF));
        builder.line_to(Point::new(center.x + gap + ARROW_HALF, center.y));
        builder.line_to(Point::new(center.x + gap, center.y + ARROW_HALF));
        builder.close();
    });
    frame.fill(&arrows, palette::NAVY_900);
}

fn draw_badge(frame: &mut Frame, top_left: Point, label: &str, background: Color) {
    let size = Size::new(BADGE_WIDTH, BADGE_HEIGHT);
    frame.fill(
        &Path::rounded_rectangle(top_left, size, radius::SM.into()),
        background,
    );
    frame.fill_text(Text {
        content: label.to_string(),
        position: Point::new(top_left.x + size.width / 2.0, top_left.y + size.height / 2.0),
        color: palette::WHITE,
        size: typography::BODY_SM.into(),
        align_x: alignment::Horizontal::Center.into(),
        align_y: alignment::Vertical::Center,
        ..Text::default()
    });
}

fn draw_caption(frame: &mut Frame, area: Size) {
    frame.fill_text(Text {
        content: copy::CAPTION.to_string(),
        position: Point::new(area.width / 2.0, area.height - spacing::LG),
        color: Color {
            a: opacity::OVERLAY_HOVER,
            ..palette::WHITE
        },
        size: typography::CAPTION.into(),
        align_x: alignment::Horizontal::Center.into(),
        align_y: alignment::Vertical::Bottom,
        ..Text::default()
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_abs_diff_eq;

    #[test]
    fn cover_rect_fills_wide_area_with_tall_image() {
        // 100x200 image into 400x200: width-bound, scale 4.
        let rect = cover_rect(Size::new(100.0, 200.0), Size::new(400.0, 200.0));
        assert_abs_diff_eq!(rect.width, 400.0);
        assert_abs_diff_eq!(rect.height, 800.0);
        assert_abs_diff_eq!(rect.x, 0.0);
        assert_abs_diff_eq!(rect.y, -300.0);
    }

    #[test]
    fn cover_rect_fills_tall_area_with_wide_image() {
        let rect = cover_rect(Size::new(1600.0, 900.0), Size::new(800.0, 900.0));
        assert_abs_diff_eq!(rect.height, 900.0);
        assert_abs_diff_eq!(rect.width, 1600.0);
        assert_abs_diff_eq!(rect.x, -400.0);
        assert_abs_diff_eq!(rect.y, 0.0);
    }

    #[test]
    fn cover_rect_matching_aspect_is_exact() {
        let rect = cover_rect(Size::new(200.0, 100.0), Size::new(1000.0, 500.0));
        assert_eq!(rect, Rectangle::with_size(Size::new(1000.0, 500.0)));
    }

    #[test]
    fn cover_rect_degenerate_image_stretches() {
        let area = Size::new(300.0, 150.0);
        assert_eq!(cover_rect(Size::new(0.0, 10.0), area), Rectangle::with_size(area));
    }

    #[test]
    fn cover_rect_always_covers_area() {
        for (iw, ih) in [(10.0, 10.0), (3000.0, 100.0), (50.0, 4000.0)] {
            let rect = cover_rect(Size::new(iw, ih), Size::new(640.0, 500.0));
            assert!(rect.x <= 0.0 && rect.y <= 0.0);
            assert!(rect.x + rect.width >= 640.0 - 1e-3);
            assert!(rect.y + rect.height >= 500.0 - 1e-3);
        }
    }
}
