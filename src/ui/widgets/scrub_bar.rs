// SPDX-License-Identifier: MPL-2.0
//! A scrubbing progress bar widget.
//!
//! Displays primary (playback) and secondary (buffer) progress as two
//! overlaid bars with a draggable handle. Dragging the handle scrubs the
//! primary value; moving the pointer away from the bar's centerline slows
//! the drag-to-progress mapping for finer control.
//!
//! The widget is a thin input/render shell around
//! [`ScrubController`](crate::scrub::controller::ScrubController): raw mouse
//! and touch events are mapped into the controller's begin/continue/end
//! operations, and each frame is drawn from the resulting values with plain
//! quads. Any animation of those values is the host's business.

use std::fmt;

use iced::advanced::layout::{self, Layout};
use iced::advanced::mouse;
use iced::advanced::renderer;
use iced::advanced::widget::{tree, Tree, Widget};
use iced::advanced::{Clipboard, Shell};
use iced::{
    touch, Background, Border, Color, Element, Event, Length, Point, Rectangle, Shadow, Size,
    Theme,
};

use crate::config::defaults::{DEFAULT_BAR_HEIGHT, DEFAULT_HANDLE_RADIUS};
use crate::scrub::controller::ScrubController;
use crate::scrub::speed::SpeedTable;
use crate::ui::design_tokens::radius;
use crate::ui::styles::bar::{self, Status, Style};

/// A horizontal bar showing playback and buffer progress, scrubbable by
/// dragging its handle.
pub struct ScrubBar<'a, Message> {
    primary: f32,
    secondary: f32,
    width: Length,
    height: f32,
    handle_radius: f32,
    scrubbing_enabled: bool,
    speeds: SpeedTable,
    on_scrub: Option<Box<dyn Fn(f32) -> Message + 'a>>,
    on_release: Option<Message>,
    style: Box<dyn Fn(&Theme, Status) -> Style + 'a>,
}

impl<Message> fmt::Debug for ScrubBar<'_, Message> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScrubBar")
            .field("primary", &self.primary)
            .field("secondary", &self.secondary)
            .field("handle_radius", &self.handle_radius)
            .field("scrubbing_enabled", &self.scrubbing_enabled)
            .finish_non_exhaustive()
    }
}

/// Creates a [`ScrubBar`] showing the given primary and secondary progress
/// fractions.
pub fn scrub_bar<'a, Message>(primary: f32, secondary: f32) -> ScrubBar<'a, Message> {
    ScrubBar::new(primary, secondary)
}

impl<'a, Message> ScrubBar<'a, Message> {
    /// Creates a new [`ScrubBar`]. Progress values are fractions in
    /// `[0, 1]`; out-of-range values are clamped when drawn.
    pub fn new(primary: f32, secondary: f32) -> Self {
        Self {
            primary,
            secondary,
            width: Length::Fill,
            height: DEFAULT_BAR_HEIGHT,
            handle_radius: DEFAULT_HANDLE_RADIUS,
            scrubbing_enabled: true,
            speeds: SpeedTable::default(),
            on_scrub: None,
            on_release: None,
            style: Box::new(bar::default),
        }
    }

    pub fn width(mut self, width: impl Into<Length>) -> Self {
        self.width = width.into();
        self
    }

    pub fn height(mut self, height: f32) -> Self {
        self.height = height;
        self
    }

    /// Diameter of the drag handle, in logical pixels.
    pub fn handle_radius(mut self, handle_radius: f32) -> Self {
        self.handle_radius = handle_radius;
        self
    }

    /// Enables or disables scrubbing. A disabled bar still renders both
    /// progress values but ignores every gesture.
    pub fn scrubbing_enabled(mut self, enabled: bool) -> Self {
        self.scrubbing_enabled = enabled;
        self
    }

    /// Replaces the speed table used while scrubbing.
    pub fn speeds(mut self, speeds: SpeedTable) -> Self {
        self.speeds = speeds;
        self
    }

    /// Message produced on every drag-originated progress change.
    pub fn on_scrub(mut self, f: impl Fn(f32) -> Message + 'a) -> Self {
        self.on_scrub = Some(Box::new(f));
        self
    }

    /// Message produced when the handle is released (or the gesture is
    /// cancelled by the platform).
    pub fn on_release(mut self, message: Message) -> Self {
        self.on_release = Some(message);
        self
    }

    pub fn style(mut self, style: impl Fn(&Theme, Status) -> Style + 'a) -> Self {
        self.style = Box::new(style);
        self
    }

    fn drag_to(
        &self,
        controller: &mut ScrubController,
        position: Point,
        shell: &mut Shell<'_, Message>,
    ) {
        if !controller.is_dragging() {
            return;
        }
        if controller.continue_drag(position) {
            if let Some(on_scrub) = &self.on_scrub {
                shell.publish((on_scrub)(controller.primary_progress()));
            }
        }
    }

    fn finish_drag(&self, controller: &mut ScrubController, shell: &mut Shell<'_, Message>)
    where
        Message: Clone,
    {
        if !controller.is_dragging() {
            return;
        }
        controller.end_drag();
        if let Some(message) = self.on_release.clone() {
            shell.publish(message);
        }
    }
}

struct State {
    controller: ScrubController,
}

impl<Message, Renderer> Widget<Message, Theme, Renderer> for ScrubBar<'_, Message>
where
    Message: Clone,
    Renderer: renderer::Renderer,
{
    fn size(&self) -> Size<Length> {
        Size::new(self.width, Length::Fixed(self.height))
    }

    fn layout(
        &mut self,
        _tree: &mut Tree,
        _renderer: &Renderer,
        limits: &layout::Limits,
    ) -> layout::Node {
        layout::atomic(limits, self.width, self.height)
    }

    fn tag(&self) -> tree::Tag {
        tree::Tag::of::<State>()
    }

    fn state(&self) -> tree::State {
        let mut controller = ScrubController::new();
        controller.set_layout(0.0, 0.0, self.handle_radius);
        controller.set_scrubbing_enabled(self.scrubbing_enabled);
        controller.set_speed_table(self.speeds.clone());
        controller.set_primary_progress(self.primary);
        controller.set_secondary_progress(self.secondary);
        tree::State::new(State { controller })
    }

    fn update(
        &mut self,
        tree: &mut Tree,
        event: &Event,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        _renderer: &Renderer,
        _clipboard: &mut dyn Clipboard,
        shell: &mut Shell<'_, Message>,
        _viewport: &Rectangle,
    ) {
        let state = tree.state.downcast_mut::<State>();
        let controller = &mut state.controller;
        let bounds = layout.bounds();

        // Re-sync host-provided properties before interpreting the event.
        // The host value of the primary progress is authoritative only while
        // no drag is live; a drag owns it until release.
        controller.set_layout(bounds.width, bounds.height, self.handle_radius);
        controller.set_scrubbing_enabled(self.scrubbing_enabled);
        if controller.speed_table() != &self.speeds {
            controller.set_speed_table(self.speeds.clone());
        }
        controller.set_secondary_progress(self.secondary);
        if !controller.is_dragging() {
            controller.set_primary_progress(self.primary);
        }

        match event {
            Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)) => {
                if let Some(position) = cursor.position() {
                    controller.begin_drag(local_point(position, bounds));
                }
            }
            Event::Mouse(mouse::Event::CursorMoved { .. }) => {
                if let Some(position) = cursor.position() {
                    self.drag_to(controller, local_point(position, bounds), shell);
                }
            }
            Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left)) => {
                self.finish_drag(controller, shell);
            }
            Event::Touch(touch::Event::FingerPressed { position, .. }) => {
                // A second finger while a drag is live is ignored.
                if !controller.is_dragging() {
                    controller.begin_drag(local_point(*position, bounds));
                }
            }
            Event::Touch(touch::Event::FingerMoved { position, .. }) => {
                self.drag_to(controller, local_point(*position, bounds), shell);
            }
            Event::Touch(
                touch::Event::FingerLifted { .. } | touch::Event::FingerLost { .. },
            ) => {
                // A platform cancel ends the gesture exactly like a lift.
                self.finish_drag(controller, shell);
            }
            _ => {}
        }
    }

    fn draw(
        &self,
        tree: &Tree,
        renderer: &mut Renderer,
        theme: &Theme,
        _style: &renderer::Style,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        _viewport: &Rectangle,
    ) {
        let bounds = layout.bounds();
        let state = tree.state.downcast_ref::<State>();
        let controller = &state.controller;

        // While a drag is live the controller's value is ahead of the host's.
        let primary = if controller.is_dragging() {
            controller.primary_progress()
        } else {
            self.primary.clamp(0.0, 1.0)
        };
        let secondary = self.secondary.clamp(0.0, 1.0);

        let status = if controller.is_dragging() {
            Status::Dragged
        } else if cursor.is_over(grab_region(controller, bounds)) {
            Status::Hovered
        } else {
            Status::Active
        };
        let appearance = (self.style)(theme, status);

        let bar_border = Border {
            color: Color::TRANSPARENT,
            width: 0.0,
            radius: radius::SM.into(),
        };

        renderer.fill_quad(
            renderer::Quad {
                bounds,
                border: bar_border,
                shadow: Shadow::default(),
                snap: false,
            },
            appearance.rail,
        );

        // Secondary underneath, primary on top, handle above both.
        if secondary > 0.0 {
            renderer.fill_quad(
                renderer::Quad {
                    bounds: bar_bounds(bounds, secondary),
                    border: bar_border,
                    shadow: Shadow::default(),
                    snap: false,
                },
                appearance.secondary_bar,
            );
        }

        if primary > 0.0 {
            renderer.fill_quad(
                renderer::Quad {
                    bounds: bar_bounds(bounds, primary),
                    border: bar_border,
                    shadow: Shadow::default(),
                    snap: false,
                },
                appearance.primary_bar,
            );
        }

        renderer.fill_quad(
            renderer::Quad {
                bounds: handle_bounds(bounds, primary, self.handle_radius),
                border: Border {
                    color: Color::TRANSPARENT,
                    width: 0.0,
                    radius: radius::FULL.into(),
                },
                shadow: Shadow::default(),
                snap: false,
            },
            Background::Color(appearance.handle),
        );
    }

    fn mouse_interaction(
        &self,
        tree: &Tree,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        _viewport: &Rectangle,
        _renderer: &Renderer,
    ) -> mouse::Interaction {
        let state = tree.state.downcast_ref::<State>();
        if state.controller.is_dragging() {
            return mouse::Interaction::Grabbing;
        }

        if self.scrubbing_enabled && cursor.is_over(grab_region(&state.controller, layout.bounds()))
        {
            mouse::Interaction::Grab
        } else {
            mouse::Interaction::default()
        }
    }
}

impl<'a, Message, Renderer> From<ScrubBar<'a, Message>> for Element<'a, Message, Theme, Renderer>
where
    Message: Clone + 'a,
    Renderer: renderer::Renderer + 'a,
{
    fn from(bar: ScrubBar<'a, Message>) -> Self {
        Self::new(bar)
    }
}

/// Translates an absolute cursor position into the widget's local space.
fn local_point(position: Point, bounds: Rectangle) -> Point {
    Point::new(position.x - bounds.x, position.y - bounds.y)
}

/// The controller's padded grab region, translated back into absolute
/// coordinates for cursor tests.
fn grab_region(controller: &ScrubController, bounds: Rectangle) -> Rectangle {
    let region = controller.hit_region();
    Rectangle {
        x: bounds.x + region.x,
        y: bounds.y + region.y,
        ..region
    }
}

/// Frame of a progress fill spanning `progress` of the widget's width.
fn bar_bounds(bounds: Rectangle, progress: f32) -> Rectangle {
    Rectangle {
        width: bounds.width * progress,
        ..bounds
    }
}

/// Frame of the circular handle at `progress`, vertically centered.
fn handle_bounds(bounds: Rectangle, progress: f32, handle_radius: f32) -> Rectangle {
    Rectangle {
        x: bounds.x + bounds.width * progress - handle_radius / 2.0,
        y: bounds.y + (bounds.height - handle_radius) / 2.0,
        width: handle_radius,
        height: handle_radius,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn widget_bounds() -> Rectangle {
        Rectangle {
            x: 40.0,
            y: 500.0,
            width: 300.0,
            height: 20.0,
        }
    }

    #[test]
    fn local_point_translates_into_widget_space() {
        let point = local_point(Point::new(140.0, 510.0), widget_bounds());
        assert_eq!(point, Point::new(100.0, 10.0));
    }

    #[test]
    fn bar_bounds_scales_width_by_progress() {
        let fill = bar_bounds(widget_bounds(), 0.25);
        assert_eq!(fill.x, 40.0);
        assert_eq!(fill.width, 75.0);
        assert_eq!(fill.height, 20.0);
    }

    #[test]
    fn handle_bounds_centers_the_thumb() {
        let handle = handle_bounds(widget_bounds(), 0.5, 10.0);
        assert_eq!(handle.x, 40.0 + 150.0 - 5.0);
        assert_eq!(handle.y, 500.0 + 5.0);
        assert_eq!(handle.width, 10.0);
        assert_eq!(handle.height, 10.0);
    }

    #[test]
    fn grab_region_tracks_the_controller_frame() {
        let mut controller = ScrubController::new();
        controller.set_layout(300.0, 20.0, 10.0);
        controller.set_primary_progress(0.5);

        let region = grab_region(&controller, widget_bounds());
        let local = controller.hit_region();
        assert_eq!(region.x, 40.0 + local.x);
        assert_eq!(region.y, 500.0 + local.y);
        assert_eq!(region.width, local.width);
        assert_eq!(region.height, local.height);
    }
}
