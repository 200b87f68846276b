// SPDX-License-Identifier: MPL-2.0
//! Pointer-tracking state machine that converts drag gestures into progress
//! updates.
//!
//! [`ScrubController`] owns the primary/secondary progress values, the speed
//! table, and the geometry the host last reported. It has exactly two
//! interaction states, idle and dragging; a drag begins when a press lands
//! in the padded region around the handle and ends on release or cancel
//! (both routed to [`ScrubController::end_drag`]).
//!
//! All operations run synchronously on the thread delivering pointer events
//! and never block. The controller is a plain owned value with no hidden
//! state, so multiple independent instances can coexist and be unit-tested
//! without a UI host.

use std::fmt;

use iced::{Point, Rectangle, Size};

use crate::config::defaults::{
    DEFAULT_HANDLE_RADIUS, HIT_REGION_PAD_X, HIT_REGION_PAD_Y, SPEED_EPSILON,
};
use crate::scrub::observer::{RenderSink, ScrubObserver};
use crate::scrub::speed::SpeedTable;

/// Ephemeral state of one drag gesture.
///
/// The anchor fields are re-baselined whenever the looked-up speed changes,
/// so a new speed applies only to further motion from the current point,
/// never retroactively to motion already made.
#[derive(Debug, Clone, Copy)]
struct DragSession {
    anchor_x: f32,
    anchor_progress: f32,
    speed: f32,
}

/// Owns progress state and the scrubbing interaction model.
///
/// The host feeds geometry through [`set_layout`](Self::set_layout) and
/// gestures through [`begin_drag`](Self::begin_drag),
/// [`continue_drag`](Self::continue_drag) and
/// [`end_drag`](Self::end_drag); registered [`RenderSink`] and
/// [`ScrubObserver`] callbacks are told about every resulting change.
pub struct ScrubController {
    primary: f32,
    secondary: f32,
    speeds: SpeedTable,
    scrubbing_enabled: bool,
    handle_radius: f32,
    bounds: Size,
    drag: Option<DragSession>,
    render_sink: Option<Box<dyn RenderSink>>,
    observer: Option<Box<dyn ScrubObserver>>,
}

impl fmt::Debug for ScrubController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScrubController")
            .field("primary", &self.primary)
            .field("secondary", &self.secondary)
            .field("scrubbing_enabled", &self.scrubbing_enabled)
            .field("handle_radius", &self.handle_radius)
            .field("bounds", &self.bounds)
            .field("dragging", &self.drag.is_some())
            .finish_non_exhaustive()
    }
}

impl Default for ScrubController {
    fn default() -> Self {
        Self::new()
    }
}

impl ScrubController {
    /// Creates an idle controller with the default speed table. The bar
    /// starts half full with no secondary progress.
    pub fn new() -> Self {
        Self {
            primary: 0.5,
            secondary: 0.0,
            speeds: SpeedTable::default(),
            scrubbing_enabled: true,
            handle_radius: DEFAULT_HANDLE_RADIUS,
            bounds: Size::ZERO,
            drag: None,
            render_sink: None,
            observer: None,
        }
    }

    pub fn primary_progress(&self) -> f32 {
        self.primary
    }

    pub fn secondary_progress(&self) -> f32 {
        self.secondary
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    pub fn scrubbing_enabled(&self) -> bool {
        self.scrubbing_enabled
    }

    pub fn set_scrubbing_enabled(&mut self, enabled: bool) {
        self.scrubbing_enabled = enabled;
    }

    pub fn handle_radius(&self) -> f32 {
        self.handle_radius
    }

    pub fn speed_table(&self) -> &SpeedTable {
        &self.speeds
    }

    /// Speed multiplier of the active drag session, or full speed when idle.
    pub fn current_speed(&self) -> f32 {
        self.drag.map_or(1.0, |session| session.speed)
    }

    /// Registers the render-side callback receiver.
    pub fn set_render_sink(&mut self, sink: impl RenderSink + 'static) {
        self.render_sink = Some(Box::new(sink));
    }

    /// Registers the delegate notified of user-initiated scrubs.
    pub fn set_observer(&mut self, observer: impl ScrubObserver + 'static) {
        self.observer = Some(Box::new(observer));
    }

    /// Inbound geometry update from the host view.
    ///
    /// Called whenever the host's bounds or handle size change; hit-testing
    /// and progress math use the values reported here.
    pub fn set_layout(&mut self, width: f32, height: f32, handle_radius: f32) {
        self.bounds = Size::new(width, height);
        self.handle_radius = handle_radius;
    }

    /// Replaces the speed table.
    ///
    /// The replacement is atomic: [`SpeedTable`] derives its lookup order on
    /// construction, so the table and its order cannot diverge. An active
    /// drag session keeps its baselined speed until the next
    /// [`continue_drag`](Self::continue_drag) looks the new table up.
    pub fn set_speed_table(&mut self, speeds: SpeedTable) {
        self.speeds = speeds;
    }

    /// Clamps `value` to `[0, 1]`, stores it as primary progress and tells
    /// the render sink to reposition the bar and handle.
    pub fn set_primary_progress(&mut self, value: f32) {
        self.primary = value.clamp(0.0, 1.0);
        self.notify_primary();
    }

    /// Clamps `value` to `[0, 1]`, stores it as secondary progress and tells
    /// the render sink to resize the secondary bar. Independent of any
    /// active drag.
    pub fn set_secondary_progress(&mut self, value: f32) {
        self.secondary = value.clamp(0.0, 1.0);
        let progress = self.secondary;
        if let Some(sink) = self.render_sink.as_mut() {
            sink.on_secondary_progress_changed(progress);
        }
    }

    /// Handle frame in the host's local coordinates: a square of side
    /// `handle_radius` centered on the bar at the primary progress position.
    pub fn handle_frame(&self) -> Rectangle {
        Rectangle {
            x: self.handle_position_x(),
            y: (self.bounds.height - self.handle_radius) / 2.0,
            width: self.handle_radius,
            height: self.handle_radius,
        }
    }

    /// X coordinate of the handle frame's left edge.
    pub fn handle_position_x(&self) -> f32 {
        self.bounds.width * self.primary - self.handle_radius / 2.0
    }

    /// Padded rectangle used to decide whether a press grabs the handle.
    pub fn hit_region(&self) -> Rectangle {
        let frame = self.handle_frame();
        let size = Size::new(
            frame.width + HIT_REGION_PAD_X,
            self.bounds.height.max(frame.height) + HIT_REGION_PAD_Y,
        );
        Rectangle {
            x: frame.x - (size.width - frame.width) / 2.0,
            y: frame.y - (size.height - frame.height) / 2.0,
            width: size.width,
            height: size.height,
        }
    }

    /// Starts tracking a drag at `position` (local coordinates).
    ///
    /// Returns `false`, leaving all state untouched, when scrubbing is
    /// disabled or the press lands outside the handle's hit region.
    pub fn begin_drag(&mut self, position: Point) -> bool {
        if !self.scrubbing_enabled {
            return false;
        }
        if !self.hit_region().contains(position) {
            return false;
        }

        self.drag = Some(DragSession {
            anchor_x: position.x,
            anchor_progress: self.primary,
            speed: 1.0,
        });
        true
    }

    /// Advances an active drag to `position`, updating primary progress.
    ///
    /// Returns `false` as a no-op when scrubbing is disabled or no drag is
    /// active, so malformed event sequences are tolerated rather than
    /// faulted.
    pub fn continue_drag(&mut self, position: Point) -> bool {
        if !self.scrubbing_enabled {
            return false;
        }
        let Some(mut session) = self.drag else {
            return false;
        };

        // Distance from the control's vertical centerline. The pointer y is
        // folded through `abs` first, so a negative coordinate (possible
        // during overscroll) is measured as if it were positive.
        let vertical_delta = (position.y.abs() - self.bounds.height / 2.0).abs();
        let speed = self.speeds.speed_at(vertical_delta);
        if (speed - session.speed).abs() > SPEED_EPSILON {
            // Re-baseline so the new speed applies only to further motion;
            // progress stays continuous across the tier boundary.
            session.anchor_progress = self.primary;
            session.anchor_x = position.x;
            session.speed = speed;
        }

        let travel = self.bounds.width - self.handle_radius;
        if travel > f32::EPSILON {
            let relative = (position.x - session.anchor_x) / travel;
            self.primary = (session.anchor_progress + relative * session.speed).clamp(0.0, 1.0);
        }
        self.drag = Some(session);

        self.notify_primary();
        let progress = self.primary;
        if let Some(observer) = self.observer.as_mut() {
            observer.on_user_scrub(progress);
        }
        true
    }

    /// Ends the active drag, if any. Idempotent; a platform gesture-cancel
    /// must be routed here as well.
    pub fn end_drag(&mut self) {
        self.drag = None;
    }

    fn notify_primary(&mut self) {
        let progress = self.primary;
        let x = self.handle_position_x();
        if let Some(sink) = self.render_sink.as_mut() {
            sink.on_primary_progress_changed(progress);
            sink.on_handle_position_changed(x);
        }
    }
}
