// SPDX-License-Identifier: MPL-2.0
//! Boundary callbacks between the controller and its presentation host.
//!
//! The controller emits discrete "new value" events; the host owns any
//! interpolation or animation and its timing. All methods default to no-ops
//! so a host only implements the notifications it cares about.

/// Render-side notifications.
///
/// The host repositions its bar and handle visuals in response; the
/// controller never touches drawing primitives itself.
pub trait RenderSink {
    /// The primary (playback) bar should be resized to `progress`.
    fn on_primary_progress_changed(&mut self, progress: f32) {
        let _ = progress;
    }

    /// The secondary (buffer) bar should be resized to `progress`.
    fn on_secondary_progress_changed(&mut self, progress: f32) {
        let _ = progress;
    }

    /// The handle should be moved so its frame starts at `x`.
    fn on_handle_position_changed(&mut self, x: f32) {
        let _ = x;
    }
}

/// Delegate notified of user-initiated scrubs.
///
/// Fires only for drag-originated progress changes; programmatic progress
/// sets do not reach it.
pub trait ScrubObserver {
    fn on_user_scrub(&mut self, progress: f32) {
        let _ = progress;
    }
}
