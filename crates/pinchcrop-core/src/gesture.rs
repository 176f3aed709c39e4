//! Gesture samples delivered by the host toolkit.
//!
//! The host owns the recognizers. Pinch and pan are recognized
//! simultaneously, and each sample carries a delta relative to the previous
//! one: the host resets its recognizer (scale back to 1, translation back to
//! zero) after every delivery. This module turns those samples into calls on a
//! [`GestureSink`], which is all the transform logic needs to know about
//! gestures.

use serde::{Deserialize, Serialize};

use crate::error::CropError;
use crate::geometry::Point;

/// Recognizer state attached to every sample.
///
/// Integer codes match the host bridge: 0 possible, 1 began, 2 changed,
/// 3 ended, 4 cancelled, 5 failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[repr(i32)]
pub enum GestureState {
    Possible = 0,
    Began = 1,
    Changed = 2,
    Ended = 3,
    Cancelled = 4,
    Failed = 5,
}

impl GestureState {
    /// Decode a host state code.
    ///
    /// # Panics
    ///
    /// Panics on a code outside the known set. The host bridge only ever
    /// sends the six codes above, so anything else is a programming error.
    pub fn from_raw(code: i32) -> Self {
        match Self::try_from(code) {
            Ok(state) => state,
            Err(_) => unreachable!("unknown gesture state code {code}"),
        }
    }

    /// True while the gesture is actively delivering deltas.
    pub fn is_in_progress(self) -> bool {
        matches!(self, GestureState::Began | GestureState::Changed)
    }
}

impl TryFrom<i32> for GestureState {
    type Error = CropError;

    fn try_from(code: i32) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(GestureState::Possible),
            1 => Ok(GestureState::Began),
            2 => Ok(GestureState::Changed),
            3 => Ok(GestureState::Ended),
            4 => Ok(GestureState::Cancelled),
            5 => Ok(GestureState::Failed),
            other => Err(CropError::UnknownGestureState(other)),
        }
    }
}

/// Which recognizer a gesture-end event belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GestureKind {
    Pinch,
    Pan,
}

/// Minimal capability interface for receiving gesture updates.
pub trait GestureSink {
    /// A live pinch moved by `scale_delta` (multiplicative).
    fn on_scale_changed(&mut self, scale_delta: f64);

    /// A pan moved by `translation_delta` (additive, screen points).
    fn on_translation_changed(&mut self, translation_delta: Point);

    /// A gesture of the given kind finished normally.
    fn on_gesture_ended(&mut self, kind: GestureKind);
}

/// Route a pinch sample.
///
/// Only `Began`/`Changed` carry a scale. `Ended` triggers settling; the
/// remaining states are ignored.
pub fn route_pinch<S: GestureSink + ?Sized>(
    sink: &mut S,
    scale_delta: f64,
    state: GestureState,
) {
    if state.is_in_progress() {
        sink.on_scale_changed(scale_delta);
    } else if state == GestureState::Ended {
        sink.on_gesture_ended(GestureKind::Pinch);
    }
}

/// Route a pan sample.
///
/// The translation is applied for every sample regardless of state; `Ended`
/// additionally triggers bounds correction afterwards.
pub fn route_pan<S: GestureSink + ?Sized>(
    sink: &mut S,
    translation_delta: Point,
    state: GestureState,
) {
    sink.on_translation_changed(translation_delta);
    if state == GestureState::Ended {
        sink.on_gesture_ended(GestureKind::Pan);
    }
}
