//! Side effects the crop screen asks its host to perform.
//!
//! Animations and haptics are fire-and-forget: the controller has already
//! committed the final transform when it requests an animation, and never
//! waits for the host to finish playing it.

use serde::Serialize;

use crate::transform::ZoomTransform;

/// Timing curve for snap-back animations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum AnimationCurve {
    EaseInOut,
}

/// A visual transition of the image surface between two transforms.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Animation {
    pub from: ZoomTransform,
    pub to: ZoomTransform,
    pub duration_secs: f64,
    pub curve: AnimationCurve,
}

impl Animation {
    pub fn ease(from: ZoomTransform, to: ZoomTransform, duration_secs: f64) -> Self {
        Self {
            from,
            to,
            duration_secs,
            curve: AnimationCurve::EaseInOut,
        }
    }
}

/// Host capabilities used by the crop screen.
pub trait HostEffects {
    /// Play `animation` on the image surface.
    fn animate(&mut self, animation: Animation);

    /// Emit one light impact haptic.
    fn haptic_pulse(&mut self);

    /// Dismiss the crop screen (navigation pop).
    fn request_dismiss(&mut self);
}

/// Host that ignores every request.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopEffects;

impl HostEffects for NoopEffects {
    fn animate(&mut self, _animation: Animation) {}

    fn haptic_pulse(&mut self) {}

    fn request_dismiss(&mut self) {}
}

#[cfg(test)]
pub(crate) mod recording {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    pub(crate) enum Effect {
        Animate(Animation),
        Haptic,
        Dismiss,
    }

    /// Host double that records every request in order.
    #[derive(Debug, Default)]
    pub(crate) struct RecordingEffects {
        pub(crate) effects: Vec<Effect>,
    }

    impl RecordingEffects {
        pub(crate) fn animations(&self) -> Vec<Animation> {
            self.effects
                .iter()
                .filter_map(|e| match e {
                    Effect::Animate(a) => Some(*a),
                    _ => None,
                })
                .collect()
        }

        pub(crate) fn haptics(&self) -> usize {
            self.effects
                .iter()
                .filter(|e| matches!(e, Effect::Haptic))
                .count()
        }
    }

    impl HostEffects for RecordingEffects {
        fn animate(&mut self, animation: Animation) {
            self.effects.push(Effect::Animate(animation));
        }

        fn haptic_pulse(&mut self) {
            self.effects.push(Effect::Haptic);
        }

        fn request_dismiss(&mut self) {
            self.effects.push(Effect::Dismiss);
        }
    }
}
