//! Transform controller: turns pinch/pan samples into a settled zoom transform.

use tracing::debug;

use crate::config::CropConfig;
use crate::effects::{Animation, HostEffects};
use crate::geometry::{Point, Rect};
use crate::gesture::{route_pan, route_pinch, GestureKind, GestureSink, GestureState};
use crate::layout::{CropFrame, CropLayout, ImageSurface};
use crate::transform::{bounds_correction, settle_zoom, ZoomLimits, ZoomTransform};

/// Owns the live transform of the image surface.
///
/// Live gesture updates are applied without bounds. When a pinch ends the
/// scale is pulled back into `[min_zoom, max_zoom]`; when a pan ends the
/// surface is moved back over the crop frame. Corrections are committed
/// immediately and the host is asked to animate towards them.
#[derive(Debug)]
pub struct TransformController<E> {
    transform: ZoomTransform,
    surface: ImageSurface,
    crop_frame: CropFrame,
    limits: ZoomLimits,
    settle_duration_secs: f64,
    haptics: bool,
    effects: E,
}

impl<E: HostEffects> TransformController<E> {
    /// `config` must already have passed `CropConfig::validate`.
    pub(crate) fn new(layout: CropLayout, config: &CropConfig, effects: E) -> Self {
        Self {
            transform: ZoomTransform::IDENTITY,
            surface: layout.surface,
            crop_frame: layout.crop_frame,
            limits: ZoomLimits::from(config),
            settle_duration_secs: config.settle_duration_secs,
            haptics: config.haptics,
            effects,
        }
    }

    pub fn transform(&self) -> ZoomTransform {
        self.transform
    }

    pub fn surface(&self) -> &ImageSurface {
        &self.surface
    }

    pub fn crop_frame(&self) -> &CropFrame {
        &self.crop_frame
    }

    /// Current on-screen frame of the image surface.
    pub fn surface_frame(&self) -> Rect {
        self.surface.frame(&self.transform)
    }

    pub fn effects(&self) -> &E {
        &self.effects
    }

    pub fn effects_mut(&mut self) -> &mut E {
        &mut self.effects
    }

    /// Feed one pinch sample.
    pub fn apply_pinch(&mut self, scale_delta: f64, state: GestureState) {
        route_pinch(self, scale_delta, state);
    }

    /// Feed one pan sample.
    pub fn apply_pan(&mut self, translation_delta: Point, state: GestureState) {
        route_pan(self, translation_delta, state);
    }

    /// Clamp the zoom after a pinch.
    ///
    /// Returns the animation requested from the host, if a correction fired.
    pub fn settle_pinch(&mut self) -> Option<Animation> {
        let from = self.transform;
        let to = settle_zoom(&from, self.limits)?;
        debug!(from = from.scale(), to = to.scale(), "zoom out of bounds, settling");

        self.transform = to;
        let animation = Animation::ease(from, to, self.settle_duration_secs);
        if self.haptics {
            self.effects.haptic_pulse();
        }
        self.effects.animate(animation);
        Some(animation)
    }

    /// Move the surface back over the crop frame after a pan.
    ///
    /// Returns the animation requested from the host, if a correction fired.
    pub fn keep_within_crop(&mut self) -> Option<Animation> {
        let correction = bounds_correction(&self.surface_frame(), &self.crop_frame.rect())?;
        debug!(dx = correction.x, dy = correction.y, "surface off crop frame, correcting");

        let from = self.transform;
        let to = from.translated_by(-correction);
        self.transform = to;
        let animation = Animation::ease(from, to, self.settle_duration_secs);
        self.effects.animate(animation);
        Some(animation)
    }

    /// Drop all gesture state and return to identity without animating.
    pub fn discard(&mut self) {
        self.transform = ZoomTransform::IDENTITY;
    }
}

impl<E: HostEffects> GestureSink for TransformController<E> {
    fn on_scale_changed(&mut self, scale_delta: f64) {
        self.transform = self.transform.scaled_by(scale_delta);
    }

    fn on_translation_changed(&mut self, translation_delta: Point) {
        self.transform = self.transform.translated_by(translation_delta);
    }

    fn on_gesture_ended(&mut self, kind: GestureKind) {
        match kind {
            GestureKind::Pinch => {
                self.settle_pinch();
            }
            GestureKind::Pan => {
                self.keep_within_crop();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::effects::recording::{Effect, RecordingEffects};
    use crate::effects::AnimationCurve;
    use crate::geometry::Size;

    /// 300x300 crop frame at (0, 100) over a 300x300 image surface.
    fn controller() -> TransformController<RecordingEffects> {
        let layout = CropLayout::fit(Size::new(300.0, 500.0), 600, 600, 1.0).unwrap();
        TransformController::new(layout, &CropConfig::default(), RecordingEffects::default())
    }

    #[test]
    fn test_layout_fixture() {
        let c = controller();
        assert_eq!(c.crop_frame().rect(), Rect::new(0.0, 100.0, 300.0, 300.0));
        assert_eq!(c.surface_frame(), Rect::new(0.0, 100.0, 300.0, 300.0));
    }

    #[test]
    fn test_live_pinch_is_unbounded() {
        let mut c = controller();
        c.apply_pinch(2.0, GestureState::Began);
        c.apply_pinch(2.5, GestureState::Changed);
        assert_eq!(c.transform().scale(), 5.0);

        c.apply_pinch(0.01, GestureState::Changed);
        assert!((c.transform().scale() - 0.05).abs() < 1e-12);
        assert!(c.effects().effects.is_empty());
    }

    #[test]
    fn test_pinch_end_below_min_resets_with_feedback() {
        let mut c = controller();
        c.apply_pan(Point::new(20.0, 0.0), GestureState::Changed);
        c.apply_pinch(0.5, GestureState::Began);
        c.apply_pinch(1.0, GestureState::Ended);

        assert!(c.transform().is_identity());
        assert_eq!(c.effects().haptics(), 1);
        let animations = c.effects().animations();
        assert_eq!(animations.len(), 1);
        assert_eq!(animations[0].from.scale(), 0.5);
        assert!(animations[0].to.is_identity());
        assert_eq!(animations[0].duration_secs, 0.3);
        assert_eq!(animations[0].curve, AnimationCurve::EaseInOut);
    }

    #[test]
    fn test_pinch_end_above_max_keeps_translation() {
        let mut c = controller();
        c.apply_pan(Point::new(-15.0, 10.0), GestureState::Changed);
        c.apply_pinch(2.0, GestureState::Began);
        c.apply_pinch(2.0, GestureState::Changed);
        c.apply_pinch(1.0, GestureState::Ended);

        assert_eq!(c.transform().scale(), 3.0);
        assert_eq!(c.transform().translation(), Point::new(-15.0, 10.0));
        assert_eq!(
            c.effects().effects,
            vec![
                Effect::Haptic,
                Effect::Animate(Animation::ease(
                    ZoomTransform::new(4.0, Point::new(-15.0, 10.0)),
                    ZoomTransform::new(3.0, Point::new(-15.0, 10.0)),
                    0.3
                )),
            ]
        );
    }

    #[test]
    fn test_pinch_end_in_range_is_silent() {
        let mut c = controller();
        c.apply_pinch(1.5, GestureState::Began);
        c.apply_pinch(1.0, GestureState::Ended);

        assert_eq!(c.transform().scale(), 1.5);
        assert!(c.effects().effects.is_empty());
    }

    #[test]
    fn test_cancelled_pinch_does_not_settle() {
        let mut c = controller();
        c.apply_pinch(4.0, GestureState::Began);
        c.apply_pinch(1.0, GestureState::Cancelled);
        assert_eq!(c.transform().scale(), 4.0);
        assert!(c.effects().effects.is_empty());
    }

    #[test]
    fn test_haptics_can_be_disabled() {
        let layout = CropLayout::fit(Size::new(300.0, 500.0), 600, 600, 1.0).unwrap();
        let mut config = CropConfig::default();
        config.haptics = false;
        let mut c = TransformController::new(layout, &config, RecordingEffects::default());

        c.apply_pinch(0.5, GestureState::Began);
        c.apply_pinch(1.0, GestureState::Ended);
        assert_eq!(c.effects().haptics(), 0);
        assert_eq!(c.effects().animations().len(), 1);
    }

    #[test]
    fn test_pan_within_bounds_is_silent() {
        let mut c = controller();
        c.apply_pinch(2.0, GestureState::Began);
        c.apply_pinch(1.0, GestureState::Ended);
        c.apply_pan(Point::new(50.0, -50.0), GestureState::Changed);
        c.apply_pan(Point::new(10.0, 10.0), GestureState::Ended);

        assert_eq!(c.transform().translation(), Point::new(60.0, -40.0));
        assert!(c.effects().effects.is_empty());
    }

    #[test]
    fn test_pan_end_snaps_top_edge_back() {
        let mut c = controller();
        c.apply_pan(Point::new(0.0, 30.0), GestureState::Began);
        c.apply_pan(Point::new(0.0, 10.0), GestureState::Ended);

        assert_eq!(c.transform().translation(), Point::ZERO);
        assert_eq!(c.surface_frame().min_y(), c.crop_frame().rect().min_y());
        assert_eq!(c.effects().haptics(), 0);

        let animations = c.effects().animations();
        assert_eq!(animations.len(), 1);
        assert_eq!(animations[0].from.translation(), Point::new(0.0, 40.0));
        assert_eq!(animations[0].to.translation(), Point::ZERO);
    }

    #[test]
    fn test_pan_end_snaps_right_edge_back() {
        let mut c = controller();
        c.apply_pinch(2.0, GestureState::Began);
        c.apply_pinch(1.0, GestureState::Ended);
        // Surface is now 600 wide spanning -150..450; drag 200 left.
        c.apply_pan(Point::new(-200.0, 0.0), GestureState::Ended);

        let frame = c.surface_frame();
        assert_eq!(frame.max_x(), c.crop_frame().rect().max_x());
        assert_eq!(c.transform().translation(), Point::new(-150.0, 0.0));
    }

    /// Zoomed out mid-gesture so the surface is shorter than the frame: both
    /// vertical checks fire and the bottom edge wins.
    #[test]
    fn test_pan_end_on_small_surface_aligns_bottom() {
        let mut c = controller();
        c.apply_pinch(0.5, GestureState::Changed);
        c.apply_pan(Point::new(0.0, 0.0), GestureState::Ended);

        let frame = c.surface_frame();
        let crop = c.crop_frame().rect();
        assert_eq!(frame.max_y(), crop.max_y());
        assert_eq!(frame.max_x(), crop.max_x());
    }

    #[test]
    fn test_interleaved_pinch_and_pan() {
        let mut c = controller();
        c.apply_pinch(1.5, GestureState::Began);
        c.apply_pan(Point::new(5.0, 5.0), GestureState::Began);
        c.apply_pinch(1.5, GestureState::Changed);
        c.apply_pan(Point::new(5.0, 5.0), GestureState::Changed);

        assert_eq!(c.transform().scale(), 2.25);
        assert_eq!(c.transform().translation(), Point::new(10.0, 10.0));
    }

    #[test]
    fn test_discard_resets_without_effects() {
        let mut c = controller();
        c.apply_pinch(2.0, GestureState::Began);
        c.apply_pan(Point::new(5.0, 5.0), GestureState::Changed);
        c.discard();
        assert!(c.transform().is_identity());
        assert!(c.effects().effects.is_empty());
    }
}
