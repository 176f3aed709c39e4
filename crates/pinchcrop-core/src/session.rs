//! The crop screen lifecycle.
//!
//! ```text
//! Idle --(pinch/pan)*--> Idle --done--> Done
//!   |                                    |
//!   +---------------cancel---------------+--> Cancelled
//! ```
//!
//! `Done` may be requested again; with no gestures in between it resolves
//! to the same result. Gestures are only accepted while `Idle`. `Cancelled`
//! is terminal: it drops the transform and the completion callback.

use tracing::{debug, warn};

use crate::config::CropConfig;
use crate::controller::TransformController;
use crate::crop::{resolve_crop, CroppedResult};
use crate::effects::HostEffects;
use crate::error::CropError;
use crate::geometry::{Point, Size};
use crate::gesture::GestureState;
use crate::layout::{CropLayout, CropType};
use crate::raster::PixelImage;

type FinishCallback = Box<dyn FnMut(&CroppedResult)>;

/// Where a session is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Idle,
    Done,
    Cancelled,
}

/// One crop screen: the source image, its live transform, and the
/// completion callback.
pub struct CropSession<E> {
    controller: TransformController<E>,
    image: Option<PixelImage>,
    state: SessionState,
    title: String,
    on_finish: Option<FinishCallback>,
}

impl<E: HostEffects> CropSession<E> {
    /// Lay out a crop screen for `image` in `container`.
    ///
    /// # Errors
    ///
    /// - `CropDisabled` for `CropType::None`; the picker skips this screen
    /// - `InvalidRatio` for a non-positive or non-finite rectangle ratio
    /// - `BufferSizeMismatch` if the image buffer does not match its size
    /// - `InvalidConfig` if `config` fails validation
    pub fn new(
        image: PixelImage,
        crop_type: CropType,
        container: Size,
        config: CropConfig,
        effects: E,
    ) -> Result<Self, CropError> {
        let ratio = crop_type.ratio().ok_or(CropError::CropDisabled)?;
        config.validate()?;
        image.check_buffer()?;
        let layout = CropLayout::fit(container, image.width, image.height, ratio)?;
        debug!(
            ratio = layout.crop_frame.ratio(),
            width = image.width,
            height = image.height,
            "crop session created"
        );

        Ok(Self {
            controller: TransformController::new(layout, &config, effects),
            image: Some(image),
            state: SessionState::Idle,
            title: config.title,
            on_finish: None,
        })
    }

    /// Register the completion callback, replacing any previous one.
    pub fn on_finish(&mut self, callback: impl FnMut(&CroppedResult) + 'static) {
        self.on_finish = Some(Box::new(callback));
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn controller(&self) -> &TransformController<E> {
        &self.controller
    }

    /// Host effects, for hosts that wire up their callbacks late.
    pub fn effects_mut(&mut self) -> &mut E {
        self.controller.effects_mut()
    }

    pub fn image(&self) -> Option<&PixelImage> {
        self.image.as_ref()
    }

    /// Detach the displayed image, e.g. when the host releases it under
    /// memory pressure. A later `done` fails with `MissingImage`.
    pub fn take_image(&mut self) -> Option<PixelImage> {
        self.image.take()
    }

    pub fn pinch(&mut self, scale_delta: f64, state: GestureState) {
        if self.accepts_gestures() {
            self.controller.apply_pinch(scale_delta, state);
        }
    }

    pub fn pan(&mut self, translation_delta: Point, state: GestureState) {
        if self.accepts_gestures() {
            self.controller.apply_pan(translation_delta, state);
        }
    }

    /// Crop the image to the current frame and report it.
    ///
    /// On success the completion callback fires once with the result and
    /// the session moves to `Done`. Failures leave the state untouched and
    /// never fire the callback.
    pub fn done(&mut self) -> Result<CroppedResult, CropError> {
        if self.state == SessionState::Cancelled {
            return Err(CropError::SessionCancelled);
        }

        let result = resolve_crop(
            &self.controller.crop_frame().rect(),
            &self.controller.surface_frame(),
            self.image.as_ref(),
        )
        .inspect_err(|e| warn!(error = %e, "crop resolution failed"))?;

        self.state = SessionState::Done;
        if let Some(callback) = self.on_finish.as_mut() {
            callback(&result);
        }
        Ok(result)
    }

    /// Abandon the crop: discard all transform state and ask the host to
    /// dismiss the screen. The completion callback never fires afterwards.
    pub fn cancel(&mut self) {
        if self.state == SessionState::Cancelled {
            return;
        }
        debug!(from = ?self.state, "crop session cancelled");
        self.controller.discard();
        self.on_finish = None;
        self.state = SessionState::Cancelled;
        self.controller.effects_mut().request_dismiss();
    }

    fn accepts_gestures(&self) -> bool {
        if self.state != SessionState::Idle {
            debug!(state = ?self.state, "ignoring gesture outside idle state");
            return false;
        }
        true
    }
}

impl<E> std::fmt::Debug for CropSession<E>
where
    E: std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CropSession")
            .field("controller", &self.controller)
            .field("state", &self.state)
            .field("title", &self.title)
            .field("has_image", &self.image.is_some())
            .field("has_callback", &self.on_finish.is_some())
            .finish()
    }
}
