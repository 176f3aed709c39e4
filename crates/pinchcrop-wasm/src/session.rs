//! Crop session bindings.
//!
//! The page owns the DOM: it renders the image with the transform reported
//! here, feeds pointer/touch gestures in, and plays the animations it is
//! asked to play.
//!
//! # Example
//!
//! ```typescript
//! const session = JsCropSession.with_config(
//!   source,
//!   { type: 'rectangle', ratio: 1.0 },
//!   375,
//!   667,
//!   { maxZoom: 4 },
//! );
//! session.set_on_animate((anim) => playTransform(anim.from, anim.to, anim.durationSecs));
//! session.set_on_haptic(() => navigator.vibrate?.(10));
//! session.set_on_dismiss(() => history.back());
//! session.set_on_finish((image) => upload(encode_jpeg(image, 90)));
//!
//! // Gesture states: 0 possible, 1 began, 2 changed, 3 ended, 4 cancelled, 5 failed
//! session.pinch(event.scale / lastScale, 2);
//! session.pan(dx, dy, 3);
//! image.style.transform = `matrix(${session.matrix().join(',')})`;
//! session.done();
//! ```

use js_sys::Function;
use pinchcrop_core::{
    Animation, CropConfig, CropSession, CropType, GestureState, HostEffects, Point, SessionState,
    Size,
};
use wasm_bindgen::prelude::*;

use crate::types::JsPixelImage;

/// Forwards side-effect requests to optional JavaScript callbacks.
#[derive(Default)]
pub(crate) struct JsHostEffects {
    on_animate: Option<Function>,
    on_haptic: Option<Function>,
    on_dismiss: Option<Function>,
}

fn report_callback_error(name: &str, err: JsValue) {
    web_sys::console::warn_2(&JsValue::from_str(&format!("{name} callback threw")), &err);
}

impl HostEffects for JsHostEffects {
    fn animate(&mut self, animation: Animation) {
        if let Some(f) = &self.on_animate {
            let arg = match serde_wasm_bindgen::to_value(&animation) {
                Ok(arg) => arg,
                Err(e) => return report_callback_error("animate", e.into()),
            };
            if let Err(e) = f.call1(&JsValue::NULL, &arg) {
                report_callback_error("animate", e);
            }
        }
    }

    fn haptic_pulse(&mut self) {
        if let Some(f) = &self.on_haptic {
            if let Err(e) = f.call0(&JsValue::NULL) {
                report_callback_error("haptic", e);
            }
        }
    }

    fn request_dismiss(&mut self) {
        if let Some(f) = &self.on_dismiss {
            if let Err(e) = f.call0(&JsValue::NULL) {
                report_callback_error("dismiss", e);
            }
        }
    }
}

fn to_js_error(err: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&err.to_string())
}

/// A crop screen driven from JavaScript.
#[wasm_bindgen]
pub struct JsCropSession {
    inner: CropSession<JsHostEffects>,
}

#[wasm_bindgen]
impl JsCropSession {
    /// Create a session with the default configuration.
    ///
    /// `ratio` is width / height of the crop frame; the container is the
    /// on-screen area available to the crop screen, in CSS pixels.
    #[wasm_bindgen(constructor)]
    pub fn new(
        image: &JsPixelImage,
        ratio: f64,
        container_width: f64,
        container_height: f64,
    ) -> Result<JsCropSession, JsValue> {
        Self::build(
            image,
            CropType::Rectangle { ratio },
            Size::new(container_width, container_height),
            CropConfig::default(),
        )
    }

    /// Create a session from the picker's crop type and a (possibly partial)
    /// configuration object.
    ///
    /// `crop_type` is `{ type: 'none' }` or `{ type: 'rectangle', ratio }`;
    /// `'none'` throws, since the picker should skip the crop screen.
    pub fn with_config(
        image: &JsPixelImage,
        crop_type: JsValue,
        container_width: f64,
        container_height: f64,
        config: JsValue,
    ) -> Result<JsCropSession, JsValue> {
        let crop_type: CropType = serde_wasm_bindgen::from_value(crop_type)?;
        let config: CropConfig = if config.is_undefined() || config.is_null() {
            CropConfig::default()
        } else {
            serde_wasm_bindgen::from_value(config)?
        };
        Self::build(
            image,
            crop_type,
            Size::new(container_width, container_height),
            config,
        )
    }

    pub fn set_on_animate(&mut self, callback: Function) {
        self.inner.effects_mut().on_animate = Some(callback);
    }

    pub fn set_on_haptic(&mut self, callback: Function) {
        self.inner.effects_mut().on_haptic = Some(callback);
    }

    pub fn set_on_dismiss(&mut self, callback: Function) {
        self.inner.effects_mut().on_dismiss = Some(callback);
    }

    /// Called with a `JsPixelImage` each time `done` succeeds.
    pub fn set_on_finish(&mut self, callback: Function) {
        self.inner.on_finish(move |result| {
            let image = JsPixelImage::from_core(result.image.clone());
            if let Err(e) = callback.call1(&JsValue::NULL, &JsValue::from(image)) {
                report_callback_error("finish", e);
            }
        });
    }

    /// Feed a pinch sample. `scale` is relative to the previous sample.
    ///
    /// Unknown `state` codes abort: the bridge must only send 0-5.
    pub fn pinch(&mut self, scale: f64, state: i32) {
        self.inner.pinch(scale, GestureState::from_raw(state));
    }

    /// Feed a pan sample. `dx`/`dy` are relative to the previous sample.
    pub fn pan(&mut self, dx: f64, dy: f64, state: i32) {
        self.inner.pan(Point::new(dx, dy), GestureState::from_raw(state));
    }

    /// Crop to the current frame. Throws with the failure reason.
    pub fn done(&mut self) -> Result<JsPixelImage, JsValue> {
        self.inner
            .done()
            .map(|result| JsPixelImage::from_core(result.image))
            .map_err(to_js_error)
    }

    pub fn cancel(&mut self) {
        self.inner.cancel();
    }

    /// "idle", "done" or "cancelled"
    #[wasm_bindgen(getter)]
    pub fn state(&self) -> String {
        match self.inner.state() {
            SessionState::Idle => "idle",
            SessionState::Done => "done",
            SessionState::Cancelled => "cancelled",
        }
        .to_string()
    }

    #[wasm_bindgen(getter)]
    pub fn title(&self) -> String {
        self.inner.title().to_string()
    }

    #[wasm_bindgen(getter)]
    pub fn scale(&self) -> f64 {
        self.inner.controller().transform().scale()
    }

    #[wasm_bindgen(getter)]
    pub fn translate_x(&self) -> f64 {
        self.inner.controller().transform().translation().x
    }

    #[wasm_bindgen(getter)]
    pub fn translate_y(&self) -> f64 {
        self.inner.controller().transform().translation().y
    }

    /// Current transform as CSS `matrix()` arguments `[a, b, c, d, tx, ty]`.
    pub fn matrix(&self) -> Vec<f64> {
        let [[a, c, tx], [b, d, ty]] = self.inner.controller().transform().to_matrix();
        vec![a, b, c, d, tx, ty]
    }

    /// Current transform as `{ scaleX, scaleY, translateX, translateY }`.
    pub fn transform(&self) -> Result<JsValue, JsValue> {
        Ok(serde_wasm_bindgen::to_value(&self.inner.controller().transform())?)
    }

    /// Crop frame rectangle as `{ origin: { x, y }, size: { width, height } }`.
    pub fn crop_frame(&self) -> Result<JsValue, JsValue> {
        Ok(serde_wasm_bindgen::to_value(&self.inner.controller().crop_frame().rect())?)
    }

    /// Untransformed image surface as `{ base, pixelWidth, pixelHeight }`,
    /// with `base` shaped like `crop_frame`.
    pub fn surface(&self) -> Result<JsValue, JsValue> {
        Ok(serde_wasm_bindgen::to_value(self.inner.controller().surface())?)
    }
}

impl JsCropSession {
    fn build(
        image: &JsPixelImage,
        crop_type: CropType,
        container: Size,
        config: CropConfig,
    ) -> Result<JsCropSession, JsValue> {
        let image = image.to_core().map_err(to_js_error)?;
        let effects = JsHostEffects::default();
        let inner = CropSession::new(image, crop_type, container, config, effects);
        Ok(JsCropSession {
            inner: inner.map_err(to_js_error)?,
        })
    }
}
