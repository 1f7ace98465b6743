use incident_core::model::Coordinates;
use js_sys::{Object, Promise, Reflect};
use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::PositionOptions;

const TIMEOUT_MS: u32 = 10_000;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum GeoError {
    #[error("Your browser doesn't support geolocation.")]
    Unsupported,
    #[error("Location access denied by user.")]
    PermissionDenied,
    #[error("Location information is unavailable.")]
    Unavailable,
    #[error("Location request timed out.")]
    Timeout,
    #[error("Unable to retrieve your location.")]
    Unknown,
}

impl GeoError {
    pub fn title(&self) -> &'static str {
        match self {
            GeoError::Unsupported => "Geolocation not supported",
            _ => "Location Error",
        }
    }

    fn from_code(code: Option<f64>) -> Self {
        match code.map(|c| c as u32) {
            Some(1) => GeoError::PermissionDenied,
            Some(2) => GeoError::Unavailable,
            Some(3) => GeoError::Timeout,
            _ => GeoError::Unknown,
        }
    }
}

fn get(target: &JsValue, key: &str) -> Option<JsValue> {
    Reflect::get(target, &JsValue::from_str(key))
        .ok()
        .filter(|v| !v.is_undefined() && !v.is_null())
}

fn options() -> PositionOptions {
    let opts = Object::new();
    let _ = Reflect::set(&opts, &"enableHighAccuracy".into(), &JsValue::TRUE);
    let _ = Reflect::set(&opts, &"timeout".into(), &JsValue::from(TIMEOUT_MS));
    let _ = Reflect::set(&opts, &"maximumAge".into(), &JsValue::from(0));
    opts.unchecked_into()
}

fn read_coordinates(position: &JsValue) -> Option<Coordinates> {
    let coords = get(position, "coords")?;
    let lat = get(&coords, "latitude")?.as_f64()?;
    let lng = get(&coords, "longitude")?.as_f64()?;
    Some(Coordinates::new(lat, lng))
}

/// One-shot high-accuracy position fix.
pub async fn current_position() -> Result<Coordinates, GeoError> {
    let window = web_sys::window().ok_or(GeoError::Unsupported)?;
    let geolocation = window
        .navigator()
        .geolocation()
        .map_err(|_| GeoError::Unsupported)?;

    let promise = Promise::new(&mut |resolve, reject| {
        if let Err(e) = geolocation.get_current_position_with_error_callback_and_options(
            &resolve,
            Some(&reject),
            &options(),
        ) {
            let _ = reject.call1(&JsValue::NULL, &e);
        }
    });

    match JsFuture::from(promise).await {
        Ok(position) => read_coordinates(&position).ok_or(GeoError::Unknown),
        Err(err) => Err(GeoError::from_code(get(&err, "code").and_then(|c| c.as_f64()))),
    }
}
