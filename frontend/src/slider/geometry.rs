use log::debug;
use web_sys::{Element, MouseEvent, TouchEvent};
use yew::NodeRef;

use super::controller::Layout;
use crate::config::SliderConfig;
use crate::error::SliderError;

/// Raw numbers read off the page.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Geometry {
    pub slide_count: usize,
    pub slide_width: f64,
    pub viewport_width: f64,
}

impl Geometry {
    pub fn layout(&self, config: &SliderConfig) -> Layout {
        Layout {
            slide_count: self.slide_count,
            slide_width: self.slide_width,
            slides_per_view: config.slides_per_view(self.viewport_width),
        }
    }
}

pub fn sanitize_width(raw: f64) -> Result<f64, SliderError> {
    if raw.is_finite() && raw >= 0.0 {
        Ok(raw)
    } else {
        Err(SliderError::UnusableWidth(raw))
    }
}

pub fn viewport_width() -> f64 {
    web_sys::window()
        .and_then(|w| w.inner_width().ok())
        .and_then(|width| width.as_f64())
        .unwrap_or(0.0)
}

/// Counts the track's children and measures the first one. A track that is
/// not in the DOM is the only error; an empty track measures as zero slides.
pub fn measure(track: &NodeRef, selector: &'static str) -> Result<Geometry, SliderError> {
    let track = track
        .cast::<Element>()
        .ok_or(SliderError::MissingElement(selector))?;

    let raw_width = track
        .first_element_child()
        .map(|slide| slide.get_bounding_client_rect().width())
        .unwrap_or(0.0);
    let slide_width = sanitize_width(raw_width).unwrap_or_else(|e| {
        debug!("{}: {}", selector, e);
        0.0
    });

    Ok(Geometry {
        slide_count: track.child_element_count() as usize,
        slide_width,
        viewport_width: viewport_width(),
    })
}

pub fn mouse_x(e: &MouseEvent) -> f64 {
    e.page_x() as f64
}

/// First touch point only; multi-touch is not tracked.
pub fn touch_x(e: &TouchEvent) -> Option<f64> {
    e.touches().get(0).map(|touch| touch.page_x() as f64)
}
