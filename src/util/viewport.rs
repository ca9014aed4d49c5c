//! Viewport measurements.

/// Current viewport width in CSS pixels, or 0 outside the browser.
pub fn width() -> i32 {
    #[cfg(feature = "csr")]
    {
        web_sys::window()
            .and_then(|w| w.inner_width().ok())
            .and_then(|v| v.as_f64())
            .map_or(0, |w| w as i32)
    }
    #[cfg(not(feature = "csr"))]
    {
        0
    }
}
