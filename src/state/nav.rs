#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

/// Widest viewport, in CSS pixels, at which the hamburger menu is active.
/// Above this the links are always visible and the toggle is a no-op.
pub const MOBILE_BREAKPOINT: i32 = 768;

/// State for the site navigation bar.
#[derive(Clone, Copy, Debug, Default)]
pub struct NavState {
    pub menu_open: bool,
}

impl NavState {
    /// Toggle the mobile menu. Only takes effect at mobile widths so a
    /// stray click handler on desktop cannot leave the menu stuck open.
    pub fn toggle(&mut self, viewport_width: i32) {
        if viewport_width <= MOBILE_BREAKPOINT {
            self.menu_open = !self.menu_open;
        }
    }

    /// Close the menu, e.g. after a link is followed.
    pub fn close(&mut self) {
        self.menu_open = false;
    }

    /// Icon class for the hamburger control.
    pub fn icon_class(self) -> &'static str {
        if self.menu_open {
            "fa-solid fa-times"
        } else {
            "fa-solid fa-bars"
        }
    }

    /// Class for the links container; `open` drives the slide-in styling.
    pub fn links_class(self) -> &'static str {
        if self.menu_open {
            "nav__links open"
        } else {
            "nav__links"
        }
    }
}
