/// Scroll offset, in CSS pixels, past which the navbar switches to its
/// raised style.
pub const SCROLL_THRESHOLD_PX: f64 = 50.0;

/// Visual state of the shared navigation bar.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NavbarState {
    scrolled: bool,
    mobile_open: bool,
}

impl NavbarState {
    pub fn new(mobile_open: bool) -> Self {
        Self {
            scrolled: false,
            mobile_open,
        }
    }

    pub fn is_scrolled(&self) -> bool {
        self.scrolled
    }

    pub fn is_mobile_open(&self) -> bool {
        self.mobile_open
    }

    /// Record a new vertical scroll offset. Returns true if the scrolled
    /// flag changed.
    pub fn on_scroll(&mut self, offset: f64) -> bool {
        let scrolled = offset > SCROLL_THRESHOLD_PX;
        let changed = scrolled != self.scrolled;
        self.scrolled = scrolled;
        changed
    }

    pub fn toggle_mobile_menu(&mut self) {
        self.mobile_open = !self.mobile_open;
    }

    pub fn close_mobile_menu(&mut self) {
        self.mobile_open = false;
    }

    /// The menu state after one click on the drawer toggle.
    pub fn toggled(&self) -> Self {
        let mut next = *self;
        next.toggle_mobile_menu();
        next
    }
}
