/// Single-open accordion: at most one panel is expanded at a time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Accordion {
    open: Option<usize>,
}

impl Accordion {
    pub fn closed() -> Self {
        Self::default()
    }

    pub fn with_open(panel: usize) -> Self {
        Self { open: Some(panel) }
    }

    /// Restore state from a query value. Anything that is not the index of
    /// one of `panel_count` panels leaves every panel closed.
    pub fn from_param(value: Option<&str>, panel_count: usize) -> Self {
        match value.and_then(|v| v.parse::<usize>().ok()) {
            Some(panel) if panel < panel_count => Self::with_open(panel),
            Some(panel) => {
                tracing::debug!("Ignoring out of range accordion panel {}", panel);
                Self::closed()
            }
            None => Self::closed(),
        }
    }

    pub fn open_panel(&self) -> Option<usize> {
        self.open
    }

    pub fn is_open(&self, panel: usize) -> bool {
        self.open == Some(panel)
    }

    /// Open `panel`, closing any other; if it is already open, close it.
    pub fn toggle(&mut self, panel: usize) {
        self.open = if self.is_open(panel) { None } else { Some(panel) };
    }

    /// The state a click on `panel` would lead to.
    pub fn toggled(&self, panel: usize) -> Self {
        let mut next = *self;
        next.toggle(panel);
        next
    }
}
