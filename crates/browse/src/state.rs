/// What happened to a resolved fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// The result was merged into the view state.
    Applied,
    /// The state moved on since the fetch was issued; the result was dropped.
    Discarded,
}

impl Resolution {
    pub fn is_applied(self) -> bool {
        self == Resolution::Applied
    }
}
