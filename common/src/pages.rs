//! Page identifiers for the front panel.
//!
//! Exactly one page is current at any time. The panel boots on the wakeup
//! page and moves forward through navigation to focus and back.
//!
//! # Pages
//!
//! - [`Page::Wakeup`]: Boot fade and the press-and-hold wake button
//! - [`Page::Navigation`]: Focus time slider (0-2 h) and Start button
//! - [`Page::Focus`]: Running countdown with Stop/Continue, Finish and Move

/// Number of pages. Sizes the manager's lookup tables.
pub const PAGE_COUNT: usize = 3;

/// Available pages in the front panel.
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
pub enum Page {
    /// Boot page with the wake button.
    #[default]
    Wakeup = 0,

    /// Focus time selection.
    Navigation = 1,

    /// Running focus session.
    Focus = 2,
}

impl Page {
    /// All pages in initialization order.
    pub const ALL: [Self; PAGE_COUNT] = [Self::Wakeup, Self::Navigation, Self::Focus];

    /// Look up a page by its table index. Returns `None` when out of range.
    #[inline]
    pub const fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Self::Wakeup),
            1 => Some(Self::Navigation),
            2 => Some(Self::Focus),
            _ => None,
        }
    }

    /// Table index of this page.
    #[inline]
    pub const fn index(self) -> usize { self as usize }

    /// Human-readable page name for logs.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Wakeup => "wakeup",
            Self::Navigation => "navigation",
            Self::Focus => "focus",
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
