//! # Scroll Progress
//!
//! `fraction = offset / (document_height - viewport_height)`, clamped to
//! `[0, 1]` and stored as permille so the bar width is integer-only.

use serde::{Deserialize, Serialize};

/// Raw scroll measurements, in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScrollMetrics {
    pub offset: u64,
    pub document_height: u64,
    pub viewport_height: u64,
}

/// How far down the page the reader is, 0..=1000.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
pub struct ScrollProgress {
    pub permille: u16,
}

impl ScrollProgress {
    pub const TOP: ScrollProgress = ScrollProgress { permille: 0 };
    pub const BOTTOM: ScrollProgress = ScrollProgress { permille: 1000 };

    /// Bar width as a CSS percentage, e.g. `"37.5%"`.
    #[must_use]
    pub fn css_width(&self) -> String {
        let whole = self.permille / 10;
        match self.permille % 10 {
            0 => format!("{}%", whole),
            tenth => format!("{}.{}%", whole, tenth),
        }
    }
}

impl ScrollMetrics {
    /// Compute the progress fraction.
    ///
    /// A page that cannot scroll reports 0.
    #[must_use]
    pub fn progress(&self) -> ScrollProgress {
        let scrollable = self.document_height.saturating_sub(self.viewport_height);
        if scrollable == 0 {
            return ScrollProgress::TOP;
        }
        let permille = self.offset.saturating_mul(1000) / scrollable;
        ScrollProgress {
            permille: permille.min(1000) as u16,
        }
    }
}
