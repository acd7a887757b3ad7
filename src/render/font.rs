use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

/// Typeface descriptor handed to rendering backends.
///
/// Backends resolve the family through their own font machinery (Pango
/// family lookup for the Cairo backend, a fixed character-cell model for the
/// recording backend), so the chart core never touches font files itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Font {
    family: String,
}

impl Font {
    #[must_use]
    pub fn named(family: impl Into<String>) -> Self {
        Self {
            family: family.into(),
        }
    }

    #[must_use]
    pub fn family(&self) -> &str {
        &self.family
    }
}

const DEFAULT_FONT_FAMILY: &str = "DejaVu Sans";

static DEFAULT_FONT: OnceLock<Font> = OnceLock::new();

/// Process-wide default typeface.
///
/// Created on first use behind a one-time-initialization guard and shared
/// read-only by every subsequent render; concurrent first callers may race
/// to initialize but observe the same value.
#[must_use]
pub fn default_font() -> &'static Font {
    DEFAULT_FONT.get_or_init(|| Font::named(DEFAULT_FONT_FAMILY))
}

#[cfg(test)]
mod tests {
    use super::default_font;

    #[test]
    fn default_font_is_cached_and_stable() {
        let first = default_font();
        let second = default_font();
        assert!(std::ptr::eq(first, second));
        assert!(!first.family().is_empty());
    }
}
