use serde::{Deserialize, Serialize};

use crate::render::{Color, Font};

/// Optional padding overrides per edge, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct Padding {
    pub top: Option<f64>,
    pub left: Option<f64>,
    pub right: Option<f64>,
    pub bottom: Option<f64>,
}

impl Padding {
    #[must_use]
    pub const fn uniform(value: f64) -> Self {
        Self {
            top: Some(value),
            left: Some(value),
            right: Some(value),
            bottom: Some(value),
        }
    }

    #[must_use]
    pub fn top_or(self, default: f64) -> f64 {
        self.top.unwrap_or(default)
    }

    #[must_use]
    pub fn left_or(self, default: f64) -> f64 {
        self.left.unwrap_or(default)
    }

    #[must_use]
    pub fn right_or(self, default: f64) -> f64 {
        self.right.unwrap_or(default)
    }

    #[must_use]
    pub fn bottom_or(self, default: f64) -> f64 {
        self.bottom.unwrap_or(default)
    }

    #[must_use]
    pub fn is_zero(self) -> bool {
        self.top.is_none() && self.left.is_none() && self.right.is_none() && self.bottom.is_none()
    }
}

/// Visual attribute bag where every field is optional.
///
/// `None` means "inherit a computed default for this role"; combination is an
/// explicit field-wise merge, never object-oriented inheritance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Style {
    pub show: Option<bool>,
    pub padding: Padding,
    pub stroke_color: Option<Color>,
    pub stroke_width: Option<f64>,
    pub fill_color: Option<Color>,
    pub font: Option<Font>,
    pub font_size: Option<f64>,
    pub font_color: Option<Color>,
}

impl Style {
    /// True when no field carries an override.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.show.is_none()
            && self.padding.is_zero()
            && self.stroke_color.is_none()
            && self.stroke_width.is_none()
            && self.fill_color.is_none()
            && self.font.is_none()
            && self.font_size.is_none()
            && self.font_color.is_none()
    }

    /// Explicit visibility: hidden unless `show` was set to `true`.
    ///
    /// Axes and titles use this rule.
    #[must_use]
    pub fn shown(&self) -> bool {
        self.show == Some(true)
    }

    /// Series visibility rule: an untouched style means "shown", but once
    /// any field is overridden the series must opt in explicitly.
    #[must_use]
    pub fn shown_or_default(&self) -> bool {
        self.is_zero() || self.shown()
    }

    /// Field-wise merge preferring `self` over `fallback`.
    #[must_use]
    pub fn merge(&self, fallback: &Style) -> Style {
        Style {
            show: self.show.or(fallback.show),
            padding: Padding {
                top: self.padding.top.or(fallback.padding.top),
                left: self.padding.left.or(fallback.padding.left),
                right: self.padding.right.or(fallback.padding.right),
                bottom: self.padding.bottom.or(fallback.padding.bottom),
            },
            stroke_color: self.stroke_color.or(fallback.stroke_color),
            stroke_width: self.stroke_width.or(fallback.stroke_width),
            fill_color: self.fill_color.or(fallback.fill_color),
            font: self.font.clone().or_else(|| fallback.font.clone()),
            font_size: self.font_size.or(fallback.font_size),
            font_color: self.font_color.or(fallback.font_color),
        }
    }

    #[must_use]
    pub fn stroke_color_or(&self, default: Color) -> Color {
        self.stroke_color.unwrap_or(default)
    }

    #[must_use]
    pub fn stroke_width_or(&self, default: f64) -> f64 {
        self.stroke_width.unwrap_or(default)
    }

    #[must_use]
    pub fn fill_color_or(&self, default: Color) -> Color {
        self.fill_color.unwrap_or(default)
    }

    #[must_use]
    pub fn font_size_or(&self, default: f64) -> f64 {
        self.font_size.unwrap_or(default)
    }

    #[must_use]
    pub fn font_color_or(&self, default: Color) -> Color {
        self.font_color.unwrap_or(default)
    }

    #[must_use]
    pub fn font_or(&self, default: &Font) -> Font {
        self.font.clone().unwrap_or_else(|| default.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::{Padding, Style};
    use crate::render::Color;

    #[test]
    fn merge_prefers_override_fields() {
        let override_style = Style {
            stroke_color: Some(Color::rgb(1.0, 0.0, 0.0)),
            ..Style::default()
        };
        let fallback = Style {
            stroke_color: Some(Color::rgb(0.0, 0.0, 1.0)),
            stroke_width: Some(2.0),
            ..Style::default()
        };

        let merged = override_style.merge(&fallback);
        assert_eq!(merged.stroke_color, Some(Color::rgb(1.0, 0.0, 0.0)));
        assert_eq!(merged.stroke_width, Some(2.0));
    }

    #[test]
    fn untouched_style_counts_as_shown_for_series() {
        assert!(Style::default().shown_or_default());
        assert!(!Style::default().shown());
    }

    #[test]
    fn styled_series_must_opt_into_visibility() {
        let styled = Style {
            stroke_width: Some(3.0),
            ..Style::default()
        };
        assert!(!styled.shown_or_default());

        let styled_and_shown = Style {
            show: Some(true),
            ..styled
        };
        assert!(styled_and_shown.shown_or_default());
    }

    #[test]
    fn padding_defaults_apply_per_edge() {
        let padding = Padding {
            top: Some(12.0),
            ..Padding::default()
        };
        assert_eq!(padding.top_or(5.0), 12.0);
        assert_eq!(padding.bottom_or(5.0), 5.0);
    }
}
