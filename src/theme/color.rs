use crate::foundation::core::Rgb8;

/// Base of a document color reference, before modifiers.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColorBase {
    /// Explicit RGB literal.
    Srgb(Rgb8),
    /// Operating-system color; only its recorded fallback literal is used.
    System {
        /// System color name (`windowText`, `window`, ...), informational.
        #[serde(default)]
        name: String,
        /// Last known literal value of the system color.
        last: Rgb8,
    },
    /// Scheme token resolved through the master color map and the theme table.
    Scheme(String),
}

/// A solid-fill color reference as supplied by the document, with optional fixed-point
/// modifiers scaled by `100000`.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ColorRef {
    /// Base color.
    #[serde(flatten)]
    pub base: ColorBase,
    /// Luminance modifier (`50000` halves each channel).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lum_mod: Option<i32>,
    /// Shade modifier, applied after `lum_mod`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shade: Option<i32>,
}

impl ColorRef {
    /// Unmodified literal.
    pub fn srgb(rgb: Rgb8) -> Self {
        Self {
            base: ColorBase::Srgb(rgb),
            lum_mod: None,
            shade: None,
        }
    }

    /// Unmodified scheme token.
    pub fn scheme(token: impl Into<String>) -> Self {
        Self {
            base: ColorBase::Scheme(token.into()),
            lum_mod: None,
            shade: None,
        }
    }

    /// Attach a luminance modifier.
    pub fn with_lum_mod(mut self, lum_mod: i32) -> Self {
        self.lum_mod = Some(lum_mod);
        self
    }

    /// Attach a shade modifier.
    pub fn with_shade(mut self, shade: i32) -> Self {
        self.shade = Some(shade);
        self
    }
}
