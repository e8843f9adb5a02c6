use std::collections::BTreeMap;

use crate::foundation::core::Rgb8;
use crate::theme::color::{ColorBase, ColorRef};
use crate::theme::table::{MasterColorMap, ThemeColor, ThemeColorTable};

/// Fallback for tokens that do not resolve to a literal.
pub const UNRESOLVED_COLOR: Rgb8 = Rgb8::WHITE;

/// Fixed-point scale of luminance and shade modifiers.
pub const MOD_SCALE: f64 = 100_000.0;

/// Outcome of resolving a master-map token without modifiers.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SlotResolution {
    /// The token resolved to a literal.
    Resolved(Rgb8),
    /// The slot the token points at has no literal in the theme; carries that slot name.
    Unresolved(String),
}

/// Resolves document color references against one document's theme and master map.
///
/// Pure: output depends only on the arguments and the two immutable tables.
#[derive(Clone, Copy, Debug)]
pub struct ThemeColorResolver<'a> {
    theme: &'a ThemeColorTable,
    master: &'a MasterColorMap,
}

impl<'a> ThemeColorResolver<'a> {
    /// Create a resolver over borrowed tables.
    pub fn new(theme: &'a ThemeColorTable, master: &'a MasterColorMap) -> Self {
        Self { theme, master }
    }

    /// Resolve a scheme token with optional modifiers.
    ///
    /// The token is redirected through the master map (when it has an entry), looked up in the
    /// theme table, then `lum_mod` and `shade` are applied in that order. Unknown or indirect
    /// slots fall back to [`UNRESOLVED_COLOR`] before modifiers apply.
    pub fn resolve(&self, token: &str, lum_mod: Option<i32>, shade: Option<i32>) -> Rgb8 {
        let slot = self.master.redirect(token).unwrap_or(token);
        let base = match self.theme.get(slot).and_then(ThemeColor::literal) {
            Some(rgb) => rgb,
            None => {
                tracing::warn!(token, slot, "unresolved scheme color, using fallback");
                UNRESOLVED_COLOR
            }
        };
        apply_modifiers(base, lum_mod, shade)
    }

    /// Resolve any document color reference.
    pub fn resolve_ref(&self, color: &ColorRef) -> Rgb8 {
        match &color.base {
            ColorBase::Srgb(rgb) => apply_modifiers(*rgb, color.lum_mod, color.shade),
            ColorBase::System { last, .. } => apply_modifiers(*last, color.lum_mod, color.shade),
            ColorBase::Scheme(token) => self.resolve(token, color.lum_mod, color.shade),
        }
    }

    /// Every master-map token with its resolved literal, or the slot it points at when that
    /// slot has none.
    pub fn resolved_master_map(&self) -> BTreeMap<String, SlotResolution> {
        self.master
            .iter()
            .map(|(token, slot)| {
                let resolution = match self.theme.get(slot).and_then(ThemeColor::literal) {
                    Some(rgb) => SlotResolution::Resolved(rgb),
                    None => SlotResolution::Unresolved(slot.to_owned()),
                };
                (token.to_owned(), resolution)
            })
            .collect()
    }
}

/// Apply luminance then shade modifiers, clamping and rounding each channel once at the end.
pub fn apply_modifiers(base: Rgb8, lum_mod: Option<i32>, shade: Option<i32>) -> Rgb8 {
    let lum = lum_mod.map_or(1.0, |m| f64::from(m) / MOD_SCALE);
    let shade = shade.map_or(1.0, |s| 1.0 + f64::from(s) / MOD_SCALE);

    let channel = |c: u8| -> u8 { (f64::from(c) * lum * shade).clamp(0.0, 255.0).round() as u8 };
    Rgb8::new(channel(base.r), channel(base.g), channel(base.b))
}

#[cfg(test)]
#[path = "../../tests/unit/theme/resolver.rs"]
mod tests;
