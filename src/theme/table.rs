use std::collections::BTreeMap;

use crate::foundation::core::Rgb8;

/// Theme slot names in scheme order (dark 1, light 1, dark 2, light 2, accents, hyperlinks).
pub const SCHEME_SLOTS: [&str; 12] = [
    "dk1", "lt1", "dk2", "lt2", "accent1", "accent2", "accent3", "accent4", "accent5", "accent6",
    "hlink", "folHlink",
];

/// One entry of the theme color scheme.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ThemeColor {
    /// Explicit RGB literal.
    Srgb(Rgb8),
    /// System color with its recorded fallback literal.
    System {
        /// System color name, informational.
        #[serde(default)]
        name: String,
        /// Fallback literal.
        last: Rgb8,
    },
    /// Indirect reference to another scheme slot. Never chased; resolves to the unresolved
    /// fallback.
    Scheme(String),
}

impl ThemeColor {
    /// Literal value if the entry carries one.
    pub fn literal(&self) -> Option<Rgb8> {
        match self {
            ThemeColor::Srgb(rgb) => Some(*rgb),
            ThemeColor::System { last, .. } => Some(*last),
            ThemeColor::Scheme(_) => None,
        }
    }
}

/// Theme scheme table keyed by slot name. Built once per document, immutable afterwards.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct ThemeColorTable {
    slots: BTreeMap<String, ThemeColor>,
}

impl ThemeColorTable {
    /// Build a table from `(slot, color)` pairs; later duplicates win.
    pub fn from_entries<I, K>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, ThemeColor)>,
        K: Into<String>,
    {
        Self {
            slots: entries.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }

    /// Look up a slot.
    pub fn get(&self, slot: &str) -> Option<&ThemeColor> {
        self.slots.get(slot)
    }

    /// Number of slots.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Return `true` when no slot is defined.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Iterate slots in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ThemeColor)> {
        self.slots.iter().map(|(k, v)| (k.as_str(), v))
    }
}

/// Master-slide color map: slide-local token (`bg1`, `tx1`, ...) to theme slot.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct MasterColorMap {
    redirects: BTreeMap<String, String>,
}

impl MasterColorMap {
    /// Build a map from `(token, slot)` pairs.
    pub fn from_entries<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            redirects: entries
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// The mapping a stock office master uses.
    pub fn office_default() -> Self {
        let mut entries = vec![
            ("bg1", "lt1"),
            ("tx1", "dk1"),
            ("bg2", "lt2"),
            ("tx2", "dk2"),
            ("hlink", "hlink"),
            ("folHlink", "folHlink"),
        ];
        let accents = ["accent1", "accent2", "accent3", "accent4", "accent5", "accent6"];
        entries.extend(accents.iter().map(|a| (*a, *a)));
        Self::from_entries(entries)
    }

    /// Slot `token` redirects to, if any.
    pub fn redirect(&self, token: &str) -> Option<&str> {
        self.redirects.get(token).map(String::as_str)
    }

    /// Iterate `(token, slot)` pairs in token order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.redirects.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/theme/table.rs"]
mod tests;
