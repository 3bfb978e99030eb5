//! Elements, affinities and the per-unit affinity table.

use std::collections::BTreeMap;

use crate::state::Stats;

/// Damage element carried by attacks and offensive skills.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[strum(ascii_case_insensitive)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Element {
    Phys,
    Gun,
    Fire,
    Ice,
    Elec,
    Force,
    Light,
    Dark,
    Almighty,
}

impl Element {
    /// Light and Dark skills kill outright or not at all.
    pub const fn is_instant_kill(self) -> bool {
        matches!(self, Self::Light | Self::Dark)
    }

    /// Stat that scales skill damage of this element.
    pub const fn driving_stat(self, stats: &Stats) -> u32 {
        match self {
            Self::Phys => stats.strength,
            Self::Gun => stats.skill,
            _ => stats.magic,
        }
    }

    /// Verb used in combat log lines ("attacks", "casts fire at").
    pub const fn attack_verb(self) -> &'static str {
        match self {
            Self::Phys | Self::Almighty => "attacks",
            Self::Gun => "shoots",
            Self::Fire => "casts fire at",
            Self::Ice => "casts ice at",
            Self::Elec => "casts lightning at",
            Self::Force => "casts wind at",
            Self::Light => "strikes with light at",
            Self::Dark => "strikes with darkness at",
        }
    }
}

/// How a unit reacts to an element.
///
/// Parses from both the short catalog codes (`-`, `Wk`, `Rs`, `Nu`, `Rp`, `Dr`)
/// and the full names.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    Default,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[strum(ascii_case_insensitive)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Affinity {
    #[default]
    #[strum(to_string = "-", serialize = "Neutral")]
    #[cfg_attr(feature = "serde", serde(rename = "-", alias = "Neutral"))]
    Neutral,
    #[strum(to_string = "Wk", serialize = "Weak")]
    #[cfg_attr(feature = "serde", serde(rename = "Wk", alias = "Weak"))]
    Weak,
    #[strum(to_string = "Rs", serialize = "Resist")]
    #[cfg_attr(feature = "serde", serde(rename = "Rs", alias = "Resist"))]
    Resist,
    #[strum(to_string = "Nu", serialize = "Null")]
    #[cfg_attr(feature = "serde", serde(rename = "Nu", alias = "Null"))]
    Null,
    #[strum(to_string = "Rp", serialize = "Repel")]
    #[cfg_attr(feature = "serde", serde(rename = "Rp", alias = "Repel"))]
    Repel,
    #[strum(to_string = "Dr", serialize = "Drain")]
    #[cfg_attr(feature = "serde", serde(rename = "Dr", alias = "Drain"))]
    Drain,
}

impl Affinity {
    /// Repel and Drain turn the action against its user's team.
    pub const fn backfires(self) -> bool {
        matches!(self, Self::Repel | Self::Drain)
    }
}

/// Element → affinity lookup. Missing entries are neutral.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct AffinityTable(BTreeMap<Element, Affinity>);

impl AffinityTable {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with(mut self, element: Element, affinity: Affinity) -> Self {
        self.set(element, affinity);
        self
    }

    pub fn set(&mut self, element: Element, affinity: Affinity) {
        if affinity == Affinity::Neutral {
            self.0.remove(&element);
        } else {
            self.0.insert(element, affinity);
        }
    }

    pub fn get(&self, element: Element) -> Affinity {
        self.0.get(&element).copied().unwrap_or_default()
    }

    /// Non-neutral entries in element order.
    pub fn iter(&self) -> impl Iterator<Item = (Element, Affinity)> + '_ {
        self.0.iter().map(|(element, affinity)| (*element, *affinity))
    }
}

impl FromIterator<(Element, Affinity)> for AffinityTable {
    fn from_iter<T: IntoIterator<Item = (Element, Affinity)>>(iter: T) -> Self {
        let mut table = Self::new();
        for (element, affinity) in iter {
            table.set(element, affinity);
        }
        table
    }
}

/// Classifies how a target with `table` reacts to `element`.
pub fn classify(table: &AffinityTable, element: Element) -> Affinity {
    table.get(element)
}
