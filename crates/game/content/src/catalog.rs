//! In-memory skill and unit catalogs keyed by name.

use std::collections::BTreeMap;

use pressturn_core::{AffinityTable, Skill, Stats, Unit};

// ============================================================================
// Skills
// ============================================================================

/// Every known skill, classified and ready to hand to the engine.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SkillCatalog {
    skills: BTreeMap<String, Skill>,
}

impl SkillCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `skill`, returning the entry it replaced.
    pub fn insert(&mut self, skill: Skill) -> Option<Skill> {
        self.skills.insert(skill.name.clone(), skill)
    }

    pub fn get(&self, name: &str) -> Option<&Skill> {
        self.skills.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.skills.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.skills.len()
    }

    pub fn is_empty(&self) -> bool {
        self.skills.is_empty()
    }

    /// Skills in name order.
    pub fn iter(&self) -> impl Iterator<Item = &Skill> {
        self.skills.values()
    }
}

impl FromIterator<Skill> for SkillCatalog {
    fn from_iter<T: IntoIterator<Item = Skill>>(iter: T) -> Self {
        let mut catalog = Self::new();
        for skill in iter {
            catalog.insert(skill);
        }
        catalog
    }
}

/// Skills `unit` knows and can pay for right now, in the unit's own order.
///
/// Names missing from `catalog` are skipped.
pub fn usable_skills<'a>(unit: &Unit, catalog: &'a SkillCatalog) -> Vec<&'a Skill> {
    let mp = unit.mp().current;
    unit.skills()
        .iter()
        .filter_map(|name| catalog.get(name))
        .filter(|skill| skill.cost <= mp)
        .collect()
}

// ============================================================================
// Units
// ============================================================================

/// Catalog stat line: pools plus the five combat stats.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
pub struct StatBlock {
    #[cfg_attr(feature = "serde", serde(rename = "HP", alias = "hp"))]
    pub hp: u32,
    #[cfg_attr(feature = "serde", serde(rename = "MP", alias = "mp"))]
    pub mp: u32,
    #[cfg_attr(feature = "serde", serde(rename = "Str", alias = "str"))]
    pub strength: u32,
    #[cfg_attr(feature = "serde", serde(rename = "Skl", alias = "skl"))]
    pub skill: u32,
    #[cfg_attr(feature = "serde", serde(rename = "Mag", alias = "mag"))]
    pub magic: u32,
    #[cfg_attr(feature = "serde", serde(rename = "Spd", alias = "spd"))]
    pub speed: u32,
    #[cfg_attr(feature = "serde", serde(rename = "Lck", alias = "lck"))]
    pub luck: u32,
}

impl StatBlock {
    pub const fn stats(&self) -> Stats {
        Stats::new(self.strength, self.skill, self.magic, self.speed, self.luck)
    }
}

/// A leader or creature as written in its catalog.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
pub struct UnitTemplate {
    #[cfg_attr(feature = "serde", serde(alias = "Name"))]
    pub name: String,
    #[cfg_attr(feature = "serde", serde(alias = "Stats"))]
    pub stats: StatBlock,
    #[cfg_attr(feature = "serde", serde(default, alias = "Affinity"))]
    pub affinity: AffinityTable,
    /// Innate skills. Leaders get theirs from the roster instead.
    #[cfg_attr(feature = "serde", serde(default, alias = "Skills"))]
    pub skills: Vec<String>,
}

impl UnitTemplate {
    /// Instantiates a leader with the skills chosen in the roster.
    pub fn leader(&self, skills: &[String]) -> Unit {
        Unit::leader(&self.name, self.stats.hp, self.stats.mp, self.stats.stats())
            .with_affinities(self.affinity.clone())
            .with_skills(skills.iter().cloned())
    }

    /// Instantiates a creature with its innate skills.
    pub fn creature(&self) -> Unit {
        Unit::creature(&self.name, self.stats.hp, self.stats.mp, self.stats.stats())
            .with_affinities(self.affinity.clone())
            .with_skills(self.skills.iter().cloned())
    }
}

/// Leader and creature templates, looked up by name.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UnitCatalog {
    leaders: BTreeMap<String, UnitTemplate>,
    creatures: BTreeMap<String, UnitTemplate>,
}

impl UnitCatalog {
    pub fn new(
        leaders: impl IntoIterator<Item = UnitTemplate>,
        creatures: impl IntoIterator<Item = UnitTemplate>,
    ) -> Self {
        Self {
            leaders: index_by_name(leaders),
            creatures: index_by_name(creatures),
        }
    }

    pub fn leader(&self, name: &str) -> Option<&UnitTemplate> {
        self.leaders.get(name)
    }

    pub fn creature(&self, name: &str) -> Option<&UnitTemplate> {
        self.creatures.get(name)
    }

    pub fn leader_count(&self) -> usize {
        self.leaders.len()
    }

    pub fn creature_count(&self) -> usize {
        self.creatures.len()
    }
}

fn index_by_name(
    templates: impl IntoIterator<Item = UnitTemplate>,
) -> BTreeMap<String, UnitTemplate> {
    templates
        .into_iter()
        .map(|template| (template.name.clone(), template))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pressturn_core::{Affinity, Element, SkillCategory};

    fn template(name: &str, mp: u32) -> UnitTemplate {
        UnitTemplate {
            name: name.into(),
            stats: StatBlock {
                hp: 120,
                mp,
                strength: 12,
                skill: 9,
                magic: 7,
                speed: 11,
                luck: 6,
            },
            affinity: AffinityTable::new().with(Element::Elec, Affinity::Weak),
            skills: vec!["Zio".into()],
        }
    }

    fn catalog() -> SkillCatalog {
        [
            Skill::new("Agi", SkillCategory::Element(Element::Fire)).with_cost(3),
            Skill::new("Agidyne", SkillCategory::Element(Element::Fire)).with_cost(12),
            Skill::new("Dia", SkillCategory::Heal).with_cost(4),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn usable_skills_respect_mp_and_catalog() {
        let leader = template("Flynn", 5).leader(&[
            "Agidyne".to_owned(),
            "Mystery".to_owned(),
            "Dia".to_owned(),
            "Agi".to_owned(),
        ]);

        let skills = catalog();
        let names: Vec<_> = usable_skills(&leader, &skills)
            .into_iter()
            .map(|skill| skill.name.as_str())
            .collect();
        assert_eq!(names, ["Dia", "Agi"]);
    }

    #[test]
    fn templates_build_units_of_the_right_kind() {
        let template = template("Pixie", 30);

        let creature = template.creature();
        assert!(creature.is_creature());
        assert_eq!(creature.skills(), ["Zio".to_owned()]);
        assert_eq!(creature.hp().maximum, 120);
        assert_eq!(creature.stats().speed, 11);
        assert_eq!(creature.affinities().get(Element::Elec), Affinity::Weak);

        let leader = template.leader(&[]);
        assert!(leader.is_leader());
        assert!(leader.skills().is_empty());
    }

    #[test]
    fn unit_catalog_separates_leaders_and_creatures() {
        let units = UnitCatalog::new([template("Flynn", 40)], [template("Pixie", 30)]);
        assert!(units.leader("Flynn").is_some());
        assert!(units.leader("Pixie").is_none());
        assert!(units.creature("Pixie").is_some());
        assert_eq!((units.leader_count(), units.creature_count()), (1, 1));
    }
}
