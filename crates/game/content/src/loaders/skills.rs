//! Skill catalog loader.
//!
//! Each JSON entry is classified into its behavior here, once. Entries whose
//! `type` is neither an element nor a known support family are skipped.

use std::path::Path;

use pressturn_core::{HitCount, Skill, SkillCategory, TargetMode};

use crate::catalog::SkillCatalog;
use crate::loaders::{LoadResult, read_file};

/// Raw catalog entry.
#[derive(Debug, serde::Deserialize)]
struct SkillRecord {
    #[serde(alias = "Name")]
    name: String,
    #[serde(rename = "type", alias = "Type")]
    category: String,
    #[serde(default, alias = "Cost")]
    cost: u32,
    #[serde(default, alias = "Power")]
    power: u32,
    #[serde(default, alias = "Target")]
    target: String,
    #[serde(default, alias = "Hits")]
    hits: HitsField,
    #[serde(default, alias = "Effect")]
    effect: Option<String>,
}

/// Hit specs appear both as strings (`"1-3"`) and bare numbers.
#[derive(Debug, serde::Deserialize)]
#[serde(untagged)]
enum HitsField {
    Count(u32),
    Spec(String),
}

impl Default for HitsField {
    fn default() -> Self {
        Self::Count(1)
    }
}

impl HitsField {
    fn hit_count(&self) -> HitCount {
        match self {
            Self::Count(hits) => HitCount::Fixed(*hits),
            Self::Spec(spec) => HitCount::parse(spec),
        }
    }
}

/// Loader for the skill catalog from JSON files.
pub struct SkillLoader;

impl SkillLoader {
    /// Load the skill catalog from a JSON array file.
    pub fn load(path: &Path) -> LoadResult<SkillCatalog> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<SkillCatalog> {
        let records: Vec<SkillRecord> = serde_json::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse skill catalog JSON: {}", e))?;

        let total = records.len();
        let catalog: SkillCatalog = records.into_iter().filter_map(build_skill).collect();
        tracing::debug!(
            loaded = catalog.len(),
            skipped = total - catalog.len(),
            "skill catalog loaded"
        );

        Ok(catalog)
    }
}

fn build_skill(record: SkillRecord) -> Option<Skill> {
    let category = match record.category.parse::<SkillCategory>() {
        Ok(category) => category,
        Err(_) => {
            tracing::warn!(
                skill = %record.name,
                category = %record.category,
                "skipping skill with unknown type"
            );
            return None;
        }
    };

    let target = if record.target.trim().is_empty() {
        TargetMode::default()
    } else {
        record.target.parse().unwrap_or_else(|_| {
            tracing::warn!(
                skill = %record.name,
                target = %record.target,
                "unknown target mode, using Single"
            );
            TargetMode::default()
        })
    };

    let mut skill = Skill::new(record.name, category)
        .with_cost(record.cost)
        .with_power(record.power)
        .with_target(target)
        .with_hits(record.hits.hit_count());
    if let Some(effect) = record.effect.filter(|effect| !effect.trim().is_empty()) {
        skill = skill.with_effect(effect);
    }
    Some(skill)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pressturn_core::skill::{RevivalSkill, RevivalStrength};
    use pressturn_core::{Element, SkillKind};

    const CATALOG: &str = r#"[
        {"name": "Agi", "type": "Fire", "cost": 3, "power": 90, "target": "Single", "hits": "1", "effect": "Deals light Fire damage"},
        {"Name": "Mazionga", "Type": "Elec", "Cost": 15, "Power": 120, "Target": "Multi", "Hits": "2-4", "Effect": ""},
        {"name": "Recarm", "type": "Heal", "cost": 8, "power": 0, "target": "Ally", "hits": 1},
        {"name": "Tarunda", "type": "Support", "cost": 6, "target": "All"},
        {"name": "Shibaboo", "type": "Bind", "cost": 5}
    ]"#;

    #[test]
    fn parses_and_classifies_entries() {
        let catalog = SkillLoader::parse(CATALOG).unwrap();
        assert_eq!(catalog.len(), 4);

        let agi = catalog.get("Agi").unwrap();
        assert_eq!(agi.category, SkillCategory::Element(Element::Fire));
        assert_eq!((agi.cost, agi.power), (3, 90));
        assert_eq!(agi.effect.as_deref(), Some("Deals light Fire damage"));

        let recarm = catalog.get("Recarm").unwrap();
        assert_eq!(
            recarm.kind,
            SkillKind::Revival(RevivalSkill::new(RevivalStrength::Half))
        );
        assert_eq!(recarm.target, TargetMode::Ally);
    }

    #[test]
    fn accepts_capitalized_keys_and_range_hits() {
        let catalog = SkillLoader::parse(CATALOG).unwrap();
        let mazionga = catalog.get("Mazionga").unwrap();

        assert_eq!(mazionga.hits, HitCount::Cycle { min: 2, max: 4 });
        assert_eq!(mazionga.target, TargetMode::Multi);
        assert_eq!(mazionga.effect, None);
    }

    #[test]
    fn skips_unknown_types() {
        let catalog = SkillLoader::parse(CATALOG).unwrap();
        assert!(!catalog.contains("Shibaboo"));
        assert!(catalog.contains("Tarunda"));
    }

    #[test]
    fn rejects_malformed_json() {
        let err = SkillLoader::parse("{not json").unwrap_err();
        assert!(err.to_string().contains("skill catalog"));
    }
}
