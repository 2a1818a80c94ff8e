use serde::Deserialize;
use serde_json::Value;

/// One monster record as served by the stat-block API.
///
/// The API is loosely typed: the same attribute may arrive as a JSON string
/// for one monster and a number for another ("10" vs 10). Scalars are kept
/// as raw `Value`s so they pass through to the output sheet verbatim.
#[derive(Debug, Clone, Deserialize)]
pub struct Monster {
    pub monstername: String,
    #[serde(default)]
    pub level: Value,
    #[serde(default)]
    pub monstertype: Value,
    #[serde(default)]
    pub description: Value,
    #[serde(default)]
    pub disposition: Value,
    #[serde(default)]
    pub habitat: Value,
    #[serde(default)]
    pub intelligence: Value,
    #[serde(default)]
    pub perception: Value,
    #[serde(default)]
    pub language: Value,
    #[serde(default)]
    pub initiative: Value,
    #[serde(default)]
    pub fortitude: Value,
    #[serde(default)]
    pub willpower: Value,
    #[serde(default)]
    pub movementspeed: Value,
    #[serde(default)]
    pub reputation: Value,
    // `weakness` is the reputation-roll bonus and `weakpoint` is the actual
    // weak point. The API's naming, kept as-is.
    #[serde(default)]
    pub weakness: Value,
    #[serde(default)]
    pub weakpoint: Value,
    #[serde(default)]
    pub soulscars: Value,
    #[serde(default)]
    pub loottable: Vec<LootEntry>,
    #[serde(default)]
    pub combatstyles: Vec<CombatStyle>,
    #[serde(default)]
    pub uniqueskills: Vec<UniqueSkill>,
}

/// One row of the loot table: a 2d6 roll range and what drops on it.
#[derive(Debug, Clone, Deserialize)]
pub struct LootEntry {
    pub roll: String,
    pub loot: String,
}

/// One combat style (body section) with its combat stats.
#[derive(Debug, Clone, Deserialize)]
pub struct CombatStyle {
    pub style: String,
    #[serde(default)]
    pub accuracy: Value,
    #[serde(default)]
    pub damage: Value,
    #[serde(default)]
    pub defense: Value,
    #[serde(default)]
    pub evasion: Value,
    #[serde(default)]
    pub hp: Value,
    #[serde(default)]
    pub mp: Value,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UniqueSkill {
    #[serde(default)]
    pub abilities: Vec<SkillAbility>,
}

/// Title and body text arrive HTML-entity-encoded; the body may already be
/// wrapped in paragraph tags.
#[derive(Debug, Clone, Deserialize)]
pub struct SkillAbility {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
}
