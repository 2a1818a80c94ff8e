use indexmap::IndexMap;
use serde::Serialize;
use serde_json::Value;

use crate::monster::Monster;
use crate::text::{as_text, fix_text, fix_value, format_skills, roll_range};

/// The flat document the character-sheet tool imports. Field order is part
/// of the format and matches insertion order; once built the sheet is
/// read-only.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Sheet(IndexMap<String, Value>);

impl Sheet {
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }
}

/// Ordered-field builder for [`Sheet`]. Re-inserting a key keeps its first
/// position and overwrites the value, matching how the tool's own exports
/// merge repeated keys.
#[derive(Debug, Default)]
struct SheetBuilder {
    fields: IndexMap<String, Value>,
}

impl SheetBuilder {
    fn put(&mut self, key: impl Into<String>, value: impl Into<Value>) -> &mut Self {
        self.fields.insert(key.into(), value.into());
        self
    }

    fn finish(self) -> Sheet {
        Sheet(self.fields)
    }
}

/// Map one fetched monster record onto the import document. Pure and
/// deterministic: the same record always yields the same sheet.
pub fn convert(monster: &Monster) -> Sheet {
    let mut sheet = SheetBuilder::default();
    let styles = monster.combatstyles.len();

    sheet
        .put("description", monster.description.clone())
        .put("disposition", monster.disposition.clone())
        .put("habitat", monster.habitat.clone())
        .put("initiative", monster.initiative.clone())
        .put("intellect", monster.intelligence.clone())
        .put("language", monster.language.clone())
        .put("lootsNum", monster.loottable.len())
        .put("monsterName", monster.monstername.clone())
        .put("mndResist", monster.willpower.clone())
        .put("vitResist", monster.fortitude.clone())
        .put("lv", monster.level.clone())
        .put("mobility", monster.movementspeed.clone())
        .put("mode", "save")
        .put("paletteInsertType", "exchange")
        .put("paletteRemoveTags", "1")
        .put("paletteTool", "bcdice")
        .put("paletteUseBuff", "1")
        .put("paletteUseVar", "1")
        .put("partsNum", styles)
        .put("perception", monster.perception.clone())
        .put("reputation", monster.reputation.clone())
        // The API calls the reputation-roll bonus `weakness` and the actual
        // weak point `weakpoint`; the sheet's `weakness` is the weak point.
        .put("reputation+", monster.weakness.clone())
        .put("weakness", monster.weakpoint.clone())
        .put("result", "OK")
        .put("sheetDescriptionM", description_m(monster))
        .put("sheetDescriptionS", description_s(monster))
        .put("sin", monster.soulscars.clone())
        .put("skills", format_skills(&monster.uniqueskills));

    for (i, style) in monster.combatstyles.iter().enumerate() {
        let n = i + 1;
        sheet
            .put(format!("status{n}Accuracy"), style.accuracy.clone())
            .put(format!("status{n}AccuracyFix"), fix_value(&style.accuracy))
            .put(format!("status{n}Damage"), style.damage.clone())
            .put(format!("status{n}Defense"), style.defense.clone())
            .put(format!("status{n}Evasion"), style.evasion.clone())
            .put(format!("status{n}EvasionFix"), fix_value(&style.evasion))
            .put(format!("status{n}Hp"), style.hp.clone())
            .put(format!("status{n}Mp"), style.mp.clone())
            .put(format!("status{n}Style"), style.style.clone());
    }

    let mut unit_status: IndexMap<String, Value> = IndexMap::new();
    for style in &monster.combatstyles {
        let hp = as_text(&style.hp);
        unit_status.insert(format!("{}:HP", style.style), Value::from(format!("{hp}/{hp}")));
        unit_status.insert(format!("{}:MP", style.style), style.mp.clone());
    }

    let mut unit_except: IndexMap<String, Value> = IndexMap::new();
    unit_except.insert("HP".to_string(), Value::from(styles));
    unit_except.insert("MP".to_string(), Value::from(styles));
    unit_except.insert("Defense".to_string(), Value::from(styles));

    sheet
        .put("statusNum", styles)
        .put("taxa", monster.monstertype.clone())
        .put("type", "m")
        .put("unitStatus", map_value(unit_status))
        .put("unitExceptStatus", map_value(unit_except));

    for (i, entry) in monster.loottable.iter().enumerate() {
        let n = i + 1;
        sheet
            .put(format!("loots{n}Num"), roll_range(&entry.roll))
            .put(format!("loots{n}Item"), entry.loot.clone());
    }

    sheet
        .put("fortitude", monster.fortitude.clone())
        .put("willpower", monster.willpower.clone());

    sheet.finish()
}

fn map_value(map: IndexMap<String, Value>) -> Value {
    Value::Object(map.into_iter().collect())
}

// The two sheet descriptions are fixed Japanese templates; the full-width
// spaces and parentheses are part of the format the tool expects.

fn description_m(m: &Monster) -> String {
    format!(
        "分類:{}　知能:{}　知覚:{}　反応:{}\n言語:{}　生息地:{}\n弱点:{}\n先制値:{}　生命抵抗力:{}（{}）　精神抵抗力:{}（{}）",
        as_text(&m.monstertype),
        as_text(&m.intelligence),
        as_text(&m.perception),
        as_text(&m.disposition),
        as_text(&m.language),
        as_text(&m.habitat),
        as_text(&m.weakpoint),
        as_text(&m.initiative),
        as_text(&m.fortitude),
        fix_text(&m.fortitude),
        as_text(&m.willpower),
        fix_text(&m.willpower),
    )
}

fn description_s(m: &Monster) -> String {
    format!(
        "分類:{}\n弱点:{}\n先制値:{}　生命抵抗力:{}（{}）　精神抵抗力:{}（{}）",
        as_text(&m.monstertype),
        as_text(&m.weakpoint),
        as_text(&m.initiative),
        as_text(&m.fortitude),
        fix_text(&m.fortitude),
        as_text(&m.willpower),
        fix_text(&m.willpower),
    )
}
