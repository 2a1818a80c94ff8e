pub mod error;
pub mod lookup;
pub mod monster;
pub mod output;
pub mod sheet;
pub mod text;

pub use error::ImportError;
pub use lookup::{resolve_reference, MonsterApi, MonsterSummary, Prompt};
pub use monster::{CombatStyle, LootEntry, Monster, SkillAbility, UniqueSkill};
pub use output::write_sheet;
pub use sheet::{convert, Sheet};
