use engine::text::{as_int, fix_text, format_skills, parse_leading_int, roll_range};
use engine::{SkillAbility, UniqueSkill};
use serde_json::json;

fn ability(title: &str, description: &str) -> SkillAbility {
    SkillAbility {
        title: title.to_string(),
        description: description.to_string(),
    }
}

#[test]
fn parse_leading_int_takes_the_leading_integer() {
    assert_eq!(parse_leading_int("10"), Some(10));
    assert_eq!(parse_leading_int("  10"), Some(10));
    assert_eq!(parse_leading_int("-3"), Some(-3));
    assert_eq!(parse_leading_int("+4"), Some(4));
    assert_eq!(parse_leading_int("2d6+3"), Some(2));
    assert_eq!(parse_leading_int("12 (armored)"), Some(12));
    assert_eq!(parse_leading_int("-"), None);
    assert_eq!(parse_leading_int("なし"), None);
    assert_eq!(parse_leading_int(""), None);
}

#[test]
fn as_int_handles_numbers_and_strings() {
    assert_eq!(as_int(&json!(10)), Some(10));
    assert_eq!(as_int(&json!(10.9)), Some(10));
    assert_eq!(as_int(&json!("10")), Some(10));
    assert_eq!(as_int(&json!(null)), None);
    assert_eq!(as_int(&json!(["10"])), None);
}

#[test]
fn fix_text_renders_nan_for_non_numeric_bases() {
    assert_eq!(fix_text(&json!("10")), "17");
    assert_eq!(fix_text(&json!(3)), "10");
    assert_eq!(fix_text(&json!("-")), "NaN");
}

#[test]
fn roll_range_swaps_every_separator() {
    assert_eq!(roll_range("1 - 50"), "1～50");
    assert_eq!(roll_range("2 - 7 - 12"), "2～7～12");
    assert_eq!(roll_range("13"), "13");
}

#[test]
fn ability_fragment_decodes_entities_and_strips_paragraphs() {
    let skills = vec![UniqueSkill {
        abilities: vec![ability("A &amp; B", "<p>Hi</p>")],
    }];
    assert_eq!(
        format_skills(&skills),
        "<p><strong>A & B</strong></p><p>Hi</p>"
    );
}

#[test]
fn abilities_concatenate_and_skills_join_with_double_break() {
    let skills = vec![
        UniqueSkill {
            abilities: vec![
                ability(" 通常攻撃 ", "Claws and teeth."),
                ability("再生", "<p>Regains 3 HP</p><p>each round.</p>"),
            ],
        },
        UniqueSkill {
            abilities: vec![ability("&gt;毒牙", "Poison fang.")],
        },
    ];
    assert_eq!(
        format_skills(&skills),
        "<p><strong>通常攻撃</strong></p><p>Claws and teeth.</p>\
         <p><strong>再生</strong></p><p>Regains 3 HPeach round.</p>\
         <br><br>\
         <p><strong>>毒牙</strong></p><p>Poison fang.</p>"
    );
}

#[test]
fn empty_skill_list_formats_to_empty_string() {
    assert_eq!(format_skills(&[]), "");
}
