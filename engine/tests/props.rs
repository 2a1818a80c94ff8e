use engine::{convert, Monster};
use proptest::prelude::*;
use serde_json::json;

fn monster(loots: &[(u8, u8, String)], styles: &[(i64, i64)]) -> Monster {
    let loottable: Vec<_> = loots
        .iter()
        .map(|(lo, hi, item)| json!({ "roll": format!("{lo} - {hi}"), "loot": item }))
        .collect();
    let combatstyles: Vec<_> = styles
        .iter()
        .enumerate()
        .map(|(i, (acc, eva))| {
            json!({
                "style": format!("Part {}", i + 1),
                "accuracy": acc.to_string(),
                "damage": "3",
                "defense": "2",
                "evasion": eva.to_string(),
                "hp": "10",
                "mp": "0"
            })
        })
        .collect();
    serde_json::from_value(json!({
        "monstername": "Subject",
        "loottable": loottable,
        "combatstyles": combatstyles
    }))
    .unwrap()
}

proptest! {
    #[test]
    fn loot_groups_are_one_based_and_gap_free(
        loots in prop::collection::vec((1u8..=6, 7u8..=12, "[A-Za-z ]{1,12}"), 0..12)
    ) {
        let sheet = convert(&monster(&loots, &[]));

        prop_assert_eq!(sheet.get("lootsNum"), Some(&json!(loots.len())));
        for (i, (lo, hi, item)) in loots.iter().enumerate() {
            let n = i + 1;
            prop_assert_eq!(
                sheet.get(&format!("loots{n}Num")),
                Some(&json!(format!("{lo}～{hi}")))
            );
            prop_assert_eq!(sheet.get(&format!("loots{n}Item")), Some(&json!(item)));
        }
        prop_assert_eq!(sheet.get(&format!("loots{}Num", loots.len() + 1)), None);
    }

    #[test]
    fn status_groups_track_style_count_and_fix_offset(
        styles in prop::collection::vec((-20i64..60, -20i64..60), 0..8)
    ) {
        let sheet = convert(&monster(&[], &styles));

        prop_assert_eq!(sheet.get("statusNum"), Some(&json!(styles.len())));
        prop_assert_eq!(sheet.get("partsNum"), Some(&json!(styles.len())));
        for (i, (acc, eva)) in styles.iter().enumerate() {
            let n = i + 1;
            prop_assert_eq!(
                sheet.get(&format!("status{n}AccuracyFix")),
                Some(&json!(acc + 7))
            );
            prop_assert_eq!(
                sheet.get(&format!("status{n}EvasionFix")),
                Some(&json!(eva + 7))
            );
        }
        prop_assert_eq!(sheet.get(&format!("status{}Style", styles.len() + 1)), None);
    }
}
