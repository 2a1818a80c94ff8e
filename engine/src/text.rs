use html_escape::decode_html_entities;
use serde_json::Value;

use crate::monster::UniqueSkill;

/// Fixed-value convention: a 2d6 resistance/accuracy/evasion roll is replaced
/// by a flat 7 when computing the "Fix" stats.
pub const FIXED_ROLL: i64 = 7;

/// Leading-integer parse, matching how the upstream data is consumed: skip
/// leading whitespace, take an optional sign and then as many digits as
/// follow. `"10"` → 10, `"2d6+3"` → 2, `"-"` and `"なし"` → None.
pub fn parse_leading_int(s: &str) -> Option<i64> {
    let s = s.trim_start();
    let (neg, digits) = match s.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, s.strip_prefix('+').unwrap_or(s)),
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }
    digits[..end].parse::<i64>().ok().map(|n| if neg { -n } else { n })
}

/// Integer view of a loosely-typed API scalar. Strings go through
/// [`parse_leading_int`]; numbers truncate toward zero.
pub fn as_int(v: &Value) -> Option<i64> {
    match v {
        Value::Number(n) => n.as_i64().or_else(|| n.as_f64().map(|f| f.trunc() as i64)),
        Value::String(s) => parse_leading_int(s),
        _ => None,
    }
}

/// Text view of a loosely-typed API scalar, for interpolation into the
/// sheet description templates.
pub fn as_text(v: &Value) -> String {
    match v {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

/// Base value + 7, or the not-a-number sentinel (JSON null) when the base is
/// not numeric. Kept as-is: the downstream tool receives whatever the source
/// data implied, never a silent zero.
pub fn fix_value(base: &Value) -> Value {
    match as_int(base) {
        Some(n) => Value::from(n + FIXED_ROLL),
        None => Value::Null,
    }
}

/// Same derivation rendered as text for the sheet descriptions. A failed
/// parse renders the literal `NaN`, matching the sheets the target tool
/// already accepts.
pub fn fix_text(base: &Value) -> String {
    match as_int(base) {
        Some(n) => (n + FIXED_ROLL).to_string(),
        None => "NaN".to_string(),
    }
}

/// Roll ranges arrive as `"3 - 12"`; the sheet wants `"3～12"`.
pub fn roll_range(roll: &str) -> String {
    roll.replace(" - ", "～")
}

/// Flatten unique skills into the HTML fragment the sheet's notes field
/// expects: every ability becomes a bolded title paragraph followed by its
/// body paragraph. Titles and bodies are entity-decoded and trimmed, and any
/// paragraph tags already present in the body are stripped before
/// re-wrapping. Abilities of one skill run together; skills are separated by
/// a double line break.
pub fn format_skills(skills: &[UniqueSkill]) -> String {
    skills
        .iter()
        .map(|skill| {
            skill
                .abilities
                .iter()
                .map(|ability| {
                    let title = decode_html_entities(&ability.title).trim().to_string();
                    let description = decode_html_entities(&ability.description)
                        .trim()
                        .replace("<p>", "")
                        .replace("</p>", "");
                    format!("<p><strong>{title}</strong></p><p>{description}</p>")
                })
                .collect::<String>()
        })
        .collect::<Vec<_>>()
        .join("<br><br>")
}
