use serde::Deserialize;
use tracing::debug;

use crate::error::ImportError;
use crate::monster::Monster;
use crate::text::parse_leading_int;

/// Host marker that tells a pasted API link apart from a monster name.
pub const API_HOST: &str = "sw25.nerdsunited.com";
/// Base of the stat-block API.
pub const API_BASE: &str = "https://sw25.nerdsunited.com/api/v1";

pub const LINK_PROMPT: &str = "Enter the API link for the monster stat block or type the name of a monster and find the closest match: ";

/// One hit from the name-search endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct MonsterSummary {
    pub monster_id: u64,
    pub monstername: String,
}

/// Envelope of `GET {API_BASE}/monster/list?name=...`.
#[derive(Debug, Deserialize)]
pub struct SearchResponse {
    pub monsters: Vec<MonsterSummary>,
}

/// Envelope of `GET {API_BASE}/monster/get/{id}`.
#[derive(Debug, Deserialize)]
pub struct MonsterResponse {
    pub monster: Monster,
}

/// The two remote calls the importer makes. Implemented over HTTP by the
/// CLI; tests substitute canned responses.
pub trait MonsterApi {
    fn search(&self, name: &str) -> Result<Vec<MonsterSummary>, ImportError>;
    fn fetch(&self, url: &str) -> Result<Monster, ImportError>;
}

/// Interactive terminal I/O, injectable so the disambiguation loop is
/// testable without a terminal.
pub trait Prompt {
    fn ask(&mut self, question: &str) -> Result<String, ImportError>;
    fn say(&mut self, line: &str);
}

/// Direct fetch URL for a search hit.
pub fn fetch_url(monster_id: u64) -> String {
    format!("{API_BASE}/monster/get/{monster_id}")
}

/// Turn the user's free-text input into a direct record reference. Anything
/// containing the API host passes through unchanged; everything else is
/// searched by name and disambiguated when the search returns more than one
/// hit. Zero hits end the run.
pub fn resolve_reference(
    api: &impl MonsterApi,
    prompt: &mut impl Prompt,
    input: &str,
) -> Result<String, ImportError> {
    if input.contains(API_HOST) {
        return Ok(input.to_string());
    }

    let matches = api.search(input)?;
    debug!(query = input, hits = matches.len(), "name search");
    match matches.as_slice() {
        [] => Err(ImportError::NotFound),
        [only] => Ok(fetch_url(only.monster_id)),
        many => {
            prompt.say("Multiple monsters found with that name:");
            for (i, m) in many.iter().enumerate() {
                prompt.say(&format!("{}. {}", i + 1, m.monstername));
            }
            let choice = select_match(prompt, many.len())?;
            Ok(fetch_url(many[choice - 1].monster_id))
        }
    }
}

/// Re-prompt until the user picks a number in `1..=max`. Invalid input is
/// the one locally recovered error in the pipeline. Selection parsing takes
/// the leading integer of the answer, like the rest of the numeric fields.
fn select_match(prompt: &mut impl Prompt, max: usize) -> Result<usize, ImportError> {
    loop {
        let answer = prompt.ask(&format!(
            "Select a monster by typing the corresponding number (1-{max}): "
        ))?;
        match parse_leading_int(&answer) {
            Some(n) if n >= 1 && n as usize <= max => return Ok(n as usize),
            _ => prompt.say("Invalid selection. Please select a number within the range."),
        }
    }
}
