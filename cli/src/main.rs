use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use engine::lookup::{MonsterResponse, SearchResponse, API_BASE, LINK_PROMPT};
use engine::{
    convert, resolve_reference, write_sheet, ImportError, Monster, MonsterApi, MonsterSummary,
    Prompt,
};

#[derive(Parser)]
#[command(name = "sw25-import")]
#[command(about = "Import an SW2.5 monster stat block as character-sheet JSON")]
struct Cli {
    /// Monster name or direct API link; prompts interactively when omitted
    query: Option<String>,

    /// Directory the sheet is written to
    #[arg(long, default_value = "monsters")]
    out_dir: PathBuf,

    /// Network timeout in seconds
    #[arg(long, default_value_t = 30)]
    timeout: u64,
}

struct NerdsUnitedClient {
    client: reqwest::blocking::Client,
}

impl NerdsUnitedClient {
    fn new(timeout: Duration) -> anyhow::Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .build()?;
        Ok(Self { client })
    }

    fn send(
        &self,
        request: reqwest::blocking::RequestBuilder,
        url: &str,
    ) -> Result<reqwest::blocking::Response, ImportError> {
        let resp = request.send().map_err(|e| fetch_error(url, e))?;
        if !resp.status().is_success() {
            return Err(ImportError::Fetch {
                url: url.to_string(),
                reason: format!("status {}", resp.status()),
            });
        }
        Ok(resp)
    }
}

fn fetch_error(url: &str, e: impl std::fmt::Display) -> ImportError {
    ImportError::Fetch {
        url: url.to_string(),
        reason: e.to_string(),
    }
}

impl MonsterApi for NerdsUnitedClient {
    fn search(&self, name: &str) -> Result<Vec<MonsterSummary>, ImportError> {
        let url = format!("{API_BASE}/monster/list");
        let request = self.client.get(&url).query(&[("name", name)]);
        let data: SearchResponse = self
            .send(request, &url)?
            .json()
            .map_err(|e| fetch_error(&url, e))?;
        Ok(data.monsters)
    }

    fn fetch(&self, url: &str) -> Result<Monster, ImportError> {
        let request = self.client.get(url);
        let data: MonsterResponse = self
            .send(request, url)?
            .json()
            .map_err(|e| fetch_error(url, e))?;
        Ok(data.monster)
    }
}

/// Line-oriented prompting over stdin/stdout.
struct StdinPrompt;

impl Prompt for StdinPrompt {
    fn ask(&mut self, question: &str) -> Result<String, ImportError> {
        print!("{question}");
        io::stdout().flush().map_err(ImportError::Prompt)?;
        let mut answer = String::new();
        let n = io::stdin()
            .lock()
            .read_line(&mut answer)
            .map_err(ImportError::Prompt)?;
        if n == 0 {
            return Err(ImportError::Prompt(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "stdin closed",
            )));
        }
        Ok(answer.trim_end_matches(['\r', '\n']).to_string())
    }

    fn say(&mut self, line: &str) {
        println!("{line}");
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let api = NerdsUnitedClient::new(Duration::from_secs(cli.timeout))?;
    let mut prompt = StdinPrompt;

    let input = match cli.query {
        Some(q) => q,
        None => prompt.ask(LINK_PROMPT)?,
    };

    let reference = resolve_reference(&api, &mut prompt, input.trim())?;
    let monster = api.fetch(&reference)?;
    let sheet = convert(&monster);
    let path = write_sheet(&cli.out_dir, &monster.monstername, &sheet)?;

    println!("Data has been written to {}", path.display());
    Ok(())
}
