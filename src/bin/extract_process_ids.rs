// ==========================================
// Process id extraction - standalone entry point
// ==========================================
// Resolver only: prompts for a case id and prints the deduplicated
// process id sequence without traversing the hierarchy.
// ==========================================

use anyhow::{Context, Result};
use case_analyzer::engine::resolver::{OrderBy, ProcessIdResolver};
use case_analyzer::{logging, AppConfig};
use std::io::Write;

fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    logging::init();

    let config = AppConfig::from_env();
    let case_id = prompt_case_id()?;

    let resolver = ProcessIdResolver::new(&config);
    match resolver
        .resolve(case_id, OrderBy::Encounter)
        .context("resolving process ids failed")?
    {
        None => println!("No case found for case id {case_id}."),
        Some(ids) => println!("Extracted process ids for case {case_id}: {ids:?}"),
    }

    Ok(())
}

fn prompt_case_id() -> Result<i64> {
    print!("Enter case id: ");
    std::io::stdout().flush().context("flush prompt")?;

    let mut input = String::new();
    std::io::stdin()
        .read_line(&mut input)
        .context("read case id")?;
    input
        .trim()
        .parse::<i64>()
        .context("case id must be numeric")
}
