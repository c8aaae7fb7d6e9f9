// ==========================================
// Lawyer license scan - standalone entry point
// ==========================================
// Prompts for a target name and brute-forces the license range
// against the directory service with a fixed worker pool.
// ==========================================

use anyhow::{Context, Result};
use case_analyzer::lookup::{scan_license_range, LawyerDirectoryClient, NameTarget};
use case_analyzer::{logging, AppConfig};
use std::io::Write;

const LICENSE_RANGE_START: u32 = 40_000;
const LICENSE_RANGE_END: u32 = 70_000;
const WORKER_COUNT: usize = 10;

fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    logging::init();

    let config = AppConfig::from_env();

    let first_name = prompt("Target first name: ")?;
    let last_name = prompt("Target last name: ")?;
    let target = NameTarget::new(&first_name, &last_name);

    let client = LawyerDirectoryClient::new(config.lawyer_service.clone());
    match scan_license_range(
        &client,
        LICENSE_RANGE_START..=LICENSE_RANGE_END,
        &target,
        WORKER_COUNT,
    ) {
        Some(found) => {
            println!("Match found for license {}:", found.license);
            println!(
                "  firstName = {}",
                found.details.first_name.as_deref().unwrap_or("NULL")
            );
            println!(
                "  lastName = {}",
                found.details.last_name.as_deref().unwrap_or("NULL")
            );
        }
        None => println!(
            "No match in license range {LICENSE_RANGE_START}-{LICENSE_RANGE_END}."
        ),
    }

    Ok(())
}

fn prompt(label: &str) -> Result<String> {
    print!("{label}");
    std::io::stdout().flush().context("flush prompt")?;

    let mut input = String::new();
    std::io::stdin()
        .read_line(&mut input)
        .context("read input")?;
    Ok(input.trim().to_string())
}
