//! List command - show the datasets in the dataset directory.

use std::path::PathBuf;

use colored::Colorize;
use datalens::Datalens;

pub fn run(dir: PathBuf, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let datalens = Datalens::new(&dir);
    let ids = datalens.list_datasets()?;

    if json {
        println!("{}", serde_json::to_string_pretty(&ids)?);
        return Ok(());
    }

    if ids.is_empty() {
        println!("No datasets found in {}", dir.display());
        return Ok(());
    }

    println!(
        "{} ({} in {})",
        "Datasets".cyan().bold(),
        ids.len(),
        dir.display()
    );
    for id in &ids {
        println!("  {}", id.white());
    }

    Ok(())
}
