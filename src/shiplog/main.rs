use clap::Parser;
use shiplog::api::Journal;
use shiplog::clock::SystemClock;
use shiplog::error::{Result, ShiplogError};
use shiplog::store::fs::FileStore;
use std::io::Write;

mod args;
mod print;

use args::{Cli, Commands};

type App = Journal<FileStore, SystemClock>;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let mut journal = Journal::new(FileStore::from_env(), SystemClock);

    match cli.command {
        Commands::Add { text } => handle_add(&mut journal, &text),
        Commands::List => handle_list(&journal),
        Commands::Delete { index } => handle_delete(&mut journal, index),
        Commands::Search { query } => handle_search(&journal, &query),
        Commands::Stats => handle_stats(&journal),
        Commands::Clear { yes } => handle_clear(&mut journal, yes),
    }
}

fn handle_add(journal: &mut App, text: &str) -> Result<()> {
    journal.add(text)?;
    print::success("OK: added");
    Ok(())
}

fn handle_list(journal: &App) -> Result<()> {
    let entries = journal.entries()?;
    print::entry_list(&entries);
    Ok(())
}

fn handle_delete(journal: &mut App, index: usize) -> Result<()> {
    if journal.delete(index)? {
        print::success(&format!("Deleted entry {}", index));
        Ok(())
    } else {
        Err(ShiplogError::InvalidIndex(index))
    }
}

fn handle_search(journal: &App, query: &str) -> Result<()> {
    let matches = journal.search(query)?;
    print::search_results(&matches);
    Ok(())
}

fn handle_stats(journal: &App) -> Result<()> {
    let stats = journal.stats()?;
    println!("{}", stats.count);
    println!("{:.2}", stats.mean_length);
    Ok(())
}

fn handle_clear(journal: &mut App, yes: bool) -> Result<()> {
    if !yes && !confirm("This will erase all entries. Continue? [y/N] ")? {
        println!("Aborted.");
        return Ok(());
    }
    journal.clear()?;
    print::success("Cleared.");
    Ok(())
}

fn confirm(prompt: &str) -> Result<bool> {
    print!("{}", prompt);
    std::io::stdout().flush().map_err(ShiplogError::Io)?;
    let mut answer = String::new();
    std::io::stdin()
        .read_line(&mut answer)
        .map_err(ShiplogError::Io)?;
    Ok(matches!(answer.trim(), "y" | "Y"))
}
