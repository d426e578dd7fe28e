use colored::Colorize;
use shiplog::model::Entry;

pub(crate) fn success(message: &str) {
    println!("{}", message.green());
}

pub(crate) fn entry_list(entries: &[Entry]) {
    if entries.is_empty() {
        println!("{}", "(no entries yet)".dimmed());
        return;
    }
    for (i, entry) in entries.iter().enumerate() {
        println!("{}. {} — {}", i + 1, entry.timestamp, entry.text);
    }
}

pub(crate) fn search_results(matches: &[Entry]) {
    println!("{} match(es):", matches.len());
    for entry in matches {
        println!("{} — {}", entry.timestamp, entry.text);
    }
}
