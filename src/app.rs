//! Terminal front end: runs one command against the review store.
//! Handles word management, single reviews, statistics and interactive review sessions.

use crate::Command;
use bashkir_review::config::SessionLimits;
use bashkir_review::export::{export_json_to_path, import_json, import_words};
use bashkir_review::{Clock, ReviewSession, ReviewStore, Scheduler, VocabularyItem, WordEntry};
use chrono::{DateTime, Local, Utc};
use std::error::Error;
use std::io::{self, BufRead, Write};
use std::path::Path;

/// Rating labels shown during a session
const RATING_LABELS: [&str; 6] = [
    "0 - Blackout",
    "1 - Wrong",
    "2 - Wrong (familiar)",
    "3 - Difficult",
    "4 - Correct",
    "5 - Perfect",
];

/// Formats a timestamp as YYYY-MM-DD in local time
fn format_date(time: DateTime<Utc>) -> String {
    let datetime: DateTime<Local> = time.into();
    datetime.format("%Y-%m-%d").to_string()
}

pub struct App<S, C> {
    scheduler: Scheduler<S, C>,
    limits: SessionLimits,
}

impl<S: ReviewStore, C: Clock> App<S, C> {
    pub fn new(store: S, clock: C, limits: SessionLimits) -> Self {
        Self {
            scheduler: Scheduler::new(store, clock),
            limits,
        }
    }

    pub fn run(mut self, command: Command) -> Result<(), Box<dyn Error>> {
        match command {
            Command::Add { id, bashkir, english } => {
                let item = self.scheduler.add_word(&id, &bashkir, &english)?;
                println!("{} = {} (due {})", item.bashkir, item.english, format_date(item.review.due_date));
            }
            Command::Remove { id } => {
                self.scheduler.remove_word(&id)?;
                println!("Removed '{}'", id);
            }
            Command::Review { id, quality } => {
                let due = self.scheduler.record_review(&id, quality)?;
                let item = self.scheduler.store().get(&id)?;
                println!(
                    "{} (quality {}): next in {} days on {}, ease {:.2}",
                    item.bashkir,
                    quality,
                    item.review.interval_days,
                    format_date(due),
                    item.review.ease_factor
                );
            }
            Command::Due { limit } => {
                let mut due = self.scheduler.due_now()?;
                if let Some(limit) = limit {
                    due.truncate(limit);
                }
                if due.is_empty() {
                    println!("No words to review!");
                }
                for item in &due {
                    print_item(item);
                }
            }
            Command::Stats => {
                let stats = self.scheduler.statistics(self.scheduler.clock().now())?;
                println!("Total words:    {}", stats.total_words);
                println!("Mastered:       {}", stats.mastered);
                println!("Learning:       {}", stats.learning);
                println!("New:            {}", stats.new);
                println!("Due now:        {}", stats.due);
                println!("Average ease:   {:.2}", stats.average_ease);
                println!("Retention rate: {:.1}%", stats.retention_rate);
            }
            Command::Status { id } => {
                println!("{}: {}", id, self.scheduler.item_status(&id)?);
            }
            Command::Session {
                words,
                new_words,
                review_words,
            } => {
                let curriculum = match words {
                    Some(path) => import_words(path)?,
                    None => Vec::new(),
                };
                let limits = SessionLimits {
                    new_words: new_words.unwrap_or(self.limits.new_words),
                    review_words: review_words.unwrap_or(self.limits.review_words),
                };
                self.run_session(&curriculum, limits)?;
            }
            Command::Export { path } => {
                let items = self.scheduler.store().items()?;
                export_json_to_path(&items, &path)?;
                println!("Exported {} words to '{}'", items.len(), path.display());
            }
            Command::Import { path } => self.import(&path)?,
        }
        Ok(())
    }

    /// Imported items replace stored items with the same id
    fn import(&mut self, path: &Path) -> Result<(), Box<dyn Error>> {
        let items = import_json(path)?;
        let store = self.scheduler.store_mut();
        for item in &items {
            store.put(item)?;
        }
        println!("Imported {} words from '{}'", items.len(), path.display());
        Ok(())
    }

    fn run_session(&mut self, curriculum: &[WordEntry], limits: SessionLimits) -> Result<(), Box<dyn Error>> {
        let mut session = ReviewSession::start(&mut self.scheduler, curriculum, limits)?;
        if session.is_empty() {
            println!("No words to review! Add words or pass a curriculum with --words.");
            return Ok(());
        }

        let stdin = io::stdin();
        let mut lines = stdin.lock().lines();

        while let Some(item) = session.current_item() {
            println!();
            println!("{}", session.phase_message());
            println!("  {}", item.bashkir);
            prompt("Press Enter to show the translation")?;
            if lines.next().transpose()?.is_none() {
                break;
            }
            println!("  = {}", item.english);
            println!("Rate your response: {}", RATING_LABELS.join(", "));

            // Keep asking until a valid rating arrives or input ends
            let outcome = loop {
                prompt("> ")?;
                let Some(line) = lines.next().transpose()? else {
                    break None;
                };
                let quality = match line.trim().parse::<i64>() {
                    Ok(quality) => quality,
                    Err(_) => {
                        println!("Enter a number between 0 and 5");
                        continue;
                    }
                };
                match session.submit_answer(&mut self.scheduler, quality) {
                    Ok(outcome) => break Some(outcome),
                    Err(bashkir_review::Error::InvalidRating(_)) => {
                        println!("Enter a number between 0 and 5");
                    }
                    Err(e) => return Err(e.into()),
                }
            };

            let Some(outcome) = outcome else {
                break;
            };
            println!(
                "{} - next review in {} days ({}), ease {:.2} [{}]",
                if outcome.passed { "Correct" } else { "Incorrect" },
                outcome.new_interval,
                format_date(outcome.next_review),
                outcome.new_ease,
                outcome.progress
            );
        }

        let summary = session.summary();
        println!();
        println!(
            "Session complete: {} reviewed, {} remaining, {} correct, {} incorrect ({:.1}% accuracy)",
            summary.completed, summary.remaining, summary.correct, summary.incorrect, summary.accuracy
        );
        Ok(())
    }
}

fn print_item(item: &VocabularyItem) {
    println!(
        "{:<16} {:<20} {:<20} due {}",
        item.id,
        item.bashkir,
        item.english,
        format_date(item.review.due_date)
    );
}

fn prompt(text: &str) -> io::Result<()> {
    print!("{} ", text);
    io::stdout().flush()
}
