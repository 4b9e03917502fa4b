//! Terminal presentation for scan messages using console

use std::io::{self, BufRead, Write};

use console::{Style, Term};
use scanloclib::{is_affirmative, Category, Confirm, Message, MessageSink};

/// Style for each message category
fn style_for(category: Category) -> Style {
    match category {
        Category::Progress => Style::new().yellow(),
        Category::Muted => Style::new().black().bright(),
        Category::File => Style::new().green(),
        Category::Summary => Style::new().blue(),
        Category::Error => Style::new().red(),
        Category::Prompt => Style::new().magenta(),
        Category::Saved => Style::new().cyan(),
    }
}

/// Apply the category style to a message.
pub fn styled(message: &Message) -> String {
    // Only the path of a file row is highlighted
    if message.category == Category::File {
        if let Some((path, rest)) = message.text.split_once(" | ") {
            return format!("{} | {}", style_for(Category::File).apply_to(path), rest);
        }
    }
    style_for(message.category)
        .apply_to(&message.text)
        .to_string()
}

/// Prints messages to stdout.
#[derive(Debug, Default)]
pub struct TerminalSink {
    last: Option<Category>,
}

impl TerminalSink {
    pub fn new() -> Self {
        Self::default()
    }
}

impl MessageSink for TerminalSink {
    fn emit(&mut self, message: Message) {
        // Blank line after the exclusion list and before the totals
        if self.last == Some(Category::Muted) || message.category == Category::Summary {
            println!();
        }
        println!("{}", styled(&message));
        self.last = Some(message.category);
    }
}

/// Asks on the terminal and reads one line from stdin.
#[derive(Debug)]
pub struct TerminalConfirm {
    term: Term,
}

impl TerminalConfirm {
    pub fn new() -> Self {
        Self {
            term: Term::stdout(),
        }
    }
}

impl Default for TerminalConfirm {
    fn default() -> Self {
        Self::new()
    }
}

impl Confirm for TerminalConfirm {
    fn confirm(&mut self, prompt: &Message) -> bool {
        print!("\n{}", styled(prompt));
        let _ = io::stdout().flush();

        let answer = if self.term.is_term() {
            self.term.read_line()
        } else {
            let mut line = String::new();
            io::stdin().lock().read_line(&mut line).map(|_| line)
        };

        match answer {
            Ok(answer) => is_affirmative(&answer),
            Err(err) => {
                tracing::debug!(error = %err, "no answer to report prompt");
                false
            }
        }
    }
}
