use crate::suggestions::SuggestionList;
use anyhow::{Result, anyhow};
use colored::Colorize;
use std::io::{self, Write};

/// What the user picked from the numbered menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    Suggestion(usize),
    Custom,
}

/// Parse a 1-based menu choice; `count + 1` means "enter custom message".
pub fn parse_selection(input: &str, count: usize) -> Option<Selection> {
    let choice: usize = input.trim().parse().ok()?;
    match choice {
        n if (1..=count).contains(&n) => Some(Selection::Suggestion(n - 1)),
        n if n == count + 1 => Some(Selection::Custom),
        _ => None,
    }
}

pub fn parse_confirmation(input: &str) -> Option<bool> {
    match input.trim().to_lowercase().as_str() {
        "y" | "yes" => Some(true),
        "n" | "no" => Some(false),
        _ => None,
    }
}

/// Plain output, one suggestion per line, for hooks and pipes.
pub fn print_suggestions(suggestions: &SuggestionList) {
    for suggestion in suggestions {
        println!("{suggestion}");
    }
}

fn prompt_input(prompt: &str) -> Result<String> {
    print!("{prompt}");
    io::stdout().flush()?;

    let mut buf = String::new();
    if io::stdin().read_line(&mut buf)? == 0 {
        return Err(anyhow!("stdin closed while waiting for input"));
    }
    Ok(buf.trim().to_string())
}

/// Show the numbered menu and return the chosen commit message.
pub fn select_commit_message(suggestions: &SuggestionList) -> Result<String> {
    let count = suggestions.as_slice().len();

    println!("\n{}", "Generated commit message suggestions:".bold());
    println!("{}", "=".repeat(45));
    for (i, suggestion) in suggestions.iter().enumerate() {
        println!("{} {}", format!("{}.", i + 1).cyan(), suggestion);
    }
    println!("{} Enter custom message", format!("{}.", count + 1).cyan());
    println!();

    loop {
        let input = prompt_input(&format!("Select option (1-{}): ", count + 1))?;
        match parse_selection(&input, count) {
            Some(Selection::Suggestion(idx)) => return Ok(suggestions.as_slice()[idx].clone()),
            Some(Selection::Custom) => return custom_commit_message(),
            None => println!(
                "Invalid selection. Please enter a number between 1 and {}.",
                count + 1
            ),
        }
    }
}

fn custom_commit_message() -> Result<String> {
    loop {
        println!();
        let message = prompt_input("Enter your commit message: ")?;
        if !message.is_empty() {
            return Ok(message);
        }
        println!("{}", "Commit message cannot be empty.".red());
    }
}

pub fn confirm_commit(message: &str) -> Result<bool> {
    println!("\nCommit message: {}", message.green());
    println!();

    loop {
        let input = prompt_input("Proceed with commit? (y/n): ")?;
        match parse_confirmation(&input) {
            Some(answer) => return Ok(answer),
            None => println!("Please enter 'y' for yes or 'n' for no."),
        }
    }
}
