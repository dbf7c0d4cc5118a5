//! Output formatting and progress bars for CLI

use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

use crate::tictactoe::{BoardState, CELL_COUNT, Cell};

/// Create a progress bar over `total` items
pub fn create_progress(total: u64, unit: &str) -> ProgressBar {
    let pb = ProgressBar::new(total);
    let template = format!("[{{elapsed_precise}}] {{bar:40.cyan/blue}} {{pos}}/{{len}} {unit} ({{msg}})");
    let style = ProgressStyle::default_bar()
        .template(&template)
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("=>-");
    pb.set_style(style);
    pb
}

/// Create a spinner for analysis tasks
pub fn create_spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    let style = ProgressStyle::default_spinner()
        .template("{spinner:.green} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner());
    pb.set_style(style);
    pb.set_message(message.to_string());
    pb
}

/// Print a section header
pub fn print_section(title: &str) {
    println!("\n{}", "=".repeat(60));
    println!("{title}");
    println!("{}", "=".repeat(60));
}

/// Print a subsection header
pub fn print_subsection(title: &str) {
    println!("\n{title}");
    println!("{}", "-".repeat(40));
}

/// Format a number with thousands separators
pub fn format_number(n: u64) -> String {
    let s = n.to_string();
    let mut result = String::new();
    for (i, c) in s.chars().rev().enumerate() {
        if i > 0 && i.is_multiple_of(3) {
            result.insert(0, ',');
        }
        result.insert(0, c);
    }
    result
}

/// Seconds with microsecond precision
pub fn format_duration(d: Duration) -> String {
    format!("{:.6}s", d.as_secs_f64())
}

/// Print a key-value pair
pub fn print_kv(key: &str, value: &str) {
    println!("  {:20} {}", format!("{}:", key), value);
}

/// Render the grid, showing the index of every empty cell.
pub fn render_board(board: &BoardState) -> String {
    let cells: Vec<String> = (0..CELL_COUNT)
        .map(|pos| match board.get(pos) {
            Cell::Empty => pos.to_string(),
            cell => cell.to_char().to_string(),
        })
        .collect();

    cells
        .chunks(3)
        .map(|row| format!(" {} | {} | {}", row[0], row[1], row[2]))
        .collect::<Vec<_>>()
        .join("\n---+---+---\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thousands_separators() {
        assert_eq!(format_number(7), "7");
        assert_eq!(format_number(1000), "1,000");
        assert_eq!(format_number(549_946), "549,946");
    }

    #[test]
    fn board_shows_free_indices() {
        let board = BoardState::from_string("X...O....").unwrap();
        assert_eq!(
            render_board(&board),
            " X | 1 | 2\n---+---+---\n 3 | O | 5\n---+---+---\n 6 | 7 | 8"
        );
    }
}
