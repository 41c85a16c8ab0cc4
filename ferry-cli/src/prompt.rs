//! Operator prompts
//!
//! Indexed-table selection over arbitrary record lists. Input comes
//! through the [`LineInput`] trait so tests can drive selections with a
//! scripted sequence of answers instead of a terminal.

use std::io::{self, BufRead, Write};

use anyhow::{Result, bail};
use colored::*;

/// One-line input source with a visible prompt
pub trait LineInput {
    /// Show `prompt` and read one line, trimmed. End of input is an error.
    fn read_line(&mut self, prompt: &str) -> Result<String>;
}

/// Terminal-backed input
#[derive(Default)]
pub struct StdinInput;

impl StdinInput {
    pub fn new() -> Self {
        Self
    }
}

impl LineInput for StdinInput {
    fn read_line(&mut self, prompt: &str) -> Result<String> {
        print!("{} ", prompt);
        io::stdout().flush().ok();

        let mut line = String::new();
        let read = io::stdin().lock().read_line(&mut line)?;
        if read == 0 {
            bail!("input stream closed");
        }

        Ok(line.trim().to_string())
    }
}

/// One display column: a header and a typed accessor into the record.
///
/// The accessor owns the "missing nested field renders as an empty cell"
/// rule; it can never fail.
pub struct Column<T> {
    pub header: &'static str,
    pub value: fn(&T) -> String,
}

/// Render `items` as an indexed table and ask the operator to pick one.
///
/// Re-prompts until the reply parses to an index in `[1, len]`; invalid
/// input never terminates the process. An empty candidate list is an
/// error rather than an unanswerable prompt.
pub fn choose<T: Clone>(
    items: &[T],
    columns: &[Column<T>],
    prompt: &str,
    input: &mut dyn LineInput,
) -> Result<T> {
    if items.is_empty() {
        bail!("nothing to choose from: {}", prompt.trim_end_matches(':'));
    }

    println!();
    println!("{}", prompt.bold());
    render_table(items, columns);

    loop {
        let line = input.read_line(&format!("Enter an index (1-{}):", items.len()))?;
        match line.parse::<usize>() {
            Ok(n) if (1..=items.len()).contains(&n) => return Ok(items[n - 1].clone()),
            _ => eprintln!(
                "{}",
                format!(
                    "Invalid input. Please enter an index between 1 and {}.",
                    items.len()
                )
                .yellow()
            ),
        }
    }
}

/// Print an indexed table, one row per item, widths fitted to content.
fn render_table<T>(items: &[T], columns: &[Column<T>]) {
    let index_width = items.len().to_string().len();

    let rows: Vec<Vec<String>> = items
        .iter()
        .map(|item| columns.iter().map(|column| (column.value)(item)).collect())
        .collect();

    let mut widths: Vec<usize> = columns.iter().map(|column| column.header.len()).collect();
    for row in &rows {
        for (cell, width) in row.iter().zip(widths.iter_mut()) {
            *width = (*width).max(cell.len());
        }
    }

    let header: Vec<String> = columns
        .iter()
        .zip(&widths)
        .map(|(column, width)| format!("{:<1$}", column.header, *width))
        .collect();
    println!("{:>1$}  {2}", "#", index_width, header.join("  ").bold());

    for (index, row) in rows.iter().enumerate() {
        let cells: Vec<String> = row
            .iter()
            .zip(&widths)
            .map(|(cell, width)| format!("{:<1$}", cell, *width))
            .collect();
        println!("{:>1$}  {2}", index + 1, index_width, cells.join("  "));
    }
}

/// Scripted input for tests: yields a fixed sequence of answers.
#[cfg(test)]
pub(crate) struct ScriptedInput {
    answers: std::collections::VecDeque<String>,
}

#[cfg(test)]
impl ScriptedInput {
    pub(crate) fn new<I>(answers: I) -> Self
    where
        I: IntoIterator<Item = &'static str>,
    {
        Self {
            answers: answers.into_iter().map(String::from).collect(),
        }
    }
}

#[cfg(test)]
impl LineInput for ScriptedInput {
    fn read_line(&mut self, _prompt: &str) -> Result<String> {
        self.answers
            .pop_front()
            .ok_or_else(|| anyhow::anyhow!("scripted input exhausted"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone)]
    struct Item {
        name: &'static str,
    }

    const COLUMNS: &[Column<Item>] = &[Column {
        header: "Name",
        value: |item: &Item| item.name.to_string(),
    }];

    fn items() -> Vec<Item> {
        vec![Item { name: "a" }, Item { name: "b" }, Item { name: "c" }]
    }

    #[test]
    fn test_choose_returns_the_selected_row() {
        let mut input = ScriptedInput::new(["2"]);
        let chosen = choose(&items(), COLUMNS, "Pick one:", &mut input).unwrap();
        assert_eq!(chosen.name, "b");
    }

    #[test]
    fn test_choose_reprompts_on_invalid_input() {
        // Zero, garbage and out-of-range replies are all rejected without
        // ending the loop.
        let mut input = ScriptedInput::new(["0", "nope", "9", "3"]);
        let chosen = choose(&items(), COLUMNS, "Pick one:", &mut input).unwrap();
        assert_eq!(chosen.name, "c");
    }

    #[test]
    fn test_choose_fails_on_empty_candidates() {
        let mut input = ScriptedInput::new(["1"]);
        let result = choose(&[] as &[Item], COLUMNS, "Pick one:", &mut input);
        assert!(result.is_err());
    }

    #[test]
    fn test_choose_fails_when_input_runs_out() {
        let mut input = ScriptedInput::new([]);
        let result = choose(&items(), COLUMNS, "Pick one:", &mut input);
        assert!(result.is_err());
    }
}
