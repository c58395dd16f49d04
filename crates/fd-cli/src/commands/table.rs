use colored::Colorize;
use comfy_table::{ContentArrangement, Table};

use fd_core::{DiceSet, ProbabilityMatrix};

use super::DiceArgs;

pub fn run(args: &DiceArgs, json: bool) -> Result<(), String> {
    let dice = super::load_dice(args)?;
    let matrix = ProbabilityMatrix::from_dice(&dice);

    if json {
        let out = serde_json::to_string_pretty(&matrix)
            .map_err(|e| format!("JSON serialization error: {e}"))?;
        println!("{out}");
        return Ok(());
    }

    println!("{}", render(&dice, &matrix));
    if matrix.is_non_transitive() {
        println!();
        println!(
            "  {}",
            "These dice are non-transitive: every die can be beaten.".dimmed()
        );
    }
    Ok(())
}

/// Rows are the user's die, columns the computer's.
pub fn render(dice: &DiceSet, matrix: &ProbabilityMatrix) -> String {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);

    let mut header = vec!["User dice v".to_string()];
    header.extend(dice.iter().map(|d| d.to_string()));
    table.set_header(header);

    for (i, die) in dice.iter().enumerate() {
        let mut row = vec![die.to_string()];
        row.extend((0..dice.len()).map(|j| matrix.display_cell(i, j)));
        table.add_row(row);
    }

    format!("  Probability of the win for the user:\n{table}")
}
