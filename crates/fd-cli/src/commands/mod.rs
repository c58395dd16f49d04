pub mod play;
pub mod table;
pub mod verify;

use std::path::PathBuf;

use clap::Args;
use tracing::info;

use fd_core::{DicePolicy, DiceSet, read_specs};

// Where the dice come from and how strictly they are checked.
#[derive(Args, Debug, Clone)]
pub struct DiceArgs {
    /// Dice as comma-separated faces, e.g. 2,2,4,4,9,9 1,1,6,6,8,8 3,3,5,5,7,7
    /// (dice starting with a negative face go after `--`)
    #[arg(value_name = "DICE")]
    pub dice: Vec<String>,

    /// Read dice from a file, one per line (`#` starts a comment)
    #[arg(short, long)]
    pub file: Option<PathBuf>,

    /// Minimum number of faces per die
    #[arg(long, default_value = "2")]
    pub min_sides: usize,

    /// Allow dice with different numbers of faces
    #[arg(long)]
    pub allow_mixed_sides: bool,
}

impl DiceArgs {
    fn policy(&self) -> DicePolicy {
        let policy = DicePolicy::default().with_min_sides(self.min_sides);
        if self.allow_mixed_sides {
            policy.allow_mixed_sides()
        } else {
            policy
        }
    }
}

/// Collect dice from the file (if any) followed by positional arguments.
fn load_dice(args: &DiceArgs) -> Result<DiceSet, String> {
    let mut specs = Vec::new();
    if let Some(path) = &args.file {
        let text = std::fs::read_to_string(path)
            .map_err(|e| format!("cannot read {}: {e}", path.display()))?;
        specs.extend(read_specs(&text));
    }
    specs.extend(args.dice.iter().cloned());

    let dice = args.policy().parse(&specs).map_err(|e| {
        format!("{e}\n  usage example: fairdice play 2,2,4,4,9,9 1,1,6,6,8,8 3,3,5,5,7,7")
    })?;
    info!(count = dice.len(), sides = ?dice.uniform_sides(), "loaded dice");
    Ok(dice)
}
