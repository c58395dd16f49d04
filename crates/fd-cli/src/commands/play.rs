use std::io::{self, BufRead, Write};

use colored::Colorize;

use fd_core::{DiceSet, Die, ProbabilityMatrix};
use fd_game::{
    DrawPurpose, Game, GameConfig, GameError, GameReport, GameResult, Outcome, Party, Player,
};
use fd_protocol::{Commitment, FairError, OsRandom, Reveal};

use super::DiceArgs;

pub fn run(args: &DiceArgs, offer_help: bool, seed: Option<u64>) -> Result<(), String> {
    let dice = super::load_dice(args)?;

    let mut config = GameConfig::default().with_help(offer_help);
    if let Some(seed) = seed {
        config = config.with_seed(seed);
    }

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut player = ConsolePlayer::new(&dice, stdin.lock(), stdout.lock());
    player.say(&format!(
        "  {} Type ? at a number prompt for help, x to exit.",
        "Non-transitive dice.".bold()
    ))?;

    let game = Game::new(&dice, OsRandom, config).map_err(|e| e.to_string())?;
    match game.play(&mut player) {
        Ok(_) => Ok(()),
        Err(GameError::Aborted) => {
            player.say("Goodbye.")?;
            Ok(())
        }
        Err(e) => Err(e.to_string()),
    }
}

/// A [`Player`] reading answers from `input` and writing to `output`.
pub struct ConsolePlayer<'a, R, W> {
    dice: &'a DiceSet,
    input: R,
    output: W,
}

impl<'a, R: BufRead, W: Write> ConsolePlayer<'a, R, W> {
    pub fn new(dice: &'a DiceSet, input: R, output: W) -> Self {
        Self {
            dice,
            input,
            output,
        }
    }

    fn say(&mut self, line: &str) -> Result<(), String> {
        self.write_line(line).map_err(|e| e.to_string())
    }

    fn write_line(&mut self, line: &str) -> GameResult<()> {
        writeln!(self.output, "{line}")?;
        Ok(())
    }

    /// Print `prompt` and read one trimmed line. EOF leaves the game.
    fn ask(&mut self, prompt: &str) -> GameResult<String> {
        write!(self.output, "{prompt} ")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(GameError::Aborted);
        }
        let answer = line.trim().to_string();
        if is_exit(&answer) {
            return Err(GameError::Aborted);
        }
        Ok(answer)
    }

    fn print_help(&mut self) -> GameResult<()> {
        let matrix = ProbabilityMatrix::from_dice(self.dice);
        let table = super::table::render(self.dice, &matrix);
        self.write_line(&table)
    }

    fn print_dice(&mut self) -> GameResult<()> {
        let lines: Vec<String> = self
            .dice
            .iter()
            .enumerate()
            .map(|(i, die)| format!("  {} - {}", i + 1, faces(die)))
            .collect();
        self.write_line("Available dice:")?;
        for line in lines {
            self.write_line(&line)?;
        }
        Ok(())
    }
}

impl<R: BufRead, W: Write> Player for ConsolePlayer<'_, R, W> {
    fn pick_number(&mut self, _purpose: DrawPurpose, range: u32) -> GameResult<u32> {
        loop {
            let answer = self.ask(&format!("Enter your number (0..{}):", range - 1))?;
            if is_help(&answer) {
                self.print_help()?;
                continue;
            }
            match answer.parse::<u32>() {
                Ok(value) => return Ok(value),
                Err(_) => self.write_line("Invalid input.")?,
            }
        }
    }

    fn wants_help(&mut self) -> GameResult<bool> {
        let answer =
            self.ask("Type 'help' to see the probability table or press Enter to continue:")?;
        Ok(is_help(&answer))
    }

    fn select_die(&mut self, dice: &DiceSet) -> GameResult<usize> {
        self.print_dice()?;
        loop {
            let answer = self.ask(&format!("Select your die (1..{}):", dice.len()))?;
            if is_help(&answer) {
                self.print_help()?;
                continue;
            }
            return answer.parse::<usize>().map_err(|_| {
                GameError::InvalidSelection(format!("'{answer}' is not a die number"))
            });
        }
    }

    fn on_commitment(
        &mut self,
        purpose: DrawPurpose,
        range: u32,
        commitment: &Commitment,
    ) -> GameResult<()> {
        let intro = match purpose {
            DrawPurpose::FirstMove => "Let's determine who makes the first move.",
            DrawPurpose::UserRoll => "It's time for your roll.",
            DrawPurpose::ComputerRoll => "It's time for my roll.",
        };
        self.write_line("")?;
        self.write_line(intro)?;
        self.write_line(&format!(
            "I selected a random value in the range 0..{} (HMAC={commitment}).",
            range - 1
        ))?;
        self.write_line("Add your number modulo the range.")
    }

    fn on_rejected(&mut self, error: &FairError) -> GameResult<()> {
        self.write_line(&format!("Invalid input: {error}."))
    }

    fn on_reveal(&mut self, _purpose: DrawPurpose, reveal: &Reveal) -> GameResult<()> {
        self.write_line(&format!(
            "My number is {} (KEY={}).",
            reveal.computer_value(),
            reveal.key().to_hex()
        ))?;
        self.write_line(&format!(
            "The fair number generation result is {} + {} = {} (mod {}).",
            reveal.computer_value(),
            reveal.user_value(),
            reveal.result(),
            reveal.range()
        ))
    }

    fn on_first_mover(&mut self, party: Party) -> GameResult<()> {
        match party {
            Party::User => self.write_line("You make the first move."),
            Party::Computer => self.write_line("I make the first move."),
        }
    }

    fn show_probabilities(
        &mut self,
        dice: &DiceSet,
        matrix: &ProbabilityMatrix,
    ) -> GameResult<()> {
        self.write_line(&super::table::render(dice, matrix))
    }

    fn on_computer_die(&mut self, index: usize, die: &Die) -> GameResult<()> {
        self.write_line(&format!("I chose die {}: {}", index + 1, faces(die)))
    }

    fn on_roll(&mut self, party: Party, face: i64) -> GameResult<()> {
        match party {
            Party::User => self.write_line(&format!("Your roll result is {face}.")),
            Party::Computer => self.write_line(&format!("My roll result is {face}.")),
        }
    }

    fn on_outcome(&mut self, report: &GameReport) -> GameResult<()> {
        let label = report.outcome.to_string();
        let label = match report.outcome {
            Outcome::UserWins => label.green().bold(),
            Outcome::ComputerWins => label.red().bold(),
            Outcome::Draw => label.yellow().bold(),
        };
        self.write_line("")?;
        self.write_line(&format!(
            "{label} ({} vs {})",
            report.user_roll, report.computer_roll
        ))
    }
}

fn faces(die: &Die) -> String {
    let faces: Vec<String> = die.faces().iter().map(|f| f.to_string()).collect();
    format!("[{}]", faces.join(", "))
}

fn is_help(answer: &str) -> bool {
    answer == "?" || answer.eq_ignore_ascii_case("help")
}

fn is_exit(answer: &str) -> bool {
    ["x", "exit", "q", "quit"]
        .iter()
        .any(|word| answer.eq_ignore_ascii_case(word))
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use fd_core::DicePolicy;
    use fd_protocol::SeededRandom;

    use super::*;

    fn classic() -> DiceSet {
        DicePolicy::default()
            .parse(&["2,2,4,4,9,9", "1,1,6,6,8,8", "3,3,5,5,7,7"])
            .unwrap()
    }

    type TestPlayer<'a> = ConsolePlayer<'a, Cursor<Vec<u8>>, Vec<u8>>;

    fn player<'a>(dice: &'a DiceSet, input: &str) -> TestPlayer<'a> {
        ConsolePlayer::new(dice, Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    fn output(player: TestPlayer<'_>) -> String {
        String::from_utf8(player.output).unwrap()
    }

    #[test]
    fn pick_number_retries_until_numeric() {
        let dice = classic();
        let mut p = player(&dice, "abc\n-1\n 4 \n");
        assert_eq!(p.pick_number(DrawPurpose::UserRoll, 6).unwrap(), 4);
        assert_eq!(output(p).matches("Invalid input.").count(), 2);
    }

    #[test]
    fn pick_number_shows_help_on_question_mark() {
        let dice = classic();
        let mut p = player(&dice, "?\n1\n");
        assert_eq!(p.pick_number(DrawPurpose::FirstMove, 2).unwrap(), 1);
        assert!(output(p).contains("0.5556"));
    }

    #[test]
    fn exit_and_eof_abort() {
        let dice = classic();
        let mut p = player(&dice, "x\n");
        assert!(p.pick_number(DrawPurpose::FirstMove, 2).unwrap_err().is_abort());

        let mut p = player(&dice, "");
        assert!(p.wants_help().unwrap_err().is_abort());
    }

    #[test]
    fn wants_help_answers() {
        let dice = classic();
        let mut p = player(&dice, "help\n\nno\n");
        assert!(p.wants_help().unwrap());
        assert!(!p.wants_help().unwrap());
        assert!(!p.wants_help().unwrap());
    }

    #[test]
    fn select_die_returns_typed_number() {
        let dice = classic();
        let mut p = player(&dice, "?\n3\n");
        assert_eq!(p.select_die(&dice).unwrap(), 3);
        let out = output(p);
        assert!(out.contains("3 - [3, 3, 5, 5, 7, 7]"));
        assert!(out.contains("n/a"));
    }

    #[test]
    fn select_die_rejects_garbage() {
        let dice = classic();
        let mut p = player(&dice, "two\n");
        assert!(matches!(
            p.select_die(&dice),
            Err(GameError::InvalidSelection(_))
        ));
    }

    #[test]
    fn full_game_transcript() {
        let dice = classic();
        let mut p = player(&dice, "0\n\n1\n0\n0\n");
        let config = GameConfig::default().with_seed(1);
        let report = Game::new(&dice, SeededRandom::new(1), config)
            .unwrap()
            .play(&mut p)
            .unwrap();
        let out = output(p);
        assert_eq!(out.matches("HMAC=").count(), 3);
        assert_eq!(out.matches("KEY=").count(), 3);
        assert!(out.contains(&report.outcome.to_string()));
        assert!(out.contains(&format!(
            "({} vs {})",
            report.user_roll, report.computer_roll
        )));
    }
}
