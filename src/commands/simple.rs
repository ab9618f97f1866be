//! Simple line-based play mode
//!
//! Text-based game without the TUI: one guess per line.

use crate::core::{CATEGORIES, Category, MAX_ROWS, Outcome, Round, WORD_LENGTH};
use crate::game::Session;
use crate::output::formatters::grid_rows;
use crate::storage::KeyValueStore;
use anyhow::Result;
use colored::Colorize;
use std::io::{BufRead, Write};

/// What a line of input asks for
#[derive(Debug, PartialEq, Eq)]
enum Command<'a> {
    Quit,
    NewRound,
    Category(&'a str),
    Guess(&'a str),
}

fn parse_command(line: &str) -> Option<Command<'_>> {
    let line = line.trim();
    match line {
        "" => None,
        "quit" | "q" | "exit" | "יציאה" => Some(Command::Quit),
        "new" | "n" | "חדש" => Some(Command::NewRound),
        _ => {
            if let Some(category) = line
                .parse::<usize>()
                .ok()
                .and_then(Category::by_number)
                .or_else(|| Category::by_name(line))
            {
                Some(Command::Category(category.name))
            } else {
                Some(Command::Guess(line))
            }
        }
    }
}

/// Run the line-based game until `quit` or end of input
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn run_simple<S, R, W>(session: &mut Session<S>, input: R, mut out: W) -> Result<()>
where
    S: KeyValueStore,
    R: BufRead,
    W: Write,
{
    writeln!(out, "\n{}", "╔══════════════════════════════════╗".cyan())?;
    writeln!(out, "{}", "║        וורדל לילדים - מצב טקסט        ║".cyan())?;
    writeln!(out, "{}\n", "╚══════════════════════════════════╝".cyan())?;

    writeln!(out, "נחשו מילה בת {WORD_LENGTH} אותיות. קטגוריות:")?;
    for (index, category) in CATEGORIES.iter().enumerate() {
        writeln!(out, "  {}. {} {}", index + 1, category.icon, category.label)?;
    }
    writeln!(out, "פקודות: new (מילה חדשה), quit (יציאה)\n")?;

    print_board(session, &mut out)?;

    for line in input.lines() {
        let line = line?;
        let Some(command) = parse_command(&line) else {
            continue;
        };

        match command {
            Command::Quit => break,
            Command::NewRound => {
                if let Err(err) = session.new_round() {
                    tracing::warn!("new round refused: {err}");
                }
            }
            Command::Category(name) => {
                if let Err(err) = session.reset_game(name) {
                    tracing::warn!("category refused: {err}");
                }
            }
            Command::Guess(text) => play_guess(session, text, &mut out)?,
        }

        print_board(session, &mut out)?;
    }

    writeln!(out, "\n👋 {}\n", "להתראות!".bright_white())?;
    Ok(())
}

fn play_guess<S: KeyValueStore, W: Write>(
    session: &mut Session<S>,
    text: &str,
    out: &mut W,
) -> Result<()> {
    if session.round().is_none_or(Round::is_over) {
        writeln!(out, "{}", "המשחק נגמר. הקלידו new או מספר קטגוריה".yellow())?;
        return Ok(());
    }

    while session.erase_letter() {}

    let typed = text.chars().filter(|&ch| session.add_letter(ch)).count();
    if typed != WORD_LENGTH || text.chars().count() != WORD_LENGTH {
        while session.erase_letter() {}
        writeln!(
            out,
            "{}",
            format!("צריך מילה של {WORD_LENGTH} אותיות בעברית").yellow()
        )?;
        return Ok(());
    }

    match session.submit_guess() {
        Outcome::Won { attempts } => {
            writeln!(
                out,
                "\n🎉 {} ({attempts}/{MAX_ROWS})",
                session.message().green().bold()
            )?;
        }
        Outcome::Lost { .. } => {
            writeln!(out, "\n{}", session.message().red().bold())?;
        }
        Outcome::Advanced { .. } | Outcome::Incomplete | Outcome::Finished => {}
    }
    Ok(())
}

fn print_board<S: KeyValueStore, W: Write>(session: &Session<S>, out: &mut W) -> Result<()> {
    match session.round() {
        Some(round) => {
            for row in grid_rows(round) {
                writeln!(out, "    {}", row.bright_white())?;
            }
        }
        None => writeln!(out, "{}", session.message().yellow())?,
    }
    writeln!(out, "{}", session.stats_line().cyan())?;
    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::VICTORY_MESSAGE;
    use crate::storage::{MemoryStore, StatsRecord};
    use crate::wordlists::loader::from_json;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn session() -> Session<MemoryStore> {
        let words = from_json(r#"{"animals": ["דגים"], "food": ["פיצה"]}"#).unwrap();
        let mut session = Session::new(words, MemoryStore::default(), StdRng::seed_from_u64(11));
        session.reset_game("animals").unwrap();
        session
    }

    fn play(session: &mut Session<MemoryStore>, script: &str) -> String {
        let mut out = Vec::new();
        run_simple(session, script.as_bytes(), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn parse_commands() {
        assert_eq!(parse_command("  quit "), Some(Command::Quit));
        assert_eq!(parse_command("new"), Some(Command::NewRound));
        assert_eq!(parse_command("3"), Some(Command::Category("food")));
        assert_eq!(parse_command("colors"), Some(Command::Category("colors")));
        assert_eq!(parse_command("דגים"), Some(Command::Guess("דגים")));
        assert_eq!(parse_command("9"), Some(Command::Guess("9")));
        assert_eq!(parse_command(""), None);
    }

    #[test]
    fn winning_line() {
        let mut session = session();
        let output = play(&mut session, "דגים\nquit\n");
        assert!(output.contains(VICTORY_MESSAGE));
        assert_eq!(session.stats(), StatsRecord { wins: 1, losses: 0 });
    }

    #[test]
    fn six_wrong_lines_lose() {
        let mut session = session();
        let output = play(&mut session, &"חתול\n".repeat(6));
        assert!(output.contains("המילה הייתה: דגים"));
        assert_eq!(session.stats(), StatsRecord { wins: 0, losses: 1 });
    }

    #[test]
    fn wrong_length_is_rejected_without_using_a_row() {
        let mut session = session();
        let output = play(&mut session, "כלב\nתרנגול\n");
        assert!(output.contains("צריך מילה"));
        let round = session.round().unwrap();
        assert_eq!(round.row(), 0);
        assert!(round.letters().is_empty());
    }

    #[test]
    fn category_switch() {
        let mut session = session();
        play(&mut session, "3\nפיצה\n");
        assert_eq!(session.category(), "food");
        assert_eq!(session.stats().wins, 1);
    }

    #[test]
    fn missing_category_is_reported() {
        let mut session = session();
        let output = play(&mut session, "colors\nכחול\n");
        assert!(output.contains("אין מילים בקטגוריה"));
        assert!(output.contains("המשחק נגמר"));
        assert_eq!(session.stats(), StatsRecord::default());
    }

    #[test]
    fn refused_new_round_keeps_reading_lines() {
        let mut session = session();
        let output = play(&mut session, "colors
new
1
דגים
");
        assert_eq!(output.matches("אין מילים בקטגוריה: colors").count(), 2);
        assert_eq!(session.category(), "animals");
        assert_eq!(session.stats().wins, 1);
    }
}
