//! Formatting utilities for terminal output

use crate::core::{MAX_ROWS, Round, WORD_LENGTH};

/// Format one row of letter cells, first letter on the right
#[must_use]
pub fn grid_row(letters: &[char]) -> String {
    (0..WORD_LENGTH)
        .rev()
        .map(|col| format!("[{}]", letters.get(col).copied().unwrap_or(' ')))
        .collect()
}

/// Format every row of a round's grid, top to bottom
#[must_use]
pub fn grid_rows(round: &Round) -> Vec<String> {
    (0..MAX_ROWS)
        .map(|row| {
            if let Some(guess) = round.guesses().get(row) {
                grid_row(&guess.chars().collect::<Vec<_>>())
            } else if row == round.row() && !round.is_over() {
                grid_row(round.letters())
            } else {
                grid_row(&[])
            }
        })
        .collect()
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }

    // Cast is safe: values are clamped to [0, width]
    #[allow(clippy::cast_sign_loss, clippy::cast_precision_loss)]
    let filled = ((value / max) * width as f64).max(0.0) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Fraction of games won, 0.0 when none were played
#[must_use]
pub fn win_rate(wins: u32, losses: u32) -> f64 {
    let games = f64::from(wins) + f64::from(losses);
    if games == 0.0 {
        0.0
    } else {
        f64::from(wins) / games
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;

    #[test]
    fn grid_row_empty() {
        assert_eq!(grid_row(&[]), "[ ][ ][ ][ ]");
    }

    #[test]
    fn grid_row_right_to_left() {
        assert_eq!(grid_row(&['ד', 'ג', 'י', 'ם']), "[ם][י][ג][ד]");
        assert_eq!(grid_row(&['ד']), "[ ][ ][ ][ד]");
    }

    #[test]
    fn grid_rows_track_round() {
        let mut round = Round::new(Word::new("דגים").unwrap());
        for ch in "חתול".chars() {
            round.add_letter(ch);
        }
        round.submit_guess();
        round.add_letter('ד');

        let rows = grid_rows(&round);
        assert_eq!(rows.len(), MAX_ROWS);
        assert_eq!(rows[0], "[ל][ו][ת][ח]");
        assert_eq!(rows[1], "[ ][ ][ ][ד]");
        assert_eq!(rows[2], "[ ][ ][ ][ ]");
    }

    #[test]
    fn progress_bar_empty() {
        let bar = create_progress_bar(0.0, 100.0, 10);
        assert_eq!(bar, "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        let bar = create_progress_bar(100.0, 100.0, 10);
        assert_eq!(bar, "██████████");
    }

    #[test]
    fn progress_bar_half() {
        let bar = create_progress_bar(50.0, 100.0, 10);
        assert_eq!(bar, "█████░░░░░");
    }

    #[test]
    fn win_rate_values() {
        assert!((win_rate(0, 0) - 0.0).abs() < f64::EPSILON);
        assert!((win_rate(3, 1) - 0.75).abs() < f64::EPSILON);
        assert!((win_rate(2, 0) - 1.0).abs() < f64::EPSILON);
    }
}
