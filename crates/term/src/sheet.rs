//! Score sheet drawing - pure string builders for the frame grid.
//!
//! The layout reproduces the classic paper sheet: a frame-number header, a
//! 21-cell pins row, the cumulative row underneath, and a side box holding
//! the projected max (or the final result once the game is over).

use tui_bowling_core::{ArchivedGame, GameRecord, PinSequence, Scoreboard};

const FRAME_HEAD_TOP: &str = "┏━━━┳━━━┳━━━┳━━━┳━━━┳━━━┳━━━┳━━━┳━━━┳━━━━━┓";
const FRAME_HEAD_BOTTOM: &str = "┗━━━┻━━━┻━━━┻━━━┻━━━┻━━━┻━━━┻━━━┻━━━┻━━━━━┛";
const FRAME_HEAD_CELLS: &str = "┃ 1 ┃ 2 ┃ 3 ┃ 4 ┃ 5 ┃ 6 ┃ 7 ┃ 8 ┃ 9 ┃ 10  ┃";
const PINS_TOP: &str = "┏━┳━┳━┳━┳━┳━┳━┳━┳━┳━┳━┳━┳━┳━┳━┳━┳━┳━┳━┳━┳━┓";
const SHEET_MID: &str = "┃ ┗━┫ ┗━┫ ┗━┫ ┗━┫ ┗━┫ ┗━┫ ┗━┫ ┗━┫ ┗━╋━┻━┻━┫";
const SHEET_BOTTOM: &str = "┗━━━┻━━━┻━━━┻━━━┻━━━┻━━━┻━━━┻━━━┻━━━┻━━━━━┛";

/// Lines of the current-game sheet, including the max/result box and the
/// session stats footer.
pub fn sheet_lines(record: &GameRecord) -> Vec<String> {
    let label = if record.is_complete() { "RES" } else { "MAX" };
    vec![
        format!("{FRAME_HEAD_TOP}┏━━━━━┓"),
        format!("{FRAME_HEAD_CELLS}┃ {label} ┃"),
        format!("{FRAME_HEAD_BOTTOM}┗━━━━━┛"),
        format!("{PINS_TOP}┏━━━━━┓"),
        format!("{}┃     ┃", pins_row(&record.pins)),
        format!("{SHEET_MID}┃{}┃", fmt_max(record.max_score)),
        format!("{}┃     ┃", scores_row(&record.scores)),
        format!("{SHEET_BOTTOM}┗━━━━━┛"),
        stats_line(&record.archives),
    ]
}

/// Lines of one archived game's sheet. `number` is 1-based.
pub fn archive_lines(number: usize, archive: &ArchivedGame) -> Vec<String> {
    vec![
        format!(" Game {:<6}[{}]", number, archive.time),
        PINS_TOP.to_string(),
        pins_row(&archive.pins),
        SHEET_MID.to_string(),
        scores_row(&archive.scores),
        SHEET_BOTTOM.to_string(),
    ]
}

/// Session stats over the archived finals, dashed before the first one.
pub fn stats_line(archives: &[ArchivedGame]) -> String {
    if archives.is_empty() {
        return "    Game:1   Total:----  Avg:---  H/G:---  L/G:---".to_string();
    }
    let finals: Vec<u32> = archives
        .iter()
        .map(|a| u32::from(a.scores.final_total().unwrap_or(0)))
        .collect();
    let sum: u32 = finals.iter().sum();
    let high = finals.iter().max().copied().unwrap_or(0);
    let low = finals.iter().min().copied().unwrap_or(0);
    let avg = sum / finals.len() as u32;
    format!(
        "    Game:{:<2}  Total:{:<4}  Avg:{:<3}  H/G:{:<3}  L/G:{:<3}",
        archives.len() + 1,
        sum,
        avg,
        high,
        low
    )
}

fn pins_row(pins: &PinSequence) -> String {
    let mut row = String::from("┃");
    for throw in pins.iter() {
        row.push(throw.sheet_char());
        row.push('┃');
    }
    row
}

fn scores_row(scores: &Scoreboard) -> String {
    let mut row = String::from("┃");
    for k in 1..=9 {
        row.push_str(&fmt_score_cell(scores.frame(k)));
        row.push('┃');
    }
    row.push(' ');
    row.push_str(&fmt_score_cell(scores.frame(10)));
    row.push_str(" ┃");
    row
}

// Three columns: blank while undetermined, left-justified under 100.
fn fmt_score_cell(total: Option<u16>) -> String {
    match total {
        None => "   ".to_string(),
        Some(v) if v < 100 => format!(" {v:<2}"),
        Some(v) => format!("{v}"),
    }
}

// Five columns inside the max/result box.
fn fmt_max(max: u16) -> String {
    if max < 10 {
        format!("  {max}  ")
    } else if max < 100 {
        format!("  {max} ")
    } else {
        format!(" {max} ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tui_bowling_core::{GameRecord, ThrowOutcome};

    fn perfect_game() -> GameRecord {
        let mut record = GameRecord::fresh("p");
        for _ in 0..12 {
            assert_eq!(record.record_throw("x"), ThrowOutcome::Recorded);
        }
        record
    }

    #[test]
    fn test_rows_share_one_width() {
        let record = perfect_game();
        let lines = sheet_lines(&record);
        let width = lines[0].chars().count();
        for line in &lines[..lines.len() - 1] {
            assert_eq!(line.chars().count(), width, "{line}");
        }
    }

    #[test]
    fn test_perfect_game_shows_result() {
        let record = perfect_game();
        let lines = sheet_lines(&record);
        assert!(lines[1].contains("RES"));
        assert!(lines[5].contains(" 300 "));
        assert!(lines[6].contains("300"));
    }

    #[test]
    fn test_fresh_game_shows_max_and_blank_cells() {
        let record = GameRecord::fresh("p");
        let lines = sheet_lines(&record);
        assert!(lines[1].contains("MAX"));
        assert!(lines[5].contains(" 300 "));
        // Pins row is 21 blank cells.
        assert_eq!(lines[4], format!("{}┃     ┃", "┃ ".repeat(21) + "┃"));
    }

    #[test]
    fn test_stats_line_aggregates_archived_finals() {
        let mut record = GameRecord::fresh("p");
        for _ in 0..10 {
            let _ = record.record_throw("4");
            let _ = record.record_throw("3");
        }
        record.archive_and_reset("t1");
        for _ in 0..12 {
            let _ = record.record_throw("x");
        }
        record.archive_and_reset("t2");

        let line = stats_line(&record.archives);
        assert!(line.contains("Game:3"), "{line}");
        assert!(line.contains("Total:370"), "{line}");
        assert!(line.contains("Avg:185"), "{line}");
        assert!(line.contains("H/G:300"), "{line}");
        assert!(line.contains("L/G:70"), "{line}");
    }

    #[test]
    fn test_archive_lines_have_no_side_box() {
        let mut record = GameRecord::fresh("p");
        for _ in 0..12 {
            let _ = record.record_throw("x");
        }
        record.archive_and_reset("2026/08/08 19:00:00 +0900");
        let lines = archive_lines(1, &record.archives[0]);
        assert!(lines[0].starts_with(" Game 1"));
        assert!(lines[0].contains("[2026/08/08 19:00:00 +0900]"));
        let width = lines[1].chars().count();
        for line in &lines[1..] {
            assert_eq!(line.chars().count(), width, "{line}");
        }
    }
}
