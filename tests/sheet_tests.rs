//! Score-sheet rendering through the facade.

use tui_bowling::core::GameRecord;
use tui_bowling::term::sheet::{sheet_lines, stats_line};

fn play(tokens: &[&str]) -> GameRecord {
    let mut record = GameRecord::fresh("sheet");
    for token in tokens {
        let _ = record.record_throw(token);
    }
    record
}

#[test]
fn test_in_progress_sheet_shows_max_and_blanks() {
    let record = play(&["10", "3"]);
    let lines = sheet_lines(&record);

    assert!(lines[1].contains("MAX"));
    // Pins row: strike, skipped slot, the three.
    assert!(lines[4].starts_with("┃X┃ ┃3┃"));
    // Neither frame is determined yet: the whole scores row is blank cells.
    assert!(lines[6].starts_with("┃   ┃   ┃"));
}

#[test]
fn test_finished_sheet_shows_result() {
    let mut tokens = vec!["10"];
    for _ in 0..9 {
        tokens.push("3");
        tokens.push("4");
    }
    let record = play(&tokens);
    let lines = sheet_lines(&record);

    assert!(lines[1].contains("RES"));
    assert!(lines[5].contains(" 80 "));
    // The cumulative row ends at eighty.
    assert!(lines[6].contains("80"));
}

#[test]
fn test_stats_line_is_dashed_without_archives() {
    let record = play(&[]);
    assert_eq!(
        stats_line(&record.archives),
        "    Game:1   Total:----  Avg:---  H/G:---  L/G:---"
    );
}
