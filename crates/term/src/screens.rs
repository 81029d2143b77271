//! Scene composition - pure functions from application state to the
//! framebuffer. The binary decides *what* is on screen; these decide *where*.

use tui_bowling_core::GameRecord;

use crate::fb::{FrameBuffer, Tone};
use crate::pager::ArchivePager;
use crate::sheet;

const MENU: [(&str, &str); 2] = [
    ("new user", "Create new data."),
    ("existing user", "Select saved data."),
];

const LIST_HELP: &str = "↑ up • ↓ down • ↵ enter • q quit";
const ENTRY_HELP: &str = "↵ enter • esc quit";
const PLAY_HELP: &str = "← left • → right • ↵ enter • q quit";

pub const NAME_PLACEHOLDER: &str = "What is your name?";
pub const THROW_PLACEHOLDER: &str = "How many pins were knocked down?";
pub const NEXT_GAME_PLACEHOLDER: &str = "Let's go to the next game!";

/// Number of menu entries (the mode-select cursor wraps against this).
pub const MENU_LEN: usize = MENU.len();

pub fn mode_select(fb: &mut FrameBuffer, selected: usize) {
    fb.clear();
    let y = draw_menu(fb, 1, selected);
    fb.put_str(0, y + 1, LIST_HELP, Tone::Dim);
}

pub fn name_entry(fb: &mut FrameBuffer, typed: &str) {
    fb.clear();
    let mut y = draw_menu(fb, 1, 0);
    y = draw_prompt(fb, y + 1, typed, NAME_PLACEHOLDER);
    fb.put_str(0, y + 1, ENTRY_HELP, Tone::Dim);
}

pub fn save_select(fb: &mut FrameBuffer, files: &[String], selected: usize) {
    fb.clear();
    let mut y = draw_menu(fb, 1, 1);
    y += 1;
    if files.is_empty() {
        fb.put_str(3, y, "No Files Found.", Tone::Dim);
        y += 1;
    } else {
        for (i, file) in files.iter().enumerate() {
            let (marker, tone) = if i == selected {
                ("> ", Tone::Accent)
            } else {
                ("  ", Tone::Normal)
            };
            fb.put_str(0, y, &format!("{marker}{file}"), tone);
            y += 1;
        }
    }
    fb.put_str(0, y + 1, LIST_HELP, Tone::Dim);
}

pub fn play(fb: &mut FrameBuffer, record: &GameRecord, pager: &ArchivePager, typed: &str) {
    fb.clear();
    let mut y = 1;
    fb.put_str(0, y, &format!(" Player: {}", record.name), Tone::Normal);
    y += 2;

    if !record.archives.is_empty() {
        let (start, end) = pager.bounds(record.archives.len());
        for (offset, archive) in record.archives[start..end].iter().enumerate() {
            for line in sheet::archive_lines(start + offset + 1, archive) {
                fb.put_str(0, y, &line, Tone::Normal);
                y += 1;
            }
        }
        y = draw_dots(fb, y, pager, record.archives.len());
        y += 1;
    }

    for line in sheet::sheet_lines(record) {
        fb.put_str(0, y, &line, Tone::Normal);
        y += 1;
    }
    y += 1;

    let placeholder = if record.is_complete() {
        NEXT_GAME_PLACEHOLDER
    } else {
        THROW_PLACEHOLDER
    };
    y = draw_prompt(fb, y, typed, placeholder);
    fb.put_str(0, y + 1, PLAY_HELP, Tone::Dim);
}

fn draw_menu(fb: &mut FrameBuffer, start_y: u16, selected: usize) -> u16 {
    let mut y = start_y;
    for (i, (title, desc)) in MENU.iter().enumerate() {
        let (marker, tone) = if i == selected {
            ("┃ ", Tone::Accent)
        } else {
            ("  ", Tone::Normal)
        };
        fb.put_str(0, y, &format!("{marker}{title}"), tone);
        y += 1;
        let desc_tone = if i == selected { Tone::Accent } else { Tone::Dim };
        fb.put_str(0, y, &format!("{marker}{desc}"), desc_tone);
        y += 2;
    }
    y
}

fn draw_prompt(fb: &mut FrameBuffer, y: u16, typed: &str, placeholder: &str) -> u16 {
    if typed.is_empty() {
        fb.put_str(0, y, &format!("> {placeholder}"), Tone::Dim);
    } else {
        fb.put_str(0, y, &format!("> {typed}"), Tone::Normal);
    }
    y + 1
}

fn draw_dots(fb: &mut FrameBuffer, y: u16, pager: &ArchivePager, len: usize) -> u16 {
    let mut x = 2;
    for i in 0..ArchivePager::total_pages(len) {
        let tone = if i == pager.page() {
            Tone::Accent
        } else {
            Tone::Dim
        };
        fb.put_str(x, y, "•", tone);
        x += 1;
    }
    y + 1
}
