//! Terminal bowling scorekeeper (default binary).
//!
//! Scene-driven event loop: mode select, then name entry or save select,
//! then score entry. The engine crate does all scoring; this file routes
//! keys, draws screens, and owns the clock, the session log and the save
//! directory.

mod logging;

use std::path::{Path, PathBuf};

use anyhow::Result;
use chrono::Local;
use crossterm::event::{self, Event, KeyEvent, KeyEventKind};

use logging::SessionLog;
use tui_bowling_core::{GameRecord, ThrowOutcome};
use tui_bowling_input::{
    map_nav_key, should_cancel, should_quit, FieldEvent, NavAction, TextField,
};
use tui_bowling_store as store;
use tui_bowling_term::{screens, ArchivePager, FrameBuffer, TerminalRenderer};
use tui_bowling_types::{NAME_INPUT_LIMIT, THROW_INPUT_LIMIT};

const LOG_DIR: &str = "logs";

fn main() -> Result<()> {
    let mut log = SessionLog::open(Path::new(LOG_DIR))?;
    log.info("Launch the app.");

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, log);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer, log: SessionLog) -> Result<()> {
    let mut app = App::new(log);
    let mut fb = FrameBuffer::new(0, 0);

    loop {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        fb.resize(w, h);
        app.draw(&mut fb);
        term.draw(&fb)?;

        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if !app.handle_key(key) {
                    return Ok(());
                }
            }
            Event::Resize(_, _) => term.invalidate(),
            _ => {}
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Scene {
    ModeSelect,
    NameEntry,
    SaveSelect,
    Play,
}

struct App {
    scene: Scene,
    record: GameRecord,
    menu_cursor: usize,
    saves: Vec<PathBuf>,
    save_cursor: usize,
    name_field: TextField,
    throw_field: TextField,
    pager: ArchivePager,
    log: SessionLog,
}

impl App {
    fn new(log: SessionLog) -> Self {
        Self {
            scene: Scene::ModeSelect,
            record: GameRecord::fresh(default_name()),
            menu_cursor: 0,
            saves: Vec::new(),
            save_cursor: 0,
            name_field: TextField::new(NAME_INPUT_LIMIT),
            throw_field: TextField::new(THROW_INPUT_LIMIT),
            pager: ArchivePager::new(),
            log,
        }
    }

    fn draw(&self, fb: &mut FrameBuffer) {
        match self.scene {
            Scene::ModeSelect => screens::mode_select(fb, self.menu_cursor),
            Scene::NameEntry => screens::name_entry(fb, &self.name_field.value()),
            Scene::SaveSelect => {
                let names: Vec<String> = self.saves.iter().map(|p| display_name(p)).collect();
                screens::save_select(fb, &names, self.save_cursor);
            }
            Scene::Play => {
                screens::play(fb, &self.record, &self.pager, &self.throw_field.value())
            }
        }
    }

    /// Returns false when the session should end.
    fn handle_key(&mut self, key: KeyEvent) -> bool {
        match self.scene {
            Scene::ModeSelect => self.handle_mode_select(key),
            Scene::NameEntry => self.handle_name_entry(key),
            Scene::SaveSelect => self.handle_save_select(key),
            Scene::Play => self.handle_play(key),
        }
    }

    fn handle_mode_select(&mut self, key: KeyEvent) -> bool {
        if should_quit(key) {
            self.log.info("Close the app.");
            return false;
        }
        match map_nav_key(key) {
            Some(NavAction::Up) => self.menu_cursor = self.menu_cursor.saturating_sub(1),
            Some(NavAction::Down) => {
                self.menu_cursor = (self.menu_cursor + 1).min(screens::MENU_LEN - 1);
            }
            Some(NavAction::Submit) => {
                self.log.info("Current mode is \"Mode Selection\".");
                if self.menu_cursor == 0 {
                    self.log.info("\"Data Generation\" mode is selected.");
                    self.scene = Scene::NameEntry;
                } else {
                    self.log.info("\"Data Selection\" mode is selected.");
                    self.saves = store::list_saves(Path::new(store::DATA_DIR));
                    self.save_cursor = 0;
                    self.scene = Scene::SaveSelect;
                }
            }
            _ => {}
        }
        true
    }

    fn handle_name_entry(&mut self, key: KeyEvent) -> bool {
        if should_cancel(key) {
            self.log.info("Close the app.");
            return false;
        }
        if self.name_field.handle_key(key.code) == FieldEvent::Submitted {
            let typed = self.name_field.value();
            self.log.info(format!("\"{typed}\" is typed."));
            self.record = GameRecord::fresh(default_name());
            self.record.set_name(&typed);
            self.name_field.reset();
            self.pager = ArchivePager::new();
            self.scene = Scene::Play;
        }
        true
    }

    fn handle_save_select(&mut self, key: KeyEvent) -> bool {
        if should_quit(key) {
            self.log.info("Close the app.");
            return false;
        }
        match map_nav_key(key) {
            Some(NavAction::Up) => self.save_cursor = self.save_cursor.saturating_sub(1),
            Some(NavAction::Down) => {
                self.save_cursor = (self.save_cursor + 1).min(self.saves.len().saturating_sub(1));
            }
            Some(NavAction::Submit) => {
                if let Some(path) = self.saves.get(self.save_cursor) {
                    self.log.info("Current mode is \"Data Selection\".");
                    match store::load(path) {
                        Ok((record, clean)) => {
                            self.record = record;
                            let report = self.record.repair(&default_name());
                            if !clean || !report.untouched() {
                                self.log.error(
                                    "Found an invalid value. Initialize to appropriate values.",
                                );
                                self.record.rescore();
                            }
                            self.pager.last(self.record.archives.len());
                            self.scene = Scene::Play;
                        }
                        Err(err) => self.log.error(err.to_string()),
                    }
                }
            }
            _ => {}
        }
        true
    }

    fn handle_play(&mut self, key: KeyEvent) -> bool {
        // A finished game rolls into the archive before the next key does
        // anything else.
        if self.record.is_complete() {
            self.log.info("Game start.");
            self.record.archive_and_reset(&archive_stamp());
            self.pager.last(self.record.archives.len());
        }

        if should_quit(key) {
            match store::save(&self.record, Path::new(store::DATA_DIR)) {
                Ok(path) => self.log.info(format!("Saved \"{}\".", path.display())),
                Err(err) => self.log.error(err.to_string()),
            }
            self.log.info("Close the app.");
            return false;
        }

        match map_nav_key(key) {
            Some(NavAction::Left) => {
                self.pager.prev();
                return true;
            }
            Some(NavAction::Right) => {
                self.pager.next(self.record.archives.len());
                return true;
            }
            _ => {}
        }

        if self.throw_field.handle_key(key.code) == FieldEvent::Submitted {
            let token = self.throw_field.value();
            self.log.info(format!("\"{token}\" is typed."));
            match self.record.record_throw(&token) {
                ThrowOutcome::Recorded => self.log.info("Update Score."),
                ThrowOutcome::Rejected => self.log.warn("Invalid value. Type again."),
            }
            self.throw_field.reset();
            if self.record.is_complete() {
                self.log.info("Game over.");
            }
        }
        true
    }
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}

fn default_name() -> String {
    Local::now().format("%Y%m%d-%H%M%S").to_string()
}

fn archive_stamp() -> String {
    Local::now().format("%Y/%m/%d %H:%M:%S %z").to_string()
}
