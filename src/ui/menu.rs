//! Main menu state: the selected entry and the player name being edited.

use bevy::prelude::*;

use crate::game::MAX_PLAYER_NAME_LEN;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum MenuAction {
    StartGame,
    HighScores,
    Exit,
}

impl MenuAction {
    pub const ALL: [MenuAction; 3] = [MenuAction::StartGame, MenuAction::HighScores, MenuAction::Exit];

    pub fn label(self) -> &'static str {
        match self {
            MenuAction::StartGame => "Start Game",
            MenuAction::HighScores => "High Scores",
            MenuAction::Exit => "Exit",
        }
    }
}

#[derive(Resource, Debug)]
pub struct MainMenu {
    selected: usize,
    player_name: String,
    /// Restored if editing leaves the name empty.
    name_before_edit: String,
    editing_name: bool,
}

impl MainMenu {
    pub fn new(player_name: &str) -> Self {
        MainMenu {
            selected: 0,
            player_name: player_name.to_string(),
            name_before_edit: player_name.to_string(),
            editing_name: false,
        }
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn action(&self) -> MenuAction {
        MenuAction::ALL[self.selected]
    }

    pub fn player_name(&self) -> &str {
        &self.player_name
    }

    pub fn is_editing_name(&self) -> bool {
        self.editing_name
    }

    pub fn select_previous(&mut self) {
        let len = MenuAction::ALL.len();
        self.selected = (self.selected + len - 1) % len;
    }

    pub fn select_next(&mut self) {
        self.selected = (self.selected + 1) % MenuAction::ALL.len();
    }

    pub fn start_editing_name(&mut self) {
        self.name_before_edit = self.player_name.clone();
        self.editing_name = true;
    }

    pub fn finish_editing_name(&mut self) {
        if self.player_name.is_empty() {
            self.player_name = self.name_before_edit.clone();
        }
        self.editing_name = false;
    }

    /// Appends typed text, keeping only alphanumeric characters and the
    /// length limit.
    pub fn type_text(&mut self, text: &str) {
        for ch in text.chars().filter(|ch| ch.is_alphanumeric()) {
            if self.player_name.chars().count() >= MAX_PLAYER_NAME_LEN {
                break;
            }
            self.player_name.push(ch);
        }
    }

    pub fn backspace(&mut self) {
        self.player_name.pop();
    }
}
