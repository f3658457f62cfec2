//! UI rendering components

pub mod answer_panel;
pub mod calibration;
pub mod history_panel;
pub mod layout;
pub mod main_screen;
pub mod prompt_bar;
pub mod quiz_panel;

use ratatui::Frame;

use crate::app::state::{AppState, Screen};
use crate::config::Config;
use crate::history::History;

/// Main draw function
pub fn draw(frame: &mut Frame, state: &AppState, config: &Config, history: &History) {
    let theme = config.active_theme();

    match state.screen {
        Screen::Calibration => {
            calibration::draw(frame, &state.calibration, &theme);
        }
        Screen::Main => {
            main_screen::draw(frame, state, &theme, history);
        }
    }
}
