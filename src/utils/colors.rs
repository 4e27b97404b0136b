//! ANSI color helpers for chart output.
use ansi_term::Colour;

use crate::models::sleep_state::SleepState;

/// Glyph drawn for each chart cell, readable without colors.
pub fn state_glyph(state: SleepState) -> char {
    match state {
        SleepState::Asleep => '█',
        SleepState::Awake => '░',
    }
}

pub fn state_colour(state: SleepState) -> Colour {
    match state {
        SleepState::Asleep => Colour::Blue,
        SleepState::Awake => Colour::Yellow,
    }
}

pub fn paint_state(text: &str, state: SleepState, color: bool) -> String {
    if color {
        state_colour(state).paint(text).to_string()
    } else {
        text.to_string()
    }
}

/// Colors are on unless disabled by flag or by the `NO_COLOR` convention.
pub fn color_enabled(no_color_flag: bool) -> bool {
    !no_color_flag && std::env::var_os("NO_COLOR").is_none()
}
