use owo_colors::{OwoColorize, Stream};

use crate::board::BoardViewModel;
use crate::error::Result;
use crate::meta::ColorToken;

pub mod board;

pub use board::{format_avatar, render_board, render_options};

/// Terminal symbol for a glyph reference.
///
/// Unknown references draw as nothing so new glyphs never break output.
pub fn glyph_symbol(glyph: &str) -> &'static str {
    match glyph {
        "priority-urgent" => "!!",
        "priority-high" => "▮▮▮",
        "priority-medium" => "▮▮▯",
        "priority-low" => "▮▯▯",
        "priority-none" => "···",
        "priority-unknown" => "?",
        "status-todo" => "○",
        "status-in-progress" => "◐",
        "status-backlog" => "◌",
        "status-done" => "●",
        "status-cancelled" => "⊘",
        _ => "",
    }
}

/// Apply a color token to text when `use_color` is set and stdout supports it.
pub fn paint(text: &str, color: ColorToken, use_color: bool) -> String {
    if !use_color {
        return text.to_string();
    }
    match color {
        ColorToken::Default => text.to_string(),
        ColorToken::Dimmed => text
            .if_supports_color(Stream::Stdout, |t| t.dimmed())
            .to_string(),
        ColorToken::Red => text
            .if_supports_color(Stream::Stdout, |t| t.red())
            .to_string(),
        ColorToken::Orange => text
            .if_supports_color(Stream::Stdout, |t| t.truecolor(230, 126, 34))
            .to_string(),
        ColorToken::Yellow => text
            .if_supports_color(Stream::Stdout, |t| t.yellow())
            .to_string(),
        ColorToken::Blue => text
            .if_supports_color(Stream::Stdout, |t| t.blue())
            .to_string(),
        ColorToken::Green => text
            .if_supports_color(Stream::Stdout, |t| t.green())
            .to_string(),
        ColorToken::Gray => text
            .if_supports_color(Stream::Stdout, |t| t.bright_black())
            .to_string(),
    }
}

/// Serialize the board for machine consumption
pub fn board_to_json(vm: &BoardViewModel) -> Result<String> {
    Ok(serde_json::to_string_pretty(vm)?)
}
