//! Level coloring and ANSI hygiene
//!
//! Terminal lines get the level name wrapped in its color; file lines are
//! always plain. Stripping runs on every file line regardless of settings,
//! since message bodies may carry escape sequences from upstream data.

use crate::core::log_level::Level;
use colored::Colorize;

/// Render a level name for the terminal, colorized when enabled.
///
/// Only the level name is wrapped; the rest of the line stays uncolored so
/// log lines remain greppable.
pub fn paint_level(level: Level, colors_enabled: bool) -> String {
    if !colors_enabled {
        return level.to_str().to_string();
    }
    match level {
        Level::Critical => level.to_str().white().on_red().bold().to_string(),
        other => other.to_str().color(other.color_code()).to_string(),
    }
}

/// Remove ANSI escape sequences from `text`.
///
/// Handles CSI sequences (`ESC [ … final-byte`) and bare two-byte escapes.
pub fn strip_ansi(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch != '\u{1b}' {
            out.push(ch);
            continue;
        }
        match chars.peek() {
            Some('[') => {
                chars.next();
                // Parameter and intermediate bytes run until the final byte
                // in 0x40..=0x7e.
                for seq_ch in chars.by_ref() {
                    if ('\u{40}'..='\u{7e}').contains(&seq_ch) {
                        break;
                    }
                }
            }
            Some(_) => {
                chars.next();
            }
            None => {}
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn force_colors() {
        colored::control::set_override(true);
    }

    #[test]
    fn test_paint_level_enabled_wraps_in_ansi() {
        force_colors();
        let painted = paint_level(Level::Info, true);
        assert!(painted.contains("INFO"));
        assert!(painted.contains('\u{1b}'));
        assert!(painted.ends_with("\u{1b}[0m"));
    }

    #[test]
    fn test_paint_level_disabled_is_plain() {
        force_colors();
        let painted = paint_level(Level::Info, false);
        assert_eq!(painted, "INFO");
    }

    #[test]
    fn test_paint_all_levels() {
        force_colors();
        for level in Level::ALL {
            let painted = paint_level(level, true);
            assert!(painted.contains(level.to_str()));
            assert!(painted.contains('\u{1b}'));
        }
    }

    #[test]
    fn test_strip_ansi_roundtrips_painted_level() {
        force_colors();
        for level in Level::ALL {
            let painted = paint_level(level, true);
            assert_eq!(strip_ansi(&painted), level.to_str());
        }
    }

    #[test]
    fn test_strip_ansi_plain_text_unchanged() {
        assert_eq!(strip_ansi("no escapes here"), "no escapes here");
    }

    #[test]
    fn test_strip_ansi_mixed_sequences() {
        let input = "\u{1b}[1m\u{1b}[31mred bold\u{1b}[0m plain \u{1b}[42mbg\u{1b}[0m";
        assert_eq!(strip_ansi(input), "red bold plain bg");
    }

    #[test]
    fn test_strip_ansi_truncated_sequence_at_end() {
        assert_eq!(strip_ansi("text\u{1b}["), "text");
        assert_eq!(strip_ansi("text\u{1b}"), "text");
    }
}
