use colored::*;

use crate::labels::LabelColor;

pub struct OutputStyle;

impl OutputStyle {
    pub fn label_name(text: &str) -> ColoredString {
        text.bright_cyan()
    }

    pub fn field(text: &str) -> ColoredString {
        text.bright_yellow()
    }

    pub fn repo(text: &str) -> ColoredString {
        text.bright_blue().bold()
    }

    pub fn success(text: &str) -> ColoredString {
        text.green()
    }

    pub fn error(text: &str) -> ColoredString {
        text.red()
    }

    pub fn info(text: &str) -> ColoredString {
        text.blue()
    }

    pub fn muted(text: &str) -> ColoredString {
        text.dimmed()
    }

    /// Render a label color as a swatch using its own RGB value
    pub fn swatch(color: &LabelColor) -> ColoredString {
        let (r, g, b) = color.rgb();
        format!("#{}", color).truecolor(r, g, b)
    }

    /// Quote a label name the way log lines refer to it
    pub fn quoted(name: &str) -> String {
        format!("'{}'", Self::label_name(name))
    }
}

pub fn print_info(message: &str) {
    println!("{} {}", OutputStyle::info("[INFO]"), message);
}

pub fn print_success(message: &str) {
    println!("✅ {}", OutputStyle::success(message));
}

pub fn print_muted(message: &str) {
    println!("{}", OutputStyle::muted(message));
}
