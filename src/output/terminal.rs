//! Terminal output utilities.
//!
//! Each address field is shown in dotted-decimal and as four binary octets.

use crate::models::{to_text, ParseResult};
use colored::Colorize;
use itertools::Itertools;

/// Width of the label column, including the trailing colon.
const LABEL_WIDTH: usize = 11;
/// Width of the dotted-decimal column.
const VALUE_WIDTH: usize = 16;

/// Format a value as four zero-padded binary octets separated by spaces.
///
/// # Examples
/// ```
/// use ipv4_calc::output::to_binary;
/// assert_eq!(to_binary(0xC0A8010A), "11000000 10101000 00000001 00001010");
/// ```
pub fn to_binary(value: u32) -> String {
    value
        .to_be_bytes()
        .iter()
        .map(|octet| format!("{octet:08b}"))
        .join(" ")
}

fn format_row(label: &str, value: String, binary: &str, is_private: bool) -> String {
    let label = format!("{label}:");
    // pad before coloring so escape codes don't count against the width
    let value = format!("{value:<VALUE_WIDTH$}");
    let value = if is_private {
        value.yellow().bold()
    } else {
        value.cyan()
    };
    format!("{label:<LABEL_WIDTH$}{value} {binary}")
}

/// Render every field of `result`, one per line.
pub fn render(result: &ParseResult) -> String {
    let mut lines = Vec::new();

    for (label, value) in result.fields() {
        lines.push(format_row(
            label,
            to_text(value),
            &to_binary(value),
            result.is_private,
        ));
    }
    lines.push(format_row(
        "Hosts",
        result.host_count.to_string(),
        &format!("{:b}", result.host_count),
        result.is_private,
    ));

    let class = if result.is_private {
        "private".yellow().bold()
    } else {
        "public".normal()
    };
    lines.push(format!("{:<LABEL_WIDTH$}{class}", "Range:"));

    let status = if result.status.is_ok() {
        result.status.to_string().green()
    } else {
        format!("{} input rejected, showing defaults", result.status).on_red()
    };
    lines.push(format!("{:<LABEL_WIDTH$}{status}", "Status:"));

    lines.join("\n")
}
