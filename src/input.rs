//! Sources of raw input text for [`crate::parse_input`].

use std::io::BufRead;

/// Strip a leading `?addr=` (or `addr=`) from a URL query string.
///
/// # Examples
/// ```
/// use ipv4_calc::input_from_query;
/// assert_eq!(input_from_query("?addr=10.0.0.1/8"), "10.0.0.1/8");
/// assert_eq!(input_from_query("10.0.0.1"), "10.0.0.1");
/// ```
pub fn input_from_query(query: &str) -> &str {
    let query = query.strip_prefix('?').unwrap_or(query);
    query.strip_prefix("addr=").unwrap_or(query)
}

/// Read one input per line, trimmed, skipping blank lines.
pub fn read_lines<R: BufRead>(reader: R) -> Result<Vec<String>, std::io::Error> {
    let mut inputs = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let line = line.trim();
        if !line.is_empty() {
            inputs.push(line.to_string());
        }
    }
    Ok(inputs)
}
