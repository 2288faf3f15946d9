//! Text rendering for `victims list`.

use super::record::Record;

const RULE_WIDTH: usize = 50;

/// Render the listing as output lines, 1-indexed in current order.
pub fn render_listing(records: &[Record]) -> Vec<String> {
    if records.is_empty() {
        return vec!["No victims found.".to_string()];
    }

    let mut lines = Vec::with_capacity(records.len() + 3);
    lines.push(String::new());
    lines.push(format!("Total victims: {}", records.len()));
    lines.push("-".repeat(RULE_WIDTH));
    for (idx, record) in records.iter().enumerate() {
        lines.push(format!("{:3}. {}", idx + 1, record));
    }
    lines
}
