//! Plain-text rendering of the project table.

use match_state::Dashboard;
use match_state::present::{COLUMNS, row_cells};

/// Render the dashboard's current rows as an aligned text table.
pub fn render(dashboard: &Dashboard) -> String {
    let rows: Vec<Vec<String>> = dashboard
        .rows()
        .iter()
        .map(|project| row_cells(project).into_iter().map(|cell| cell.text).collect())
        .collect();

    let mut widths: Vec<usize> = COLUMNS.iter().map(|title| title.chars().count()).collect();
    for row in &rows {
        for (width, text) in widths.iter_mut().zip(row) {
            *width = (*width).max(text.chars().count());
        }
    }

    let mut out = String::new();
    out.push_str(&format!(
        "Investment: {}   Sort: {}   Rows: {}\n",
        dashboard.investment(),
        dashboard.view().order().as_str(),
        rows.len()
    ));
    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    push_line(&mut out, COLUMNS.iter().copied(), &widths);
    push_line(&mut out, rule.iter().map(String::as_str), &widths);
    for row in &rows {
        push_line(&mut out, row.iter().map(String::as_str), &widths);
    }
    out
}

fn push_line<'a>(out: &mut String, cells: impl Iterator<Item = &'a str>, widths: &[usize]) {
    let padded: Vec<String> = cells
        .zip(widths)
        .map(|(text, width)| {
            let pad = width.saturating_sub(text.chars().count());
            format!("{text}{}", " ".repeat(pad))
        })
        .collect();
    out.push_str(padded.join(" | ").trim_end());
    out.push('\n');
}
