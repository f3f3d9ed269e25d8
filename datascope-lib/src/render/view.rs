//! Display-state resolution and plain-text rendering

use crate::fetch::FetchSnapshot;
use crate::render::TableModel;

/// What a panel should display right now.
///
/// Resolved from a [`FetchSnapshot`] with fixed precedence: loading beats
/// error beats the no-data placeholder beats the table.
#[derive(Debug, Clone, PartialEq)]
pub enum TableView {
    /// A request is in flight.
    Loading,
    /// The last cycle failed.
    Error(String),
    /// Nothing to show: no dataset yet, or an empty one.
    Empty,
    /// A derived table ready to render.
    Table(TableModel),
}

impl TableView {
    /// Resolves the display state for a snapshot.
    pub fn from_snapshot(snapshot: &FetchSnapshot) -> Self {
        if snapshot.is_loading {
            return TableView::Loading;
        }
        if let Some(error) = &snapshot.error {
            return TableView::Error(error.clone());
        }
        match &snapshot.data {
            Some(items) if !items.is_empty() => TableView::Table(TableModel::derive(items)),
            _ => TableView::Empty,
        }
    }
}

/// Renders a view as plain terminal text.
///
/// Tables come out as a padded grid with a dashed separator under the
/// header row. Cell widths are measured in characters.
pub fn render_text(view: &TableView) -> String {
    match view {
        TableView::Loading => "Loading...".to_string(),
        TableView::Error(message) => format!("Error: {message}"),
        TableView::Empty => "No data available".to_string(),
        TableView::Table(model) => render_table_text(model),
    }
}

fn render_table_text(model: &TableModel) -> String {
    if model.columns().is_empty() {
        return String::new();
    }

    let mut widths: Vec<usize> = model
        .columns()
        .iter()
        .map(|column| column.header().chars().count())
        .collect();
    for row in model.rows() {
        for (index, cell) in row.iter().enumerate() {
            widths[index] = widths[index].max(cell.chars().count());
        }
    }

    let mut out = String::new();
    let headers: Vec<&str> = model.columns().iter().map(|c| c.header()).collect();
    push_row(&mut out, &headers, &widths);
    let dashes: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    let dash_refs: Vec<&str> = dashes.iter().map(String::as_str).collect();
    push_row(&mut out, &dash_refs, &widths);
    for row in model.rows() {
        let cells: Vec<&str> = row.iter().map(String::as_str).collect();
        push_row(&mut out, &cells, &widths);
    }
    out
}

fn push_row(out: &mut String, cells: &[&str], widths: &[usize]) {
    let last = cells.len().saturating_sub(1);
    for (index, cell) in cells.iter().enumerate() {
        if index < last {
            let pad = widths[index].saturating_sub(cell.chars().count());
            out.push_str(cell);
            out.push_str(&" ".repeat(pad + 2));
        } else {
            out.push_str(cell);
        }
    }
    out.push('\n');
}
