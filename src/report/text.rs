use crate::model::PredictionRecord;
use crate::pipeline::grid::DisplayGrid;
use crate::report::{ExploreView, PredictionsView, SourceTargetGrids};

pub fn render_explore_text(view: &ExploreView) -> String {
    let mut out = String::new();
    let Some(selected) = &view.selected else {
        out.push_str("Select a hormone\n");
        return out;
    };
    out.push_str(selected);
    out.push_str("\n\n");

    if let Some(SourceTargetGrids { source, target }) = &view.tissues {
        push_section(&mut out, "Source Tissues", source);
        push_section(&mut out, "Target Tissues", target);
    }
    if let Some(SourceTargetGrids { source, target }) = &view.genes {
        push_section(&mut out, "Source Genes", source);
        push_section(&mut out, "Target Genes", target);
    }
    out
}

fn push_section(out: &mut String, title: &str, grid: &DisplayGrid) {
    let heading = format!("{} ({})", title, grid.filled());
    out.push_str(&heading);
    out.push('\n');
    out.push_str(&"-".repeat(heading.len()));
    out.push('\n');
    if grid.is_empty() {
        out.push_str("(none)\n\n");
        return;
    }
    out.push_str(&render_grid_text(grid));
    out.push('\n');
}

/// Left-aligned columns, each as wide as its longest cell.
pub fn render_grid_text(grid: &DisplayGrid) -> String {
    let mut widths = vec![0usize; grid.width];
    for row in &grid.rows {
        for (i, cell) in row.iter().enumerate() {
            widths[i] = widths[i].max(cell.chars().count());
        }
    }

    let mut out = String::new();
    for row in &grid.rows {
        let mut line = String::new();
        for (i, cell) in row.iter().enumerate() {
            if i > 0 {
                line.push_str("  ");
            }
            line.push_str(cell);
            let pad = widths[i] - cell.chars().count();
            line.extend(std::iter::repeat_n(' ', pad));
        }
        out.push_str(line.trim_end());
        out.push('\n');
    }
    out
}

pub fn render_predictions_text(view: &PredictionsView) -> String {
    let mut out = String::new();
    out.push_str(&render_table_text(&view.columns, &view.rows));
    if view.page.page_count > 1 {
        out.push_str(&format!(
            "page {}/{} ({} rows)\n",
            view.page.page + 1,
            view.page.page_count,
            view.page.total_rows
        ));
    }
    if let Some(summary) = &view.summary {
        out.push('\n');
        out.push_str(summary);
        out.push('\n');
    }
    out
}

pub fn render_table_text(columns: &[&str; 4], rows: &[PredictionRecord]) -> String {
    let cells: Vec<[String; 4]> = rows
        .iter()
        .map(|r| {
            [
                r.category.clone(),
                r.entity.clone(),
                r.score.to_string(),
                r.probability.to_string(),
            ]
        })
        .collect();

    let mut widths: [usize; 4] = (*columns).map(|c| c.chars().count());
    for row in &cells {
        for (i, cell) in row.iter().enumerate() {
            widths[i] = widths[i].max(cell.chars().count());
        }
    }

    let mut out = String::new();
    let header: Vec<String> = columns
        .iter()
        .enumerate()
        .map(|(i, c)| format!("{:<w$}", c, w = widths[i]))
        .collect();
    out.push_str(header.join("  ").trim_end());
    out.push('\n');
    let rule: Vec<String> = widths.iter().map(|&w| "-".repeat(w)).collect();
    out.push_str(&rule.join("  "));
    out.push('\n');

    if cells.is_empty() {
        out.push_str("(no matching predictions)\n");
        return out;
    }
    for row in &cells {
        let line: Vec<String> = row
            .iter()
            .enumerate()
            .map(|(i, c)| format!("{:<w$}", c, w = widths[i]))
            .collect();
        out.push_str(line.join("  ").trim_end());
        out.push('\n');
    }
    out
}
