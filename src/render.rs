//! Plain-text rendering of the view models.

use filamentdb_core::PropertyInfo;
use filamentdb_settings::DisplaySettings;
use filamentdb_ui::{CardView, Cell, GridView, TableView, ViewModel};
use std::fmt::Write;

const FILLED: char = '█';
const EMPTY: char = '░';
const TICK: char = '┊';

/// Draw a bar `width` characters wide. Values beyond the scale get a
/// trailing `+`.
pub fn bar(percent: f64, ticks: &[f64], width: usize) -> String {
    let cells = (percent.max(0.0) / 100.0 * width as f64).round() as usize;
    let tick_cols: Vec<usize> = ticks
        .iter()
        .map(|t| (t / 100.0 * width as f64).round() as usize)
        .collect();

    let mut out = String::with_capacity(width + 3);
    out.push('[');
    for i in 0..width {
        out.push(if i < cells {
            FILLED
        } else if tick_cols.contains(&i) {
            TICK
        } else {
            EMPTY
        });
    }
    out.push(']');
    if cells > width {
        out.push('+');
    }
    out
}

fn fit(text: &str, width: usize) -> String {
    let text = text.replace('\n', "; ");
    let len = text.chars().count();
    if len <= width {
        format!("{}{}", text, " ".repeat(width - len))
    } else {
        let mut cut: String = text.chars().take(width.saturating_sub(1)).collect();
        cut.push('…');
        cut
    }
}

fn checkbox(shown: bool, selected: bool) -> &'static str {
    match (shown, selected) {
        (false, _) => "",
        (true, true) => "[x] ",
        (true, false) => "[ ] ",
    }
}

fn card_line(cell: &Cell, settings: &DisplaySettings) -> String {
    match cell {
        Cell::Bar {
            label,
            percent,
            ticks,
        } => format!("{} {}", bar(*percent, ticks, settings.bar_width), label),
        other => other.display_text().replace('\n', "; "),
    }
}

fn render_card(out: &mut String, card: &CardView, settings: &DisplaySettings) {
    let _ = writeln!(out, "{}{}", checkbox(card.show_checkbox, card.selected), card.name);
    if let Some(summary) = &card.summary {
        let _ = writeln!(out, "    {}", summary);
    }
    for field in &card.fields {
        let _ = writeln!(
            out,
            "    {} {}",
            fit(field.label, settings.column_width),
            card_line(&field.cell, settings)
        );
    }
    if !card.traits.is_empty() {
        let _ = writeln!(out, "    {}", card.traits.join(" · "));
    }
}

fn compare_footer(out: &mut String, compare_mode: bool, enabled: bool, selected: usize, shown: usize) {
    if compare_mode {
        let _ = writeln!(out, "Comparing {} materials", shown);
    } else if enabled {
        let _ = writeln!(out, "{} selected; compare available", selected);
    } else if selected > 0 {
        let _ = writeln!(out, "{} selected; select at least 2 to compare", selected);
    }
}

pub fn grid(view: &GridView, settings: &DisplaySettings) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{} materials ({})", view.family, view.cards.len());
    let _ = writeln!(out);
    for card in &view.cards {
        render_card(&mut out, card, settings);
        let _ = writeln!(out);
    }
    if view.is_empty() {
        let _ = writeln!(out, "No materials to show");
    }
    if view.selectable {
        compare_footer(
            &mut out,
            view.compare_mode,
            view.compare_enabled,
            view.selected_count,
            view.cards.len(),
        );
    }
    out
}

fn table_cell(cell: &Cell) -> String {
    match cell {
        Cell::Bar { label, percent, .. } if *percent > 100.0 => {
            format!("{} ({:.0}%+)", label, percent)
        }
        Cell::Bar { label, percent, .. } => format!("{} ({:.0}%)", label, percent),
        other => other.display_text(),
    }
}

pub fn table(view: &TableView, settings: &DisplaySettings) -> String {
    let width = settings.column_width;
    let mut out = String::new();

    let nav: Vec<String> = view
        .nav
        .iter()
        .map(|id| {
            if view.expanded == Some(*id) {
                format!("[{}]", id)
            } else {
                id.to_string()
            }
        })
        .collect();
    let _ = writeln!(out, "{} | {}", view.family, nav.join(" | "));
    let _ = writeln!(out);

    let mut header = fit("", width);
    for column in &view.columns {
        let title = format!("{}{}", checkbox(column.show_checkbox, column.selected), column.name);
        header.push(' ');
        header.push_str(&fit(&title, width));
    }
    let _ = writeln!(out, "{}", header.trim_end());

    for section in &view.sections {
        let _ = writeln!(out, "── {} ──", section.title);
        for row in &section.rows {
            let label = if row.info_available() {
                format!("{} (i)", row.label)
            } else {
                row.label.to_string()
            };
            let mut line = fit(&label, width);
            for cell in &row.cells {
                line.push(' ');
                line.push_str(&fit(&table_cell(cell), width));
            }
            let _ = writeln!(out, "{}", line.trim_end());
        }
    }

    if view.columns.is_empty() {
        let _ = writeln!(out, "No materials to show");
    }
    compare_footer(
        &mut out,
        view.compare_mode,
        view.compare_enabled,
        view.selected_count,
        view.columns.len(),
    );

    if let Some(info) = view.modal {
        let _ = writeln!(out);
        out.push_str(&property_info(info));
    }
    out
}

pub fn property_info(info: &PropertyInfo) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", info.title);
    let _ = writeln!(out, "{}", "=".repeat(info.title.chars().count()));
    let _ = writeln!(out, "{}", info.description);
    let _ = writeln!(out);
    let _ = writeln!(out, "Measurement: {}", info.measurement);
    let _ = writeln!(out, "Why it matters: {}", info.importance);
    if let Some(tips) = info.tips {
        let _ = writeln!(out);
        let _ = writeln!(out, "Tips:");
        for tip in tips {
            let _ = writeln!(out, "  - {}", tip);
        }
    }
    out
}

pub fn view(model: &ViewModel, settings: &DisplaySettings) -> String {
    match model {
        ViewModel::Grid(g) => grid(g, settings),
        ViewModel::Table(t) => table(t, settings),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bar_fill_and_ticks() {
        assert_eq!(bar(50.0, &[], 10), "[█████░░░░░]");
        assert_eq!(bar(0.0, &[20.0, 40.0, 60.0, 80.0], 10), "[░░┊░┊░┊░┊░]");
        assert_eq!(bar(150.0, &[], 4), "[████]+");
    }

    #[test]
    fn test_table_cell_marks_overflow() {
        let bar = |percent| Cell::Bar {
            label: "300 ℃".to_string(),
            percent,
            ticks: Vec::new(),
        };
        assert_eq!(table_cell(&bar(100.0)), "300 ℃ (100%)");
        assert_eq!(table_cell(&bar(120.0)), "300 ℃ (120%+)");
        assert_eq!(table_cell(&Cell::Text("N/A".to_string())), "N/A");
    }

    #[test]
    fn test_fit_pads_and_truncates() {
        assert_eq!(fit("PLA", 5), "PLA  ");
        assert_eq!(fit("Polycarbonate", 6), "Polyc…");
        assert_eq!(fit("a\nb", 4), "a; b");
    }
}
