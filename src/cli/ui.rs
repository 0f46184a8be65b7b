use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use console::style;

/// Defines different styles for text elements.
pub enum StyleType {
    Title,
    TotalLabel,
    TotalValue,
    Error,
    Subtle,
}

/// Applies a consistent style to a string.
pub fn style_text(text: &str, style_type: StyleType) -> String {
    let styled = match style_type {
        StyleType::Title => style(text).bold().underlined(),
        StyleType::TotalLabel => style(text).bold(),
        StyleType::TotalValue => style(text).green().bold(),
        StyleType::Error => style(text).red(),
        StyleType::Subtle => style(text).dim(),
    };
    styled.to_string()
}

/// Formats an amount with two decimals followed by the currency symbol.
pub fn format_money(value: f64, currency: &str) -> String {
    format!("{value:.2}{currency}")
}

/// Creates a new `comfy_table::Table` with standard styling.
pub fn new_styled_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

/// Creates a styled header cell for a table.
pub fn header_cell(text: &str) -> Cell {
    Cell::new(text)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

/// Right-aligned amount, green for money in and red for money out.
pub fn money_cell(value: f64, currency: &str) -> Cell {
    let color = if value > 0.0 { Color::Green } else { Color::Red };
    Cell::new(format_money(value, currency))
        .fg(color)
        .set_alignment(CellAlignment::Right)
}

/// Right-aligned plain cell for counts and indices.
pub fn number_cell(value: usize) -> Cell {
    Cell::new(value).set_alignment(CellAlignment::Right)
}
