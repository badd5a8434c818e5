use std::time::Duration;

use chrono::Local;
use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use console::style;
use indicatif::{ProgressBar, ProgressStyle};

use crate::core::presenter::Presenter;

/// Defines different styles for text elements.
pub enum StyleType {
    Title,
    Value,
    Error,
    Subtle,
}

/// Applies a consistent style to a string.
pub fn style_text(text: &str, style_type: StyleType) -> String {
    let styled = match style_type {
        StyleType::Title => style(text).bold().underlined(),
        StyleType::Value => style(text).green().bold(),
        StyleType::Error => style(text).red(),
        StyleType::Subtle => style(text).dim(),
    };
    styled.to_string()
}

/// Creates a new `indicatif` spinner with standard styling.
pub fn new_spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap(),
    );
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}

/// Creates a styled header cell for a table.
pub fn header_cell(text: &str) -> Cell {
    Cell::new(text)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

/// Renders a numbered currency list with the selected row highlighted.
/// Row numbers are 1-based, matching the indices the user types.
pub fn currency_table(currencies: &[String], selected: usize) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec![header_cell("#"), header_cell("Currency")]);

    for (i, code) in currencies.iter().enumerate() {
        let number = Cell::new(i + 1).set_alignment(CellAlignment::Right);
        let code_cell = if i == selected {
            Cell::new(format!("{code} *"))
                .fg(Color::Green)
                .add_attribute(Attribute::Bold)
        } else {
            Cell::new(code)
        };
        table.add_row(vec![number, code_cell]);
    }

    table
}

/// Terminal implementation of the controller's presentation seam.
///
/// Loading states are indicatif spinners; starting a new one clears
/// whatever spinner or result line preceded it.
pub struct ConsolePresenter {
    spinner: Option<ProgressBar>,
}

impl ConsolePresenter {
    pub fn new() -> Self {
        ConsolePresenter { spinner: None }
    }

    fn start_spinner(&mut self, message: &str) {
        self.stop_spinner();
        self.spinner = Some(new_spinner(message));
    }

    fn stop_spinner(&mut self) {
        if let Some(spinner) = self.spinner.take() {
            spinner.finish_and_clear();
        }
    }
}

impl Default for ConsolePresenter {
    fn default() -> Self {
        Self::new()
    }
}

impl Presenter for ConsolePresenter {
    fn show_bootstrap_loading(&mut self) {
        self.start_spinner("Fetching available currencies...");
    }

    fn show_bootstrap_error(&mut self, detail: &str) {
        self.stop_spinner();
        println!(
            "{}",
            style_text(
                &format!("Could not load currencies: {detail}"),
                StyleType::Error
            )
        );
        println!(
            "{}",
            style_text("Press 'r' to retry or 'q' to quit.", StyleType::Subtle)
        );
    }

    fn render_base_list(&mut self, currencies: &[String], selected: usize) {
        self.stop_spinner();
        println!("\n{}", style_text("Base currency", StyleType::Title));
        println!("{}", currency_table(currencies, selected));
    }

    fn render_target_list(&mut self, currencies: &[String], selected: usize) {
        self.stop_spinner();
        println!("\n{}", style_text("Target currency", StyleType::Title));
        println!("{}", currency_table(currencies, selected));
    }

    fn show_lookup_loading(&mut self) {
        self.start_spinner("Fetching rate...");
    }

    fn render_result(&mut self, text: &str) {
        self.stop_spinner();
        let timestamp = Local::now().format("%H:%M:%S");
        println!(
            "{} {}",
            style_text(&format!("[{timestamp}]"), StyleType::Subtle),
            style_text(text, StyleType::Value)
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_currency_table_marks_selection() {
        let currencies = vec!["EUR".to_string(), "USD".to_string()];
        let rendered = currency_table(&currencies, 1).to_string();

        assert!(rendered.contains("EUR"));
        assert!(rendered.contains("USD *"));
        // 1-based row numbers
        assert!(rendered.contains('1'));
        assert!(rendered.contains('2'));
    }
}
