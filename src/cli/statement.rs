use super::ui;
use crate::core::ledger::MovementKind;
use crate::core::{AccountView, AppConfig, Registry, Session};
use anyhow::Result;
use chrono::Local;
use comfy_table::{Cell, Color};

impl AccountView {
    /// Renders the welcome line, movements (newest first), balance and summary.
    pub fn display_as_table(&self, currency: &str) -> String {
        let mut table = ui::new_styled_table();

        table.set_header(vec![
            ui::header_cell("#"),
            ui::header_cell("Type"),
            ui::header_cell(&format!("Amount ({currency})")),
        ]);

        for row in self.movements.iter().rev() {
            let kind_color = match row.kind {
                MovementKind::Deposit => Color::Green,
                MovementKind::Withdrawal => Color::Red,
            };
            table.add_row(vec![
                ui::number_cell(row.index),
                Cell::new(row.kind.label()).fg(kind_color),
                ui::money_cell(row.value, currency),
            ]);
        }

        let order = if self.sorted {
            "sorted ascending"
        } else {
            "chronological"
        };

        let mut output = format!(
            "{}\n{}\n\n",
            ui::style_text(&self.welcome, ui::StyleType::Title),
            ui::style_text(
                &format!("As of {} ({order})", Local::now().format("%d/%m/%Y")),
                ui::StyleType::Subtle
            )
        );

        output.push_str(&format!(
            "Current balance: {}\n\n",
            ui::style_text(
                &ui::format_money(self.balance, currency),
                ui::StyleType::TotalValue
            )
        ));

        output.push_str(&table.to_string());

        output.push_str(&format!(
            "\n\n{} {}  {} {}  {} {}",
            ui::style_text("In", ui::StyleType::TotalLabel),
            ui::format_money(self.summary.income, currency),
            ui::style_text("Out", ui::StyleType::TotalLabel),
            ui::format_money(self.summary.outgoing, currency),
            ui::style_text("Interest", ui::StyleType::TotalLabel),
            ui::format_money(self.summary.interest, currency),
        ));

        output
    }
}

/// Logs in once and prints the statement, as a table or as JSON.
pub fn run(config: &AppConfig, username: &str, pin: &str, sort: bool, json: bool) -> Result<()> {
    let registry = Registry::from_seeds(&config.accounts);
    let mut session = Session::new(config.rules());

    let mut view = session.login(&registry, username, pin)?;
    if sort {
        view = session.toggle_sort(&registry)?;
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&view)?);
    } else {
        println!("{}", view.display_as_table(&config.currency));
    }
    Ok(())
}
