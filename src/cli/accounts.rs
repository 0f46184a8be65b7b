use super::ui;
use crate::core::ledger;
use crate::core::registry::Registry;
use comfy_table::Cell;

/// Table of every account with its username and current balance.
pub fn display_registry(registry: &Registry, currency: &str) -> String {
    let mut table = ui::new_styled_table();

    table.set_header(vec![
        ui::header_cell("Owner"),
        ui::header_cell("Username"),
        ui::header_cell("Movements"),
        ui::header_cell(&format!("Balance ({currency})")),
    ]);

    for account in registry.iter() {
        table.add_row(vec![
            Cell::new(&account.owner),
            Cell::new(&account.username),
            ui::number_cell(account.movements.len()),
            ui::money_cell(ledger::balance(account), currency),
        ]);
    }

    format!(
        "{}\n\n{}",
        ui::style_text("Accounts", ui::StyleType::Title),
        table
    )
}

pub fn run(registry: &Registry, currency: &str) {
    if registry.is_empty() {
        println!("{}", ui::style_text("No accounts.", ui::StyleType::Subtle));
        return;
    }
    println!("{}", display_registry(registry, currency));
}
