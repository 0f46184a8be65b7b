pub mod accounts;
pub mod setup;
pub mod shell;
pub mod statement;
pub mod ui;
