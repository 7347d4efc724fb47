//! Workspace settings and display formatting.
//!
//! Settings are loaded once per session (see [`SettingsLoader`]), mutated
//! only through an explicit save action owned by the settings persistence
//! collaborator, and passed explicitly to every formatting call. Nothing
//! in this crate reads settings through ambient state.
//!
//! # Example
//!
//! ```no_run
//! use billing_engine::settings::SettingsLoader;
//!
//! let loader = SettingsLoader::load("./config/workspace.yaml").unwrap();
//! println!("Currency: {}", loader.settings().currency.code);
//! ```

mod format;
mod loader;
mod types;

pub use format::{format_date, format_money, format_time, resolve_timezone};
pub use loader::SettingsLoader;
pub use types::{
    CurrencySettings, DateFormat, DateTimeSettings, SymbolPosition, TimeFormat, WorkspaceSettings,
};
