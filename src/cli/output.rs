use crate::cli::CliError;
use crate::cli::OutputFormat;
use colored::Colorize;
use comfy_table::{presets, Table};
use serde::Serialize;

/// Output formatter for CLI results
pub struct OutputFormatter {
    format: OutputFormat,
    no_color: bool,
}

impl OutputFormatter {
    pub fn new(format: OutputFormat, no_color: bool) -> Self {
        Self { format, no_color }
    }

    /// Format and print data
    pub fn print<T: Serialize + TableDisplay>(&self, data: &T) -> Result<(), CliError> {
        match self.format {
            OutputFormat::Table => self.print_table(data),
            OutputFormat::Json => self.print_json(data),
        }
    }

    /// Print a message with appropriate formatting
    pub fn print_message(&self, message: &str, message_type: MessageType) {
        if self.no_color {
            println!("{}", message);
            return;
        }

        let formatted_message = match message_type {
            MessageType::Info => message.blue(),
            MessageType::Success => message.green(),
            MessageType::Warning => message.yellow(),
            MessageType::Error => message.red(),
        };
        println!("{}", formatted_message);
    }

    /// Create a new table with consistent styling
    pub fn create_table() -> Table {
        let mut table = Table::new();
        table.load_preset(presets::UTF8_FULL);
        table
    }

    fn print_table<T: TableDisplay>(&self, data: &T) -> Result<(), CliError> {
        let table = data.to_table();
        println!("{}", table);
        Ok(())
    }

    fn print_json<T: Serialize>(&self, data: &T) -> Result<(), CliError> {
        let json = serde_json::to_string_pretty(data).map_err(|e| -> CliError { e.into() })?;
        println!("{}", json);
        Ok(())
    }
}

/// Message type for colored output
pub enum MessageType {
    Info,
    Success,
    Warning,
    Error,
}

/// Trait for types that can be displayed as tables
pub trait TableDisplay {
    fn to_table(&self) -> Table;
}
