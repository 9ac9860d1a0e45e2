use std::path::PathBuf;

use comfy_table::Table;
use serde::Serialize;

use crate::cli::output::{MessageType, OutputFormatter, TableDisplay};
use crate::cli::{CliError, OutputFormat};
use crate::config::CONFIG;
use crate::matcher::SignatureMatcher;
use crate::registry::{SignatureRegistry, REGISTRY};
use crate::scan::{scan_directories, ScanSummary};
use crate::upload::Upload;
use crate::{check_file, CheckReport};

/// CLI command execution context
pub struct CliContext {
    pub formatter: OutputFormatter,
    pub output_format: OutputFormat,
}

impl CliContext {
    pub fn new(output_format: OutputFormat, no_color: bool) -> Self {
        Self {
            formatter: OutputFormatter::new(output_format.clone(), no_color),
            output_format,
        }
    }

    /// Verdict lines accompany tables but would corrupt JSON output.
    fn verdict(&self, message: &str, message_type: MessageType) {
        if matches!(self.output_format, OutputFormat::Table) {
            self.formatter.print_message(message, message_type);
        }
    }
}

/// Trait for CLI command execution. Returns the process exit code.
pub trait CliCommand {
    fn execute(&self, ctx: &CliContext) -> Result<i32, CliError>;
}

pub struct CheckCommand {
    pub file: PathBuf,
}

impl CliCommand for CheckCommand {
    fn execute(&self, ctx: &CliContext) -> Result<i32, CliError> {
        let report = match check_file(&self.file) {
            Ok(report) => report,
            Err(e) => {
                ctx.formatter.print_message(&e.to_string(), MessageType::Error);
                return Ok(2);
            }
        };

        ctx.formatter.print(&report)?;

        if report.header.is_none() {
            ctx.verdict("Header could not be read", MessageType::Warning);
            return Ok(2);
        }

        if report.consistent {
            ctx.verdict("Extension and header are consistent", MessageType::Success);
            Ok(0)
        } else {
            ctx.verdict("Extension and header are inconsistent", MessageType::Error);
            Ok(1)
        }
    }
}

pub struct IdentifyCommand {
    pub file: PathBuf,
}

#[derive(Debug, Serialize)]
pub struct IdentifyReport {
    pub path: PathBuf,
    pub header: Option<String>,
    pub candidates: Vec<String>,
}

impl CliCommand for IdentifyCommand {
    fn execute(&self, ctx: &CliContext) -> Result<i32, CliError> {
        let upload = match Upload::from_path(&self.file) {
            Ok(upload) => upload,
            Err(e) => {
                ctx.formatter.print_message(&e.to_string(), MessageType::Error);
                return Ok(2);
            }
        };

        let header = upload.header();
        let mut candidates: Vec<String> =
            SignatureMatcher::types_for_header(&REGISTRY, header.as_deref())
                .map(|types| types.into_iter().map(str::to_string).collect())
                .unwrap_or_default();
        candidates.sort_unstable();

        let report = IdentifyReport {
            path: self.file.clone(),
            header,
            candidates,
        };
        ctx.formatter.print(&report)?;

        if report.header.is_none() {
            Ok(2)
        } else if report.candidates.is_empty() {
            ctx.verdict("Header matches no known type", MessageType::Warning);
            Ok(1)
        } else {
            Ok(0)
        }
    }
}

pub struct TypesCommand;

#[derive(Debug, Serialize)]
pub struct RegistryListing {
    pub types: Vec<TypeEntry>,
}

#[derive(Debug, Serialize)]
pub struct TypeEntry {
    pub file_type: String,
    pub headers: Vec<String>,
}

impl RegistryListing {
    fn from_registry(registry: &SignatureRegistry) -> Self {
        let mut types: Vec<TypeEntry> = registry
            .types()
            .map(|file_type| {
                let mut headers: Vec<String> = registry
                    .headers_for_type(file_type)
                    .map(|headers| headers.iter().map(|h| h.to_string()).collect())
                    .unwrap_or_default();
                headers.sort_unstable();
                TypeEntry {
                    file_type: file_type.to_string(),
                    headers,
                }
            })
            .collect();
        types.sort_unstable_by(|a, b| a.file_type.cmp(&b.file_type));

        Self { types }
    }
}

impl CliCommand for TypesCommand {
    fn execute(&self, ctx: &CliContext) -> Result<i32, CliError> {
        let listing = RegistryListing::from_registry(&REGISTRY);
        ctx.formatter.print(&listing)?;
        Ok(0)
    }
}

pub struct ScanCommand {
    pub paths: Vec<PathBuf>,
}

impl CliCommand for ScanCommand {
    fn execute(&self, ctx: &CliContext) -> Result<i32, CliError> {
        let paths: Vec<PathBuf> = if self.paths.is_empty() {
            let config = CONFIG.as_ref().map_err(|e| -> CliError { e.clone().into() })?;
            if config.paths.is_empty() {
                ctx.formatter.print_message(
                    "No directories given and no scan paths configured",
                    MessageType::Error,
                );
                return Ok(2);
            }
            config.paths.iter().map(PathBuf::from).collect()
        } else {
            self.paths.clone()
        };

        let summary = match scan_directories(&paths) {
            Ok(summary) => summary,
            Err(e) => {
                ctx.formatter.print_message(&e.to_string(), MessageType::Error);
                return Ok(2);
            }
        };

        ctx.formatter.print(&summary)?;

        if !summary.inconsistent.is_empty() {
            if matches!(ctx.output_format, OutputFormat::Table) {
                println!("{}", inconsistent_files_table(&summary));
            }
            ctx.verdict("Inconsistent files found", MessageType::Error);
            Ok(1)
        } else {
            ctx.verdict("All checked files are consistent", MessageType::Success);
            Ok(0)
        }
    }
}

fn inconsistent_files_table(summary: &ScanSummary) -> Table {
    let mut table = OutputFormatter::create_table();
    table.set_header(vec!["File", "Extension", "Header", "Candidate Types"]);
    for report in &summary.inconsistent {
        table.add_row(vec![
            report.path.display().to_string(),
            report.extension.clone().unwrap_or_else(|| "(none)".to_string()),
            report.header.clone().unwrap_or_else(|| "(unreadable)".to_string()),
            join_or_none(&report.candidates),
        ]);
    }
    table
}

fn yes_no(value: bool) -> String {
    if value { "yes" } else { "no" }.to_string()
}

fn join_or_none(values: &[String]) -> String {
    if values.is_empty() {
        "(none)".to_string()
    } else {
        values.join(", ")
    }
}

impl TableDisplay for CheckReport {
    fn to_table(&self) -> Table {
        let mut table = OutputFormatter::create_table();
        table.set_header(vec!["Field", "Value"]);
        table.add_row(vec!["Path".to_string(), self.path.display().to_string()]);
        table.add_row(vec![
            "Extension".to_string(),
            self.extension.clone().unwrap_or_else(|| "(none)".to_string()),
        ]);
        table.add_row(vec!["Known extension".to_string(), yes_no(self.known_extension)]);
        table.add_row(vec![
            "Header".to_string(),
            self.header.clone().unwrap_or_else(|| "(unreadable)".to_string()),
        ]);
        table.add_row(vec![
            "Candidate types".to_string(),
            join_or_none(&self.candidates),
        ]);
        table.add_row(vec!["Consistent".to_string(), yes_no(self.consistent)]);
        table
    }
}

impl TableDisplay for IdentifyReport {
    fn to_table(&self) -> Table {
        let mut table = OutputFormatter::create_table();
        table.set_header(vec!["Field", "Value"]);
        table.add_row(vec!["Path".to_string(), self.path.display().to_string()]);
        table.add_row(vec![
            "Header".to_string(),
            self.header.clone().unwrap_or_else(|| "(unreadable)".to_string()),
        ]);
        table.add_row(vec![
            "Candidate types".to_string(),
            join_or_none(&self.candidates),
        ]);
        table
    }
}

impl TableDisplay for RegistryListing {
    fn to_table(&self) -> Table {
        let mut table = OutputFormatter::create_table();
        table.set_header(vec!["Type", "Signature Prefixes"]);
        for entry in &self.types {
            let headers = entry
                .headers
                .iter()
                .map(|h| {
                    if h.is_empty() {
                        "(no signature)".to_string()
                    } else {
                        h.clone()
                    }
                })
                .collect::<Vec<_>>()
                .join(", ");
            table.add_row(vec![entry.file_type.clone(), headers]);
        }
        table
    }
}

impl TableDisplay for ScanSummary {
    fn to_table(&self) -> Table {
        let mut table = OutputFormatter::create_table();
        table.set_header(vec!["Metric", "Count"]);
        table.add_row(vec!["Checked".to_string(), self.checked.to_string()]);
        table.add_row(vec!["Consistent".to_string(), self.consistent.to_string()]);
        table.add_row(vec![
            "Inconsistent".to_string(),
            self.inconsistent.len().to_string(),
        ]);
        table.add_row(vec![
            "Unreadable".to_string(),
            self.unreadable.len().to_string(),
        ]);
        table.add_row(vec![
            "Skipped (unknown extension)".to_string(),
            self.skipped_unknown.to_string(),
        ]);
        table
    }
}
