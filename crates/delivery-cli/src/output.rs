//! Output formatting module

use std::collections::BTreeMap;

use delivery_domain::model::{Document, LogEntry, LOG_HEADER};
use delivery_types::{FieldName, OutputFormat, Result};

pub fn output_document(output_format: OutputFormat, document: &Document) -> Result<()> {
    if output_format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(document)?);
    } else {
        print!("{}", document);
    }
    Ok(())
}

pub fn output_lookup(output_format: OutputFormat, field: FieldName, values: &[String]) -> Result<()> {
    if output_format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(values)?);
    } else if values.is_empty() {
        println!("No remembered {} values.", field);
    } else {
        println!("{} ({})", field, values.len());
        for value in values {
            println!("  {}", value);
        }
    }
    Ok(())
}

pub fn output_lookups(
    output_format: OutputFormat,
    lookups: &BTreeMap<FieldName, Vec<String>>,
) -> Result<()> {
    if output_format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(lookups)?);
        return Ok(());
    }
    for (field, values) in lookups {
        output_lookup(output_format, *field, values)?;
    }
    Ok(())
}

pub fn output_history(output_format: OutputFormat, entries: &[LogEntry]) -> Result<()> {
    if output_format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(entries)?);
        return Ok(());
    }
    if entries.is_empty() {
        println!("No deliveries logged yet.");
        return Ok(());
    }

    println!(
        "{:<19}  {:<24}  {:<16}  {:>8}  {}",
        LOG_HEADER[0], LOG_HEADER[1], LOG_HEADER[3], LOG_HEADER[4], LOG_HEADER[5]
    );
    println!("{}", "-".repeat(80));
    for entry in entries {
        println!(
            "{:<19}  {:<24}  {:<16}  {:>8}  {}",
            entry.date_text(),
            truncate(&entry.customer, 24),
            truncate(&entry.product, 16),
            entry.quantity,
            entry.unit
        );
    }
    Ok(())
}

fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        s.to_string()
    } else {
        let cut: String = s.chars().take(max_chars.saturating_sub(3)).collect();
        format!("{}...", cut)
    }
}
