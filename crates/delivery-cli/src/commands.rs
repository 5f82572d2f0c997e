//! Command handlers

use std::path::{Path, PathBuf};

use chrono::Local;
use delivery_app::config::Config;
use delivery_app::export::{export_to_excel, export_to_pdf};
use delivery_app::repository::{open_record_log, open_service};
use delivery_domain::repository::RecordLogRepository;
use delivery_types::{OutputFormat, Result};

use crate::cli::{Cli, Commands, FormArgs, LookupAction};
use crate::output::{output_document, output_history, output_lookup, output_lookups};

/// Execute CLI command
pub fn execute(cli: Cli) -> Result<()> {
    let config_path = cli.config.clone();
    let mut config = load_config(config_path.as_deref())?;

    // Override from CLI args
    if let Some(ref dir) = cli.data_dir {
        config.data_dir = Some(dir.clone());
    }
    let output_format = cli.format.unwrap_or(config.output_format);

    match cli.command {
        Commands::Lookup { action } => cmd_lookup(&config, action, output_format),
        Commands::Submit {
            form,
            no_log,
            output,
        } => cmd_submit(config, &form, no_log, output.as_deref(), output_format),
        Commands::History { limit } => cmd_history(&config, limit, output_format),
        Commands::Export { output } => cmd_export(&config, output),
        Commands::Config {
            show,
            set_supplier_name,
            set_supplier_address,
            set_supplier_phone,
            set_supplier_email,
            set_data_dir,
            set_layout,
            set_log,
            set_output,
            reset,
        } => {
            // Reload without CLI overrides so they are not persisted
            let mut config = load_config(config_path.as_deref())?;
            if reset {
                config = Config::default();
                save_config(&config, config_path.as_deref())?;
                println!("Configuration reset to defaults.");
                return Ok(());
            }

            let mut changed = false;
            if let Some(name) = set_supplier_name {
                config.supplier.name = name;
                changed = true;
            }
            if let Some(address) = set_supplier_address {
                config.supplier.address = address;
                changed = true;
            }
            if let Some(phone) = set_supplier_phone {
                config.supplier.phone = phone;
                changed = true;
            }
            if let Some(email) = set_supplier_email {
                config.supplier.email = email;
                changed = true;
            }
            if let Some(dir) = set_data_dir {
                config.data_dir = Some(dir);
                changed = true;
            }
            if let Some(layout) = set_layout {
                config.layout_path = Some(layout);
                // Reject a broken layout before saving it
                config.layout()?;
                changed = true;
            }
            if let Some(enabled) = set_log {
                config.log_enabled = enabled;
                changed = true;
            }
            if let Some(format) = set_output {
                config.output_format = format;
                changed = true;
            }

            if changed {
                save_config(&config, config_path.as_deref())?;
                println!("Configuration saved.");
            }
            if show || !changed {
                println!("{}", config);
            }
            Ok(())
        }
    }
}

/// `--config` overrides the per-user config file
fn load_config(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
}

fn save_config(config: &Config, path: Option<&Path>) -> Result<()> {
    match path {
        Some(path) => config.save_to(path),
        None => config.save(),
    }
}

fn cmd_lookup(config: &Config, action: LookupAction, output_format: OutputFormat) -> Result<()> {
    let service = open_service(config)?;
    match action {
        LookupAction::List { field } => {
            output_lookup(output_format, field, &service.lookup_values(field)?)
        }
        LookupAction::Add { field, value } => {
            if service.add_lookup(field, &value)? {
                println!("Remembered {} '{}'.", field, value.trim());
            } else {
                println!("{} '{}' already known (or empty); nothing stored.", field, value.trim());
            }
            Ok(())
        }
        LookupAction::All => output_lookups(output_format, &service.lookups()?),
    }
}

fn cmd_submit(
    mut config: Config,
    form: &FormArgs,
    no_log: bool,
    output: Option<&Path>,
    output_format: OutputFormat,
) -> Result<()> {
    if no_log {
        config.log_enabled = false;
    }
    let service = open_service(&config)?;
    let submission = service.submit(form.to_field_set())?;

    output_document(output_format, &submission.document)?;

    if let Some(path) = output {
        if is_pdf(path) {
            export_to_pdf(&submission.document, path)?;
        } else {
            std::fs::write(path, submission.document.to_string())?;
        }
        eprintln!("Delivery note saved to: {}", path.display());
    }
    if !submission.new_lookups.is_empty() {
        let names: Vec<_> = submission
            .new_lookups
            .iter()
            .map(|f| f.as_str())
            .collect();
        eprintln!("New values remembered for: {}", names.join(", "));
    }
    if let Some(ref e) = submission.lookup_error {
        eprintln!("Warning: form values not remembered: {}", e);
    }
    if let Some(ref e) = submission.log_error {
        eprintln!("Warning: delivery not logged: {}", e);
    }
    Ok(())
}

fn is_pdf(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("pdf"))
}

fn cmd_history(config: &Config, limit: usize, output_format: OutputFormat) -> Result<()> {
    let entries = open_record_log(config)?.read_all()?;
    let skip = entries.len().saturating_sub(limit);
    output_history(output_format, &entries[skip..])
}

fn cmd_export(config: &Config, output: Option<PathBuf>) -> Result<()> {
    let entries = open_record_log(config)?.read_all()?;
    let output_path = output.unwrap_or_else(|| {
        PathBuf::from(format!(
            "delivery_log_{}.xlsx",
            Local::now().format("%Y%m%d_%H%M%S")
        ))
    });

    export_to_excel(&entries, &output_path)?;
    println!(
        "Exported {} deliveries to: {}",
        entries.len(),
        output_path.display()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pdf_output_is_chosen_by_extension() {
        assert!(is_pdf(Path::new("note.pdf")));
        assert!(is_pdf(Path::new("out/Acme_Farms.PDF")));
        assert!(!is_pdf(Path::new("note.txt")));
        assert!(!is_pdf(Path::new("pdf")));
    }
}
