//! CLI definition using clap

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use delivery_domain::model::FieldSet;
use delivery_types::{FieldName, OutputFormat};

#[derive(Parser)]
#[command(name = "delivery-note")]
#[command(version)]
#[command(about = "Delivery note capture with remembered form values")]
#[command(long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Config file (default: ~/.config/delivery-note/config.json)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Directory holding the lookup and history files. Uses config value if not specified.
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,

    /// Output format (json, table). Uses config value if not specified.
    #[arg(long, short = 'f', global = true)]
    pub format: Option<OutputFormat>,

    /// Verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show or extend remembered form values
    Lookup {
        #[command(subcommand)]
        action: LookupAction,
    },

    /// Create a delivery note from form values
    Submit {
        #[command(flatten)]
        form: FormArgs,

        /// Do not append this note to the history log
        #[arg(long)]
        no_log: bool,

        /// Also write the printable note to this file
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,
    },

    /// Show delivery history
    History {
        /// Limit number of entries shown (newest last)
        #[arg(long, short = 'n', default_value = "20")]
        limit: usize,
    },

    /// Export delivery history to Excel
    Export {
        /// Output Excel file path
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,
    },

    /// Manage configuration
    Config {
        /// Show current configuration
        #[arg(long)]
        show: bool,

        /// Set supplier name
        #[arg(long)]
        set_supplier_name: Option<String>,

        /// Set supplier address
        #[arg(long)]
        set_supplier_address: Option<String>,

        /// Set supplier phone
        #[arg(long)]
        set_supplier_phone: Option<String>,

        /// Set supplier email
        #[arg(long)]
        set_supplier_email: Option<String>,

        /// Set data directory
        #[arg(long)]
        set_data_dir: Option<PathBuf>,

        /// Set TOML form layout file
        #[arg(long)]
        set_layout: Option<PathBuf>,

        /// Enable/disable the history log
        #[arg(long)]
        set_log: Option<bool>,

        /// Set default output format
        #[arg(long)]
        set_output: Option<OutputFormat>,

        /// Reset to defaults
        #[arg(long)]
        reset: bool,
    },
}

#[derive(Subcommand)]
pub enum LookupAction {
    /// List remembered values of one field (sorted)
    List {
        /// Field name (Customer, Transporter, Driver, TruckReg, TrailerReg, Product, ...)
        field: FieldName,
    },

    /// Remember a value for a field
    Add {
        field: FieldName,
        value: String,
    },

    /// List remembered values of every lookup field in the form
    All,
}

/// Form values; unset fields are empty
#[derive(Args, Debug, Default)]
pub struct FormArgs {
    #[arg(long, default_value = "")]
    pub customer: String,

    /// Delivery address
    #[arg(long, default_value = "")]
    pub address: String,

    #[arg(long, default_value = "")]
    pub transporter: String,

    #[arg(long, default_value = "")]
    pub driver: String,

    #[arg(long, default_value = "")]
    pub driver_id: String,

    #[arg(long, default_value = "")]
    pub truck_reg: String,

    #[arg(long, default_value = "")]
    pub trailer_reg: String,

    #[arg(long, default_value = "")]
    pub product: String,

    #[arg(long, default_value = "")]
    pub quantity: String,

    /// Quantity unit (e.g. Bag, Ton)
    #[arg(long = "type", default_value = "")]
    pub kind: String,

    #[arg(long, default_value = "")]
    pub destination: String,

    #[arg(long, default_value = "")]
    pub description: String,
}

impl FormArgs {
    pub fn to_field_set(&self) -> FieldSet {
        [
            (FieldName::Customer, &self.customer),
            (FieldName::Address, &self.address),
            (FieldName::Transporter, &self.transporter),
            (FieldName::Driver, &self.driver),
            (FieldName::DriverId, &self.driver_id),
            (FieldName::TruckReg, &self.truck_reg),
            (FieldName::TrailerReg, &self.trailer_reg),
            (FieldName::Product, &self.product),
            (FieldName::Quantity, &self.quantity),
            (FieldName::Type, &self.kind),
            (FieldName::Destination, &self.destination),
            (FieldName::Description, &self.description),
        ]
        .into_iter()
        .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_submit() {
        let cli = Cli::try_parse_from([
            "delivery-note",
            "submit",
            "--customer",
            "Acme Farms",
            "--type",
            "Ton",
            "--driver-id",
            "63-123456-A-42",
        ])
        .unwrap();
        match cli.command {
            Commands::Submit { form, no_log, output } => {
                let fields = form.to_field_set();
                assert_eq!(fields.get(FieldName::Customer), "Acme Farms");
                assert_eq!(fields.get(FieldName::Type), "Ton");
                assert_eq!(fields.get(FieldName::DriverId), "63-123456-A-42");
                assert_eq!(fields.get(FieldName::Product), "");
                assert!(!no_log);
                assert!(output.is_none());
            }
            _ => panic!("expected submit"),
        }
    }

    #[test]
    fn test_parse_lookup_field() {
        let cli = Cli::try_parse_from(["delivery-note", "lookup", "list", "truck-reg"]).unwrap();
        match cli.command {
            Commands::Lookup {
                action: LookupAction::List { field },
            } => assert_eq!(field, FieldName::TruckReg),
            _ => panic!("expected lookup list"),
        }
        assert!(Cli::try_parse_from(["delivery-note", "lookup", "list", "Weight"]).is_err());
    }
}
