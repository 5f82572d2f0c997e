//! Field names shared by every layer

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::UnknownFieldError;

/// One field of a delivery note form
///
/// The set is fixed. Display and serialization use the canonical names
/// (`Customer`, `DriverID`, `TruckReg`, ...), which are also the column
/// names of the lookup and history files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum FieldName {
    Customer,
    Address,
    Transporter,
    Driver,
    #[serde(rename = "DriverID")]
    DriverId,
    TruckReg,
    TrailerReg,
    Product,
    Quantity,
    Type,
    Destination,
    Description,
}

impl FieldName {
    /// Every field in canonical form order
    pub const ALL: [FieldName; 12] = [
        FieldName::Customer,
        FieldName::Address,
        FieldName::Transporter,
        FieldName::Driver,
        FieldName::DriverId,
        FieldName::TruckReg,
        FieldName::TrailerReg,
        FieldName::Product,
        FieldName::Quantity,
        FieldName::Type,
        FieldName::Destination,
        FieldName::Description,
    ];

    /// Fields that keep a history of previously entered values
    pub const LOOKUP: [FieldName; 6] = [
        FieldName::Customer,
        FieldName::Transporter,
        FieldName::Driver,
        FieldName::TruckReg,
        FieldName::TrailerReg,
        FieldName::Product,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FieldName::Customer => "Customer",
            FieldName::Address => "Address",
            FieldName::Transporter => "Transporter",
            FieldName::Driver => "Driver",
            FieldName::DriverId => "DriverID",
            FieldName::TruckReg => "TruckReg",
            FieldName::TrailerReg => "TrailerReg",
            FieldName::Product => "Product",
            FieldName::Quantity => "Quantity",
            FieldName::Type => "Type",
            FieldName::Destination => "Destination",
            FieldName::Description => "Description",
        }
    }

    /// Default form label
    pub fn label(&self) -> &'static str {
        match self {
            FieldName::Customer => "Customer",
            FieldName::Address => "Delivery Address",
            FieldName::Transporter => "Transporter",
            FieldName::Driver => "Driver",
            FieldName::DriverId => "Driver ID",
            FieldName::TruckReg => "Truck Reg",
            FieldName::TrailerReg => "Trailer Reg",
            FieldName::Product => "Product",
            FieldName::Quantity => "Quantity",
            FieldName::Type => "Type",
            FieldName::Destination => "Destination",
            FieldName::Description => "Description",
        }
    }

    /// Whether the default form backs this field with a lookup list
    pub fn is_lookup(&self) -> bool {
        Self::LOOKUP.contains(self)
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parses canonical names case-insensitively; `-`, `_` and spaces are ignored
/// so `truck-reg` and `driver_id` are accepted.
impl FromStr for FieldName {
    type Err = UnknownFieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted: String = s
            .chars()
            .filter(|c| !matches!(c, '-' | '_' | ' '))
            .collect();
        FieldName::ALL
            .into_iter()
            .find(|f| f.as_str().eq_ignore_ascii_case(&wanted))
            .ok_or_else(|| UnknownFieldError(s.to_string()))
    }
}

/// Joins field names for messages: `Customer, Product`
pub fn join_fields(fields: &[FieldName]) -> String {
    fields
        .iter()
        .map(FieldName::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}
