// Santander Import File Builder - Core Library
// Turns typed transfer records into the bank's pipe-delimited import format
//
// Record types: Standard (1), ZUS (2), Tax office (3), other tax authority (4),
// Payroll (5), Split payment (6). Output is UTF-8 text, or Windows-1250 bytes
// for the file itself.

pub mod encoding;
pub mod error;
pub mod package;
mod schema;
pub mod transfers;
pub mod values;

// Re-export commonly used types
pub use encoding::{from_windows1250, to_windows1250};
pub use error::{DecodingError, EncodingError, PackageError, ValidationError};
pub use package::{Package, PackageType, TextEncoding, FORMAT_VERSION};
pub use transfers::{
    Payroll, SplitPayment, Standard, Tax, Transfer, TransferKind, Zus,
};
pub use values::{Amount, Date, IdentifierType, PeriodType, TransferMode};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
