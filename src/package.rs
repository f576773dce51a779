// 📦 Package - Header plus one line per transfer
// Enforces the package-type / record-type pairing and picks the file encoding

use crate::encoding;
use crate::error::PackageError;
use crate::transfers::{Transfer, DELIMITER};
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Version of the bank's import format written in the header line
pub const FORMAT_VERSION: &str = "4120414";

pub const LINE_BREAK: char = '\n';

// ============================================================================
// PACKAGE TYPE
// ============================================================================

/// PackageType - regular packages and payroll packages never mix
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum PackageType {
    /// Type 1: standard, ZUS, tax and split payment transfers
    #[default]
    Regular,
    /// Type 2: payroll transfers only
    Payroll,
}

impl PackageType {
    pub fn code(&self) -> u8 {
        match self {
            PackageType::Regular => 1,
            PackageType::Payroll => 2,
        }
    }

    /// Whether a record of this shape may appear in a package of this type
    pub fn accepts(&self, transfer: &Transfer) -> bool {
        match self {
            PackageType::Regular => !transfer.is_payroll(),
            PackageType::Payroll => transfer.is_payroll(),
        }
    }
}

impl TryFrom<u8> for PackageType {
    type Error = PackageError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            1 => Ok(PackageType::Regular),
            2 => Ok(PackageType::Payroll),
            other => Err(PackageError::InvalidPackageType(other)),
        }
    }
}

impl From<PackageType> for u8 {
    fn from(package_type: PackageType) -> Self {
        package_type.code()
    }
}

impl fmt::Display for PackageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PackageType::Regular => write!(f, "regular (type 1)"),
            PackageType::Payroll => write!(f, "payroll (type 2)"),
        }
    }
}

// ============================================================================
// TEXT ENCODING
// ============================================================================

/// TextEncoding - byte encoding used by [`Package::to_bytes`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TextEncoding {
    /// What the bank's importer expects
    #[default]
    Windows1250,
    Utf8,
}

// ============================================================================
// PACKAGE
// ============================================================================

/// Package - every transfer destined for one import file
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Package {
    pub package_type: PackageType,
    #[serde(default)]
    pub transfers: Vec<Transfer>,
    #[serde(default)]
    pub encoding: TextEncoding,
}

impl Package {
    pub fn new(package_type: PackageType) -> Self {
        Package {
            package_type,
            transfers: Vec::new(),
            encoding: TextEncoding::default(),
        }
    }

    /// Builder pattern: append a transfer
    pub fn with_transfer(mut self, transfer: impl Into<Transfer>) -> Self {
        self.transfers.push(transfer.into());
        self
    }

    /// Builder pattern: choose the output encoding
    pub fn with_encoding(mut self, encoding: TextEncoding) -> Self {
        self.encoding = encoding;
        self
    }

    /// Render the whole file as UTF-8 text
    ///
    /// Fails on the first record that is invalid or does not belong in this
    /// package type; the error names the zero-based record index.
    pub fn marshal(&self) -> Result<String, PackageError> {
        debug!(
            "Rendering {} package with {} transfers",
            self.package_type,
            self.transfers.len()
        );

        let mut out = String::new();
        out.push_str(FORMAT_VERSION);
        out.push(DELIMITER);
        out.push_str(&self.package_type.code().to_string());
        out.push(LINE_BREAK);

        for (index, transfer) in self.transfers.iter().enumerate() {
            if !self.package_type.accepts(transfer) {
                debug!("Rejecting transfer {}: wrong kind for package", index);
                return Err(PackageError::TypeMismatch {
                    index,
                    kind: transfer.kind(),
                    package_type: self.package_type,
                });
            }

            if transfer.amounts().iter().any(|a| a.is_negative()) {
                warn!(
                    "Transfer {} carries a negative amount; the format has no sign, writing its magnitude",
                    index
                );
            }

            let line = transfer.marshal().map_err(|source| {
                debug!("Rejecting transfer {}: {}", index, source);
                PackageError::Transfer { index, source }
            })?;
            out.push_str(&line);
            out.push(LINE_BREAK);
        }

        debug!("Rendered {} lines", self.transfers.len() + 1);
        Ok(out)
    }

    /// Render the whole file in the package's configured encoding
    pub fn to_bytes(&self) -> Result<Vec<u8>, PackageError> {
        let text = self.marshal()?;
        match self.encoding {
            TextEncoding::Windows1250 => Ok(encoding::to_windows1250(&text)?),
            TextEncoding::Utf8 => Ok(text.into_bytes()),
        }
    }
}
