// 🚨 Errors - Validation, structural and transcoding failures

use crate::package::PackageType;
use crate::transfers::TransferKind;
use thiserror::Error;

/// A single field broke one of the bank's format rules
///
/// Validation stops at the first broken rule, so a record reports one
/// error at a time.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{field} {message}")]
pub struct ValidationError {
    pub field: &'static str,
    pub message: String,
}

impl ValidationError {
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        ValidationError {
            field,
            message: message.into(),
        }
    }
}

/// A character with no Windows-1250 representation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("character {character:?} cannot be encoded in Windows-1250")]
pub struct EncodingError {
    pub character: char,
}

/// Bytes that are not valid Windows-1250 text
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("input is not valid Windows-1250 text")]
pub struct DecodingError;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PackageError {
    #[error("package type must be 1 (regular) or 2 (payroll), got {0}")]
    InvalidPackageType(u8),

    #[error("transfer {index}: {kind} transfers are not allowed in {package_type} packages")]
    TypeMismatch {
        index: usize,
        kind: TransferKind,
        package_type: PackageType,
    },

    #[error("transfer {index}: {source}")]
    Transfer {
        index: usize,
        #[source]
        source: ValidationError,
    },

    #[error(transparent)]
    Encoding(#[from] EncodingError),
}

impl PackageError {
    /// Zero-based position of the offending record, if one is to blame
    pub fn record_index(&self) -> Option<usize> {
        match self {
            PackageError::TypeMismatch { index, .. } | PackageError::Transfer { index, .. } => {
                Some(*index)
            }
            PackageError::InvalidPackageType(_) | PackageError::Encoding(_) => None,
        }
    }
}
