// 🔁 Standard Transfer - Type 1
// Transfer to an account in any bank, with an optional recipient NIP

use super::{Line, TransferKind};
use crate::error::ValidationError;
use crate::schema;
use crate::values::{Amount, Date, TransferMode};
use serde::{Deserialize, Serialize};

/// Standard - regular external transfer
///
/// Example line:
///
/// `1|51109010430000000100111111|50102055581111103350100016|Jerzy Kowalski|Warszawa ul. Kaliska 123 00-123|123,12|1|zasielenie konta|01-09-2020|7850000000|`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Standard {
    /// Source NRB account, 26 digits
    pub debit_account: String,
    /// Destination NRB account, 26 digits
    pub credit_account: String,
    /// Max 80 characters
    pub recipient_name: String,
    /// Max 60 characters
    pub address: String,
    pub amount: Amount,
    pub mode: TransferMode,
    /// Max 140 characters
    pub title: String,
    #[serde(default)]
    pub date: Option<Date>,
    /// Recipient NIP for VAT whitelist verification
    #[serde(default)]
    pub nip: Option<String>,
}

impl Standard {
    pub fn validate(&self) -> Result<(), ValidationError> {
        schema::validate_nrb(&self.debit_account, "debit account")?;
        schema::validate_nrb(&self.credit_account, "credit account")?;
        schema::validate_recipient_name(&self.recipient_name)?;
        schema::validate_address(Some(self.address.as_str()), true)?;
        schema::validate_transfer_mode(self.mode, &TransferMode::ALL)?;
        schema::validate_title(&self.title)?;
        match self.nip.as_deref() {
            None | Some("") => Ok(()),
            Some(nip) => schema::validate_nip(nip, "NIP"),
        }
    }

    pub fn marshal(&self) -> Result<String, ValidationError> {
        self.validate()?;

        Ok(Line::new(TransferKind::Standard)
            .field(&self.debit_account)
            .field(&self.credit_account)
            .field(&self.recipient_name)
            .field(&self.address)
            .field(self.amount)
            .field(self.mode)
            .field(&self.title)
            .optional(self.date)
            .optional(self.nip.as_deref())
            .finish())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transfers::fixtures;

    #[test]
    fn test_marshal_matches_bank_example() {
        let got = fixtures::standard().marshal().unwrap();
        assert_eq!(
            got,
            "1|51109010430000000100111111|50102055581111103350100016|Jerzy Kowalski|Warszawa ul. Kaliska 123 00-123|123,12|1|zasielenie konta|01-09-2020|7850000000|"
        );
    }

    #[test]
    fn test_absent_date_and_nip_render_empty() {
        let transfer = Standard {
            date: None,
            nip: None,
            ..fixtures::standard()
        };
        let got = transfer.marshal().unwrap();
        assert!(got.ends_with("|zasielenie konta|||"), "{}", got);
    }

    #[test]
    fn test_empty_nip_is_not_validated() {
        let transfer = Standard {
            nip: Some(String::new()),
            ..fixtures::standard()
        };
        assert!(transfer.validate().is_ok());
    }

    #[test]
    fn test_rejects_short_nip() {
        let transfer = Standard {
            nip: Some("123".to_string()),
            ..fixtures::standard()
        };
        let err = transfer.marshal().unwrap_err();
        assert_eq!(err.field, "NIP");
    }

    #[test]
    fn test_rejects_short_debit_account() {
        let transfer = Standard {
            debit_account: "12345".to_string(),
            ..fixtures::standard()
        };
        assert_eq!(transfer.validate().unwrap_err().field, "debit account");
    }

    #[test]
    fn test_rejects_long_recipient_name() {
        let transfer = Standard {
            recipient_name: "a".repeat(81),
            ..fixtures::standard()
        };
        assert!(transfer.marshal().is_err());
    }

    #[test]
    fn test_reports_first_failure_only() {
        let transfer = Standard {
            credit_account: "1".to_string(),
            title: String::new(),
            ..fixtures::standard()
        };
        assert_eq!(transfer.validate().unwrap_err().field, "credit account");
    }

    #[test]
    fn test_accepts_every_mode() {
        for mode in TransferMode::ALL {
            let transfer = Standard {
                mode,
                ..fixtures::standard()
            };
            let line = transfer.marshal().unwrap();
            assert!(line.contains(&format!("|123,12|{}|", mode.code())));
        }
    }
}
