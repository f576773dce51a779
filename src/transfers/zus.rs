// 🛡️ ZUS Transfer - Type 2
// Social insurance contribution; always routed through Elixir

use super::{Line, TransferKind};
use crate::error::ValidationError;
use crate::schema;
use crate::values::{Amount, Date, TransferMode};
use serde::{Deserialize, Serialize};

/// ZUS/KRUS payments are always sent through Elixir
pub const ZUS_MODE: TransferMode = TransferMode::Elixir;

/// Zus - social insurance payment
///
/// There is no mode field to set: the line always carries Elixir (1).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Zus {
    pub debit_account: String,
    /// ZUS account, 26 digits
    pub credit_account: String,
    /// e.g. "ZUS", max 80 characters
    pub recipient_name: String,
    pub address: String,
    pub amount: Amount,
    pub title: String,
    #[serde(default)]
    pub date: Option<Date>,
}

impl Zus {
    pub fn validate(&self) -> Result<(), ValidationError> {
        schema::validate_nrb(&self.debit_account, "debit account")?;
        schema::validate_nrb(&self.credit_account, "credit account")?;
        schema::validate_recipient_name(&self.recipient_name)?;
        schema::validate_address(Some(self.address.as_str()), true)?;
        schema::validate_title(&self.title)
    }

    pub fn marshal(&self) -> Result<String, ValidationError> {
        self.validate()?;

        Ok(Line::new(TransferKind::Zus)
            .field(&self.debit_account)
            .field(&self.credit_account)
            .field(&self.recipient_name)
            .field(&self.address)
            .field(self.amount)
            .field(ZUS_MODE)
            .field(&self.title)
            .optional(self.date)
            .finish())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transfers::fixtures;

    #[test]
    fn test_marshal_matches_bank_example() {
        let got = fixtures::zus().marshal().unwrap();
        assert_eq!(
            got,
            "2|51109010430000000100111111|82600000020260111122223333|ZUS|Warszawa ul. Szamocka 3,5 01748|319,94|1|Skladka ZUS|01-09-2020|"
        );
    }

    #[test]
    fn test_address_is_required() {
        let transfer = Zus {
            address: String::new(),
            ..fixtures::zus()
        };
        let err = transfer.validate().unwrap_err();
        assert_eq!(err.to_string(), "address is required");
    }

    #[test]
    fn test_title_is_required() {
        let transfer = Zus {
            title: String::new(),
            ..fixtures::zus()
        };
        assert_eq!(transfer.validate().unwrap_err().field, "title");
    }
}
