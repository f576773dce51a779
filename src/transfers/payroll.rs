// 💼 Payroll Transfer - Type 5
// Salary payment; only allowed inside payroll packages

use super::{Line, TransferKind};
use crate::error::ValidationError;
use crate::schema;
use crate::values::{Amount, Date, TransferMode};
use serde::{Deserialize, Serialize};

/// Payroll - salary payment to an employee
///
/// Example line:
///
/// `5|51109010430000000100111111|50102055581111103350100016|Jan Nowak|Poznań ul. Swojska 17 06-123|1000,12|1|Wynagrodzenie za miesiąc|01-09-2020|`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Payroll {
    pub debit_account: String,
    pub credit_account: String,
    /// Employee name
    pub recipient_name: String,
    /// Employee address
    pub address: String,
    pub amount: Amount,
    pub mode: TransferMode,
    pub title: String,
    #[serde(default)]
    pub date: Option<Date>,
}

impl Payroll {
    pub fn validate(&self) -> Result<(), ValidationError> {
        schema::validate_nrb(&self.debit_account, "debit account")?;
        schema::validate_nrb(&self.credit_account, "credit account")?;
        schema::validate_recipient_name(&self.recipient_name)?;
        schema::validate_address(Some(self.address.as_str()), true)?;
        schema::validate_transfer_mode(self.mode, &TransferMode::ALL)?;
        schema::validate_title(&self.title)
    }

    pub fn marshal(&self) -> Result<String, ValidationError> {
        self.validate()?;

        Ok(Line::new(TransferKind::Payroll)
            .field(&self.debit_account)
            .field(&self.credit_account)
            .field(&self.recipient_name)
            .field(&self.address)
            .field(self.amount)
            .field(self.mode)
            .field(&self.title)
            .optional(self.date)
            .finish())
    }
}
