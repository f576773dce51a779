// 🧾 Tax Transfer - Types 3 and 4
// Same field layout for tax offices and for every other tax authority

use super::{Line, TransferKind};
use crate::error::ValidationError;
use crate::schema;
use crate::values::{Amount, Date, IdentifierType, PeriodType};
use serde::{Deserialize, Serialize};

/// Tax - payment to a tax office or another tax authority
///
/// The record type (3 or 4) comes from the [`super::Transfer`] variant
/// wrapping it, not from a field here. There is no transfer mode field.
///
/// Example line (type 3):
///
/// `3|51109010430000000100111111|06101014690039392223000000|Urzad Skarbowy Poznan Winogrady|Poznan Wojciechowskiego 3/5 60-685|1000|01-09-2020|Jan Kowalski|N|9721230101|05|M|07|PIT5|id.zobowiazania|`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tax {
    pub debit_account: String,
    pub credit_account: String,
    /// Tax authority name, max 80 characters
    pub recipient_name: String,
    #[serde(default)]
    pub address: Option<String>,
    pub amount: Amount,
    #[serde(default)]
    pub date: Option<Date>,
    /// Max 50 characters
    pub payer_name: String,
    pub identifier_type: IdentifierType,
    /// Shape depends on `identifier_type`
    pub identifier: String,
    /// Two digits, e.g. "05" for 2005
    #[serde(default)]
    pub year: Option<String>,
    #[serde(default)]
    pub period_type: Option<PeriodType>,
    /// Required unless the period is absent or yearly
    #[serde(default)]
    pub period_number: Option<String>,
    /// e.g. "PIT5", max 6 characters
    pub form_symbol: String,
    #[serde(default)]
    pub obligation_id: Option<String>,
}

impl Tax {
    pub fn validate(&self) -> Result<(), ValidationError> {
        schema::validate_nrb(&self.debit_account, "debit account")?;
        schema::validate_nrb(&self.credit_account, "credit account")?;
        schema::validate_recipient_name(&self.recipient_name)?;
        schema::validate_address(self.address.as_deref(), false)?;
        schema::validate_payer_name(&self.payer_name)?;
        schema::validate_identifier(&self.identifier, self.identifier_type)?;
        schema::validate_year(self.year.as_deref())?;
        schema::validate_period_number(self.period_number.as_deref(), self.period_type)?;
        schema::validate_form_symbol(&self.form_symbol)?;
        schema::validate_obligation_id(self.obligation_id.as_deref())
    }

    /// `kind` selects the leading type digit
    pub(crate) fn marshal(&self, kind: TransferKind) -> Result<String, ValidationError> {
        self.validate()?;

        Ok(Line::new(kind)
            .field(&self.debit_account)
            .field(&self.credit_account)
            .field(&self.recipient_name)
            .optional(self.address.as_deref())
            .field(self.amount)
            .optional(self.date)
            .field(&self.payer_name)
            .field(self.identifier_type)
            .field(&self.identifier)
            .optional(self.year.as_deref())
            .optional(self.period_type)
            .optional(self.period_number.as_deref())
            .field(&self.form_symbol)
            .optional(self.obligation_id.as_deref())
            .finish())
    }
}
