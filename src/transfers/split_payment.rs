// ✂️ Split Payment Transfer - Type 6
// Split VAT payment; the title is generated from the VAT fields

use super::{Line, TransferKind};
use crate::error::ValidationError;
use crate::schema;
use crate::values::{Amount, Date, TransferMode};
use serde::{Deserialize, Serialize};

/// SplitPayment - gross amount paid with the VAT part routed separately
///
/// Example line:
///
/// `6|51109010430000000100111111|50102055581111103350100011|Jan Nowak|Warszawa ul. Mickiewicza 11 02-222|123,50|1|/VAT/23,09/IDC/8960005670/INV/5/2018/TXT/Faktura 5/2018|30-09-2020|`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SplitPayment {
    pub debit_account: String,
    pub credit_account: String,
    pub recipient_name: String,
    #[serde(default)]
    pub address: Option<String>,
    pub gross_amount: Amount,
    pub mode: TransferMode,
    pub vat_amount: Amount,
    /// 10 digits, checked against the VAT whitelist by the bank
    pub recipient_nip: String,
    /// Max 35 characters
    pub invoice_number: String,
    /// Max 33 characters
    #[serde(default)]
    pub free_text: Option<String>,
    #[serde(default)]
    pub date: Option<Date>,
}

impl SplitPayment {
    /// `/VAT/{amount}/IDC/{nip}/INV/{invoice}` plus `/TXT/{text}` when free text is set
    pub fn title(&self) -> String {
        let mut title = format!(
            "/VAT/{}/IDC/{}/INV/{}",
            self.vat_amount, self.recipient_nip, self.invoice_number
        );
        if let Some(text) = self.free_text.as_deref().filter(|t| !t.is_empty()) {
            title.push_str("/TXT/");
            title.push_str(text);
        }
        title
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        schema::validate_nrb(&self.debit_account, "debit account")?;
        schema::validate_nrb(&self.credit_account, "credit account")?;
        schema::validate_recipient_name(&self.recipient_name)?;
        schema::validate_address(self.address.as_deref(), false)?;
        schema::validate_transfer_mode(self.mode, &TransferMode::ALL)?;
        schema::validate_nip(&self.recipient_nip, "recipient NIP")?;
        schema::validate_invoice_number(&self.invoice_number)?;
        schema::validate_free_text(self.free_text.as_deref())
    }

    pub fn marshal(&self) -> Result<String, ValidationError> {
        self.validate()?;

        Ok(Line::new(TransferKind::SplitPayment)
            .field(&self.debit_account)
            .field(&self.credit_account)
            .field(&self.recipient_name)
            .optional(self.address.as_deref())
            .field(self.gross_amount)
            .field(self.mode)
            .field(self.title())
            .optional(self.date)
            .finish())
    }
}
