// 📐 Shape Layer - Field validation
// Length, character-set, digit and enumeration rules for every import field

use crate::error::ValidationError;
use crate::values::{IdentifierType, PeriodType, TransferMode};
use std::collections::HashSet;
use std::sync::LazyLock;

type Result = std::result::Result<(), ValidationError>;

// ============================================================================
// CHARACTER SETS
// ============================================================================

const DIGITS: &str = "0123456789";
const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
const POLISH: &str = "ąćęłńóśźżĄĆĘŁŃÓŚŹŻ";

// None of these sets contains '|', the field delimiter.
static RECIPIENT_NAME_CHARS: LazyLock<HashSet<char>> =
    LazyLock::new(|| text_chars("`!@#$%^&*()_+-=[]{}; :.?/"));
static ADDRESS_CHARS: LazyLock<HashSet<char>> = LazyLock::new(|| text_chars("-.,:;/ "));
static TITLE_CHARS: LazyLock<HashSet<char>> =
    LazyLock::new(|| text_chars("`!@#$%^&*()_+-=[]{}; :,.?/"));
static PAYER_NAME_CHARS: LazyLock<HashSet<char>> = LazyLock::new(|| text_chars("-;:.,/ "));
static FORM_SYMBOL_CHARS: LazyLock<HashSet<char>> =
    LazyLock::new(|| DIGITS.chars().chain(UPPERCASE.chars()).chain("-".chars()).collect());
static OBLIGATION_ID_CHARS: LazyLock<HashSet<char>> = LazyLock::new(|| text_chars("-.,:; "));
// Free text shares this set
static INVOICE_CHARS: LazyLock<HashSet<char>> = LazyLock::new(|| text_chars("-.,:;/ "));

/// Letters, digits and Polish diacritics plus the role-specific punctuation
fn text_chars(punctuation: &str) -> HashSet<char> {
    DIGITS
        .chars()
        .chain(UPPERCASE.chars())
        .chain(LOWERCASE.chars())
        .chain(POLISH.chars())
        .chain(punctuation.chars())
        .collect()
}

fn contains_only(value: &str, allowed: &HashSet<char>) -> bool {
    value.chars().all(|c| allowed.contains(&c))
}

fn is_digits_only(value: &str) -> bool {
    value.chars().all(|c| c.is_ascii_digit())
}

fn char_len(value: &str) -> usize {
    value.chars().count()
}

// ============================================================================
// GENERIC RULES
// ============================================================================

/// Exact-length digit string
fn exact_digits(value: &str, len: usize, field: &'static str) -> Result {
    let actual = char_len(value);
    if actual != len {
        return Err(ValidationError::new(
            field,
            format!("must be exactly {} digits, got {}", len, actual),
        ));
    }
    if !is_digits_only(value) {
        return Err(ValidationError::new(field, "must contain only digits"));
    }
    Ok(())
}

/// Bounded-length string drawn from a restricted character set
fn bounded_text(value: &str, max: usize, allowed: &HashSet<char>, field: &'static str) -> Result {
    let actual = char_len(value);
    if actual > max {
        return Err(ValidationError::new(
            field,
            format!("must be at most {} characters, got {}", max, actual),
        ));
    }
    if !contains_only(value, allowed) {
        return Err(ValidationError::new(field, "contains invalid characters"));
    }
    Ok(())
}

fn required_text(value: &str, max: usize, allowed: &HashSet<char>, field: &'static str) -> Result {
    if value.is_empty() {
        return Err(ValidationError::new(field, "is required"));
    }
    bounded_text(value, max, allowed, field)
}

fn optional_text(
    value: Option<&str>,
    max: usize,
    allowed: &HashSet<char>,
    field: &'static str,
) -> Result {
    match value {
        None | Some("") => Ok(()),
        Some(value) => bounded_text(value, max, allowed, field),
    }
}

// ============================================================================
// FIELD RULES
// ============================================================================

/// 26-digit NRB account number
pub(crate) fn validate_nrb(account: &str, field: &'static str) -> Result {
    exact_digits(account, 26, field)
}

pub(crate) fn validate_nip(nip: &str, field: &'static str) -> Result {
    exact_digits(nip, 10, field)
}

pub(crate) fn validate_recipient_name(name: &str) -> Result {
    required_text(name, 80, &RECIPIENT_NAME_CHARS, "recipient name")
}

/// Address is mandatory for some transfer kinds and optional for others
pub(crate) fn validate_address(address: Option<&str>, required: bool) -> Result {
    match address {
        None | Some("") if required => Err(ValidationError::new("address", "is required")),
        _ => optional_text(address, 60, &ADDRESS_CHARS, "address"),
    }
}

pub(crate) fn validate_title(title: &str) -> Result {
    required_text(title, 140, &TITLE_CHARS, "title")
}

pub(crate) fn validate_payer_name(name: &str) -> Result {
    required_text(name, 50, &PAYER_NAME_CHARS, "payer name")
}

pub(crate) fn validate_form_symbol(symbol: &str) -> Result {
    required_text(symbol, 6, &FORM_SYMBOL_CHARS, "form symbol").map_err(|err| {
        if err.message == "contains invalid characters" {
            ValidationError::new(
                "form symbol",
                "contains invalid characters (allowed: 0-9, A-Z, -)",
            )
        } else {
            err
        }
    })
}

pub(crate) fn validate_obligation_id(id: Option<&str>) -> Result {
    optional_text(id, 20, &OBLIGATION_ID_CHARS, "obligation ID")
}

pub(crate) fn validate_invoice_number(number: &str) -> Result {
    required_text(number, 35, &INVOICE_CHARS, "invoice number")
}

pub(crate) fn validate_free_text(text: Option<&str>) -> Result {
    optional_text(text, 33, &INVOICE_CHARS, "free text")
}

/// The caller passes exactly the modes its transfer kind accepts
pub(crate) fn validate_transfer_mode(mode: TransferMode, allowed: &[TransferMode]) -> Result {
    if allowed.contains(&mode) {
        return Ok(());
    }
    let codes: Vec<String> = allowed.iter().map(|m| m.to_string()).collect();
    Err(ValidationError::new(
        "transfer mode",
        format!("must be one of: {}", codes.join(", ")),
    ))
}

/// Shape of the identifier depends on which document it comes from
pub(crate) fn validate_identifier(id: &str, id_type: IdentifierType) -> Result {
    if id.is_empty() {
        return Err(ValidationError::new("identifier", "is required"));
    }

    let len = char_len(id);
    match id_type {
        IdentifierType::Nip => {
            if len != 10 || !is_digits_only(id) {
                return Err(ValidationError::new("identifier", "NIP must be exactly 10 digits"));
            }
        }
        IdentifierType::Regon => {
            if (len != 9 && len != 14) || !is_digits_only(id) {
                return Err(ValidationError::new("identifier", "REGON must be 9 or 14 digits"));
            }
        }
        IdentifierType::Pesel => {
            if len != 11 || !is_digits_only(id) {
                return Err(ValidationError::new("identifier", "PESEL must be exactly 11 digits"));
            }
        }
        IdentifierType::IdCard => {
            if !(8..=9).contains(&len) {
                return Err(ValidationError::new(
                    "identifier",
                    "ID card number must be 8 or 9 characters",
                ));
            }
        }
        IdentifierType::Passport | IdentifierType::Other => {
            if len > 14 {
                return Err(ValidationError::new("identifier", "must be at most 14 characters"));
            }
        }
    }
    Ok(())
}

/// Two-digit year, e.g. "05" for 2005
pub(crate) fn validate_year(year: Option<&str>) -> Result {
    match year {
        None | Some("") => Ok(()),
        Some(year) if char_len(year) == 2 && is_digits_only(year) => Ok(()),
        Some(_) => Err(ValidationError::new("year", "must be 2 digits (e.g., 05 for 2005)")),
    }
}

pub(crate) fn validate_period_number(number: Option<&str>, period_type: Option<PeriodType>) -> Result {
    let number = number.unwrap_or("");

    let period_type = match period_type {
        None | Some(PeriodType::Year) => {
            if !number.is_empty() {
                return Err(ValidationError::new(
                    "period number",
                    "should be empty for yearly periods",
                ));
            }
            return Ok(());
        }
        Some(period_type) => period_type,
    };

    if number.is_empty() {
        return Err(ValidationError::new(
            "period number",
            "is required for non-yearly periods",
        ));
    }
    if char_len(number) > 4 || !is_digits_only(number) {
        return Err(ValidationError::new("period number", "must be 1-4 digits"));
    }

    // At most four ASCII digits, always fits
    let n: u16 = number
        .parse()
        .map_err(|_| ValidationError::new("period number", "must be 1-4 digits"))?;

    let (range, message) = match period_type {
        PeriodType::HalfYear => (1..=2, "half-year number must be 01 or 02"),
        PeriodType::Quarter => (1..=4, "quarter number must be 01, 02, 03, or 04"),
        PeriodType::Month => (1..=12, "month number must be 01-12"),
        PeriodType::Decade => (1..=3, "decade number must be 01, 02, or 03"),
        PeriodType::Day => {
            // DDMM; day and month are not range-checked
            if number.len() != 4 {
                return Err(ValidationError::new(
                    "period number",
                    "day format must be DDMM (4 digits)",
                ));
            }
            return Ok(());
        }
        PeriodType::Year => return Ok(()),
    };

    if !range.contains(&n) {
        return Err(ValidationError::new("period number", message));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_nrb_length_and_digits() {
        assert!(validate_nrb("51109010430000000100111111", "debit account").is_ok());

        let err = validate_nrb("5110901043000000010011111", "debit account").unwrap_err();
        assert_eq!(err.to_string(), "debit account must be exactly 26 digits, got 25");

        let err = validate_nrb("5110901043000000010011111X", "credit account").unwrap_err();
        assert_eq!(err.field, "credit account");
        assert_eq!(err.message, "must contain only digits");
    }

    #[test]
    fn test_nip() {
        assert!(validate_nip("7850000000", "NIP").is_ok());
        assert!(validate_nip("123", "NIP").is_err());
        assert!(validate_nip("78500000OO", "NIP").is_err());
    }

    #[test]
    fn test_recipient_name_bounds() {
        assert!(validate_recipient_name(&"a".repeat(80)).is_ok());
        assert!(validate_recipient_name(&"a".repeat(81)).is_err());
        assert!(validate_recipient_name("").is_err());
        assert!(validate_recipient_name("Zażółć Gęślą").is_ok());
        assert!(validate_recipient_name("Jan|Nowak").is_err());
    }

    #[test]
    fn test_diacritics_count_as_single_characters() {
        // 60 two-byte characters, still within the address limit
        assert!(validate_address(Some(&"ż".repeat(60)), true).is_ok());
        assert!(validate_address(Some(&"ż".repeat(61)), true).is_err());
    }

    #[test]
    fn test_address_requirement() {
        assert!(validate_address(None, true).is_err());
        assert!(validate_address(Some(""), true).is_err());
        assert!(validate_address(None, false).is_ok());
        assert!(validate_address(Some(""), false).is_ok());
        assert!(validate_address(Some("Warszawa ul. Szamocka 3,5 01748"), true).is_ok());
        assert!(validate_address(Some("Warszawa (centrum)"), false).is_err());
    }

    #[test]
    fn test_title_charset() {
        assert!(validate_title("Faktura nr 12/2020, płatne [PLN] 100%").is_ok());
        assert!(validate_title("title with \"quotes\"").is_err());
        assert!(validate_title(&"x".repeat(141)).is_err());
    }

    #[test]
    fn test_payer_name() {
        assert!(validate_payer_name("Jan Kowalski").is_ok());
        assert!(validate_payer_name("").is_err());
        assert!(validate_payer_name(&"b".repeat(51)).is_err());
        assert!(validate_payer_name("Jan & syn").is_err());
    }

    #[test]
    fn test_form_symbol() {
        assert!(validate_form_symbol("PIT5").is_ok());
        assert!(validate_form_symbol("VAT-7").is_ok());
        assert!(validate_form_symbol("pit5").is_err());
        assert!(validate_form_symbol("PIT-5LX").is_err());
        assert!(validate_form_symbol("").is_err());
        assert!(validate_form_symbol("ŁAD").is_err());
    }

    #[test]
    fn test_optional_fields_accept_absence() {
        assert!(validate_obligation_id(None).is_ok());
        assert!(validate_obligation_id(Some("")).is_ok());
        assert!(validate_obligation_id(Some("id.zobowiazania")).is_ok());
        assert!(validate_obligation_id(Some(&"1".repeat(21))).is_err());
        assert!(validate_obligation_id(Some("id/zob")).is_err());

        assert!(validate_free_text(None).is_ok());
        assert!(validate_free_text(Some("Faktura 5/2018")).is_ok());
        assert!(validate_free_text(Some(&"t".repeat(34))).is_err());
    }

    #[test]
    fn test_invoice_number() {
        assert!(validate_invoice_number("5/2018").is_ok());
        assert!(validate_invoice_number("").is_err());
        assert!(validate_invoice_number(&"9".repeat(36)).is_err());
    }

    #[test]
    fn test_transfer_mode_subset() {
        let only_elixir = [TransferMode::Elixir];
        assert!(validate_transfer_mode(TransferMode::Elixir, &only_elixir).is_ok());

        let err = validate_transfer_mode(TransferMode::Sorbnet, &only_elixir).unwrap_err();
        assert_eq!(err.to_string(), "transfer mode must be one of: 1");

        assert!(validate_transfer_mode(TransferMode::ExpressElixir, &TransferMode::ALL).is_ok());
    }

    #[rstest]
    #[case(IdentifierType::Nip, "9721230101", true)]
    #[case(IdentifierType::Nip, "972123010", false)]
    #[case(IdentifierType::Regon, "123456789", true)]
    #[case(IdentifierType::Regon, "12345678901234", true)]
    #[case(IdentifierType::Regon, "1234567890", false)]
    #[case(IdentifierType::Pesel, "44051401359", true)]
    #[case(IdentifierType::Pesel, "4405140135A", false)]
    #[case(IdentifierType::IdCard, "ABC123456", true)]
    #[case(IdentifierType::IdCard, "ABC1234", false)]
    #[case(IdentifierType::Passport, "EA1234567", true)]
    #[case(IdentifierType::Passport, "P123456789012345", false)]
    #[case(IdentifierType::Other, "X", true)]
    #[case(IdentifierType::Other, "", false)]
    fn test_identifier_shape(#[case] id_type: IdentifierType, #[case] id: &str, #[case] ok: bool) {
        assert_eq!(validate_identifier(id, id_type).is_ok(), ok);
    }

    #[rstest]
    #[case(None, true)]
    #[case(Some(""), true)]
    #[case(Some("05"), true)]
    #[case(Some("5"), false)]
    #[case(Some("2005"), false)]
    #[case(Some("a5"), false)]
    fn test_year(#[case] year: Option<&str>, #[case] ok: bool) {
        assert_eq!(validate_year(year).is_ok(), ok);
    }

    #[rstest]
    #[case(None, None, true)]
    #[case(None, Some("01"), false)]
    #[case(Some(PeriodType::Year), None, true)]
    #[case(Some(PeriodType::Year), Some("1"), false)]
    #[case(Some(PeriodType::Month), None, false)]
    #[case(Some(PeriodType::Month), Some("07"), true)]
    #[case(Some(PeriodType::Month), Some("12"), true)]
    #[case(Some(PeriodType::Month), Some("13"), false)]
    #[case(Some(PeriodType::Month), Some("00"), false)]
    #[case(Some(PeriodType::HalfYear), Some("02"), true)]
    #[case(Some(PeriodType::HalfYear), Some("03"), false)]
    #[case(Some(PeriodType::Quarter), Some("4"), true)]
    #[case(Some(PeriodType::Quarter), Some("5"), false)]
    #[case(Some(PeriodType::Decade), Some("03"), true)]
    #[case(Some(PeriodType::Decade), Some("04"), false)]
    #[case(Some(PeriodType::Day), Some("3112"), true)]
    #[case(Some(PeriodType::Day), Some("9999"), true)]
    #[case(Some(PeriodType::Day), Some("311"), false)]
    #[case(Some(PeriodType::Month), Some("00012"), false)]
    #[case(Some(PeriodType::Month), Some("1a"), false)]
    fn test_period_number(
        #[case] period_type: Option<PeriodType>,
        #[case] number: Option<&str>,
        #[case] ok: bool,
    ) {
        assert_eq!(validate_period_number(number, period_type).is_ok(), ok);
    }
}
