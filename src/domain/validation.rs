use std::borrow::Cow;

use validator::{Validate, ValidationError};

use crate::domain::error::{AppError, AppResult};
use crate::domain::models::account::Account;

pub const NAME_MIN_LENGTH: usize = 5;
pub const DOCUMENT_MIN_LENGTH: usize = 11;
pub const PHONE_MIN_LENGTH: usize = 9;

/// Order in which field violations are reported. Only the first one surfaces.
const ACCOUNT_FIELDS: [&str; 3] = ["name", "document", "phone"];

pub fn is_name(name: &str) -> Result<(), ValidationError> {
    required_min_length("name", name, NAME_MIN_LENGTH)
}

pub fn is_document(document: &str) -> Result<(), ValidationError> {
    required_min_length("document", document, DOCUMENT_MIN_LENGTH)
}

pub fn is_phone(phone: &str) -> Result<(), ValidationError> {
    required_min_length("phone", phone, PHONE_MIN_LENGTH)
}

fn required_min_length(field: &str, value: &str, min: usize) -> Result<(), ValidationError> {
    if value.is_empty() {
        return Err(ValidationError::new("blank")
            .with_message(Cow::from(format!("[{field}] nao pode estar em branco!"))));
    }

    // Counted in characters so accented input is not measured in bytes.
    if value.chars().count() < min {
        return Err(ValidationError::new("length").with_message(Cow::from(format!(
            "[{field}] deve ter no mínimo {min} caracteres!"
        ))));
    }

    Ok(())
}

pub fn validate_account(account: &Account) -> AppResult<()> {
    let Err(errors) = account.validate() else {
        return Ok(());
    };

    let field_errors = errors.field_errors();

    let message = ACCOUNT_FIELDS
        .iter()
        .filter_map(|field| field_errors.get(*field))
        .flat_map(|violations| violations.iter())
        .next()
        .map(ToString::to_string)
        .unwrap_or_else(|| errors.to_string());

    Err(AppError::BadRequest(message))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::*;

    const NAME: &str = "Pedro Vieira";
    const DOCUMENT: &str = "493.166.368-09";
    const PHONE: &str = "(11)98822-0443";

    #[rstest]
    #[case::name_blank("", DOCUMENT, PHONE, "[name] nao pode estar em branco!")]
    #[case::name_short("test", DOCUMENT, PHONE, "[name] deve ter no mínimo 5 caracteres!")]
    #[case::document_blank("testee", "", PHONE, "[document] nao pode estar em branco!")]
    #[case::document_short("testee", "4931663680", PHONE, "[document] deve ter no mínimo 11 caracteres!")]
    #[case::phone_blank("testee", "49316636809", "", "[phone] nao pode estar em branco!")]
    #[case::phone_short("testee", "49316636809", "98822044", "[phone] deve ter no mínimo 9 caracteres!")]
    fn test_invalid_account(
        #[case] name: &str,
        #[case] document: &str,
        #[case] phone: &str,
        #[case] message: &str,
    ) {
        let error = validate_account(&Account::new(name, document, phone)).unwrap_err();

        assert_eq!(error, AppError::BadRequest(message));
    }

    #[rstest]
    #[case::all_invalid("", "", "")]
    #[case::name_and_phone("abc", DOCUMENT, "1")]
    #[case::name_and_document("abcd", "123", PHONE)]
    fn test_name_reported_first(#[case] name: &str, #[case] document: &str, #[case] phone: &str) {
        let error = validate_account(&Account::new(name, document, phone)).unwrap_err();

        assert!(error.message.starts_with("[name]"));
    }

    #[test]
    fn test_document_reported_before_phone() {
        let error = validate_account(&Account::new(NAME, "123", "1")).unwrap_err();

        assert_eq!(
            error,
            AppError::BadRequest("[document] deve ter no mínimo 11 caracteres!")
        );
    }

    #[test]
    fn test_valid_account() {
        assert!(validate_account(&Account::new(NAME, DOCUMENT, PHONE)).is_ok());
    }

    #[test]
    fn test_exact_minimum_lengths() {
        let account = Account::new("a".repeat(5), "1".repeat(11), "9".repeat(9));

        assert!(validate_account(&account).is_ok());
    }

    #[test]
    fn test_length_counts_characters() {
        assert!(is_name("Joãoã").is_ok());
        assert!(is_name("João").is_err());
    }

    #[test]
    fn test_whitespace_is_not_blank() {
        assert!(is_name("     ").is_ok());
    }

    #[test]
    fn test_format_is_not_checked() {
        assert!(is_document("abcdefghijk").is_ok());
        assert!(is_phone("not-a-phone").is_ok());
    }
}
