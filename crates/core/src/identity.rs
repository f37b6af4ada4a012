//! Login validation
//!
//! A player needs a name (at least 3 characters once trimmed) and one contact
//! field. The business edition asks for a company name (at least 2
//! characters); the phone edition asks for a phone number with 10 or 11 digits
//! once spaces, dashes, parentheses and a leading `+` are removed.

use crate::error::IdentityError;
use crate::types::ContactKind;

const MIN_NAME_CHARS: usize = 3;
const MIN_BUSINESS_CHARS: usize = 2;
const PHONE_DIGITS: std::ops::RangeInclusive<usize> = 10..=11;

/// A validated player, ready to start a session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerIdentity {
    name: String,
    contact: String,
    kind: ContactKind,
}

impl PlayerIdentity {
    /// Validate raw form input. Both fields are stored trimmed.
    pub fn validate(name: &str, contact: &str, kind: ContactKind) -> Result<Self, IdentityError> {
        if !is_valid_name(name) {
            return Err(IdentityError::InvalidName { kind });
        }
        if !is_valid_contact(contact, kind) {
            return Err(IdentityError::InvalidContact { kind });
        }

        Ok(Self {
            name: name.trim().to_string(),
            contact: contact.trim().to_string(),
            kind,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn contact(&self) -> &str {
        &self.contact
    }

    pub fn kind(&self) -> ContactKind {
        self.kind
    }
}

pub fn is_valid_name(name: &str) -> bool {
    name.trim().chars().count() >= MIN_NAME_CHARS
}

pub fn is_valid_contact(contact: &str, kind: ContactKind) -> bool {
    let contact = contact.trim();
    match kind {
        ContactKind::Business => contact.chars().count() >= MIN_BUSINESS_CHARS,
        ContactKind::Phone => {
            let body = contact.strip_prefix('+').unwrap_or(contact);
            let mut digits = 0;
            for ch in body.chars() {
                match ch {
                    '0'..='9' => digits += 1,
                    ' ' | '-' | '(' | ')' => {}
                    _ => return false,
                }
            }
            PHONE_DIGITS.contains(&digits)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_business_identity_is_trimmed() {
        let id = PlayerIdentity::validate("  Ana  ", " ACME ", ContactKind::Business).unwrap();
        assert_eq!(id.name(), "Ana");
        assert_eq!(id.contact(), "ACME");
        assert_eq!(id.kind(), ContactKind::Business);
    }

    #[test]
    fn test_short_name_rejected() {
        assert_eq!(
            PlayerIdentity::validate(" Al ", "ACME", ContactKind::Business),
            Err(IdentityError::InvalidName {
                kind: ContactKind::Business
            })
        );
    }

    #[test]
    fn test_name_length_counts_characters() {
        // "Zé" is three bytes but two characters.
        assert!(!is_valid_name("Zé "));
        assert!(is_valid_name("Zéa"));
        assert!(!is_valid_name("é"));
    }

    #[test]
    fn test_short_business_rejected() {
        assert!(!is_valid_contact(" X ", ContactKind::Business));
        assert!(is_valid_contact("XY", ContactKind::Business));
    }

    #[test]
    fn test_phone_formats() {
        assert!(is_valid_contact("(11) 98765-4321", ContactKind::Phone));
        assert!(is_valid_contact("+11 98765-4321", ContactKind::Phone));
        // Country code pushes it past 11 digits.
        assert!(!is_valid_contact("+55 11 98765-4321", ContactKind::Phone));
        assert!(is_valid_contact("1133334444", ContactKind::Phone));
        assert!(!is_valid_contact("12345", ContactKind::Phone));
        assert!(!is_valid_contact("11 9876-abcd", ContactKind::Phone));
    }

    #[test]
    fn test_error_message_matches_edition() {
        let business = PlayerIdentity::validate("Ana", "", ContactKind::Business).unwrap_err();
        assert_eq!(
            business.to_string(),
            "Informe um nome e uma empresa válidos."
        );

        let phone = PlayerIdentity::validate("", "", ContactKind::Phone).unwrap_err();
        assert_eq!(phone.to_string(), "Informe um nome e um telefone válidos.");
    }
}
