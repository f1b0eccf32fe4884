//! Client-side registration password policy.

use thiserror::Error;

/// Symbols accepted as the required special character.
pub const PASSWORD_SYMBOLS: &str = "!@#$%^&*(),.?\":{}|<>";
pub const MIN_PASSWORD_CHARS: usize = 8;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
/// First policy rule a password breaks. Display text is shown to the user verbatim.
pub enum PasswordPolicyError {
    #[error("Passwords do not match")]
    Mismatch,
    #[error("Password must be at least 8 characters long")]
    TooShort,
    #[error(
        "Password must contain at least one lowercase letter, one uppercase letter, one digit, and one special character"
    )]
    MissingCharacterClass,
}

/// Checks a (trimmed) password and its confirmation, in order: match, length, composition.
pub fn validate_registration(password: &str, confirm: &str) -> Result<(), PasswordPolicyError> {
    if password != confirm {
        return Err(PasswordPolicyError::Mismatch);
    }
    if password.chars().count() < MIN_PASSWORD_CHARS {
        return Err(PasswordPolicyError::TooShort);
    }

    let has_lower = password.chars().any(|c| c.is_ascii_lowercase());
    let has_upper = password.chars().any(|c| c.is_ascii_uppercase());
    let has_digit = password.chars().any(|c| c.is_ascii_digit());
    let has_symbol = password.chars().any(|c| PASSWORD_SYMBOLS.contains(c));
    if !(has_lower && has_upper && has_digit && has_symbol) {
        return Err(PasswordPolicyError::MissingCharacterClass);
    }
    Ok(())
}
