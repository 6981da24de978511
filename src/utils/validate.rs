use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Z|a-z]{2,}$").expect("Invalid email regex")
});

// NIS: digits only, reasonable length for a primary school register
static NIS_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]{4,20}$").expect("Invalid NIS regex"));

static TIME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([01][0-9]|2[0-3]):[0-5][0-9]$").expect("Invalid time regex"));

pub fn validate_email(email: &str) -> Result<(), &'static str> {
    if !EMAIL_RE.is_match(email) {
        return Err("Email format is invalid");
    }
    Ok(())
}

pub fn validate_nis(nis: &str) -> Result<(), &'static str> {
    if !NIS_RE.is_match(nis) {
        return Err("NIS must be 4 to 20 digits");
    }
    Ok(())
}

/// "HH:MM" wall-clock strings (schedule slots, late cutoff).
pub fn validate_time_of_day(value: &str) -> Result<(), &'static str> {
    if !TIME_RE.is_match(value) {
        return Err("Time must be in HH:MM 24-hour format");
    }
    Ok(())
}

pub fn validate_grade_level(grade: i32) -> Result<(), &'static str> {
    if !(1..=6).contains(&grade) {
        return Err("Grade level must be between 1 and 6");
    }
    Ok(())
}

/// Password policy result
#[derive(Debug, Clone)]
pub struct PasswordValidationResult {
    pub is_valid: bool,
    pub errors: Vec<&'static str>,
}

impl PasswordValidationResult {
    pub fn error_message(&self) -> String {
        self.errors.join("; ")
    }
}

/// Password policy: at least 8 chars with upper, lower and digit.
pub fn validate_password(password: &str) -> PasswordValidationResult {
    let mut errors = Vec::new();

    if password.len() < 8 {
        errors.push("Password must be at least 8 characters long");
    }

    if !password.chars().any(|c| c.is_ascii_uppercase()) {
        errors.push("Password must contain at least one uppercase letter");
    }

    if !password.chars().any(|c| c.is_ascii_lowercase()) {
        errors.push("Password must contain at least one lowercase letter");
    }

    if !password.chars().any(|c| c.is_ascii_digit()) {
        errors.push("Password must contain at least one digit");
    }

    let weak_passwords = [
        "password",
        "12345678",
        "123456789",
        "qwerty123",
        "admin123",
        "password1",
        "Password1",
        "Qwerty123",
        "Abcd1234",
    ];
    if weak_passwords
        .iter()
        .any(|&weak| password.eq_ignore_ascii_case(weak))
    {
        errors.push("Password is too common, please choose a stronger password");
    }

    PasswordValidationResult {
        is_valid: errors.is_empty(),
        errors,
    }
}

pub fn validate_password_simple(password: &str) -> Result<(), String> {
    let result = validate_password(password);
    if result.is_valid {
        Ok(())
    } else {
        Err(result.error_message())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_email() {
        assert!(validate_email("wali.kelas3@sekolah.sch.id").is_ok());
        assert!(validate_email("admin@example.com").is_ok());
    }

    #[test]
    fn test_invalid_email() {
        assert!(validate_email("not-an-email").is_err());
        assert!(validate_email("missing@tld").is_err());
    }

    #[test]
    fn test_nis() {
        assert!(validate_nis("20240001").is_ok());
        assert!(validate_nis("123").is_err());
        assert!(validate_nis("2024-001").is_err());
    }

    #[test]
    fn test_time_of_day() {
        assert!(validate_time_of_day("07:15").is_ok());
        assert!(validate_time_of_day("23:59").is_ok());
        assert!(validate_time_of_day("24:00").is_err());
        assert!(validate_time_of_day("7:15").is_err());
    }

    #[test]
    fn test_grade_level() {
        assert!(validate_grade_level(1).is_ok());
        assert!(validate_grade_level(6).is_ok());
        assert!(validate_grade_level(0).is_err());
        assert!(validate_grade_level(7).is_err());
    }

    #[test]
    fn test_valid_password() {
        assert!(validate_password("SecureP@ss1").is_valid);
        assert!(validate_password("SecurePass123").is_valid);
    }

    #[test]
    fn test_short_password() {
        let result = validate_password("Ab1");
        assert!(!result.is_valid);
        assert!(
            result
                .errors
                .contains(&"Password must be at least 8 characters long")
        );
    }

    #[test]
    fn test_common_password() {
        let result = validate_password("Password1");
        assert!(!result.is_valid);
        assert!(
            result
                .errors
                .contains(&"Password is too common, please choose a stronger password")
        );
    }
}
