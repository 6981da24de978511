//! Unified error handling.
//!
//! The error enum is macro-generated so every variant carries a stable
//! code and a type name alongside its message.

use std::fmt;

macro_rules! define_absensi_errors {
    ($(
        $variant:ident($code:literal, $type_name:literal)
    ),* $(,)?) => {
        #[derive(Debug, Clone)]
        pub enum AbsensiError {
            $($variant(String),)*
        }

        impl AbsensiError {
            pub fn code(&self) -> &'static str {
                match self {
                    $(AbsensiError::$variant(_) => $code,)*
                }
            }

            pub fn error_type(&self) -> &'static str {
                match self {
                    $(AbsensiError::$variant(_) => $type_name,)*
                }
            }

            pub fn message(&self) -> &str {
                match self {
                    $(AbsensiError::$variant(msg) => msg,)*
                }
            }
        }

        paste::paste! {
            impl AbsensiError {
                $(
                    pub fn [<$variant:snake>]<T: Into<String>>(msg: T) -> Self {
                        AbsensiError::$variant(msg.into())
                    }
                )*
            }
        }
    };
}

define_absensi_errors! {
    DatabaseConfig("E001", "Database Configuration Error"),
    DatabaseConnection("E002", "Database Connection Error"),
    DatabaseOperation("E003", "Database Operation Error"),
    Validation("E004", "Validation Error"),
    NotFound("E005", "Resource Not Found"),
    Conflict("E006", "Resource Conflict"),
    Serialization("E007", "Serialization Error"),
    DateParse("E008", "Date Parse Error"),
    Authentication("E009", "Authentication Error"),
    Authorization("E010", "Authorization Error"),
}

impl AbsensiError {
    pub fn format_simple(&self) -> String {
        format!("{}: {}", self.error_type(), self.message())
    }
}

impl fmt::Display for AbsensiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for AbsensiError {}

impl From<sea_orm::DbErr> for AbsensiError {
    fn from(err: sea_orm::DbErr) -> Self {
        AbsensiError::DatabaseOperation(err.to_string())
    }
}

impl From<serde_json::Error> for AbsensiError {
    fn from(err: serde_json::Error) -> Self {
        AbsensiError::Serialization(err.to_string())
    }
}

impl From<chrono::ParseError> for AbsensiError {
    fn from(err: chrono::ParseError) -> Self {
        AbsensiError::DateParse(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, AbsensiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(AbsensiError::database_config("test").code(), "E001");
        assert_eq!(AbsensiError::validation("test").code(), "E004");
        assert_eq!(AbsensiError::not_found("test").code(), "E005");
        assert_eq!(AbsensiError::conflict("test").code(), "E006");
    }

    #[test]
    fn test_error_types() {
        assert_eq!(
            AbsensiError::conflict("test").error_type(),
            "Resource Conflict"
        );
        assert_eq!(
            AbsensiError::validation("test").error_type(),
            "Validation Error"
        );
    }

    #[test]
    fn test_error_message() {
        let err = AbsensiError::validation("End date before start date");
        assert_eq!(err.message(), "End date before start date");
    }

    #[test]
    fn test_format_simple() {
        let err = AbsensiError::not_found("Student not found");
        let formatted = err.format_simple();
        assert!(formatted.contains("Resource Not Found"));
        assert!(formatted.contains("Student not found"));
    }
}
