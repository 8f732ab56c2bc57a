//! Type identity for models and their stand-ins

use std::fmt;

/// Identity of a record type: a real model or one of its stand-in classes
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum RecordType {
    /// The real, persisted model
    Model(String),
    /// The singleton Null stand-in of a model (`User::Null`)
    Null(String),
    /// The repeatable Void stand-in of a model (`User::Void`)
    Void(String),
}

impl RecordType {
    pub fn model(name: impl Into<String>) -> Self {
        Self::Model(name.into())
    }

    pub fn null(name: impl Into<String>) -> Self {
        Self::Null(name.into())
    }

    pub fn void(name: impl Into<String>) -> Self {
        Self::Void(name.into())
    }

    /// Name of the model this type belongs to
    pub fn model_name(&self) -> &str {
        match self {
            Self::Model(name) | Self::Null(name) | Self::Void(name) => name,
        }
    }

    /// Returns true for stand-in types
    pub fn is_stand_in(&self) -> bool {
        !matches!(self, Self::Model(_))
    }
}

impl fmt::Display for RecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Model(name) => write!(f, "{}", name),
            Self::Null(name) => write!(f, "{}::Null", name),
            Self::Void(name) => write!(f, "{}::Void", name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(RecordType::model("User").to_string(), "User");
        assert_eq!(RecordType::null("User").to_string(), "User::Null");
        assert_eq!(RecordType::void("Product").to_string(), "Product::Void");
    }

    #[test]
    fn test_model_name_is_shared() {
        assert_eq!(RecordType::null("User").model_name(), "User");
        assert!(RecordType::void("User").is_stand_in());
        assert!(!RecordType::model("User").is_stand_in());
        assert_ne!(RecordType::null("User"), RecordType::void("User"));
    }
}
