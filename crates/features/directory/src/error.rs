use std::borrow::Cow;
use std::fmt;

/// Directory validation error taxonomy.
///
/// Every variant is a structural verdict about one record; nothing here is
/// retried or coerced. Referential problems are not errors — see
/// [`ReferentialWarning`].
#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    /// Required field missing, empty, or not of the declared type.
    #[error("{entity}.{field} is missing, empty, or not the declared type")]
    Shape { entity: &'static str, field: &'static str },

    /// Value outside a closed literal set.
    #[error("{entity}.{field} value `{value}` is not one of {expected:?}")]
    Enum {
        entity: &'static str,
        field: &'static str,
        value: String,
        expected: &'static [&'static str],
    },

    /// Present but malformed value (email syntax, timestamp format).
    #[error("{entity}.{field} is malformed: {reason}")]
    Format { entity: &'static str, field: &'static str, reason: Cow<'static, str> },

    /// Uniqueness violation across a record collection.
    #[error("duplicate {entity} {field} `{value}`")]
    Duplicate { entity: &'static str, field: &'static str, value: String },

    /// Residual decode failure after the field-level checks passed.
    #[error("{entity} record did not decode: {source}")]
    Decode {
        entity: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

/// A role grant references a repository id unknown to the snapshot.
///
/// Non-fatal by design: referential integrity is the external store's
/// responsibility, so this layer only surfaces the observation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReferentialWarning {
    pub user_id: String,
    pub repository_id: String,
}

impl fmt::Display for ReferentialWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "user `{}` holds a role for unknown repository `{}`",
            self.user_id, self.repository_id
        )
    }
}
