use thiserror::Error;

/// Result type alias using BeanError
pub type Result<T> = std::result::Result<T, BeanError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// Each kind maps to a stable error code usable for programmatic handling,
/// test assertions and log correlation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExErrorKind {
    /// Type-mismatched or otherwise unusable operands
    InvalidArgument,
    /// A getter or setter could not be invoked or rejected the value
    PropertyAccess,
    /// A fresh instance could not be constructed
    Instantiation,
    /// The serialization round-trip failed
    Serialization,
    /// Properties of an object could not be enumerated
    Introspection,
    /// Property values have no natural ordering
    Comparison,
    Internal,
}

impl ExErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ExErrorKind::InvalidArgument => "ERR_INVALID_ARGUMENT",
            ExErrorKind::PropertyAccess => "ERR_PROPERTY_ACCESS",
            ExErrorKind::Instantiation => "ERR_INSTANTIATION",
            ExErrorKind::Serialization => "ERR_SERIALIZATION",
            ExErrorKind::Introspection => "ERR_INTROSPECTION",
            ExErrorKind::Comparison => "ERR_COMPARISON",
            ExErrorKind::Internal => "ERR_INTERNAL",
        }
    }
}

/// Canonical structured error type
///
/// Carries the classification used by the logging facility plus optional
/// context about the operation, bean type and property involved.
#[derive(Debug, Clone)]
pub struct ExError {
    kind: ExErrorKind,
    op: Option<String>,
    type_name: Option<String>,
    property: Option<String>,
    message: String,
    source: Option<Box<ExError>>,
}

impl ExError {
    /// Create a new error with the specified kind
    pub fn new(kind: ExErrorKind) -> Self {
        Self {
            kind,
            op: None,
            type_name: None,
            property: None,
            message: String::new(),
            source: None,
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add bean type context
    pub fn with_type_name(mut self, type_name: impl Into<String>) -> Self {
        self.type_name = Some(type_name.into());
        self
    }

    /// Add property context
    pub fn with_property(mut self, property: impl Into<String>) -> Self {
        self.property = Some(property.into());
        self
    }

    /// Add custom message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Add source error
    pub fn with_source(mut self, source: ExError) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    pub fn kind(&self) -> ExErrorKind {
        self.kind
    }

    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    pub fn type_name(&self) -> Option<&str> {
        self.type_name.as_deref()
    }

    pub fn property(&self) -> Option<&str> {
        self.property.as_deref()
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn source_error(&self) -> Option<&ExError> {
        self.source.as_deref()
    }
}

impl std::fmt::Display for ExError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.code())?;
        if let Some(op) = &self.op {
            write!(f, " in operation '{}'", op)?;
        }
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        if let Some(type_name) = &self.type_name {
            write!(f, " (type: {})", type_name)?;
        }
        if let Some(property) = &self.property {
            write!(f, " (property: {})", property)?;
        }
        Ok(())
    }
}

impl std::error::Error for ExError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_deref()
            .map(|e| e as &(dyn std::error::Error + 'static))
    }
}

// ========== End Error Facility ==========

/// Error taxonomy for bean introspection, comparison, merge and clone
#[derive(Error, Debug, Clone, PartialEq)]
pub enum BeanError {
    // ===== Argument Errors =====
    /// Operands cannot be used together
    #[error("Invalid argument to {op}: {reason}")]
    InvalidArgument { op: String, reason: String },

    /// The two operands are of different runtime types
    #[error("Type mismatch in {op}: {source_type} vs {compare_type}")]
    TypeMismatch {
        op: String,
        source_type: String,
        compare_type: String,
    },

    // ===== Accessor Errors =====
    /// A getter or setter failed
    #[error("Cannot access property {property} on {type_name}: {reason}")]
    PropertyAccess {
        type_name: String,
        property: String,
        reason: String,
    },

    /// The bean has no property with the given name
    #[error("Unknown property {property} on {type_name}")]
    UnknownProperty { type_name: String, property: String },

    /// The object's properties could not be enumerated
    #[error("Cannot describe {type_name}: {reason}")]
    Introspection { type_name: String, reason: String },

    // ===== Comparison Errors =====
    /// The property values have no natural ordering
    #[error("Cannot compare property {property}: {reason}")]
    Comparison { property: String, reason: String },

    // ===== Clone Errors =====
    /// No fresh instance could be constructed
    #[error("Cannot instantiate {type_name}: {reason}")]
    Instantiation { type_name: String, reason: String },

    /// The byte round-trip failed
    #[error("Serialization error: {message}")]
    Serialization { message: String },
}

impl BeanError {
    /// Classify this error without building the full structured form
    pub fn kind(&self) -> ExErrorKind {
        match self {
            BeanError::InvalidArgument { .. } | BeanError::TypeMismatch { .. } => {
                ExErrorKind::InvalidArgument
            }
            BeanError::PropertyAccess { .. } | BeanError::UnknownProperty { .. } => {
                ExErrorKind::PropertyAccess
            }
            BeanError::Introspection { .. } => ExErrorKind::Introspection,
            BeanError::Comparison { .. } => ExErrorKind::Comparison,
            BeanError::Instantiation { .. } => ExErrorKind::Instantiation,
            BeanError::Serialization { .. } => ExErrorKind::Serialization,
        }
    }

    pub(crate) fn property_access(
        type_name: impl Into<String>,
        property: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        BeanError::PropertyAccess {
            type_name: type_name.into(),
            property: property.into(),
            reason: reason.into(),
        }
    }
}

/// Conversion from BeanError to ExError
impl From<BeanError> for ExError {
    fn from(err: BeanError) -> Self {
        let kind = err.kind();
        match err {
            BeanError::InvalidArgument { op, reason } => ExError::new(kind)
                .with_op(op)
                .with_message(format!("Invalid argument: {}", reason)),

            BeanError::TypeMismatch {
                op,
                source_type,
                compare_type,
            } => ExError::new(kind)
                .with_op(op)
                .with_type_name(source_type.clone())
                .with_message(format!(
                    "Operands have different types: {} vs {}",
                    source_type, compare_type
                )),

            BeanError::PropertyAccess {
                type_name,
                property,
                reason,
            } => ExError::new(kind)
                .with_type_name(type_name)
                .with_property(property)
                .with_message(reason),

            BeanError::UnknownProperty {
                type_name,
                property,
            } => ExError::new(kind)
                .with_type_name(type_name)
                .with_property(property)
                .with_message("No such property"),

            BeanError::Introspection { type_name, reason } => ExError::new(kind)
                .with_type_name(type_name)
                .with_message(reason),

            BeanError::Comparison { property, reason } => ExError::new(kind)
                .with_property(property)
                .with_message(reason),

            BeanError::Instantiation { type_name, reason } => ExError::new(kind)
                .with_type_name(type_name)
                .with_message(reason),

            BeanError::Serialization { message } => ExError::new(kind).with_message(message),
        }
    }
}

/// Conversion from serde_json::Error to BeanError
impl From<serde_json::Error> for BeanError {
    fn from(err: serde_json::Error) -> Self {
        BeanError::Serialization {
            message: err.to_string(),
        }
    }
}
