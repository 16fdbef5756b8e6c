use thiserror::Error;

/// Failure reported by a [`LoggerSource`](crate::LoggerSource).
///
/// The `Display` output is the human-readable message shown after `Error: `
/// in the status line, so variants avoid adding prefixes of their own.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SourceError {
	/// The remote side answered with an error payload.
	#[error("{message}")]
	Remote { code: String, message: String },

	/// The source could not be reached at all.
	#[error("{0}")]
	Unavailable(String),

	/// The source answered, but the listing could not be understood.
	#[error("invalid logger listing: {0}")]
	Malformed(String),
}

/// Failure reported by a [`LevelApplier`](crate::LevelApplier).
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ApplyError {
	/// The remote service rejected the call.
	#[error("{message}")]
	Remote { code: String, message: String },

	/// The applier could not be reached at all.
	#[error("{0}")]
	Unavailable(String),

	/// Nothing was selected, so there is nothing to apply.
	#[error("no loggers selected")]
	EmptySelection,
}

/// A level name that does not match any known [`Level`](crate::Level).
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown log level '{value}' (expected debug, info, warning, error, critical or notset)")]
pub struct ParseLevelError {
	pub value: String,
}

/// Errors raised while registering cards with a [`CardCatalog`](crate::CardCatalog).
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
	/// A card attempted to register a type name that already exists.
	#[error("card type '{type_name}' is already registered")]
	DuplicateType { type_name: &'static str },
}
