//! Core state and contracts for the logger picker.
//!
//! The root module re-exports the picker state machine together with the
//! collaborator traits it is driven by, so that front-ends can wire a data
//! source and an applier without digging through the module hierarchy.

pub mod card;
pub mod debounce;
pub mod describe;
pub mod error;
pub mod feedback;
pub mod level;
pub mod picker;
pub mod remote;

pub use crate::card::{CardCatalog, CardDescriptor, LOGGER_PICKER_CARD};
pub use crate::debounce::Debounce;
pub use crate::describe::describe_logger;
pub use crate::error::{ApplyError, CatalogError, ParseLevelError, SourceError};
pub use crate::feedback::{FEEDBACK_DURATION, Feedback, FeedbackKind, FeedbackSlot};
pub use crate::level::Level;
pub use crate::picker::{
	DEBOUNCE_INTERVAL, LoadState, Picker, Status, StatusKind, VISIBLE_LIMIT, VisibleResults,
	filter_candidates,
};
pub use crate::remote::{ApplyLevels, Backend, LevelApplier, LoggerListing, LoggerSource, StaticBackend};
