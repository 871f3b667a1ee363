//! Debounced search session over a Steam library lookup.
//!
//! The session owns the raw input, lags the query key behind it by a fixed
//! debounce window, and publishes `{pending, success, error}` snapshots for
//! whatever layer is rendering. A superseded in-flight lookup is discarded
//! by a query-generation check, never cancelled upstream.

pub mod error;
pub mod session;
pub mod types;

pub use error::SearchError;
pub use session::{DEBOUNCE_WINDOW, LibraryProvider, SearchSession};
pub use types::{SearchPhase, SearchState};
