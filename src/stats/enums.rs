//! Statistics enumerations.

/// Enumeration of all trackable statistics events.
pub mod stats_event;
