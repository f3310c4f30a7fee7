//! Session aggregate.
//!
//! A [`SessionStore`] is constructed once by whatever owns the UI session and
//! passed around explicitly. There is no global instance.

pub mod store;

pub use store::{Interaction, InteractionOutcome, SessionStore};
