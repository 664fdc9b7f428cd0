//! Normalizer Crate
//!
//! Turns the loosely structured `payments_json` stored on a card into a
//! canonical, ordered, typed list of contact/payment actions, and turns those
//! actions back into deep links and into the value the save path persists.
//!
//! # Architecture
//!
//! - **Types**: the data model lives in the `shared-types` crate
//! - **Ingest**: [`classify`] and [`normalize_value`] feed the schema adapter
//!   ([`adapt`]), which accepts every historical storage layout
//! - **Egress**: [`synthesize`] builds hrefs per item, [`partition`] groups
//!   them for the public page, [`serialize_payments`] writes them back
//!
//! Everything here is pure and synchronous. Malformed input degrades to an
//! empty or partial record; nothing in the ingest path returns an error.
//!
//! # Example
//!
//! ```
//! use normalizer::{adapt, synthesize};
//!
//! let record = adapt(&serde_json::json!({ "venmo": "@alice" }));
//! let link = synthesize(&record.links[0]);
//! assert_eq!(link.open_href, "venmo://paycharge?txn=pay&recipients=alice");
//! ```

pub mod classifier;
pub mod form;
pub mod links;
pub mod normalize;
pub mod partition;
pub mod patterns;
pub mod present;
pub mod schema;
pub mod serialize;
pub mod validate;

pub use classifier::classify;
pub use form::PaymentsForm;
pub use links::synthesize;
pub use normalize::normalize_value;
pub use partition::partition;
pub use present::{edit_state, present_card};
pub use schema::{adapt, adapt_str, canonicalize, pretty_label, PaymentsShape};
pub use serialize::serialize_payments;
pub use validate::{validate_card_id, validate_save_request};
