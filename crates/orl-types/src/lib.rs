//! Foundation types for the Off-chain Record Layer (ORL).
//!
//! A record that lives off the primary ledger is addressed only by a URI of
//! the form `schema://rest`. This crate provides the types shared by every
//! other ORL crate:
//!
//! - [`Uri`] — a strictly validated off-chain reference; its schema token
//!   selects the backend adapter that can resolve it
//! - [`Payload`] — the untyped flat record a backend returns for one URI
//!
//! No I/O happens here. Fetching and resolution live in `orl-adapter` and
//! `orl-pointer`.

pub mod error;
pub mod payload;
pub mod uri;

pub use error::{TypeError, TypeResult};
pub use payload::{payload_from_json, Payload};
pub use uri::Uri;
