//! # Contactbook Architecture
//!
//! Contactbook is a small personal address book: named contacts with validated
//! phone numbers and birthdays, kept in a single JSON file in the home directory.
//! The library does all the work; the `contacts` binary is a thin client.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI (args.rs, main.rs)                                     │
//! │  - Parses arguments, prints records and colored messages    │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API (api.rs)                                               │
//! │  - Owns the AddressBook and its store                       │
//! │  - Saves the whole book after each mutation                 │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Commands (commands/*.rs)                                   │
//! │  - Turn validation diagnostics into leveled messages        │
//! │  - Return CmdResult, never print                            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Domain (book.rs, model.rs, fields.rs) + Storage (store/)   │
//! │  - AddressBook → Record → Name / Phone / Birthday           │
//! │  - ContactStore: FileStore, InMemoryStore                   │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Validation Never Aborts
//!
//! A bad phone number or date is not a fault. The field falls back to its empty
//! value, the problem comes back as a [`error::RecordError`], and the command layer
//! reports it as a warning. Only storage failures and unknown contact names
//! surface as [`error::BookError`].
//!
//! ## Module Overview
//!
//! - [`api`]: The facade every UI goes through
//! - [`commands`]: One module per operation
//! - [`book`]: The keyed, ordered collection with paging and search
//! - [`model`]: [`model::Record`], one contact
//! - [`fields`]: Validated field types and the date format
//! - [`store`]: Persistence abstraction and implementations
//! - [`config`]: User configuration
//! - [`error`]: Error types

pub mod api;
pub mod book;
pub mod commands;
pub mod config;
pub mod error;
pub mod fields;
pub mod model;
pub mod store;
