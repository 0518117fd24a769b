//! # Postits Architecture
//!
//! Postits is a **UI-agnostic note board library** with a small CLI client.
//! The library owns the note lifecycle; any UI is just a way to issue
//! commands and render the snapshots they return.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (main.rs, args.rs, print.rs)                     │
//! │  - Parses arguments, formats output, handles terminal I/O   │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Board Layer (board.rs)                                     │
//! │  - Owns the ordered collection and the edit lifecycle       │
//! │  - Enforces single-edit-in-flight with early-return guards  │
//! │  - Every command: mutate → persist → render, in that order  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - Abstract NoteStore trait, whole-collection replace       │
//! │  - FileStore (production), InMemoryStore (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From [`board`] inward, code takes regular arguments, returns structured
//! [`board::CmdResult`] values, and never writes to stdout/stderr or exits
//! the process. Persistence failures degrade to warnings; a corrupted store
//! degrades to an empty board. Nothing in here is fatal.
//!
//! ## Module Overview
//!
//! - [`board`]: The collection manager — entry point for all commands
//! - [`model`]: `Note`, its View/Edit state machine, and the persisted form
//! - [`store`]: Storage abstraction and implementations
//! - [`view`]: Read-only render snapshots handed to presentation code
//! - [`error`]: Error types

pub mod board;
pub mod error;
pub mod model;
pub mod store;
pub mod view;
