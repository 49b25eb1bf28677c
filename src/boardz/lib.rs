//! # Boardz Architecture
//!
//! Boardz is a handful of small, independent widgets behind one library:
//!
//! - a **note board** persisted to a single key-value slot,
//! - a **GitHub profile viewer** (profile plus repositories),
//! - a **trivia quiz**,
//! - a **word/character counter**.
//!
//! The note board is the only stateful piece. The others are
//! "fetch → transform → display" flows.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, prints, owns stdin/stdout/exit codes   │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade: owns the note store and the config          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Commands + Widgets (commands/, profile, quiz, counter)     │
//! │  - Business logic on Rust types, no terminal I/O            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Clients (clients/) and Storage (store/)                    │
//! │  - reqwest clients; SlotBackend with FsSlot and MemSlot     │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade
//! - [`commands`]: Note, board, profile and config commands
//! - [`store`]: Slot storage and the [`store::note_store::NoteStore`]
//! - [`model`]: `Note`, `Draft`, `Mode`
//! - [`clients`]: GitHub and trivia HTTP clients
//! - [`profile`], [`quiz`], [`counter`]: the peripheral widgets
//! - [`markup`]: HTML entity decoding for trivia text
//! - [`config`]: Configuration management
//! - [`editor`]: External editor integration
//! - [`error`]: Error types

pub mod api;
pub mod clients;
pub mod commands;
pub mod config;
pub mod counter;
pub mod editor;
pub mod error;
pub mod markup;
pub mod model;
pub mod profile;
pub mod quiz;
pub mod store;
