//! # Contentboard Architecture
//!
//! Contentboard is a **UI-agnostic content board library**. It keeps a small collection of
//! publishable records (articles, forum threads, reviews, ...) that users add, edit, filter,
//! reorder and delete. The bundled CLI is one client; a web or desktop card grid could drive
//! the very same API.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, prompts, renders cards, exit codes     │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands, owns the Board                │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - One module per user action, returns CmdResult            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Board + engines                                            │
//! │  - board.rs: records, filter, derived view, pending delete  │
//! │  - records.rs, filter.rs, ordering.rs, draft.rs             │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - BlobStore trait: get/set a JSON blob by key              │
//! │  - FsBlobStore (production), MemBlobStore (testing)         │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## The Filtered View and Canonical Order
//!
//! The board holds the full record sequence (the canonical, persisted order) and a
//! *filtered view* derived from it. The view is recomputed explicitly after every mutation
//! via [`board::Board::refresh`]; nothing is cached. Dragging a card inside the view goes
//! through [`ordering`], which merges the new view order back into the full sequence
//! without reshuffling records the filter hides.
//!
//! ## No I/O Assumptions in Core
//!
//! From `api.rs` inward, code takes Rust values and returns Rust values. It never writes
//! to stdout/stderr and never exits the process. Diagnostics go through the `log` facade;
//! the binary decides whether and where they are printed.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`board`]: Owned board state
//! - [`commands`]: Business logic for each action
//! - [`config`]: Board configuration (`config.json`)
//! - [`draft`]: The inline-edit boundary (tags as text, blank dates)
//! - [`error`]: Error types
//! - [`filter`]: The view filter
//! - [`model`]: Core data types (`Record`, `ContentType`)
//! - [`ordering`]: Drag moves and reconciliation into the full order
//! - [`records`]: Pure reducers over the record sequence
//! - [`seed`]: Built-in fallback dataset
//! - [`store`]: Storage abstraction and implementations

pub mod api;
pub mod board;
pub mod commands;
pub mod config;
pub mod draft;
pub mod error;
pub mod filter;
pub mod model;
pub mod ordering;
pub mod records;
pub mod seed;
pub mod store;
