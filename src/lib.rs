//! # Introduction
//!
//! algotty runs a fixed set of sorting, tree-traversal, and graph-search
//! algorithms step by step, capturing a snapshot of the working structure
//! and the run counters at every emission point.  The recorded history is
//! then replayed at a user-controlled pace, forward and backward, through a
//! terminal UI built with [ratatui](https://docs.rs/ratatui).
//!
//! ## Execution pipeline
//!
//! ```text
//! Generator → Working copy → Engine → StepTrace → Controller → TUI
//! ```
//!
//! 1. [`dataset`] — generators for the three families: random arrays,
//!    a BST built by repeated insertion, and a fixed weighted digraph.
//! 2. [`registry`] — the closed set of algorithm identifiers with
//!    per-entry metadata.
//! 3. [`engine`] — executes one algorithm over a working copy, recording
//!    a [`snapshot::Snapshot`] at each step.
//! 4. [`snapshot`] — the recorded history ([`snapshot::StepTrace`]) and
//!    the [`snapshot::RunMetrics`] counters.
//! 5. [`controller`] — run lifecycle: pacing, cooperative cancellation,
//!    and history navigation.
//! 6. [`ui`] — ratatui-based TUI; not part of the stable library API.
//!
//! ## Supported algorithms
//!
//! Sorting: bubble, merge, quick, insertion, selection.
//! Tree: in-order, pre-order, post-order traversal (plus a descriptive
//! BST entry). Graph: BFS, DFS, Dijkstra.

pub mod controller;
pub mod dataset;
pub mod engine;
pub mod registry;
pub mod snapshot;
pub mod ui;
