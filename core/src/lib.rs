//! Task-list synchronization engine.
//!
//! # Overview
//! An ordered, in-memory collection of task records with optimistic local
//! mutations — field edits, soft-delete/restore, drag-and-drop re-ordering,
//! permanent purge — propagated to a remote HTTP store by detached background
//! tasks. Local state is the rendering source of truth; the remote store is
//! eventually consistent with it.
//!
//! # Design
//! - The data transforms ([`update_field`], [`visible`], [`reorder`]) are
//!   pure functions over `&[TaskRecord]`, testable without a runtime.
//! - [`TaskApi`] is stateless and never touches the network: `build_*`
//!   produces [`HttpRequest`] values, `parse_*` consumes [`HttpResponse`]
//!   values, and the round-trip in between happens behind the [`Transport`]
//!   trait the host implements.
//! - Remote failures never reach the event path: each one is reduced to a
//!   `tracing` event and the optimistic local state stands. At-most-once, no
//!   retries; the one exception to fire-and-forget is purge, which awaits its
//!   whole delete batch before touching the store.

pub mod client;
pub mod engine;
pub mod error;
pub mod field;
pub mod filter;
pub mod http;
pub mod purge;
pub mod record;
pub mod reorder;
pub mod store;
pub mod sync;
pub mod transport;

pub use client::TaskApi;
pub use engine::TaskListEngine;
pub use error::ApiError;
pub use field::{update_field, FieldEdit};
pub use filter::{visible, visible_indices, Filter};
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use record::{NewTask, TaskPatch, TaskRecord};
pub use reorder::{rank_changes, reorder, to_full_index, DragSession};
pub use store::TaskStore;
pub use sync::SyncAdapter;
pub use transport::Transport;
