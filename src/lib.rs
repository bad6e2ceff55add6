//! Data core for a local-first workspace app.
//!
//! Spaces hold tasks organized by a workflow template; sprints are tracked
//! per space. All state lives in memory inside [`state::AppState`] and is
//! mirrored on every mutation to a [`store::KvStore`], a local-storage-style
//! key-value adapter. The view layer (boards, calendars, timelines) is a
//! pure consumer of the query methods and is not part of this crate.

pub mod model;
pub mod notify;
pub mod state;
pub mod store;
