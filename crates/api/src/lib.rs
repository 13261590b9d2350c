// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]

//! API boundary for the selection lifecycle engine.
//!
//! This crate mediates between callers and the pure engine: it
//! authenticates actors, translates requests into commands, applies them
//! against store snapshots with optimistic concurrency, and translates
//! every domain outcome into the API error contract.

pub mod auth;
pub mod capabilities;
pub mod error;
pub mod handlers;
pub mod request_response;
pub mod store;

#[cfg(test)]
mod tests;

pub use auth::{AuthenticatedActor, authenticate_stub};
pub use capabilities::{Capability, SelectionCapabilities, compute_selection_capabilities};
pub use error::{
    ApiError, AuthError, translate_core_error, translate_domain_error, translate_store_error,
};
pub use handlers::{
    assign_hr, change_status, create_selection, edit_selection, get_selection, list_selections,
    list_statuses, selection_capabilities, selection_history,
};
pub use request_response::{
    AssignHrRequest, ChangeStatusRequest, ChangeStatusResponse, CreateSelectionRequest,
    CreateSelectionResponse, EditSelectionRequest, EditSelectionResponse, ListSelectionsResponse,
    ListStatusesResponse, SelectionHistoryResponse, SelectionView, StatusInfo,
};
pub use store::{SelectionStore, StoreError};
