//! Shared helpers for the todo backend test binaries.
//!
//! Kept free of backend types so unit tests inside the backend crate and the
//! integration binaries under `apps/backend/tests` can both depend on it.

pub mod logging;
pub mod problem_details;
pub mod unique_helpers;
