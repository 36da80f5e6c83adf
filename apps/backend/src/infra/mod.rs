//! Infrastructure layer - pool bootstrap, state, lifecycle and DB error mapping.

pub mod db;
pub mod db_errors;
pub mod lifespan;
pub mod state;
