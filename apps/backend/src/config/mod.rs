//! Process configuration: storage location and HTTP listener.

pub mod db;
pub mod server;
