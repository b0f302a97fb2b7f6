//! Request, response and nested record types, grouped by API area

pub mod backup;
pub mod common;
pub mod configuration;
pub mod diagnosis;
pub mod instance;
pub mod job;
pub mod log;
pub mod mysql;
pub mod postgresql;
pub mod proxy;
pub mod sqlserver;
pub mod tag;
