//! TheoLingua - Program checkout, curriculum authoring and lead capture
//!
//! This crate implements the client-side controllers of the TheoLingua
//! learning platform (combo subscription checkout, the admin topic composer,
//! file upload and file management) against the platform's REST backend, and
//! the small forms relay server that forwards demo bookings to the CRM.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
