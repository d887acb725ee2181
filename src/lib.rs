//! Digital wine list service
//!
//! This library provides the data side of a digital wine list: the wine
//! catalog with region and type filtering, and the winery directory that
//! resolves producer names on wine labels to producer descriptions.

pub mod app_state;
pub mod config;
pub mod models;
pub mod routes;
pub mod services;
