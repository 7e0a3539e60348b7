//! HTTP request handlers, one module per resource.

pub mod auth;
pub mod dashboard;
pub mod designer;
pub mod nameplate;
pub mod notification;
pub mod print;
pub mod rmo;
pub mod upload;
