//! # ARMATURE CORE LIBRARY
//!
//! **MINIMAL REQUEST-HANDLING FRAMEWORK CORE**
//!
//! **ARCHITECTURE**: Lazy shared-service container + auto-wiring construction
//! **GUARANTEE**: At-most-once service factories, cycle-checked dependency graphs
//! **DISPATCH**: URL -> route action -> wired controller -> formatted response

pub mod api;
pub mod app;
pub mod config;
pub mod container;
pub mod database;
pub mod dependencies;
pub mod errors;
pub mod request;
pub mod response;
pub mod routing;
