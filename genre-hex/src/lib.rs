//! # Genre Hex
//!
//! Application service layer and HTTP adapter for the genre taxonomy service.
//!
//! ## Architecture
//!
//! - `service/` - Application service (orchestrates domain operations)
//! - `inbound/` - HTTP adapter (Axum server)
//!
//! The service is generic over `R: GenreRepository`, allowing
//! different repository implementations to be injected.

pub mod inbound;
mod openapi;
pub mod service;


pub use service::GenreService;
