//! Request and Response models for the proxy API
//!
//! This module defines the DTOs (Data Transfer Objects) used for
//! serializing/deserializing HTTP request and response bodies.

pub mod requests;
pub mod responses;

// Re-export commonly used types
pub use requests::{ListQuery, LoginRequest};
pub use responses::{
    AuthenticatedUser, HealthResponse, LoginResponse, PokemonAbility, PokemonDetail, PokemonForm,
    PokemonList, PokemonListItem, PokemonMove, PokemonType, StatsResponse,
};
