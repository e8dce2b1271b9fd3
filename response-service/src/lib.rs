//! response-service: generate text responses via an AI provider and store
//! them in MongoDB, with CRUD access over the stored records.

pub mod config;
pub mod dtos;
pub mod error;
pub mod handlers;
pub mod models;
pub mod observability;
pub mod services;
pub mod startup;
