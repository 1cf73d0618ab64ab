//! This module contains the API endpoints for the server.
pub mod health;
pub mod refs;
pub mod routes;
pub mod state;
