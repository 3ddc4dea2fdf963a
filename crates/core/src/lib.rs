//! Shared primitives for the wishlist service.

pub mod types;
