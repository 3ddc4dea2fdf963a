//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods that
//! accept `&PgPool` as the first argument.

pub mod wishlist_repo;

pub use wishlist_repo::WishlistRepo;
