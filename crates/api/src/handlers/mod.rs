pub mod wishlist;
