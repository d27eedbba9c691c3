pub mod course;
pub mod review;
pub mod wishlist;
