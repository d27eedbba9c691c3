pub mod course;
pub mod prerequisite;
pub mod professor;
pub mod review;
pub mod search;
pub mod user;
pub mod vote;
pub mod wishlist;
