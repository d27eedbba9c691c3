pub mod course_instances;
pub mod courses;
pub mod prerequisite_courses;
pub mod prerequisites;
pub mod professors;
pub mod review_votes;
pub mod reviews;
pub mod users;
pub mod wishlist_items;
