pub mod course;
pub mod helpfulness;
pub mod matcher;
pub mod prerequisite;
pub mod professor;
pub mod semester;
