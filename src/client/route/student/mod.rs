//! Student app mounted under `/student`.

pub mod catalog;
pub mod course_details;
pub mod my_courses;

pub use catalog::StudentCatalog;
pub use course_details::StudentCourseDetails;
pub use my_courses::StudentMyCourses;
