//! Administration app mounted under `/admin`.

pub mod categories;
pub mod competences;
pub mod course_details;
pub mod courses;
pub mod named_list;
pub mod user_create;
pub mod user_details;
pub mod users;

pub use categories::AdminCategories;
pub use competences::AdminCompetences;
pub use course_details::AdminCourseDetails;
pub use courses::AdminCourses;
pub use user_create::AdminUserCreate;
pub use user_details::AdminUserDetails;
pub use users::AdminUsers;
