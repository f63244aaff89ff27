pub use super::address::Entity as Address;
pub use super::app_user::Entity as AppUser;
pub use super::category::Entity as Category;
pub use super::competence::Entity as Competence;
pub use super::course::Entity as Course;
pub use super::role::Entity as Role;
pub use super::student_course::Entity as StudentCourse;
pub use super::teacher_competence::Entity as TeacherCompetence;
pub use super::teacher_course::Entity as TeacherCourse;
pub use super::user_role::Entity as UserRole;
