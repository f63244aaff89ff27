mod address;
mod app_user;
mod category;
mod competence;
mod course;
mod student_course;
mod teacher_competence;
mod teacher_course;
