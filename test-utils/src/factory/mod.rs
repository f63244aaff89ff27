//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Factories automatically handle dependencies and foreign
//! key relationships, making tests more concise and maintainable.
//!
//! # Overview
//!
//! Each entity has its own factory module with both a `Factory` struct for customization
//! and a `create_*` convenience function for quick default creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     // Create with defaults
//!     let address = factory::address::create_address(&db).await?;
//!     let user = factory::app_user::create_app_user(&db, address.id).await?;
//!
//!     // Create with all dependencies
//!     let (student, course, enrollment) = factory::helpers::create_enrollment_with_dependencies(&db).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! Use the factory builders for custom values:
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let user = factory::app_user::AppUserFactory::new(&db, address.id)
//!     .email("ada@westcoast.se")
//!     .first_name("Ada")
//!     .build()
//!     .await?;
//! ```
//!
//! # Available Factories
//!
//! - `address` - Create address entities
//! - `app_user` - Create user entities
//! - `role` - Create roles and role memberships
//! - `category` - Create category entities
//! - `course` - Create course entities
//! - `competence` - Create competence entities
//! - `student_course` - Create enrollment entities
//! - `teacher_course` - Create teaching assignment entities
//! - `teacher_competence` - Create teacher qualification entities
//! - `helpers` - Convenience methods for creating entities with dependencies

pub mod address;
pub mod app_user;
pub mod category;
pub mod competence;
pub mod course;
pub mod helpers;
pub mod role;
pub mod student_course;
pub mod teacher_competence;
pub mod teacher_course;

// Re-export commonly used factory functions for concise usage
pub use address::create_address;
pub use app_user::create_app_user;
pub use category::create_category;
pub use competence::create_competence;
pub use course::create_course;
pub use role::{assign_role, create_role};
pub use student_course::create_student_course;
pub use teacher_competence::create_teacher_competence;
pub use teacher_course::create_teacher_course;
