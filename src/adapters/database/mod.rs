//! Course database abstraction layer
//!
//! The export pipeline only sees the [`CourseSource`] trait; adapters bind
//! the legacy tables to typed records.

pub mod factory;
pub mod traits;

pub use factory::create_course_source;
pub use traits::CourseSource;
