//! # Entity Schemas
//!
//! Resource shapes exchanged with clients and persisted in the store.

pub mod category;
pub mod id;
pub mod question;

pub use category::{Category, CategoryDetails};
pub use id::{DocumentId, IdError};
pub use question::{AnswerOption, Question, QuestionDetails};
