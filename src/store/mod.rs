//! # Persistence Gateway
//!
//! Two collections, `questions` and `categories`, living in one logical
//! database. Handlers never touch the driver directly; they go through the
//! [`StoreContext`] built once at startup and injected into the router.
//!
//! Two backends implement the collection traits:
//! - [`MongoStore`]: the production MongoDB database
//! - [`MemoryStore`]: process-local storage for tests and local runs

pub mod errors;
pub mod memory;
pub mod mongo;
pub mod query;

use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::model::{Category, DocumentId, Question, QuestionDetails};

pub use errors::{StoreError, StoreResult};
pub use memory::MemoryStore;
pub use mongo::MongoStore;
pub use query::{QuestionQuery, Selection, Stage};

/// Collection holding questions
pub const QUESTIONS_COLLECTION: &str = "questions";

/// Collection holding categories
pub const CATEGORIES_COLLECTION: &str = "categories";

/// Default logical database name
pub const DEFAULT_DATABASE: &str = "quizdb";

/// Operations on the `questions` collection
#[async_trait]
pub trait QuestionStore: Send + Sync {
    /// Persist a new question
    async fn insert(&self, question: &Question) -> StoreResult<()>;

    /// Look up a question by identifier
    async fn find_by_id(&self, id: DocumentId) -> StoreResult<Option<Question>>;

    /// Run a list query
    async fn find(&self, query: &QuestionQuery) -> StoreResult<Vec<Question>>;

    /// Replace the whole details document, returning the updated question
    async fn replace_details(
        &self,
        id: DocumentId,
        details: &QuestionDetails,
    ) -> StoreResult<Option<Question>>;

    /// Remove a question; `false` when nothing matched
    async fn delete(&self, id: DocumentId) -> StoreResult<bool>;
}

/// Operations on the `categories` collection
#[async_trait]
pub trait CategoryStore: Send + Sync {
    /// Persist a new category
    async fn insert(&self, category: &Category) -> StoreResult<()>;

    /// Look up a category by identifier
    async fn find_by_id(&self, id: DocumentId) -> StoreResult<Option<Category>>;

    /// Full scan in store order
    async fn find_all(&self) -> StoreResult<Vec<Category>>;

    /// Replace the name, returning the updated category
    async fn rename(&self, id: DocumentId, name: &str) -> StoreResult<Option<Category>>;

    /// Remove a category; `false` when nothing matched
    async fn delete(&self, id: DocumentId) -> StoreResult<bool>;
}

/// Connection settings for the document database
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreConfig {
    /// MongoDB connection string
    pub uri: String,

    /// Logical database holding both collections
    #[serde(default = "default_database")]
    pub database: String,
}

fn default_database() -> String {
    DEFAULT_DATABASE.to_string()
}

impl StoreConfig {
    pub fn new(uri: impl Into<String>) -> Self {
        Self {
            uri: uri.into(),
            database: default_database(),
        }
    }
}

/// Handles to both collections, shared by every request
#[derive(Clone)]
pub struct StoreContext {
    pub questions: Arc<dyn QuestionStore>,
    pub categories: Arc<dyn CategoryStore>,
}

impl StoreContext {
    /// Connect to MongoDB; fails if the server cannot be reached
    pub async fn connect(config: &StoreConfig) -> StoreResult<Self> {
        let store = MongoStore::connect(config).await?;
        Ok(Self {
            questions: Arc::new(store.questions()),
            categories: Arc::new(store.categories()),
        })
    }

    /// Fresh, empty in-memory store
    pub fn in_memory() -> Self {
        let store = MemoryStore::new();
        Self {
            questions: Arc::new(store.clone()),
            categories: Arc::new(store),
        }
    }
}
