//! # In-Memory Store
//!
//! Process-local backend with the same semantics as the MongoDB one.
//! Documents keep insertion order, which stands in for natural store order.

use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use async_trait::async_trait;
use rand::seq::SliceRandom;

use crate::model::{Category, DocumentId, Question, QuestionDetails};

use super::errors::{StoreError, StoreResult};
use super::query::{QuestionQuery, Stage};
use super::{CategoryStore, QuestionStore};

#[derive(Debug, Default)]
struct Collections {
    questions: Vec<Question>,
    categories: Vec<Category>,
}

/// In-memory document store
///
/// Clones share the same underlying collections.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    data: Arc<RwLock<Collections>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> StoreResult<RwLockReadGuard<'_, Collections>> {
        self.data.read().map_err(|_| StoreError::Poisoned)
    }

    fn write(&self) -> StoreResult<RwLockWriteGuard<'_, Collections>> {
        self.data.write().map_err(|_| StoreError::Poisoned)
    }
}

/// Apply pipeline stages in order
fn run_stages(mut questions: Vec<Question>, stages: &[Stage]) -> Vec<Question> {
    for stage in stages {
        questions = match stage {
            Stage::Match { category: None } => questions,
            Stage::Match {
                category: Some(name),
            } => questions
                .into_iter()
                .filter(|q| q.has_category(name))
                .collect(),
            Stage::Limit(n) => questions.into_iter().take(clamp(*n)).collect(),
            Stage::Sample(n) => sample(&questions, clamp(*n)),
        };
    }
    questions
}

fn sample(questions: &[Question], size: usize) -> Vec<Question> {
    let mut rng = rand::thread_rng();
    questions.choose_multiple(&mut rng, size).cloned().collect()
}

fn clamp(n: u64) -> usize {
    usize::try_from(n).unwrap_or(usize::MAX)
}

#[async_trait]
impl QuestionStore for MemoryStore {
    async fn insert(&self, question: &Question) -> StoreResult<()> {
        let mut data = self.write()?;
        if data.questions.iter().any(|q| q.id == question.id) {
            return Err(StoreError::Driver(format!(
                "duplicate key: question {}",
                question.id
            )));
        }
        data.questions.push(question.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: DocumentId) -> StoreResult<Option<Question>> {
        let data = self.read()?;
        Ok(data.questions.iter().find(|q| q.id == id).cloned())
    }

    async fn find(&self, query: &QuestionQuery) -> StoreResult<Vec<Question>> {
        let snapshot = self.read()?.questions.clone();
        Ok(run_stages(snapshot, &query.stages()))
    }

    async fn replace_details(
        &self,
        id: DocumentId,
        details: &QuestionDetails,
    ) -> StoreResult<Option<Question>> {
        let mut data = self.write()?;
        Ok(data
            .questions
            .iter_mut()
            .find(|q| q.id == id)
            .map(|q| {
                q.question = details.clone();
                q.clone()
            }))
    }

    async fn delete(&self, id: DocumentId) -> StoreResult<bool> {
        let mut data = self.write()?;
        let before = data.questions.len();
        data.questions.retain(|q| q.id != id);
        Ok(data.questions.len() < before)
    }
}

#[async_trait]
impl CategoryStore for MemoryStore {
    async fn insert(&self, category: &Category) -> StoreResult<()> {
        let mut data = self.write()?;
        if data.categories.iter().any(|c| c.id == category.id) {
            return Err(StoreError::Driver(format!(
                "duplicate key: category {}",
                category.id
            )));
        }
        data.categories.push(category.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: DocumentId) -> StoreResult<Option<Category>> {
        let data = self.read()?;
        Ok(data.categories.iter().find(|c| c.id == id).cloned())
    }

    async fn find_all(&self) -> StoreResult<Vec<Category>> {
        Ok(self.read()?.categories.clone())
    }

    async fn rename(&self, id: DocumentId, name: &str) -> StoreResult<Option<Category>> {
        let mut data = self.write()?;
        Ok(data
            .categories
            .iter_mut()
            .find(|c| c.id == id)
            .map(|c| {
                c.name = name.to_string();
                c.clone()
            }))
    }

    async fn delete(&self, id: DocumentId) -> StoreResult<bool> {
        let mut data = self.write()?;
        let before = data.categories.len();
        data.categories.retain(|c| c.id != id);
        Ok(data.categories.len() < before)
    }
}
