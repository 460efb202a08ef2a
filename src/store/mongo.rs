//! # MongoDB Store
//!
//! Production backend. Documents are stored as
//! `{ _id: ObjectId, question: {...} }` and `{ _id: ObjectId, name: "..." }`.
//! The driver owns connection pooling; no retries or timeouts are added here.

use async_trait::async_trait;
use bson::{doc, Bson, Document};
use futures_util::TryStreamExt;
use mongodb::options::{ClientOptions, ReturnDocument};
use mongodb::{Client, Collection, Database};

use crate::model::{Category, DocumentId, Question, QuestionDetails};

use super::errors::{StoreError, StoreResult};
use super::query::{QuestionQuery, Stage};
use super::{CategoryStore, QuestionStore, StoreConfig, CATEGORIES_COLLECTION, QUESTIONS_COLLECTION};

/// Connected MongoDB database
#[derive(Debug, Clone)]
pub struct MongoStore {
    database: Database,
}

impl MongoStore {
    /// Connect and verify the server answers a `ping`
    pub async fn connect(config: &StoreConfig) -> StoreResult<Self> {
        let options = ClientOptions::parse(&config.uri)
            .await
            .map_err(|e| StoreError::Connection(e.to_string()))?;
        let client =
            Client::with_options(options).map_err(|e| StoreError::Connection(e.to_string()))?;
        let database = client.database(&config.database);

        database
            .run_command(doc! { "ping": 1 })
            .await
            .map_err(|e| StoreError::Connection(e.to_string()))?;

        Ok(Self { database })
    }

    pub fn questions(&self) -> MongoQuestions {
        MongoQuestions {
            collection: self.database.collection(QUESTIONS_COLLECTION),
        }
    }

    pub fn categories(&self) -> MongoCategories {
        MongoCategories {
            collection: self.database.collection(CATEGORIES_COLLECTION),
        }
    }
}

fn by_id(id: DocumentId) -> Document {
    doc! { "_id": id.as_object_id() }
}

/// Translate list stages into an aggregation pipeline
pub fn pipeline(stages: &[Stage]) -> Vec<Document> {
    stages
        .iter()
        .map(|stage| match stage {
            Stage::Match { category: None } => doc! { "$match": {} },
            Stage::Match {
                category: Some(name),
            } => doc! { "$match": { "question.categories": name.as_str() } },
            Stage::Sample(n) => doc! { "$sample": { "size": count(*n) } },
            Stage::Limit(n) => doc! { "$limit": count(*n) },
        })
        .collect()
}

fn count(n: u64) -> i64 {
    i64::try_from(n).unwrap_or(i64::MAX)
}

fn question_to_document(question: &Question) -> StoreResult<Document> {
    Ok(doc! {
        "_id": question.id.as_object_id(),
        "question": bson::to_bson(&question.question)?,
    })
}

fn question_from_document(document: Document) -> StoreResult<Question> {
    let id = document.get_object_id("_id")?;
    let details = match document.get("question") {
        Some(value) => bson::from_bson::<QuestionDetails>(value.clone())?,
        None => QuestionDetails::default(),
    };

    Ok(Question {
        id: id.into(),
        question: details,
    })
}

fn category_to_document(category: &Category) -> Document {
    doc! {
        "_id": category.id.as_object_id(),
        "name": category.name.as_str(),
    }
}

fn category_from_document(document: Document) -> StoreResult<Category> {
    let id = document.get_object_id("_id")?;
    let name = match document.get("name") {
        Some(Bson::String(name)) => name.clone(),
        Some(other) => {
            return Err(StoreError::Codec(format!(
                "category name has type {:?}",
                other.element_type()
            )))
        }
        None => String::new(),
    };

    Ok(Category {
        id: id.into(),
        name,
    })
}

/// `questions` collection
#[derive(Debug, Clone)]
pub struct MongoQuestions {
    collection: Collection<Document>,
}

#[async_trait]
impl QuestionStore for MongoQuestions {
    async fn insert(&self, question: &Question) -> StoreResult<()> {
        self.collection
            .insert_one(question_to_document(question)?)
            .await?;
        Ok(())
    }

    async fn find_by_id(&self, id: DocumentId) -> StoreResult<Option<Question>> {
        self.collection
            .find_one(by_id(id))
            .await?
            .map(question_from_document)
            .transpose()
    }

    async fn find(&self, query: &QuestionQuery) -> StoreResult<Vec<Question>> {
        let documents: Vec<Document> = self
            .collection
            .aggregate(pipeline(&query.stages()))
            .await?
            .try_collect()
            .await?;

        documents.into_iter().map(question_from_document).collect()
    }

    async fn replace_details(
        &self,
        id: DocumentId,
        details: &QuestionDetails,
    ) -> StoreResult<Option<Question>> {
        let update = doc! { "$set": { "question": bson::to_bson(details)? } };

        self.collection
            .find_one_and_update(by_id(id), update)
            .return_document(ReturnDocument::After)
            .await?
            .map(question_from_document)
            .transpose()
    }

    async fn delete(&self, id: DocumentId) -> StoreResult<bool> {
        let result = self.collection.delete_one(by_id(id)).await?;
        Ok(result.deleted_count > 0)
    }
}

/// `categories` collection
#[derive(Debug, Clone)]
pub struct MongoCategories {
    collection: Collection<Document>,
}

#[async_trait]
impl CategoryStore for MongoCategories {
    async fn insert(&self, category: &Category) -> StoreResult<()> {
        self.collection
            .insert_one(category_to_document(category))
            .await?;
        Ok(())
    }

    async fn find_by_id(&self, id: DocumentId) -> StoreResult<Option<Category>> {
        self.collection
            .find_one(by_id(id))
            .await?
            .map(category_from_document)
            .transpose()
    }

    async fn find_all(&self) -> StoreResult<Vec<Category>> {
        let documents: Vec<Document> = self
            .collection
            .find(doc! {})
            .await?
            .try_collect()
            .await?;

        documents.into_iter().map(category_from_document).collect()
    }

    async fn rename(&self, id: DocumentId, name: &str) -> StoreResult<Option<Category>> {
        self.collection
            .find_one_and_update(by_id(id), doc! { "$set": { "name": name } })
            .return_document(ReturnDocument::After)
            .await?
            .map(category_from_document)
            .transpose()
    }

    async fn delete(&self, id: DocumentId) -> StoreResult<bool> {
        let result = self.collection.delete_one(by_id(id)).await?;
        Ok(result.deleted_count > 0)
    }
}
