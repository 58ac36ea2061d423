use anyhow::Context as _;
use futures::TryStreamExt;
use mongodb::bson::{self, Bson, Document, doc, oid::ObjectId};
use mongodb::{Client, Collection, Database};
use serde::Serialize;
use serde::de::DeserializeOwned;

use careerpath_domain::career::Career;
use careerpath_domain::contact::ContactMessage;
use careerpath_domain::counselor::Counselor;
use careerpath_domain::id::Stored;
use careerpath_domain::quiz::{TestHistory, TestQuestion};
use careerpath_domain::saved::SavedCareer;

use crate::domain::repository::{
    CareerRepository, ContactRepository, CounselorRepository, QuestionRepository,
    SavedCareerRepository, SeededRepository, StoreProbe, TestHistoryRepository,
};
use crate::domain::types::CareerFilter;
use crate::error::ApiError;

pub const CAREER_COLLECTION: &str = "career";
pub const SAVED_CAREER_COLLECTION: &str = "savedcareer";
pub const QUESTION_COLLECTION: &str = "testquestion";
pub const TEST_RESULT_COLLECTION: &str = "testresult";
pub const COUNSELOR_COLLECTION: &str = "counselor";
pub const CONTACT_COLLECTION: &str = "contactmessage";

const INTERNAL_ID: &str = "_id";
const PUBLIC_ID: &str = "id";

// ── Store handle ─────────────────────────────────────────────────────────────

/// Process-wide handle to the document store. `None` inside means no store
/// is configured.
#[derive(Clone, Default)]
pub struct Store {
    db: Option<Database>,
}

impl Store {
    pub fn absent() -> Self {
        Self { db: None }
    }

    pub fn new(db: Database) -> Self {
        Self { db: Some(db) }
    }

    /// Parse the connection string and select the database. The driver
    /// connects lazily, so an unreachable server only shows up on first use.
    pub async fn connect(url: &str, database: &str) -> anyhow::Result<Self> {
        let client = Client::with_uri_str(url)
            .await
            .context("parse store connection string")?;
        Ok(Self::new(client.database(database)))
    }

    pub fn database_name(&self) -> Option<&str> {
        self.db.as_ref().map(Database::name)
    }

    fn collection(&self, name: &str) -> Result<Collection<Document>, ApiError> {
        self.db
            .as_ref()
            .map(|db| db.collection::<Document>(name))
            .ok_or(ApiError::StoreUnavailable)
    }
}

impl StoreProbe for Store {
    fn is_configured(&self) -> bool {
        self.db.is_some()
    }

    async fn ping(&self) -> Result<(), ApiError> {
        let db = self.db.as_ref().ok_or(ApiError::StoreUnavailable)?;
        db.run_command(doc! { "ping": 1 })
            .await
            .context("ping store")?;
        Ok(())
    }

    async fn collection_names(&self) -> Result<Vec<String>, ApiError> {
        let db = self.db.as_ref().ok_or(ApiError::StoreUnavailable)?;
        let names = db
            .list_collection_names()
            .await
            .context("list collection names")?;
        Ok(names)
    }
}

// ── Identifier translation ───────────────────────────────────────────────────

/// Replace the internal `_id` with a public string `id`. Documents without
/// `_id` are returned unchanged.
pub fn expose_id(mut doc: Document) -> Document {
    if let Some(raw) = doc.remove(INTERNAL_ID) {
        doc.insert(PUBLIC_ID, id_string(raw));
    }
    doc
}

/// Drop the internal `_id` for records that are not addressed by id.
pub fn strip_id(mut doc: Document) -> Document {
    doc.remove(INTERNAL_ID);
    doc
}

fn id_string(raw: Bson) -> String {
    match raw {
        Bson::ObjectId(oid) => oid.to_hex(),
        Bson::String(s) => s,
        other => other.to_string(),
    }
}

pub fn parse_id(id: &str) -> Result<ObjectId, ApiError> {
    ObjectId::parse_str(id).map_err(|_| ApiError::InvalidId)
}

fn decode<T: DeserializeOwned>(doc: Document) -> Result<T, ApiError> {
    Ok(bson::from_document(doc).context("decode stored document")?)
}

fn encode<T: Serialize>(record: &T) -> Result<Document, ApiError> {
    Ok(bson::to_document(record).context("encode document")?)
}

fn encode_timestamped<T: Serialize>(record: &T) -> Result<Document, ApiError> {
    let mut doc = encode(record)?;
    doc.insert("created_at", bson::DateTime::now());
    Ok(doc)
}

// ── Filter rendering ─────────────────────────────────────────────────────────

/// Render a [`CareerFilter`] as a store query. Text needles are escaped so
/// they match literally.
pub fn filter_document(filter: &CareerFilter) -> Document {
    match filter {
        CareerFilter::All => Document::new(),
        CareerFilter::TextContains { field, needle } => {
            let mut doc = Document::new();
            doc.insert(
                field.key(),
                doc! { "$regex": regex::escape(needle), "$options": "i" },
            );
            doc
        }
        CareerFilter::HasTag(tag) => doc! { "tags": { "$in": [tag.as_str()] } },
        CareerFilter::FieldIs(field) => doc! { "field": field.as_str() },
        CareerFilter::JobTypeIs(job_type) => doc! { "job_type": job_type.as_str() },
        CareerFilter::AnyOf(clauses) => doc! { "$or": render_all(clauses) },
        CareerFilter::AllOf(clauses) => doc! { "$and": render_all(clauses) },
    }
}

fn render_all(clauses: &[CareerFilter]) -> Vec<Bson> {
    clauses
        .iter()
        .map(|c| Bson::Document(filter_document(c)))
        .collect()
}

async fn find_documents(
    collection: &Collection<Document>,
    filter: Document,
    limit: Option<i64>,
    sort: Option<Document>,
) -> Result<Vec<Document>, ApiError> {
    let mut find = collection.find(filter);
    if let Some(limit) = limit {
        find = find.limit(limit);
    }
    if let Some(sort) = sort {
        find = find.sort(sort);
    }
    let cursor = find.await.context("find documents")?;
    let docs = cursor
        .try_collect::<Vec<_>>()
        .await
        .context("read documents")?;
    Ok(docs)
}

async fn count_all(store: &Store, name: &str) -> Result<u64, ApiError> {
    let count = store
        .collection(name)?
        .count_documents(doc! {})
        .await
        .with_context(|| format!("count {name}"))?;
    Ok(count)
}

async fn insert_all<T: Serialize>(
    store: &Store,
    name: &str,
    records: &[T],
) -> Result<(), ApiError> {
    let collection = store.collection(name)?;
    let docs = records.iter().map(encode).collect::<Result<Vec<_>, _>>()?;
    if docs.is_empty() {
        return Ok(());
    }
    collection
        .insert_many(docs)
        .await
        .with_context(|| format!("insert into {name}"))?;
    Ok(())
}

// ── Career repository ────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct MongoCareerRepository {
    pub store: Store,
}

impl SeededRepository for MongoCareerRepository {
    type Record = Career;

    fn collection_name(&self) -> &'static str {
        CAREER_COLLECTION
    }

    async fn count(&self) -> Result<u64, ApiError> {
        count_all(&self.store, CAREER_COLLECTION).await
    }

    async fn insert_many(&self, records: &[Career]) -> Result<(), ApiError> {
        insert_all(&self.store, CAREER_COLLECTION, records).await
    }
}

impl CareerRepository for MongoCareerRepository {
    async fn find(
        &self,
        filter: &CareerFilter,
        limit: i64,
    ) -> Result<Vec<Stored<Career>>, ApiError> {
        let collection = self.store.collection(CAREER_COLLECTION)?;
        let docs = find_documents(&collection, filter_document(filter), Some(limit), None).await?;
        docs.into_iter().map(|d| decode(expose_id(d))).collect()
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Stored<Career>>, ApiError> {
        let collection = self.store.collection(CAREER_COLLECTION)?;
        let oid = parse_id(id)?;
        let doc = collection
            .find_one(doc! { "_id": oid })
            .await
            .context("find career by id")?;
        doc.map(|d| decode(expose_id(d))).transpose()
    }
}

// ── Saved career repository ──────────────────────────────────────────────────

#[derive(Clone)]
pub struct MongoSavedCareerRepository {
    pub store: Store,
}

impl SavedCareerRepository for MongoSavedCareerRepository {
    async fn find_pair(
        &self,
        user_id: &str,
        career_id: &str,
    ) -> Result<Option<Stored<SavedCareer>>, ApiError> {
        let collection = self.store.collection(SAVED_CAREER_COLLECTION)?;
        let doc = collection
            .find_one(doc! { "user_id": user_id, "career_id": career_id })
            .await
            .context("find saved career")?;
        doc.map(|d| decode(expose_id(d))).transpose()
    }

    async fn insert(&self, saved: &SavedCareer) -> Result<String, ApiError> {
        let collection = self.store.collection(SAVED_CAREER_COLLECTION)?;
        let result = collection
            .insert_one(encode_timestamped(saved)?)
            .await
            .context("insert saved career")?;
        Ok(id_string(result.inserted_id))
    }

    async fn list_by_user(&self, user_id: &str) -> Result<Vec<Stored<SavedCareer>>, ApiError> {
        let collection = self.store.collection(SAVED_CAREER_COLLECTION)?;
        let docs = find_documents(&collection, doc! { "user_id": user_id }, None, None).await?;
        docs.into_iter().map(|d| decode(expose_id(d))).collect()
    }

    async fn delete(&self, user_id: &str, saved_id: &str) -> Result<bool, ApiError> {
        let collection = self.store.collection(SAVED_CAREER_COLLECTION)?;
        let oid = parse_id(saved_id)?;
        let result = collection
            .delete_one(doc! { "_id": oid, "user_id": user_id })
            .await
            .context("delete saved career")?;
        Ok(result.deleted_count > 0)
    }
}

// ── Question repository ──────────────────────────────────────────────────────

#[derive(Clone)]
pub struct MongoQuestionRepository {
    pub store: Store,
}

impl SeededRepository for MongoQuestionRepository {
    type Record = TestQuestion;

    fn collection_name(&self) -> &'static str {
        QUESTION_COLLECTION
    }

    async fn count(&self) -> Result<u64, ApiError> {
        count_all(&self.store, QUESTION_COLLECTION).await
    }

    async fn insert_many(&self, records: &[TestQuestion]) -> Result<(), ApiError> {
        insert_all(&self.store, QUESTION_COLLECTION, records).await
    }
}

impl QuestionRepository for MongoQuestionRepository {
    async fn list_by_step(&self) -> Result<Vec<TestQuestion>, ApiError> {
        let collection = self.store.collection(QUESTION_COLLECTION)?;
        let docs = find_documents(&collection, doc! {}, None, Some(doc! { "step": 1 })).await?;
        docs.into_iter().map(|d| decode(strip_id(d))).collect()
    }
}

// ── Counselor repository ─────────────────────────────────────────────────────

#[derive(Clone)]
pub struct MongoCounselorRepository {
    pub store: Store,
}

impl SeededRepository for MongoCounselorRepository {
    type Record = Counselor;

    fn collection_name(&self) -> &'static str {
        COUNSELOR_COLLECTION
    }

    async fn count(&self) -> Result<u64, ApiError> {
        count_all(&self.store, COUNSELOR_COLLECTION).await
    }

    async fn insert_many(&self, records: &[Counselor]) -> Result<(), ApiError> {
        insert_all(&self.store, COUNSELOR_COLLECTION, records).await
    }
}

impl CounselorRepository for MongoCounselorRepository {
    async fn list(&self, limit: i64) -> Result<Vec<Stored<Counselor>>, ApiError> {
        let collection = self.store.collection(COUNSELOR_COLLECTION)?;
        let docs = find_documents(&collection, doc! {}, Some(limit), None).await?;
        docs.into_iter().map(|d| decode(expose_id(d))).collect()
    }
}

// ── Write-only logs ──────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct MongoTestHistoryRepository {
    pub store: Store,
}

impl TestHistoryRepository for MongoTestHistoryRepository {
    async fn insert(&self, history: &TestHistory) -> Result<(), ApiError> {
        self.store
            .collection(TEST_RESULT_COLLECTION)?
            .insert_one(encode_timestamped(history)?)
            .await
            .context("insert test result")?;
        Ok(())
    }
}

#[derive(Clone)]
pub struct MongoContactRepository {
    pub store: Store,
}

impl ContactRepository for MongoContactRepository {
    async fn insert(&self, message: &ContactMessage) -> Result<(), ApiError> {
        self.store
            .collection(CONTACT_COLLECTION)?
            .insert_one(encode_timestamped(message)?)
            .await
            .context("insert contact message")?;
        Ok(())
    }
}
