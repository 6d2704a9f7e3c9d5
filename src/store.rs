//! In-memory document store: users, words, tricks, and quiz results.
//!
//! Each collection is a `HashMap` behind its own `RwLock`; callers only see
//! the typed CRUD API. Timestamps and ids are assigned here so callers never
//! fabricate them. Gamification counter updates and badge appends happen in
//! a single critical section per user, so points and badges cannot drift
//! apart under concurrent awards.

use std::{collections::HashMap, sync::Arc};

use chrono::Utc;
use rand::seq::SliceRandom;
use tokio::sync::RwLock;
use tracing::{info, instrument};
use uuid::Uuid;

use crate::domain::{ContentStatus, ExamType, QuizResult, Role, Trick, User, Word};
use crate::error::ApiError;

fn now_rfc3339() -> String {
    Utc::now().to_rfc3339()
}

/// Partial update for a user's gamification counters. Provided fields
/// overwrite; absent fields are untouched; badges are appended set-wise.
#[derive(Clone, Debug, Default)]
pub struct UserStatsPatch {
    pub points: Option<u64>,
    pub words_contributed: Option<u64>,
    pub words_learned: Option<u64>,
    pub quizzes_taken: Option<u64>,
    pub high_score_quizzes: Option<u64>,
    pub current_streak: Option<u32>,
    pub longest_streak: Option<u32>,
    pub last_active_date: Option<String>,
    pub add_badges: Vec<String>,
}

/// Word listing filter. `search` is applied after the limit cut, matching
/// the behavior of the original client-side filter.
#[derive(Clone, Debug, Default)]
pub struct WordQuery {
    pub status: Option<ContentStatus>,
    pub exam_type: Option<ExamType>,
    pub difficulty: Option<u8>,
    pub search: Option<String>,
    pub limit: Option<usize>,
}

#[derive(Clone, Debug, Default)]
pub struct TrickQuery {
    pub status: Option<ContentStatus>,
    pub category: Option<crate::domain::TrickCategory>,
    pub limit: Option<usize>,
}

/// Collection counts for the public stats endpoint.
#[derive(Clone, Copy, Debug)]
pub struct StoreStats {
    pub total_words: usize,
    pub pending_words: usize,
    pub total_users: usize,
    pub total_quizzes: usize,
}

const DEFAULT_WORD_LIMIT: usize = 100;
const DEFAULT_TRICK_LIMIT: usize = 50;

#[derive(Clone, Default)]
pub struct Store {
    users: Arc<RwLock<HashMap<String, User>>>,
    words: Arc<RwLock<HashMap<String, Word>>>,
    tricks: Arc<RwLock<HashMap<String, Trick>>>,
    results: Arc<RwLock<HashMap<String, QuizResult>>>,
}

impl Store {
    pub fn new() -> Self {
        Self::default()
    }

    // ---- users ----

    /// Insert a fresh user. Emails are unique; the check and the insert run
    /// under one write lock.
    #[instrument(level = "debug", skip(self, user), fields(user_id = %user.id))]
    pub async fn insert_user(&self, mut user: User) -> Result<User, ApiError> {
        let mut users = self.users.write().await;
        if users.values().any(|u| u.email == user.email) {
            return Err(ApiError::Conflict("Bu e-posta adresi zaten kayıtlı".to_string()));
        }
        let now = now_rfc3339();
        user.created_at = now.clone();
        user.updated_at = now;
        users.insert(user.id.clone(), user.clone());
        info!(target: "store", user_id = %user.id, "User registered");
        Ok(user)
    }

    #[instrument(level = "debug", skip(self))]
    pub async fn get_user(&self, id: &str) -> Option<User> {
        self.users.read().await.get(id).cloned()
    }

    #[instrument(level = "debug", skip(self, email))]
    pub async fn find_user_by_email(&self, email: &str) -> Option<User> {
        self.users.read().await.values().find(|u| u.email == email).cloned()
    }

    /// Apply a counter patch and badge appends atomically.
    #[instrument(level = "debug", skip(self, patch))]
    pub async fn update_user_stats(&self, id: &str, patch: UserStatsPatch) -> Result<User, ApiError> {
        let mut users = self.users.write().await;
        let user = users.get_mut(id).ok_or(ApiError::NotFound("Kullanıcı"))?;
        if let Some(v) = patch.points { user.stats.points = v; }
        if let Some(v) = patch.words_contributed { user.stats.words_contributed = v; }
        if let Some(v) = patch.words_learned { user.stats.words_learned = v; }
        if let Some(v) = patch.quizzes_taken { user.stats.quizzes_taken = v; }
        if let Some(v) = patch.high_score_quizzes { user.stats.high_score_quizzes = v; }
        if let Some(v) = patch.current_streak { user.stats.current_streak = v; }
        if let Some(v) = patch.longest_streak { user.stats.longest_streak = v; }
        if let Some(v) = patch.last_active_date { user.stats.last_active_date = Some(v); }
        for badge in patch.add_badges {
            if !user.stats.badges.contains(&badge) {
                user.stats.badges.push(badge);
            }
        }
        user.updated_at = now_rfc3339();
        Ok(user.clone())
    }

    #[instrument(level = "debug", skip(self))]
    pub async fn set_role(&self, id: &str, role: Role) -> Result<User, ApiError> {
        let mut users = self.users.write().await;
        let user = users.get_mut(id).ok_or(ApiError::NotFound("Kullanıcı"))?;
        user.role = role;
        user.updated_at = now_rfc3339();
        info!(target: "store", user_id = %id, ?role, "Role changed");
        Ok(user.clone())
    }

    /// Rename the account and refresh its avatar URL in one write.
    #[instrument(level = "debug", skip(self, name, photo_url))]
    pub async fn set_display_name(&self, id: &str, name: &str, photo_url: &str) -> Result<User, ApiError> {
        let mut users = self.users.write().await;
        let user = users.get_mut(id).ok_or(ApiError::NotFound("Kullanıcı"))?;
        user.display_name = name.to_string();
        user.photo_url = photo_url.to_string();
        user.updated_at = now_rfc3339();
        Ok(user.clone())
    }

    #[instrument(level = "debug", skip(self, hash))]
    pub async fn set_password_hash(&self, id: &str, hash: &str) -> Result<(), ApiError> {
        let mut users = self.users.write().await;
        let user = users.get_mut(id).ok_or(ApiError::NotFound("Kullanıcı"))?;
        user.password_hash = hash.to_string();
        user.updated_at = now_rfc3339();
        Ok(())
    }

    /// Top users by points, stable tiebreak on id.
    #[instrument(level = "debug", skip(self))]
    pub async fn leaderboard(&self, limit: usize) -> Vec<User> {
        let users = self.users.read().await;
        let mut rows: Vec<User> = users.values().cloned().collect();
        rows.sort_by(|a, b| b.stats.points.cmp(&a.stats.points).then(a.id.cmp(&b.id)));
        rows.truncate(limit);
        rows
    }

    // ---- words ----

    /// Store a community submission. Id, timestamps and the Pending status
    /// are assigned here regardless of what the caller set.
    #[instrument(level = "debug", skip(self, word), fields(english = %word.english))]
    pub async fn insert_word(&self, mut word: Word) -> Word {
        let now = now_rfc3339();
        word.id = Uuid::new_v4().to_string();
        word.status = ContentStatus::Pending;
        word.approved_by = None;
        word.rejected_by = None;
        word.rejection_reason = None;
        word.created_at = now.clone();
        word.updated_at = now;
        let mut words = self.words.write().await;
        words.insert(word.id.clone(), word.clone());
        info!(target: "store", word_id = %word.id, english = %word.english, "Word submitted");
        word
    }

    /// Seed an approved word. Skips entries whose english form already
    /// exists (case-insensitive); returns whether it was inserted.
    #[instrument(level = "debug", skip(self, word), fields(english = %word.english))]
    pub async fn seed_word(&self, mut word: Word) -> bool {
        let mut words = self.words.write().await;
        let english = word.english.trim().to_string();
        if words.values().any(|w| w.english.trim().eq_ignore_ascii_case(&english)) {
            return false;
        }
        let now = now_rfc3339();
        word.id = Uuid::new_v4().to_string();
        word.status = ContentStatus::Approved;
        word.created_at = now.clone();
        word.updated_at = now;
        words.insert(word.id.clone(), word);
        true
    }

    #[instrument(level = "debug", skip(self))]
    pub async fn get_word(&self, id: &str) -> Option<Word> {
        self.words.read().await.get(id).cloned()
    }

    #[instrument(level = "debug", skip(self, english))]
    pub async fn word_exists(&self, english: &str) -> bool {
        let needle = english.trim();
        self.words.read().await.values().any(|w| w.english.trim().eq_ignore_ascii_case(needle))
    }

    #[instrument(level = "debug", skip(self, query))]
    pub async fn query_words(&self, query: &WordQuery) -> Vec<Word> {
        let words = self.words.read().await;
        let mut rows: Vec<Word> = words
            .values()
            .filter(|w| query.status.map_or(true, |s| w.status == s))
            .filter(|w| query.exam_type.map_or(true, |e| w.exam_types.contains(&e)))
            .filter(|w| query.difficulty.map_or(true, |d| w.difficulty == d))
            .cloned()
            .collect();
        rows.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(a.id.cmp(&b.id)));
        rows.truncate(query.limit.unwrap_or(DEFAULT_WORD_LIMIT));
        if let Some(needle) = query.search.as_deref() {
            let needle = needle.to_lowercase();
            rows.retain(|w| {
                w.english.to_lowercase().contains(&needle) || w.turkish.to_lowercase().contains(&needle)
            });
        }
        rows
    }

    /// Random approved words, excluding the given ids.
    #[instrument(level = "debug", skip(self, exclude))]
    pub async fn random_words(&self, count: usize, exclude: &[String]) -> Vec<Word> {
        let words = self.words.read().await;
        let pool: Vec<&Word> = words
            .values()
            .filter(|w| w.status == ContentStatus::Approved)
            .filter(|w| !exclude.contains(&w.id))
            .collect();
        let mut rng = rand::thread_rng();
        pool.choose_multiple(&mut rng, count).map(|w| (*w).clone()).collect()
    }

    /// `pending → approved`, exactly once.
    #[instrument(level = "debug", skip(self))]
    pub async fn approve_word(&self, id: &str, admin_id: &str) -> Result<Word, ApiError> {
        let mut words = self.words.write().await;
        let word = words.get_mut(id).ok_or(ApiError::NotFound("Kelime"))?;
        if word.status != ContentStatus::Pending {
            return Err(ApiError::Conflict("Kelime zaten değerlendirilmiş".to_string()));
        }
        word.status = ContentStatus::Approved;
        word.approved_by = Some(admin_id.to_string());
        word.updated_at = now_rfc3339();
        info!(target: "store", word_id = %id, admin = %admin_id, "Word approved");
        Ok(word.clone())
    }

    /// `pending → rejected`, exactly once.
    #[instrument(level = "debug", skip(self, reason))]
    pub async fn reject_word(&self, id: &str, admin_id: &str, reason: Option<String>) -> Result<Word, ApiError> {
        let mut words = self.words.write().await;
        let word = words.get_mut(id).ok_or(ApiError::NotFound("Kelime"))?;
        if word.status != ContentStatus::Pending {
            return Err(ApiError::Conflict("Kelime zaten değerlendirilmiş".to_string()));
        }
        word.status = ContentStatus::Rejected;
        word.rejected_by = Some(admin_id.to_string());
        word.rejection_reason = reason;
        word.updated_at = now_rfc3339();
        info!(target: "store", word_id = %id, admin = %admin_id, "Word rejected");
        Ok(word.clone())
    }

    // ---- tricks ----

    #[instrument(level = "debug", skip(self, trick), fields(title = %trick.title))]
    pub async fn insert_trick(&self, mut trick: Trick) -> Trick {
        let now = now_rfc3339();
        trick.id = Uuid::new_v4().to_string();
        trick.status = ContentStatus::Pending;
        trick.upvotes = 0;
        trick.downvotes = 0;
        trick.approved_by = None;
        trick.rejected_by = None;
        trick.rejection_reason = None;
        trick.created_at = now.clone();
        trick.updated_at = now;
        let mut tricks = self.tricks.write().await;
        tricks.insert(trick.id.clone(), trick.clone());
        info!(target: "store", trick_id = %trick.id, "Trick submitted");
        trick
    }

    #[instrument(level = "debug", skip(self, query))]
    pub async fn query_tricks(&self, query: &TrickQuery) -> Vec<Trick> {
        let tricks = self.tricks.read().await;
        let mut rows: Vec<Trick> = tricks
            .values()
            .filter(|t| query.status.map_or(true, |s| t.status == s))
            .filter(|t| query.category.map_or(true, |c| t.category == c))
            .cloned()
            .collect();
        rows.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(a.id.cmp(&b.id)));
        rows.truncate(query.limit.unwrap_or(DEFAULT_TRICK_LIMIT));
        rows
    }

    #[instrument(level = "debug", skip(self))]
    pub async fn approve_trick(&self, id: &str, admin_id: &str) -> Result<Trick, ApiError> {
        let mut tricks = self.tricks.write().await;
        let trick = tricks.get_mut(id).ok_or(ApiError::NotFound("Trick"))?;
        if trick.status != ContentStatus::Pending {
            return Err(ApiError::Conflict("Trick zaten değerlendirilmiş".to_string()));
        }
        trick.status = ContentStatus::Approved;
        trick.approved_by = Some(admin_id.to_string());
        trick.updated_at = now_rfc3339();
        info!(target: "store", trick_id = %id, admin = %admin_id, "Trick approved");
        Ok(trick.clone())
    }

    #[instrument(level = "debug", skip(self, reason))]
    pub async fn reject_trick(&self, id: &str, admin_id: &str, reason: Option<String>) -> Result<Trick, ApiError> {
        let mut tricks = self.tricks.write().await;
        let trick = tricks.get_mut(id).ok_or(ApiError::NotFound("Trick"))?;
        if trick.status != ContentStatus::Pending {
            return Err(ApiError::Conflict("Trick zaten değerlendirilmiş".to_string()));
        }
        trick.status = ContentStatus::Rejected;
        trick.rejected_by = Some(admin_id.to_string());
        trick.rejection_reason = reason;
        trick.updated_at = now_rfc3339();
        info!(target: "store", trick_id = %id, admin = %admin_id, "Trick rejected");
        Ok(trick.clone())
    }

    // ---- quiz results ----

    /// Append a finished quiz. Rows are never updated or deleted.
    #[instrument(level = "debug", skip(self, result), fields(user_id = %result.user_id))]
    pub async fn insert_result(&self, mut result: QuizResult) -> QuizResult {
        result.id = Uuid::new_v4().to_string();
        result.completed_at = now_rfc3339();
        let mut results = self.results.write().await;
        results.insert(result.id.clone(), result.clone());
        info!(target: "store", result_id = %result.id, user_id = %result.user_id, percentage = result.percentage, "Quiz result recorded");
        result
    }

    #[instrument(level = "debug", skip(self))]
    pub async fn results_for_user(&self, user_id: &str, limit: usize) -> Vec<QuizResult> {
        let results = self.results.read().await;
        let mut rows: Vec<QuizResult> = results.values().filter(|r| r.user_id == user_id).cloned().collect();
        rows.sort_by(|a, b| b.completed_at.cmp(&a.completed_at).then(a.id.cmp(&b.id)));
        rows.truncate(limit);
        rows
    }

    // ---- stats ----

    #[instrument(level = "debug", skip(self))]
    pub async fn stats(&self) -> StoreStats {
        let words = self.words.read().await;
        let total_words = words.values().filter(|w| w.status == ContentStatus::Approved).count();
        let pending_words = words.values().filter(|w| w.status == ContentStatus::Pending).count();
        drop(words);
        StoreStats {
            total_words,
            pending_words,
            total_users: self.users.read().await.len(),
            total_quizzes: self.results.read().await.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{TrickCategory, UserStats, WordType};

    fn user(id: &str, email: &str, points: u64) -> User {
        User {
            id: id.to_string(),
            email: email.to_string(),
            display_name: "Test".into(),
            password_hash: "hash".into(),
            photo_url: String::new(),
            role: Role::User,
            created_at: String::new(),
            updated_at: String::new(),
            stats: UserStats { points, ..Default::default() },
        }
    }

    fn word(english: &str, turkish: &str) -> Word {
        Word {
            id: String::new(),
            english: english.to_string(),
            turkish: turkish.to_string(),
            word_type: WordType::Noun,
            difficulty: 2,
            exam_types: vec![ExamType::Yds],
            synonyms: vec![],
            antonyms: vec![],
            example_sentence: String::new(),
            example_sentence_tr: String::new(),
            status: ContentStatus::Pending,
            added_by: "u1".into(),
            added_by_name: "Test".into(),
            approved_by: None,
            rejected_by: None,
            rejection_reason: None,
            created_at: String::new(),
            updated_at: String::new(),
        }
    }

    fn trick(title: &str) -> Trick {
        Trick {
            id: String::new(),
            title: title.to_string(),
            content: "Uzun ve faydalı bir açıklama metni.".into(),
            category: TrickCategory::Vocabulary,
            status: ContentStatus::Pending,
            added_by: "u1".into(),
            added_by_name: "Test".into(),
            upvotes: 0,
            downvotes: 0,
            approved_by: None,
            rejected_by: None,
            rejection_reason: None,
            created_at: String::new(),
            updated_at: String::new(),
        }
    }

    #[tokio::test]
    async fn duplicate_email_is_a_conflict() {
        let store = Store::new();
        store.insert_user(user("u1", "a@b.com", 0)).await.expect("first insert");
        let err = store.insert_user(user("u2", "a@b.com", 0)).await.expect_err("duplicate");
        assert!(matches!(err, ApiError::Conflict(_)));
        assert_eq!(err.to_string(), "Bu e-posta adresi zaten kayıtlı");
    }

    #[tokio::test]
    async fn stats_patch_merges_only_named_fields() {
        let store = Store::new();
        store.insert_user(user("u1", "a@b.com", 10)).await.expect("insert");
        store
            .update_user_stats("u1", UserStatsPatch {
                points: Some(25),
                words_contributed: Some(3),
                ..Default::default()
            })
            .await
            .expect("patch");
        let u = store.get_user("u1").await.expect("user");
        assert_eq!(u.stats.points, 25);
        assert_eq!(u.stats.words_contributed, 3);
        assert_eq!(u.stats.quizzes_taken, 0);
    }

    #[tokio::test]
    async fn badge_append_is_idempotent_and_ordered() {
        let store = Store::new();
        store.insert_user(user("u1", "a@b.com", 0)).await.expect("insert");
        store
            .update_user_stats("u1", UserStatsPatch {
                add_badges: vec!["caylak".into(), "katkici".into()],
                ..Default::default()
            })
            .await
            .expect("patch");
        store
            .update_user_stats("u1", UserStatsPatch {
                add_badges: vec!["caylak".into(), "uzman".into()],
                ..Default::default()
            })
            .await
            .expect("patch");
        let u = store.get_user("u1").await.expect("user");
        assert_eq!(u.stats.badges, vec!["caylak", "katkici", "uzman"]);
    }

    #[tokio::test]
    async fn leaderboard_orders_by_points_then_id() {
        let store = Store::new();
        store.insert_user(user("b", "b@b.com", 50)).await.expect("insert");
        store.insert_user(user("a", "a@a.com", 50)).await.expect("insert");
        store.insert_user(user("c", "c@c.com", 90)).await.expect("insert");
        let rows = store.leaderboard(2).await;
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].id, "c");
        assert_eq!(rows[1].id, "a");
    }

    #[tokio::test]
    async fn submissions_are_forced_pending_with_fresh_ids() {
        let store = Store::new();
        let mut draft = word("abandon", "terk etmek");
        draft.status = ContentStatus::Approved;
        draft.id = "attacker-chosen".into();
        let stored = store.insert_word(draft).await;
        assert_ne!(stored.id, "attacker-chosen");
        assert_eq!(stored.status, ContentStatus::Pending);
        assert!(!stored.created_at.is_empty());
    }

    #[tokio::test]
    async fn approve_is_one_shot() {
        let store = Store::new();
        let stored = store.insert_word(word("abandon", "terk etmek")).await;
        let approved = store.approve_word(&stored.id, "admin1").await.expect("approve");
        assert_eq!(approved.status, ContentStatus::Approved);
        assert_eq!(approved.approved_by.as_deref(), Some("admin1"));

        let err = store.approve_word(&stored.id, "admin2").await.expect_err("second approve");
        assert!(matches!(err, ApiError::Conflict(_)));
        let err = store.reject_word(&stored.id, "admin2", None).await.expect_err("reject after approve");
        assert!(matches!(err, ApiError::Conflict(_)));
    }

    #[tokio::test]
    async fn reject_records_admin_and_reason() {
        let store = Store::new();
        let stored = store.insert_word(word("abandon", "terk etmek")).await;
        let rejected = store
            .reject_word(&stored.id, "admin1", Some("Yanlış çeviri".into()))
            .await
            .expect("reject");
        assert_eq!(rejected.status, ContentStatus::Rejected);
        assert_eq!(rejected.rejection_reason.as_deref(), Some("Yanlış çeviri"));
    }

    #[tokio::test]
    async fn unknown_word_is_not_found() {
        let store = Store::new();
        let err = store.approve_word("missing", "admin").await.expect_err("missing");
        assert_eq!(err.to_string(), "Kelime bulunamadı");
    }

    #[tokio::test]
    async fn query_filters_and_search_after_limit() {
        let store = Store::new();
        let w1 = store.insert_word(word("abandon", "terk etmek")).await;
        store.insert_word(word("benefit", "fayda")).await;
        let w3 = store.insert_word(word("crucial", "çok önemli")).await;
        store.approve_word(&w1.id, "admin").await.expect("approve");
        store.approve_word(&w3.id, "admin").await.expect("approve");

        let approved = store
            .query_words(&WordQuery { status: Some(ContentStatus::Approved), ..Default::default() })
            .await;
        assert_eq!(approved.len(), 2);

        let found = store
            .query_words(&WordQuery {
                status: Some(ContentStatus::Approved),
                search: Some("CRUC".into()),
                ..Default::default()
            })
            .await;
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].english, "crucial");

        let none = store
            .query_words(&WordQuery { difficulty: Some(5), ..Default::default() })
            .await;
        assert!(none.is_empty());
    }

    #[tokio::test]
    async fn seed_word_skips_duplicates_case_insensitively() {
        let store = Store::new();
        let mut w = word("abandon", "terk etmek");
        w.added_by = "system".into();
        assert!(store.seed_word(w.clone()).await);
        w.english = "Abandon".into();
        assert!(!store.seed_word(w).await);
        assert!(store.word_exists("  ABANDON ").await);
    }

    #[tokio::test]
    async fn random_words_respects_exclusions() {
        let store = Store::new();
        let mut ids = Vec::new();
        for (en, tr) in [("a-one", "bir"), ("b-two", "iki"), ("c-three", "üç")] {
            let w = store.insert_word(word(en, tr)).await;
            store.approve_word(&w.id, "admin").await.expect("approve");
            ids.push(w.id);
        }
        let picked = store.random_words(10, &[ids[0].clone()]).await;
        assert_eq!(picked.len(), 2);
        assert!(picked.iter().all(|w| w.id != ids[0]));
    }

    #[tokio::test]
    async fn trick_lifecycle_mirrors_words() {
        let store = Store::new();
        let t = store.insert_trick(trick("Suffix -tion her zaman isim yapar")).await;
        assert_eq!(t.status, ContentStatus::Pending);
        let approved = store.approve_trick(&t.id, "admin").await.expect("approve");
        assert_eq!(approved.status, ContentStatus::Approved);
        let err = store.approve_trick(&t.id, "admin").await.expect_err("twice");
        assert!(matches!(err, ApiError::Conflict(_)));

        let listed = store
            .query_tricks(&TrickQuery { status: Some(ContentStatus::Approved), ..Default::default() })
            .await;
        assert_eq!(listed.len(), 1);
        let by_cat = store
            .query_tricks(&TrickQuery { category: Some(TrickCategory::Grammar), ..Default::default() })
            .await;
        assert!(by_cat.is_empty());
    }

    #[tokio::test]
    async fn results_are_append_only_and_newest_first() {
        let store = Store::new();
        for correct in [5, 7] {
            store
                .insert_result(QuizResult {
                    id: String::new(),
                    user_id: "u1".into(),
                    correct,
                    total: 10,
                    percentage: f64::from(correct) * 10.0,
                    grade: "İyi! 👍".into(),
                    quiz_type: crate::domain::QuizType::EnToTr,
                    wrong_answers: vec![],
                    completed_at: String::new(),
                })
                .await;
        }
        let rows = store.results_for_user("u1", 10).await;
        assert_eq!(rows.len(), 2);
        assert!(rows[0].completed_at >= rows[1].completed_at);
        assert!(store.results_for_user("other", 10).await.is_empty());
    }

    #[tokio::test]
    async fn stats_counts_by_status() {
        let store = Store::new();
        store.insert_user(user("u1", "a@b.com", 0)).await.expect("insert");
        let w = store.insert_word(word("abandon", "terk etmek")).await;
        store.insert_word(word("benefit", "fayda")).await;
        store.approve_word(&w.id, "admin").await.expect("approve");
        let s = store.stats().await;
        assert_eq!(s.total_words, 1);
        assert_eq!(s.pending_words, 1);
        assert_eq!(s.total_users, 1);
        assert_eq!(s.total_quizzes, 0);
    }
}
