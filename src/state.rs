//! Application state: document store, quiz sessions, prompts, and AI clients.
//!
//! This module owns:
//!   - the in-memory document store (users, words, tricks, quiz results)
//!   - one active quiz session per user
//!   - the prompts struct (from TOML or defaults)
//!   - optional Groq and moderation clients
//!
//! The word bank is seeded at startup from the built-in list plus any TOML
//! entries. If Groq is unavailable, the AI endpoints answer with a notice
//! instead of failing.

use std::{collections::HashMap, sync::Arc};
use tokio::sync::RwLock;
use tracing::{info, instrument};

use crate::config::{load_app_config_from_env, Prompts};
use crate::error::ApiError;
use crate::groq::Groq;
use crate::moderation::Moderation;
use crate::quiz::{AnswerOutcome, QuizSession};
use crate::seeds::{seed_words, word_from_cfg};
use crate::store::Store;

#[derive(Clone)]
pub struct AppState {
    pub store: Store,
    /// Active quiz per user id. Starting a new quiz replaces the old entry.
    pub sessions: Arc<RwLock<HashMap<String, QuizSession>>>,
    pub groq: Option<Groq>,
    pub moderation: Option<Moderation>,
    pub prompts: Prompts,
    pub admin_emails: Vec<String>,
}

impl AppState {
    /// Build state from env: load config, seed the word bank, init AI clients.
    #[instrument(level = "info", skip_all)]
    pub async fn new() -> Self {
        // Load TOML config if provided (prompts + admin allowlist + extra words).
        let cfg_opt = load_app_config_from_env();
        let prompts = cfg_opt
            .as_ref()
            .map(|c| c.prompts.clone())
            .unwrap_or_default();
        let admin_emails = cfg_opt
            .as_ref()
            .map(|c| c.admin_emails.clone())
            .unwrap_or_default();

        let store = Store::new();

        // Built-in bank first, then config entries. seed_word skips duplicate
        // english text case-insensitively, so config files cannot shadow the
        // built-ins by accident.
        let mut seeded = 0usize;
        let mut skipped = 0usize;
        for word in seed_words() {
            if store.seed_word(word).await {
                seeded += 1;
            } else {
                skipped += 1;
            }
        }
        if let Some(cfg) = &cfg_opt {
            for wc in &cfg.words {
                if store.seed_word(word_from_cfg(wc)).await {
                    seeded += 1;
                } else {
                    skipped += 1;
                }
            }
        }
        let inventory = store.stats().await;
        info!(target: "store", seeded, skipped, total = inventory.total_words, "Startup word inventory");

        // Build optional AI clients (if API keys present).
        let groq = Groq::from_env();
        if let Some(g) = &groq {
            info!(target: "kelimeci_backend", base_url = %g.base_url, model = %g.model, "Groq enabled.");
        } else {
            info!(target: "kelimeci_backend", "Groq disabled (no GROQ_API_KEY). AI endpoints answer with a notice.");
        }
        let moderation = Moderation::from_env();
        if let Some(m) = &moderation {
            info!(target: "kelimeci_backend", base_url = %m.base_url, "Moderation enabled.");
        } else {
            info!(target: "kelimeci_backend", "Moderation disabled (no OPENAI_API_KEY). Submissions pass unscreened.");
        }

        if !admin_emails.is_empty() {
            info!(target: "kelimeci_backend", allowlisted = admin_emails.len(), "Admin allowlist loaded.");
        }

        Self {
            store,
            sessions: Arc::new(RwLock::new(HashMap::new())),
            groq,
            moderation,
            prompts,
            admin_emails,
        }
    }

    /// Install a fresh session for this user, replacing any running one.
    #[instrument(level = "debug", skip(self, session), fields(%user_id, total = session.total()))]
    pub async fn begin_session(&self, user_id: &str, session: QuizSession) {
        let mut sessions = self.sessions.write().await;
        if sessions.insert(user_id.to_string(), session).is_some() {
            info!(target: "quiz", %user_id, "Replaced an unfinished quiz session");
        }
    }

    /// Snapshot of the user's current session, if any.
    #[instrument(level = "debug", skip(self))]
    pub async fn session_snapshot(&self, user_id: &str) -> Option<QuizSession> {
        self.sessions.read().await.get(user_id).cloned()
    }

    /// Apply one answer to the running session. The session leaves the map
    /// once its last question is answered; the returned snapshot still
    /// carries the full answer sheet for grading.
    #[instrument(level = "debug", skip(self, selected))]
    pub async fn answer_in_session(
        &self,
        user_id: &str,
        selected: &str,
    ) -> Result<(AnswerOutcome, QuizSession), ApiError> {
        let mut sessions = self.sessions.write().await;
        let session = sessions
            .get_mut(user_id)
            .ok_or(ApiError::NotFound("Aktif quiz oturumu"))?;
        let outcome = session.submit_answer(selected)?;
        let snapshot = session.clone();
        if outcome.finished {
            sessions.remove(user_id);
        }
        Ok((outcome, snapshot))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::QuizType;
    use crate::quiz::Question;

    fn bare_state() -> AppState {
        AppState {
            store: Store::new(),
            sessions: Arc::new(RwLock::new(HashMap::new())),
            groq: None,
            moderation: None,
            prompts: Prompts::default(),
            admin_emails: Vec::new(),
        }
    }

    fn one_question_session() -> QuizSession {
        QuizSession::new(
            QuizType::EnToTr,
            vec![Question {
                word_id: "w1".to_string(),
                kind: QuizType::EnToTr,
                prompt: "'abandon' kelimesinin Türkçe karşılığı nedir?".to_string(),
                options: vec!["terk etmek".into(), "sürdürmek".into()],
                correct: "terk etmek".to_string(),
            }],
        )
    }

    #[tokio::test]
    async fn finished_session_is_evicted_but_snapshot_keeps_answers() {
        let state = bare_state();
        state.begin_session("u1", one_question_session()).await;
        assert!(state.session_snapshot("u1").await.is_some());

        let (outcome, snapshot) = state.answer_in_session("u1", "sürdürmek").await.unwrap();
        assert!(!outcome.is_correct);
        assert!(outcome.finished);
        assert_eq!(snapshot.answers.len(), 1);
        assert_eq!(snapshot.wrong_word_ids, vec!["w1".to_string()]);
        assert!(state.session_snapshot("u1").await.is_none());
    }

    #[tokio::test]
    async fn answering_without_a_session_is_not_found() {
        let state = bare_state();
        let err = state.answer_in_session("ghost", "x").await.unwrap_err();
        assert_eq!(err.to_string(), "Aktif quiz oturumu bulunamadı");
    }

    #[tokio::test]
    async fn restart_replaces_the_running_session() {
        let state = bare_state();
        state.begin_session("u1", one_question_session()).await;
        let mut second = one_question_session();
        second.questions[0].correct = "farklı".to_string();
        state.begin_session("u1", second).await;

        let snap = state.session_snapshot("u1").await.unwrap();
        assert_eq!(snap.questions[0].correct, "farklı");
    }
}
