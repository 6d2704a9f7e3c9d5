//! Content screening through the OpenAI moderation endpoint.
//!
//! Screening is advisory: when the API is unreachable, misconfigured or
//! absent the submission is allowed. Only an explicit flagged verdict
//! blocks. Callers get the distinction spelled out in `Screening` instead
//! of a bare bool.

use std::collections::HashMap;
use std::time::Duration;

use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, USER_AGENT};
use serde::Deserialize;
use tracing::{instrument, warn};

use crate::util::trunc_for_log;

/// Turkish display names for the categories we report on. Categories the
/// API adds beyond these are not surfaced by name.
const CATEGORY_NAMES: [(&str, &str); 11] = [
  ("hate", "Nefret söylemi"),
  ("hate/threatening", "Tehditkar nefret söylemi"),
  ("harassment", "Taciz"),
  ("harassment/threatening", "Tehditkar taciz"),
  ("self-harm", "Kendine zarar"),
  ("self-harm/intent", "Kendine zarar niyeti"),
  ("self-harm/instructions", "Kendine zarar talimatı"),
  ("sexual", "Cinsel içerik"),
  ("sexual/minors", "Çocuklara yönelik cinsel içerik"),
  ("violence", "Şiddet"),
  ("violence/graphic", "Grafik şiddet"),
];

#[derive(Clone, Debug)]
pub struct FlaggedCategory {
  pub category: String,
  pub turkish: &'static str,
  pub score: f64,
}

/// Outcome of a screening call. `Unavailable` always allows.
#[derive(Clone, Debug)]
pub enum Screening {
  Verdict { flagged: bool, categories: Vec<FlaggedCategory> },
  Unavailable { reason: String },
}

#[derive(Clone)]
pub struct Moderation {
  pub client: reqwest::Client,
  pub api_key: String,
  pub base_url: String,
}

impl Moderation {
  /// Construct the client if we find OPENAI_API_KEY; otherwise return None.
  pub fn from_env() -> Option<Self> {
    let api_key = std::env::var("OPENAI_API_KEY").ok()?;
    let base_url =
      std::env::var("OPENAI_BASE_URL").unwrap_or_else(|_| "https://api.openai.com/v1".into());

    let client = reqwest::Client::builder()
      .timeout(Duration::from_secs(20))
      .build()
      .ok()?;

    Some(Self { client, api_key, base_url })
  }

  /// Screen one text. Transport and decode problems become `Unavailable`.
  #[instrument(level = "info", skip(self, text), fields(text_len = text.len()))]
  pub async fn screen(&self, text: &str) -> Screening {
    let url = format!("{}/moderations", self.base_url);
    let res = match self
      .client
      .post(&url)
      .header(USER_AGENT, "kelimeci-backend/0.1")
      .header(CONTENT_TYPE, "application/json")
      .header(AUTHORIZATION, format!("Bearer {}", self.api_key))
      .json(&serde_json::json!({ "input": text }))
      .send()
      .await
    {
      Ok(res) => res,
      Err(e) => return Screening::Unavailable { reason: e.to_string() },
    };

    if !res.status().is_success() {
      let status = res.status();
      let body = res.text().await.unwrap_or_default();
      return Screening::Unavailable {
        reason: format!("moderation HTTP {}: {}", status, trunc_for_log(&body, 120)),
      };
    }

    let body: ModerationResponse = match res.json().await {
      Ok(b) => b,
      Err(e) => return Screening::Unavailable { reason: e.to_string() },
    };
    let Some(result) = body.results.into_iter().next() else {
      return Screening::Unavailable { reason: "empty results".to_string() };
    };

    Screening::Verdict { flagged: result.flagged, categories: flagged_categories(&result) }
  }
}

fn flagged_categories(result: &ModerationResult) -> Vec<FlaggedCategory> {
  CATEGORY_NAMES
    .iter()
    .filter(|(id, _)| result.categories.get(*id).copied().unwrap_or(false))
    .map(|(id, turkish)| FlaggedCategory {
      category: (*id).to_string(),
      turkish,
      score: result.category_scores.get(*id).copied().unwrap_or(0.0),
    })
    .collect()
}

/// Screen a word submission. `(true, "")` when allowed.
pub async fn screen_word(
  client: Option<&Moderation>,
  english: &str,
  turkish: &str,
  example: &str,
) -> (bool, String) {
  let combined = format!("{} {} {}", english, turkish, example).trim().to_string();
  screen_submission(client, &combined).await
}

/// Screen a trick submission. `(true, "")` when allowed.
pub async fn screen_trick(client: Option<&Moderation>, title: &str, content: &str) -> (bool, String) {
  let combined = format!("{}\n\n{}", title, content).trim().to_string();
  screen_submission(client, &combined).await
}

async fn screen_submission(client: Option<&Moderation>, text: &str) -> (bool, String) {
  if text.is_empty() {
    return (true, String::new());
  }
  match client {
    Some(client) => decide(client.screen(text).await),
    None => (true, String::new()),
  }
}

fn decide(screening: Screening) -> (bool, String) {
  match screening {
    Screening::Verdict { flagged: true, categories } => {
      for c in &categories {
        warn!(target: "moderation", category = %c.category, score = c.score, "Content flagged");
      }
      if categories.is_empty() {
        (false, "İçerik moderasyon kontrolünden geçemedi.".to_string())
      } else {
        let names: Vec<&str> = categories.iter().map(|c| c.turkish).collect();
        (false, format!("İçerik uygunsuz bulundu: {}", names.join(", ")))
      }
    }
    Screening::Verdict { flagged: false, .. } => (true, String::new()),
    Screening::Unavailable { reason } => {
      warn!(target: "moderation", %reason, "Moderation unavailable; allowing content");
      (true, String::new())
    }
  }
}

// --- Moderation DTOs ---

#[derive(Deserialize)]
struct ModerationResponse {
  results: Vec<ModerationResult>,
}
#[derive(Deserialize)]
struct ModerationResult {
  flagged: bool,
  #[serde(default)]
  categories: HashMap<String, bool>,
  #[serde(default)]
  category_scores: HashMap<String, f64>,
}
