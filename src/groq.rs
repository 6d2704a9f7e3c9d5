//! Minimal Groq client for our use-cases.
//!
//! We only call the OpenAI-compatible chat.completions endpoint and ask for
//! short Turkish/English study material. Calls are instrumented and log model
//! names, latencies, and response sizes (not contents).
//!
//! NOTE: We never log the API key and we keep payload truncations short.

use std::time::Duration;

use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, USER_AGENT};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

use crate::config::Prompts;
use crate::util::trunc_for_log;

/// An example sentence with its translation.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SentencePair {
  pub english: String,
  pub turkish: String,
}

/// A fill-in-the-blank question as the model returns it.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CompletionQuestion {
  pub sentence: String,
  pub correct: String,
  pub options: Vec<String>,
}

#[derive(Clone)]
pub struct Groq {
  pub client: reqwest::Client,
  pub api_key: String,
  pub base_url: String,
  pub model: String,
}

impl Groq {
  /// Construct the client if we find GROQ_API_KEY; otherwise return None.
  pub fn from_env() -> Option<Self> {
    let api_key = std::env::var("GROQ_API_KEY").ok()?;
    let base_url =
      std::env::var("GROQ_BASE_URL").unwrap_or_else(|_| "https://api.groq.com/openai/v1".into());
    let model = std::env::var("GROQ_MODEL").unwrap_or_else(|_| "llama-3.1-8b-instant".into());

    let client = reqwest::Client::builder()
      .timeout(Duration::from_secs(20))
      .build()
      .ok()?;

    Some(Self { client, api_key, base_url, model })
  }

  /// Plain-text chat completion shared by every operation.
  #[instrument(level = "info", skip(self, system, user), fields(model = %self.model))]
  async fn chat(&self, system: &str, user: &str, max_tokens: u32, temperature: f32) -> Result<String, String> {
    let url = format!("{}/chat/completions", self.base_url);
    let req = ChatCompletionRequest {
      model: self.model.clone(),
      messages: vec![
        ChatMessageReq { role: "system".into(), content: system.into() },
        ChatMessageReq { role: "user".into(), content: user.into() },
      ],
      temperature,
      max_tokens: Some(max_tokens),
    };

    let res = self.client.post(&url)
      .header(USER_AGENT, "kelimeci-backend/0.1")
      .header(CONTENT_TYPE, "application/json")
      .header(AUTHORIZATION, format!("Bearer {}", self.api_key))
      .json(&req).send().await.map_err(|e| e.to_string())?;

    if !res.status().is_success() {
      let status = res.status();
      let body = res.text().await.unwrap_or_default();
      let msg = extract_api_error(&body).unwrap_or_else(|| body);
      return Err(format!("Groq HTTP {}: {}", status, msg));
    }

    let body: ChatCompletionResponse = res.json().await.map_err(|e| e.to_string())?;
    if let Some(usage) = &body.usage {
      info!(prompt_tokens = ?usage.prompt_tokens, completion_tokens = ?usage.completion_tokens, total_tokens = ?usage.total_tokens, "Groq usage");
    }
    let text = body.choices.get(0)
      .and_then(|c| c.message.content.clone())
      .unwrap_or_default().trim().to_string();

    Ok(text)
  }

  // --- High-level helpers (domain-specialized) ---

  /// Generate an exam-style example sentence with its Turkish translation.
  /// The model is asked for strict JSON; when it rambles anyway we keep the
  /// text as an English-only pair instead of failing the request.
  #[instrument(level = "info", skip(self, prompts, turkish), fields(%word, %word_type))]
  pub async fn example_sentence(
    &self,
    prompts: &Prompts,
    word: &str,
    word_type: &str,
    turkish: &str,
  ) -> Result<Option<SentencePair>, String> {
    let mut user = format!("Kelime: {}", word);
    if !word_type.is_empty() {
      user.push_str(&format!(" (tür: {})", word_type));
    }
    if !turkish.is_empty() {
      user.push_str(&format!(" - Türkçe anlamı: {}", turkish));
    }

    let start = std::time::Instant::now();
    let content = self
      .chat(&prompts.example_sentence, &user, 250, 0.7)
      .await
      .map_err(|e| friendly_ai_error(&e))?;
    info!(elapsed = ?start.elapsed(), "Example sentence response received");

    let cleaned = strip_json_fences(&content);
    match serde_json::from_str::<serde_json::Value>(cleaned) {
      Ok(v) => {
        let english = v.get("english").and_then(|x| x.as_str());
        let turkish = v.get("turkish").and_then(|x| x.as_str());
        match (english, turkish) {
          (Some(en), Some(tr)) => {
            info!(target: "groq", preview = %trunc_for_log(en, 40), "Example sentence generated");
            Ok(Some(SentencePair { english: en.to_string(), turkish: tr.to_string() }))
          }
          _ => Ok(None),
        }
      }
      // Not JSON at all: treat the raw text as the sentence itself.
      Err(_) => {
        let sentence = cleaned.trim_matches(|c| c == '"' || c == '\'').to_string();
        Ok(Some(SentencePair { english: sentence, turkish: String::new() }))
      }
    }
  }

  /// Generate a fill-in-the-blank question with three distractors.
  #[instrument(level = "info", skip(self, prompts), fields(%word, %word_type))]
  pub async fn completion_question(
    &self,
    prompts: &Prompts,
    word: &str,
    word_type: &str,
  ) -> Result<Option<CompletionQuestion>, String> {
    let user = format!("Kelime: {} (tür: {})", word, word_type);
    let content = self
      .chat(&prompts.sentence_completion, &user, 200, 0.8)
      .await
      .map_err(|e| friendly_ai_error(&e))?;

    let cleaned = strip_json_fences(&content);
    Ok(serde_json::from_str::<CompletionQuestion>(cleaned).ok())
  }

  /// Two-sentence Turkish usage note for a word.
  #[instrument(level = "info", skip(self, prompts, turkish), fields(%word))]
  pub async fn word_explanation(
    &self,
    prompts: &Prompts,
    word: &str,
    turkish: &str,
  ) -> Result<Option<String>, String> {
    let user = format!("Kelime: {}\nTürkçe karşılık: {}", word, turkish);
    let text = self
      .chat(&prompts.word_explanation, &user, 100, 0.7)
      .await
      .map_err(|e| friendly_ai_error(&e))?;
    Ok((!text.is_empty()).then_some(text))
  }

  /// Playful mnemonic for remembering a word.
  #[instrument(level = "info", skip(self, prompts, context), fields(%word))]
  pub async fn memory_hint(
    &self,
    prompts: &Prompts,
    word: &str,
    context: &str,
  ) -> Result<Option<String>, String> {
    let user = format!("Kelime: {}\n{}", word, context);
    let text = self
      .chat(&prompts.memory_hint, &user, 80, 0.9)
      .await
      .map_err(|e| friendly_ai_error(&e))?;
    Ok((!text.is_empty()).then_some(text))
  }
}

/// Models often wrap the requested JSON in a code fence; unwrap it.
fn strip_json_fences(content: &str) -> &str {
  let inner = if let Some((_, rest)) = content.split_once("```json") {
    rest.split("```").next().unwrap_or(rest)
  } else if let Some((_, rest)) = content.split_once("```") {
    rest.split("```").next().unwrap_or(rest)
  } else {
    content
  };
  inner.trim()
}

/// Map raw transport errors to the Turkish messages users actually see.
fn friendly_ai_error(e: &str) -> String {
  let lower = e.to_lowercase();
  if lower.contains("rate limit") {
    "API limit aşıldı. Lütfen biraz bekleyip tekrar deneyin.".to_string()
  } else if lower.contains("invalid api key") {
    "Geçersiz Groq API anahtarı.".to_string()
  } else {
    format!("AI hatası: {}", e)
  }
}

// --- Chat DTOs ---

#[derive(Serialize)]
struct ChatCompletionRequest {
  model: String,
  messages: Vec<ChatMessageReq>,
  temperature: f32,
  #[serde(skip_serializing_if = "Option::is_none")]
  max_tokens: Option<u32>,
}
#[derive(Serialize)]
struct ChatMessageReq { role: String, content: String }

#[derive(Deserialize)]
struct ChatCompletionResponse {
  choices: Vec<ChatChoice>,
  #[serde(default)] usage: Option<Usage>,
}
#[derive(Deserialize)]
struct ChatChoice { message: ChatMessageResp }
#[derive(Deserialize)]
struct ChatMessageResp { content: Option<String> }
#[derive(Deserialize)]
struct Usage {
  #[serde(default)] prompt_tokens: Option<u32>,
  #[serde(default)] completion_tokens: Option<u32>,
  #[serde(default)] total_tokens: Option<u32>,
}

/// Try to extract a clean error message from an API error body.
fn extract_api_error(body: &str) -> Option<String> {
  #[derive(Deserialize)]
  struct EWrap { error: EObj }
  #[derive(Deserialize)]
  struct EObj { message: String }
  match serde_json::from_str::<EWrap>(body) {
    Ok(w) => Some(w.error.message),
    Err(_) => None,
  }
}
