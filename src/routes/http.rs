//! HTTP endpoint handlers. These are thin wrappers that decode the request,
//! call into the domain modules, and encode the response. Admin-gated paths
//! carry the acting user's id in the body and are checked server-side.

use std::sync::Arc;
use axum::{extract::{Path, Query, State}, Json, response::IntoResponse};
use chrono::Utc;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{info, instrument, warn};

use crate::badges::BadgeCounters;
use crate::domain::{ContentStatus, QuizResult, Trick, User, Word};
use crate::error::ApiError;
use crate::gamify::{self, AwardSummary};
use crate::protocol::*;
use crate::quiz::{self, QuizSession};
use crate::scoring::{self, level_for_points};
use crate::state::AppState;
use crate::store::{TrickQuery, WordQuery};
use crate::{auth, badges, moderation, util};

const NO_GROQ_MESSAGE: &str = "Groq API anahtarı yapılandırılmamış.";
const WORD_SUBMITTED_MESSAGE: &str = "Kelime başarıyla eklendi! Admin onayından sonra yayınlanacak.";
const TRICK_SUBMITTED_MESSAGE: &str = "Trick başarıyla eklendi! Admin onayından sonra yayınlanacak.";
const DEFAULT_REJECT_REASON: &str = "Admin tarafından reddedildi";
const DEFAULT_RESULTS_LIMIT: usize = 10;
const DEFAULT_LEADERBOARD_LIMIT: usize = 10;
const MAX_LEADERBOARD_LIMIT: usize = 100;
const MAX_RANDOM_WORDS: usize = 20;

/// Load the acting user and require admin standing (role or allowlist).
async fn require_admin(state: &AppState, admin_id: &str) -> Result<User, ApiError> {
  let user = state.store.get_user(admin_id).await.ok_or(ApiError::NotFound("Kullanıcı"))?;
  if !auth::is_admin(&user, &state.admin_emails) {
    return Err(ApiError::Forbidden);
  }
  Ok(user)
}

fn clean_tags(tags: &[String]) -> Vec<String> {
  tags.iter().map(|t| util::sanitize_input(t)).filter(|t| !t.is_empty()).collect()
}

fn split_excludes(raw: Option<&str>) -> Vec<String> {
  raw
    .map(|s| {
      s.split(',')
        .map(|part| part.trim().to_string())
        .filter(|part| !part.is_empty())
        .collect()
    })
    .unwrap_or_default()
}

fn reject_reason(given: Option<String>) -> Option<String> {
  given
    .filter(|r| !r.trim().is_empty())
    .or_else(|| Some(DEFAULT_REJECT_REASON.to_string()))
}

#[instrument(level = "info", skip(state))]
pub async fn http_health(State(state): State<Arc<AppState>>) -> impl IntoResponse {
  Json(HealthOut {
    ok: true,
    groq: state.groq.is_some(),
    moderation: state.moderation.is_some(),
  })
}

#[instrument(level = "info")]
pub async fn http_catalog() -> impl IntoResponse {
  Json(catalog_out())
}

// ---- auth ----

#[instrument(level = "info", skip(state, body), fields(email = %body.email))]
pub async fn http_signup(
  State(state): State<Arc<AppState>>,
  Json(body): Json<SignupIn>,
) -> Result<impl IntoResponse, ApiError> {
  let user = auth::signup(&state.store, &body.email, &body.password, &body.display_name).await?;
  Ok(Json(user))
}

/// Login also advances the daily streak, so the returned account already
/// carries any login points.
#[instrument(level = "info", skip(state, body), fields(email = %body.email))]
pub async fn http_login(
  State(state): State<Arc<AppState>>,
  Json(body): Json<LoginIn>,
) -> Result<impl IntoResponse, ApiError> {
  let user = auth::login(&state.store, &body.email, &body.password).await?;
  let streak = gamify::touch_streak(&state.store, &user.id, Utc::now().date_naive()).await?;
  let user = state.store.get_user(&user.id).await.ok_or(ApiError::NotFound("Kullanıcı"))?;
  Ok(Json(LoginOut { user, streak: streak.into() }))
}

// ---- users ----

#[instrument(level = "info", skip(state), fields(user_id = %id))]
pub async fn http_get_user(
  State(state): State<Arc<AppState>>,
  Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
  let user = state.store.get_user(&id).await.ok_or(ApiError::NotFound("Kullanıcı"))?;
  let standing = level_for_points(user.stats.points);
  let counters = BadgeCounters::from(&user.stats);
  let rows = badges::progress(&counters, &user.stats.badges);
  Ok(Json(ProfileOut {
    level: level_out(&standing),
    badge_progress: badge_rows(rows),
    user,
  }))
}

#[instrument(level = "info", skip(state, body), fields(user_id = %id))]
pub async fn http_rename(
  State(state): State<Arc<AppState>>,
  Path(id): Path<String>,
  Json(body): Json<RenameIn>,
) -> Result<impl IntoResponse, ApiError> {
  let user = auth::rename(&state.store, &id, &body.display_name).await?;
  Ok(Json(user))
}

#[instrument(level = "info", skip(state, body), fields(user_id = %id))]
pub async fn http_change_password(
  State(state): State<Arc<AppState>>,
  Path(id): Path<String>,
  Json(body): Json<PasswordIn>,
) -> Result<impl IntoResponse, ApiError> {
  auth::change_password(&state.store, &id, &body.password).await?;
  Ok(Json(OkOut { ok: true }))
}

#[instrument(level = "info", skip(state, body), fields(user_id = %id, admin_id = %body.admin_id))]
pub async fn http_set_role(
  State(state): State<Arc<AppState>>,
  Path(id): Path<String>,
  Json(body): Json<RoleIn>,
) -> Result<impl IntoResponse, ApiError> {
  require_admin(&state, &body.admin_id).await?;
  let user = state.store.set_role(&id, body.role).await?;
  Ok(Json(user))
}

#[instrument(level = "info", skip(state, body), fields(user_id = %id))]
pub async fn http_mark_learned(
  State(state): State<Arc<AppState>>,
  Path(id): Path<String>,
  Json(body): Json<LearnedIn>,
) -> Result<impl IntoResponse, ApiError> {
  let count = body.count.unwrap_or(1);
  if count == 0 {
    return Err(ApiError::Validation("Kelime sayısı en az 1 olmalı.".to_string()));
  }
  let award = gamify::record_learned(&state.store, &id, count).await?;
  Ok(Json(AwardOut { points_earned: award.points_earned, new_badges: award.new_badges }))
}

#[instrument(level = "info", skip(state), fields(user_id = %id))]
pub async fn http_user_results(
  State(state): State<Arc<AppState>>,
  Path(id): Path<String>,
  Query(q): Query<ResultsQuery>,
) -> impl IntoResponse {
  let limit = q.limit.unwrap_or(DEFAULT_RESULTS_LIMIT);
  Json(state.store.results_for_user(&id, limit).await)
}

// ---- words ----

#[instrument(level = "info", skip(state, q))]
pub async fn http_list_words(
  State(state): State<Arc<AppState>>,
  Query(q): Query<WordsQuery>,
) -> impl IntoResponse {
  let query = WordQuery {
    status: q.status,
    exam_type: q.exam_type,
    difficulty: q.difficulty,
    search: q.search,
    limit: q.limit,
  };
  Json(state.store.query_words(&query).await)
}

/// Submission pipeline: validate, require an exam tag, reject duplicates,
/// screen the text, then store as pending.
#[instrument(level = "info", skip(state, body), fields(english = %body.english, added_by = %body.added_by))]
pub async fn http_submit_word(
  State(state): State<Arc<AppState>>,
  Json(body): Json<WordIn>,
) -> Result<impl IntoResponse, ApiError> {
  let submitter = state.store.get_user(&body.added_by).await.ok_or(ApiError::NotFound("Kullanıcı"))?;
  util::validate_word_input(&body.english, &body.turkish).map_err(ApiError::Validation)?;
  if body.exam_types.is_empty() {
    return Err(ApiError::Validation("En az bir sınav türü seçmelisiniz.".to_string()));
  }
  if state.store.word_exists(&body.english).await {
    return Err(ApiError::Conflict("Bu kelime zaten mevcut!".to_string()));
  }
  let (allowed, verdict) = moderation::screen_word(
    state.moderation.as_ref(),
    &body.english,
    &body.turkish,
    &body.example_sentence,
  )
  .await;
  if !allowed {
    return Err(ApiError::Validation(verdict));
  }

  let word = Word {
    id: String::new(),
    english: util::sanitize_input(&body.english).to_lowercase(),
    turkish: util::sanitize_input(&body.turkish),
    word_type: body.word_type,
    difficulty: body.difficulty.unwrap_or(3).clamp(1, 5),
    exam_types: body.exam_types.clone(),
    synonyms: clean_tags(&body.synonyms),
    antonyms: clean_tags(&body.antonyms),
    example_sentence: util::sanitize_input(&body.example_sentence),
    example_sentence_tr: util::sanitize_input(&body.example_sentence_tr),
    status: ContentStatus::Pending,
    added_by: submitter.id.clone(),
    added_by_name: submitter.display_name.clone(),
    approved_by: None,
    rejected_by: None,
    rejection_reason: None,
    created_at: String::new(),
    updated_at: String::new(),
  };
  let word = state.store.insert_word(word).await;
  Ok(Json(SubmittedWordOut { message: WORD_SUBMITTED_MESSAGE, word }))
}

#[instrument(level = "info", skip(state, q))]
pub async fn http_random_words(
  State(state): State<Arc<AppState>>,
  Query(q): Query<RandomQuery>,
) -> impl IntoResponse {
  let count = q.count.unwrap_or(1).clamp(1, MAX_RANDOM_WORDS);
  let exclude = split_excludes(q.exclude.as_deref());
  Json(state.store.random_words(count, &exclude).await)
}

#[instrument(level = "info", skip(state, body), fields(word_id = %id, admin_id = %body.admin_id))]
pub async fn http_approve_word(
  State(state): State<Arc<AppState>>,
  Path(id): Path<String>,
  Json(body): Json<AdminActionIn>,
) -> Result<impl IntoResponse, ApiError> {
  let admin = require_admin(&state, &body.admin_id).await?;
  let word = state.store.approve_word(&id, &admin.id).await?;
  // Seeded entries have no real contributor account; the approval still goes
  // through, just without an award.
  let award = match gamify::award_word_approval(&state.store, &word.added_by).await {
    Ok(a) => a,
    Err(ApiError::NotFound(_)) => {
      warn!(target: "gamify", word_id = %word.id, added_by = %word.added_by, "Contributor account missing, no award");
      AwardSummary::default()
    }
    Err(e) => return Err(e),
  };
  Ok(Json(WordApprovalOut {
    word,
    points_earned: award.points_earned,
    new_badges: award.new_badges,
  }))
}

#[instrument(level = "info", skip(state, body), fields(word_id = %id, admin_id = %body.admin_id))]
pub async fn http_reject_word(
  State(state): State<Arc<AppState>>,
  Path(id): Path<String>,
  Json(body): Json<RejectIn>,
) -> Result<impl IntoResponse, ApiError> {
  let admin = require_admin(&state, &body.admin_id).await?;
  let word = state.store.reject_word(&id, &admin.id, reject_reason(body.reason)).await?;
  Ok(Json(word))
}

// ---- tricks ----

#[instrument(level = "info", skip(state, q))]
pub async fn http_list_tricks(
  State(state): State<Arc<AppState>>,
  Query(q): Query<TricksQuery>,
) -> impl IntoResponse {
  let query = TrickQuery { status: q.status, category: q.category, limit: q.limit };
  Json(state.store.query_tricks(&query).await)
}

#[instrument(level = "info", skip(state, body), fields(added_by = %body.added_by, title_len = body.title.len()))]
pub async fn http_submit_trick(
  State(state): State<Arc<AppState>>,
  Json(body): Json<TrickIn>,
) -> Result<impl IntoResponse, ApiError> {
  let submitter = state.store.get_user(&body.added_by).await.ok_or(ApiError::NotFound("Kullanıcı"))?;
  util::validate_trick_input(&body.title, &body.content).map_err(ApiError::Validation)?;
  let (allowed, verdict) =
    moderation::screen_trick(state.moderation.as_ref(), &body.title, &body.content).await;
  if !allowed {
    return Err(ApiError::Validation(verdict));
  }

  let trick = Trick {
    id: String::new(),
    title: util::sanitize_input(&body.title),
    content: util::sanitize_input(&body.content),
    category: body.category,
    status: ContentStatus::Pending,
    added_by: submitter.id.clone(),
    added_by_name: submitter.display_name.clone(),
    upvotes: 0,
    downvotes: 0,
    approved_by: None,
    rejected_by: None,
    rejection_reason: None,
    created_at: String::new(),
    updated_at: String::new(),
  };
  let trick = state.store.insert_trick(trick).await;
  Ok(Json(SubmittedTrickOut { message: TRICK_SUBMITTED_MESSAGE, trick }))
}

#[instrument(level = "info", skip(state, body), fields(trick_id = %id, admin_id = %body.admin_id))]
pub async fn http_approve_trick(
  State(state): State<Arc<AppState>>,
  Path(id): Path<String>,
  Json(body): Json<AdminActionIn>,
) -> Result<impl IntoResponse, ApiError> {
  let admin = require_admin(&state, &body.admin_id).await?;
  let trick = state.store.approve_trick(&id, &admin.id).await?;
  let award = match gamify::award_trick_approval(&state.store, &trick.added_by).await {
    Ok(a) => a,
    Err(ApiError::NotFound(_)) => {
      warn!(target: "gamify", trick_id = %trick.id, added_by = %trick.added_by, "Contributor account missing, no award");
      AwardSummary::default()
    }
    Err(e) => return Err(e),
  };
  Ok(Json(TrickApprovalOut { trick, points_earned: award.points_earned }))
}

#[instrument(level = "info", skip(state, body), fields(trick_id = %id, admin_id = %body.admin_id))]
pub async fn http_reject_trick(
  State(state): State<Arc<AppState>>,
  Path(id): Path<String>,
  Json(body): Json<RejectIn>,
) -> Result<impl IntoResponse, ApiError> {
  let admin = require_admin(&state, &body.admin_id).await?;
  let trick = state.store.reject_trick(&id, &admin.id, reject_reason(body.reason)).await?;
  Ok(Json(trick))
}

// ---- quiz ----

#[instrument(level = "info", skip(state, body), fields(user_id = %body.user_id))]
pub async fn http_quiz_start(
  State(state): State<Arc<AppState>>,
  Json(body): Json<QuizStartIn>,
) -> Result<impl IntoResponse, ApiError> {
  let user = state.store.get_user(&body.user_id).await.ok_or(ApiError::NotFound("Kullanıcı"))?;
  let quiz_type = body.quiz_type.unwrap_or_default();
  let count = quiz::clamp_count(body.count);
  let pool = state
    .store
    .query_words(&WordQuery { status: Some(ContentStatus::Approved), ..WordQuery::default() })
    .await;
  let mut rng = StdRng::from_entropy();
  let questions = quiz::generate_questions(&pool, count, quiz_type, &mut rng)?;
  let session = QuizSession::new(quiz_type, questions);
  let total = session.total();
  let question = match question_out(&session) {
    Some(q) => q,
    None => {
      return Err(ApiError::InsufficientData(
        "Quiz için en az 4 onaylı kelime gerekli.".to_string(),
      ))
    }
  };
  state.begin_session(&user.id, session).await;
  info!(target: "quiz", user_id = %user.id, quiz_type = quiz_type.label(), total, "Quiz started");
  Ok(Json(QuizStartOut { quiz_type, total, question }))
}

/// One answer per call. The final answer grades the quiz, persists the
/// result, and awards points in the same response.
#[instrument(level = "info", skip(state, body), fields(user_id = %body.user_id))]
pub async fn http_quiz_answer(
  State(state): State<Arc<AppState>>,
  Json(body): Json<QuizAnswerIn>,
) -> Result<impl IntoResponse, ApiError> {
  let (outcome, snapshot) = state.answer_in_session(&body.user_id, &body.answer).await?;
  if !outcome.finished {
    return Ok(Json(QuizAnswerOut {
      correct: outcome.is_correct,
      correct_answer: outcome.correct_answer,
      finished: false,
      next: question_out(&snapshot),
      summary: None,
    }));
  }

  let grade = scoring::grade_quiz(snapshot.score, snapshot.total() as u32);
  let result = QuizResult {
    id: String::new(),
    user_id: body.user_id.clone(),
    correct: grade.correct,
    total: grade.total,
    percentage: grade.percentage,
    grade: grade.grade.to_string(),
    quiz_type: snapshot.quiz_type,
    wrong_answers: snapshot.wrong_word_ids.clone(),
    completed_at: String::new(),
  };
  let result = state.store.insert_result(result).await;
  let award = gamify::award_quiz(&state.store, &body.user_id, &grade).await?;

  let mut wrong_words = Vec::with_capacity(snapshot.wrong_word_ids.len());
  for word_id in &snapshot.wrong_word_ids {
    if let Some(w) = state.store.get_word(word_id).await {
      wrong_words.push(w);
    }
  }
  info!(target: "quiz", user_id = %body.user_id, correct = grade.correct, total = grade.total, percentage = grade.percentage, points = award.points_earned, "Quiz finished");

  Ok(Json(QuizAnswerOut {
    correct: outcome.is_correct,
    correct_answer: outcome.correct_answer,
    finished: true,
    next: None,
    summary: Some(QuizSummaryOut {
      result,
      points_earned: award.points_earned,
      new_badges: award.new_badges,
      wrong_words,
      answers: answer_rows(&snapshot.answers),
    }),
  }))
}

#[instrument(level = "info", skip(state, q))]
pub async fn http_quiz_session(
  State(state): State<Arc<AppState>>,
  Query(q): Query<SessionQuery>,
) -> impl IntoResponse {
  let snapshot = state.session_snapshot(&q.user_id).await;
  Json(session_out(snapshot.as_ref()))
}

// ---- leaderboard + stats ----

#[instrument(level = "info", skip(state, q))]
pub async fn http_leaderboard(
  State(state): State<Arc<AppState>>,
  Query(q): Query<LeaderboardQuery>,
) -> impl IntoResponse {
  let period = q.period.unwrap_or_default();
  let limit = q.limit.unwrap_or(DEFAULT_LEADERBOARD_LIMIT).min(MAX_LEADERBOARD_LIMIT);
  let users = state.store.leaderboard(limit).await;
  let rows = users.iter().enumerate().map(|(i, u)| leaderboard_row(i + 1, u)).collect();
  Json(LeaderboardOut { period, rows })
}

#[instrument(level = "info", skip(state))]
pub async fn http_stats(State(state): State<Arc<AppState>>) -> impl IntoResponse {
  Json(StatsOut::from(state.store.stats().await))
}

// ---- AI helpers ----

#[instrument(level = "info", skip(state, body), fields(word = %body.word))]
pub async fn http_ai_sentence(
  State(state): State<Arc<AppState>>,
  Json(body): Json<AiSentenceIn>,
) -> impl IntoResponse {
  let Some(groq) = state.groq.as_ref() else {
    return Json(AiSentenceOut {
      available: false,
      sentence: None,
      message: Some(NO_GROQ_MESSAGE.to_string()),
    });
  };
  let word_type = body.word_type.map(|t| t.id()).unwrap_or("");
  let turkish = body.turkish.as_deref().unwrap_or("");
  match groq.example_sentence(&state.prompts, &body.word, word_type, turkish).await {
    Ok(Some(pair)) => Json(AiSentenceOut { available: true, sentence: Some(pair), message: None }),
    Ok(None) => Json(AiSentenceOut {
      available: false,
      sentence: None,
      message: Some("Cümle oluşturulamadı. Lütfen tekrar deneyin.".to_string()),
    }),
    Err(e) => Json(AiSentenceOut { available: false, sentence: None, message: Some(e) }),
  }
}

#[instrument(level = "info", skip(state, body), fields(word = %body.word))]
pub async fn http_ai_completion(
  State(state): State<Arc<AppState>>,
  Json(body): Json<AiCompletionIn>,
) -> impl IntoResponse {
  let Some(groq) = state.groq.as_ref() else {
    return Json(AiCompletionOut {
      available: false,
      question: None,
      message: Some(NO_GROQ_MESSAGE.to_string()),
    });
  };
  let word_type = body.word_type.map(|t| t.id()).unwrap_or("");
  match groq.completion_question(&state.prompts, &body.word, word_type).await {
    Ok(Some(question)) => {
      Json(AiCompletionOut { available: true, question: Some(question), message: None })
    }
    Ok(None) => Json(AiCompletionOut {
      available: false,
      question: None,
      message: Some("Soru oluşturulamadı. Lütfen tekrar deneyin.".to_string()),
    }),
    Err(e) => Json(AiCompletionOut { available: false, question: None, message: Some(e) }),
  }
}

#[instrument(level = "info", skip(state, body), fields(word = %body.word))]
pub async fn http_ai_explanation(
  State(state): State<Arc<AppState>>,
  Json(body): Json<AiExplanationIn>,
) -> impl IntoResponse {
  let Some(groq) = state.groq.as_ref() else {
    return Json(AiTextOut::unavailable(NO_GROQ_MESSAGE));
  };
  match groq.word_explanation(&state.prompts, &body.word, &body.turkish).await {
    Ok(Some(text)) => Json(AiTextOut::ready(text)),
    Ok(None) => Json(AiTextOut::unavailable("Açıklama oluşturulamadı. Lütfen tekrar deneyin.")),
    Err(e) => Json(AiTextOut::unavailable(e)),
  }
}

#[instrument(level = "info", skip(state, body), fields(word = %body.word))]
pub async fn http_ai_hint(
  State(state): State<Arc<AppState>>,
  Json(body): Json<AiHintIn>,
) -> impl IntoResponse {
  let Some(groq) = state.groq.as_ref() else {
    return Json(AiTextOut::unavailable(NO_GROQ_MESSAGE));
  };
  let context = body.context.as_deref().unwrap_or("");
  match groq.memory_hint(&state.prompts, &body.word, context).await {
    Ok(Some(text)) => Json(AiTextOut::ready(text)),
    Ok(None) => Json(AiTextOut::unavailable("İpucu oluşturulamadı. Lütfen tekrar deneyin.")),
    Err(e) => Json(AiTextOut::unavailable(e)),
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn split_excludes_handles_blanks_and_spaces() {
    assert_eq!(split_excludes(None), Vec::<String>::new());
    assert_eq!(split_excludes(Some("")), Vec::<String>::new());
    assert_eq!(
      split_excludes(Some("a1, b2 ,,c3")),
      vec!["a1".to_string(), "b2".to_string(), "c3".to_string()]
    );
  }

  #[test]
  fn clean_tags_drops_empties_and_escapes() {
    let tags = vec!["  leave ".to_string(), String::new(), "<b>quit</b>".to_string()];
    assert_eq!(
      clean_tags(&tags),
      vec!["leave".to_string(), "&lt;b&gt;quit&lt;/b&gt;".to_string()]
    );
  }

  #[test]
  fn reject_reason_falls_back_to_default() {
    assert_eq!(reject_reason(None), Some(DEFAULT_REJECT_REASON.to_string()));
    assert_eq!(reject_reason(Some("  ".to_string())), Some(DEFAULT_REJECT_REASON.to_string()));
    assert_eq!(reject_reason(Some("Yanlış çeviri".to_string())), Some("Yanlış çeviri".to_string()));
  }
}
