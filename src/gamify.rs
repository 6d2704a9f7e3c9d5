//! Stat transitions behind every scoring event. An award reads the account,
//! projects the new counters, sweeps the badge catalog against the projection
//! and commits points, counters and fresh badges as one store update.

use chrono::{NaiveDate, Utc};
use tracing::{info, instrument};

use crate::badges::{self, BadgeCounters};
use crate::error::ApiError;
use crate::scoring::{points, QuizGrade};
use crate::store::{Store, UserStatsPatch};
use crate::streak::{compute_streak, parse_day};

/// What a single award did to the account.
#[derive(Clone, Debug, Default)]
pub struct AwardSummary {
  pub points_earned: u64,
  pub new_badges: Vec<String>,
}

/// Outcome of a daily-streak touch.
#[derive(Clone, Debug)]
pub struct StreakSummary {
  pub streak: u32,
  pub is_new_day: bool,
  pub points_earned: u64,
  pub new_badges: Vec<String>,
}

/// Credit a contributor whose word just got approved.
#[instrument(level = "debug", skip(store))]
pub async fn award_word_approval(store: &Store, user_id: &str) -> Result<AwardSummary, ApiError> {
  let user = store.get_user(user_id).await.ok_or(ApiError::NotFound("Kullanıcı"))?;
  let contributed = user.stats.words_contributed + 1;
  let projected = BadgeCounters { words_contributed: contributed, ..BadgeCounters::from(&user.stats) };
  let new_badges = owned(badges::evaluate_badges(&projected, &user.stats.badges));
  store
    .update_user_stats(
      user_id,
      UserStatsPatch {
        points: Some(user.stats.points + points::WORD_APPROVED),
        words_contributed: Some(contributed),
        add_badges: new_badges.clone(),
        ..UserStatsPatch::default()
      },
    )
    .await?;
  log_badges(user_id, &new_badges);
  Ok(AwardSummary { points_earned: points::WORD_APPROVED, new_badges })
}

/// Credit an approved trick. The catalog has no trick counter, so no badge
/// can unlock here.
#[instrument(level = "debug", skip(store))]
pub async fn award_trick_approval(store: &Store, user_id: &str) -> Result<AwardSummary, ApiError> {
  let user = store.get_user(user_id).await.ok_or(ApiError::NotFound("Kullanıcı"))?;
  store
    .update_user_stats(
      user_id,
      UserStatsPatch {
        points: Some(user.stats.points + points::TRICK_APPROVED),
        ..UserStatsPatch::default()
      },
    )
    .await?;
  Ok(AwardSummary { points_earned: points::TRICK_APPROVED, new_badges: Vec::new() })
}

/// Settle a finished quiz: graded points, the taken counter, and the
/// high-score counter when the raw percentage reaches ninety.
#[instrument(level = "debug", skip(store, grade))]
pub async fn award_quiz(store: &Store, user_id: &str, grade: &QuizGrade) -> Result<AwardSummary, ApiError> {
  let user = store.get_user(user_id).await.ok_or(ApiError::NotFound("Kullanıcı"))?;
  let high_score = grade.is_high_score();
  let high_score_quizzes = user.stats.high_score_quizzes + u64::from(high_score);
  let projected = BadgeCounters { high_score_quizzes, ..BadgeCounters::from(&user.stats) };
  let new_badges = owned(badges::evaluate_badges(&projected, &user.stats.badges));
  store
    .update_user_stats(
      user_id,
      UserStatsPatch {
        points: Some(user.stats.points + grade.points),
        quizzes_taken: Some(user.stats.quizzes_taken + 1),
        high_score_quizzes: high_score.then_some(high_score_quizzes),
        add_badges: new_badges.clone(),
        ..UserStatsPatch::default()
      },
    )
    .await?;
  log_badges(user_id, &new_badges);
  Ok(AwardSummary { points_earned: grade.points, new_badges })
}

/// Advance the daily streak. Idempotent within a day: a repeat touch on the
/// same date changes nothing and earns nothing.
#[instrument(level = "debug", skip(store))]
pub async fn touch_streak(store: &Store, user_id: &str, today: NaiveDate) -> Result<StreakSummary, ApiError> {
  let user = store.get_user(user_id).await.ok_or(ApiError::NotFound("Kullanıcı"))?;
  let last = user.stats.last_active_date.as_deref().and_then(parse_day);
  let (streak, is_new_day) = compute_streak(last, user.stats.current_streak, today);
  if !is_new_day {
    return Ok(StreakSummary { streak, is_new_day: false, points_earned: 0, new_badges: Vec::new() });
  }

  let points_earned = points::DAILY_LOGIN + if streak > 1 { points::STREAK_BONUS } else { 0 };
  let projected = BadgeCounters { current_streak: streak, ..BadgeCounters::from(&user.stats) };
  let new_badges = owned(badges::evaluate_badges(&projected, &user.stats.badges));
  store
    .update_user_stats(
      user_id,
      UserStatsPatch {
        points: Some(user.stats.points + points_earned),
        current_streak: Some(streak),
        longest_streak: (streak > user.stats.longest_streak).then_some(streak),
        last_active_date: Some(Utc::now().to_rfc3339()),
        add_badges: new_badges.clone(),
        ..UserStatsPatch::default()
      },
    )
    .await?;
  info!(target: "gamify", user_id, streak, points_earned, "Daily streak advanced");
  log_badges(user_id, &new_badges);
  Ok(StreakSummary { streak, is_new_day: true, points_earned, new_badges })
}

/// Count words as learned, one point each. The badge sweep only runs once
/// the learned total has reached the hundred-word badge threshold.
#[instrument(level = "debug", skip(store))]
pub async fn record_learned(store: &Store, user_id: &str, count: u64) -> Result<AwardSummary, ApiError> {
  let user = store.get_user(user_id).await.ok_or(ApiError::NotFound("Kullanıcı"))?;
  let learned = user.stats.words_learned + count;
  let new_badges = if learned >= 100 {
    let projected = BadgeCounters { words_learned: learned, ..BadgeCounters::from(&user.stats) };
    owned(badges::evaluate_badges(&projected, &user.stats.badges))
  } else {
    Vec::new()
  };
  store
    .update_user_stats(
      user_id,
      UserStatsPatch {
        points: Some(user.stats.points + points::WORD_LEARNED * count),
        words_learned: Some(learned),
        add_badges: new_badges.clone(),
        ..UserStatsPatch::default()
      },
    )
    .await?;
  log_badges(user_id, &new_badges);
  Ok(AwardSummary { points_earned: points::WORD_LEARNED * count, new_badges })
}

fn owned(ids: Vec<&'static str>) -> Vec<String> {
  ids.into_iter().map(str::to_string).collect()
}

fn log_badges(user_id: &str, new_badges: &[String]) {
  for id in new_badges {
    let name = badges::find(id).map(|b| b.name).unwrap_or("?");
    info!(target: "gamify", user_id, badge = %id, name, "Badge earned");
  }
}
