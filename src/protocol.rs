//! Public protocol structs for the HTTP endpoints (serde ready).
//! Keep this small and stable to evolve backend and frontend independently.

use serde::{Deserialize, Serialize};

use crate::badges::{BadgeProgress, BADGES};
use crate::domain::{
    difficulty_label, ContentStatus, ExamType, LeaderboardPeriod, QuizResult, QuizType, Role,
    Trick, TrickCategory, User, Word, WordType,
};
use crate::gamify::StreakSummary;
use crate::groq::{CompletionQuestion, SentencePair};
use crate::quiz::{AnswerRecord, QuizSession};
use crate::scoring::{level_for_points, LevelStanding, LEVELS};
use crate::store::StoreStats;

#[derive(Serialize)]
pub struct OkOut {
    pub ok: bool,
}

//
// Auth
//

#[derive(Debug, Deserialize)]
pub struct SignupIn {
    pub email: String,
    pub password: String,
    #[serde(rename = "displayName")]
    pub display_name: String,
}

#[derive(Debug, Deserialize)]
pub struct LoginIn {
    pub email: String,
    pub password: String,
}

/// Daily-streak outcome, attached to the login response.
#[derive(Serialize)]
pub struct StreakOut {
    pub streak: u32,
    #[serde(rename = "isNewDay")]
    pub is_new_day: bool,
    #[serde(rename = "pointsEarned")]
    pub points_earned: u64,
    #[serde(rename = "newBadges")]
    pub new_badges: Vec<String>,
}

impl From<StreakSummary> for StreakOut {
    fn from(s: StreakSummary) -> Self {
        StreakOut {
            streak: s.streak,
            is_new_day: s.is_new_day,
            points_earned: s.points_earned,
            new_badges: s.new_badges,
        }
    }
}

/// Login answers with the account as it looks after the streak touch.
#[derive(Serialize)]
pub struct LoginOut {
    #[serde(flatten)]
    pub user: User,
    pub streak: StreakOut,
}

//
// Users
//

#[derive(Debug, Deserialize)]
pub struct RenameIn {
    #[serde(rename = "displayName")]
    pub display_name: String,
}

#[derive(Debug, Deserialize)]
pub struct PasswordIn {
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct RoleIn {
    #[serde(rename = "adminId")]
    pub admin_id: String,
    pub role: Role,
}

#[derive(Debug, Deserialize)]
pub struct LearnedIn {
    #[serde(default)]
    pub count: Option<u64>,
}

#[derive(Serialize)]
pub struct AwardOut {
    #[serde(rename = "pointsEarned")]
    pub points_earned: u64,
    #[serde(rename = "newBadges")]
    pub new_badges: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct ResultsQuery {
    pub limit: Option<usize>,
}

/// Level standing as shown on the profile page.
#[derive(Serialize)]
pub struct LevelOut {
    pub level: u8,
    pub name: &'static str,
    pub icon: &'static str,
    #[serde(rename = "minPoints")]
    pub min_points: u64,
    #[serde(rename = "maxPoints")]
    pub max_points: Option<u64>,
    pub progress: f64,
    #[serde(rename = "pointsToNext")]
    pub points_to_next: Option<u64>,
}

pub fn level_out(s: &LevelStanding) -> LevelOut {
    LevelOut {
        level: s.def.level,
        name: s.def.name,
        icon: s.def.icon,
        min_points: s.def.min,
        max_points: s.def.max,
        progress: s.progress,
        points_to_next: s.points_to_next,
    }
}

#[derive(Serialize)]
pub struct BadgeProgressOut {
    pub id: &'static str,
    pub name: &'static str,
    pub emoji: &'static str,
    pub description: &'static str,
    pub threshold: u64,
    pub earned: bool,
    #[serde(rename = "currentValue")]
    pub current_value: u64,
    pub progress: f64,
}

pub fn badge_rows(rows: Vec<BadgeProgress>) -> Vec<BadgeProgressOut> {
    rows.into_iter()
        .map(|r| BadgeProgressOut {
            id: r.def.id,
            name: r.def.name,
            emoji: r.def.emoji,
            description: r.def.description,
            threshold: r.def.threshold,
            earned: r.earned,
            current_value: r.value,
            progress: r.progress,
        })
        .collect()
}

/// Profile payload: the account plus everything derived from its stats.
#[derive(Serialize)]
pub struct ProfileOut {
    #[serde(flatten)]
    pub user: User,
    pub level: LevelOut,
    #[serde(rename = "badgeProgress")]
    pub badge_progress: Vec<BadgeProgressOut>,
}

//
// Words
//

#[derive(Debug, Deserialize)]
pub struct WordsQuery {
    pub status: Option<ContentStatus>,
    #[serde(rename = "examType")]
    pub exam_type: Option<ExamType>,
    pub difficulty: Option<u8>,
    pub search: Option<String>,
    pub limit: Option<usize>,
}

#[derive(Debug, Deserialize)]
pub struct WordIn {
    pub english: String,
    pub turkish: String,
    #[serde(rename = "type", default)]
    pub word_type: WordType,
    #[serde(default)]
    pub difficulty: Option<u8>,
    #[serde(rename = "examTypes", default)]
    pub exam_types: Vec<ExamType>,
    #[serde(default)]
    pub synonyms: Vec<String>,
    #[serde(default)]
    pub antonyms: Vec<String>,
    #[serde(rename = "exampleSentence", default)]
    pub example_sentence: String,
    #[serde(rename = "exampleSentenceTr", default)]
    pub example_sentence_tr: String,
    #[serde(rename = "addedBy")]
    pub added_by: String,
}

#[derive(Debug, Deserialize)]
pub struct RandomQuery {
    pub count: Option<usize>,
    /// Comma-separated word ids to skip.
    pub exclude: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct AdminActionIn {
    #[serde(rename = "adminId")]
    pub admin_id: String,
}

#[derive(Debug, Deserialize)]
pub struct RejectIn {
    #[serde(rename = "adminId")]
    pub admin_id: String,
    #[serde(default)]
    pub reason: Option<String>,
}

#[derive(Serialize)]
pub struct SubmittedWordOut {
    pub message: &'static str,
    pub word: Word,
}

#[derive(Serialize)]
pub struct WordApprovalOut {
    pub word: Word,
    #[serde(rename = "pointsEarned")]
    pub points_earned: u64,
    #[serde(rename = "newBadges")]
    pub new_badges: Vec<String>,
}

//
// Tricks
//

#[derive(Debug, Deserialize)]
pub struct TricksQuery {
    pub status: Option<ContentStatus>,
    pub category: Option<TrickCategory>,
    pub limit: Option<usize>,
}

#[derive(Debug, Deserialize)]
pub struct TrickIn {
    pub title: String,
    pub content: String,
    pub category: TrickCategory,
    #[serde(rename = "addedBy")]
    pub added_by: String,
}

#[derive(Serialize)]
pub struct SubmittedTrickOut {
    pub message: &'static str,
    pub trick: Trick,
}

#[derive(Serialize)]
pub struct TrickApprovalOut {
    pub trick: Trick,
    #[serde(rename = "pointsEarned")]
    pub points_earned: u64,
}

//
// Quiz
//

#[derive(Debug, Deserialize)]
pub struct QuizStartIn {
    #[serde(rename = "userId")]
    pub user_id: String,
    #[serde(rename = "quizType", default)]
    pub quiz_type: Option<QuizType>,
    #[serde(default)]
    pub count: Option<usize>,
}

/// One question as the player sees it. The correct answer stays server-side
/// until the answer comes back.
#[derive(Serialize)]
pub struct QuestionOut {
    pub index: usize,
    pub total: usize,
    pub kind: QuizType,
    pub prompt: String,
    pub options: Vec<String>,
}

pub fn question_out(session: &QuizSession) -> Option<QuestionOut> {
    session.current_question().map(|q| QuestionOut {
        index: session.current,
        total: session.total(),
        kind: q.kind,
        prompt: q.prompt.clone(),
        options: q.options.clone(),
    })
}

#[derive(Serialize)]
pub struct QuizStartOut {
    #[serde(rename = "quizType")]
    pub quiz_type: QuizType,
    pub total: usize,
    pub question: QuestionOut,
}

#[derive(Debug, Deserialize)]
pub struct QuizAnswerIn {
    #[serde(rename = "userId")]
    pub user_id: String,
    pub answer: String,
}

/// One row of the post-quiz answer sheet.
#[derive(Serialize)]
pub struct AnswerRowOut {
    pub index: usize,
    pub selected: String,
    #[serde(rename = "correctAnswer")]
    pub correct_answer: String,
    pub correct: bool,
}

pub fn answer_rows(records: &[AnswerRecord]) -> Vec<AnswerRowOut> {
    records
        .iter()
        .map(|r| AnswerRowOut {
            index: r.question_index,
            selected: r.selected.clone(),
            correct_answer: r.correct_answer.clone(),
            correct: r.is_correct,
        })
        .collect()
}

#[derive(Serialize)]
pub struct QuizSummaryOut {
    pub result: QuizResult,
    #[serde(rename = "pointsEarned")]
    pub points_earned: u64,
    #[serde(rename = "newBadges")]
    pub new_badges: Vec<String>,
    /// Full word records for the review list.
    #[serde(rename = "wrongWords")]
    pub wrong_words: Vec<Word>,
    /// Question-by-question review of what was picked.
    pub answers: Vec<AnswerRowOut>,
}

#[derive(Serialize)]
pub struct QuizAnswerOut {
    pub correct: bool,
    #[serde(rename = "correctAnswer")]
    pub correct_answer: String,
    pub finished: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next: Option<QuestionOut>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<QuizSummaryOut>,
}

#[derive(Debug, Deserialize)]
pub struct SessionQuery {
    #[serde(rename = "userId")]
    pub user_id: String,
}

#[derive(Serialize)]
pub struct QuizSessionOut {
    pub active: bool,
    #[serde(rename = "quizType", skip_serializing_if = "Option::is_none")]
    pub quiz_type: Option<QuizType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub question: Option<QuestionOut>,
}

pub fn session_out(session: Option<&QuizSession>) -> QuizSessionOut {
    match session {
        Some(s) => QuizSessionOut {
            active: !s.is_complete(),
            quiz_type: Some(s.quiz_type),
            score: Some(s.score),
            question: question_out(s),
        },
        None => QuizSessionOut { active: false, quiz_type: None, score: None, question: None },
    }
}

//
// Leaderboard + stats
//

#[derive(Debug, Deserialize)]
pub struct LeaderboardQuery {
    pub period: Option<LeaderboardPeriod>,
    pub limit: Option<usize>,
}

#[derive(Serialize)]
pub struct LeaderboardRowOut {
    pub rank: usize,
    pub id: String,
    #[serde(rename = "displayName")]
    pub display_name: String,
    #[serde(rename = "photoURL")]
    pub photo_url: String,
    pub points: u64,
    pub level: &'static str,
    #[serde(rename = "levelIcon")]
    pub level_icon: &'static str,
    pub badges: usize,
    #[serde(rename = "currentStreak")]
    pub current_streak: u32,
}

pub fn leaderboard_row(rank: usize, user: &User) -> LeaderboardRowOut {
    let standing = level_for_points(user.stats.points);
    LeaderboardRowOut {
        rank,
        id: user.id.clone(),
        display_name: user.display_name.clone(),
        photo_url: user.photo_url.clone(),
        points: user.stats.points,
        level: standing.def.name,
        level_icon: standing.def.icon,
        badges: user.stats.badges.len(),
        current_streak: user.stats.current_streak,
    }
}

#[derive(Serialize)]
pub struct LeaderboardOut {
    pub period: LeaderboardPeriod,
    pub rows: Vec<LeaderboardRowOut>,
}

#[derive(Serialize)]
pub struct StatsOut {
    #[serde(rename = "totalWords")]
    pub total_words: usize,
    #[serde(rename = "pendingWords")]
    pub pending_words: usize,
    #[serde(rename = "totalUsers")]
    pub total_users: usize,
    #[serde(rename = "totalQuizzes")]
    pub total_quizzes: usize,
}

impl From<StoreStats> for StatsOut {
    fn from(s: StoreStats) -> Self {
        StatsOut {
            total_words: s.total_words,
            pending_words: s.pending_words,
            total_users: s.total_users,
            total_quizzes: s.total_quizzes,
        }
    }
}

//
// Catalog
//

#[derive(Serialize)]
pub struct ChoiceOut<T: Serialize> {
    pub id: T,
    pub label: &'static str,
}

#[derive(Serialize)]
pub struct DifficultyOut {
    pub value: u8,
    pub label: &'static str,
}

#[derive(Serialize)]
pub struct LevelDefOut {
    pub level: u8,
    pub name: &'static str,
    pub icon: &'static str,
    #[serde(rename = "minPoints")]
    pub min_points: u64,
    #[serde(rename = "maxPoints")]
    pub max_points: Option<u64>,
}

#[derive(Serialize)]
pub struct BadgeDefOut {
    pub id: &'static str,
    pub name: &'static str,
    pub emoji: &'static str,
    pub description: &'static str,
    pub threshold: u64,
}

/// Everything a frontend needs to render forms and ladders: selectbox
/// choices with Turkish labels, the level table, and the badge catalog.
#[derive(Serialize)]
pub struct CatalogOut {
    #[serde(rename = "examTypes")]
    pub exam_types: Vec<ChoiceOut<ExamType>>,
    #[serde(rename = "wordTypes")]
    pub word_types: Vec<ChoiceOut<WordType>>,
    #[serde(rename = "trickCategories")]
    pub trick_categories: Vec<ChoiceOut<TrickCategory>>,
    #[serde(rename = "quizTypes")]
    pub quiz_types: Vec<ChoiceOut<QuizType>>,
    pub periods: Vec<ChoiceOut<LeaderboardPeriod>>,
    pub difficulties: Vec<DifficultyOut>,
    pub levels: Vec<LevelDefOut>,
    pub badges: Vec<BadgeDefOut>,
}

pub fn catalog_out() -> CatalogOut {
    CatalogOut {
        exam_types: ExamType::ALL.iter().map(|e| ChoiceOut { id: *e, label: e.label() }).collect(),
        word_types: WordType::ALL.iter().map(|w| ChoiceOut { id: *w, label: w.label() }).collect(),
        trick_categories: TrickCategory::ALL
            .iter()
            .map(|c| ChoiceOut { id: *c, label: c.label() })
            .collect(),
        quiz_types: QuizType::ALL.iter().map(|q| ChoiceOut { id: *q, label: q.label() }).collect(),
        periods: LeaderboardPeriod::ALL
            .iter()
            .map(|p| ChoiceOut { id: *p, label: p.label() })
            .collect(),
        difficulties: (1..=5)
            .map(|v| DifficultyOut { value: v, label: difficulty_label(v) })
            .collect(),
        levels: LEVELS
            .iter()
            .map(|d| LevelDefOut {
                level: d.level,
                name: d.name,
                icon: d.icon,
                min_points: d.min,
                max_points: d.max,
            })
            .collect(),
        badges: BADGES
            .iter()
            .map(|b| BadgeDefOut {
                id: b.id,
                name: b.name,
                emoji: b.emoji,
                description: b.description,
                threshold: b.threshold,
            })
            .collect(),
    }
}

//
// AI helpers
//

#[derive(Debug, Deserialize)]
pub struct AiSentenceIn {
    pub word: String,
    #[serde(rename = "type", default)]
    pub word_type: Option<WordType>,
    #[serde(default)]
    pub turkish: Option<String>,
}

#[derive(Serialize)]
pub struct AiSentenceOut {
    pub available: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sentence: Option<SentencePair>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct AiCompletionIn {
    pub word: String,
    #[serde(rename = "type", default)]
    pub word_type: Option<WordType>,
}

#[derive(Serialize)]
pub struct AiCompletionOut {
    pub available: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub question: Option<CompletionQuestion>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct AiExplanationIn {
    pub word: String,
    pub turkish: String,
}

#[derive(Debug, Deserialize)]
pub struct AiHintIn {
    pub word: String,
    #[serde(default)]
    pub context: Option<String>,
}

#[derive(Serialize)]
pub struct AiTextOut {
    pub available: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl AiTextOut {
    pub fn ready(text: String) -> Self {
        Self { available: true, text: Some(text), message: None }
    }
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self { available: false, text: None, message: Some(message.into()) }
    }
}

#[derive(Serialize)]
pub struct HealthOut {
    pub ok: bool,
    pub groq: bool,
    pub moderation: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::UserStats;
    use crate::quiz::Question;

    fn sample_user() -> User {
        User {
            id: "u1".to_string(),
            email: "a@b.com".to_string(),
            display_name: "Ayşe".to_string(),
            password_hash: "secret".to_string(),
            photo_url: "https://example.com/p.png".to_string(),
            role: Role::User,
            created_at: String::new(),
            updated_at: String::new(),
            stats: UserStats { points: 160, badges: vec!["caylak".to_string()], ..UserStats::default() },
        }
    }

    #[test]
    fn profile_flattens_user_and_adds_derived_fields() {
        let user = sample_user();
        let standing = level_for_points(user.stats.points);
        let profile = ProfileOut {
            level: level_out(&standing),
            badge_progress: badge_rows(crate::badges::progress(
                &(&user.stats).into(),
                &user.stats.badges,
            )),
            user,
        };
        let v = serde_json::to_value(&profile).expect("json");
        assert_eq!(v["displayName"], "Ayşe");
        assert_eq!(v["points"], 160);
        assert_eq!(v["level"]["name"], "Öğrenci");
        assert_eq!(v["badgeProgress"].as_array().map(Vec::len), Some(8));
        assert!(v.get("passwordHash").is_none());
    }

    #[test]
    fn question_out_hides_the_correct_answer() {
        let q = Question {
            word_id: "w1".to_string(),
            kind: QuizType::EnToTr,
            prompt: "'abandon' kelimesinin Türkçe karşılığı nedir?".to_string(),
            options: vec!["terk etmek".into(), "sürdürmek".into(), "artırmak".into(), "azaltmak".into()],
            correct: "terk etmek".to_string(),
        };
        let session = QuizSession::new(QuizType::EnToTr, vec![q]);
        let out = question_out(&session).expect("question");
        let v = serde_json::to_value(&out).expect("json");
        assert_eq!(v["index"], 0);
        assert_eq!(v["total"], 1);
        assert!(v.get("correct").is_none());
        assert!(v.get("wordId").is_none());
        assert_eq!(v["options"].as_array().map(Vec::len), Some(4));
    }

    #[test]
    fn answer_sheet_rows_keep_the_picked_option() {
        let rows = answer_rows(&[AnswerRecord {
            question_index: 3,
            selected: "fayda".to_string(),
            correct_answer: "terk etmek".to_string(),
            is_correct: false,
        }]);
        let v = serde_json::to_value(&rows).expect("json");
        assert_eq!(v[0]["index"], 3);
        assert_eq!(v[0]["selected"], "fayda");
        assert_eq!(v[0]["correctAnswer"], "terk etmek");
        assert_eq!(v[0]["correct"], false);
    }

    #[test]
    fn idle_session_view_is_inactive_and_sparse() {
        let v = serde_json::to_value(session_out(None)).expect("json");
        assert_eq!(v["active"], false);
        assert!(v.get("quizType").is_none());
        assert!(v.get("question").is_none());
    }

    #[test]
    fn leaderboard_rows_carry_level_names() {
        let user = sample_user();
        let row = leaderboard_row(1, &user);
        let v = serde_json::to_value(&row).expect("json");
        assert_eq!(v["rank"], 1);
        assert_eq!(v["displayName"], "Ayşe");
        assert_eq!(v["level"], "Öğrenci");
        assert_eq!(v["badges"], 1);
    }

    #[test]
    fn catalog_covers_every_choice() {
        let v = serde_json::to_value(catalog_out()).expect("json");
        assert_eq!(v["examTypes"].as_array().map(Vec::len), Some(5));
        assert_eq!(v["examTypes"][0]["id"], "yds");
        assert_eq!(v["examTypes"][0]["label"], "YDS");
        assert_eq!(v["wordTypes"].as_array().map(Vec::len), Some(8));
        assert_eq!(v["quizTypes"][0]["id"], "en_to_tr");
        assert_eq!(v["difficulties"][2]["label"], "Orta");
        assert_eq!(v["levels"].as_array().map(Vec::len), Some(10));
        assert_eq!(v["badges"].as_array().map(Vec::len), Some(8));
        assert_eq!(v["periods"][2]["label"], "Tüm Zamanlar");
    }

    #[test]
    fn ai_payloads_degrade_without_leaking_null_fields() {
        let v = serde_json::to_value(AiTextOut::unavailable("Groq API anahtarı yapılandırılmamış."))
            .expect("json");
        assert_eq!(v["available"], false);
        assert!(v.get("text").is_none());

        let v = serde_json::to_value(AiTextOut::ready("ipucu".to_string())).expect("json");
        assert_eq!(v["available"], true);
        assert!(v.get("message").is_none());
    }
}
