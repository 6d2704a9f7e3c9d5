//! Domain models used by the backend: users, words, memory tricks, quiz
//! records, and the fixed catalogs (exam types, word types, difficulty).

use serde::{Deserialize, Serialize};

/// Account role. Admins approve or reject community submissions.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Role {
  User,
  Admin,
}
impl Default for Role {
  fn default() -> Self { Role::User }
}

/// Which exam a word is tagged for.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ExamType {
  Yds,
  Yokdil,
  Toefl,
  Ielts,
  Genel,
}

impl ExamType {
  /// Catalog order as shown in submission forms.
  pub const ALL: [ExamType; 5] = [
    ExamType::Yds,
    ExamType::Yokdil,
    ExamType::Toefl,
    ExamType::Ielts,
    ExamType::Genel,
  ];

  pub fn label(&self) -> &'static str {
    match self {
      ExamType::Yds => "YDS",
      ExamType::Yokdil => "YÖKDİL",
      ExamType::Toefl => "TOEFL",
      ExamType::Ielts => "IELTS",
      ExamType::Genel => "Genel",
    }
  }
}

/// Part of speech.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum WordType {
  Noun,
  Verb,
  Adjective,
  Adverb,
  Preposition,
  Conjunction,
  Pronoun,
  Interjection,
}
impl Default for WordType {
  fn default() -> Self { WordType::Noun }
}

impl WordType {
  pub const ALL: [WordType; 8] = [
    WordType::Noun,
    WordType::Verb,
    WordType::Adjective,
    WordType::Adverb,
    WordType::Preposition,
    WordType::Conjunction,
    WordType::Pronoun,
    WordType::Interjection,
  ];

  /// Turkish display name.
  pub fn label(&self) -> &'static str {
    match self {
      WordType::Noun => "İsim",
      WordType::Verb => "Fiil",
      WordType::Adjective => "Sıfat",
      WordType::Adverb => "Zarf",
      WordType::Preposition => "Edat",
      WordType::Conjunction => "Bağlaç",
      WordType::Pronoun => "Zamir",
      WordType::Interjection => "Ünlem",
    }
  }

  /// Raw identifier as used in prompts ("noun", "verb", ...).
  pub fn id(&self) -> &'static str {
    match self {
      WordType::Noun => "noun",
      WordType::Verb => "verb",
      WordType::Adjective => "adjective",
      WordType::Adverb => "adverb",
      WordType::Preposition => "preposition",
      WordType::Conjunction => "conjunction",
      WordType::Pronoun => "pronoun",
      WordType::Interjection => "interjection",
    }
  }
}

/// Moderation lifecycle of a community submission.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ContentStatus {
  Pending,
  Approved,
  Rejected,
}
impl Default for ContentStatus {
  fn default() -> Self { ContentStatus::Pending }
}

/// Memory-trick category.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum TrickCategory {
  Grammar,
  Vocabulary,
  Strategy,
}

impl TrickCategory {
  pub const ALL: [TrickCategory; 3] =
    [TrickCategory::Grammar, TrickCategory::Vocabulary, TrickCategory::Strategy];

  pub fn label(&self) -> &'static str {
    match self {
      TrickCategory::Grammar => "Gramer",
      TrickCategory::Vocabulary => "Kelime",
      TrickCategory::Strategy => "Strateji",
    }
  }
}

/// Difficulty is stored as 1..=5. Out-of-range values take the nearest label.
pub fn difficulty_label(level: u8) -> &'static str {
  match level {
    0 | 1 => "Çok Kolay",
    2 => "Kolay",
    3 => "Orta",
    4 => "Zor",
    _ => "Çok Zor",
  }
}

/// Leaderboard window selector.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum LeaderboardPeriod {
  Weekly,
  Monthly,
  AllTime,
}
impl Default for LeaderboardPeriod {
  fn default() -> Self { LeaderboardPeriod::AllTime }
}

impl LeaderboardPeriod {
  pub const ALL: [LeaderboardPeriod; 3] =
    [LeaderboardPeriod::Weekly, LeaderboardPeriod::Monthly, LeaderboardPeriod::AllTime];

  pub fn label(&self) -> &'static str {
    match self {
      LeaderboardPeriod::Weekly => "Bu Hafta",
      LeaderboardPeriod::Monthly => "Bu Ay",
      LeaderboardPeriod::AllTime => "Tüm Zamanlar",
    }
  }
}

/// Quiz question flavor.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum QuizType {
  EnToTr,
  TrToEn,
  Synonym,
}
impl Default for QuizType {
  fn default() -> Self { QuizType::EnToTr }
}

impl QuizType {
  pub const ALL: [QuizType; 3] = [QuizType::EnToTr, QuizType::TrToEn, QuizType::Synonym];

  pub fn label(&self) -> &'static str {
    match self {
      QuizType::EnToTr => "İngilizce → Türkçe",
      QuizType::TrToEn => "Türkçe → İngilizce",
      QuizType::Synonym => "Eş Anlam Bulma",
    }
  }
}

/// Per-user gamification counters. Stored flattened on the user record.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserStats {
  #[serde(default)] pub points: u64,
  #[serde(default)] pub words_contributed: u64,
  #[serde(default)] pub words_learned: u64,
  #[serde(default)] pub quizzes_taken: u64,
  #[serde(default)] pub high_score_quizzes: u64,
  #[serde(default)] pub current_streak: u32,
  #[serde(default)] pub longest_streak: u32,
  #[serde(default)] pub last_active_date: Option<String>,
  #[serde(default)] pub badges: Vec<String>,
}

/// A registered account. The password hash never leaves the process.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
  pub id: String,
  pub email: String,
  pub display_name: String,
  #[serde(skip_serializing, default)]
  pub password_hash: String,
  #[serde(rename = "photoURL")]
  pub photo_url: String,
  pub role: Role,
  pub created_at: String,
  pub updated_at: String,
  #[serde(flatten)]
  pub stats: UserStats,
}

/// A vocabulary entry. Community-submitted entries start Pending.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Word {
  pub id: String,
  pub english: String,
  pub turkish: String,
  #[serde(rename = "type")]
  pub word_type: WordType,
  pub difficulty: u8,
  #[serde(default)] pub exam_types: Vec<ExamType>,
  #[serde(default)] pub synonyms: Vec<String>,
  #[serde(default)] pub antonyms: Vec<String>,
  #[serde(default)] pub example_sentence: String,
  #[serde(default)] pub example_sentence_tr: String,
  pub status: ContentStatus,
  pub added_by: String,
  pub added_by_name: String,
  #[serde(default)] pub approved_by: Option<String>,
  #[serde(default)] pub rejected_by: Option<String>,
  #[serde(default)] pub rejection_reason: Option<String>,
  pub created_at: String,
  pub updated_at: String,
}

/// A study tip shared by the community.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Trick {
  pub id: String,
  pub title: String,
  pub content: String,
  pub category: TrickCategory,
  pub status: ContentStatus,
  pub added_by: String,
  pub added_by_name: String,
  #[serde(default)] pub upvotes: u32,
  #[serde(default)] pub downvotes: u32,
  #[serde(default)] pub approved_by: Option<String>,
  #[serde(default)] pub rejected_by: Option<String>,
  #[serde(default)] pub rejection_reason: Option<String>,
  pub created_at: String,
  pub updated_at: String,
}

/// A finished quiz, persisted for history and the profile page.
/// Rows are append-only.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizResult {
  pub id: String,
  pub user_id: String,
  pub correct: u32,
  pub total: u32,
  /// Stored rounded to one decimal.
  pub percentage: f64,
  pub grade: String,
  pub quiz_type: QuizType,
  /// Ids of the words answered wrong, for the review list.
  #[serde(default)] pub wrong_answers: Vec<String>,
  pub completed_at: String,
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn enum_wire_tokens_are_snake_case() {
    assert_eq!(serde_json::to_string(&ExamType::Yds).expect("json"), "\"yds\"");
    assert_eq!(serde_json::to_string(&ExamType::Yokdil).expect("json"), "\"yokdil\"");
    assert_eq!(serde_json::to_string(&QuizType::EnToTr).expect("json"), "\"en_to_tr\"");
    assert_eq!(serde_json::to_string(&LeaderboardPeriod::AllTime).expect("json"), "\"all_time\"");
    assert_eq!(serde_json::to_string(&ContentStatus::Pending).expect("json"), "\"pending\"");
    let back: QuizType = serde_json::from_str("\"tr_to_en\"").expect("json");
    assert_eq!(back, QuizType::TrToEn);
  }

  #[test]
  fn labels_match_catalog() {
    assert_eq!(ExamType::Yokdil.label(), "YÖKDİL");
    assert_eq!(WordType::Adjective.label(), "Sıfat");
    assert_eq!(WordType::Adjective.id(), "adjective");
    assert_eq!(TrickCategory::Strategy.label(), "Strateji");
    assert_eq!(difficulty_label(1), "Çok Kolay");
    assert_eq!(difficulty_label(3), "Orta");
    assert_eq!(difficulty_label(9), "Çok Zor");
    assert_eq!(QuizType::Synonym.label(), "Eş Anlam Bulma");
    assert_eq!(LeaderboardPeriod::Weekly.label(), "Bu Hafta");
  }

  #[test]
  fn user_serializes_flat_and_hides_password() {
    let user = User {
      id: "u1".into(),
      email: "a@b.com".into(),
      display_name: "Ayşe".into(),
      password_hash: "secret".into(),
      photo_url: "http://example/p.png".into(),
      role: Role::User,
      created_at: "2025-01-01T00:00:00Z".into(),
      updated_at: "2025-01-01T00:00:00Z".into(),
      stats: UserStats { points: 12, ..Default::default() },
    };
    let v = serde_json::to_value(&user).expect("json");
    assert_eq!(v["points"], 12);
    assert_eq!(v["displayName"], "Ayşe");
    assert_eq!(v["photoURL"], "http://example/p.png");
    assert_eq!(v["wordsContributed"], 0);
    assert!(v.get("passwordHash").is_none());
    assert!(v.get("password_hash").is_none());
  }

  #[test]
  fn word_serializes_camel_case() {
    let word = Word {
      id: "w1".into(),
      english: "abandon".into(),
      turkish: "terk etmek".into(),
      word_type: WordType::Verb,
      difficulty: 2,
      exam_types: vec![ExamType::Yds, ExamType::Yokdil],
      synonyms: vec!["desert".into()],
      antonyms: vec![],
      example_sentence: "They had to abandon the project.".into(),
      example_sentence_tr: "Projeyi terk etmek zorunda kaldılar.".into(),
      status: ContentStatus::Approved,
      added_by: "system".into(),
      added_by_name: "Kelimeci".into(),
      approved_by: None,
      rejected_by: None,
      rejection_reason: None,
      created_at: "2025-01-01T00:00:00Z".into(),
      updated_at: "2025-01-01T00:00:00Z".into(),
    };
    let v = serde_json::to_value(&word).expect("json");
    assert_eq!(v["type"], "verb");
    assert_eq!(v["examTypes"][1], "yokdil");
    assert_eq!(v["exampleSentenceTr"], "Projeyi terk etmek zorunda kaldılar.");
    assert_eq!(v["addedByName"], "Kelimeci");
  }
}
