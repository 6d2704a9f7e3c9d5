//! Quiz generation and the per-user session state machine.
//!
//! Question generation is pure over an approved-word pool and an injected
//! RNG. Sessions record answers one at a time; grading happens in the
//! gamification service once the last answer lands.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::domain::{QuizType, Word};
use crate::error::ApiError;

pub const MIN_QUESTIONS: usize = 5;
pub const MAX_QUESTIONS: usize = 50;
pub const DEFAULT_QUESTION_COUNT: usize = 10;
/// 1 correct + 3 distractors.
pub const OPTIONS_COUNT: usize = 4;

/// Clamp a requested question count into the allowed range.
pub fn clamp_count(requested: Option<usize>) -> usize {
  requested.unwrap_or(DEFAULT_QUESTION_COUNT).clamp(MIN_QUESTIONS, MAX_QUESTIONS)
}

/// One multiple-choice question. `correct` is kept server-side; the wire
/// view only exposes the prompt and options until the answer is submitted.
#[derive(Clone, Debug)]
pub struct Question {
  pub word_id: String,
  /// Effective kind. Synonym questions without synonym data fall back
  /// to en→tr, and this records what was actually asked.
  pub kind: QuizType,
  pub prompt: String,
  pub options: Vec<String>,
  pub correct: String,
}

/// Build `min(count, pool)` questions from distinct words.
pub fn generate_questions(
  pool: &[Word],
  count: usize,
  quiz_type: QuizType,
  rng: &mut impl Rng,
) -> Result<Vec<Question>, ApiError> {
  if pool.len() < OPTIONS_COUNT {
    return Err(ApiError::InsufficientData(
      "Quiz için en az 4 onaylı kelime gerekli.".to_string(),
    ));
  }
  let take = count.min(pool.len());
  let picked = rand::seq::index::sample(rng, pool.len(), take);
  let mut questions = Vec::with_capacity(take);
  for idx in picked.iter() {
    questions.push(build_question(pool, &pool[idx], quiz_type, rng));
  }
  Ok(questions)
}

fn build_question(pool: &[Word], word: &Word, quiz_type: QuizType, rng: &mut impl Rng) -> Question {
  let rest: Vec<&Word> = pool.iter().filter(|w| w.id != word.id).collect();
  let picks: Vec<&Word> = rest.choose_multiple(rng, OPTIONS_COUNT - 1).copied().collect();

  let effective = match quiz_type {
    QuizType::Synonym if word.synonyms.is_empty() => QuizType::EnToTr,
    other => other,
  };

  let (prompt, correct, mut options) = match effective {
    QuizType::EnToTr => (
      format!("'{}' kelimesinin Türkçe karşılığı nedir?", word.english),
      word.turkish.clone(),
      picks.iter().map(|w| w.turkish.clone()).collect::<Vec<_>>(),
    ),
    QuizType::TrToEn => (
      format!("'{}' kelimesinin İngilizce karşılığı nedir?", word.turkish),
      word.english.clone(),
      picks.iter().map(|w| w.english.clone()).collect::<Vec<_>>(),
    ),
    QuizType::Synonym => {
      // non-empty here thanks to the fallback above
      let correct = word.synonyms.choose(rng).cloned().unwrap_or_else(|| word.turkish.clone());
      (
        format!("'{}' kelimesinin eş anlamlısı hangisidir?", word.english),
        correct,
        picks.iter().map(|w| w.english.clone()).collect::<Vec<_>>(),
      )
    }
  };

  // Distractor words are distinct from the target, but shared glosses
  // across distinct words are kept as-is.
  options.push(correct.clone());
  options.shuffle(rng);

  Question { word_id: word.id.clone(), kind: effective, prompt, options, correct }
}

/// A recorded answer within a session.
#[derive(Clone, Debug)]
pub struct AnswerRecord {
  pub question_index: usize,
  pub selected: String,
  pub correct_answer: String,
  pub is_correct: bool,
}

/// What the caller learns right after answering.
#[derive(Clone, Debug)]
pub struct AnswerOutcome {
  pub is_correct: bool,
  pub correct_answer: String,
  pub finished: bool,
}

/// An in-flight quiz for one user. Lives in `AppState`; starting a new quiz
/// replaces any previous session, finished or not.
#[derive(Clone, Debug)]
pub struct QuizSession {
  pub quiz_type: QuizType,
  pub questions: Vec<Question>,
  pub current: usize,
  pub score: u32,
  pub answers: Vec<AnswerRecord>,
  pub wrong_word_ids: Vec<String>,
}

impl QuizSession {
  pub fn new(quiz_type: QuizType, questions: Vec<Question>) -> Self {
    QuizSession {
      quiz_type,
      questions,
      current: 0,
      score: 0,
      answers: Vec::new(),
      wrong_word_ids: Vec::new(),
    }
  }

  pub fn total(&self) -> usize {
    self.questions.len()
  }

  pub fn is_complete(&self) -> bool {
    self.current >= self.questions.len()
  }

  pub fn current_question(&self) -> Option<&Question> {
    self.questions.get(self.current)
  }

  /// Record an answer and advance. The selected option is compared exactly
  /// against the stored answer text.
  pub fn submit_answer(&mut self, selected: &str) -> Result<AnswerOutcome, ApiError> {
    let question = match self.questions.get(self.current) {
      Some(q) => q,
      None => return Err(ApiError::Conflict("Quiz zaten tamamlandı".to_string())),
    };
    let is_correct = selected == question.correct;
    let correct_answer = question.correct.clone();
    if is_correct {
      self.score += 1;
    } else {
      self.wrong_word_ids.push(question.word_id.clone());
    }
    self.answers.push(AnswerRecord {
      question_index: self.current,
      selected: selected.to_string(),
      correct_answer: correct_answer.clone(),
      is_correct,
    });
    self.current += 1;
    Ok(AnswerOutcome { is_correct, correct_answer, finished: self.is_complete() })
  }
}
