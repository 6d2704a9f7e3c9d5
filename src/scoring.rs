//! Points table, quiz grading bands, and the level ladder.
//! All pure; the gamification service applies the results to the store.

use crate::util::round1;

/// Points awarded per action.
pub mod points {
  pub const WORD_APPROVED: u64 = 10;
  pub const TRICK_APPROVED: u64 = 15;
  pub const QUIZ_COMPLETE: u64 = 5;
  pub const QUIZ_PERFECT: u64 = 20;
  pub const QUIZ_HIGH_SCORE: u64 = 10;
  pub const DAILY_LOGIN: u64 = 2;
  pub const STREAK_BONUS: u64 = 5;
  pub const WORD_LEARNED: u64 = 1;
}

pub const GRADE_PERFECT: &str = "Mükemmel! 🏆";
pub const GRADE_GREAT: &str = "Harika! 🎯";
pub const GRADE_GOOD: &str = "İyi! 👍";
pub const GRADE_NOT_BAD: &str = "Fena Değil 📚";
pub const GRADE_NEEDS_WORK: &str = "Tekrar Çalış 💪";

/// Outcome of grading one finished quiz.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct QuizGrade {
  pub correct: u32,
  pub total: u32,
  /// Rounded to one decimal, as stored.
  pub percentage: f64,
  pub grade: &'static str,
  pub points: u64,
}

impl QuizGrade {
  /// The high-score counter watches the unrounded ratio.
  pub fn is_high_score(&self) -> bool {
    self.total > 0 && f64::from(self.correct) / f64::from(self.total) * 100.0 >= 90.0
  }
}

/// Grade a quiz. Exactly one band applies; the sub-50 band halves the base
/// points instead of adding a bonus. An empty quiz grades as 0%.
pub fn grade_quiz(correct: u32, total: u32) -> QuizGrade {
  let raw = if total > 0 { f64::from(correct) / f64::from(total) * 100.0 } else { 0.0 };
  let (grade, pts) = if total > 0 && correct == total {
    (GRADE_PERFECT, points::QUIZ_COMPLETE + points::QUIZ_PERFECT)
  } else if raw >= 90.0 {
    (GRADE_GREAT, points::QUIZ_COMPLETE + points::QUIZ_HIGH_SCORE)
  } else if raw >= 70.0 {
    (GRADE_GOOD, points::QUIZ_COMPLETE + 5)
  } else if raw >= 50.0 {
    (GRADE_NOT_BAD, points::QUIZ_COMPLETE)
  } else {
    (GRADE_NEEDS_WORK, points::QUIZ_COMPLETE / 2)
  };
  QuizGrade { correct, total, percentage: round1(raw), grade, points: pts }
}

/// One rung of the level ladder. `max` is exclusive; the top level has none.
pub struct LevelDef {
  pub level: u8,
  pub name: &'static str,
  pub icon: &'static str,
  pub min: u64,
  pub max: Option<u64>,
}

pub const LEVELS: [LevelDef; 10] = [
  LevelDef { level: 1, name: "Başlangıç", icon: "🌱", min: 0, max: Some(50) },
  LevelDef { level: 2, name: "Acemi", icon: "🌿", min: 50, max: Some(150) },
  LevelDef { level: 3, name: "Öğrenci", icon: "📖", min: 150, max: Some(300) },
  LevelDef { level: 4, name: "Çalışkan", icon: "📚", min: 300, max: Some(500) },
  LevelDef { level: 5, name: "Azimli", icon: "🎯", min: 500, max: Some(800) },
  LevelDef { level: 6, name: "Bilgili", icon: "🧠", min: 800, max: Some(1200) },
  LevelDef { level: 7, name: "Uzman", icon: "🎓", min: 1200, max: Some(2000) },
  LevelDef { level: 8, name: "Usta", icon: "👨‍🏫", min: 2000, max: Some(3500) },
  LevelDef { level: 9, name: "Efsane", icon: "🏆", min: 3500, max: Some(5000) },
  LevelDef { level: 10, name: "Dahi", icon: "💎", min: 5000, max: None },
];

/// Where a point total sits on the ladder.
pub struct LevelStanding {
  pub def: &'static LevelDef,
  /// 0..=100 within the current rung; 100 at the top level.
  pub progress: f64,
  /// Points still needed for the next rung; `None` at the top level.
  pub points_to_next: Option<u64>,
}

pub fn level_for_points(pts: u64) -> LevelStanding {
  for def in &LEVELS {
    match def.max {
      Some(max) if pts >= def.min && pts < max => {
        let span = (max - def.min) as f64;
        let progress = ((pts - def.min) as f64 / span * 100.0).min(100.0);
        return LevelStanding { def, progress, points_to_next: Some(max - pts) };
      }
      None if pts >= def.min => {
        return LevelStanding { def, progress: 100.0, points_to_next: None };
      }
      _ => {}
    }
  }
  // ladder starts at 0 so this is unreachable for unsigned input
  LevelStanding { def: &LEVELS[0], progress: 0.0, points_to_next: Some(LEVELS[0].min) }
}
