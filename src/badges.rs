//! Badge catalog and the award sweep.
//!
//! Badges are earned once and never revoked. Each badge watches a single
//! counter; the sweep compares counters against thresholds and reports only
//! badges the user does not already hold, in catalog order.

use crate::domain::UserStats;

/// Which counter a badge watches.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BadgeKind {
  Contribution,
  Learning,
  Streak,
  Quiz,
}

pub struct BadgeDef {
  pub id: &'static str,
  pub name: &'static str,
  pub emoji: &'static str,
  pub description: &'static str,
  pub threshold: u64,
  pub kind: BadgeKind,
}

pub const BADGES: [BadgeDef; 8] = [
  BadgeDef {
    id: "caylak",
    name: "Çaylak",
    emoji: "🥉",
    description: "İlk kelimeni ekledin!",
    threshold: 1,
    kind: BadgeKind::Contribution,
  },
  BadgeDef {
    id: "katkici",
    name: "Katkıcı",
    emoji: "🥈",
    description: "10 kelimenin onaylandı!",
    threshold: 10,
    kind: BadgeKind::Contribution,
  },
  BadgeDef {
    id: "uzman",
    name: "Uzman",
    emoji: "🥇",
    description: "50 kelimenin onaylandı!",
    threshold: 50,
    kind: BadgeKind::Contribution,
  },
  BadgeDef {
    id: "efsane",
    name: "Efsane",
    emoji: "💎",
    description: "100+ kelimenin onaylandı!",
    threshold: 100,
    kind: BadgeKind::Contribution,
  },
  BadgeDef {
    id: "kelime_avcisi",
    name: "Kelime Avcısı",
    emoji: "📚",
    description: "100 kelime öğrendin!",
    threshold: 100,
    kind: BadgeKind::Learning,
  },
  BadgeDef {
    id: "streak_master",
    name: "Streak Master",
    emoji: "🎯",
    description: "7 gün üst üste çalıştın!",
    threshold: 7,
    kind: BadgeKind::Streak,
  },
  BadgeDef {
    id: "streak_efsanesi",
    name: "Streak Efsanesi",
    emoji: "🔥",
    description: "30 gün üst üste çalıştın!",
    threshold: 30,
    kind: BadgeKind::Streak,
  },
  BadgeDef {
    id: "quiz_sampiyonu",
    name: "Quiz Şampiyonu",
    emoji: "🏆",
    description: "10 quiz'de %90+ başarı!",
    threshold: 10,
    kind: BadgeKind::Quiz,
  },
];

pub fn find(id: &str) -> Option<&'static BadgeDef> {
  BADGES.iter().find(|b| b.id == id)
}

/// The counter values badges are judged against.
/// Streak badges look at the CURRENT streak, not the longest one.
#[derive(Clone, Copy, Debug, Default)]
pub struct BadgeCounters {
  pub words_contributed: u64,
  pub words_learned: u64,
  pub current_streak: u32,
  pub high_score_quizzes: u64,
}

impl From<&UserStats> for BadgeCounters {
  fn from(stats: &UserStats) -> Self {
    BadgeCounters {
      words_contributed: stats.words_contributed,
      words_learned: stats.words_learned,
      current_streak: stats.current_streak,
      high_score_quizzes: stats.high_score_quizzes,
    }
  }
}

impl BadgeCounters {
  fn value_for(&self, kind: BadgeKind) -> u64 {
    match kind {
      BadgeKind::Contribution => self.words_contributed,
      BadgeKind::Learning => self.words_learned,
      BadgeKind::Streak => u64::from(self.current_streak),
      BadgeKind::Quiz => self.high_score_quizzes,
    }
  }
}

/// Ids of badges whose threshold is now met and that are not already held.
/// Idempotent: running the sweep again with the result appended yields
/// nothing new.
pub fn evaluate_badges(counters: &BadgeCounters, already_held: &[String]) -> Vec<&'static str> {
  BADGES
    .iter()
    .filter(|b| counters.value_for(b.kind) >= b.threshold)
    .filter(|b| !already_held.iter().any(|held| held == b.id))
    .map(|b| b.id)
    .collect()
}

/// One progress row per catalog badge, for the profile page.
pub struct BadgeProgress {
  pub def: &'static BadgeDef,
  pub earned: bool,
  pub value: u64,
  /// 0..=100, capped.
  pub progress: f64,
}

pub fn progress(counters: &BadgeCounters, held: &[String]) -> Vec<BadgeProgress> {
  BADGES
    .iter()
    .map(|def| {
      let value = counters.value_for(def.kind);
      let pct = (value as f64 / def.threshold as f64) * 100.0;
      BadgeProgress {
        def,
        earned: held.iter().any(|h| h == def.id),
        value,
        progress: pct.min(100.0),
      }
    })
    .collect()
}
