//! Seed data and small utilities related to default content.

use crate::config::SeedWordCfg;
use crate::domain::{ContentStatus, ExamType, Word, WordType};

use ExamType::{Genel, Ielts, Toefl, Yds, Yokdil};
use WordType::{Adjective, Noun, Verb};

fn word(
  english: &str,
  turkish: &str,
  word_type: WordType,
  difficulty: u8,
  exams: &[ExamType],
  synonyms: &[&str],
  antonyms: &[&str],
  example: &str,
  example_tr: &str,
) -> Word {
  Word {
    id: String::new(),
    english: english.to_string(),
    turkish: turkish.to_string(),
    word_type,
    difficulty,
    exam_types: exams.to_vec(),
    synonyms: synonyms.iter().map(|s| s.to_string()).collect(),
    antonyms: antonyms.iter().map(|s| s.to_string()).collect(),
    example_sentence: example.to_string(),
    example_sentence_tr: example_tr.to_string(),
    status: ContentStatus::Approved,
    added_by: "system".to_string(),
    added_by_name: "Kelimeci".to_string(),
    approved_by: None,
    rejected_by: None,
    rejection_reason: None,
    created_at: String::new(),
    updated_at: String::new(),
  }
}

/// Built-in word bank that guarantees the app is useful even without
/// external config: enough approved words for every quiz mode on day one.
pub fn seed_words() -> Vec<Word> {
  vec![
    word(
      "abandon", "terk etmek", Verb, 2, &[Yds, Yokdil],
      &["desert", "forsake"], &["keep", "retain"],
      "The researchers were forced to abandon the project when funding was withdrawn at the end of the fiscal year.",
      "Araştırmacılar, mali yılın sonunda finansman kesilince projeyi terk etmek zorunda kaldılar.",
    ),
    word(
      "comprehensive", "kapsamlı", Adjective, 3, &[Yds, Toefl],
      &["thorough", "complete"], &["partial", "limited"],
      "The ministry published a comprehensive report covering every aspect of the country's higher education system.",
      "Bakanlık, ülkenin yükseköğretim sisteminin her yönünü kapsayan kapsamlı bir rapor yayımladı.",
    ),
    word(
      "mitigate", "hafifletmek", Verb, 4, &[Yds, Ielts],
      &["alleviate", "reduce"], &["aggravate", "intensify"],
      "Urban planners are seeking practical measures to mitigate the effects of climate change on coastal cities.",
      "Şehir plancıları, iklim değişikliğinin kıyı kentleri üzerindeki etkilerini hafifletmek için pratik önlemler arıyor.",
    ),
    word(
      "predecessor", "selef", Noun, 4, &[Yds, Yokdil],
      &["forerunner", "precursor"], &["successor"],
      "The new director introduced policies that differed sharply from those of her predecessor.",
      "Yeni müdür, selefininkinden keskin biçimde ayrılan politikalar getirdi.",
    ),
    word(
      "deteriorate", "kötüleşmek", Verb, 4, &[Yds, Yokdil],
      &["worsen", "decline"], &["improve", "recover"],
      "Relations between the two countries began to deteriorate shortly after the trade agreement collapsed.",
      "İki ülke arasındaki ilişkiler, ticaret anlaşmasının çökmesinden kısa süre sonra kötüleşmeye başladı.",
    ),
    word(
      "substantial", "önemli miktarda", Adjective, 3, &[Yds, Toefl, Ielts],
      &["considerable", "significant"], &["insignificant", "negligible"],
      "A substantial proportion of the national budget has been allocated to renewable energy research this year.",
      "Bu yıl ulusal bütçenin önemli bir bölümü yenilenebilir enerji araştırmalarına ayrıldı.",
    ),
    word(
      "advocate", "savunmak", Verb, 3, &[Yds],
      &["support", "endorse"], &["oppose"],
      "Several economists advocate reducing taxes on small businesses to stimulate local employment.",
      "Birçok ekonomist, yerel istihdamı canlandırmak için küçük işletmelerin vergilerinin düşürülmesini savunuyor.",
    ),
    word(
      "ambiguous", "belirsiz", Adjective, 4, &[Yds, Toefl],
      &["unclear", "vague"], &["clear", "explicit"],
      "The committee rejected the proposal because its central claims were too ambiguous to evaluate properly.",
      "Komite, temel iddiaları düzgün değerlendirilemeyecek kadar belirsiz olduğu için öneriyi reddetti.",
    ),
    word(
      "constraint", "kısıtlama", Noun, 3, &[Yds, Yokdil],
      &["restriction", "limitation"], &["freedom"],
      "Severe budget constraints prevented the hospital from purchasing the latest diagnostic equipment.",
      "Ciddi bütçe kısıtlamaları hastanenin en yeni tanı ekipmanlarını satın almasını engelledi.",
    ),
    word(
      "facilitate", "kolaylaştırmak", Verb, 3, &[Yds, Toefl],
      &["ease", "enable"], &["hinder", "impede"],
      "The new online platform was designed to facilitate communication between students and their supervisors.",
      "Yeni çevrimiçi platform, öğrenciler ile danışmanları arasındaki iletişimi kolaylaştırmak için tasarlandı.",
    ),
    word(
      "inevitable", "kaçınılmaz", Adjective, 3, &[Yds, Ielts],
      &["unavoidable", "certain"], &["avoidable"],
      "Many historians argue that the empire's decline was inevitable once its major trade routes were lost.",
      "Birçok tarihçi, başlıca ticaret yolları kaybedildikten sonra imparatorluğun çöküşünün kaçınılmaz olduğunu savunur.",
    ),
    word(
      "eliminate", "ortadan kaldırmak", Verb, 2, &[Yds, Genel],
      &["remove", "eradicate"], &["preserve", "introduce"],
      "The vaccination campaign aims to eliminate the disease entirely within the next decade.",
      "Aşı kampanyası, önümüzdeki on yıl içinde hastalığı tamamen ortadan kaldırmayı hedefliyor.",
    ),
    word(
      "assessment", "değerlendirme", Noun, 2, &[Yds, Toefl, Ielts],
      &["evaluation", "appraisal"], &[],
      "An independent assessment of the program revealed significant improvements in student performance.",
      "Programın bağımsız bir değerlendirmesi, öğrenci performansında önemli iyileşmeler ortaya koydu.",
    ),
    word(
      "reluctant", "isteksiz", Adjective, 3, &[Yds],
      &["unwilling", "hesitant"], &["eager", "willing"],
      "Investors remain reluctant to commit capital to markets showing signs of political instability.",
      "Yatırımcılar, siyasi istikrarsızlık belirtileri gösteren piyasalara sermaye yatırmakta isteksiz davranmaya devam ediyor.",
    ),
    word(
      "implication", "dolaylı sonuç", Noun, 4, &[Yds, Yokdil],
      &["consequence", "inference"], &[],
      "The study's findings have serious implications for how governments should regulate social media platforms.",
      "Çalışmanın bulguları, hükümetlerin sosyal medya platformlarını nasıl düzenlemesi gerektiği konusunda ciddi sonuçlar taşıyor.",
    ),
    word(
      "conventional", "geleneksel", Adjective, 3, &[Yds, Toefl],
      &["traditional", "customary"], &["unconventional", "novel"],
      "Conventional teaching methods are increasingly being replaced by interactive, technology-driven approaches.",
      "Geleneksel öğretim yöntemleri, yerini giderek etkileşimli ve teknoloji odaklı yaklaşımlara bırakıyor.",
    ),
  ]
}

/// Build a seedable word from a TOML bank entry. Missing fields take the
/// same defaults the built-in bank uses.
pub fn word_from_cfg(cfg: &SeedWordCfg) -> Word {
  Word {
    id: String::new(),
    english: cfg.english.trim().to_lowercase(),
    turkish: cfg.turkish.trim().to_string(),
    word_type: cfg.word_type.unwrap_or_default(),
    difficulty: cfg.difficulty.unwrap_or(3).clamp(1, 5),
    exam_types: if cfg.exam_types.is_empty() { vec![Yds] } else { cfg.exam_types.clone() },
    synonyms: cfg.synonyms.clone(),
    antonyms: cfg.antonyms.clone(),
    example_sentence: cfg.example_sentence.clone().unwrap_or_default(),
    example_sentence_tr: cfg.example_sentence_tr.clone().unwrap_or_default(),
    status: ContentStatus::Approved,
    added_by: "system".to_string(),
    added_by_name: "Kelimeci".to_string(),
    approved_by: None,
    rejected_by: None,
    rejection_reason: None,
    created_at: String::new(),
    updated_at: String::new(),
  }
}
