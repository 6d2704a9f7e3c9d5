//! Loading app configuration (prompts, admin allowlist, extra word bank)
//! from TOML.
//!
//! See `AppConfig` and `Prompts` for expected schema.

use serde::Deserialize;
use tracing::{error, info};

use crate::domain::{ExamType, WordType};

#[derive(Clone, Debug, Deserialize, Default)]
pub struct AppConfig {
  #[serde(default)]
  pub prompts: Prompts,
  /// Accounts granted admin rights in addition to the `role` field.
  #[serde(default)]
  pub admin_emails: Vec<String>,
  #[serde(default)]
  pub words: Vec<SeedWordCfg>,
}

/// Word entry accepted in TOML configuration. Seeded as already approved.
#[derive(Clone, Debug, Deserialize)]
pub struct SeedWordCfg {
  pub english: String,
  pub turkish: String,
  #[serde(default)] pub word_type: Option<WordType>,
  #[serde(default)] pub difficulty: Option<u8>,
  #[serde(default)] pub exam_types: Vec<ExamType>,
  #[serde(default)] pub synonyms: Vec<String>,
  #[serde(default)] pub antonyms: Vec<String>,
  #[serde(default)] pub example_sentence: Option<String>,
  #[serde(default)] pub example_sentence_tr: Option<String>,
}

const DEFAULT_EXAMPLE_SENTENCE_SYSTEM: &str = r#"Sen bir YDS/İngilizce sınav uzmanısın. Verilen kelimeyi kullanarak akademik ve resmi dilde, sınav formatına uygun bir İngilizce cümle oluştur ve Türkçe çevirisini de yaz.

Kurallar:
1. Cümle 15-25 kelime arasında olsun
2. Akademik/resmi dil kullan
3. Cümle bağlamdan anlaşılır olsun
4. Kelimeyi doğru gramatikal yapıda kullan
5. Türkçe çeviri doğru ve akıcı olsun

SADECE aşağıdaki JSON formatında yanıt ver, başka hiçbir şey ekleme:
{"english": "İngilizce cümle buraya", "turkish": "Türkçe çeviri buraya"}"#;

const DEFAULT_SENTENCE_COMPLETION_SYSTEM: &str = r#"Sen bir YDS/İngilizce sınav uzmanısın. Verilen kelimeyi kullanarak cümle tamamlama sorusu oluştur.

Format:
- Cümlenin bir kısmını boşluk (______) olarak bırak
- Doğru cevap verilen kelime olsun
- 3 yanlış şık da oluştur (benzer ama yanlış kelimeler)

JSON formatında döndür:
{
    "sentence": "The scientist had to ______ the experiment due to lack of funding.",
    "correct": "abandon",
    "options": ["abandon", "enhance", "pursue", "maintain"]
}"#;

const DEFAULT_WORD_EXPLANATION_SYSTEM: &str = r#"Sen bir İngilizce öğretmenisin. Verilen kelime için Türkçe kısa bir açıklama yaz.
Açıklama:
- En fazla 2 cümle olsun
- Kelimenin kullanım bağlamını açıkla
- Türkçe yaz"#;

const DEFAULT_MEMORY_HINT_SYSTEM: &str = r#"Sen yaratıcı bir dil öğretmenisin. Verilen İngilizce kelimeyi hatırlamak için eğlenceli ve akılda kalıcı bir Türkçe ipucu oluştur.
İpucu:
- Ses benzerliği kullanabilirsin (örn: 'abandon' = 'aban don' gibi)
- Görsel çağrışım yapabilirsin
- Kısa ve akılda kalıcı olsun
- Sadece ipucunu yaz, başka açıklama ekleme"#;

/// System prompts used by the Groq client. Defaults target Turkish exam
/// prep; override them in TOML to tune tone/structure.
#[derive(Clone, Debug, Deserialize)]
pub struct Prompts {
  pub example_sentence: String,
  pub sentence_completion: String,
  pub word_explanation: String,
  pub memory_hint: String,
}

impl Default for Prompts {
  fn default() -> Self {
    Self {
      example_sentence: DEFAULT_EXAMPLE_SENTENCE_SYSTEM.into(),
      sentence_completion: DEFAULT_SENTENCE_COMPLETION_SYSTEM.into(),
      word_explanation: DEFAULT_WORD_EXPLANATION_SYSTEM.into(),
      memory_hint: DEFAULT_MEMORY_HINT_SYSTEM.into(),
    }
  }
}

/// Attempt to load `AppConfig` from KELIMECI_CONFIG_PATH. On any parsing/IO
/// error, returns None.
pub fn load_app_config_from_env() -> Option<AppConfig> {
  let path = std::env::var("KELIMECI_CONFIG_PATH").ok()?;
  match std::fs::read_to_string(&path) {
    Ok(s) => match toml::from_str::<AppConfig>(&s) {
      Ok(cfg) => {
        info!(target: "kelimeci_backend", %path, "Loaded app config (TOML)");
        Some(cfg)
      }
      Err(e) => {
        error!(target: "kelimeci_backend", %path, error = %e, "Failed to parse TOML config");
        None
      }
    },
    Err(e) => {
      error!(target: "kelimeci_backend", %path, error = %e, "Failed to read TOML config file");
      None
    }
  }
}
