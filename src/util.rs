//! Small utility helpers used across modules.

/// Log-safe truncation for large strings.
/// Avoids spamming logs with huge request/response payloads.
pub fn trunc_for_log(s: &str, max_chars: usize) -> String {
  if s.chars().count() <= max_chars {
    s.to_string()
  } else {
    let head: String = s.chars().take(max_chars).collect();
    format!("{}… ({} bytes total)", head, s.len())
  }
}

/// Round to one decimal place. Quiz percentages are stored this way.
pub fn round1(x: f64) -> f64 {
  (x * 10.0).round() / 10.0
}

/// Trim surrounding whitespace and escape angle brackets.
/// User-entered text is stored escaped so it can be echoed into HTML contexts.
pub fn sanitize_input(s: &str) -> String {
  s.trim().replace('<', "&lt;").replace('>', "&gt;")
}

/// Validate a word submission. Checks run in a fixed order and the first
/// failure wins, so the caller gets a single actionable message.
pub fn validate_word_input(english: &str, turkish: &str) -> Result<(), String> {
  let english = english.trim();
  let turkish = turkish.trim();
  if english.chars().count() < 2 {
    return Err("İngilizce kelime en az 2 karakter olmalıdır.".to_string());
  }
  if turkish.chars().count() < 2 {
    return Err("Türkçe karşılık en az 2 karakter olmalıdır.".to_string());
  }
  // Spaces and hyphens are fine ("give up", "well-known"), anything else must be a letter.
  let letters: String = english.chars().filter(|c| *c != ' ' && *c != '-').collect();
  if letters.is_empty() || !letters.chars().all(char::is_alphabetic) {
    return Err("İngilizce kelime sadece harf içermelidir.".to_string());
  }
  if english.chars().count() > 50 {
    return Err("İngilizce kelime çok uzun (max 50 karakter).".to_string());
  }
  if turkish.chars().count() > 200 {
    return Err("Türkçe karşılık çok uzun (max 200 karakter).".to_string());
  }
  Ok(())
}

/// Validate a memory-trick submission.
pub fn validate_trick_input(title: &str, content: &str) -> Result<(), String> {
  if title.trim().chars().count() < 5 {
    return Err("Başlık en az 5 karakter olmalıdır.".to_string());
  }
  if content.trim().chars().count() < 20 {
    return Err("İçerik en az 20 karakter olmalıdır.".to_string());
  }
  Ok(())
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn trunc_for_log_keeps_short_strings() {
    assert_eq!(trunc_for_log("hello", 10), "hello");
    assert!(trunc_for_log(&"a".repeat(100), 10).contains("100 bytes total"));
  }

  #[test]
  fn trunc_for_log_cuts_on_char_boundaries() {
    let cut = trunc_for_log("şüphesiz öğrenci çalışkandır", 8);
    assert!(cut.starts_with("şüphesiz"));
  }

  #[test]
  fn round1_rounds_to_one_decimal() {
    assert_eq!(round1(66.666_666), 66.7);
    assert_eq!(round1(100.0), 100.0);
    assert_eq!(round1(83.333_333), 83.3);
  }

  #[test]
  fn sanitize_escapes_angle_brackets() {
    assert_eq!(sanitize_input("  <script>hi</script>  "), "&lt;script&gt;hi&lt;/script&gt;");
    assert_eq!(sanitize_input("plain"), "plain");
  }

  #[test]
  fn word_validation_order_and_messages() {
    assert!(validate_word_input("meticulous", "titiz").is_ok());
    assert!(validate_word_input("give up", "vazgeçmek").is_ok());
    assert!(validate_word_input("well-known", "tanınmış").is_ok());

    let err = validate_word_input("a", "x").expect_err("too short");
    assert_eq!(err, "İngilizce kelime en az 2 karakter olmalıdır.");

    let err = validate_word_input("apple", "a").expect_err("too short");
    assert_eq!(err, "Türkçe karşılık en az 2 karakter olmalıdır.");

    let err = validate_word_input("appl3", "elma").expect_err("digit");
    assert_eq!(err, "İngilizce kelime sadece harf içermelidir.");

    let err = validate_word_input(" - ", "elma").expect_err("only separators");
    assert_eq!(err, "İngilizce kelime sadece harf içermelidir.");

    let long = "a".repeat(51);
    let err = validate_word_input(&long, "elma").expect_err("too long");
    assert_eq!(err, "İngilizce kelime çok uzun (max 50 karakter).");

    let long_tr = "a".repeat(201);
    let err = validate_word_input("apple", &long_tr).expect_err("too long");
    assert_eq!(err, "Türkçe karşılık çok uzun (max 200 karakter).");
  }

  #[test]
  fn trick_validation_checks_title_then_content() {
    assert!(validate_trick_input("Suffix -tion", "Nouns ending in -tion are almost always stressed on the syllable before it.").is_ok());
    let err = validate_trick_input("abc", "x").expect_err("short title");
    assert_eq!(err, "Başlık en az 5 karakter olmalıdır.");
    let err = validate_trick_input("Valid title", "short").expect_err("short content");
    assert_eq!(err, "İçerik en az 20 karakter olmalıdır.");
  }
}
