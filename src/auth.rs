//! Convenience credential flows. Not a security system: passwords are
//! stored as unsalted SHA-256 digests and session handling is left to the
//! client. Mirrors the product's demo login behavior.

use sha2::{Digest, Sha256};
use tracing::{info, instrument};
use uuid::Uuid;

use crate::domain::{Role, User, UserStats};
use crate::error::ApiError;
use crate::store::Store;

pub fn hash_password(password: &str) -> String {
  let mut hasher = Sha256::new();
  hasher.update(password.as_bytes());
  format!("{:x}", hasher.finalize())
}

pub fn normalize_email(email: &str) -> String {
  email.trim().to_lowercase()
}

/// An address passes when something follows an `@` and the domain part has
/// a dot. Deliberately loose.
fn email_is_valid(email: &str) -> bool {
  match email.split_once('@') {
    Some((_, domain)) => domain.contains('.'),
    None => false,
  }
}

/// Deterministic avatar for a display name.
pub fn avatar_url(display_name: &str) -> String {
  format!(
    "https://ui-avatars.com/api/?name={}&background=667eea&color=fff&size=128",
    display_name.replace(' ', "+")
  )
}

#[instrument(level = "info", skip_all)]
pub async fn signup(store: &Store, email: &str, password: &str, display_name: &str) -> Result<User, ApiError> {
  let email = normalize_email(email);
  if !email_is_valid(&email) {
    return Err(ApiError::Validation("Geçerli bir e-posta adresi girin.".to_string()));
  }
  if password.chars().count() < 6 {
    return Err(ApiError::Validation("Şifre en az 6 karakter olmalı.".to_string()));
  }
  let display_name = display_name.trim();
  if display_name.chars().count() < 2 {
    return Err(ApiError::Validation("İsim en az 2 karakter olmalı.".to_string()));
  }

  let user = User {
    id: Uuid::new_v4().to_string(),
    email,
    display_name: display_name.to_string(),
    password_hash: hash_password(password),
    photo_url: avatar_url(display_name),
    role: Role::User,
    created_at: String::new(),
    updated_at: String::new(),
    stats: UserStats::default(),
  };
  let user = store.insert_user(user).await?;
  info!(target: "kelimeci_backend", user_id = %user.id, "Signup completed");
  Ok(user)
}

#[instrument(level = "info", skip_all)]
pub async fn login(store: &Store, email: &str, password: &str) -> Result<User, ApiError> {
  let email = normalize_email(email);
  let user = store.find_user_by_email(&email).await.ok_or(ApiError::NotFound("Kullanıcı"))?;
  if user.password_hash != hash_password(password) {
    return Err(ApiError::Validation("Şifre hatalı".to_string()));
  }
  info!(target: "kelimeci_backend", user_id = %user.id, "Login verified");
  Ok(user)
}

/// Only the new password is required; the product never asks for the old one.
#[instrument(level = "info", skip_all, fields(%user_id))]
pub async fn change_password(store: &Store, user_id: &str, new_password: &str) -> Result<(), ApiError> {
  if new_password.chars().count() < 6 {
    return Err(ApiError::Validation("Şifre en az 6 karakter olmalı.".to_string()));
  }
  store.set_password_hash(user_id, &hash_password(new_password)).await
}

/// Rename the account; the avatar URL is derived from the name and follows it.
#[instrument(level = "info", skip_all, fields(%user_id))]
pub async fn rename(store: &Store, user_id: &str, new_name: &str) -> Result<User, ApiError> {
  let name = new_name.trim();
  if name.chars().count() < 2 {
    return Err(ApiError::Validation("İsim en az 2 karakter olmalı.".to_string()));
  }
  store.set_display_name(user_id, name, &avatar_url(name)).await
}

/// Role admins plus the config allowlist.
pub fn is_admin(user: &User, admin_emails: &[String]) -> bool {
  user.role == Role::Admin || admin_emails.iter().any(|e| e.eq_ignore_ascii_case(&user.email))
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn sha256_digest_matches_known_vector() {
    assert_eq!(
      hash_password("password123"),
      "ef92b778bafe771e89245b89ecbc08a44a4e166c06659911881f383d4473e94f"
    );
  }

  #[test]
  fn email_validation_is_loose_but_needs_a_dotted_domain() {
    assert!(email_is_valid("user@example.com"));
    assert!(email_is_valid("@example.com"));
    assert!(!email_is_valid("userexample.com"));
    assert!(!email_is_valid("user@localhost"));
  }

  #[test]
  fn avatar_url_encodes_spaces_as_plus() {
    assert_eq!(
      avatar_url("Ayşe Kaya"),
      "https://ui-avatars.com/api/?name=Ayşe+Kaya&background=667eea&color=fff&size=128"
    );
  }

  #[tokio::test]
  async fn signup_creates_a_zeroed_user() {
    let store = Store::new();
    let user = signup(&store, "  Ayse@Example.COM ", "sifre123", "  Ayşe  ").await.expect("signup");
    assert_eq!(user.email, "ayse@example.com");
    assert_eq!(user.display_name, "Ayşe");
    assert_eq!(user.role, Role::User);
    assert_eq!(user.stats.points, 0);
    assert!(user.stats.badges.is_empty());
    assert!(user.stats.last_active_date.is_none());
    assert!(user.photo_url.starts_with("https://ui-avatars.com/api/?name=Ay"));
    assert!(!user.created_at.is_empty());
  }

  #[tokio::test]
  async fn signup_rejects_bad_input_in_order() {
    let store = Store::new();
    let err = signup(&store, "not-an-email", "sifre123", "Ayşe").await.expect_err("email");
    assert_eq!(err.to_string(), "Geçerli bir e-posta adresi girin.");

    let err = signup(&store, "a@b.com", "kisa", "Ayşe").await.expect_err("password");
    assert_eq!(err.to_string(), "Şifre en az 6 karakter olmalı.");

    let err = signup(&store, "a@b.com", "sifre123", " A ").await.expect_err("name");
    assert_eq!(err.to_string(), "İsim en az 2 karakter olmalı.");
  }

  #[tokio::test]
  async fn duplicate_signup_is_a_conflict() {
    let store = Store::new();
    signup(&store, "a@b.com", "sifre123", "Ayşe").await.expect("first");
    let err = signup(&store, "A@B.COM", "sifre456", "Başka").await.expect_err("duplicate");
    assert!(matches!(err, ApiError::Conflict(_)));
  }

  #[tokio::test]
  async fn login_distinguishes_unknown_user_from_wrong_password() {
    let store = Store::new();
    signup(&store, "a@b.com", "sifre123", "Ayşe").await.expect("signup");

    let err = login(&store, "yok@b.com", "sifre123").await.expect_err("unknown");
    assert_eq!(err.to_string(), "Kullanıcı bulunamadı");

    let err = login(&store, "a@b.com", "yanlis1").await.expect_err("wrong password");
    assert_eq!(err.to_string(), "Şifre hatalı");

    let user = login(&store, " A@b.com ", "sifre123").await.expect("login");
    assert_eq!(user.display_name, "Ayşe");
  }

  #[tokio::test]
  async fn change_password_takes_effect_immediately() {
    let store = Store::new();
    let user = signup(&store, "a@b.com", "sifre123", "Ayşe").await.expect("signup");

    let err = change_password(&store, &user.id, "kisa").await.expect_err("short");
    assert!(matches!(err, ApiError::Validation(_)));

    change_password(&store, &user.id, "yeniSifre1").await.expect("change");
    assert!(login(&store, "a@b.com", "sifre123").await.is_err());
    assert!(login(&store, "a@b.com", "yeniSifre1").await.is_ok());
  }

  #[tokio::test]
  async fn rename_refreshes_the_avatar() {
    let store = Store::new();
    let user = signup(&store, "a@b.com", "sifre123", "Ayşe").await.expect("signup");
    let renamed = rename(&store, &user.id, "Ayşe Kaya").await.expect("rename");
    assert_eq!(renamed.display_name, "Ayşe Kaya");
    assert!(renamed.photo_url.contains("name=Ay%C5%9Fe+Kaya") || renamed.photo_url.contains("name=Ayşe+Kaya"));
  }

  #[tokio::test]
  async fn admin_check_covers_role_and_allowlist() {
    let store = Store::new();
    let mut user = signup(&store, "a@b.com", "sifre123", "Ayşe").await.expect("signup");
    assert!(!is_admin(&user, &[]));
    assert!(is_admin(&user, &["A@B.com".to_string()]));
    user.role = Role::Admin;
    assert!(is_admin(&user, &[]));
  }
}
