use std::time::Duration;

use chrono::Utc;
use tokio::time::{sleep, Instant};
use tracing::info;
use ulid::Ulid;

use crate::models::{
  contact::{contact_is_valid, ContactField, ContactFormData, ContactMessage},
  errors::AppError,
};

/// Contact form state. Submission is simulated: it waits a fixed delay and always succeeds
/// once the fields are valid.
#[derive(Debug, Default)]
pub struct ContactForm {
  pub(crate) data: ContactFormData,
  pub(crate) submitting: bool,
  pub(crate) submitted_at: Option<Instant>,
}

impl ContactForm {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn data(&self) -> &ContactFormData {
    &self.data
  }

  pub fn set_field(&mut self, field: ContactField, value: impl Into<String>) {
    self.data.set(field, value);
  }

  pub fn is_submitting(&self) -> bool {
    self.submitting
  }

  /// Whether the thank-you note is still showing at `now`.
  pub fn is_submitted(&self, now: Instant, ttl: Duration) -> bool {
    self.submitted_at.is_some_and(|at| now.saturating_duration_since(at) < ttl)
  }

  pub async fn submit(&mut self, delay: Duration) -> Result<ContactMessage, AppError> {
    let w = "storefront.store.contact_submit";
    if self.submitting {
      return Err(AppError::new(w, "contact.submit.in_progress", None, "", None));
    }
    contact_is_valid(&self.data)?;

    self.submitting = true;
    // Reset even when the future is dropped mid-delay.
    let mut form = scopeguard::guard(self, |f| f.submitting = false);

    sleep(delay).await;

    let data = std::mem::take(&mut form.data);
    let msg = ContactMessage {
      id: Ulid::new(),
      received_at: Utc::now(),
      name: data.name.trim().to_string(),
      email: data.email.trim().to_string(),
      message: data.message,
    };
    form.submitted_at = Some(Instant::now());

    info!(
      id = %msg.id,
      received_at = %msg.received_at,
      name = %msg.name,
      email = %msg.email,
      "contact form submitted"
    );
    Ok(msg)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn filled() -> ContactForm {
    let mut form = ContactForm::new();
    form.set_field(ContactField::Name, " Sam ");
    form.set_field(ContactField::Email, "sam@example.com");
    form.set_field(ContactField::Message, "Do you ship squat racks?");
    form
  }

  #[tokio::test(start_paused = true)]
  async fn submit_waits_then_clears_the_form() {
    let mut form = filled();
    let started = Instant::now();

    let msg = form.submit(Duration::from_secs(1)).await.unwrap();

    assert!(started.elapsed() >= Duration::from_secs(1));
    assert_eq!(msg.name, "Sam");
    assert_eq!(msg.email, "sam@example.com");
    assert_eq!(form.data(), &ContactFormData::default());
    assert!(!form.is_submitting());
    assert!(form.is_submitted(Instant::now(), Duration::from_secs(5)));
  }

  #[tokio::test(start_paused = true)]
  async fn confirmation_expires() {
    let mut form = filled();
    form.submit(Duration::ZERO).await.unwrap();
    let ttl = Duration::from_secs(5);

    tokio::time::advance(Duration::from_millis(4999)).await;
    assert!(form.is_submitted(Instant::now(), ttl));
    tokio::time::advance(Duration::from_millis(1)).await;
    assert!(!form.is_submitted(Instant::now(), ttl));
  }

  #[tokio::test]
  async fn resubmission_is_blocked_while_submitting() {
    let mut form = filled();
    form.submitting = true;
    let err = form.submit(Duration::ZERO).await.unwrap_err();
    assert_eq!(err.id, "contact.submit.in_progress");
    assert_eq!(form.data().name, " Sam ");
  }

  #[tokio::test]
  async fn invalid_forms_are_not_sent() {
    let mut form = filled();
    form.set_field(ContactField::Email, "not-an-email");
    let err = form.submit(Duration::ZERO).await.unwrap_err();
    assert_eq!(err.id, "contact.email.invalid");
    assert!(!form.is_submitting());
    assert!(form.submitted_at.is_none());
  }

  #[tokio::test(start_paused = true)]
  async fn dropped_submission_resets_the_flag() {
    let mut form = filled();
    {
      let fut = form.submit(Duration::from_secs(10));
      tokio::pin!(fut);
      let res = tokio::time::timeout(Duration::from_secs(1), &mut fut).await;
      assert!(res.is_err());
    }
    assert!(!form.is_submitting());
    assert!(form.submitted_at.is_none());
  }
}
