use crate::{
  controller::{Controller, Screen},
  models::{contact::ContactField, errors::AppError},
};

pub(super) fn contact_set_field(c: &mut Controller, field: ContactField, value: String) -> Screen {
  c.contact.set_field(field, value);
  Screen::Contact
}

pub(super) async fn contact_submit(c: &mut Controller) -> Result<Screen, AppError> {
  let delay = c.cfg.contact.submit_delay();
  c.contact.submit(delay).await?;
  Ok(Screen::Contact)
}
