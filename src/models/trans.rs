use std::collections::HashMap;
use std::sync::OnceLock;

use regex::Regex;
use serde_json::Value;

fn messages() -> &'static HashMap<&'static str, &'static str> {
  static MESSAGES: OnceLock<HashMap<&'static str, &'static str>> = OnceLock::new();
  MESSAGES.get_or_init(|| {
    HashMap::from([
      ("server.internal.error", "something went wrong, please try again"),
      ("request.command.empty", "type a command, or `help` to list them"),
      ("request.command.unknown", "unknown command `{{Command}}`"),
      ("request.command.missing_arg", "`{{Command}}` expects {{Expected}}"),
      ("request.quantity.invalid", "`{{Value}}` is not a valid quantity"),
      ("request.category.invalid", "`{{Value}}` is not a category"),
      ("request.sort.invalid", "`{{Value}}` is not a sort order"),
      ("request.density.invalid", "`{{Value}}` is not a view mode, use grid or list"),
      ("contact.field.invalid", "`{{Value}}` is not a contact form field"),
      ("contact.name.required", "please fill in your name"),
      ("contact.email.required", "please fill in your email"),
      ("contact.email.invalid", "please enter a valid email address"),
      ("contact.message.required", "please write a message"),
      ("contact.submit.in_progress", "your message is already being sent"),
    ])
  })
}

fn param_regex() -> &'static Regex {
  static RE_PARAM: OnceLock<Regex> = OnceLock::new();
  RE_PARAM.get_or_init(|| Regex::new(r"\{\{\s*\.?(\w+)\s*\}\}").unwrap())
}

/// Translates a message id, substituting `{{Name}}` params. Unknown ids translate to
/// themselves.
pub fn tr(id: &str, params: &HashMap<String, Value>) -> String {
  let Some(template) = messages().get(id) else {
    return id.to_string();
  };

  param_regex()
    .replace_all(template, |caps: &regex::Captures| match params.get(&caps[1]) {
      Some(Value::String(s)) => s.clone(),
      Some(v) => v.to_string(),
      None => caps[0].to_string(),
    })
    .into_owned()
}
