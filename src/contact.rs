use std::{collections::BTreeMap, fmt, sync::LazyLock};

use regex::Regex;

use crate::models::ContactForm;

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern should compile")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Field {
    Name,
    Email,
    Message,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Message => "message",
        })
    }
}

/// Outcome of validating a form. A field without an entry in `errors` is
/// valid.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Validation {
    pub is_valid: bool,
    pub errors: BTreeMap<Field, String>,
}

impl Validation {
    fn from_errors(errors: BTreeMap<Field, String>) -> Self {
        Self {
            is_valid: errors.is_empty(),
            errors,
        }
    }

    pub fn error(&self, field: Field) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

pub(crate) fn email_error(email: &str) -> Option<&'static str> {
    if email.trim().is_empty() {
        Some("Email is required")
    } else if !is_valid_email(email) {
        Some("Please enter a valid email address")
    } else {
        None
    }
}

pub fn validate(form: &ContactForm) -> Validation {
    let mut errors = BTreeMap::new();
    if form.name.trim().is_empty() {
        errors.insert(Field::Name, "Name is required".to_string());
    }
    if let Some(e) = email_error(&form.email) {
        errors.insert(Field::Email, e.to_string());
    }
    if form.message.trim().is_empty() {
        errors.insert(Field::Message, "Message is required".to_string());
    }
    Validation::from_errors(errors)
}

pub fn is_ready(form: &ContactForm) -> bool {
    validate(form).is_valid
}

pub fn contact_subject(name: &str) -> String {
    format!("Portfolio Contact: Message from {name}")
}

pub fn contact_body(form: &ContactForm, owner: &str) -> String {
    format!(
        "\nName: {}\nEmail: {}\n\nMessage:\n{}\n\n---\nSent from {owner} Portfolio Contact Form\n",
        form.name, form.email, form.message
    )
}

fn encode_address(address: &str) -> String {
    match address.rsplit_once('@') {
        Some((local, domain)) => format!(
            "{}@{}",
            urlencoding::encode(local),
            urlencoding::encode(domain)
        ),
        None => urlencoding::encode(address).into_owned(),
    }
}

/// `mailto:` URI with a percent-encoded recipient, subject and body.
pub fn mailto(recipient: &str, subject: &str, body: &str) -> String {
    format!(
        "mailto:{}?subject={}&body={}",
        encode_address(recipient),
        urlencoding::encode(subject),
        urlencoding::encode(body)
    )
}

pub fn mailto_link(form: &ContactForm, recipient: &str, owner: &str) -> String {
    mailto(
        recipient,
        &contact_subject(&form.name),
        &contact_body(form, owner),
    )
}
