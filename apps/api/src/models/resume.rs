//! Resume content as edited in the studio: personal fields, sections and bullets.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Per-item rendering parameters. Only `visible` is interpreted; any other keys
/// written by the editor are carried through untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ItemParams {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visible: Option<bool>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Bullet {
    pub id: String,
    #[serde(default)]
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub params: Option<ItemParams>,
}

impl Bullet {
    /// `false` only when the bullet was explicitly hidden.
    pub fn is_marked_visible(&self) -> bool {
        !matches!(self.params, Some(ItemParams { visible: Some(false), .. }))
    }

    /// A sub-header groups the bullets that follow it (e.g. an employer line).
    /// Detected as trimmed text starting with `**` and containing a second `**`.
    pub fn is_sub_header(&self) -> bool {
        is_sub_header_text(&self.text)
    }
}

pub fn is_sub_header_text(text: &str) -> bool {
    text.trim()
        .strip_prefix("**")
        .is_some_and(|rest| rest.contains("**"))
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Section {
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub bullets: Vec<Bullet>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub params: Option<ItemParams>,
}

impl Section {
    pub fn is_marked_visible(&self) -> bool {
        !matches!(self.params, Some(ItemParams { visible: Some(false), .. }))
    }
}

/// The document being edited.
///
/// `fields_visible` maps a field name to a flag; a missing entry means visible.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ResumeData {
    pub name: String,
    pub title: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub summary: String,
    pub sections: Vec<Section>,
    pub fields_visible: HashMap<String, bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub github: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub portfolio: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub twitter: Option<String>,
}

impl ResumeData {
    pub fn section(&self, id: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.id == id)
    }

    pub fn has_summary(&self) -> bool {
        !self.summary.trim().is_empty()
    }
}

/// Contact items shown in a template header, in their canonical order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContactField {
    Email,
    Phone,
    Location,
    Linkedin,
    Website,
    Github,
    Portfolio,
    Twitter,
}

impl ContactField {
    pub const ALL: [ContactField; 8] = [
        ContactField::Email,
        ContactField::Phone,
        ContactField::Location,
        ContactField::Linkedin,
        ContactField::Website,
        ContactField::Github,
        ContactField::Portfolio,
        ContactField::Twitter,
    ];

    /// Key used in `ResumeData::fields_visible`.
    pub fn field_name(self) -> &'static str {
        match self {
            ContactField::Email => "email",
            ContactField::Phone => "phone",
            ContactField::Location => "location",
            ContactField::Linkedin => "linkedin",
            ContactField::Website => "website",
            ContactField::Github => "github",
            ContactField::Portfolio => "portfolio",
            ContactField::Twitter => "twitter",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ContactField::Email => "Email",
            ContactField::Phone => "Phone",
            ContactField::Location => "Location",
            ContactField::Linkedin => "LinkedIn",
            ContactField::Website => "Website",
            ContactField::Github => "GitHub",
            ContactField::Portfolio => "Portfolio",
            ContactField::Twitter => "Twitter",
        }
    }

    /// The raw value on the resume, `None` when blank.
    pub fn value(self, data: &ResumeData) -> Option<&str> {
        let raw = match self {
            ContactField::Email => Some(data.email.as_str()),
            ContactField::Phone => Some(data.phone.as_str()),
            ContactField::Location => Some(data.location.as_str()),
            ContactField::Linkedin => data.linkedin.as_deref(),
            ContactField::Website => data.website.as_deref(),
            ContactField::Github => data.github.as_deref(),
            ContactField::Portfolio => data.portfolio.as_deref(),
            ContactField::Twitter => data.twitter.as_deref(),
        };
        raw.map(str::trim).filter(|v| !v.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_sub_header_detection() {
        assert!(is_sub_header_text("**Acme Corp** | Engineer"));
        assert!(is_sub_header_text("   **Acme**"));
        assert!(!is_sub_header_text("**unterminated"));
        assert!(!is_sub_header_text("Shipped **fast** code"));
        assert!(!is_sub_header_text(""));
    }

    #[test]
    fn test_visibility_defaults_to_true() {
        let bullet: Bullet = serde_json::from_value(json!({"id": "b1", "text": "x"})).unwrap();
        assert!(bullet.is_marked_visible());

        let hidden: Bullet =
            serde_json::from_value(json!({"id": "b2", "text": "x", "params": {"visible": false}}))
                .unwrap();
        assert!(!hidden.is_marked_visible());
    }

    #[test]
    fn test_params_extra_keys_round_trip() {
        let raw = json!({"id": "s1", "title": "Skills", "bullets": [], "params": {"visible": true, "collapsed": true}});
        let section: Section = serde_json::from_value(raw.clone()).unwrap();
        assert_eq!(serde_json::to_value(&section).unwrap(), raw);
    }

    #[test]
    fn test_resume_deserializes_partial_payload() {
        let data: ResumeData = serde_json::from_value(json!({
            "name": "Ada Lovelace",
            "fieldsVisible": {"phone": false},
            "github": "ada"
        }))
        .unwrap();
        assert_eq!(data.name, "Ada Lovelace");
        assert!(data.sections.is_empty());
        assert_eq!(data.fields_visible.get("phone"), Some(&false));
        assert_eq!(ContactField::Github.value(&data), Some("ada"));
        assert_eq!(ContactField::Email.value(&data), None);
    }
}
