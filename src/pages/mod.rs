//! Static policy pages (Shipping Policy, Terms of Service).
//!
//! Each page is a fixed list of sections rendered in order and numbered
//! from 1. A section shows its note and bullet list only when it has them.

pub mod shipping;
pub mod terms;

use crate::utils::AppError;
use askama::Template;
use chrono::NaiveDate;
use serde::Serialize;

pub const CONTACT_EMAIL: &str = "support@shoestore.com";

#[derive(Debug, Clone, Serialize, utoipa::ToSchema)]
pub struct PolicySection {
    pub icon: String,
    pub title: String,
    pub body: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub list: Option<Vec<String>>,
}

impl PolicySection {
    pub fn new(icon: &str, title: &str, body: &str) -> Self {
        Self {
            icon: icon.to_string(),
            title: title.to_string(),
            body: body.to_string(),
            note: None,
            list: None,
        }
    }

    pub fn note(mut self, note: &str) -> Self {
        self.note = Some(note.to_string());
        self
    }

    pub fn list(mut self, items: &[&str]) -> Self {
        self.list = Some(items.iter().map(|s| s.to_string()).collect());
        self
    }
}

#[derive(Debug, Clone, Serialize, utoipa::ToSchema)]
pub struct PolicyPage {
    pub slug: String,
    pub title: String,
    pub intro: String,
    pub sections: Vec<PolicySection>,
}

/// Looks up a built-in page by slug (`shipping`, `terms`).
pub fn find_page(slug: &str) -> Option<PolicyPage> {
    match slug {
        "shipping" | "shipping-policy" => Some(shipping::shipping_policy()),
        "terms" | "terms-of-service" => Some(terms::terms_of_service()),
        _ => None,
    }
}

struct SectionView<'a> {
    number: usize,
    icon: &'a str,
    title: &'a str,
    body: &'a str,
    note: Option<&'a str>,
    list: Option<&'a [String]>,
}

#[derive(Template)]
#[template(path = "policy.html")]
struct PolicyTemplate<'a> {
    slug: &'a str,
    title: &'a str,
    intro: &'a str,
    last_updated: String,
    contact_email: &'a str,
    sections: Vec<SectionView<'a>>,
}

pub fn format_last_updated(date: NaiveDate) -> String {
    date.format("%B %-d, %Y").to_string()
}

/// Renders the page as HTML with `today` as its "last updated" date.
pub fn render_policy(page: &PolicyPage, today: NaiveDate) -> Result<String, AppError> {
    let sections = page
        .sections
        .iter()
        .enumerate()
        .map(|(i, s)| SectionView {
            number: i + 1,
            icon: &s.icon,
            title: &s.title,
            body: &s.body,
            note: s.note.as_deref(),
            list: s.list.as_deref(),
        })
        .collect();

    let template = PolicyTemplate {
        slug: &page.slug,
        title: &page.title,
        intro: &page.intro,
        last_updated: format_last_updated(today),
        contact_email: CONTACT_EMAIL,
        sections,
    };

    Ok(template.render()?)
}
