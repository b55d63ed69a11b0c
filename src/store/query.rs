use crate::models::Product;
use crate::utils::AppError;
use mongodb::bson::{doc, oid::ObjectId, Document};
use regex::RegexBuilder;

/// Product filter that can run against MongoDB (`to_document`) or in memory (`matches`).
///
/// All clauses are combined with AND:
/// - `text`: case-insensitive regex matched against `title` OR `description`
/// - `sub_categories`: `subCategory` equals one of the values, ignoring case
/// - `ids`: `_id` is in the set
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductQuery {
    pub text: Option<String>,
    pub sub_categories: Vec<String>,
    pub ids: Option<Vec<ObjectId>>,
}

impl ProductQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(mut self, pattern: &str) -> Self {
        self.text = Some(pattern.to_string());
        self
    }

    pub fn sub_category_in<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.sub_categories = values.into_iter().map(Into::into).collect();
        self
    }

    pub fn restricted_to(mut self, ids: Vec<ObjectId>) -> Self {
        self.ids = Some(ids);
        self
    }

    pub fn to_document(&self) -> Document {
        let mut clauses: Vec<Document> = Vec::new();

        if let Some(pattern) = &self.text {
            clauses.push(doc! {
                "$or": [
                    { "title": { "$regex": pattern.as_str(), "$options": "i" } },
                    { "description": { "$regex": pattern.as_str(), "$options": "i" } }
                ]
            });
        }

        if !self.sub_categories.is_empty() {
            let alternatives: Vec<Document> = self
                .sub_categories
                .iter()
                .map(|value| {
                    let exact = format!("^{}$", regex::escape(value));
                    doc! { "subCategory": { "$regex": exact, "$options": "i" } }
                })
                .collect();

            if alternatives.len() == 1 {
                clauses.extend(alternatives);
            } else {
                clauses.push(doc! { "$or": alternatives });
            }
        }

        if let Some(ids) = &self.ids {
            clauses.push(doc! { "_id": { "$in": ids.clone() } });
        }

        match clauses.len() {
            0 => Document::new(),
            1 => clauses.remove(0),
            _ => doc! { "$and": clauses },
        }
    }

    pub fn matches(&self, product: &Product) -> Result<bool, AppError> {
        if let Some(pattern) = &self.text {
            let re = RegexBuilder::new(pattern).case_insensitive(true).build()?;
            if !re.is_match(&product.title) && !re.is_match(&product.description) {
                return Ok(false);
            }
        }

        if !self.sub_categories.is_empty() {
            let current = product.sub_category.to_lowercase();
            if !self.sub_categories.iter().any(|v| v.to_lowercase() == current) {
                return Ok(false);
            }
        }

        if let Some(ids) = &self.ids {
            match &product.id {
                Some(id) if ids.contains(id) => {}
                _ => return Ok(false),
            }
        }

        Ok(true)
    }
}
