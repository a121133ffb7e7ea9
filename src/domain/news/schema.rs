// src/domain/news/schema.rs
use crate::domain::errors::FieldErrors;
use crate::domain::news::value_objects::{NewsContent, NewsTitle};

const TITLE_MIN: usize = 5;
const TITLE_MAX: usize = 190;
const CONTENT_MIN: usize = 10;
const CONTENT_MAX: usize = 30_000;

/// Title and content of a news request after field-level validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewsDraft {
    pub title: NewsTitle,
    pub content: NewsContent,
}

impl NewsDraft {
    /// Checks every field and reports all violations at once.
    pub fn validate(
        title: Option<String>,
        content: Option<String>,
    ) -> Result<Self, FieldErrors> {
        let mut errors = FieldErrors::new();
        let title = check_length(&mut errors, "title", title, TITLE_MIN, TITLE_MAX);
        let content = check_length(&mut errors, "content", content, CONTENT_MIN, CONTENT_MAX);

        match (title, content) {
            (Some(title), Some(content)) if errors.is_empty() => {
                match (NewsTitle::new(title), NewsContent::new(content)) {
                    (Ok(title), Ok(content)) => Ok(Self { title, content }),
                    _ => Err(errors),
                }
            }
            _ => Err(errors),
        }
    }
}

fn check_length(
    errors: &mut FieldErrors,
    field: &str,
    value: Option<String>,
    min: usize,
    max: usize,
) -> Option<String> {
    let Some(value) = value else {
        errors.add(field, format!("The {field} field is required."));
        return None;
    };

    let trimmed = value.trim();
    let length = trimmed.chars().count();
    if length == 0 {
        errors.add(field, format!("The {field} field is required."));
        None
    } else if length < min {
        errors.add(
            field,
            format!("The {field} field must have at least {min} characters."),
        );
        None
    } else if length > max {
        errors.add(
            field,
            format!("The {field} field must not be greater than {max} characters."),
        );
        None
    } else {
        Some(trimmed.to_string())
    }
}
