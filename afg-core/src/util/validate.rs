use lazy_static::lazy_static;
use regex::Regex;

pub const MIN_TITLE_LEN: usize = 5;
pub const MAX_TITLE_LEN: usize = 150;

pub const MIN_CONTENT_LEN: usize = 20;
pub const MAX_CONTENT_LEN: usize = 30_000;

pub const MAX_TAG_COUNT: usize = 5;
pub const MAX_TAG_LEN: usize = 25;

pub const MIN_USERNAME_LEN: usize = 3;
pub const MAX_USERNAME_LEN: usize = 30;

pub const MAX_NAME_LEN: usize = 60;

lazy_static! {
    static ref TAG_RE: Regex = Regex::new(r"^[a-z0-9][a-z0-9+#.\-]*$").unwrap();
    static ref USERNAME_RE: Regex = Regex::new(r"^[a-z0-9][a-z0-9_\-]*$").unwrap();
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuestionInvalidation {
    Title,
    Content,
    TagLabel,
    TagCount,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnswerInvalidation {
    Content,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserInvalidation {
    Name,
    Username,
}

pub fn question_title(title: &str) -> Result<(), QuestionInvalidation> {
    let len = title.trim().chars().count();
    if !(MIN_TITLE_LEN..=MAX_TITLE_LEN).contains(&len) {
        return Err(QuestionInvalidation::Title);
    }
    Ok(())
}

pub fn question_content(content: &str) -> Result<(), QuestionInvalidation> {
    let len = content.trim().chars().count();
    if !(MIN_CONTENT_LEN..=MAX_CONTENT_LEN).contains(&len) {
        return Err(QuestionInvalidation::Content);
    }
    Ok(())
}

pub fn answer_content(content: &str) -> Result<(), AnswerInvalidation> {
    let len = content.trim().chars().count();
    if !(MIN_CONTENT_LEN..=MAX_CONTENT_LEN).contains(&len) {
        return Err(AnswerInvalidation::Content);
    }
    Ok(())
}

pub fn username(username: &str) -> Result<(), UserInvalidation> {
    let len = username.chars().count();
    if !(MIN_USERNAME_LEN..=MAX_USERNAME_LEN).contains(&len) || !USERNAME_RE.is_match(username) {
        return Err(UserInvalidation::Username);
    }
    Ok(())
}

pub fn display_name(name: &str) -> Result<(), UserInvalidation> {
    let len = name.trim().chars().count();
    if len == 0 || len > MAX_NAME_LEN {
        return Err(UserInvalidation::Name);
    }
    Ok(())
}

/// Normalizes a single tag label: trimmed and lowercased.
/// Returns `None` if the result is not a valid label.
pub fn normalize_tag(label: &str) -> Option<String> {
    let label = label.trim().to_lowercase();
    if label.is_empty() || label.chars().count() > MAX_TAG_LEN || !TAG_RE.is_match(&label) {
        return None;
    }
    Some(label)
}

/// Normalizes all tag labels of a question. Duplicates collapse,
/// the original order is preserved.
pub fn normalize_tags<S: AsRef<str>>(labels: &[S]) -> Result<Vec<String>, QuestionInvalidation> {
    let mut normalized = Vec::with_capacity(labels.len());
    for label in labels {
        let label = normalize_tag(label.as_ref()).ok_or(QuestionInvalidation::TagLabel)?;
        if !normalized.contains(&label) {
            normalized.push(label);
        }
    }
    if normalized.is_empty() || normalized.len() > MAX_TAG_COUNT {
        return Err(QuestionInvalidation::TagCount);
    }
    Ok(normalized)
}
