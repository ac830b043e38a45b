//! Parsing of `/add <link> | <name> | <description> | <category> | <subscribers>`

use std::num::ParseIntError;
use thiserror::Error;

use crate::category::Category;
use crate::storage::db::NewChannel;

/// Number of `|`-separated fields an `/add` command must carry
pub const ADD_FIELD_COUNT: usize = 5;

/// A fully validated `/add` submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddRequest {
    pub link: String,
    pub name: String,
    pub description: String,
    pub category: Category,
    pub subscribers: i64,
}

/// Why an `/add` submission was rejected. Checked in declaration order.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum AddRequestError {
    #[error("expected {ADD_FIELD_COUNT} fields, got {0}")]
    WrongFieldCount(usize),

    #[error("{0}")]
    InvalidSubscribers(#[from] ParseIntError),

    #[error("unknown category: {0}")]
    UnknownCategory(String),
}

/// Parses the argument part of an `/add` command (everything after the command itself).
///
/// Fields are split on `|` and trimmed; empty fields are accepted.
pub fn parse_add_args(args: &str) -> Result<AddRequest, AddRequestError> {
    let parts: Vec<&str> = args.split('|').map(str::trim).collect();

    let [link, name, description, category, subscribers] = parts.as_slice() else {
        return Err(AddRequestError::WrongFieldCount(parts.len()));
    };

    let subscribers: i64 = ascii_digits(subscribers).parse()?;

    let category = Category::from_label(category).ok_or_else(|| AddRequestError::UnknownCategory(category.to_string()))?;

    Ok(AddRequest {
        link: link.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        category,
        subscribers,
    })
}

/// Maps Arabic-Indic (U+0660..U+0669) and Extended Arabic-Indic (U+06F0..U+06F9)
/// digits to ASCII; everything else is kept as typed.
fn ascii_digits(text: &str) -> String {
    text.chars()
        .map(|c| match c {
            '\u{0660}'..='\u{0669}' => char::from_digit(u32::from(c) - 0x0660, 10).unwrap_or(c),
            '\u{06F0}'..='\u{06F9}' => char::from_digit(u32::from(c) - 0x06F0, 10).unwrap_or(c),
            _ => c,
        })
        .collect()
}

impl AddRequest {
    /// Converts the request into an insert payload attributed to `submitter_id`.
    pub fn into_new_channel(self, submitter_id: i64) -> NewChannel {
        NewChannel {
            user_id: submitter_id,
            link: self.link,
            name: self.name,
            description: self.description,
            category: self.category,
            subscribers: self.subscribers,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parses_example_submission() {
        let request = parse_add_args("@mychannel | قناتي | وصف القناة | تقنية | 1000").unwrap();
        assert_eq!(
            request,
            AddRequest {
                link: "@mychannel".to_string(),
                name: "قناتي".to_string(),
                description: "وصف القناة".to_string(),
                category: Category::Technology,
                subscribers: 1000,
            }
        );
    }

    #[test]
    fn test_fields_are_trimmed() {
        let request = parse_add_args("  @a|b  |  c d |كتب|   7  ").unwrap();
        assert_eq!(request.link, "@a");
        assert_eq!(request.name, "b");
        assert_eq!(request.description, "c d");
        assert_eq!(request.category, Category::Books);
        assert_eq!(request.subscribers, 7);
    }

    #[test]
    fn test_four_fields_rejected() {
        let err = parse_add_args("@a | name | desc | تقنية").unwrap_err();
        assert_eq!(err, AddRequestError::WrongFieldCount(4));
    }

    #[test]
    fn test_six_fields_rejected() {
        let err = parse_add_args("@a | name | desc | تقنية | 10 | extra").unwrap_err();
        assert_eq!(err, AddRequestError::WrongFieldCount(6));
    }

    #[test]
    fn test_empty_args_rejected_as_wrong_count() {
        assert_eq!(parse_add_args("").unwrap_err(), AddRequestError::WrongFieldCount(1));
    }

    #[test]
    fn test_non_numeric_subscribers_rejected() {
        let err = parse_add_args("@a | name | desc | تقنية | many").unwrap_err();
        assert!(matches!(err, AddRequestError::InvalidSubscribers(_)));
        assert!(!err.to_string().is_empty());
    }

    #[test]
    fn test_arabic_indic_subscribers_accepted() {
        let request = parse_add_args("@a | قناتي | وصف | تقنية | ١٠٠٠").unwrap();
        assert_eq!(request.subscribers, 1000);

        let request = parse_add_args("@b | قناتي | وصف | تقنية | ۲۵").unwrap();
        assert_eq!(request.subscribers, 25);
    }

    #[test]
    fn test_mixed_digits_with_letters_still_rejected() {
        let err = parse_add_args("@a | name | desc | تقنية | ١٠x").unwrap_err();
        assert!(matches!(err, AddRequestError::InvalidSubscribers(_)));
    }

    #[test]
    fn test_count_checked_before_category() {
        let err = parse_add_args("@a | name | desc | سيارات | many").unwrap_err();
        assert!(matches!(err, AddRequestError::InvalidSubscribers(_)));
    }

    #[test]
    fn test_unknown_category_rejected() {
        let err = parse_add_args("@a | name | desc | سيارات | 10").unwrap_err();
        assert_eq!(err, AddRequestError::UnknownCategory("سيارات".to_string()));
    }

    #[test]
    fn test_into_new_channel_keeps_fields() {
        let channel = parse_add_args("@a | n | d | سفر | 3").unwrap().into_new_channel(42);
        assert_eq!(channel.user_id, 42);
        assert_eq!(channel.link, "@a");
        assert_eq!(channel.category, Category::Travel);
        assert_eq!(channel.subscribers, 3);
    }
}
