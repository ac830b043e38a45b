//! Inline button payloads
//!
//! Payloads are parsed once into [`CallbackAction`]; handlers never look at
//! the raw string.

use chanlist_core::Category;

const BROWSE: &str = "browse";
const ADD: &str = "add";
const HELP: &str = "help";
const BACK: &str = "back";
const CATEGORY_PREFIX: &str = "cat_";

/// Action behind an inline button press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CallbackAction {
    /// Show the category picker
    Browse,
    /// Show the newest entries of a category
    Category(Category),
    /// Show the `/add` template
    Add,
    /// Show help
    Help,
    /// Back to the main menu
    Back,
}

impl CallbackAction {
    /// Parses callback data. Returns `None` for unknown payloads, including
    /// `cat_` followed by a label outside the fixed set.
    pub fn parse(data: &str) -> Option<Self> {
        match data {
            BROWSE => Some(Self::Browse),
            ADD => Some(Self::Add),
            HELP => Some(Self::Help),
            BACK => Some(Self::Back),
            other => other
                .strip_prefix(CATEGORY_PREFIX)
                .and_then(Category::from_label)
                .map(Self::Category),
        }
    }

    /// Callback data carried by the button.
    pub fn data(&self) -> String {
        match self {
            Self::Browse => BROWSE.to_string(),
            Self::Category(category) => format!("{}{}", CATEGORY_PREFIX, category.label()),
            Self::Add => ADD.to_string(),
            Self::Help => HELP.to_string(),
            Self::Back => BACK.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parses_fixed_payloads() {
        assert_eq!(CallbackAction::parse("browse"), Some(CallbackAction::Browse));
        assert_eq!(CallbackAction::parse("add"), Some(CallbackAction::Add));
        assert_eq!(CallbackAction::parse("help"), Some(CallbackAction::Help));
        assert_eq!(CallbackAction::parse("back"), Some(CallbackAction::Back));
    }

    #[test]
    fn test_parses_category_payload() {
        assert_eq!(
            CallbackAction::parse("cat_تقنية"),
            Some(CallbackAction::Category(Category::Technology))
        );
    }

    #[test]
    fn test_rejects_unknown_payloads() {
        assert_eq!(CallbackAction::parse("cat_سيارات"), None);
        assert_eq!(CallbackAction::parse("cat_"), None);
        assert_eq!(CallbackAction::parse("Browse"), None);
        assert_eq!(CallbackAction::parse(""), None);
    }

    #[test]
    fn test_category_payloads_fit_telegram_limit() {
        for category in Category::all() {
            let data = CallbackAction::Category(category).data();
            assert!(data.len() <= 64, "{} is {} bytes", data, data.len());
            assert_eq!(CallbackAction::parse(&data), Some(CallbackAction::Category(category)));
        }
    }

    #[test]
    fn test_data_of_fixed_actions() {
        assert_eq!(CallbackAction::Browse.data(), "browse");
        assert_eq!(CallbackAction::Back.data(), "back");
    }
}
