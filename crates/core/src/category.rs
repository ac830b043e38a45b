//! Fixed set of directory categories
//!
//! Labels are stored verbatim in the `category` column and typed by users in
//! `/add`, so they are data rather than translatable UI text.

use strum::{AsRefStr, Display, EnumIter, EnumString, IntoEnumIterator, IntoStaticStr};

/// One of the 12 directory categories, declared in menu order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter, IntoStaticStr, AsRefStr)]
pub enum Category {
    /// Education
    #[strum(serialize = "تعليم")]
    Education,
    /// Technology
    #[strum(serialize = "تقنية")]
    Technology,
    /// News
    #[strum(serialize = "أخبار")]
    News,
    /// Sports
    #[strum(serialize = "رياضة")]
    Sports,
    /// Entertainment
    #[strum(serialize = "ترفيه")]
    Entertainment,
    /// Books
    #[strum(serialize = "كتب")]
    Books,
    /// Earning money
    #[strum(serialize = "ربح")]
    Earning,
    /// Games
    #[strum(serialize = "ألعاب")]
    Games,
    /// Cooking
    #[strum(serialize = "طبخ")]
    Cooking,
    /// Health
    #[strum(serialize = "صحة")]
    Health,
    /// Travel
    #[strum(serialize = "سفر")]
    Travel,
    /// Design
    #[strum(serialize = "تصميم")]
    Design,
}

impl Category {
    /// Stored/displayed label
    pub fn label(self) -> &'static str {
        self.into()
    }

    /// All categories in menu order.
    pub fn all() -> impl Iterator<Item = Category> {
        Category::iter()
    }

    /// Exact label match; no trimming or case folding.
    pub fn from_label(label: &str) -> Option<Category> {
        label.parse().ok()
    }

    /// Labels joined with ", " for error messages.
    pub fn valid_labels() -> String {
        Category::all().map(Category::label).collect::<Vec<_>>().join(", ")
    }
}
