//! Reply texts and inline keyboards
//!
//! Everything here is pure so menus can be checked without a Telegram server.

use fluent_templates::fluent_bundle::FluentArgs;
use teloxide::types::{InlineKeyboardButton, InlineKeyboardMarkup};
use unic_langid::LanguageIdentifier;
use url::Url;

use chanlist_core::config::{listing, Config};
use chanlist_core::utils::truncate_chars;
use chanlist_core::{i18n, Category, ChannelEntry};

use super::callback::CallbackAction;
use super::cb;

/// Join prompt shown to users who are not subscribed.
///
/// The keyboard is `None` if the channel username does not form a valid URL.
pub fn subscribe_prompt(lang: &LanguageIdentifier, config: &Config) -> (String, Option<InlineKeyboardMarkup>) {
    let mut args = FluentArgs::new();
    args.set("channel", config.channel_username.clone());
    let text = i18n::t_args(lang, "subscribe-required", &args);

    let keyboard = match Url::parse(&config.channel_join_url()) {
        Ok(url) => Some(InlineKeyboardMarkup::new(vec![vec![InlineKeyboardButton::url(
            i18n::t(lang, "subscribe-button"),
            url,
        )]])),
        Err(e) => {
            log::warn!("Invalid channel join URL for {}: {}", config.channel_username, e);
            None
        }
    };

    (text, keyboard)
}

/// Greeting and the browse / add / help menu.
pub fn main_menu(lang: &LanguageIdentifier, first_name: &str) -> (String, InlineKeyboardMarkup) {
    let mut args = FluentArgs::new();
    args.set("name", first_name.to_string());
    let text = i18n::t_args(lang, "menu-welcome", &args);

    let keyboard = InlineKeyboardMarkup::new(vec![
        vec![cb(i18n::t(lang, "menu-browse-button"), CallbackAction::Browse.data())],
        vec![cb(i18n::t(lang, "menu-add-button"), CallbackAction::Add.data())],
        vec![cb(i18n::t(lang, "menu-help-button"), CallbackAction::Help.data())],
    ]);

    (text, keyboard)
}

/// One button per category, in menu order, then a back button.
pub fn categories_menu(lang: &LanguageIdentifier) -> (String, InlineKeyboardMarkup) {
    let mut rows: Vec<Vec<InlineKeyboardButton>> = Category::all()
        .map(|category| {
            let mut args = FluentArgs::new();
            args.set("category", category.label());
            vec![cb(
                i18n::t_args(lang, "browse-category-button", &args),
                CallbackAction::Category(category).data(),
            )]
        })
        .collect();
    rows.push(vec![cb(i18n::t(lang, "menu-back-button"), CallbackAction::Back.data())]);

    (i18n::t(lang, "browse-title"), InlineKeyboardMarkup::new(rows))
}

/// Listing of a category.
///
/// Only the first `listing::DISPLAY_LIMIT` entries are rendered. An empty
/// listing yields the empty-state text and no keyboard.
pub fn category_listing(
    lang: &LanguageIdentifier,
    category: Category,
    entries: &[ChannelEntry],
) -> (String, Option<InlineKeyboardMarkup>) {
    let mut args = FluentArgs::new();
    args.set("category", category.label());

    if entries.is_empty() {
        return (i18n::t_args(lang, "listing-empty", &args), None);
    }

    let mut text = i18n::t_args(lang, "listing-title", &args);
    text.push_str("\n\n");
    for entry in entries.iter().take(listing::DISPLAY_LIMIT) {
        let mut entry_args = FluentArgs::new();
        entry_args.set("name", entry.name.clone());
        entry_args.set(
            "description",
            truncate_chars(&entry.description, listing::DESCRIPTION_PREVIEW_CHARS).to_string(),
        );
        entry_args.set("link", entry.link.clone());
        text.push_str(&i18n::t_args(lang, "listing-entry", &entry_args));
        text.push_str("\n\n");
    }

    let keyboard = InlineKeyboardMarkup::new(vec![vec![cb(
        i18n::t(lang, "menu-back-button"),
        CallbackAction::Browse.data(),
    )]]);

    (text, Some(keyboard))
}

/// The `/add` template with an example.
pub fn add_instructions(lang: &LanguageIdentifier) -> String {
    i18n::t(lang, "add-instructions")
}

/// Static help text naming the channel.
pub fn help_text(lang: &LanguageIdentifier, config: &Config) -> String {
    let mut args = FluentArgs::new();
    args.set("channel", config.channel_username.clone());
    i18n::t_args(lang, "help-text", &args)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use teloxide::types::InlineKeyboardButtonKind;

    fn test_config() -> Config {
        Config::from_lookup(|key| (key == "BOT_TOKEN").then(|| "1:x".to_string())).unwrap()
    }

    fn callback_data(button: &InlineKeyboardButton) -> Option<&str> {
        match &button.kind {
            InlineKeyboardButtonKind::CallbackData(data) => Some(data.as_str()),
            _ => None,
        }
    }

    fn entry(id: i64, description: &str) -> ChannelEntry {
        ChannelEntry {
            id,
            user_id: 1,
            link: format!("@ch{}", id),
            name: format!("قناة {}", id),
            description: description.to_string(),
            category: "تقنية".to_string(),
            subscribers: 10,
        }
    }

    #[test]
    fn test_subscribe_prompt_links_channel() {
        let (text, keyboard) = subscribe_prompt(&i18n::default_lang(), &test_config());
        assert!(text.contains("@Channlist"));
        assert!(text.contains("/start"));

        let keyboard = keyboard.unwrap();
        match &keyboard.inline_keyboard[0][0].kind {
            InlineKeyboardButtonKind::Url(url) => assert_eq!(url.as_str(), "https://t.me/Channlist"),
            other => panic!("expected url button, got {:?}", other),
        }
    }

    #[test]
    fn test_main_menu_has_three_options() {
        let (text, keyboard) = main_menu(&i18n::default_lang(), "Sara");
        assert!(text.contains("Sara"));
        let data: Vec<&str> = keyboard.inline_keyboard.iter().filter_map(|row| callback_data(&row[0])).collect();
        assert_eq!(data, vec!["browse", "add", "help"]);
    }

    #[test]
    fn test_categories_menu_lists_all_then_back() {
        let (_, keyboard) = categories_menu(&i18n::default_lang());
        assert_eq!(keyboard.inline_keyboard.len(), 13);
        assert_eq!(callback_data(&keyboard.inline_keyboard[0][0]), Some("cat_تعليم"));
        assert_eq!(callback_data(&keyboard.inline_keyboard[11][0]), Some("cat_تصميم"));
        assert_eq!(callback_data(&keyboard.inline_keyboard[12][0]), Some("back"));
        assert_eq!(keyboard.inline_keyboard[1][0].text, "📂 تقنية");
    }

    #[test]
    fn test_empty_listing() {
        let (text, keyboard) = category_listing(&i18n::default_lang(), Category::Technology, &[]);
        assert_eq!(text, "لا توجد قنوات في تقنية حالياً\nكن أول من يضيف!");
        assert!(keyboard.is_none());
    }

    #[test]
    fn test_listing_shows_first_ten_only() {
        let entries: Vec<ChannelEntry> = (1..=20).rev().map(|id| entry(id, "desc")).collect();
        let (text, keyboard) = category_listing(&i18n::default_lang(), Category::Technology, &entries);

        assert!(text.starts_with("📋 قنوات تقنية:\n\n"));
        assert_eq!(text.matches("🔗 ").count(), 10);
        assert!(text.contains("@ch20"));
        assert!(text.contains("@ch11\n"));
        assert!(!text.contains("@ch10\n"));

        let keyboard = keyboard.unwrap();
        assert_eq!(callback_data(&keyboard.inline_keyboard[0][0]), Some("browse"));
    }

    #[test]
    fn test_listing_entry_format_truncates_description() {
        let long = "ا".repeat(80);
        let (text, _) = category_listing(&i18n::default_lang(), Category::Technology, &[entry(1, &long)]);
        let expected = format!("📢 قناة 1\n📝 {}...\n🔗 @ch1\n\n", "ا".repeat(50));
        assert!(text.ends_with(&expected), "unexpected listing: {}", text);
    }

    #[test]
    fn test_help_names_channel() {
        let text = help_text(&i18n::default_lang(), &test_config());
        assert!(text.ends_with("📢 قناتنا: @Channlist"));
    }

    #[test]
    fn test_add_instructions_contain_example() {
        let text = add_instructions(&i18n::default_lang());
        assert!(text.contains("/add @mychannel | قناتي | وصف القناة | تقنية | 1000"));
    }
}
