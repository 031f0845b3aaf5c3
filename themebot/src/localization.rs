//! User-facing texts (English only). MarkdownV2 messages are escaped here, so callers send them as is.

use teloxide::utils::markdown::{bold, code_inline, escape, link};
use themebot_core::Reply;

fn about(intro: &str, editor_url: &str) -> String {
    format!(
        "{}{}{}{}{}",
        escape(intro),
        link(editor_url, &escape(".attheme editor")),
        escape(". Just send me an "),
        code_inline(".attheme"),
        escape(" file, and I will send you the link to open it."),
    )
}

pub fn start_message(editor_url: &str) -> Reply {
    Reply::markdown(about(
        "Hello! I'm a bot that makes it easier to open themes in ",
        editor_url,
    ))
}

pub fn help_message(editor_url: &str) -> Reply {
    Reply::markdown(about(
        "I'm a bot that makes it easier to open themes in ",
        editor_url,
    ))
}

pub fn wrong_file_type() -> Reply {
    Reply::markdown(format!(
        "{}{}{}",
        escape("Hmm, looks like you sent a wrong file — I only know how to work with "),
        code_inline(".attheme"),
        escape(" files."),
    ))
}

pub fn open_theme_button(theme_name: &str) -> String {
    format!("Open {} in the editor", theme_name)
}

pub fn theme_uploaded() -> Reply {
    Reply::markdown(format!(
        "{}{}{}",
        escape("The theme is ready to be opened in the editor! Just tap the button below.\n\n"),
        bold("Warning:"),
        escape(" Once you use the link, it expires and can't be used anymore."),
    ))
}

pub fn theme_is_empty() -> Reply {
    Reply::plain("Oops, your theme is empty, Telegram doesn't allow such ones.")
}

pub fn theme_file_caption() -> &'static str {
    "Here you go!"
}

pub fn theme_already_downloaded() -> Reply {
    Reply::plain("Hmm. Looks like the theme has already been downloaded.")
}

#[cfg(test)]
mod tests {
    use super::*;
    use themebot_core::ParseMode;

    #[test]
    fn test_start_message_links_editor() {
        let reply = start_message("https://editor.test");
        assert_eq!(reply.parse_mode, ParseMode::MarkdownV2);
        assert!(reply.text.starts_with("Hello\\! I'm a bot"));
        assert!(reply.text.contains("(https://editor.test)"));
        assert!(reply.text.contains("`.attheme`"));
    }

    #[test]
    fn test_help_differs_from_start_only_in_greeting() {
        let start = start_message("https://editor.test").text;
        let help = help_message("https://editor.test").text;
        assert!(help.starts_with("I'm a bot"));
        assert!(start.ends_with(&help[help.find("makes").unwrap_or(0)..]));
    }

    #[test]
    fn test_theme_uploaded_escapes_punctuation() {
        let reply = theme_uploaded();
        assert!(reply.text.contains("editor\\!"));
        assert!(reply.text.contains("*Warning:*"));
        assert!(reply.text.ends_with("anymore\\."));
    }

    #[test]
    fn test_plain_messages() {
        assert_eq!(theme_is_empty().parse_mode, ParseMode::Plain);
        assert_eq!(theme_already_downloaded().parse_mode, ParseMode::Plain);
        assert_eq!(open_theme_button("Night"), "Open Night in the editor");
    }
}
