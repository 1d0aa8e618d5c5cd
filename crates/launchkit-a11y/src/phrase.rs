//! Announcement phrases.

use launchkit_common::VoiceSettings;

/// What the selection is on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnnouncedItem {
    App { name: String },
    Folder { name: String },
    /// An empty grid slot. Nothing is spoken.
    Empty,
}

/// Substitute `name` for the placeholder in a localized format string.
///
/// Both `%@` and the positional `%1$@` are accepted. `%%` is a literal
/// percent sign.
pub fn format_phrase(format: &str, name: &str) -> String {
    let mut phrase = String::with_capacity(format.len() + name.len());
    let mut rest = format;

    while let Some(pos) = rest.find('%') {
        phrase.push_str(&rest[..pos]);
        let tail = &rest[pos..];

        if let Some(after) = tail.strip_prefix("%@") {
            phrase.push_str(name);
            rest = after;
        } else if let Some(after) = tail.strip_prefix("%1$@") {
            phrase.push_str(name);
            rest = after;
        } else if let Some(after) = tail.strip_prefix("%%") {
            phrase.push('%');
            rest = after;
        } else {
            phrase.push('%');
            rest = &tail[1..];
        }
    }

    phrase.push_str(rest);
    phrase
}

/// Phrase to speak for `item`, if any.
pub fn phrase_for(item: &AnnouncedItem, settings: &VoiceSettings) -> Option<String> {
    let phrase = match item {
        AnnouncedItem::App { name } => format_phrase(&settings.app_format, name),
        AnnouncedItem::Folder { name } => format_phrase(&settings.folder_format, name),
        AnnouncedItem::Empty => return None,
    };

    let trimmed = phrase.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_placeholders() {
        assert_eq!(format_phrase("%@", "Safari"), "Safari");
        assert_eq!(format_phrase("Folder %@", "Games"), "Folder Games");
        assert_eq!(format_phrase("文件夹 %1$@", "游戏"), "文件夹 游戏");
        assert_eq!(format_phrase("100%% %@", "Mail"), "100% Mail");
        assert_eq!(format_phrase("%d %@", "Mail"), "%d Mail");
        assert_eq!(format_phrase("no placeholder", "Mail"), "no placeholder");
    }

    #[test]
    fn test_phrase_for_items() {
        let settings = VoiceSettings::default();
        assert_eq!(
            phrase_for(&AnnouncedItem::App { name: "Notes".into() }, &settings),
            Some("Notes".to_string())
        );
        assert_eq!(
            phrase_for(&AnnouncedItem::Folder { name: "Utilities".into() }, &settings),
            Some("Folder Utilities".to_string())
        );
        assert_eq!(phrase_for(&AnnouncedItem::Empty, &settings), None);
    }

    #[test]
    fn test_blank_phrase_is_skipped() {
        let settings = VoiceSettings::default();
        assert_eq!(phrase_for(&AnnouncedItem::App { name: "  ".into() }, &settings), None);
    }
}
