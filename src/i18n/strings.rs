/// Built-in user-facing strings for page chrome.
///
/// These stand in for the translation runtime's `t(key)` lookup. Content
/// files may override the fallback notice with their own `fallbackNotice`.
#[derive(Debug, Clone)]
pub struct UiStrings {
    /// Locale these strings are written in
    pub locale: &'static str,

    // ==================== Fallback ====================
    /// Notice shown when the displayed content is not in the requested locale
    pub fallback_notice: &'static str,

    // ==================== Chrome ====================
    /// Skip link at the top of every page
    pub skip_to_content: &'static str,

    // ==================== Resources Page ====================
    /// Hero title used when resources content is missing entirely
    pub resources_title: &'static str,

    /// Heading above the post list
    pub posts_heading: &'static str,

    /// Shown when the CMS returns no posts
    pub empty_posts: &'static str,
}

// ==================== English Strings ====================

pub const ENGLISH_STRINGS: UiStrings = UiStrings {
    locale: "en-GB",

    fallback_notice: "This page is not yet available in your language, so we are showing it in another language.",

    skip_to_content: "Skip to content",

    resources_title: "Resources",
    posts_heading: "Latest articles",
    empty_posts: "No articles yet. Check back soon.",
};

// ==================== Traditional Chinese Strings ====================

pub const TRADITIONAL_CHINESE_STRINGS: UiStrings = UiStrings {
    locale: "zh-TW",

    fallback_notice: "此頁面尚未提供您所選的語言版本，目前顯示其他語言的內容。",

    skip_to_content: "跳至主要內容",

    resources_title: "資源",
    posts_heading: "最新文章",
    empty_posts: "目前尚無文章，敬請期待。",
};

impl UiStrings {
    /// Strings for a locale, English when no translation exists.
    pub fn for_locale(code: &str) -> &'static UiStrings {
        match code {
            "zh-TW" | "zh-HK" | "zh-Hant" | "zh-Hant-TW" | "zh" => &TRADITIONAL_CHINESE_STRINGS,
            _ => &ENGLISH_STRINGS,
        }
    }
}
