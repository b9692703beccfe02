//! 静的な案内コンテンツ
//!
//! リッチメニューとキーワードに対応するカードを組み立てます。
//! どのビルダーも `ContentContext` だけを参照し、同じ入力には同じ
//! ペイロードを返します。

pub mod areas;
pub mod bali;
pub mod booking;
pub mod company;
pub mod investment;
pub mod partners;

use bali_flex::{Bubble, Component, FlexBox, Image, Separator, Text};

/// Accent color of card titles
pub const ACCENT_COLOR: &str = "#1DB446";
/// Color of subtitles and notes
pub const MUTED_COLOR: &str = "#666666";
/// Color of the closing contact line
pub const FAINT_COLOR: &str = "#999999";

/// Values the static cards depend on
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentContext {
    /// Public URL of the server, no trailing slash
    pub base_url: String,
    /// 視察予約フォームの URL
    pub booking_form_url: String,
    /// 画像 URL に付けるキャッシュ対策のバージョン
    pub asset_version: Option<String>,
}

impl ContentContext {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            booking_form_url: "https://forms.google.com".to_string(),
            asset_version: None,
        }
    }

    pub fn with_booking_form_url(mut self, url: impl Into<String>) -> Self {
        self.booking_form_url = url.into();
        self
    }

    pub fn with_asset_version(mut self, version: Option<String>) -> Self {
        self.asset_version = version.filter(|v| !v.is_empty());
        self
    }

    /// Public URL of a file under `/images`
    pub fn image_url(&self, file: &str) -> String {
        match &self.asset_version {
            Some(version) => format!("{}/images/{}?v={}", self.base_url, file, version),
            None => format!("{}/images/{}", self.base_url, file),
        }
    }
}

pub(crate) fn title(text: &str, size: &str) -> Component {
    Text::new(text).bold().size(size).color(ACCENT_COLOR).into()
}

pub(crate) fn subtitle(text: &str) -> Component {
    Text::new(text)
        .size("sm")
        .color(MUTED_COLOR)
        .wrap()
        .margin("sm")
        .into()
}

pub(crate) fn heading(text: &str) -> Component {
    Text::new(text).bold().size("md").margin("md").into()
}

pub(crate) fn paragraph(text: &str) -> Component {
    Text::new(text).wrap().size("sm").margin("sm").into()
}

/// Italic closing line under a section
pub(crate) fn note(text: &str) -> Component {
    Text::new(text)
        .wrap()
        .size("xs")
        .color(MUTED_COLOR)
        .margin("sm")
        .italic()
        .into()
}

pub(crate) fn contact_line() -> Component {
    Text::new("詳細はお問い合わせください")
        .wrap()
        .size("xs")
        .color(FAINT_COLOR)
        .margin("md")
        .into()
}

pub(crate) fn divider() -> Component {
    Separator::new().margin("md").into()
}

/// Body-only card, with a hero image when `hero` is set
pub(crate) fn card(hero: Option<String>, contents: Vec<Component>) -> Bubble {
    let bubble = Bubble::new().body(FlexBox::vertical(contents));
    match hero {
        Some(url) => bubble.hero(Image::hero(url)),
        None => bubble,
    }
}
