//! Flex Message component tree
//!
//! Every node serializes with its own `type` tag, so containers and
//! components can be nested freely (a bubble inside a carousel carries
//! `"type": "bubble"` just like a top-level one).

use serde::Serialize;

use crate::error::{FlexError, Result};

/// LINE rejects carousels with more bubbles than this
pub const MAX_CAROUSEL_BUBBLES: usize = 12;

/// Top-level flex container
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum FlexContainer {
    Bubble(Bubble),
    Carousel(Carousel),
}

impl FlexContainer {
    /// Number of bubbles this container renders
    pub fn bubble_count(&self) -> usize {
        match self {
            Self::Bubble(_) => 1,
            Self::Carousel(c) => c.len(),
        }
    }
}

impl From<Bubble> for FlexContainer {
    fn from(bubble: Bubble) -> Self {
        Self::Bubble(bubble)
    }
}

impl From<Carousel> for FlexContainer {
    fn from(carousel: Carousel) -> Self {
        Self::Carousel(carousel)
    }
}

/// A single card
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(tag = "type", rename = "bubble")]
pub struct Bubble {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub header: Option<FlexBox>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hero: Option<Image>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<FlexBox>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub footer: Option<FlexBox>,
}

impl Bubble {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn header(mut self, header: FlexBox) -> Self {
        self.header = Some(header);
        self
    }

    pub fn hero(mut self, hero: Image) -> Self {
        self.hero = Some(hero);
        self
    }

    pub fn body(mut self, body: FlexBox) -> Self {
        self.body = Some(body);
        self
    }

    pub fn footer(mut self, footer: FlexBox) -> Self {
        self.footer = Some(footer);
        self
    }
}

/// Horizontally swipeable set of bubbles
///
/// Only constructible through [`Carousel::new`], which enforces
/// `1..=MAX_CAROUSEL_BUBBLES` bubbles.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename = "carousel")]
pub struct Carousel {
    contents: Vec<Bubble>,
}

impl Carousel {
    /// Build a carousel, rejecting empty or oversized bubble lists
    pub fn new(bubbles: Vec<Bubble>) -> Result<Self> {
        if bubbles.is_empty() {
            return Err(FlexError::EmptyCarousel);
        }
        if bubbles.len() > MAX_CAROUSEL_BUBBLES {
            return Err(FlexError::TooManyBubbles {
                got: bubbles.len(),
                max: MAX_CAROUSEL_BUBBLES,
            });
        }
        Ok(Self { contents: bubbles })
    }

    pub fn bubbles(&self) -> &[Bubble] {
        &self.contents
    }

    pub fn len(&self) -> usize {
        self.contents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contents.is_empty()
    }
}

/// Any node that may appear inside a box
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Component {
    Box(FlexBox),
    Text(Text),
    Image(Image),
    Separator(Separator),
    Button(Button),
}

impl From<FlexBox> for Component {
    fn from(v: FlexBox) -> Self {
        Self::Box(v)
    }
}

impl From<Text> for Component {
    fn from(v: Text) -> Self {
        Self::Text(v)
    }
}

impl From<Image> for Component {
    fn from(v: Image) -> Self {
        Self::Image(v)
    }
}

impl From<Separator> for Component {
    fn from(v: Separator) -> Self {
        Self::Separator(v)
    }
}

impl From<Button> for Component {
    fn from(v: Button) -> Self {
        Self::Button(v)
    }
}

/// Box layout direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Layout {
    Vertical,
    Horizontal,
    Baseline,
}

/// Layout box
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename = "box", rename_all = "camelCase")]
pub struct FlexBox {
    pub layout: Layout,
    pub contents: Vec<Component>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spacing: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub margin: Option<String>,
}

impl FlexBox {
    pub fn new(layout: Layout, contents: Vec<Component>) -> Self {
        Self {
            layout,
            contents,
            spacing: None,
            margin: None,
        }
    }

    pub fn vertical(contents: Vec<Component>) -> Self {
        Self::new(Layout::Vertical, contents)
    }

    pub fn horizontal(contents: Vec<Component>) -> Self {
        Self::new(Layout::Horizontal, contents)
    }

    pub fn baseline(contents: Vec<Component>) -> Self {
        Self::new(Layout::Baseline, contents)
    }

    pub fn spacing(mut self, spacing: impl Into<String>) -> Self {
        self.spacing = Some(spacing.into());
        self
    }

    pub fn margin(mut self, margin: impl Into<String>) -> Self {
        self.margin = Some(margin.into());
        self
    }
}

/// Text node
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename = "text")]
pub struct Text {
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wrap: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub margin: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flex: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub align: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style: Option<String>,
}

impl Text {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            size: None,
            weight: None,
            color: None,
            wrap: None,
            margin: None,
            flex: None,
            align: None,
            style: None,
        }
    }

    pub fn size(mut self, size: impl Into<String>) -> Self {
        self.size = Some(size.into());
        self
    }

    pub fn bold(mut self) -> Self {
        self.weight = Some("bold".to_string());
        self
    }

    pub fn color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    pub fn wrap(mut self) -> Self {
        self.wrap = Some(true);
        self
    }

    pub fn margin(mut self, margin: impl Into<String>) -> Self {
        self.margin = Some(margin.into());
        self
    }

    pub fn flex(mut self, flex: u32) -> Self {
        self.flex = Some(flex);
        self
    }

    pub fn align(mut self, align: impl Into<String>) -> Self {
        self.align = Some(align.into());
        self
    }

    pub fn italic(mut self) -> Self {
        self.style = Some("italic".to_string());
        self
    }
}

/// Image node
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename = "image", rename_all = "camelCase")]
pub struct Image {
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aspect_ratio: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aspect_mode: Option<String>,
}

impl Image {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            size: None,
            aspect_ratio: None,
            aspect_mode: None,
        }
    }

    /// Full-width 20:13 cover image, the usual bubble hero
    pub fn hero(url: impl Into<String>) -> Self {
        Self::new(url).size("full").aspect_ratio("20:13").aspect_mode("cover")
    }

    pub fn size(mut self, size: impl Into<String>) -> Self {
        self.size = Some(size.into());
        self
    }

    pub fn aspect_ratio(mut self, ratio: impl Into<String>) -> Self {
        self.aspect_ratio = Some(ratio.into());
        self
    }

    pub fn aspect_mode(mut self, mode: impl Into<String>) -> Self {
        self.aspect_mode = Some(mode.into());
        self
    }
}

/// Separator line
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(tag = "type", rename = "separator")]
pub struct Separator {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub margin: Option<String>,
}

impl Separator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn margin(mut self, margin: impl Into<String>) -> Self {
        self.margin = Some(margin.into());
        self
    }
}

/// Button node
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename = "button")]
pub struct Button {
    pub action: Action,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub margin: Option<String>,
}

impl Button {
    pub fn new(action: Action) -> Self {
        Self {
            action,
            style: None,
            height: None,
            margin: None,
        }
    }

    pub fn style(mut self, style: impl Into<String>) -> Self {
        self.style = Some(style.into());
        self
    }

    pub fn height(mut self, height: impl Into<String>) -> Self {
        self.height = Some(height.into());
        self
    }

    pub fn margin(mut self, margin: impl Into<String>) -> Self {
        self.margin = Some(margin.into());
        self
    }
}

/// Button action
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Action {
    Postback {
        label: String,
        data: String,
        #[serde(rename = "displayText", skip_serializing_if = "Option::is_none")]
        display_text: Option<String>,
    },
    Uri {
        label: String,
        uri: String,
    },
}

impl Action {
    pub fn postback(label: impl Into<String>, data: impl Into<String>) -> Self {
        Self::Postback {
            label: label.into(),
            data: data.into(),
            display_text: None,
        }
    }

    pub fn uri(label: impl Into<String>, uri: impl Into<String>) -> Self {
        Self::Uri {
            label: label.into(),
            uri: uri.into(),
        }
    }
}
