//! Reusable flex templates
//!
//! Generic bubble, carousel, product card, confirmation and receipt
//! layouts. All functions are pure: identical input gives an identical
//! payload.

use crate::components::{
    Action, Bubble, Button, Carousel, Component, FlexBox, Image, Separator, Text,
};
use crate::error::Result;
use crate::message::Message;

/// Description of a button to render
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionSpec {
    pub action: Action,
    /// Button style; `primary` when unset
    pub style: Option<String>,
}

impl ActionSpec {
    pub fn postback(label: impl Into<String>, data: impl Into<String>) -> Self {
        Self {
            action: Action::postback(label, data),
            style: None,
        }
    }

    pub fn uri(label: impl Into<String>, uri: impl Into<String>) -> Self {
        Self {
            action: Action::uri(label, uri),
            style: None,
        }
    }

    /// Set the postback display text; ignored for other action kinds
    pub fn display_text(mut self, text: impl Into<String>) -> Self {
        if let Action::Postback { display_text, .. } = &mut self.action {
            *display_text = Some(text.into());
        }
        self
    }

    pub fn style(mut self, style: impl Into<String>) -> Self {
        self.style = Some(style.into());
        self
    }
}

/// Product shown in a catalog card
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Product {
    pub name: String,
    pub price: String,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub actions: Vec<ActionSpec>,
}

/// Receipt line item
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReceiptItem {
    pub name: String,
    pub price: String,
}

/// Receipt contents
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Receipt {
    pub store_name: String,
    pub order_number: String,
    pub items: Vec<ReceiptItem>,
    pub total: String,
}

/// Render a button component
pub fn build_button(spec: &ActionSpec) -> Component {
    Button::new(spec.action.clone())
        .style(spec.style.clone().unwrap_or_else(|| "primary".to_string()))
        .height("sm")
        .into()
}

/// Title/body bubble with an optional row of buttons
///
/// The header is omitted for an empty title and the footer for an empty
/// action list.
pub fn build_bubble(title: &str, body: &str, actions: &[ActionSpec]) -> Message {
    let mut bubble = Bubble::new().body(FlexBox::vertical(vec![Text::new(body).wrap().into()]));

    if !title.is_empty() {
        bubble = bubble.header(FlexBox::vertical(vec![
            Text::new(title).bold().size("xl").wrap().into(),
        ]));
    }

    if !actions.is_empty() {
        bubble = bubble.footer(
            FlexBox::vertical(actions.iter().map(build_button).collect()).spacing("sm"),
        );
    }

    let alt_text = if title.is_empty() { "Flex Message" } else { title };
    Message::flex(alt_text, bubble)
}

/// Wrap bubbles into a carousel message
pub fn build_carousel(alt_text: &str, bubbles: Vec<Bubble>) -> Result<Message> {
    let carousel = Carousel::new(bubbles)?;
    let alt_text = if alt_text.is_empty() { "Carousel" } else { alt_text };
    Ok(Message::flex(alt_text, carousel))
}

fn labelled_row(label: &str, value: &str) -> Component {
    FlexBox::baseline(vec![
        Text::new(label).color("#aaaaaa").size("sm").flex(1).into(),
        Text::new(value).wrap().color("#666666").size("sm").flex(5).into(),
    ])
    .spacing("sm")
    .into()
}

/// Product card bubble
pub fn product_card(product: &Product) -> Bubble {
    let mut rows = vec![labelled_row("Price", &product.price)];
    if let Some(description) = &product.description {
        rows.push(labelled_row("Description", description));
    }

    let mut bubble = Bubble::new()
        .body(FlexBox::vertical(vec![
            Text::new(&product.name).bold().size("xl").wrap().into(),
            FlexBox::vertical(rows).margin("lg").spacing("sm").into(),
        ]))
        .footer(
            FlexBox::vertical(product.actions.iter().map(build_button).collect()).spacing("sm"),
        );

    if let Some(url) = &product.image_url {
        bubble = bubble.hero(Image::hero(url));
    }

    bubble
}

/// Two-button confirmation prompt; cancel on the left, confirm on the right
pub fn confirmation_message(
    title: &str,
    message: &str,
    confirm: &ActionSpec,
    cancel: &ActionSpec,
) -> Message {
    let button = |spec: &ActionSpec, fallback_label: &str, style: &str| -> Component {
        let action = match &spec.action {
            Action::Postback {
                label,
                data,
                display_text,
            } if label.is_empty() => Action::Postback {
                label: fallback_label.to_string(),
                data: data.clone(),
                display_text: display_text.clone(),
            },
            other => other.clone(),
        };
        Button::new(action).style(style).height("sm").into()
    };

    let bubble = Bubble::new()
        .body(
            FlexBox::vertical(vec![
                Text::new(title).bold().size("lg").wrap().into(),
                Text::new(message).wrap().color("#666666").into(),
            ])
            .spacing("md"),
        )
        .footer(
            FlexBox::horizontal(vec![
                button(cancel, "Cancel", "secondary"),
                button(confirm, "Confirm", "primary"),
            ])
            .spacing("sm"),
        );

    let alt_text = if title.is_empty() { "Confirmation" } else { title };
    Message::flex(alt_text, bubble)
}

/// Receipt bubble with item lines and a total
pub fn receipt_message(receipt: &Receipt) -> Message {
    let items: Vec<Component> = receipt
        .items
        .iter()
        .map(|item| {
            FlexBox::horizontal(vec![
                Text::new(&item.name).size("sm").color("#555555").flex(3).into(),
                Text::new(&item.price)
                    .size("sm")
                    .color("#111111")
                    .align("end")
                    .flex(1)
                    .into(),
            ])
            .into()
        })
        .collect();

    let bubble = Bubble::new().body(FlexBox::vertical(vec![
        Text::new("RECEIPT").bold().color("#1DB446").size("sm").into(),
        Text::new(&receipt.store_name).bold().size("xxl").margin("md").into(),
        Text::new(&receipt.order_number).size("xs").color("#aaaaaa").wrap().into(),
        Separator::new().margin("xxl").into(),
        FlexBox::vertical(items).margin("xxl").spacing("sm").into(),
        Separator::new().margin("xxl").into(),
        FlexBox::horizontal(vec![
            Text::new("TOTAL").size("sm").color("#555555").into(),
            Text::new(&receipt.total)
                .size("sm")
                .color("#111111")
                .align("end")
                .into(),
        ])
        .margin("xxl")
        .into(),
    ]));

    Message::flex("Receipt", bubble)
}
