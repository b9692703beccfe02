//! Template and product catalog demo bot
//!
//! Shows every generic template: bubble with buttons, product carousel,
//! confirmation and receipt.

use async_trait::async_trait;
use bali_flex::{
    ActionSpec, Message, Product, Receipt, ReceiptItem, build_bubble, build_carousel,
    confirmation_message, product_card, receipt_message,
};
use url::form_urlencoded;

use crate::error::Result;
use crate::responder::{Reply, Responder, echo};

const PRODUCT_IMAGE: &str = "https://via.placeholder.com/300x200";

#[derive(Debug, Clone, Default)]
pub struct CatalogBot;

impl CatalogBot {
    pub fn new() -> Self {
        Self
    }

    fn help() -> Message {
        build_bubble(
            "Help Menu",
            "Here are the available commands:\n\n• help - Show this help menu\n• menu - Show main menu\n• product - Show product catalog\n• receipt - Show sample receipt",
            &[
                ActionSpec::postback("Main Menu", "action=menu").display_text("menu"),
                ActionSpec::postback("Products", "action=products").display_text("product"),
            ],
        )
    }

    fn menu() -> Message {
        build_bubble(
            "Main Menu",
            "What would you like to do today?",
            &[
                ActionSpec::postback("View Products", "action=products").style("primary"),
                ActionSpec::postback("Check Order", "action=order_status").style("primary"),
                ActionSpec::postback("Contact Support", "action=support").style("secondary"),
            ],
        )
    }

    fn products() -> Result<Message> {
        let catalog = [
            ("a", "$29.99", "High quality product"),
            ("b", "$39.99", "Premium product"),
            ("c", "$19.99", "Budget friendly option"),
        ];

        let bubbles = catalog
            .iter()
            .map(|(id, price, description)| {
                product_card(&Product {
                    name: format!("Product {}", id.to_uppercase()),
                    price: price.to_string(),
                    description: Some(description.to_string()),
                    image_url: Some(PRODUCT_IMAGE.to_string()),
                    actions: vec![
                        ActionSpec::postback("Buy Now", format!("action=buy&product={}", id)),
                        ActionSpec::postback("Details", format!("action=detail&product={}", id))
                            .style("secondary"),
                    ],
                })
            })
            .collect();

        Ok(build_carousel("Product Catalog", bubbles)?)
    }

    fn receipt() -> Message {
        let item = |name: &str, price: &str| ReceiptItem {
            name: name.to_string(),
            price: price.to_string(),
        };
        receipt_message(&Receipt {
            store_name: "LINE Bot Store".to_string(),
            order_number: "Order #123456".to_string(),
            items: vec![
                item("Product A", "$29.99"),
                item("Product B", "$39.99"),
                item("Shipping", "$5.00"),
            ],
            total: "$74.98".to_string(),
        })
    }
}

/// `action` and `product` of form-encoded postback data
fn parse_postback(data: &str) -> (Option<String>, Option<String>) {
    let mut action = None;
    let mut product = None;
    for (key, value) in form_urlencoded::parse(data.as_bytes()) {
        match key.as_ref() {
            "action" if action.is_none() => action = Some(value.into_owned()),
            "product" if product.is_none() => product = Some(value.into_owned()),
            _ => {}
        }
    }
    (action, product)
}

#[async_trait]
impl Responder for CatalogBot {
    async fn on_text(&self, text: &str) -> Result<Reply> {
        let lower = text.to_lowercase();

        let message = if lower == "help" || lower == "ヘルプ" {
            Self::help()
        } else if lower == "menu" || lower == "メニュー" {
            Self::menu()
        } else if lower.contains("product") || lower.contains("商品") {
            Self::products()?
        } else if lower == "receipt" || lower == "レシート" {
            Self::receipt()
        } else {
            return Ok(echo(text));
        };

        Ok(vec![message])
    }

    async fn on_postback(&self, data: &str) -> Result<Reply> {
        let (action, product) = parse_postback(data);
        let product_raw = product.unwrap_or_default();
        let product = product_raw.to_uppercase();

        let message = match action.as_deref() {
            Some("menu") => Self::menu(),
            Some("products") => Self::products()?,
            Some("buy") => confirmation_message(
                "Confirm Purchase",
                &format!("Are you sure you want to buy Product {}?", product),
                &ActionSpec::postback(
                    "Yes, Buy Now",
                    format!("action=confirm_buy&product={}", product_raw),
                )
                .display_text("Confirm purchase"),
                &ActionSpec::postback("Cancel", "action=cancel").display_text("Cancel"),
            ),
            Some("confirm_buy") => Message::text(format!(
                "Thank you for your purchase! Product {} has been ordered.",
                product
            )),
            Some("detail") => Message::text(format!("Showing details for Product {}...", product)),
            Some("order_status") => {
                Message::text("Your order #123456 is being processed and will be shipped soon!")
            }
            Some("support") => Message::text(
                "Our support team is available 24/7. Please describe your issue and we will help you!",
            ),
            Some("cancel") => Message::text("Action cancelled."),
            _ => Message::text("Unknown action. Please try again."),
        };

        Ok(vec![message])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::responder::ECHO_PREFIX;
    use bali_flex::FlexContainer;

    #[tokio::test]
    async fn test_text_commands() {
        let bot = CatalogBot::new();

        let help = bot.on_text("HELP").await.unwrap();
        assert_eq!(serde_json::to_value(&help[0]).unwrap()["altText"], "Help Menu");

        let menu = bot.on_text("メニュー").await.unwrap();
        assert_eq!(serde_json::to_value(&menu[0]).unwrap()["altText"], "Main Menu");

        let products = bot.on_text("show me Products").await.unwrap();
        assert!(matches!(products[0].as_flex(), Some(FlexContainer::Carousel(c)) if c.len() == 3));

        let receipt = bot.on_text("receipt").await.unwrap();
        assert!(receipt[0].as_flex().is_some());
    }

    #[tokio::test]
    async fn test_other_text_is_echoed() {
        let reply = CatalogBot::new().on_text("receipt please").await.unwrap();
        assert_eq!(
            reply[0].as_text(),
            Some(format!("{}receipt please", ECHO_PREFIX).as_str())
        );
    }

    #[tokio::test]
    async fn test_buy_asks_for_confirmation() {
        let reply = CatalogBot::new()
            .on_postback("action=buy&product=b")
            .await
            .unwrap();
        let json = serde_json::to_value(&reply[0]).unwrap();
        let body = json["contents"]["body"]["contents"][1]["text"].as_str().unwrap();
        assert_eq!(body, "Are you sure you want to buy Product B?");
        assert_eq!(
            json["contents"]["footer"]["contents"][1]["action"]["data"],
            "action=confirm_buy&product=b"
        );
    }

    #[tokio::test]
    async fn test_postback_texts() {
        let bot = CatalogBot::new();
        let text = |data: &'static str| {
            let bot = bot.clone();
            async move { bot.on_postback(data).await.unwrap()[0].as_text().map(str::to_string) }
        };

        assert_eq!(
            text("action=confirm_buy&product=a").await.as_deref(),
            Some("Thank you for your purchase! Product A has been ordered.")
        );
        assert_eq!(
            text("product=c&action=detail").await.as_deref(),
            Some("Showing details for Product C...")
        );
        assert_eq!(text("action=cancel").await.as_deref(), Some("Action cancelled."));
        assert_eq!(
            text("action=refund").await.as_deref(),
            Some("Unknown action. Please try again.")
        );
        assert_eq!(
            text("garbage").await.as_deref(),
            Some("Unknown action. Please try again.")
        );
    }

    #[test]
    fn test_parse_postback_decodes_values() {
        assert_eq!(
            parse_postback("action=buy&product=a%20b"),
            (Some("buy".to_string()), Some("a b".to_string()))
        );
        assert_eq!(parse_postback(""), (None, None));
    }
}
