//! bali-flex: LINE Flex Message templates
//!
//! Typed payload tree for LINE Flex Messages plus pure builder functions.
//! Nothing in this crate performs I/O; every builder returns a fresh,
//! self-contained value that is serialized once and sent.

pub mod components;
pub mod error;
pub mod message;
pub mod templates;

pub use components::{
    Action, Bubble, Button, Carousel, Component, FlexBox, FlexContainer, Image, Layout,
    Separator, Text, MAX_CAROUSEL_BUBBLES,
};
pub use error::{FlexError, Result};
pub use message::Message;
pub use templates::{
    ActionSpec, Product, Receipt, ReceiptItem, build_bubble, build_button, build_carousel,
    confirmation_message, product_card, receipt_message,
};
