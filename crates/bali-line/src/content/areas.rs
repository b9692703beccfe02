//! 不動産エリア選択

use bali_flex::{ActionSpec, Bubble, FlexBox, Message, Result, Text, build_button};

use super::{ContentContext, MUTED_COLOR};
use crate::property::areas::AREAS;

pub const ALT_TEXT: &str = "不動産エリア選択";

/// Postback data that triggers a lookup for `code`
pub fn area_postback(code: &str) -> String {
    format!("area={}", code)
}

/// エリア選択カード
///
/// One button per known area, each posting `area=<code>`.
pub fn property_list(_ctx: &ContentContext) -> Result<Message> {
    let buttons = AREAS
        .iter()
        .map(|area| build_button(&ActionSpec::postback(area.display_name, area_postback(area.code))))
        .collect();

    let bubble = Bubble::new()
        .body(FlexBox::vertical(vec![
            Text::new("不動産エリア選択").bold().size("xl").into(),
            Text::new("ご希望のエリアをお選びください")
                .size("sm")
                .color(MUTED_COLOR)
                .wrap()
                .margin("md")
                .into(),
        ]))
        .footer(FlexBox::vertical(buttons).spacing("sm"));

    Ok(Message::flex(ALT_TEXT, bubble))
}
