//! 物件視察予約

use bali_flex::{ActionSpec, Bubble, FlexBox, Message, Result, Text, build_button};

use super::{ContentContext, MUTED_COLOR, divider};

pub const ALT_TEXT: &str = "視察予約";

/// 視察予約カード; the button opens the booking form
pub fn inspection_booking(ctx: &ContentContext) -> Result<Message> {
    let bubble = Bubble::new()
        .body(FlexBox::vertical(vec![
            Text::new("物件視察予約").bold().size("xl").into(),
            Text::new("バリ島の物件を実際にご覧いただけます")
                .size("sm")
                .color(MUTED_COLOR)
                .wrap()
                .margin("md")
                .into(),
            divider(),
            Text::new("視察内容:").bold().size("sm").margin("md").into(),
            Text::new("• 希望エリアの物件案内\n• 現地スタッフによる説明\n• 投資相談\n• 空港送迎サービス")
                .wrap()
                .size("sm")
                .margin("sm")
                .into(),
        ]))
        .footer(FlexBox::vertical(vec![build_button(&ActionSpec::uri(
            "予約フォームへ",
            ctx.booking_form_url.as_str(),
        ))]));

    Ok(Message::flex(ALT_TEXT, bubble))
}
