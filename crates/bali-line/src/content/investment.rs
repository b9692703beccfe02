//! 投資案件 (バイク・車レンタル事業)

use bali_flex::{Component, Message, Result, Text, build_carousel};

use super::{ACCENT_COLOR, ContentContext, card, contact_line, divider, heading, paragraph, subtitle, title};

pub const ALT_TEXT: &str = "投資案件 - バイク・車レンタル事業";

fn highlight(text: &str) -> Component {
    Text::new(text)
        .bold()
        .size("md")
        .color(ACCENT_COLOR)
        .margin("md")
        .wrap()
        .into()
}

/// レンタル事業の投資案件カルーセル (6 枚)
pub fn rental_investment(ctx: &ContentContext) -> Result<Message> {
    let bike = card(
        Some(ctx.image_url("bike-rental.jpg")),
        vec![
            title("Yamaha NMAX バイクレンタル事業", "lg"),
            subtitle("10台投資案件"),
            divider(),
            heading("基本条件"),
            paragraph(
                "• 台数：10台\n• 1台価格：460,000円\n• 総投資額：4,600,000円\n• レンタル単価：Rp100,000（約980円/日）\n• 稼働日数：年間240日（20日/月）",
            ),
        ],
    );

    let bike_returns = card(
        None,
        vec![
            title("バイク事業 収益シミュレーション", "lg"),
            divider(),
            heading("年間収支"),
            paragraph(
                "• 年間売上：2,352,000円\n• 年間経費：1,000,000円\n  （整備・保険：500,000円）\n  （運営報酬：500,000円）\n• 年間純利益：1,352,000円",
            ),
            divider(),
            heading("投資回収と収益"),
            paragraph(
                "• 投資回収年数：約3.4年\n• 10年後残存価値：1,840,000円\n• 10年間総リターン：10,763,200円\n• 年平均利回り：約23.4%",
            ),
        ],
    );

    let car = card(
        Some(ctx.image_url("car-rental.jpg")),
        vec![
            title("アルファード HEV カーレンタル事業", "lg"),
            subtitle("高級車レンタル投資案件"),
            divider(),
            heading("基本条件"),
            paragraph(
                "• 車両購入費：1,500万円（新車アルファード HEV）\n• 稼働日数：年間300日\n• 1日あたり貸出価格：20,000円\n• 年間売上：600万円\n• 年間経費：200万円\n• 年間純利益：400万円",
            ),
        ],
    );

    let single_investor = card(
        None,
        vec![
            title("車事業 投資パターン①", "lg"),
            subtitle("1人投資家モデル"),
            divider(),
            heading("投資詳細"),
            paragraph(
                "• 初期投資額：1,500万円\n• 年間純利益：400万円（すべて取得）\n• 投資回収年数：3.75年\n• 回収後の利益：2,500万円（6.25年分）\n• 10年後の売却益：600万円\n• 合計リターン：3,100万円",
            ),
            divider(),
            highlight("実質年利：平均利回り 約20.7%"),
        ],
    );

    let group_investors = card(
        None,
        vec![
            title("車事業 投資パターン②", "lg"),
            subtitle("5人投資家モデル"),
            divider(),
            heading("投資詳細（1人あたり）"),
            paragraph(
                "• 初期投資額：300万円\n• 出資比率：投資家グループ75%、運営者25%\n• 年間利益：60万円\n• 投資回収年数：5年\n• 回収後の利益：300万円（5年分）\n• 10年後の売却益シェア：90万円",
            ),
            heading("合計リターン：390万円"),
            divider(),
            highlight("実質年利：平均利回り 約13%"),
        ],
    );

    let summary = card(
        None,
        vec![
            title("投資案件 比較まとめ", "lg"),
            divider(),
            heading("バイク事業（10台）"),
            paragraph("投資額：460万円\n年平均利回り：23.4%\n投資回収年数：3.4年"),
            heading("車事業（1人投資家）"),
            paragraph("投資額：1,500万円\n年平均利回り：20.7%\n投資回収年数：3.75年"),
            heading("車事業（5人投資家）"),
            paragraph("投資額：300万円/人\n年平均利回り：13%\n投資回収年数：5年"),
            divider(),
            contact_line(),
        ],
    );

    build_carousel(
        ALT_TEXT,
        vec![bike, bike_returns, car, single_investor, group_investors, summary],
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rental_investment_cards() {
        let ctx = ContentContext::new("https://bot.example.com");
        let json = serde_json::to_value(rental_investment(&ctx).unwrap()).unwrap();
        let cards = json["contents"]["contents"].as_array().unwrap();

        assert_eq!(cards.len(), 6);
        assert_eq!(cards[0]["hero"]["url"], "https://bot.example.com/images/bike-rental.jpg");
        assert_eq!(cards[2]["hero"]["url"], "https://bot.example.com/images/car-rental.jpg");
    }
}
