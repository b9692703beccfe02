//! 提携先企業

use bali_flex::{Bubble, Message, Result, build_carousel};

use super::{ContentContext, card, contact_line, divider, paragraph, subtitle, title};

pub const ALT_TEXT: &str = "提携先企業";

struct Bank {
    name: &'static str,
    tagline: &'static str,
    image: &'static str,
    summary: &'static str,
}

const BANKS: &[Bank] = &[
    Bank {
        name: "Bank Mandiri",
        tagline: "インドネシア最大の国営商業銀行",
        image: "bank-mandiri.jpg",
        summary: "個人・法人向けともに広範なサービスを提供。ATMネットワークは国内最多で、クレジットカード発行やオンラインバンキングも充実しており、利便性が非常に高いです。",
    },
    Bank {
        name: "BRI",
        tagline: "Bank Rakyat Indonesia",
        image: "bank-bri.jpg",
        summary: "零細企業支援に特化し、地方農村部への融資が強み。マイクロファイナンスに定評があり、地方市場で圧倒的な存在感を放つ銀行です。",
    },
    Bank {
        name: "BNI",
        tagline: "Bank Negara Indonesia",
        image: "bank-bni.jpg",
        summary: "主に法人・貿易商社向けの金融を得意とし、輸出入取引や為替サービスが充実。特に海外展開支援に強く、国際業務に精通した企業向けの選択肢として有望です。",
    },
    Bank {
        name: "BTN",
        tagline: "Bank Tabungan Negara",
        image: "bank-btn.jpg",
        summary: "住宅ローンにフォーカスした政府系銀行。不動産購入支援に優れており、住宅ローンの手続きや金利面でも配慮された設計となっています。住宅関連の投資やプロジェクトに関与する際には有力な選択肢です。",
    },
];

fn bank_card(ctx: &ContentContext, bank: &Bank) -> Bubble {
    card(
        Some(ctx.image_url(bank.image)),
        vec![
            title(bank.name, "xl"),
            subtitle(bank.tagline),
            divider(),
            paragraph(bank.summary),
        ],
    )
}

/// 提携銀行 4 行とその他サービス
pub fn partner_companies(ctx: &ContentContext) -> Result<Message> {
    let mut bubbles: Vec<Bubble> = BANKS.iter().map(|bank| bank_card(ctx, bank)).collect();
    bubbles.push(card(
        None,
        vec![
            title("💼 その他のサービス", "xl"),
            subtitle("金融機関以外のサポート"),
            divider(),
            paragraph("• 法律事務所\n• 不動産管理会社\n• 建設会社\n• 会計事務所\n• 投資コンサルティング"),
            divider(),
            contact_line(),
        ],
    ));

    build_carousel(ALT_TEXT, bubbles)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partner_cards() {
        let ctx = ContentContext::new("https://bot.example.com");
        let json = serde_json::to_value(partner_companies(&ctx).unwrap()).unwrap();
        let cards = json["contents"]["contents"].as_array().unwrap();

        assert_eq!(cards.len(), 5);
        assert_eq!(cards[1]["hero"]["url"], "https://bot.example.com/images/bank-bri.jpg");
        assert!(cards[4].get("hero").is_none());
    }
}
