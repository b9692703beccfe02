//! 会社概要 - Ciputra

use bali_flex::{Component, Message, Result, Text, build_carousel};

use super::{ContentContext, MUTED_COLOR, card, divider, heading, paragraph, title};

pub const ALT_TEXT: &str = "会社概要 - Ciputra";

fn name_line(text: &str) -> Component {
    Text::new(text).bold().size("lg").margin("md").into()
}

/// 会社概要カルーセル (4 枚)
pub fn company_info(ctx: &ContentContext) -> Result<Message> {
    let profile = card(
        Some(ctx.image_url("ciputra.png")),
        vec![
            title("企業概要", "xl"),
            name_line("Ciputra Development"),
            divider(),
            paragraph(
                "• 設立：1981年（創業者Ir. Ciputra）\n• 1994年にジャカルタ証券取引所上場\n• 事業領域：住宅、商業施設、オフィス、ホテル、ヘルスケアほか",
            ),
            divider(),
            heading("受賞歴"),
            Text::new("「Indonesia's Best Real Estate Developer」\n（Euromoney, 2024）など多数受賞")
                .wrap()
                .size("sm")
                .color(MUTED_COLOR)
                .margin("sm")
                .into(),
        ],
    );

    let strengths = card(
        None,
        vec![
            title("強み・特色", "xl"),
            divider(),
            heading("1. 豊富な開発実績"),
            paragraph("インドネシア国内33都市で76以上のプロジェクト（マンション、モール、病院等）"),
            heading("2. 巨大な資産規模と安定性"),
            paragraph("土地開発ストック7,000ha超、2024年収益は約625 MUSD、純利益約2.1 TIDR"),
            heading("3. 高評価のブランド力"),
            paragraph("海岸リゾート、住宅街から商業拠点まで幅広く、品質と信頼を兼備"),
        ],
    );

    let resort = card(
        None,
        vec![
            title("バリ島開発", "xl"),
            name_line("Ciputra Beach Resort"),
            divider(),
            heading("立地・規模"),
            paragraph("バリ島タバナン地区の海岸沿い80ha・海岸線1.7km"),
            heading("コンセプト"),
            paragraph("「luxury beachfront residences」＋持続可能な生活コミュニティ"),
            heading("施設構成"),
            paragraph("225邸のヴィラ、クラブハウス、プール、フィットネス、森林デッキなどを完備"),
            heading("パートナー運営"),
            paragraph("5つ星ホテル運営者（Rosewood）による第一フェーズが36haで展開中"),
        ],
    );

    let benefits = card(
        None,
        vec![
            title("提携メリット", "xl"),
            divider(),
            heading("ブランドシナジー"),
            paragraph("シプトラ独自のプレミアムブランドと提携提案により安心・信頼性を確保"),
            heading("プロジェクトの巨大規模"),
            paragraph("80ha級の海岸沿い大規模開発は他に類を見ず、差別化要素に"),
            heading("運営ノウハウと供給力"),
            paragraph("Rosewood等運営と、ヴィラからアパートメントまで柔軟な供給形式あり"),
            heading("法務・行政リスクが小さい"),
            paragraph("上場企業としての透明性と政府との繋がりで信頼性が高い"),
        ],
    );

    build_carousel(ALT_TEXT, vec![profile, strengths, resort, benefits])
}
