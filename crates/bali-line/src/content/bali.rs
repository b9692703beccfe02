//! バリ島紹介カルーセル

use bali_flex::{Message, Result, build_carousel};

use super::{ContentContext, card, divider, heading, note, paragraph, title};

pub const ALT_TEXT: &str = "バリ島の紹介 - \"実利のある楽園\"";

/// バリ島紹介 (5 枚)
pub fn bali_info(ctx: &ContentContext) -> Result<Message> {
    let overview = card(
        Some(ctx.image_url("bali-hero.jpg")),
        vec![
            title("バリ島が\"実利のある楽園\"と呼ばれる理由", "lg"),
            divider(),
            paragraph(
                "ただのリゾートではありません。世界中の投資家・富裕層が注目するその背景には、圧倒的な「数字による裏付け」があります。",
            ),
            divider(),
            heading("投資価値のポイント"),
            paragraph(
                "• 年間1,600万人規模の観光需要市場\n• 急成長するインドネシア経済の中核\n• 政府による観光開発の最優先支援\n• 欧米・中東・ASEAN富裕層の移住先",
            ),
        ],
    );

    let population = card(
        None,
        vec![
            title("人口と成長性", "xl"),
            divider(),
            heading("インドネシア総人口"),
            paragraph("約2.8億人（世界第4位）"),
            heading("バリ州人口"),
            paragraph("約440万人（2024年時点）\n2030年には500万人突破予測\n年成長率：1.2〜1.5%"),
            heading("平均年齢：約29歳"),
            paragraph("若年層中心の「生産＋消費」両輪成長モデル"),
            divider(),
            note("拡大市場＋若年人口＝経済活性化と長期的需要の保証"),
        ],
    );

    let economy = card(
        None,
        vec![
            title("GDPと経済ポテンシャル", "xl"),
            divider(),
            heading("インドネシアGDP"),
            paragraph("約1.6兆ドル（世界16位）\n2050年予測：世界第4位（PwC・IMF）"),
            heading("バリ州GDP（2023年）"),
            paragraph("約116兆ルピア（≒約1.1兆円）"),
            heading("産業構造"),
            paragraph("観光業が約54%、現在は不動産・教育・医療分野へも多角化中"),
            divider(),
            note("成長経済 × 多角化＝安定性と投資余地の拡大"),
        ],
    );

    let tourism = card(
        None,
        vec![
            title("観光市場の回復と拡大", "xl"),
            divider(),
            heading("訪問外国人観光客数の推移"),
            paragraph(
                "2019年（コロナ前）：約630万人（過去最高）\n2020〜2021年：ほぼゼロ（コロナ影響）\n2023年：約460万人（急回復）\n2024年（予測）：600万人超（8割回復）",
            ),
            heading("インドネシア国内観光客"),
            paragraph("年間1,000万人超"),
            heading("合計観光需要市場"),
            paragraph("約1,600万人規模"),
            divider(),
            note("訪問者＝消費者。バリ島は\"人が来続ける市場\"であり続ける。"),
        ],
    );

    let capital = card(
        None,
        vec![
            title("世界的観光都市 × 安定的な資本流入", "lg"),
            divider(),
            heading("年間1,000万人超が訪れるアジア最大級の観光島"),
            paragraph("欧米・中東・ASEANの富裕層・ノマド・FIRE層が滞在・移住"),
            heading("政府支援"),
            paragraph("政府もインフラ・観光開発を最優先で支援中"),
            divider(),
            heading("投資環境の特徴"),
            paragraph(
                "• 年間を通じて温暖な気候\n• 国際的な観光地としての地位\n• 成長する不動産市場\n• 豊かな文化と伝統\n• 英語が通じる環境",
            ),
            divider(),
            note("観光＝消費が絶え間なく流れ込む、資本流入型マーケット"),
        ],
    );

    build_carousel(
        ALT_TEXT,
        vec![overview, population, economy, tourism, capital],
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bali_info_has_five_cards() {
        let ctx = ContentContext::new("https://bot.example.com");
        let message = bali_info(&ctx).unwrap();
        assert_eq!(message.as_flex().map(|c| c.bubble_count()), Some(5));
    }

    #[test]
    fn test_bali_info_hero_uses_base_url() {
        let ctx = ContentContext::new("https://bot.example.com");
        let json = serde_json::to_value(bali_info(&ctx).unwrap()).unwrap();
        assert_eq!(
            json["contents"]["contents"][0]["hero"]["url"],
            "https://bot.example.com/images/bali-hero.jpg"
        );
        assert!(json["contents"]["contents"][1].get("hero").is_none());
    }
}
