//! 物件カードの描画

use bali_flex::{
    ActionSpec, Bubble, Component, FlexBox, Image, MAX_CAROUSEL_BUBBLES, Message, Result, Text,
    build_button, build_carousel,
};

use super::record::{PropertyRecord, UNSPECIFIED};
use super::{Lookup, RecordSource};
use crate::content::{ACCENT_COLOR, MUTED_COLOR, divider};
use crate::rules::actions;

/// サンプルデータであることを示す注記
pub const DEMO_NOTICE: &str = "※サンプルデータ";

/// Rendering settings that do not come from the record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    /// Used when a record has no usable image
    pub placeholder_image: String,
}

/// Text for an area with no listings
pub fn not_found_text(area_label: &str) -> String {
    format!(
        "{}エリアの物件が見つかりませんでした。別のエリアをお試しください。",
        area_label
    )
}

fn or_unspecified(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or(UNSPECIFIED)
}

fn detail_row(label: &str, value: &Option<String>) -> Component {
    FlexBox::baseline(vec![
        Text::new(label).size("sm").color("#aaaaaa").flex(2).into(),
        Text::new(or_unspecified(value))
            .size("sm")
            .color(MUTED_COLOR)
            .wrap()
            .flex(5)
            .into(),
    ])
    .spacing("sm")
    .margin("sm")
    .into()
}

/// One listing card
///
/// Every listing, alone or in a carousel, goes through this function.
pub fn property_bubble(record: &PropertyRecord, options: &RenderOptions, demo: bool) -> Bubble {
    let image = record
        .image
        .clone()
        .unwrap_or_else(|| options.placeholder_image.clone());

    let mut body = vec![
        Text::new(or_unspecified(&record.name))
            .bold()
            .size("xl")
            .color(ACCENT_COLOR)
            .wrap()
            .into(),
        Text::new(or_unspecified(&record.area))
            .size("sm")
            .color(MUTED_COLOR)
            .margin("sm")
            .into(),
    ];
    if demo {
        body.push(
            Text::new(DEMO_NOTICE)
                .size("xs")
                .color("#ff5551")
                .margin("sm")
                .into(),
        );
    }
    body.extend([
        divider(),
        detail_row("土地面積", &record.land_size),
        detail_row("建物面積", &record.building_size),
        detail_row("部屋数", &record.rooms),
        detail_row("販売価格", &record.selling_price),
        detail_row("リビング", &record.living_room),
        detail_row("設備", &record.facilities),
        detail_row("実質利回り", &record.actual_yield),
        divider(),
        Text::new(or_unspecified(&record.description))
            .size("sm")
            .wrap()
            .margin("md")
            .into(),
    ]);

    let footer = FlexBox::vertical(vec![
        build_button(&ActionSpec::postback("視察予約", actions::INSPECTION_BOOKING)),
        build_button(
            &ActionSpec::postback("他のエリアを見る", actions::PROPERTY_LIST).style("secondary"),
        ),
    ])
    .spacing("sm");

    Bubble::new()
        .hero(Image::hero(image))
        .body(FlexBox::vertical(body))
        .footer(footer)
}

/// Reply for a finished lookup
///
/// No records give the not-found text, one record a single card and more
/// a carousel of the first [`MAX_CAROUSEL_BUBBLES`] records.
pub fn create_property_detail_message(lookup: &Lookup, options: &RenderOptions) -> Result<Message> {
    let demo = lookup.source == RecordSource::Demo;
    let alt_text = format!("{}エリアの物件情報", lookup.area_label);

    match lookup.records.as_slice() {
        [] => Ok(Message::text(not_found_text(&lookup.area_label))),
        [record] => Ok(Message::flex(alt_text, property_bubble(record, options, demo))),
        records => {
            let bubbles = records
                .iter()
                .take(MAX_CAROUSEL_BUBBLES)
                .map(|record| property_bubble(record, options, demo))
                .collect();
            build_carousel(&alt_text, bubbles)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bali_flex::FlexContainer;

    fn options() -> RenderOptions {
        RenderOptions {
            placeholder_image: "https://bot.example.com/images/no-image.jpg".to_string(),
        }
    }

    fn named(name: &str) -> PropertyRecord {
        PropertyRecord {
            name: Some(name.to_string()),
            area: Some("Kuta".to_string()),
            ..Default::default()
        }
    }

    fn lookup(records: Vec<PropertyRecord>) -> Lookup {
        Lookup {
            area_label: "Kuta".to_string(),
            records,
            source: RecordSource::Remote,
        }
    }

    #[test]
    fn test_no_records_gives_text() {
        let message = create_property_detail_message(&lookup(vec![]), &options()).unwrap();
        assert_eq!(
            message.as_text(),
            Some("Kutaエリアの物件が見つかりませんでした。別のエリアをお試しください。")
        );
    }

    #[test]
    fn test_one_record_gives_bubble() {
        let message = create_property_detail_message(&lookup(vec![named("A")]), &options()).unwrap();
        assert!(matches!(message.as_flex(), Some(FlexContainer::Bubble(_))));
    }

    #[test]
    fn test_two_records_give_carousel_of_same_cards() {
        let records = vec![named("A"), named("B")];
        let message = create_property_detail_message(&lookup(records.clone()), &options()).unwrap();

        let Some(FlexContainer::Carousel(carousel)) = message.as_flex() else {
            panic!("expected a carousel");
        };
        assert_eq!(carousel.len(), 2);
        assert_eq!(carousel.bubbles()[0], property_bubble(&records[0], &options(), false));
        assert_eq!(carousel.bubbles()[1], property_bubble(&records[1], &options(), false));
    }

    #[test]
    fn test_carousel_is_capped() {
        let records = (0..20).map(|i| named(&format!("Villa {}", i))).collect();
        let message = create_property_detail_message(&lookup(records), &options()).unwrap();
        assert_eq!(message.as_flex().map(|c| c.bubble_count()), Some(MAX_CAROUSEL_BUBBLES));
    }

    #[test]
    fn test_missing_fields_use_placeholders() {
        let json = serde_json::to_value(property_bubble(&PropertyRecord::default(), &options(), false))
            .unwrap();
        let rendered = json.to_string();

        assert_eq!(json["hero"]["url"], "https://bot.example.com/images/no-image.jpg");
        assert_eq!(json["body"]["contents"][0]["text"], UNSPECIFIED);
        assert!(!rendered.contains("null"));
        assert!(!rendered.contains(DEMO_NOTICE));
    }

    #[test]
    fn test_demo_cards_are_marked() {
        let demo = Lookup {
            source: RecordSource::Demo,
            ..lookup(vec![named("A")])
        };
        let message = create_property_detail_message(&demo, &options()).unwrap();
        let rendered = serde_json::to_string(&message).unwrap();
        assert!(rendered.contains(DEMO_NOTICE));
    }
}
