//! Sample listings shown when the record store rejects our credentials

use super::record::PropertyRecord;

fn owned(value: &str) -> Option<String> {
    Some(value.to_string())
}

fn base(name: String, area_label: &str) -> PropertyRecord {
    PropertyRecord {
        name: Some(name),
        area: owned(area_label),
        living_room: owned("あり"),
        facilities: owned("プール、キッチン、駐車場"),
        ..Default::default()
    }
}

/// Fixed sample listings for `area_label`
pub fn demo_records(area_label: &str) -> Vec<PropertyRecord> {
    vec![
        PropertyRecord {
            land_size: owned("300㎡"),
            building_size: owned("180㎡"),
            rooms: owned("3"),
            selling_price: owned("USD 350,000"),
            actual_yield: owned("8%"),
            description: owned("ビーチまで車で5分のプライベートヴィラ。"),
            ..base(format!("{} Villa A", area_label), area_label)
        },
        PropertyRecord {
            land_size: owned("450㎡"),
            building_size: owned("260㎡"),
            rooms: owned("4"),
            selling_price: owned("USD 520,000"),
            actual_yield: owned("7.5%"),
            description: owned("ライステラスを望む静かな立地の新築ヴィラ。"),
            ..base(format!("{} Villa B", area_label), area_label)
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_records_use_requested_area() {
        let records = demo_records("Canggu");
        assert_eq!(records.len(), 2);
        assert!(records.iter().all(|r| r.area.as_deref() == Some("Canggu")));
        assert!(records.iter().all(|r| r.image.is_none()));
    }
}
