//! Property rows as read from the record store

use bali_airtable::Record;
use serde_json::Value;

/// 未入力の項目に表示する文字列
pub const UNSPECIFIED: &str = "未設定";

/// Field names tried, in order, for the listing photo
pub const IMAGE_FIELDS: [&str; 3] = ["Image", "image", "Images"];

/// A property listing; every field may be absent
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PropertyRecord {
    pub name: Option<String>,
    pub area: Option<String>,
    pub land_size: Option<String>,
    pub building_size: Option<String>,
    pub rooms: Option<String>,
    pub selling_price: Option<String>,
    pub living_room: Option<String>,
    pub facilities: Option<String>,
    pub actual_yield: Option<String>,
    pub description: Option<String>,
    pub image: Option<String>,
}

impl PropertyRecord {
    pub fn from_record(record: &Record) -> Self {
        let text = |name: &str| record.field(name).and_then(cell_text);

        Self {
            name: text("Name"),
            area: text("area"),
            land_size: text("Land size"),
            building_size: text("Building size"),
            rooms: text("Number of rooms"),
            selling_price: text("Selling price"),
            living_room: text("Living room"),
            facilities: text("Facilities"),
            actual_yield: text("Actual yield"),
            description: text("Description"),
            image: IMAGE_FIELDS
                .iter()
                .find_map(|name| record.field(name).and_then(image_url)),
        }
    }
}

/// Display text of a cell
///
/// Numbers and booleans are rendered as text, lists are joined.
/// Empty strings count as absent.
fn cell_text(value: &Value) -> Option<String> {
    let text = match value {
        Value::Null => return None,
        Value::String(s) => s.trim().to_string(),
        Value::Number(n) => n.to_string(),
        Value::Bool(true) => "あり".to_string(),
        Value::Bool(false) => "なし".to_string(),
        Value::Array(items) => items
            .iter()
            .filter_map(cell_text)
            .collect::<Vec<_>>()
            .join("、"),
        Value::Object(map) => return map.get("name").and_then(cell_text),
    };
    (!text.is_empty()).then_some(text)
}

/// Usable URL of an image cell
///
/// Accepts a plain URL, an attachment list (first entry) or a single
/// attachment object.
fn image_url(value: &Value) -> Option<String> {
    let url = match value {
        Value::String(s) => Some(s.as_str()),
        Value::Array(items) => items.first().and_then(|first| first.get("url")).and_then(Value::as_str),
        Value::Object(map) => map.get("url").and_then(Value::as_str),
        _ => None,
    }?;
    let url = url.trim();
    (!url.is_empty()).then(|| url.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(fields: Value) -> Record {
        let Value::Object(map) = fields else {
            panic!("fields must be an object");
        };
        Record::from_fields("rec1", map)
    }

    #[test]
    fn test_scalar_cells_render_as_text() {
        let property = PropertyRecord::from_record(&record(json!({
            "Name": "Villa Canggu",
            "Number of rooms": 3,
            "Actual yield": 8.5,
            "Living room": true,
            "Facilities": ["Pool", "Garden"]
        })));

        assert_eq!(property.name.as_deref(), Some("Villa Canggu"));
        assert_eq!(property.rooms.as_deref(), Some("3"));
        assert_eq!(property.actual_yield.as_deref(), Some("8.5"));
        assert_eq!(property.living_room.as_deref(), Some("あり"));
        assert_eq!(property.facilities.as_deref(), Some("Pool、Garden"));
        assert!(property.description.is_none());
    }

    #[test]
    fn test_blank_cells_are_absent() {
        let property = PropertyRecord::from_record(&record(json!({
            "Name": "  ",
            "Description": null
        })));
        assert!(property.name.is_none());
        assert!(property.description.is_none());
    }

    #[test]
    fn test_image_candidates_in_order() {
        let attachment = PropertyRecord::from_record(&record(json!({
            "Image": [{"url": "https://cdn.example.com/a.jpg"}, {"url": "https://cdn.example.com/b.jpg"}]
        })));
        assert_eq!(attachment.image.as_deref(), Some("https://cdn.example.com/a.jpg"));

        let lowercase = PropertyRecord::from_record(&record(json!({
            "Image": [],
            "image": "https://cdn.example.com/c.jpg"
        })));
        assert_eq!(lowercase.image.as_deref(), Some("https://cdn.example.com/c.jpg"));

        let plural = PropertyRecord::from_record(&record(json!({
            "Images": {"url": "https://cdn.example.com/d.jpg"}
        })));
        assert_eq!(plural.image.as_deref(), Some("https://cdn.example.com/d.jpg"));

        let none = PropertyRecord::from_record(&record(json!({"Image": ""})));
        assert!(none.image.is_none());
    }
}
