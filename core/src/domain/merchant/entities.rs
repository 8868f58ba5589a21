use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A merchant snapshot. `None` and `Some("")` are distinct values and
/// serialize as `null` and `""` respectively.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Merchant {
    #[serde(rename = "mb_merchant_id")]
    pub id: i64,
    #[serde(rename = "mb_category_id")]
    pub category_id: Option<i64>,
    pub area_id: Option<i64>,
    pub name: Option<String>,
    pub address: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub phone: Option<String>,
    pub image: Option<String>,
    pub description: Option<String>,
    pub delivery: Option<i64>,
    pub time_start: Option<String>,
    pub time_end: Option<String>,
    pub facebook: Option<String>,
    /// Only filled by the single-record lookup.
    #[serde(default)]
    pub images: Vec<Image>,
}

impl Merchant {
    pub fn with_images(self, images: Vec<Image>) -> Self {
        Self { images, ..self }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Image {
    pub id: i64,
    #[serde(rename = "mb_merchant_id")]
    pub merchant_id: i64,
    pub image: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Area {
    #[serde(rename = "area_id")]
    pub id: i64,
    pub region_id: Option<i64>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub image: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Category {
    #[serde(rename = "mb_discovery_category_id")]
    pub id: i64,
    pub name: String,
    pub code: Option<String>,
    pub description: Option<String>,
    pub image: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn merchant() -> Merchant {
        Merchant {
            id: 7,
            category_id: None,
            area_id: Some(2),
            name: Some("Pho 24".to_string()),
            address: Some(String::new()),
            latitude: Some(21.02),
            longitude: None,
            phone: None,
            image: None,
            description: None,
            delivery: Some(1),
            time_start: None,
            time_end: None,
            facebook: None,
            images: Vec::new(),
        }
    }

    #[test]
    fn null_and_empty_fields_survive_serialization() {
        let value = serde_json::to_value(merchant()).unwrap();

        assert_eq!(value["mb_merchant_id"], json!(7));
        assert_eq!(value["mb_category_id"], json!(null));
        assert_eq!(value["address"], json!(""));
        assert_eq!(value["images"], json!([]));

        let back: Merchant = serde_json::from_value(value).unwrap();
        assert_eq!(back, merchant());
        assert_eq!(back.address, Some(String::new()));
        assert_eq!(back.phone, None);
    }

    #[test]
    fn with_images_keeps_other_fields() {
        let image = Image {
            id: 1,
            merchant_id: 7,
            image: "/img/1.png".to_string(),
        };

        let merchant = merchant().with_images(vec![image.clone()]);

        assert_eq!(merchant.id, 7);
        assert_eq!(merchant.images, vec![image]);
    }
}
