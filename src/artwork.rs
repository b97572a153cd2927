use crate::de;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct ImageLink {
    #[serde(default)]
    pub url: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct Artwork {
    #[serde(default, deserialize_with = "de::string_or_number")]
    pub art_id: String,

    pub station_name: String,

    #[serde(default, deserialize_with = "de::null_as_default")]
    pub art_title: String,

    #[serde(default, deserialize_with = "de::null_as_default")]
    pub artist: String,

    #[serde(default, deserialize_with = "de::string_or_number")]
    pub art_date: String,

    #[serde(default, deserialize_with = "de::null_as_default")]
    pub art_material: String,

    #[serde(default, deserialize_with = "de::null_as_default")]
    pub art_description: String,

    #[serde(default)]
    pub art_image_link: Option<ImageLink>,

    #[serde(deserialize_with = "de::f64_or_string")]
    pub latitude: f64,

    #[serde(deserialize_with = "de::f64_or_string")]
    pub longitude: f64,
}

impl Artwork {
    pub fn image_url(&self) -> Option<&str> {
        self.art_image_link
            .as_ref()
            .and_then(|link| link.url.as_deref())
            .filter(|url| !url.is_empty())
    }
}
