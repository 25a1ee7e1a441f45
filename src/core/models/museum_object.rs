use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ObjectImage {
    #[serde(rename = "imageid", default)]
    pub image_id: Option<u64>,
    #[serde(rename = "baseimageurl", default)]
    pub base_image_url: Option<String>,
    #[serde(rename = "alttext", default)]
    pub alt_text: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ObjectPerson {
    #[serde(rename = "personid", default)]
    pub person_id: Option<u64>,
    #[serde(rename = "displayname", default)]
    pub display_name: Option<String>,
}

/// One object record as returned by the collection API.
///
/// Every field is optional. Fields the API sends that are not listed here are
/// dropped during deserialization.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MuseumObject {
    pub title: Option<String>,
    pub dated: Option<String>,
    pub images: Option<Vec<ObjectImage>>,
    pub description: Option<String>,
    pub culture: Option<String>,
    pub style: Option<String>,
    pub technique: Option<String>,
    pub medium: Option<String>,
    pub dimensions: Option<String>,
    pub people: Option<Vec<ObjectPerson>>,
    pub department: Option<String>,
    pub division: Option<String>,
    pub contact: Option<String>,
    pub creditline: Option<String>,
}

/// Treats `None` and `""` alike as an absent value.
pub fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|content| !content.is_empty())
}
