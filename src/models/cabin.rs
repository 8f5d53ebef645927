use crate::api::FileUpload;
use crate::dates;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cabin {
    pub id: i64,
    #[serde(default, with = "dates::flexible")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub max_capacity: Option<i64>,
    #[serde(default)]
    pub regular_price: Option<f64>,
    #[serde(default)]
    pub discount: Option<f64>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
}

/// Image supplied with a cabin form
#[derive(Debug, Clone, PartialEq)]
pub enum CabinImage {
    /// URL of an image that is already in storage
    Stored(String),
    /// A new file to upload
    Upload(FileUpload),
}

/// Cabin form data for create and edit
#[derive(Debug, Clone, PartialEq)]
pub struct CabinDraft {
    pub name: String,
    pub max_capacity: i64,
    pub regular_price: f64,
    pub discount: f64,
    pub description: String,
    pub image: CabinImage,
}

/// Row payload in application naming, before field translation
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CabinRow<'a> {
    pub name: &'a str,
    pub max_capacity: i64,
    pub regular_price: f64,
    pub discount: f64,
    pub description: &'a str,
    pub image: &'a str,
}

impl CabinDraft {
    /// Draft that copies an existing cabin, keeping its stored image
    pub fn copy_of(cabin: &Cabin) -> Self {
        Self {
            name: format!("Copy of {}", cabin.name),
            max_capacity: cabin.max_capacity.unwrap_or_default(),
            regular_price: cabin.regular_price.unwrap_or_default(),
            discount: cabin.discount.unwrap_or_default(),
            description: cabin.description.clone().unwrap_or_default(),
            image: CabinImage::Stored(cabin.image.clone().unwrap_or_default()),
        }
    }

    pub fn row<'a>(&'a self, image_url: &'a str) -> CabinRow<'a> {
        CabinRow {
            name: &self.name,
            max_capacity: self.max_capacity,
            regular_price: self.regular_price,
            discount: self.discount,
            description: &self.description,
            image: image_url,
        }
    }
}
