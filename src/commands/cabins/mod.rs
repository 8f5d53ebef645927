pub mod create;
pub mod delete;
pub mod duplicate;
pub mod edit;
pub mod list;

pub use create::create_command;
pub use delete::delete_command;
pub use duplicate::duplicate_command;
pub use edit::edit_command;
pub use list::list_command;

use anyhow::Result;
use std::path::Path;

use crate::api::FileUpload;
use crate::models::CabinImage;

/// A URL is taken as an image already in storage, anything else as a file to upload
fn image_from_arg(image: &str) -> Result<CabinImage> {
    if image.starts_with("http://") || image.starts_with("https://") {
        Ok(CabinImage::Stored(image.to_string()))
    } else {
        Ok(CabinImage::Upload(FileUpload::from_path(Path::new(image))?))
    }
}
