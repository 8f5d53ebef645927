//! Cabin write with image upload
//!
//! A cabin row references its image by URL, so the URL is fixed before the
//! row is written and the bytes are uploaded afterwards. When the upload
//! fails the row is deleted again:
//!
//! ```text
//! Planned --write row--> RowWritten --upload--> Completed
//!                             |
//!                             +--upload failed, row deleted--------> Compensated
//!                             +--upload failed, delete failed too--> Abandoned
//! ```
//!
//! A failed row write leaves the write in `Planned`; nothing was persisted.

use super::decode_row;
use crate::api::constants::{buckets, tables};
use crate::api::{FileUpload, Operation, Storage, Tables};
use crate::error::{logged, DashboardError, Result};
use crate::mapping::CABIN_FIELDS;
use crate::models::{Cabin, CabinDraft, CabinImage};
use log::{debug, error, info, warn};
use rand::distributions::Alphanumeric;
use rand::Rng;

const CREATE_FAILED: &str = "Cabin could not be created";
const EDIT_FAILED: &str = "Cabin could not be updated";
const UPLOAD_FAILED: &str = "Cabin image could not be uploaded and the cabin was not created";

const TOKEN_LEN: usize = 16;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CabinWriteState {
    Planned,
    RowWritten { id: i64 },
    Completed { id: i64 },
    Compensated,
    /// The upload failed and the written row could not be removed
    Abandoned { id: i64 },
}

/// Where the cabin image ends up
#[derive(Debug, Clone, PartialEq)]
pub enum ImagePlan {
    Reuse { url: String },
    Upload { name: String, url: String, file: FileUpload },
}

impl ImagePlan {
    pub fn url(&self) -> &str {
        match self {
            ImagePlan::Reuse { url } | ImagePlan::Upload { url, .. } => url,
        }
    }

    /// Asset name for a fresh upload: `<token>-<file name>` without path separators
    pub fn asset_name(token: &str, file_name: &str) -> String {
        format!("{}-{}", token, file_name).replace(['/', '\\'], "")
    }
}

pub struct CabinWrite {
    draft: CabinDraft,
    id: Option<i64>,
    image: ImagePlan,
    state: CabinWriteState,
}

impl CabinWrite {
    /// Plan a create (`id` absent) or an edit (`id` present) of a cabin
    pub fn plan(draft: CabinDraft, id: Option<i64>, storage: &dyn Storage) -> Self {
        let token: String = rand::thread_rng()
            .sample_iter(&Alphanumeric)
            .take(TOKEN_LEN)
            .map(char::from)
            .collect();
        Self::plan_with_token(draft, id, storage, &token)
    }

    pub fn plan_with_token(draft: CabinDraft, id: Option<i64>, storage: &dyn Storage, token: &str) -> Self {
        let image = match &draft.image {
            CabinImage::Stored(url) => {
                if !storage.is_stored_url(url) {
                    warn!("Cabin image '{}' does not point into the store; keeping it as given", url);
                }
                ImagePlan::Reuse { url: url.clone() }
            }
            CabinImage::Upload(file) => {
                let name = ImagePlan::asset_name(token, &file.file_name);
                let url = storage.public_url(buckets::CABIN_IMAGES, &name);
                ImagePlan::Upload {
                    name,
                    url,
                    file: file.clone(),
                }
            }
        };

        Self {
            draft,
            id,
            image,
            state: CabinWriteState::Planned,
        }
    }

    pub fn state(&self) -> CabinWriteState {
        self.state
    }

    pub fn image(&self) -> &ImagePlan {
        &self.image
    }

    /// Drive the write to a terminal state
    pub async fn run(&mut self, tables: &dyn Tables, storage: &dyn Storage) -> Result<Cabin> {
        let cabin = self.write_row(tables).await?;
        self.state = CabinWriteState::RowWritten { id: cabin.id };

        let ImagePlan::Upload { name, file, .. } = &self.image else {
            self.state = CabinWriteState::Completed { id: cabin.id };
            return Ok(cabin);
        };

        match storage.upload(buckets::CABIN_IMAGES, name, file).await {
            Ok(()) => {
                info!("Uploaded cabin image '{}'", name);
                self.state = CabinWriteState::Completed { id: cabin.id };
                Ok(cabin)
            }
            Err(upload_error) => {
                error!("Upload of cabin image '{}' failed: {:#}", name, upload_error);
                self.compensate(tables, cabin.id).await;
                Err(DashboardError::Upload(UPLOAD_FAILED.to_string()))
            }
        }
    }

    async fn write_row(&self, tables: &dyn Tables) -> Result<Cabin> {
        let failure = if self.id.is_some() { EDIT_FAILED } else { CREATE_FAILED };

        let row = serde_json::to_value(self.draft.row(self.image.url()))
            .map(|row| CABIN_FIELDS.to_remote(&row))
            .map_err(|e| logged(DashboardError::Update, failure)(e.into()))?;

        let operation = match self.id {
            Some(id) => Operation::update_by_id(tables::CABINS, id, row),
            None => Operation::insert(tables::CABINS, row),
        };
        debug!("Writing cabin row: {:?}", operation.operation_type());

        let written = tables
            .execute(&operation)
            .await
            .and_then(|result| result.single_row())
            .map_err(logged(DashboardError::Update, failure))?;

        decode_row(&CABIN_FIELDS, written).map_err(logged(DashboardError::Update, failure))
    }

    async fn compensate(&mut self, tables: &dyn Tables, id: i64) {
        match tables.execute(&Operation::delete_by_id(tables::CABINS, id)).await {
            Ok(_) => {
                warn!("Removed cabin #{} after its image upload failed", id);
                self.state = CabinWriteState::Compensated;
            }
            Err(e) => {
                error!("Cabin #{} is left without its image, delete failed: {:#}", id, e);
                self.state = CabinWriteState::Abandoned { id };
            }
        }
    }
}
