//! Object storage uploads

use super::backend::{FileUpload, Storage};
use super::client::BackendClient;
use super::constants::{self, headers};
use async_trait::async_trait;
use std::collections::HashMap;

#[async_trait]
impl Storage for BackendClient {
    async fn upload(&self, bucket: &str, name: &str, file: &FileUpload) -> anyhow::Result<()> {
        let url = constants::object_endpoint(self.base_url(), bucket, name);
        let context = self.logger().start_operation("upload", bucket);

        let mut request_headers = HashMap::new();
        request_headers.insert("Content-Type".to_string(), file.content_type.clone());
        self.logger().log_request(&context, "POST", &url, &request_headers);

        let request = self
            .http()
            .post(&url)
            .header("Content-Type", &file.content_type)
            .header(headers::X_UPSERT, "false")
            .body(file.bytes.clone());
        let response = self
            .authorize(request, &context)
            .await
            .send()
            .await
            .map_err(|e| self.transport_error(&context, e))?;
        self.read_response(&context, response).await?;

        log::debug!("Uploaded {} bytes to {}/{}", file.bytes.len(), bucket, name);
        Ok(())
    }

    fn public_url(&self, bucket: &str, name: &str) -> String {
        constants::public_object_url(self.base_url(), bucket, name)
    }

    fn is_stored_url(&self, url: &str) -> bool {
        url.starts_with(self.base_url())
    }
}
