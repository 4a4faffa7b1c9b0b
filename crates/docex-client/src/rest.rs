//! reqwest implementation of [`DocumentApi`].

use std::time::Duration;

use async_trait::async_trait;
use bytes::Bytes;
use reqwest::header::{ACCEPT, HeaderMap, HeaderValue};
use tracing::debug;

use docex_core::config::api::ApiConfig;
use docex_core::error::{AppError, ErrorKind};
use docex_core::result::AppResult;
use docex_entity::file::FileEntry;
use docex_entity::folder::{CreateFolder, Folder, RenameFolder};

use crate::api::{DocumentApi, UploadFile};

/// HTTP client for the document API.
#[derive(Debug, Clone)]
pub struct RestClient {
    /// Shared reqwest client with timeouts from configuration.
    client: reqwest::Client,
    /// API base URL without a trailing slash.
    base_url: String,
}

impl RestClient {
    /// Build a client from configuration.
    pub fn new(config: &ApiConfig) -> AppResult<Self> {
        let mut default_headers = HeaderMap::new();
        default_headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let mut builder = reqwest::Client::builder()
            .default_headers(default_headers)
            .connect_timeout(Duration::from_secs(config.connect_timeout_seconds));
        if config.request_timeout_seconds > 0 {
            builder = builder.timeout(Duration::from_secs(config.request_timeout_seconds));
        }

        let client = builder
            .build()
            .map_err(|e| AppError::with_source(
                ErrorKind::Configuration,
                format!("Failed to build HTTP client: {e}"),
                e,
            ))?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    fn api_url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// Send a request, mapping transport errors and non-2xx statuses into
    /// [`AppError`]. The response body of a failed request is ignored.
    async fn send_ok(
        &self,
        request: reqwest::RequestBuilder,
        action: &str,
    ) -> AppResult<reqwest::Response> {
        let response = request
            .send()
            .await
            .map_err(|e| AppError::with_source(
                ErrorKind::ExternalService,
                format!("{action}: request failed: {e}"),
                e,
            ))?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::external_service(format!(
                "{action}: server returned {status}"
            )));
        }
        Ok(response)
    }
}

#[async_trait]
impl DocumentApi for RestClient {
    async fn list_folders(&self) -> AppResult<Vec<Folder>> {
        let response = self
            .send_ok(self.client.get(self.api_url("/api/folders")), "list folders")
            .await?;
        response
            .json()
            .await
            .map_err(|e| AppError::with_source(
                ErrorKind::Serialization,
                format!("list folders: invalid response body: {e}"),
                e,
            ))
    }

    async fn list_files(&self, folder_id: i64) -> AppResult<Vec<FileEntry>> {
        let response = self
            .send_ok(
                self.client
                    .get(self.api_url("/api/files"))
                    .query(&[("folder_id", folder_id)]),
                "list files",
            )
            .await?;
        response
            .json()
            .await
            .map_err(|e| AppError::with_source(
                ErrorKind::Serialization,
                format!("list files: invalid response body: {e}"),
                e,
            ))
    }

    async fn create_folder(&self, req: &CreateFolder) -> AppResult<()> {
        debug!(name = %req.name, parent_id = ?req.parent_id, "creating folder");
        self.send_ok(
            self.client.post(self.api_url("/api/folders")).json(req),
            "create folder",
        )
        .await?;
        Ok(())
    }

    async fn rename_folder(&self, folder_id: i64, name: &str) -> AppResult<()> {
        debug!(folder_id, name, "renaming folder");
        let body = RenameFolder {
            name: name.to_string(),
        };
        self.send_ok(
            self.client
                .patch(self.api_url(&format!("/api/folders/{folder_id}")))
                .json(&body),
            "rename folder",
        )
        .await?;
        Ok(())
    }

    async fn delete_folder(&self, folder_id: i64) -> AppResult<()> {
        debug!(folder_id, "deleting folder");
        self.send_ok(
            self.client
                .delete(self.api_url(&format!("/api/folders/{folder_id}"))),
            "delete folder",
        )
        .await?;
        Ok(())
    }

    async fn upload(&self, folder_id: i64, files: Vec<UploadFile>) -> AppResult<()> {
        debug!(folder_id, count = files.len(), "uploading files");

        let mut form =
            reqwest::multipart::Form::new().text("folder_id", folder_id.to_string());
        for file in files {
            let part =
                reqwest::multipart::Part::bytes(file.bytes.to_vec()).file_name(file.name);
            form = form.part("files", part);
        }

        self.send_ok(
            self.client.post(self.api_url("/api/upload")).multipart(form),
            "upload",
        )
        .await?;
        Ok(())
    }

    async fn delete_file(&self, file_id: i64) -> AppResult<()> {
        debug!(file_id, "deleting file");
        self.send_ok(
            self.client
                .delete(self.api_url(&format!("/api/files/{file_id}"))),
            "delete file",
        )
        .await?;
        Ok(())
    }

    async fn fetch_blob(&self, url: &str) -> AppResult<Bytes> {
        let response = self.send_ok(self.client.get(url), "download").await?;
        response
            .bytes()
            .await
            .map_err(|e| AppError::with_source(
                ErrorKind::ExternalService,
                format!("download: reading body failed: {e}"),
                e,
            ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> RestClient {
        let config = ApiConfig {
            base_url: "http://docs.hmfm.intra/".to_string(),
            ..ApiConfig::default()
        };
        RestClient::new(&config).unwrap()
    }

    #[test]
    fn test_base_url_trailing_slash_is_trimmed() {
        let client = client();
        assert_eq!(
            client.api_url("/api/folders"),
            "http://docs.hmfm.intra/api/folders"
        );
    }

    #[test]
    fn test_folder_listing_deserializes_documented_shape() {
        let json = r#"[{"id":1,"name":"RH","parent_id":null},{"id":2,"name":"Férias","parent_id":1}]"#;
        let folders: Vec<Folder> = serde_json::from_str(json).unwrap();
        assert_eq!(folders[0].parent_id, None);
        assert_eq!(folders[1].parent_id, Some(1));
    }

    #[test]
    fn test_file_listing_deserializes_documented_shape() {
        let json = r#"[{"id":10,"name":"escala.pdf","folder_id":1,"blob_url":"https://blob/x","size":2048,"mime_type":"application/pdf","created_at":"2026-01-15T12:00:00Z"}]"#;
        let files: Vec<FileEntry> = serde_json::from_str(json).unwrap();
        assert_eq!(files[0].size, 2048);
        assert_eq!(files[0].folder_id, 1);
    }

    #[test]
    fn test_create_folder_body_shape() {
        let body = CreateFolder {
            name: "NATS".to_string(),
            parent_id: None,
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json, serde_json::json!({"name": "NATS", "parent_id": null}));
    }
}
