//! API client for the document backend.
//!
//! One async function per endpoint, each a single network round-trip with no
//! caching layer. Errors are mapped into [`ApiError`] at the transport; the
//! only policy this module adds is the best-effort download-count enrichment
//! during listing.

use serde::Deserialize;
use web_sys::{Blob, File, FormData, Url};

use crate::config::API_BASE_URL;
use crate::core::error::ApiError;
use crate::models::{Document, DocumentDescriptor, DocumentId, ValidHours};
use crate::utils::fetch::{self, Method};

fn endpoint(path: &str) -> String {
    format!("{}{}", API_BASE_URL, path)
}

// =============================================================================
// Object URLs
// =============================================================================

/// A browser object URL over fetched binary content.
///
/// The URL stays fetchable for as long as this guard is alive and is revoked
/// on drop, so a preview or download reference cannot leak past its use.
#[derive(Debug)]
pub struct ObjectUrl(String);

impl ObjectUrl {
    fn from_blob(blob: &Blob) -> Result<Self, ApiError> {
        Url::create_object_url_with_blob(blob)
            .map(Self)
            .map_err(|_| ApiError::Malformed("Could not create object URL".to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Drop for ObjectUrl {
    fn drop(&mut self) {
        let _ = Url::revoke_object_url(&self.0);
    }
}

/// Preview binary plus the MIME type the backend served it with.
#[derive(Debug)]
pub struct PreviewBinary {
    pub url: ObjectUrl,
    pub mime: String,
}

// =============================================================================
// Endpoints
// =============================================================================

/// Fetch the full document collection.
///
/// Each descriptor is enriched with its preview URL and a best-effort
/// download count: a failed count fetch logs and degrades to zero rather
/// than aborting the whole listing. Counts are fetched sequentially.
pub async fn list_documents() -> Result<Vec<Document>, ApiError> {
    let descriptors: Vec<DocumentDescriptor> = fetch::get_json(&endpoint("/documents")).await?;

    let mut documents = Vec::with_capacity(descriptors.len());
    for descriptor in descriptors {
        let downloads = match fetch_download_count(&descriptor.id).await {
            Ok(count) => count,
            Err(err) => {
                web_sys::console::error_1(
                    &format!("Download count for {} failed: {}", descriptor.id, err).into(),
                );
                0
            }
        };
        documents.push(Document::from_descriptor(descriptor, downloads));
    }

    Ok(documents)
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct DownloadCountBody {
    download_count: u32,
}

/// Fetch the download counter for one document.
pub async fn fetch_download_count(id: &DocumentId) -> Result<u32, ApiError> {
    let url = endpoint(&format!("/documents/{}/download-count", id));
    let body: DownloadCountBody = fetch::get_json(&url).await?;
    Ok(body.download_count)
}

/// Upload one file as a multipart form (`File`, `Name`, `FileType`).
///
/// Returns the server-assigned descriptor. A rejected payload surfaces as
/// [`ApiError::Validation`] with the backend's field-level messages.
pub async fn upload_document(file: &File) -> Result<DocumentDescriptor, ApiError> {
    let form = FormData::new().map_err(|_| ApiError::RequestCreationFailed)?;
    form.append_with_blob("File", file)
        .map_err(|_| ApiError::RequestCreationFailed)?;
    form.append_with_str("Name", &file.name())
        .map_err(|_| ApiError::RequestCreationFailed)?;
    form.append_with_str("FileType", &file.type_())
        .map_err(|_| ApiError::RequestCreationFailed)?;

    let resp = fetch::send(Method::Post, &endpoint("/documents/upload"), Some(form.as_ref())).await?;
    fetch::read_json(&resp).await
}

/// Delete a document by id.
///
/// Deleting an id that is already gone fails with [`ApiError::NotFound`],
/// the same class of failure a stale id produces anywhere else.
pub async fn delete_document(id: &DocumentId) -> Result<(), ApiError> {
    let url = endpoint(&format!("/documents/{}", id));
    fetch::send(Method::Delete, &url, None).await?;
    Ok(())
}

/// Backend response for a share-link request.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShareLinkResponse {
    pub share_link: String,
    /// The backend may echo its own expiry; the local hint is only a guess.
    #[serde(default)]
    pub share_link_expires_in_hours: Option<u32>,
}

/// Request a time-limited share link for a document.
pub async fn generate_share_link(
    id: &DocumentId,
    valid_for: ValidHours,
) -> Result<ShareLinkResponse, ApiError> {
    let url = endpoint(&format!(
        "/documents/{}/share?validForHours={}&shareLinkExpiresInHours={}",
        id, valid_for, valid_for
    ));
    fetch::get_json(&url).await
}

/// Fetch the document binary and wrap it in a saveable object URL.
///
/// The caller triggers the browser-level save; dropping the returned guard
/// releases the reference.
pub async fn generate_download_link(id: &DocumentId) -> Result<ObjectUrl, ApiError> {
    let url = endpoint(&format!("/documents/{}/download", id));
    let blob = fetch::get_blob(&url).await?;
    ObjectUrl::from_blob(&blob)
}

/// Fetch the preview binary for inline rendering.
///
/// The MIME type is taken from the served blob itself, so the preview view
/// can pick a renderer without knowing the document's metadata.
pub async fn fetch_document_preview(id: &DocumentId) -> Result<PreviewBinary, ApiError> {
    let url = endpoint(&format!("/documents/{}/preview", id));
    let blob = fetch::get_blob(&url).await?;
    let mime = blob.type_();
    let url = ObjectUrl::from_blob(&blob)?;
    Ok(PreviewBinary { url, mime })
}
