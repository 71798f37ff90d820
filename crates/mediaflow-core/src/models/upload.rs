//! Wire types for the upload URL and commit endpoints.
//!
//! Field names match the server contract exactly; these structs are the only
//! place the JSON shapes are spelled out.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::media::MediaType;

/// Request body for the upload URL endpoint: one entry per filename.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadUrlRequest {
    pub thumbnail_extension: String,
    pub filenames: Vec<String>,
}

/// Server-issued, single-use destination pair for one media file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadDestination {
    pub upload_method: String,
    pub upload_url_original: String,
    pub upload_url_thumbnail: String,
    pub upload_headers_original: HashMap<String, String>,
    pub upload_headers_thumbnail: HashMap<String, String>,
    pub file_id_original: i64,
    pub file_id_thumbnail: i64,
}

/// Final metadata record for one successfully uploaded file.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CommitItem {
    pub media_type: MediaType,
    pub file_id_original: i64,
    pub width_original: u32,
    pub height_original: u32,
    pub file_id_thumbnail: i64,
    pub width_thumbnail: u32,
    pub height_thumbnail: u32,
}

/// Body of the single commit request for one submission.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommitBatch {
    pub entry_id: i64,
    pub items: Vec<CommitItem>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn destination_decodes_from_server_shape() {
        let json = r#"{
            "upload_method": "PUT",
            "upload_url_original": "https://store.example/orig/1",
            "upload_url_thumbnail": "https://store.example/thumb/1",
            "upload_headers_original": {"x-amz-acl": "private"},
            "upload_headers_thumbnail": {},
            "file_id_original": 11,
            "file_id_thumbnail": 12
        }"#;
        let dest: UploadDestination = serde_json::from_str(json).unwrap();
        assert_eq!(dest.upload_method, "PUT");
        assert_eq!(dest.file_id_original, 11);
        assert_eq!(dest.file_id_thumbnail, 12);
        assert_eq!(
            dest.upload_headers_original.get("x-amz-acl").map(String::as_str),
            Some("private")
        );
        assert!(dest.upload_headers_thumbnail.is_empty());
    }

    #[test]
    fn commit_batch_serializes_with_contract_field_names() {
        let batch = CommitBatch {
            entry_id: 7,
            items: vec![CommitItem {
                media_type: MediaType::Video,
                file_id_original: 1,
                width_original: 1920,
                height_original: 1080,
                file_id_thumbnail: 2,
                width_thumbnail: 640,
                height_thumbnail: 360,
            }],
        };
        let value = serde_json::to_value(&batch).unwrap();
        assert_eq!(value["entry_id"], 7);
        assert_eq!(value["items"][0]["media_type"], "video");
        assert_eq!(value["items"][0]["width_thumbnail"], 640);
        assert_eq!(value["items"][0]["file_id_thumbnail"], 2);
    }

    #[test]
    fn upload_url_request_carries_extension_and_names() {
        let req = UploadUrlRequest {
            thumbnail_extension: ".jpeg".to_string(),
            filenames: vec!["a.png".to_string(), "b.mp4".to_string()],
        };
        let value = serde_json::to_value(&req).unwrap();
        assert_eq!(value["thumbnail_extension"], ".jpeg");
        assert_eq!(value["filenames"][1], "b.mp4");
    }
}
