use actix_multipart::Multipart;
use futures_util::StreamExt;
use std::collections::HashMap;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum MultipartFormError {
    #[error("File too large: {size} bytes (max {max})")]
    TooLarge { size: usize, max: usize },
    #[error("Malformed multipart payload: {0}")]
    Payload(#[from] actix_multipart::MultipartError),
}

#[derive(Debug, Clone)]
pub struct UploadedFile {
    pub file_name: Option<String>,
    pub content_type: Option<String>,
    pub bytes: Vec<u8>,
}

/// Text fields and files collected from a multipart payload. Files are read
/// into memory under a hard byte cap; fine-grained per-kind limits are
/// enforced afterwards by the media storage.
#[derive(Debug, Default)]
pub struct MultipartForm {
    texts: HashMap<String, String>,
    files: HashMap<String, UploadedFile>,
}

impl MultipartForm {
    pub async fn read(
        mut payload: Multipart,
        max_file_bytes: usize,
    ) -> Result<Self, MultipartFormError> {
        let mut form = MultipartForm::default();

        while let Some(field) = payload.next().await {
            let mut field = field?;

            let name = field.name().unwrap_or_default().to_string();
            let file_name = field
                .content_disposition()
                .and_then(|disposition| disposition.get_filename())
                .map(str::to_string);
            let content_type = field.content_type().map(|mime| mime.to_string());

            let mut bytes: Vec<u8> = Vec::new();
            while let Some(chunk) = field.next().await {
                let data = chunk?;
                if bytes.len() + data.len() > max_file_bytes {
                    return Err(MultipartFormError::TooLarge {
                        size: bytes.len() + data.len(),
                        max: max_file_bytes,
                    });
                }
                bytes.extend_from_slice(&data);
            }

            if file_name.is_some() {
                form.files.insert(
                    name,
                    UploadedFile {
                        file_name,
                        content_type,
                        bytes,
                    },
                );
            } else {
                form.texts
                    .insert(name, String::from_utf8_lossy(&bytes).into_owned());
            }
        }

        Ok(form)
    }

    /// Returns a non-empty text field value.
    pub fn text(&self, name: &str) -> Option<&str> {
        self.texts
            .get(name)
            .map(String::as_str)
            .filter(|value| !value.is_empty())
    }

    /// Returns a non-empty uploaded file.
    pub fn file(&self, name: &str) -> Option<&UploadedFile> {
        self.files.get(name).filter(|file| !file.bytes.is_empty())
    }
}
