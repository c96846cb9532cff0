use chrono::Utc;
use std::path::PathBuf;
use std::str::FromStr;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum MediaStorageError {
    #[error("No file uploaded")]
    MissingFile,
    #[error("File too large: {size} bytes (max {max})")]
    TooLarge { size: usize, max: usize },
    #[error("Unsupported content type: {0}")]
    UnsupportedType(String),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// What an uploaded file is for. Each kind carries its own size cap and
/// content-type allow-list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadKind {
    Logo,
    Banner,
    Qr,
    Before,
    After,
    Proposal,
    Progress,
    TransferProof,
}

impl FromStr for UploadKind {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "logo" => Ok(UploadKind::Logo),
            "banner" => Ok(UploadKind::Banner),
            "qr" => Ok(UploadKind::Qr),
            "before" => Ok(UploadKind::Before),
            "after" => Ok(UploadKind::After),
            "proposal" => Ok(UploadKind::Proposal),
            "progress" => Ok(UploadKind::Progress),
            _ => Err(()),
        }
    }
}

impl UploadKind {
    pub fn max_bytes(&self) -> usize {
        match self {
            UploadKind::TransferProof => 1024 * 1024,
            UploadKind::Proposal => 5 * 1024 * 1024,
            _ => 2 * 1024 * 1024,
        }
    }

    pub fn accepts(&self, content_type: &str) -> bool {
        match self {
            UploadKind::Proposal => content_type == "application/pdf",
            _ => content_type.starts_with("image/"),
        }
    }

    pub fn tag(&self) -> &'static str {
        match self {
            UploadKind::Logo => "logo",
            UploadKind::Banner => "banner",
            UploadKind::Qr => "qr",
            UploadKind::Before => "before",
            UploadKind::After => "after",
            UploadKind::Proposal => "proposal",
            UploadKind::Progress => "progress",
            UploadKind::TransferProof => "transfer-proof",
        }
    }

    /// Campaign content column that should point at the stored asset, when
    /// the kind has one. Progress photos and transfer proofs are referenced
    /// from their own rows instead.
    pub fn content_column(&self) -> Option<&'static str> {
        match self {
            UploadKind::Logo => Some("logo_url"),
            UploadKind::Banner => Some("banner_image_url"),
            UploadKind::Qr => Some("qr_code_url"),
            UploadKind::Before => Some("before_renovation_image_url"),
            UploadKind::After => Some("after_renovation_image_url"),
            UploadKind::Proposal => Some("proposal_pdf_url"),
            UploadKind::Progress | UploadKind::TransferProof => None,
        }
    }
}

/// Disk-backed media store. Validates uploads against the kind's limits,
/// writes them under the uploads root and hands back the public URL.
#[derive(Debug, Clone)]
pub struct MediaStorage {
    root: PathBuf,
}

impl MediaStorage {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub async fn store(
        &self,
        kind: UploadKind,
        file_name: Option<&str>,
        content_type: Option<&str>,
        bytes: &[u8],
    ) -> Result<String, MediaStorageError> {
        if bytes.is_empty() {
            return Err(MediaStorageError::MissingFile);
        }

        let content_type = content_type.unwrap_or_default();
        if !kind.accepts(content_type) {
            return Err(MediaStorageError::UnsupportedType(content_type.to_string()));
        }

        let max = kind.max_bytes();
        if bytes.len() > max {
            return Err(MediaStorageError::TooLarge {
                size: bytes.len(),
                max,
            });
        }

        let file_name = format!(
            "{}-{}-{}",
            kind.tag(),
            Utc::now().timestamp_millis(),
            sanitize_file_name(file_name.unwrap_or("upload")),
        );

        tokio::fs::create_dir_all(&self.root).await?;
        tokio::fs::write(self.root.join(&file_name), bytes).await?;

        Ok(format!("/uploads/{file_name}"))
    }
}

fn sanitize_file_name(name: &str) -> String {
    name.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '.' || c == '-' {
                c
            } else {
                '_'
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    #[test]
    fn parses_admin_upload_kinds() {
        assert_eq!("logo".parse(), Ok(UploadKind::Logo));
        assert_eq!("proposal".parse(), Ok(UploadKind::Proposal));
        assert_eq!("progress".parse(), Ok(UploadKind::Progress));
        assert!("avatar".parse::<UploadKind>().is_err());
    }

    #[test]
    fn kind_limits_follow_asset_type() {
        assert_eq!(UploadKind::TransferProof.max_bytes(), 1024 * 1024);
        assert_eq!(UploadKind::Banner.max_bytes(), 2 * 1024 * 1024);
        assert_eq!(UploadKind::Proposal.max_bytes(), 5 * 1024 * 1024);
    }

    #[test]
    fn proposal_only_accepts_pdf() {
        assert!(UploadKind::Proposal.accepts("application/pdf"));
        assert!(!UploadKind::Proposal.accepts("image/png"));
        assert!(UploadKind::TransferProof.accepts("image/jpeg"));
        assert!(!UploadKind::TransferProof.accepts("application/pdf"));
    }

    #[test]
    fn sanitizes_file_names() {
        assert_eq!(sanitize_file_name("bukti transfer (1).jpg"), "bukti_transfer__1_.jpg");
        assert_eq!(sanitize_file_name("logo.png"), "logo.png");
    }

    #[tokio::test]
    async fn stores_file_and_returns_public_url() {
        let root = std::env::temp_dir().join(format!("donation-portal-test-{}", Uuid::new_v4()));
        let storage = MediaStorage::new(&root);

        let url = storage
            .store(
                UploadKind::TransferProof,
                Some("proof.jpg"),
                Some("image/jpeg"),
                b"fake image bytes",
            )
            .await
            .unwrap();

        assert!(url.starts_with("/uploads/transfer-proof-"));
        assert!(url.ends_with("-proof.jpg"));

        let stored = root.join(url.trim_start_matches("/uploads/"));
        assert_eq!(std::fs::read(stored).unwrap(), b"fake image bytes");

        std::fs::remove_dir_all(root).unwrap();
    }

    #[tokio::test]
    async fn rejects_oversized_transfer_proof() {
        let storage = MediaStorage::new(std::env::temp_dir());
        let oversized = vec![0u8; 1024 * 1024 + 1];

        let result = storage
            .store(
                UploadKind::TransferProof,
                Some("proof.jpg"),
                Some("image/jpeg"),
                &oversized,
            )
            .await;

        assert!(matches!(result, Err(MediaStorageError::TooLarge { .. })));
    }
}
