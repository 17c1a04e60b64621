use base64::{engine::general_purpose, Engine};
use uuid::Uuid;

/// Decode a base64 photo (with or without a data URL prefix) and write it
/// under `<upload_dir>/complaints/photos/`. Returns the stored relative path.
pub async fn store_complaint_photo(
    base64_data: &str,
    upload_dir: &str,
) -> Result<String, std::io::Error> {
    let clean_data = if base64_data.starts_with("data:image") {
        base64_data.split(',').nth(1).unwrap_or(base64_data)
    } else {
        base64_data
    };

    let image_data = general_purpose::STANDARD
        .decode(clean_data)
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;

    let relative_path = format!("complaints/photos/{}.jpg", Uuid::new_v4());
    let target = std::path::Path::new(upload_dir).join(&relative_path);

    if let Some(parent) = target.parent() {
        tokio::fs::create_dir_all(parent).await?;
    }

    tokio::fs::write(&target, &image_data).await?;

    Ok(relative_path)
}

pub fn validate_photo_size(base64_data: &str, max_size_mb: usize) -> bool {
    let clean_data = if base64_data.starts_with("data:image") {
        base64_data.split(',').nth(1).unwrap_or(base64_data)
    } else {
        base64_data
    };

    // Approximate decoded size
    let size_in_bytes = (clean_data.len() * 3) / 4;
    size_in_bytes <= max_size_mb * 1024 * 1024
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn stores_decoded_photo_on_disk() {
        let dir = std::env::temp_dir().join(format!("civicdesk-test-{}", Uuid::new_v4()));
        let upload_dir = dir.to_str().unwrap();

        let encoded = general_purpose::STANDARD.encode(b"fake-jpeg-bytes");
        let path = store_complaint_photo(&encoded, upload_dir).await.unwrap();

        assert!(path.starts_with("complaints/photos/"));
        let written = tokio::fs::read(dir.join(&path)).await.unwrap();
        assert_eq!(written, b"fake-jpeg-bytes");

        let _ = tokio::fs::remove_dir_all(&dir).await;
    }

    #[tokio::test]
    async fn strips_data_url_prefix() {
        let dir = std::env::temp_dir().join(format!("civicdesk-test-{}", Uuid::new_v4()));
        let upload_dir = dir.to_str().unwrap();

        let encoded = format!(
            "data:image/jpeg;base64,{}",
            general_purpose::STANDARD.encode(b"prefixed")
        );
        let path = store_complaint_photo(&encoded, upload_dir).await.unwrap();

        let written = tokio::fs::read(dir.join(&path)).await.unwrap();
        assert_eq!(written, b"prefixed");

        let _ = tokio::fs::remove_dir_all(&dir).await;
    }

    #[tokio::test]
    async fn invalid_base64_is_an_error() {
        let result = store_complaint_photo("!!!not-base64!!!", "/tmp").await;
        assert!(result.is_err());
    }

    #[test]
    fn size_check_uses_decoded_length() {
        let encoded = general_purpose::STANDARD.encode(vec![0u8; 1024]);
        assert!(validate_photo_size(&encoded, 1));

        let encoded = general_purpose::STANDARD.encode(vec![0u8; 2 * 1024 * 1024]);
        assert!(!validate_photo_size(&encoded, 1));
    }
}
