//! Property image upload metadata
//!
//! Bytes are handed to an external storage service; only the stored file
//! name and the time it changed are kept on the property.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

pub static IMAGE_FILE_NAME: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^[^/\\]+\.(jpe?g|png|gif|webp)$").unwrap());

/// Register image request: the client's original file name
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct RegisterImage {
    #[validate(regex(path = *IMAGE_FILE_NAME, message = "Le fichier doit être une image (jpg, png, gif, webp)."))]
    pub original_name: String,
}

/// Register image response: the name under which storage must save the file
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ImageUpload {
    pub image_name: String,
    pub image_url: String,
}

/// Unique stored file name keeping the original extension (lowercased)
pub fn generate_image_name(original_name: &str) -> String {
    let id = Uuid::new_v4().simple();
    match original_name.rsplit_once('.') {
        Some((_, ext)) if !ext.is_empty() => format!("{}.{}", id, ext.to_lowercase()),
        _ => id.to_string(),
    }
}

/// Public URL of a stored image
pub fn image_url(public_path: &str, image_name: &str) -> String {
    format!("{}/{}", public_path.trim_end_matches('/'), image_name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_name_keeps_extension() {
        let name = generate_image_name("Mobil-Home.JPG");
        assert!(name.ends_with(".jpg"));
        assert_eq!(name.len(), 32 + 4);
        assert_ne!(name, generate_image_name("Mobil-Home.JPG"));
    }

    #[test]
    fn test_image_name_validation() {
        assert!(RegisterImage { original_name: "tente.png".into() }.validate().is_ok());
        assert!(RegisterImage { original_name: "notes.txt".into() }.validate().is_err());
        assert!(RegisterImage { original_name: "../etc/a.png".into() }.validate().is_err());
    }

    #[test]
    fn test_image_url() {
        assert_eq!(image_url("/uploads/properties/", "a.png"), "/uploads/properties/a.png");
    }
}
