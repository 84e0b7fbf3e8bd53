use sha2::{Digest, Sha256};

use crate::record::ContentType;

/// Separator between the hashed fields and between content lines. Normalized
/// lines are not expected to contain it; a collision would only hide a change.
pub const FIELD_DELIMITER: &str = "||";

/// Lowercase hex SHA-256 over `title || tag || line1 || line2 ...`.
pub fn fingerprint(title: &str, content_type: ContentType, content: &[String]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(title.as_bytes());
    hasher.update(FIELD_DELIMITER.as_bytes());
    hasher.update(content_type.tag().as_bytes());
    hasher.update(FIELD_DELIMITER.as_bytes());
    hasher.update(content.join(FIELD_DELIMITER).as_bytes());
    let digest = hasher.finalize();

    let mut hex = String::with_capacity(digest.len() * 2);
    for byte in digest.iter() {
        use std::fmt::Write;
        let _ = write!(&mut hex, "{byte:02x}");
    }
    hex
}
