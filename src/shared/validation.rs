use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Attachment names: a bare filename, no directories or control characters
    /// - Valid: "blast.jpg", "IMG 0042.HEIC", "வீடியோ.mp4"
    /// - Invalid: "", "../etc/passwd", "C:\\photo.jpg", ".env", "a\nb.png"
    pub static ref MEDIA_FILENAME_REGEX: Regex =
        Regex::new(r"^[^./\\[:cntrl:]][^/\\[:cntrl:]]{0,254}$").unwrap();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_media_filename_regex() {
        assert!(MEDIA_FILENAME_REGEX.is_match("blast.jpg"));
        assert!(MEDIA_FILENAME_REGEX.is_match("IMG 0042.HEIC"));
        assert!(MEDIA_FILENAME_REGEX.is_match("வீடியோ.mp4"));
        assert!(!MEDIA_FILENAME_REGEX.is_match(""));
        assert!(!MEDIA_FILENAME_REGEX.is_match("../etc/passwd"));
        assert!(!MEDIA_FILENAME_REGEX.is_match("photos/blast.jpg"));
        assert!(!MEDIA_FILENAME_REGEX.is_match("C:\\photo.jpg"));
        assert!(!MEDIA_FILENAME_REGEX.is_match(".env")); // leading dot
        assert!(!MEDIA_FILENAME_REGEX.is_match("a\nb.png"));
        assert!(!MEDIA_FILENAME_REGEX.is_match(&"a".repeat(256)));
    }
}
