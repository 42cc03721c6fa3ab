//! Human-friendly names for common MIME types.

/// Resolve a MIME type to a human-friendly name.
///
/// Returns `None` for unknown types; callers fall back to the raw
/// type string.
pub fn friendly_mime_name(mime: &str) -> Option<&'static str> {
    let name = match mime {
        "application/pdf" => "Adobe Portable Document Format (PDF)",
        "application/zip" => "ZIP Archive",
        "application/gzip" => "GZip Compressed Archive",
        "application/x-tar" => "Tape Archive (TAR)",
        "application/x-7z-compressed" => "7-zip Archive",
        "application/vnd.rar" => "RAR Archive",
        "application/json" => "JSON Document",
        "application/xml" => "XML Document",
        "application/rtf" => "Rich Text Format (RTF)",
        "application/msword" => "Microsoft Word Document",
        "application/vnd.openxmlformats-officedocument.wordprocessingml.document" => {
            "Microsoft Word Document (OpenXML)"
        }
        "application/vnd.ms-excel" => "Microsoft Excel Spreadsheet",
        "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet" => {
            "Microsoft Excel Spreadsheet (OpenXML)"
        }
        "application/vnd.ms-powerpoint" => "Microsoft PowerPoint Presentation",
        "application/vnd.openxmlformats-officedocument.presentationml.presentation" => {
            "Microsoft PowerPoint Presentation (OpenXML)"
        }
        "application/vnd.oasis.opendocument.text" => "OpenDocument Text",
        "application/vnd.oasis.opendocument.spreadsheet" => "OpenDocument Spreadsheet",
        "application/octet-stream" => "Binary Data",
        "application/pgp-encrypted" => "PGP Encrypted File",
        "text/plain" => "Plain Text Document",
        "text/html" => "HyperText Markup Language (HTML)",
        "text/css" => "Cascading Style Sheet (CSS)",
        "text/csv" => "Comma-Separated Values (CSV)",
        "text/calendar" => "iCalendar Format",
        "image/png" => "Portable Network Graphics (PNG)",
        "image/jpeg" => "JPEG Image",
        "image/gif" => "Graphics Interchange Format (GIF)",
        "image/webp" => "WebP Image",
        "image/svg+xml" => "Scalable Vector Graphics (SVG)",
        "image/tiff" => "Tagged Image File Format (TIFF)",
        "image/bmp" => "Windows Bitmap Graphics",
        "audio/mpeg" => "MP3 Audio",
        "audio/ogg" => "Ogg Audio",
        "audio/wav" => "Waveform Audio",
        "video/mp4" => "MPEG-4 Video",
        "video/mpeg" => "MPEG Video",
        "video/webm" => "WebM Video",
        "video/quicktime" => "QuickTime Video",
        _ => return None,
    };
    Some(name)
}

/// Friendly name with raw-type fallback.
pub fn mime_label(mime: &str) -> String {
    friendly_mime_name(mime)
        .map(str::to_string)
        .unwrap_or_else(|| mime.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_types() {
        assert_eq!(
            friendly_mime_name("application/pdf"),
            Some("Adobe Portable Document Format (PDF)")
        );
        assert_eq!(friendly_mime_name("image/png"), Some("Portable Network Graphics (PNG)"));
    }

    #[test]
    fn test_unknown_type_falls_back() {
        assert_eq!(friendly_mime_name("application/x-sylk-custom"), None);
        assert_eq!(mime_label("application/x-sylk-custom"), "application/x-sylk-custom");
    }

    #[test]
    fn test_label_uses_friendly_name() {
        assert_eq!(mime_label("text/plain"), "Plain Text Document");
    }
}
