//! Subtitle file reading with legacy-encoding fallback
//!
//! SRT files from CJK sources are frequently GBK-encoded with no marker.
//! Reading tries strict UTF-8 first and retries the whole file as GBK on
//! failure; if neither decodes cleanly the file is rejected.

use crate::core::models::results::{CoreError, CoreResult};
use std::path::Path;

/// Read a subtitle file as text, stripping a leading BOM if present.
pub fn read_subtitle_file(path: &Path) -> CoreResult<String> {
    let bytes = std::fs::read(path)?;

    if let Ok(text) = std::str::from_utf8(&bytes) {
        return Ok(strip_bom(text).to_string());
    }

    let (text, _, had_errors) = encoding_rs::GBK.decode(&bytes);
    if had_errors {
        return Err(CoreError::DecodeError(format!(
            "{} is neither valid UTF-8 nor GBK",
            path.display()
        )));
    }
    tracing::debug!("decoded {} as GBK", path.display());
    Ok(strip_bom(&text).to_string())
}

fn strip_bom(text: &str) -> &str {
    text.strip_prefix('\u{feff}').unwrap_or(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_temp(bytes: &[u8]) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(bytes).unwrap();
        file
    }

    #[test]
    fn test_reads_utf8() {
        let file = write_temp("héllo\n".as_bytes());
        assert_eq!(read_subtitle_file(file.path()).unwrap(), "héllo\n");
    }

    #[test]
    fn test_strips_utf8_bom() {
        let file = write_temp(b"\xEF\xBB\xBFhello");
        assert_eq!(read_subtitle_file(file.path()).unwrap(), "hello");
    }

    #[test]
    fn test_falls_back_to_gbk() {
        // "你好" in GBK
        let file = write_temp(&[0xC4, 0xE3, 0xBA, 0xC3]);
        assert_eq!(read_subtitle_file(file.path()).unwrap(), "你好");
    }

    #[test]
    fn test_rejects_undecodable_bytes() {
        let file = write_temp(&[0xFF, 0xFF, 0x81]);
        assert!(matches!(
            read_subtitle_file(file.path()),
            Err(CoreError::DecodeError(_))
        ));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let result = read_subtitle_file(Path::new("/nonexistent/subs.srt"));
        assert!(matches!(result, Err(CoreError::Io(_))));
    }
}
