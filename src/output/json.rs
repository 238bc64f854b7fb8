use std::fs;
use std::io::{self, Write};
use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::ser::{Formatter, PrettyFormatter, Serializer};

use crate::error::SliceError;
use crate::manifest::Manifest;

const INDENT: &[u8] = b"    ";

/// Pretty printer that keeps string contents to printable ASCII.
///
/// Anything outside `' '..='~'` is written as `\uXXXX` with lowercase hex,
/// characters beyond the BMP as a surrogate pair.
struct AsciiFormatter<'a> {
    inner: PrettyFormatter<'a>,
}

impl<'a> AsciiFormatter<'a> {
    fn with_indent(indent: &'a [u8]) -> Self {
        Self {
            inner: PrettyFormatter::with_indent(indent),
        }
    }
}

impl Formatter for AsciiFormatter<'_> {
    fn begin_array<W: ?Sized + Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.inner.begin_array(writer)
    }

    fn end_array<W: ?Sized + Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.inner.end_array(writer)
    }

    fn begin_array_value<W: ?Sized + Write>(
        &mut self,
        writer: &mut W,
        first: bool,
    ) -> io::Result<()> {
        self.inner.begin_array_value(writer, first)
    }

    fn end_array_value<W: ?Sized + Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.inner.end_array_value(writer)
    }

    fn begin_object<W: ?Sized + Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.inner.begin_object(writer)
    }

    fn end_object<W: ?Sized + Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.inner.end_object(writer)
    }

    fn begin_object_key<W: ?Sized + Write>(
        &mut self,
        writer: &mut W,
        first: bool,
    ) -> io::Result<()> {
        self.inner.begin_object_key(writer, first)
    }

    fn begin_object_value<W: ?Sized + Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.inner.begin_object_value(writer)
    }

    fn end_object_value<W: ?Sized + Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.inner.end_object_value(writer)
    }

    fn write_string_fragment<W: ?Sized + Write>(
        &mut self,
        writer: &mut W,
        fragment: &str,
    ) -> io::Result<()> {
        for ch in fragment.chars() {
            if (' '..='~').contains(&ch) {
                writer.write_all(ch.encode_utf8(&mut [0; 4]).as_bytes())?;
            } else {
                for unit in ch.encode_utf16(&mut [0; 2]) {
                    write!(writer, "\\u{:04x}", unit)?;
                }
            }
        }
        Ok(())
    }
}

/// Render the manifest as JSON indented with four spaces.
///
/// String contents are ASCII-only: `café.png` is written as `"caf\u00e9.png"`.
pub fn manifest_to_string(manifest: &Manifest) -> Result<String> {
    let mut buf = Vec::new();
    let mut serializer = Serializer::with_formatter(&mut buf, AsciiFormatter::with_indent(INDENT));
    manifest
        .serialize(&mut serializer)
        .context("failed to serialize manifest")?;

    String::from_utf8(buf).context("manifest JSON is not valid UTF-8")
}

/// Write the manifest to `path`, replacing any existing file.
///
/// The document is rendered in full before the file is touched, so a
/// serialization failure leaves an existing file unchanged. The bytes are
/// those of [`manifest_to_string`].
pub fn write_manifest(manifest: &Manifest, path: &Path) -> Result<()> {
    let content = manifest_to_string(manifest)?;

    fs::write(path, content).map_err(|e| SliceError::OutputWrite {
        path: path.to_path_buf(),
        source: e,
    })?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::manifest::SpriteRecord;

    fn two_records() -> Manifest {
        let mut manifest = Manifest::new();
        manifest.push(SpriteRecord::new(0, "sheet.png", (1, 1)), true);
        manifest.push(SpriteRecord::new(1, "sheet.png", (0, 0)), false);
        manifest
    }

    fn single_record(sheet: &str) -> Manifest {
        let mut manifest = Manifest::new();
        manifest.push(SpriteRecord::new(0, sheet, (0, 0)), false);
        manifest
    }

    #[test]
    fn test_four_space_layout() {
        let expected = r#"{
    "0": {
        "displayName": "",
        "spriteSheet": "sheet.png",
        "xTrim": 2,
        "yTrim": 2,
        "states": {
            "default": [
                0
            ]
        }
    },
    "1": {
        "displayName": "",
        "spriteSheet": "sheet.png",
        "xTrim": 1,
        "yTrim": 1,
        "states": {
            "default": [
                1
            ]
        }
    }
}"#;
        assert_eq!(manifest_to_string(&two_records()).unwrap(), expected);
    }

    #[test]
    fn test_non_ascii_sheet_name_is_escaped() {
        let sheet = "caf\u{e9}/\u{1f600}\u{7f}.png";
        let text = manifest_to_string(&single_record(sheet)).unwrap();

        assert!(text.is_ascii());
        assert!(text.contains(r#""spriteSheet": "caf\u00e9/\ud83d\ude00\u007f.png","#));

        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["0"]["spriteSheet"], sheet);
    }

    #[test]
    fn test_quotes_and_control_characters_are_escaped() {
        let text = manifest_to_string(&single_record("a\"b\\c\td.png")).unwrap();
        assert!(text.contains(r#""spriteSheet": "a\"b\\c\td.png","#));
    }

    #[test]
    fn test_empty_manifest() {
        assert_eq!(manifest_to_string(&Manifest::new()).unwrap(), "{}");
    }

    #[test]
    fn test_write_overwrites_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sprites.json");
        fs::write(&path, "stale content that is longer than nothing").unwrap();

        write_manifest(&Manifest::new(), &path).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "{}");
    }

    #[test]
    fn test_write_into_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("no/such/dir/sprites.json");

        let err = write_manifest(&two_records(), &path).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<SliceError>(),
            Some(SliceError::OutputWrite { .. })
        ));
    }
}
