//! JSON file encoding of an entity set.
//!
//! The document is a JSON array of entity records. Writes go to a sibling
//! `*.tmp` file that is then renamed over the target, so the target holds
//! either the previous document or the new one.

use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde::de::DeserializeOwned;

use super::config::JsonLayout;
use super::error::{StoreError, StoreResult};

/// What `load_from_file` found at the backing path.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    /// No file at the backing path; entries untouched.
    Missing,
    /// File present but blank; entries untouched.
    Empty,
    /// Entries replaced by this many records.
    Loaded(usize),
}

/// Leading byte order mark some editors write before UTF-8 text.
const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

pub(crate) enum Document<E> {
    Missing,
    Empty,
    Records(Vec<E>),
}

pub(crate) fn write_document<E: Serialize>(
    path: &Path,
    records: &[&E],
    layout: JsonLayout,
) -> StoreResult<()> {
    let bytes = match layout {
        JsonLayout::Pretty => serde_json::to_vec_pretty(records),
        JsonLayout::Compact => serde_json::to_vec(records),
    }
    .map_err(|e| StoreError::serialization(path, e))?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| StoreError::io(parent, e))?;
    }

    let tmp = temp_path(path);
    if let Err(e) = fs::write(&tmp, &bytes) {
        let _ = fs::remove_file(&tmp);
        return Err(StoreError::io(&tmp, e));
    }
    if let Err(e) = fs::rename(&tmp, path) {
        let _ = fs::remove_file(&tmp);
        return Err(StoreError::io(path, e));
    }
    Ok(())
}

pub(crate) fn read_document<E: DeserializeOwned>(path: &Path) -> StoreResult<Document<E>> {
    let bytes = match fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Document::Missing),
        Err(e) => return Err(StoreError::io(path, e)),
    };

    let content = bytes.strip_prefix(UTF8_BOM).unwrap_or(&bytes[..]);
    if content.iter().all(u8::is_ascii_whitespace) {
        return Ok(Document::Empty);
    }

    let records: Vec<E> =
        serde_json::from_slice(content).map_err(|e| StoreError::malformed(path, e.to_string()))?;
    Ok(Document::Records(records))
}

fn temp_path(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(OsString::from)
        .unwrap_or_else(|| OsString::from("store"));
    name.push(".tmp");
    path.with_file_name(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn temp_path_is_a_sibling() {
        assert_eq!(
            temp_path(Path::new("data/items.json")),
            PathBuf::from("data/items.json.tmp")
        );
    }

    #[test]
    fn blank_file_reads_as_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("blank.json");
        fs::write(&path, " \n\t ").unwrap();
        assert!(matches!(
            read_document::<u32>(&path).unwrap(),
            Document::Empty
        ));
    }

    #[test]
    fn missing_file_reads_as_missing() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            read_document::<u32>(&dir.path().join("absent.json")).unwrap(),
            Document::Missing
        ));
    }

    #[test]
    fn compact_and_pretty_both_read_back() {
        let dir = tempfile::tempdir().unwrap();
        let values = [1_u32, 2, 3];
        let refs: Vec<&u32> = values.iter().collect();

        for layout in [JsonLayout::Pretty, JsonLayout::Compact] {
            let path = dir.path().join(format!("{layout:?}.json"));
            write_document(&path, &refs, layout).unwrap();
            match read_document::<u32>(&path).unwrap() {
                Document::Records(back) => assert_eq!(back, values),
                _ => panic!("expected records"),
            }
            assert!(!temp_path(&path).exists());
        }
    }

    struct Unserializable;

    impl Serialize for Unserializable {
        fn serialize<S: serde::Serializer>(&self, _: S) -> Result<S::Ok, S::Error> {
            Err(serde::ser::Error::custom("refuses to serialize"))
        }
    }

    #[test]
    fn serialization_failure_is_not_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("never.json");
        let value = Unserializable;

        let err = write_document(&path, &[&value], JsonLayout::Pretty).unwrap_err();
        assert!(matches!(err, StoreError::Serialization { .. }));
        assert!(!path.exists());
        assert!(!temp_path(&path).exists());
    }

    #[test]
    fn leading_bom_is_stripped() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bom.json");

        fs::write(&path, "\u{feff}[1,2]").unwrap();
        match read_document::<u32>(&path).unwrap() {
            Document::Records(back) => assert_eq!(back, vec![1, 2]),
            _ => panic!("expected records"),
        }

        fs::write(&path, "\u{feff}").unwrap();
        assert!(matches!(read_document::<u32>(&path).unwrap(), Document::Empty));
    }

    #[test]
    fn non_utf8_content_is_malformed() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("binary.json");
        fs::write(&path, [0xff, 0xfe, 0x00]).unwrap();
        assert!(matches!(
            read_document::<u32>(&path),
            Err(StoreError::Malformed { .. })
        ));
    }
}
