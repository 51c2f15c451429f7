//! JSON (de)serialization of the whole dataset.
//!
//! Decoding is total: whatever bytes are on disk, the result is a usable
//! [`Dataset`]. A document that does not match the full shape is decoded
//! field by field so that one malformed field does not discard the rest.

use std::io::ErrorKind;
use std::path::Path;

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use nav_crypto::default_admin;
use nav_types::{AdminAuth, Dataset};

use crate::error::{StoreError, StoreResult};

/// How a dataset was obtained from its raw bytes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Recovery {
    /// The document matched the full shape.
    Clean,
    /// The document was decoded field by field; some fields were defaulted.
    Partial,
    /// Nothing usable was found; the default dataset was used.
    Reset,
}

/// The dataset a fresh install starts with.
pub fn default_dataset() -> Dataset {
    Dataset::empty(default_admin())
}

/// Decode raw file contents into a normalized dataset.
pub fn decode(raw: &[u8]) -> (Dataset, Recovery) {
    if is_blank(raw) {
        return (default_dataset(), Recovery::Reset);
    }

    let (mut dataset, recovery) = match serde_json::from_slice::<Dataset>(raw) {
        Ok(dataset) => (dataset, Recovery::Clean),
        Err(_) => match serde_json::from_slice::<Map<String, Value>>(raw) {
            Ok(fields) => (decode_fields(fields), Recovery::Partial),
            Err(_) => return (default_dataset(), Recovery::Reset),
        },
    };
    dataset.normalize(default_admin);
    (dataset, recovery)
}

/// Empty or whitespace-only contents, as left by a fresh install.
fn is_blank(raw: &[u8]) -> bool {
    raw.iter().all(u8::is_ascii_whitespace)
}

fn decode_fields(mut fields: Map<String, Value>) -> Dataset {
    let mut dataset = Dataset::default();
    if let Some(next_id) = take_field::<u32>(&mut fields, "next_id").filter(|n| *n > 0) {
        dataset.next_id = next_id;
    }
    if let Some(categories) = take_field(&mut fields, "categories") {
        dataset.categories = categories;
    }
    if let Some(items) = take_field(&mut fields, "items") {
        dataset.items = items;
    }
    if let Some(admin) = take_field::<AdminAuth>(&mut fields, "admin").filter(AdminAuth::is_complete) {
        dataset.admin = admin;
    }
    dataset
}

fn take_field<T: DeserializeOwned>(fields: &mut Map<String, Value>, key: &str) -> Option<T> {
    let value = fields.remove(key)?;
    serde_json::from_value(value).ok()
}

/// Read and decode the dataset at `path`.
///
/// Never fails: a missing, empty, unreadable, or unparsable file yields the
/// default dataset.
pub fn load(path: &Path) -> Dataset {
    let raw = match std::fs::read(path) {
        Ok(raw) => raw,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            tracing::info!("no dataset at {}, starting fresh", path.display());
            return default_dataset();
        }
        Err(e) => {
            tracing::warn!("cannot read dataset at {}: {e}; starting fresh", path.display());
            return default_dataset();
        }
    };

    let (dataset, recovery) = decode(&raw);
    match recovery {
        Recovery::Clean => {}
        Recovery::Partial => tracing::warn!(
            "dataset at {} did not match the expected shape; recovered what could be decoded",
            path.display()
        ),
        Recovery::Reset if is_blank(&raw) => {}
        Recovery::Reset => tracing::warn!(
            "dataset at {} is not a JSON object; starting fresh",
            path.display()
        ),
    }
    tracing::debug!(
        categories = dataset.categories.len(),
        items = dataset.items.len(),
        next_id = dataset.next_id,
        "loaded dataset"
    );
    dataset
}

/// Encode the full dataset, password digest included, as indented JSON.
pub fn encode(dataset: &Dataset) -> StoreResult<Vec<u8>> {
    serde_json::to_vec_pretty(dataset).map_err(|e| StoreError::Serialization(e.to_string()))
}

/// Overwrite `path` with the encoded dataset.
pub fn save(path: &Path, dataset: &Dataset) -> StoreResult<()> {
    let payload = encode(dataset)?;
    std::fs::write(path, payload)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use nav_crypto::{hash_password, verify_password};
    use nav_types::{CategoryDraft, ItemDraft};
    use proptest::prelude::*;

    fn populated() -> Dataset {
        let mut ds = Dataset::empty(AdminAuth::new("root", hash_password("pw")));
        ds.categories.push(CategoryDraft::new("Work", 2).into_category(1));
        ds.categories.push(CategoryDraft::new("Home", -1).into_category(3));
        let mut item = ItemDraft::new("Site", "https://x").in_category(1);
        item.avatar_url = "https://x/icon.png".into();
        item.summary = "a site".into();
        item.order = 5;
        ds.items.push(item.into_item(2));
        ds.items.push(ItemDraft::new("Loose", "https://y").into_item(4));
        ds.next_id = 5;
        ds
    }

    fn is_default(ds: &Dataset) -> bool {
        ds.next_id == 1
            && ds.categories.is_empty()
            && ds.items.is_empty()
            && ds.admin.username == "admin"
            && verify_password("admin", &ds.admin.password_hash)
    }

    #[test]
    fn missing_file_yields_default() {
        let dir = tempfile::tempdir().unwrap();
        assert!(is_default(&load(&dir.path().join("absent.json"))));
    }

    #[test]
    fn empty_file_yields_default() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data.json");
        std::fs::write(&path, b"").unwrap();
        assert!(is_default(&load(&path)));
        assert_eq!(decode(b"  \n").1, Recovery::Reset);
    }

    #[test]
    fn directory_path_yields_default() {
        let dir = tempfile::tempdir().unwrap();
        assert!(is_default(&load(dir.path())));
    }

    #[test]
    fn save_then_load_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data.json");
        let original = populated();
        save(&path, &original).unwrap();
        assert_eq!(load(&path), original);
    }

    #[test]
    fn saved_file_is_indented_and_keeps_hash() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data.json");
        save(&path, &populated()).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.contains("\n  \"next_id\": 5"));
        assert!(text.contains(&hash_password("pw")));
        assert!(text.contains("\"category_id\": null"));
    }

    #[test]
    fn save_into_missing_directory_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope").join("data.json");
        let err = save(&path, &populated()).unwrap_err();
        assert!(matches!(err, StoreError::Io(_)));
    }

    #[test]
    fn strict_document_missing_admin_gets_default() {
        let (ds, recovery) = decode(br#"{"next_id": 3, "categories": [{"id": 1, "name": "A", "order": 0}]}"#);
        assert_eq!(recovery, Recovery::Clean);
        assert_eq!(ds.next_id, 3);
        assert_eq!(ds.categories.len(), 1);
        assert!(verify_password("admin", &ds.admin.password_hash));
    }

    #[test]
    fn whitespace_only_counts_as_blank() {
        assert!(is_blank(b""));
        assert!(is_blank(b" \n\t\r\n"));
        assert!(!is_blank(b" {} "));
        assert!(!is_blank(b"\0"));
    }

    #[test]
    fn null_collections_decode_cleanly() {
        let raw = br#"{
            "next_id": 3,
            "categories": null,
            "items": [{"id": 2, "name": "Site", "url": "https://x", "category_id": null}],
            "admin": {"username": "root", "password_hash": "abc"}
        }"#;
        let (ds, recovery) = decode(raw);
        assert_eq!(recovery, Recovery::Clean);
        assert!(ds.categories.is_empty());
        assert_eq!(ds.items.len(), 1);
        assert_eq!(ds.admin.username, "root");
    }

    #[test]
    fn zero_next_id_forced_to_one() {
        let (ds, _) = decode(br#"{"next_id": 0}"#);
        assert_eq!(ds.next_id, 1);
    }

    #[test]
    fn incomplete_admin_replaced() {
        let (ds, _) = decode(br#"{"admin": {"username": "root", "password_hash": ""}}"#);
        assert_eq!(ds.admin.username, "admin");
    }

    #[test]
    fn one_bad_field_keeps_the_rest() {
        let raw = br#"{
            "next_id": 9,
            "categories": "not a list",
            "items": [{"id": 4, "name": "Site", "url": "https://x", "category_id": 1}],
            "admin": {"username": "root", "password_hash": "abc"}
        }"#;
        let (ds, recovery) = decode(raw);
        assert_eq!(recovery, Recovery::Partial);
        assert_eq!(ds.next_id, 9);
        assert!(ds.categories.is_empty());
        assert_eq!(ds.items.len(), 1);
        assert_eq!(ds.items[0].category_id, Some(1));
        assert_eq!(ds.admin.username, "root");
    }

    #[test]
    fn loose_parse_rejects_negative_next_id() {
        let (ds, recovery) = decode(br#"{"next_id": -4, "items": []}"#);
        assert_eq!(recovery, Recovery::Partial);
        assert_eq!(ds.next_id, 1);
    }

    #[test]
    fn loose_parse_bumps_next_id_past_items() {
        let (ds, _) = decode(br#"{"next_id": "x", "items": [{"id": 12, "name": "a", "url": "b"}]}"#);
        assert_eq!(ds.next_id, 13);
    }

    #[test]
    fn truncated_json_yields_default() {
        let raw = encode(&populated()).unwrap();
        let (ds, recovery) = decode(&raw[..raw.len() / 2]);
        assert_eq!(recovery, Recovery::Reset);
        assert!(is_default(&ds));
    }

    #[test]
    fn non_object_json_yields_default() {
        for raw in [&b"[1,2,3]"[..], b"null", b"42", b"\"text\""] {
            assert!(is_default(&decode(raw).0));
        }
    }

    proptest! {
        #[test]
        fn decode_is_total(raw in proptest::collection::vec(any::<u8>(), 0..256)) {
            let (ds, _) = decode(&raw);
            prop_assert!(ds.next_id >= 1);
            prop_assert!(ds.admin.is_complete());
        }

        #[test]
        fn decode_is_total_on_json_like_text(raw in r#"\{("[a-z_]{1,10}": ?(null|[0-9-]{1,4}|"[a-z]*"|\[\]|\{\}),? ?){0,5}\}?"#) {
            let (ds, _) = decode(raw.as_bytes());
            prop_assert!(ds.next_id >= 1);
            prop_assert!(ds.admin.is_complete());
        }
    }
}
