//! A versioned byte encoding of a whole [`Tree`].
//!
//! Layout:
//! - 4 byte magic `WTRK`
//! - u32 format version (little endian)
//! - u32 payload length (little endian)
//! - u32 crc32 of the payload (little endian)
//! - payload: bincode encoded `Vec<T>` of the tree's values in pre-order
//!
//! Adding pre-order values one by one rebuilds the exact same shape, so a
//! restored tree searches and iterates just like the one that was saved.

use crc32fast::Hasher;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::{Error, Result};
use crate::tree::Tree;

/// Marks the start of every snapshot.
pub const MAGIC: [u8; 4] = *b"WTRK";

/// Newest layout this build writes and reads.
pub const SNAPSHOT_VERSION: u32 = 1;

const HEADER_LEN: usize = 16;

fn checksum(payload: &[u8]) -> u32 {
    let mut hasher = Hasher::new();
    hasher.update(payload);
    hasher.finalize()
}

fn read_u32(bytes: &[u8], at: usize) -> u32 {
    let mut buf = [0u8; 4];
    buf.copy_from_slice(&bytes[at..at + 4]);
    u32::from_le_bytes(buf)
}

/// Serializes every value in `tree`.
pub fn encode<T: Serialize>(tree: &Tree<T>) -> Result<Vec<u8>> {
    let values: Vec<&T> = tree.preorder_iter().collect();
    let payload = bincode::serialize(&values)?;
    let len = u32::try_from(payload.len())
        .map_err(|_| Error::CorruptSnapshot(format!("payload too large: {} bytes", payload.len())))?;

    let mut bytes = Vec::with_capacity(HEADER_LEN + payload.len());
    bytes.extend_from_slice(&MAGIC);
    bytes.extend_from_slice(&SNAPSHOT_VERSION.to_le_bytes());
    bytes.extend_from_slice(&len.to_le_bytes());
    bytes.extend_from_slice(&checksum(&payload).to_le_bytes());
    bytes.extend_from_slice(&payload);
    Ok(bytes)
}

/// Rebuilds a tree from bytes produced by [`encode`].
///
/// # Errors
///
/// - [`Error::CorruptSnapshot`] for a bad magic number, truncated data, a
///   checksum mismatch, or values that repeat.
/// - [`Error::IncompatibleSnapshot`] for a newer format version.
/// - [`Error::Serialization`] if the payload doesn't decode as `Vec<T>`.
pub fn decode<T: DeserializeOwned + Ord>(bytes: &[u8]) -> Result<Tree<T>> {
    if bytes.len() < HEADER_LEN {
        return Err(Error::CorruptSnapshot(format!(
            "truncated header: {} bytes",
            bytes.len()
        )));
    }
    if bytes[..4] != MAGIC {
        return Err(Error::CorruptSnapshot("bad magic".to_string()));
    }

    let version = read_u32(bytes, 4);
    if version > SNAPSHOT_VERSION {
        return Err(Error::IncompatibleSnapshot {
            expected: SNAPSHOT_VERSION,
            actual: version,
        });
    }

    let len = read_u32(bytes, 8) as usize;
    let stored_crc = read_u32(bytes, 12);
    let payload = &bytes[HEADER_LEN..];
    if payload.len() != len {
        return Err(Error::CorruptSnapshot(format!(
            "payload length mismatch: expected {}, found {}",
            len,
            payload.len()
        )));
    }
    if checksum(payload) != stored_crc {
        return Err(Error::CorruptSnapshot(
            "checksum mismatch (corrupt payload)".to_string(),
        ));
    }

    let values: Vec<T> = bincode::deserialize(payload)?;
    let mut tree = Tree::new();
    for value in values {
        if !tree.add(value) {
            return Err(Error::CorruptSnapshot("duplicate value".to_string()));
        }
    }
    Ok(tree)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::words::{SourceLine, WordIndex};

    fn sample() -> Tree<i32> {
        [5, 3, 8, 1, 4, 7, 9].into_iter().collect()
    }

    #[test]
    fn restores_shape() {
        let tree = sample();
        let restored: Tree<i32> = decode(&encode(&tree).unwrap()).unwrap();

        assert_eq!(restored.len(), tree.len());
        assert_eq!(restored.height(), tree.height());
        assert!(restored.preorder_iter().eq(tree.preorder_iter()));
        assert!(restored.postorder_iter().eq(tree.postorder_iter()));
    }

    #[test]
    fn restores_degenerate_chain() {
        let tree: Tree<i32> = (0..50).collect();
        let restored: Tree<i32> = decode(&encode(&tree).unwrap()).unwrap();

        assert_eq!(restored.height(), 50);
    }

    #[test]
    fn empty_tree() {
        let tree: Tree<i32> = Tree::new();
        let bytes = encode(&tree).unwrap();
        assert_eq!(&bytes[..4], b"WTRK");

        let restored: Tree<i32> = decode(&bytes).unwrap();
        assert!(restored.is_empty());
    }

    #[test]
    fn restores_word_locations() {
        let mut index = WordIndex::new();
        index
            .ingest(vec![
                SourceLine::new("a.txt", 1, "the cat"),
                SourceLine::new("b.txt", 9, "the end"),
            ])
            .unwrap();

        let restored = WordIndex::from(decode(&encode(index.tree()).unwrap()).unwrap());

        assert_eq!(restored.len(), 3);
        let the = restored.get("the").unwrap();
        assert_eq!(the.locations()["a.txt"], [1]);
        assert_eq!(the.locations()["b.txt"], [9]);
    }

    #[test]
    fn rejects_bad_magic() {
        let mut bytes = encode(&sample()).unwrap();
        bytes[0] = b'X';
        assert!(matches!(decode::<i32>(&bytes), Err(Error::CorruptSnapshot(_))));
    }

    #[test]
    fn rejects_truncation() {
        let bytes = encode(&sample()).unwrap();
        assert!(matches!(decode::<i32>(&bytes[..10]), Err(Error::CorruptSnapshot(_))));
        assert!(matches!(
            decode::<i32>(&bytes[..bytes.len() - 1]),
            Err(Error::CorruptSnapshot(_))
        ));
    }

    #[test]
    fn rejects_flipped_payload_bit() {
        let mut bytes = encode(&sample()).unwrap();
        let last = bytes.len() - 1;
        bytes[last] ^= 0x01;
        assert!(matches!(decode::<i32>(&bytes), Err(Error::CorruptSnapshot(_))));
    }

    #[test]
    fn rejects_newer_version() {
        let mut bytes = encode(&sample()).unwrap();
        bytes[4..8].copy_from_slice(&(SNAPSHOT_VERSION + 1).to_le_bytes());
        assert!(matches!(
            decode::<i32>(&bytes),
            Err(Error::IncompatibleSnapshot { expected: 1, actual: 2 })
        ));
    }

    #[test]
    fn rejects_duplicates() {
        let payload = bincode::serialize(&vec![1i32, 2, 1]).unwrap();
        let mut bytes = Vec::new();
        bytes.extend_from_slice(&MAGIC);
        bytes.extend_from_slice(&SNAPSHOT_VERSION.to_le_bytes());
        bytes.extend_from_slice(&(payload.len() as u32).to_le_bytes());
        bytes.extend_from_slice(&checksum(&payload).to_le_bytes());
        bytes.extend_from_slice(&payload);

        assert!(matches!(decode::<i32>(&bytes), Err(Error::CorruptSnapshot(_))));
    }
}
