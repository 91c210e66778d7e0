//! Original document text, by key
//!
//! Only relevance scoring reads the stored text. Each key also gets a
//! sequence number the first time it is stored; match results use it as
//! document order.

use rustc_hash::FxHashMap;

#[derive(Debug, Clone, PartialEq, Eq)]
struct StoredDoc {
    text: String,
    seq: u64,
}

/// Key -> original text mapping
#[derive(Debug, Clone, Default)]
pub struct KeyStore {
    docs: FxHashMap<String, StoredDoc>,
    next_seq: u64,
}

impl KeyStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Store the text for a key.
    ///
    /// Re-storing an existing key replaces its text and keeps its position.
    pub fn insert(&mut self, key: &str, text: &str) {
        if let Some(doc) = self.docs.get_mut(key) {
            doc.text = text.to_string();
            return;
        }
        let seq = self.next_seq;
        self.next_seq += 1;
        self.docs.insert(
            key.to_string(),
            StoredDoc {
                text: text.to_string(),
                seq,
            },
        );
    }

    /// Forget a key. Returns true if it was stored.
    pub fn remove(&mut self, key: &str) -> bool {
        self.docs.remove(key).is_some()
    }

    /// Original text for a key
    pub fn get(&self, key: &str) -> Option<&str> {
        self.docs.get(key).map(|d| d.text.as_str())
    }

    /// Position of a key in document order
    pub fn position(&self, key: &str) -> Option<u64> {
        self.docs.get(key).map(|d| d.seq)
    }

    /// Number of stored keys
    pub fn len(&self) -> usize {
        self.docs.len()
    }

    /// Check if no key is stored
    pub fn is_empty(&self) -> bool {
        self.docs.is_empty()
    }

    /// Forget every key
    pub fn clear(&mut self) {
        self.docs.clear();
        self.next_seq = 0;
    }

    fn ordered_keys(&self) -> Vec<&str> {
        let mut keys: Vec<(&str, u64)> = self
            .docs
            .iter()
            .map(|(k, d)| (k.as_str(), d.seq))
            .collect();
        keys.sort_by_key(|&(_, seq)| seq);
        keys.into_iter().map(|(k, _)| k).collect()
    }
}

impl PartialEq for KeyStore {
    /// Two stores are equal when they hold the same texts in the same
    /// relative order. Absolute sequence numbers are not compared.
    fn eq(&self, other: &Self) -> bool {
        if self.docs.len() != other.docs.len() {
            return false;
        }
        self.ordered_keys() == other.ordered_keys()
            && self
                .docs
                .iter()
                .all(|(key, doc)| other.get(key) == Some(doc.text.as_str()))
    }
}

impl Eq for KeyStore {}
