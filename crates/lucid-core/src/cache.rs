//! Result memoization.

use std::collections::{HashMap, VecDeque};

use lucid_protocols::{Language, ModelId};

/// Default number of memoized results.
pub const DEFAULT_CAPACITY: usize = 128;

/// Exact-match cache key. The prompt already encodes the selection, the
/// context, and the extra instructions, so keying on it plus the model and
/// language pins down the full request.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey {
    pub model: ModelId,
    pub language: Language,
    pub prompt: String,
}

/// Bounded LRU map from request key to response text.
///
/// Only the non-streaming path uses this; partial streamed output is never
/// memoized. Hits refresh recency, inserts evict the least recently used
/// entry once the capacity is reached.
pub struct ResultCache {
    capacity: usize,
    entries: HashMap<CacheKey, String>,
    // Front is least recently used.
    order: VecDeque<CacheKey>,
}

impl ResultCache {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity: capacity.max(1),
            entries: HashMap::new(),
            order: VecDeque::new(),
        }
    }

    pub fn get(&mut self, key: &CacheKey) -> Option<String> {
        let text = self.entries.get(key)?.clone();
        self.touch(key);
        Some(text)
    }

    pub fn insert(&mut self, key: CacheKey, text: String) {
        if self.entries.insert(key.clone(), text).is_some() {
            self.touch(&key);
            return;
        }

        self.order.push_back(key);
        if self.entries.len() > self.capacity {
            if let Some(oldest) = self.order.pop_front() {
                self.entries.remove(&oldest);
            }
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn touch(&mut self, key: &CacheKey) {
        if let Some(pos) = self.order.iter().position(|k| k == key) {
            if let Some(k) = self.order.remove(pos) {
                self.order.push_back(k);
            }
        }
    }
}

impl Default for ResultCache {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

#[cfg(test)]
#[path = "cache_tests.rs"]
mod tests;
