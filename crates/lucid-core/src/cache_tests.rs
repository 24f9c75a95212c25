use super::*;

fn key(prompt: &str) -> CacheKey {
    CacheKey {
        model: ModelId::default(),
        language: Language::default(),
        prompt: prompt.to_string(),
    }
}

#[test]
fn test_insert_and_get() {
    let mut cache = ResultCache::new(4);
    cache.insert(key("a"), "alpha".to_string());

    assert_eq!(cache.get(&key("a")), Some("alpha".to_string()));
    assert_eq!(cache.get(&key("b")), None);
}

#[test]
fn test_key_includes_model_and_language() {
    let mut cache = ResultCache::new(4);
    cache.insert(key("a"), "default".to_string());

    let other_model = CacheKey {
        model: ModelId::Gemini25Pro,
        ..key("a")
    };
    assert_eq!(cache.get(&other_model), None);

    let other_language = CacheKey {
        language: Language::parse("French").unwrap(),
        ..key("a")
    };
    assert_eq!(cache.get(&other_language), None);
}

#[test]
fn test_eviction_at_capacity() {
    let mut cache = ResultCache::new(2);
    cache.insert(key("a"), "1".to_string());
    cache.insert(key("b"), "2".to_string());
    cache.insert(key("c"), "3".to_string());

    assert_eq!(cache.len(), 2);
    assert_eq!(cache.get(&key("a")), None);
    assert_eq!(cache.get(&key("b")), Some("2".to_string()));
    assert_eq!(cache.get(&key("c")), Some("3".to_string()));
}

#[test]
fn test_get_refreshes_recency() {
    let mut cache = ResultCache::new(2);
    cache.insert(key("a"), "1".to_string());
    cache.insert(key("b"), "2".to_string());

    // Touch "a" so "b" becomes the eviction candidate.
    cache.get(&key("a"));
    cache.insert(key("c"), "3".to_string());

    assert_eq!(cache.get(&key("a")), Some("1".to_string()));
    assert_eq!(cache.get(&key("b")), None);
}

#[test]
fn test_reinsert_updates_value_and_recency() {
    let mut cache = ResultCache::new(2);
    cache.insert(key("a"), "old".to_string());
    cache.insert(key("b"), "2".to_string());
    cache.insert(key("a"), "new".to_string());
    cache.insert(key("c"), "3".to_string());

    assert_eq!(cache.get(&key("a")), Some("new".to_string()));
    assert_eq!(cache.get(&key("b")), None);
    assert_eq!(cache.len(), 2);
}

#[test]
fn test_zero_capacity_is_clamped() {
    let mut cache = ResultCache::new(0);
    cache.insert(key("a"), "1".to_string());
    assert_eq!(cache.get(&key("a")), Some("1".to_string()));
    assert_eq!(cache.len(), 1);
}

#[test]
fn test_is_empty() {
    let mut cache = ResultCache::default();
    assert!(cache.is_empty());
    cache.insert(key("a"), "1".to_string());
    assert!(!cache.is_empty());
}
