use crate::source::{FontKey, FontSource};
use crate::LogoError;
use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};

/// How long a loaded font is kept unless configured otherwise (one day)
pub const DEFAULT_TTL: Duration = Duration::from_secs(86_400);
/// How many fonts are kept unless configured otherwise
pub const DEFAULT_CAPACITY: usize = 100;

/// Counters describing how well a [FontCache] is doing
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
    /// Entries dropped to make room, not counting expiries
    pub evictions: u64,
    pub entries: usize,
}

struct Entry<F> {
    font: Arc<F>,
    loaded_at: Instant,
    inserted: u64,
}

impl<F> Entry<F> {
    fn is_fresh(&self, ttl: Duration) -> bool {
        self.loaded_at.elapsed() < ttl
    }
}

struct Inner<F> {
    entries: HashMap<FontKey, Entry<F>>,
    next_insert: u64,
    stats: CacheStats,
}

/// Keeps parsed fonts around between conversions.
///
/// Entries live for a fixed time after they were loaded and are reloaded on the
/// first request after they expire. When the cache is full, the entry that was
/// inserted longest ago makes room. Fonts are handed out as [Arc]s, so an entry
/// can be dropped while layouts are still using it.
///
/// The cache locks internally and can be shared between threads; fonts are loaded
/// outside the lock, so two threads missing on the same key may both load it.
pub struct FontCache<F> {
    ttl: Duration,
    capacity: usize,
    inner: Mutex<Inner<F>>,
}

impl<F> Default for FontCache<F> {
    fn default() -> Self {
        FontCache::new(DEFAULT_TTL, DEFAULT_CAPACITY)
    }
}

impl<F> FontCache<F> {
    /// A cache keeping at most `capacity` fonts for `ttl` each. A capacity of zero
    /// disables caching.
    pub fn new(ttl: Duration, capacity: usize) -> FontCache<F> {
        FontCache {
            ttl,
            capacity,
            inner: Mutex::new(Inner {
                entries: HashMap::new(),
                next_insert: 0,
                stats: CacheStats::default(),
            }),
        }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// The cached font for `key`, loading it from `source` if it is missing or expired
    pub fn get_or_load<S>(&self, key: &FontKey, source: &S) -> Result<Arc<F>, LogoError>
    where
        S: FontSource<Font = F> + ?Sized,
    {
        {
            let mut inner = self.inner.lock();
            let cached = inner
                .entries
                .get(key)
                .map(|entry| (entry.is_fresh(self.ttl), entry.font.clone()));
            match cached {
                Some((true, font)) => {
                    inner.stats.hits += 1;
                    log::trace!("font cache hit for {key}");
                    return Ok(font);
                }
                Some((false, _)) => {
                    log::trace!("font cache entry for {key} expired");
                    inner.entries.remove(key);
                    inner.stats.misses += 1;
                }
                None => inner.stats.misses += 1,
            }
        }

        log::debug!("font cache miss for {key}, loading");
        let font = Arc::new(source.load(key)?);
        self.insert(key, font.clone());
        Ok(font)
    }

    fn insert(&self, key: &FontKey, font: Arc<F>) {
        if self.capacity == 0 {
            return;
        }

        let mut inner = self.inner.lock();
        let ttl = self.ttl;
        inner.entries.retain(|_, entry| entry.is_fresh(ttl));

        while !inner.entries.contains_key(key) && inner.entries.len() >= self.capacity {
            let oldest = inner
                .entries
                .iter()
                .min_by_key(|(_, entry)| entry.inserted)
                .map(|(k, _)| k.clone());
            match oldest {
                Some(oldest) => {
                    log::debug!("font cache full, evicting {oldest}");
                    inner.entries.remove(&oldest);
                    inner.stats.evictions += 1;
                }
                None => break,
            }
        }

        let inserted = inner.next_insert;
        inner.next_insert += 1;
        inner.entries.insert(
            key.clone(),
            Entry {
                font,
                loaded_at: Instant::now(),
                inserted,
            },
        );
    }

    pub fn contains(&self, key: &FontKey) -> bool {
        self.inner
            .lock()
            .entries
            .get(key)
            .is_some_and(|entry| entry.is_fresh(self.ttl))
    }

    /// Drop every entry; statistics are kept
    pub fn clear(&self) {
        self.inner.lock().entries.clear();
    }

    /// Counters so far; `entries` counts only fonts that have not expired
    pub fn stats(&self) -> CacheStats {
        let inner = self.inner.lock();
        CacheStats {
            entries: inner
                .entries
                .values()
                .filter(|entry| entry.is_fresh(self.ttl))
                .count(),
            ..inner.stats
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::Weight;
    use crate::test_font::TestFont;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[derive(Default)]
    struct CountingSource {
        loads: AtomicUsize,
    }

    impl FontSource for CountingSource {
        type Font = TestFont;

        fn load(&self, key: &FontKey) -> Result<TestFont, LogoError> {
            if key.family == "Missing" {
                return Err(LogoError::FontNotFound(key.clone()));
            }
            self.loads.fetch_add(1, Ordering::SeqCst);
            Ok(TestFont::latin())
        }
    }

    fn key(family: &str) -> FontKey {
        FontKey::new(family, Weight::REGULAR)
    }

    #[test_log::test]
    fn second_request_is_a_hit() {
        let source = CountingSource::default();
        let cache = FontCache::default();

        let a = cache.get_or_load(&key("Inter"), &source).expect("loads");
        let b = cache.get_or_load(&key("Inter"), &source).expect("loads");
        assert!(Arc::ptr_eq(&a, &b));
        assert_eq!(source.loads.load(Ordering::SeqCst), 1);
        assert_eq!(
            cache.stats(),
            CacheStats {
                hits: 1,
                misses: 1,
                evictions: 0,
                entries: 1
            }
        );
    }

    #[test_log::test]
    fn expired_entries_are_reloaded() {
        let source = CountingSource::default();
        let cache = FontCache::new(Duration::ZERO, 10);

        cache.get_or_load(&key("Inter"), &source).expect("loads");
        cache.get_or_load(&key("Inter"), &source).expect("loads");
        assert_eq!(source.loads.load(Ordering::SeqCst), 2);
        assert!(!cache.contains(&key("Inter")));
    }

    #[test_log::test]
    fn expired_entries_are_not_counted() {
        let source = CountingSource::default();
        let cache = FontCache::new(Duration::ZERO, 10);

        cache.get_or_load(&key("Inter"), &source).expect("loads");
        cache.get_or_load(&key("Lato"), &source).expect("loads");
        let stats = cache.stats();
        assert_eq!(stats.entries, 0);
        assert_eq!(stats.misses, 2);
        assert_eq!(stats.evictions, 0);

        let cache = FontCache::new(DEFAULT_TTL, 10);
        cache.get_or_load(&key("Inter"), &source).expect("loads");
        assert_eq!(cache.stats().entries, 1);
    }

    #[test_log::test]
    fn oldest_entry_makes_room() {
        let source = CountingSource::default();
        let cache = FontCache::new(DEFAULT_TTL, 2);

        for family in ["Inter", "Lato", "Roboto"] {
            cache.get_or_load(&key(family), &source).expect("loads");
        }
        assert!(!cache.contains(&key("Inter")));
        assert!(cache.contains(&key("Lato")));
        assert!(cache.contains(&key("Roboto")));
        assert_eq!(cache.stats().evictions, 1);
        assert_eq!(cache.stats().entries, 2);
    }

    #[test_log::test]
    fn failures_are_not_cached() {
        let source = CountingSource::default();
        let cache = FontCache::default();
        let result = cache.get_or_load(&key("Missing"), &source);
        assert!(matches!(result, Err(LogoError::FontNotFound(_))));
        assert_eq!(cache.stats().entries, 0);
    }

    #[test]
    fn zero_capacity_disables_caching() {
        let source = CountingSource::default();
        let cache = FontCache::new(DEFAULT_TTL, 0);
        cache.get_or_load(&key("Inter"), &source).expect("loads");
        cache.get_or_load(&key("Inter"), &source).expect("loads");
        assert_eq!(source.loads.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn clear_empties_the_cache() {
        let source = CountingSource::default();
        let cache = FontCache::default();
        cache.get_or_load(&key("Inter"), &source).expect("loads");
        cache.clear();
        assert_eq!(cache.stats().entries, 0);
        assert_eq!(cache.stats().misses, 1);
    }

    #[test]
    fn shared_between_threads() {
        let source = CountingSource::default();
        let cache: FontCache<TestFont> = FontCache::default();
        cache.get_or_load(&key("Inter"), &source).expect("loads");

        std::thread::scope(|s| {
            for _ in 0..4 {
                s.spawn(|| {
                    let font = cache.get_or_load(&key("Inter"), &source).expect("loads");
                    assert_eq!(crate::GlyphSource::units_per_em(font.as_ref()), 1000);
                });
            }
        });
        assert_eq!(source.loads.load(Ordering::SeqCst), 1);
        assert_eq!(cache.stats().hits, 4);
    }
}
