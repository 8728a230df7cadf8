use super::*;

/// Number of `E+N` suffixes the global cache starts with.
pub const INITIAL_EXPONENTS: usize = 999;

/// Entries appended per growth round.
pub const GROWTH_STEP: usize = 3;

static GLOBAL: LazyLock<ExponentCache> =
    LazyLock::new(|| ExponentCache::with_initial(INITIAL_EXPONENTS));

/// Append-only table of scientific suffixes, indexed by exponent.
///
/// Entry `n` is always `"E+n"`. Entries are never changed or removed once
/// pushed, so a suffix handed out by [`ExponentCache::get`] stays valid for
/// the life of the cache.
#[derive(Debug)]
pub struct ExponentCache {
    entries: RwLock<Vec<Arc<str>>>,
}

impl ExponentCache {
    /// The process-wide cache used by [`scale`](crate::scale).
    pub fn global() -> &'static Self {
        &GLOBAL
    }

    pub fn with_initial(count: usize) -> Self {
        Self {
            entries: RwLock::new((0..count).map(entry).collect()),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }

    /// Grows the cache until `exponent` has an entry.
    pub fn ensure(&self, exponent: usize) {
        if exponent < self.len() {
            return;
        }

        let mut entries = self.entries.write();

        let before = entries.len();

        while exponent >= entries.len() {
            for _ in 0..GROWTH_STEP {
                let next = entries.len();
                entries.push(entry(next));
            }
        }

        if entries.len() > before {
            debug!(
                before,
                after = entries.len(),
                "Extended exponent cache for E+{exponent}"
            );
        }
    }

    pub fn get(&self, exponent: usize) -> Option<Arc<str>> {
        self.entries.read().get(exponent).cloned()
    }

    /// # Panics
    ///
    /// Panics if `exponent` has not been covered by [`ExponentCache::ensure`].
    pub fn lookup(&self, exponent: usize) -> Arc<str> {
        self.get(exponent)
            .unwrap_or_else(|| panic!("exponent cache has no entry for E+{exponent}"))
    }

    /// Cached suffixes for `count` exponents starting at `from`, growing the
    /// cache if needed.
    ///
    /// # Panics
    ///
    /// Panics if the last exponent of the range does not fit in a `usize`.
    pub fn range(&self, from: usize, count: usize) -> Vec<Arc<str>> {
        if count == 0 {
            return Vec::new();
        }

        let last = from
            .checked_add(count - 1)
            .unwrap_or_else(|| panic!("exponent range {from}+{count} overflows"));

        self.ensure(last);

        self.entries.read()[from..=last].to_vec()
    }
}

impl Default for ExponentCache {
    fn default() -> Self {
        Self::with_initial(INITIAL_EXPONENTS)
    }
}

fn entry(exponent: usize) -> Arc<str> {
    format!("E+{exponent}").into()
}
