//! Paging
//!
//! Pure offset-pagination arithmetic and the incremental ("infinite")
//! loader. The loader does not fetch anything: it re-paginates a list the
//! store already holds, delivering chunks after a simulated latency.

use std::time::Duration;

use tokio::time::sleep;

/// Items per page in both paging modes
pub const DEFAULT_PAGE_SIZE: usize = 5;

/// Number of pages for a list; 0 for an empty list
pub fn total_pages(len: usize, page_size: usize) -> usize {
    if len == 0 {
        0
    } else {
        len.div_ceil(page_size)
    }
}

/// The slice of items on a 1-based page; empty past the end
pub fn page_slice<T: Clone>(items: &[T], page: usize, page_size: usize) -> Vec<T> {
    if page == 0 {
        return Vec::new();
    }
    let start = (page - 1) * page_size;
    if start >= items.len() {
        return Vec::new();
    }
    let end = (start + page_size).min(items.len());
    items[start..end].to_vec()
}

/// Whether a 1-based page request is within bounds
///
/// Out-of-range requests are rejected by the caller as silent no-ops, never
/// clamped to the nearest bound.
pub fn page_in_bounds(page: usize, total: usize) -> bool {
    page >= 1 && page <= total
}

/// Cursor state for incremental loading
///
/// Serves successive chunks of an already-loaded source list on demand.
/// `accumulated` is always a prefix (in load order) of the source list as it
/// stood when loading began; it only grows until `reset`.
#[derive(Debug, Clone)]
pub struct IncrementalLoader<T> {
    cursor_page: usize,
    has_more: bool,
    is_loading: bool,
    accumulated: Vec<T>,
}

impl<T: Clone> IncrementalLoader<T> {
    pub fn new() -> Self {
        Self {
            cursor_page: 1,
            has_more: true,
            is_loading: false,
            accumulated: Vec::new(),
        }
    }

    /// Drop all accumulated items and rewind the cursor
    pub fn reset(&mut self) {
        self.cursor_page = 1;
        self.has_more = true;
        self.is_loading = false;
        self.accumulated.clear();
    }

    pub fn accumulated(&self) -> &[T] {
        &self.accumulated
    }

    pub fn has_more(&self) -> bool {
        self.has_more
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    /// Append the next chunk of `source` after the given latency
    ///
    /// No-op while a chunk is in flight or once the source is exhausted.
    /// Returns true when a chunk delivery was attempted.
    pub async fn load_more(&mut self, source: &[T], page_size: usize, delay: Duration) -> bool {
        if self.is_loading || !self.has_more {
            return false;
        }
        self.is_loading = true;

        // Simulated backend latency; zero in tests
        if !delay.is_zero() {
            sleep(delay).await;
        }

        let chunk = page_slice(source, self.cursor_page, page_size);
        if !chunk.is_empty() {
            self.accumulated.extend(chunk);
        }
        self.cursor_page += 1;
        self.has_more = (self.cursor_page - 1) * page_size < source.len();
        self.is_loading = false;
        true
    }
}

impl<T: Clone> Default for IncrementalLoader<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_pages() {
        assert_eq!(total_pages(0, 5), 0);
        assert_eq!(total_pages(1, 5), 1);
        assert_eq!(total_pages(5, 5), 1);
        assert_eq!(total_pages(6, 5), 2);
        assert_eq!(total_pages(12, 5), 3);
    }

    #[test]
    fn test_page_slice_partitions_without_gaps() {
        let items: Vec<u32> = (0..12).collect();
        let total = total_pages(items.len(), 5);
        let mut rebuilt = Vec::new();
        for page in 1..=total {
            rebuilt.extend(page_slice(&items, page, 5));
        }
        assert_eq!(rebuilt, items);
    }

    #[test]
    fn test_page_slice_out_of_range_is_empty() {
        let items: Vec<u32> = (0..12).collect();
        assert!(page_slice(&items, 4, 5).is_empty());
        assert!(page_slice(&items, 0, 5).is_empty());
        assert!(page_slice::<u32>(&[], 1, 5).is_empty());
    }

    #[test]
    fn test_page_in_bounds() {
        assert!(page_in_bounds(1, 3));
        assert!(page_in_bounds(3, 3));
        assert!(!page_in_bounds(0, 3));
        assert!(!page_in_bounds(4, 3));
        assert!(!page_in_bounds(1, 0));
    }

    #[tokio::test]
    async fn test_loader_exhaustion() {
        let source: Vec<u32> = (0..12).collect();
        let mut loader = IncrementalLoader::new();

        loader.load_more(&source, 5, Duration::ZERO).await;
        assert_eq!(loader.accumulated().len(), 5);
        assert!(loader.has_more());

        loader.load_more(&source, 5, Duration::ZERO).await;
        assert_eq!(loader.accumulated().len(), 10);
        assert!(loader.has_more());

        loader.load_more(&source, 5, Duration::ZERO).await;
        assert_eq!(loader.accumulated().len(), 12);
        assert!(!loader.has_more());

        // Exhausted: further calls change nothing
        assert!(!loader.load_more(&source, 5, Duration::ZERO).await);
        assert_eq!(loader.accumulated().len(), 12);
    }

    #[tokio::test]
    async fn test_loader_accumulates_prefix_in_order() {
        let source: Vec<u32> = (0..7).collect();
        let mut loader = IncrementalLoader::new();
        loader.load_more(&source, 5, Duration::ZERO).await;
        loader.load_more(&source, 5, Duration::ZERO).await;
        assert_eq!(loader.accumulated(), &source[..]);
    }

    #[tokio::test]
    async fn test_loader_reset() {
        let source: Vec<u32> = (0..7).collect();
        let mut loader = IncrementalLoader::new();
        loader.load_more(&source, 5, Duration::ZERO).await;
        loader.reset();
        assert!(loader.accumulated().is_empty());
        assert!(loader.has_more());
        assert!(!loader.is_loading());
    }

    #[tokio::test]
    async fn test_loader_empty_source_exhausts_immediately() {
        let source: Vec<u32> = Vec::new();
        let mut loader = IncrementalLoader::new();
        loader.load_more(&source, 5, Duration::ZERO).await;
        assert!(loader.accumulated().is_empty());
        assert!(!loader.has_more());
    }
}
