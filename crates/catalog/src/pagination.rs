//! Chunk-based pagination over the full product feed.

/// One selected page of a slice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page<'a, T> {
    pub items: &'a [T],
    /// 1-based page number after clamping.
    pub page: usize,
    pub total_pages: usize,
}

/// Number of chunks of `page_size` needed to hold `len` items.
pub fn total_pages(len: usize, page_size: usize) -> usize {
    len.div_ceil(page_size.max(1))
}

/// Clamp a requested page into `[1, total_pages]`.
///
/// With no pages at all the result is 1.
pub fn force_valid_page(page: i64, total_pages: usize) -> usize {
    if page < 1 {
        return 1;
    }
    let page = usize::try_from(page).unwrap_or(usize::MAX);
    page.min(total_pages).max(1)
}

/// 0-based chunk index for a 1-based page.
pub fn page_index(page: usize, total_pages: usize) -> usize {
    if page <= 1 || total_pages == 0 {
        return 0;
    }
    if page >= total_pages {
        return total_pages - 1;
    }
    page - 1
}

/// Split `items` into pages of `page_size` and select the (clamped) `page`.
pub fn paginate<T>(items: &[T], page_size: usize, page: i64) -> Page<'_, T> {
    let page_size = page_size.max(1);
    let total_pages = total_pages(items.len(), page_size);
    let page = force_valid_page(page, total_pages);

    // Falls back to the first chunk if the index is somehow out of range.
    let selected = items
        .chunks(page_size)
        .nth(page_index(page, total_pages))
        .or_else(|| items.chunks(page_size).next())
        .unwrap_or(&[]);

    Page {
        items: selected,
        page,
        total_pages,
    }
}
