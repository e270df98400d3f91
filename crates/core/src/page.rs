//! Page request value object and query coercion.

/// Page size used when the caller omits `page_size` or sends a non-positive value.
pub const DEFAULT_PAGE_SIZE: usize = 5;

/// Page used when the caller omits `page` or sends a non-positive value.
pub const DEFAULT_PAGE: i64 = 1;

/// A requested page of the product listing.
///
/// `page_size` is always at least 1. `page` is kept as requested (it may lie
/// outside the available range); the catalog clamps it against the real page
/// count.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct PageRequest {
    page_size: usize,
    page: i64,
}

impl PageRequest {
    pub fn new(page_size: usize, page: i64) -> Self {
        Self {
            page_size: page_size.max(1),
            page,
        }
    }

    /// Build a request from raw query-string values.
    ///
    /// Each value is coerced leniently (leading sign and digits, anything else
    /// reads as 0); absent or non-positive values fall back to the defaults.
    pub fn from_query(page_size: Option<&str>, page: Option<&str>) -> Self {
        let page_size = page_size
            .map(lenient_int)
            .filter(|v| *v > 0)
            .map(|v| usize::try_from(v).unwrap_or(usize::MAX))
            .unwrap_or(DEFAULT_PAGE_SIZE);

        let page = page.map(lenient_int).filter(|v| *v > 0).unwrap_or(DEFAULT_PAGE);

        Self::new(page_size, page)
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn page(&self) -> i64 {
        self.page
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE, DEFAULT_PAGE)
    }
}

/// Parse the leading integer of `raw`: `"12abc"` → 12, `"abc"` → 0, `" -3"` → -3.
///
/// Saturates at the `i64` bounds instead of overflowing.
pub fn lenient_int(raw: &str) -> i64 {
    let s = raw.trim_start();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let mut value: i64 = 0;
    for b in digits.bytes().take_while(u8::is_ascii_digit) {
        let digit = i64::from(b - b'0');
        value = if negative {
            value.saturating_mul(10).saturating_sub(digit)
        } else {
            value.saturating_mul(10).saturating_add(digit)
        };
    }
    value
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn missing_values_use_defaults() {
        let req = PageRequest::from_query(None, None);
        assert_eq!(req.page_size(), DEFAULT_PAGE_SIZE);
        assert_eq!(req.page(), DEFAULT_PAGE);
        assert_eq!(req, PageRequest::default());
    }

    #[test]
    fn non_positive_and_garbage_values_use_defaults() {
        let req = PageRequest::from_query(Some("0"), Some("-4"));
        assert_eq!(req.page_size(), 5);
        assert_eq!(req.page(), 1);

        let req = PageRequest::from_query(Some("abc"), Some(""));
        assert_eq!(req.page_size(), 5);
        assert_eq!(req.page(), 1);
    }

    #[test]
    fn leading_digits_are_kept() {
        let req = PageRequest::from_query(Some("2items"), Some(" 3"));
        assert_eq!(req.page_size(), 2);
        assert_eq!(req.page(), 3);
    }

    #[test]
    fn lenient_int_handles_signs_and_overflow() {
        assert_eq!(lenient_int("+7"), 7);
        assert_eq!(lenient_int("-12x"), -12);
        assert_eq!(lenient_int("1.9"), 1);
        assert_eq!(lenient_int("99999999999999999999999"), i64::MAX);
        assert_eq!(lenient_int("-99999999999999999999999"), i64::MIN);
    }

    #[test]
    fn zero_page_size_is_raised_to_one() {
        assert_eq!(PageRequest::new(0, 1).page_size(), 1);
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 256,
            ..ProptestConfig::default()
        })]

        /// Property: whatever the query says, the request is usable.
        #[test]
        fn coerced_requests_are_always_positive(
            page_size in ".{0,12}",
            page in ".{0,12}"
        ) {
            let req = PageRequest::from_query(Some(page_size.as_str()), Some(page.as_str()));
            prop_assert!(req.page_size() >= 1);
            prop_assert!(req.page() >= 1);
        }
    }
}
