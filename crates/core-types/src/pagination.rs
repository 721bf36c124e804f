//! Page arithmetic shared by every paginated listing.

/// Fixed number of rows per listing page.
pub const ITEMS_PER_PAGE: i64 = 6;

/// Number of pages needed to show `count` rows, i.e. `ceil(count / ITEMS_PER_PAGE)`.
pub fn total_pages(count: i64) -> u32 {
    if count <= 0 {
        return 0;
    }
    let pages = (count + ITEMS_PER_PAGE - 1) / ITEMS_PER_PAGE;
    u32::try_from(pages).unwrap_or(u32::MAX)
}

/// Row offset of a 1-based page. Page 0 is treated as page 1.
pub fn page_offset(page: u32) -> i64 {
    i64::from(page.max(1) - 1) * ITEMS_PER_PAGE
}

/// Interprets a `?page=` value the way the listing does: anything missing,
/// unparsable or below 1 means the first page.
pub fn parse_page(raw: Option<&str>) -> u32 {
    raw.and_then(|value| value.trim().parse::<u32>().ok())
        .filter(|page| *page >= 1)
        .unwrap_or(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pages_round_up() {
        assert_eq!(total_pages(0), 0);
        assert_eq!(total_pages(1), 1);
        assert_eq!(total_pages(6), 1);
        assert_eq!(total_pages(7), 2);
        assert_eq!(total_pages(13), 3);
    }

    #[test]
    fn offsets_start_at_zero() {
        assert_eq!(page_offset(0), 0);
        assert_eq!(page_offset(1), 0);
        assert_eq!(page_offset(3), 12);
    }

    #[test]
    fn page_parameter_falls_back_to_first_page() {
        assert_eq!(parse_page(None), 1);
        assert_eq!(parse_page(Some("")), 1);
        assert_eq!(parse_page(Some("abc")), 1);
        assert_eq!(parse_page(Some("0")), 1);
        assert_eq!(parse_page(Some("4")), 4);
    }
}
