use serde::{Serialize, Serializer};

/// A pagination control entry: a page number or a `...` gap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageLink {
    Page(u32),
    Ellipsis,
}

impl Serialize for PageLink {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            PageLink::Page(page) => serializer.serialize_u32(*page),
            PageLink::Ellipsis => serializer.serialize_str("..."),
        }
    }
}

/// Builds the page links shown under a listing.
///
/// Up to seven pages are listed in full. Beyond that the first and last
/// pages stay visible and the current page is shown with its neighbours.
pub fn generate_pagination(current_page: u32, total_pages: u32) -> Vec<PageLink> {
    use PageLink::{Ellipsis, Page};

    if total_pages <= 7 {
        return (1..=total_pages).map(Page).collect();
    }
    if current_page <= 3 {
        return vec![Page(1), Page(2), Page(3), Ellipsis, Page(total_pages - 1), Page(total_pages)];
    }
    if current_page >= total_pages - 2 {
        return vec![
            Page(1),
            Page(2),
            Ellipsis,
            Page(total_pages - 2),
            Page(total_pages - 1),
            Page(total_pages),
        ];
    }
    vec![
        Page(1),
        Ellipsis,
        Page(current_page - 1),
        Page(current_page),
        Page(current_page + 1),
        Ellipsis,
        Page(total_pages),
    ]
}
