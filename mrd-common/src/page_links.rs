use crate::Pagination;

/// Pages shown in full before the control switches to truncated mode.
const FULL_LIST_LIMIT: u32 = 10;

/// Width of the head/tail block in truncated mode.
const EDGE_BLOCK: u32 = 5;

/// A single entry in a pagination control.
///
/// `target` is `None` when the entry must not be navigable: a disabled
/// previous/next link or the active page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PageLink {
    Previous { target: Option<u32> },
    Page { number: u32, active: bool },
    Ellipsis,
    Next { target: Option<u32> },
}

impl PageLink {
    /// Page this entry navigates to, if any.
    pub fn target(&self) -> Option<u32> {
        match *self {
            PageLink::Previous { target } | PageLink::Next { target } => target,
            PageLink::Page { number, active } => (!active).then_some(number),
            PageLink::Ellipsis => None,
        }
    }

    pub fn is_disabled(&self) -> bool {
        match self {
            PageLink::Previous { target } | PageLink::Next { target } => target.is_none(),
            PageLink::Page { .. } => false,
            PageLink::Ellipsis => true,
        }
    }
}

/// Build the link list for a pagination control.
///
/// Previous and next are always present. Up to ten pages are listed in full;
/// beyond that the list is truncated around the first page, the last page and
/// the current page with ellipsis placeholders.
pub fn page_links(pagination: &Pagination) -> Vec<PageLink> {
    let current = pagination.current_page;
    let total = pagination.total_pages;

    let mut links = Vec::with_capacity(FULL_LIST_LIMIT as usize + 4);
    links.push(PageLink::Previous {
        target: (!pagination.is_first_page()).then(|| current - 1),
    });

    let page = |number: u32| PageLink::Page {
        number,
        active: number == current,
    };

    if total <= FULL_LIST_LIMIT {
        links.extend((1..=total).map(page));
    } else if current <= 4 {
        links.extend((1..=EDGE_BLOCK).map(page));
        links.push(PageLink::Ellipsis);
        links.push(page(total));
    } else if current > total - 4 {
        links.push(page(1));
        links.push(PageLink::Ellipsis);
        links.extend((total - (EDGE_BLOCK - 1)..=total).map(page));
    } else {
        links.push(page(1));
        links.push(PageLink::Ellipsis);
        links.extend((current - 2..=current + 2).map(page));
        links.push(PageLink::Ellipsis);
        links.push(page(total));
    }

    links.push(PageLink::Next {
        target: (!pagination.is_last_page()).then(|| current + 1),
    });
    links
}
