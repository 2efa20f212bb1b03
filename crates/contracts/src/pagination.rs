//! Page slicing over the filtered catalogue.
//!
//! Page indices are 1-based like the buttons on screen. A requested index
//! outside the valid range is clamped, never an error, so a filter that
//! shrinks the result set while the user sits on a late page still shows
//! the last page instead of an empty one.

/// Number of cards per catalogue page.
pub const PAGE_SIZE: usize = 6;

/// One slice of the filtered list, ready to render.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    /// 1-based index actually shown, after clamping.
    pub page: usize,
    pub page_count: usize,
}

/// One pagination button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageButton {
    pub number: usize,
    pub active: bool,
}

/// Total pages for `total_items`, never less than one: an empty result set
/// still renders page 1 of 1.
pub fn page_count(total_items: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 1;
    }
    total_items.div_ceil(page_size).max(1)
}

/// Clamps a requested 1-based page index into `[1, page_count]`.
pub fn clamp_page(requested: usize, page_count: usize) -> usize {
    requested.clamp(1, page_count.max(1))
}

/// Slices out the visible page.
pub fn paginate<T: Clone>(items: &[T], page_size: usize, requested_page: usize) -> Page<T> {
    let page_count = page_count(items.len(), page_size);
    let page = clamp_page(requested_page, page_count);

    let start = (page - 1) * page_size;
    let end = (start + page_size).min(items.len());
    let visible = if start >= items.len() {
        Vec::new()
    } else {
        items[start..end].to_vec()
    };

    Page {
        items: visible,
        page,
        page_count,
    }
}

/// Builds the row of page buttons: one per page, the current one active.
pub fn page_buttons(page_count: usize, current: usize) -> Vec<PageButton> {
    (1..=page_count.max(1))
        .map(|number| PageButton {
            number,
            active: number == current,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_count_rounds_up() {
        assert_eq!(page_count(0, 6), 1);
        assert_eq!(page_count(5, 6), 1);
        assert_eq!(page_count(6, 6), 1);
        assert_eq!(page_count(7, 6), 2);
        assert_eq!(page_count(13, 6), 3);
    }

    #[test]
    fn test_clamp_page() {
        assert_eq!(clamp_page(0, 3), 1);
        assert_eq!(clamp_page(1, 3), 1);
        assert_eq!(clamp_page(3, 3), 3);
        assert_eq!(clamp_page(5, 3), 3);
        assert_eq!(clamp_page(7, 0), 1);
    }

    #[test]
    fn test_out_of_range_request_lands_on_last_page() {
        let items: Vec<usize> = (0..13).collect();
        let page = paginate(&items, 6, 5);
        assert_eq!(page.page_count, 3);
        assert_eq!(page.page, 3);
        assert_eq!(page.items, vec![12]);
    }

    #[test]
    fn test_pages_partition_the_list() {
        let items: Vec<usize> = (0..13).collect();
        let mut reassembled = Vec::new();
        for p in 1..=page_count(items.len(), 6) {
            reassembled.extend(paginate(&items, 6, p).items);
        }
        assert_eq!(reassembled, items);
    }

    #[test]
    fn test_empty_list_yields_single_empty_page() {
        let page = paginate::<usize>(&[], 6, 1);
        assert_eq!(page.page, 1);
        assert_eq!(page.page_count, 1);
        assert!(page.items.is_empty());
    }

    #[test]
    fn test_page_buttons_mark_current() {
        let buttons = page_buttons(3, 2);
        assert_eq!(buttons.len(), 3);
        assert_eq!(
            buttons.iter().filter(|b| b.active).map(|b| b.number).collect::<Vec<_>>(),
            vec![2]
        );
        assert_eq!(buttons[0].number, 1);
        assert_eq!(buttons[2].number, 3);
    }

    #[test]
    fn test_page_buttons_never_empty() {
        let buttons = page_buttons(0, 1);
        assert_eq!(buttons.len(), 1);
        assert!(buttons[0].active);
    }
}
