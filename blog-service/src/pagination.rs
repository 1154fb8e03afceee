/// Page-window arithmetic for ordered listings.
///
/// A `Paginator` turns a raw `page` query value and an item count into a
/// fixed-size window plus metadata. It performs no I/O; repositories apply
/// the window as LIMIT/OFFSET on the ordered query.
#[derive(Debug, Clone, Copy)]
pub struct Paginator {
    per_page: i64,
}

/// One resolved page of an ordered listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    pub number: i64,
    pub total_pages: i64,
    pub total_items: i64,
    pub per_page: i64,
}

impl Paginator {
    pub fn new(per_page: i64) -> Self {
        debug_assert!(per_page > 0);
        Self { per_page }
    }

    /// Resolve a raw `page` query value against the item count.
    ///
    /// Non-numeric or missing input falls back to the first page; values
    /// outside the valid range are clamped to the nearest valid page. An
    /// empty listing still has one (empty) page.
    pub fn page_for(&self, total_items: i64, requested: Option<&str>) -> PageWindow {
        let total_pages = if total_items <= 0 {
            1
        } else {
            (total_items + self.per_page - 1) / self.per_page
        };

        let number = requested
            .and_then(|raw| raw.trim().parse::<i64>().ok())
            .unwrap_or(1)
            .clamp(1, total_pages);

        PageWindow {
            number,
            total_pages,
            total_items,
            per_page: self.per_page,
        }
    }
}

impl PageWindow {
    pub fn offset(&self) -> i64 {
        (self.number - 1) * self.per_page
    }

    pub fn limit(&self) -> i64 {
        self.per_page
    }

    pub fn has_next(&self) -> bool {
        self.number < self.total_pages
    }

    pub fn has_previous(&self) -> bool {
        self.number > 1
    }
}
