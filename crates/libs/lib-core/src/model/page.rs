use shared::dto::PagedList;

/// One page of a server-ordered list.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total: u32,
    pub page: u32,
    pub total_pages: u32,
}

impl<T> Page<T> {
    /// Map every item, keeping server order and pagination metadata.
    pub fn from_wire<D>(list: PagedList<D>) -> Self
    where
        T: From<D>,
    {
        Self {
            items: list.items.into_iter().map(T::from).collect(),
            total: list.total,
            page: list.page,
            total_pages: list.total_pages,
        }
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
