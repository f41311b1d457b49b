// src/models/page.rs

use serde::Serialize;

/// One page of a listing, with enough bookkeeping for a client to render
/// pager controls.
#[derive(Debug, Clone, Serialize)]
pub struct Page<T> {
  pub items: Vec<T>,
  pub page: i64,
  pub page_size: i64,
  pub total_items: i64,
  pub total_pages: i64,
}

impl<T> Page<T> {
  pub fn new(items: Vec<T>, page: i64, page_size: i64, total_items: i64) -> Self {
    let total_pages = if total_items == 0 {
      0
    } else {
      (total_items + page_size - 1) / page_size
    };
    Self {
      items,
      page,
      page_size,
      total_items,
      total_pages,
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn total_pages_rounds_up() {
    let page = Page::new(vec![1, 2, 3], 1, 9, 19);
    assert_eq!(page.total_pages, 3);
  }

  #[test]
  fn empty_listing_has_zero_pages() {
    let page: Page<i32> = Page::new(vec![], 1, 9, 0);
    assert_eq!(page.total_pages, 0);
  }
}
