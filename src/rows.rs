//! Row containers for one widget instance.
//!
//! Rows are created lazily, keyed by their signed row number, and kept in
//! visual order (topmost row first). Creating an outer row materializes
//! every missing row between it and the middle, so the visual order never
//! has gaps relative to the rows that exist.

use std::collections::HashMap;

/// Opaque handle to a row container. Stable for the lifetime of the tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RowId(usize);

#[derive(Debug)]
pub struct Row<T> {
    number: i32,
    children: Vec<T>,
}

impl<T> Row<T> {
    fn new(number: i32) -> Self {
        Self {
            number,
            children: Vec::new(),
        }
    }

    pub fn number(&self) -> i32 {
        self.number
    }

    /// Children in append order.
    pub fn children(&self) -> &[T] {
        &self.children
    }
}

/// Owned per-widget mapping from row number to row container.
///
/// Not synchronized; a tree belongs to a single widget instance and is only
/// touched from its event loop.
#[derive(Debug)]
pub struct RowTree<T> {
    rows: Vec<Row<T>>,
    order: Vec<RowId>,
    index: HashMap<i32, RowId>,
}

impl<T> Default for RowTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> RowTree<T> {
    pub fn new() -> Self {
        Self {
            rows: Vec::new(),
            order: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Returns the row with the given number, creating it if needed.
    ///
    /// Repeated calls with the same number return the same handle. A new row
    /// is inserted adjacent to its inward neighbour, which is created first
    /// if missing: above the middle a row goes right before the next row
    /// toward the center, below the middle right after it, and the middle
    /// row itself goes to the very top. Recursion terminates because each
    /// step moves one row closer to the middle.
    pub fn get_or_create(&mut self, number: i32) -> RowId {
        if let Some(&id) = self.index.get(&number) {
            return id;
        }

        let insert_at = if number == 0 {
            0
        } else if number > 0 {
            let inward = self.get_or_create(number - 1);
            self.order_slot(inward)
        } else {
            let inward = self.get_or_create(number + 1);
            self.order_slot(inward) + 1
        };

        let id = RowId(self.rows.len());
        self.rows.push(Row::new(number));
        self.order.insert(insert_at, id);
        self.index.insert(number, id);
        id
    }

    pub fn get(&self, number: i32) -> Option<RowId> {
        self.index.get(&number).copied()
    }

    pub fn row(&self, id: RowId) -> &Row<T> {
        &self.rows[id.0]
    }

    pub fn append(&mut self, id: RowId, child: T) {
        self.rows[id.0].children.push(child);
    }

    /// Rows in visual order, topmost (most positive number) first.
    pub fn iter_top_down(&self) -> impl Iterator<Item = &Row<T>> {
        self.order.iter().map(|id| &self.rows[id.0])
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    fn order_slot(&self, id: RowId) -> usize {
        // Every created row is in `order`; get_or_create maintains that.
        self.order.iter().position(|&r| r == id).unwrap()
    }
}
