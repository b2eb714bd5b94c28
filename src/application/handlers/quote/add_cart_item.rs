//! AddCartItemHandler - Command handler for adding or editing cart items.

use std::sync::Arc;

use crate::domain::cart::{cart_total, CartLineItem, LineItemBuilder, LineItemError};
use crate::domain::foundation::LineItemId;
use crate::domain::pricing::CourseSelection;
use crate::ports::CatalogRepository;

/// Command to price a selection into the caller's cart.
#[derive(Debug, Clone)]
pub struct AddCartItemCommand {
    pub selection: CourseSelection,
    pub current_cart: Vec<CartLineItem>,
    /// Existing item to re-price instead of adding a new one.
    pub replace: Option<LineItemId>,
}

impl AddCartItemCommand {
    pub fn add(selection: CourseSelection, current_cart: Vec<CartLineItem>) -> Self {
        Self {
            selection,
            current_cart,
            replace: None,
        }
    }

    pub fn update(
        item_id: LineItemId,
        selection: CourseSelection,
        current_cart: Vec<CartLineItem>,
    ) -> Self {
        Self {
            selection,
            current_cart,
            replace: Some(item_id),
        }
    }
}

/// Result of a successful add or edit.
#[derive(Debug, Clone)]
pub struct AddCartItemResult {
    pub item: CartLineItem,
    /// Cart with the item appended or replaced in place.
    pub cart: Vec<CartLineItem>,
    pub cart_total: u64,
}

/// Handler for adding and editing cart items.
pub struct AddCartItemHandler {
    catalog: Arc<dyn CatalogRepository>,
}

impl AddCartItemHandler {
    pub fn new(catalog: Arc<dyn CatalogRepository>) -> Self {
        Self { catalog }
    }

    pub async fn handle(&self, cmd: AddCartItemCommand) -> Result<AddCartItemResult, LineItemError> {
        // 1. Price against one snapshot
        let catalog = self.catalog.current().await;
        let builder = LineItemBuilder::new(&catalog);

        let item = match cmd.replace {
            Some(id) => builder.update_cart_item(id, &cmd.selection, &cmd.current_cart)?,
            None => builder.create_cart_item(&cmd.selection, &cmd.current_cart)?,
        };

        // 2. Place into the cart
        let mut cart = cmd.current_cart;
        match cart.iter_mut().find(|existing| existing.id == item.id) {
            Some(slot) => *slot = item.clone(),
            None => cart.push(item.clone()),
        }

        let cart_total = cart_total(&cart);
        Ok(AddCartItemResult {
            item,
            cart,
            cart_total,
        })
    }
}
