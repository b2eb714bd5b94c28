//! Quote handlers - fee previews, cart items, and catalog reloads.

mod add_cart_item;
mod preview_fee;
mod reload_catalog;

pub use add_cart_item::{AddCartItemCommand, AddCartItemHandler, AddCartItemResult};
pub use preview_fee::{PreviewFeeHandler, PreviewFeeQuery};
pub use reload_catalog::{ReloadCatalogHandler, ReloadCatalogResult};
