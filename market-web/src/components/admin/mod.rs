pub mod item_management;
pub mod price_management;

pub use item_management::ItemManagement;
pub use price_management::PriceManagement;
