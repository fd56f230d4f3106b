pub mod config_store;
pub mod menu_catalog;
pub mod mysql_config_store;

pub use config_store::{ConfigStore, InMemoryConfigStore};
pub use menu_catalog::{InMemoryMenuCatalog, MenuCatalog, MySqlMenuCatalog};
pub use mysql_config_store::MySqlConfigStore;
