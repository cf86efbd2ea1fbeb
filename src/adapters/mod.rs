pub mod api_server;
pub mod csv_loader;

pub use api_server::start_api_server;
pub use csv_loader::{load_store, read_deliveries, read_matches, store_from_readers};
