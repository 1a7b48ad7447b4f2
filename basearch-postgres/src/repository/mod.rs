pub mod db_init;
pub mod store_gateway;

pub use store_gateway::PgStoreGateway;
