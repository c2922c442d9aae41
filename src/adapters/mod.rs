// Adapters layer: concrete implementations for the achievements API and the badge media host.

pub mod badges;
pub mod ra_client;
