pub mod client;
pub mod ports;
pub mod transport;

pub use client::TvMazeClient;
pub use ports::{
    CastCredit, CatalogClientTrait, CatalogError, CatalogShow, CreditEmbedded, Person,
    PersonSearchResult,
};
pub use transport::{RetryPolicy, RetryingTransport};
