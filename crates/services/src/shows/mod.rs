pub mod cache;
pub mod ports;
pub mod resolver;
pub mod service;
pub mod validation;

pub use cache::ShowCache;
pub use ports::{ShowList, ShowRecord, ShowResolverTrait, ShowsError, ShowsServiceTrait};
pub use resolver::{CatalogShowResolver, ALLOWED_SHOW_TYPES};
pub use service::ShowsServiceImpl;
pub use validation::{normalize_actor_name, validate_actor_name, MAX_ACTOR_NAME_LENGTH};
