pub mod catalog;
pub mod shows;

pub use catalog::{CatalogClientTrait, CatalogError, TvMazeClient};
pub use shows::{
    CatalogShowResolver, ShowCache, ShowList, ShowRecord, ShowResolverTrait, ShowsError,
    ShowsServiceImpl, ShowsServiceTrait,
};
