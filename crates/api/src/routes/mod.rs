pub mod health;
pub mod shows;

pub use health::health_check;
pub use shows::{get_shows_by_actor, ShowsAppState};
