pub mod posters;
pub mod recommender;

pub use posters::{PosterResolver, RetryPolicy, TmdbPosterClient};
pub use recommender::Recommender;
