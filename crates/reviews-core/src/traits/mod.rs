//! Repository traits (ports)

mod repositories;

pub use repositories::{
    CharacteristicRatingRepository, PhotoRepository, RepoResult, ReviewMetaRepository,
    ReviewQuery, ReviewRepository,
};
