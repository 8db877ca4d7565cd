//! Photo model -> entity mapper

use reviews_core::entities::Photo;
use reviews_core::value_objects::ReviewId;

use crate::models::PhotoModel;

impl From<PhotoModel> for Photo {
    fn from(model: PhotoModel) -> Self {
        Photo::new(model.id, ReviewId::new(model.review_id), model.url)
    }
}
