//! Characteristic model -> entity mappers

use reviews_core::entities::{CharacteristicAverage, CharacteristicRating};
use reviews_core::value_objects::{CharacteristicId, ReviewId};

use crate::models::{CharacteristicAverageModel, CharacteristicReviewModel};

impl From<CharacteristicReviewModel> for CharacteristicRating {
    fn from(model: CharacteristicReviewModel) -> Self {
        Self {
            id: model.id,
            characteristic_id: CharacteristicId::new(model.characteristic_id),
            review_id: ReviewId::new(model.review_id),
            value: model.value,
        }
    }
}

impl From<CharacteristicAverageModel> for CharacteristicAverage {
    fn from(model: CharacteristicAverageModel) -> Self {
        Self {
            characteristic_id: CharacteristicId::new(model.characteristic_id),
            name: model.name,
            count: model.count,
            average: model.average,
        }
    }
}
