//! Review model -> entity mappers

use reviews_core::entities::{RatingCount, RecommendCount, Review};
use reviews_core::value_objects::{ProductId, ReviewId};

use crate::models::{RatingCountModel, RecommendCountModel, ReviewModel};

impl From<ReviewModel> for Review {
    fn from(model: ReviewModel) -> Self {
        Review {
            id: ReviewId::new(model.id),
            product_id: ProductId::new(model.product_id),
            rating: model.rating,
            date: model.date,
            summary: model.summary,
            body: model.body,
            recommend: model.recommend,
            reported: model.reported,
            reviewer_name: model.reviewer_name,
            reviewer_email: model.reviewer_email,
            response: model.response,
            helpfulness: model.helpfulness,
        }
    }
}

impl From<RatingCountModel> for RatingCount {
    fn from(model: RatingCountModel) -> Self {
        Self {
            rating: model.rating,
            count: model.count,
        }
    }
}

impl From<RecommendCountModel> for RecommendCount {
    fn from(model: RecommendCountModel) -> Self {
        Self {
            recommend: model.recommend,
            count: model.count,
        }
    }
}
