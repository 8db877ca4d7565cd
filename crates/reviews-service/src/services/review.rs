//! Review service
//!
//! Listing, aggregate metadata, creation, and the two counter/flag updates.

use futures::future::{join, join_all};
use reviews_core::entities::{NewCharacteristicRating, NewPhoto, ReviewWithPhotos};
use reviews_core::traits::ReviewQuery;
use reviews_core::value_objects::{ProductId, ReviewId};
use tracing::{info, instrument, warn};

use crate::dto::{CreateReviewRequest, ReviewMetaResponse, ReviewResponse};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Review service
pub struct ReviewService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ReviewService<'a> {
    /// Create a new ReviewService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// One page of a product's reviews, each with its photos
    #[instrument(skip(self))]
    pub async fn list_reviews(
        &self,
        product_id: ProductId,
        query: ReviewQuery,
    ) -> ServiceResult<Vec<ReviewResponse>> {
        let reviews = self
            .ctx
            .review_repo()
            .find_by_product(product_id, query)
            .await?;

        let review_ids: Vec<ReviewId> = reviews.iter().map(|r| r.id).collect();
        let photos = self.ctx.photo_repo().find_by_reviews(&review_ids).await?;

        Ok(reviews
            .into_iter()
            .map(|review| ReviewResponse::from(ReviewWithPhotos::collect(review, &photos)))
            .collect())
    }

    /// Rating, recommend and characteristic aggregates for a product
    #[instrument(skip(self))]
    pub async fn get_meta(&self, product_id: ProductId) -> ServiceResult<ReviewMetaResponse> {
        let meta_repo = self.ctx.meta_repo();

        let (ratings, recommended, averages) = tokio::try_join!(
            meta_repo.rating_counts(product_id),
            meta_repo.recommend_counts(product_id),
            meta_repo.characteristic_averages(product_id),
        )?;

        Ok(ReviewMetaResponse::fold(
            product_id,
            &ratings,
            &recommended,
            averages,
        ))
    }

    /// Create a review, then its characteristic ratings and photos.
    ///
    /// The sub-inserts run concurrently and are not atomic with the review:
    /// a failed one is logged and the review is kept.
    #[instrument(skip(self, request), fields(product_id = %request.product_id))]
    pub async fn create_review(&self, request: CreateReviewRequest) -> ServiceResult<ReviewId> {
        let characteristics = request.characteristic_values()?;

        let review_id = self.ctx.review_repo().create(&request.new_review()).await?;

        let ratings: Vec<NewCharacteristicRating> = characteristics
            .into_iter()
            .map(|(characteristic_id, value)| NewCharacteristicRating {
                characteristic_id,
                review_id,
                value,
            })
            .collect();
        let photos: Vec<NewPhoto> = request
            .photos
            .into_iter()
            .map(|url| NewPhoto { review_id, url })
            .collect();

        let characteristic_repo = self.ctx.characteristic_repo();
        let photo_repo = self.ctx.photo_repo();

        let (rating_results, photo_results) = join(
            join_all(ratings.iter().map(|r| characteristic_repo.create(r))),
            join_all(photos.iter().map(|p| photo_repo.create(p))),
        )
        .await;

        for (rating, result) in ratings.iter().zip(&rating_results) {
            if let Err(e) = result {
                warn!(
                    review_id = %review_id,
                    characteristic_id = %rating.characteristic_id,
                    error = %e,
                    "Characteristic rating insert failed"
                );
            }
        }
        for (photo, result) in photos.iter().zip(&photo_results) {
            if let Err(e) = result {
                warn!(review_id = %review_id, url = %photo.url, error = %e, "Photo insert failed");
            }
        }

        info!(
            review_id = %review_id,
            characteristics = rating_results.iter().filter(|r| r.is_ok()).count(),
            photos = photo_results.iter().filter(|r| r.is_ok()).count(),
            "Review created"
        );

        Ok(review_id)
    }

    /// Increment a review's helpfulness counter; unknown ids are a no-op
    #[instrument(skip(self))]
    pub async fn mark_helpful(&self, review_id: ReviewId) -> ServiceResult<()> {
        let rows = self.ctx.review_repo().increment_helpfulness(review_id).await?;
        if rows == 0 {
            info!(review_id = %review_id, "Helpful vote for unknown review");
        }
        Ok(())
    }

    /// Flag a review as reported; unknown ids are a no-op
    #[instrument(skip(self))]
    pub async fn report(&self, review_id: ReviewId) -> ServiceResult<()> {
        let rows = self.ctx.review_repo().mark_reported(review_id).await?;
        if rows == 0 {
            info!(review_id = %review_id, "Report for unknown review");
        }
        Ok(())
    }
}
