//! Request handlers for `/api/products`.

use super::error::ApiError;
use crate::model::{Product, ProductDraft, ProductId};
use crate::product_actor::ProductQuery;
use crate::service::ProductService;
use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};

/// Query string of `GET /api/products/search`. Every parameter is optional and
/// the given ones must all hold.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchParams {
    /// Case-insensitive name fragment.
    pub name: Option<String>,
    /// Strict upper price bound.
    pub price_below: Option<f64>,
    /// Strict lower price bound.
    pub price_above: Option<f64>,
    /// Strict lower quantity bound.
    pub quantity_above: Option<u32>,
}

impl TryFrom<SearchParams> for ProductQuery {
    type Error = ApiError;

    /// Non-finite price bounds are rejected like any other unparsable value.
    fn try_from(params: SearchParams) -> Result<Self, ApiError> {
        for (name, bound) in [
            ("priceBelow", params.price_below),
            ("priceAbove", params.price_above),
        ] {
            if bound.is_some_and(|value| !value.is_finite()) {
                return Err(ApiError::BadRequest(format!(
                    "{} must be a finite number",
                    name
                )));
            }
        }

        let parts = [
            params.name.map(ProductQuery::NameContains),
            params.price_below.map(ProductQuery::PriceBelow),
            params.price_above.map(ProductQuery::PriceAbove),
            params.quantity_above.map(ProductQuery::QuantityAbove),
        ];
        Ok(ProductQuery::all_of(parts.into_iter().flatten()))
    }
}

#[derive(Debug, Serialize)]
pub struct CountResponse {
    pub count: usize,
}

fn product_id(path: Result<Path<u64>, PathRejection>) -> Result<ProductId, ApiError> {
    path.map(|Path(id)| ProductId(id))
        .map_err(|rejection| ApiError::BadRequest(rejection.body_text()))
}

fn decode(payload: Result<Json<ProductDraft>, JsonRejection>) -> Result<ProductDraft, ApiError> {
    payload
        .map(|Json(draft)| draft)
        .map_err(|rejection| ApiError::BadRequest(rejection.body_text()))
}

pub async fn list_products(
    State(service): State<ProductService>,
) -> Result<Json<Vec<Product>>, ApiError> {
    Ok(Json(service.list_products().await?))
}

pub async fn get_product(
    State(service): State<ProductService>,
    id: Result<Path<u64>, PathRejection>,
) -> Result<Json<Product>, ApiError> {
    let id = product_id(id)?;
    Ok(Json(service.get_product(id).await?))
}

pub async fn create_product(
    State(service): State<ProductService>,
    payload: Result<Json<ProductDraft>, JsonRejection>,
) -> Result<(StatusCode, Json<Product>), ApiError> {
    let draft = decode(payload)?;
    let created = service.create_product(draft).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn update_product(
    State(service): State<ProductService>,
    id: Result<Path<u64>, PathRejection>,
    payload: Result<Json<ProductDraft>, JsonRejection>,
) -> Result<Json<Product>, ApiError> {
    let id = product_id(id)?;
    let draft = decode(payload)?;
    Ok(Json(service.update_product(id, draft).await?))
}

pub async fn delete_product(
    State(service): State<ProductService>,
    id: Result<Path<u64>, PathRejection>,
) -> Result<StatusCode, ApiError> {
    service.delete_product(product_id(id)?).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn search_products(
    State(service): State<ProductService>,
    params: Result<Query<SearchParams>, QueryRejection>,
) -> Result<Json<Vec<Product>>, ApiError> {
    let Query(params) = params.map_err(|rejection| ApiError::BadRequest(rejection.body_text()))?;
    Ok(Json(service.search(params.try_into()?).await?))
}

pub async fn count_products(
    State(service): State<ProductService>,
) -> Result<Json<CountResponse>, ApiError> {
    let count = service.count_products().await?;
    Ok(Json(CountResponse { count }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_search_params_match_everything() {
        assert_eq!(
            ProductQuery::try_from(SearchParams::default()).unwrap(),
            ProductQuery::All
        );
    }

    #[test]
    fn test_non_finite_price_bounds_are_rejected() {
        for params in [
            SearchParams {
                price_below: Some(f64::NAN),
                ..Default::default()
            },
            SearchParams {
                price_above: Some(f64::INFINITY),
                ..Default::default()
            },
        ] {
            assert!(matches!(
                ProductQuery::try_from(params),
                Err(ApiError::BadRequest(_))
            ));
        }
    }

    #[test]
    fn test_search_params_are_combined() {
        let params = SearchParams {
            name: Some("lap".into()),
            price_below: Some(100.0),
            ..Default::default()
        };
        assert_eq!(
            ProductQuery::try_from(params).unwrap(),
            ProductQuery::NameContains("lap".into()).and(ProductQuery::PriceBelow(100.0))
        );
    }
}
