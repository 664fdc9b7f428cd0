use actix_web::{web, HttpRequest, HttpResponse, Result as ActixResult};
use serde::Deserialize;
use shared_types::{
    CardOwnerResponse, CardRow, CardStatusResponse, ClaimRequest, ClaimResponse, ErrorResponse,
    SaveCardRequest,
};
use std::sync::Arc;
use tracing::{info, warn};

use crate::database::cards::{self as cards_db, CardUpdate, ClaimOutcome};
use crate::database::Database;
use crate::helpers::identity::request_user_id;

#[derive(Clone)]
pub struct CardsAppState {
    pub user_header: String,
}

#[derive(Debug, Deserialize)]
pub struct CardQuery {
    #[serde(rename = "cardId")]
    pub card_id: String,
}

/// Looks up a card after validating its id; `Err` is the response to return.
async fn load_card(db: &Database, card_id: &str) -> Result<CardRow, HttpResponse> {
    if let Err(e) = normalizer::validate_card_id(card_id) {
        return Err(HttpResponse::BadRequest().json(ErrorResponse::new(e.to_string())));
    }

    match cards_db::get_card(db.async_connection.clone(), card_id).await {
        Ok(Some(card)) => Ok(card),
        Ok(None) => Err(HttpResponse::NotFound().json(ErrorResponse::new("Card not found"))),
        Err(e) => {
            warn!("Failed to load card {}: {}", card_id, e);
            Err(HttpResponse::InternalServerError()
                .json(ErrorResponse::new("Server error").with_details(e.to_string())))
        }
    }
}

/// Like [`load_card`], but only for the card's owner.
async fn load_owned_card(
    db: &Database,
    state: &CardsAppState,
    req: &HttpRequest,
    card_id: &str,
) -> Result<(CardRow, String), HttpResponse> {
    let Some(user_id) = request_user_id(req, &state.user_header) else {
        return Err(HttpResponse::Unauthorized().json(ErrorResponse::new("Unauthorized")));
    };

    let card = load_card(db, card_id).await?;
    if !card.is_claimed() {
        return Err(HttpResponse::Conflict().json(ErrorResponse::new("Card is unclaimed")));
    }
    if !card.is_owned_by(&user_id) {
        return Err(HttpResponse::Forbidden().json(ErrorResponse::new("Not the card owner")));
    }

    Ok((card, user_id))
}

pub async fn card_status(
    db: web::Data<Arc<Database>>,
    query: web::Query<CardQuery>,
) -> ActixResult<HttpResponse> {
    let card = match load_card(&db, &query.card_id).await {
        Ok(card) => card,
        Err(response) => return Ok(response),
    };

    Ok(HttpResponse::Ok().json(CardStatusResponse {
        is_claimed: card.is_claimed(),
    }))
}

pub async fn card_public(
    db: web::Data<Arc<Database>>,
    query: web::Query<CardQuery>,
) -> ActixResult<HttpResponse> {
    let card = match load_card(&db, &query.card_id).await {
        Ok(card) => card,
        Err(response) => return Ok(response),
    };

    if !card.is_claimed() {
        return Ok(HttpResponse::Forbidden().json(ErrorResponse::new("Card is unclaimed")));
    }

    Ok(HttpResponse::Ok().json(normalizer::present_card(&card)))
}

pub async fn card_is_owner(
    db: web::Data<Arc<Database>>,
    state: web::Data<CardsAppState>,
    query: web::Query<CardQuery>,
    req: HttpRequest,
) -> ActixResult<HttpResponse> {
    let Some(user_id) = request_user_id(&req, &state.user_header) else {
        return Ok(HttpResponse::Ok().json(CardOwnerResponse {
            signed_in: false,
            is_owner: false,
        }));
    };

    let card = match load_card(&db, &query.card_id).await {
        Ok(card) => card,
        Err(response) => return Ok(response),
    };

    Ok(HttpResponse::Ok().json(CardOwnerResponse {
        signed_in: true,
        is_owner: card.is_owned_by(&user_id),
    }))
}

pub async fn claim_card(
    db: web::Data<Arc<Database>>,
    state: web::Data<CardsAppState>,
    request: web::Json<ClaimRequest>,
    req: HttpRequest,
) -> ActixResult<HttpResponse> {
    let card_id = request.into_inner().card_id;
    if let Err(e) = normalizer::validate_card_id(&card_id) {
        return Ok(HttpResponse::BadRequest().json(ErrorResponse::new(e.to_string())));
    }

    let Some(user_id) = request_user_id(&req, &state.user_header) else {
        return Ok(HttpResponse::Unauthorized().json(ErrorResponse::new("Unauthorized")));
    };

    let outcome = cards_db::claim_card(db.async_connection.clone(), &card_id, &user_id)
        .await
        .map_err(|e| actix_web::error::ErrorInternalServerError(e.to_string()))?;

    match outcome {
        ClaimOutcome::Claimed => {
            info!("Card {} claimed by {}", card_id, user_id);
            Ok(HttpResponse::Ok().json(ClaimResponse {
                ok: true,
                card_id,
                owner_user_id: user_id,
            }))
        }
        ClaimOutcome::AlreadyClaimed => {
            Ok(HttpResponse::Conflict().json(ErrorResponse::new("Already claimed")))
        }
        ClaimOutcome::NotFound => {
            Ok(HttpResponse::NotFound().json(ErrorResponse::new("Card not found")))
        }
    }
}

pub async fn get_edit_state(
    db: web::Data<Arc<Database>>,
    state: web::Data<CardsAppState>,
    path: web::Path<String>,
    req: HttpRequest,
) -> ActixResult<HttpResponse> {
    let card_id = path.into_inner();
    let (card, _) = match load_owned_card(&db, &state, &req, &card_id).await {
        Ok(owned) => owned,
        Err(response) => return Ok(response),
    };

    Ok(HttpResponse::Ok().json(normalizer::edit_state(&card)))
}

pub async fn save_card(
    db: web::Data<Arc<Database>>,
    state: web::Data<CardsAppState>,
    path: web::Path<String>,
    request: web::Json<SaveCardRequest>,
    req: HttpRequest,
) -> ActixResult<HttpResponse> {
    let card_id = path.into_inner();
    let (card, user_id) = match load_owned_card(&db, &state, &req, &card_id).await {
        Ok(owned) => owned,
        Err(response) => return Ok(response),
    };

    let request = request.into_inner();
    if let Err(e) = normalizer::validate_save_request(&request) {
        return Ok(HttpResponse::BadRequest().json(ErrorResponse::new(e.to_string())));
    }

    let form = normalizer::PaymentsForm::from_request(&request);
    let update = CardUpdate {
        display_name: request.display_name.trim().to_string(),
        bio: non_empty(&request.bio),
        photo_url: non_empty(&request.photo_url),
        pay_label: non_empty(&request.pay_label),
        payments_json: form.to_payments_json(),
        show_phone: request.show_phone.or(card.show_phone).unwrap_or(true),
        show_email: request.show_email.or(card.show_email).unwrap_or(true),
        show_save_contact: request
            .show_save_contact
            .or(card.show_save_contact)
            .unwrap_or(true),
    };

    let saved = cards_db::update_card(db.async_connection.clone(), &card_id, &user_id, &update)
        .await
        .map_err(|e| actix_web::error::ErrorInternalServerError(e.to_string()))?;
    if !saved {
        // Ownership changed between the read and the write
        return Ok(HttpResponse::Forbidden().json(ErrorResponse::new("Not the card owner")));
    }

    info!("Card {} saved by its owner", card_id);

    let refreshed = cards_db::get_card(db.async_connection.clone(), &card_id)
        .await
        .map_err(|e| actix_web::error::ErrorInternalServerError(e.to_string()))?
        .ok_or_else(|| actix_web::error::ErrorNotFound("Card not found"))?;

    Ok(HttpResponse::Ok().json(normalizer::edit_state(&refreshed)))
}

fn non_empty(value: &str) -> Option<String> {
    let value = value.trim();
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}
