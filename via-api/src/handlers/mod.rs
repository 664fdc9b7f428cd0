pub mod cards;

use actix_web::web;

/// Card routes, shared by the server and handler tests.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/api/card-status", web::get().to(cards::card_status))
        .route("/api/card-public", web::get().to(cards::card_public))
        .route("/api/card-is-owner", web::get().to(cards::card_is_owner))
        .route("/api/claim", web::post().to(cards::claim_card))
        .route("/api/cards/{card_id}/edit", web::get().to(cards::get_edit_state))
        .route("/api/cards/{card_id}", web::put().to(cards::save_card));
}
