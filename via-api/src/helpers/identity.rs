use actix_web::HttpRequest;

/// User id forwarded by the auth layer in front of this service.
pub fn request_user_id(req: &HttpRequest, header: &str) -> Option<String> {
    req.headers()
        .get(header)
        .and_then(|value| value.to_str().ok())
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(str::to_string)
}
