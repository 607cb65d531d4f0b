/// GET /status - Liveness check, always `OK`
pub async fn get_status() -> &'static str {
    "OK"
}
