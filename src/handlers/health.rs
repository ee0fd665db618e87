pub async fn health() -> &'static str {
    "Car Booking API is running"
}
