use book_storefront::router::create_app_router;
use book_storefront::state::AppState;
use std::net::SocketAddr;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("book_storefront=info")),
        )
        .init();

    // Initialize application state
    let state = Arc::new(AppState::new());

    // Build application router with all routes and middleware
    let app = create_app_router(state);

    // Configure the server address
    let addr = SocketAddr::from(([0, 0, 0, 0], 8000));
    tracing::info!(%addr, "server running");

    // Start the server
    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}

#[cfg(test)]
mod tests {
    use book_storefront::account::RandomOrderIds;
    use book_storefront::catalog::data::seed_catalog;
    use book_storefront::state::AppState;
    use book_storefront::storage::MemoryStorage;
    use std::sync::Arc;

    #[test]
    fn test_state_wiring_and_aggregation() {
        let state = AppState::with_parts(
            seed_catalog(),
            Arc::new(MemoryStorage::new()),
            Box::new(RandomOrderIds),
        );

        let book = state.catalog[0].clone();

        {
            let mut cart = state.cart.lock().unwrap();
            cart.add(&book);
            cart.add(&book);
        }

        let cart = state.cart.lock().unwrap();
        assert_eq!(cart.lines().len(), 1, "adds should aggregate to one line");
        assert_eq!(cart.count(), 2);
        assert_eq!(
            cart.total(),
            (book.price * 2.0 * 100.0).round() / 100.0
        );
    }
}
