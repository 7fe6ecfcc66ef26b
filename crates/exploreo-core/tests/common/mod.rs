use std::sync::Arc;

use exploreo_core::{auth::LocalAuth, DocumentStore, DocumentStoreBuilder, SignUp};
use tempfile::TempDir;

/// Helper function to create a store and auth gate on a temporary database
pub async fn create_test_store() -> (TempDir, DocumentStore, Arc<LocalAuth>) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("test.db");
    let store = DocumentStoreBuilder::new()
        .with_database_path(Some(&db_path))
        .build()
        .await
        .expect("Failed to create store");
    let auth = Arc::new(
        LocalAuth::open(store.clone())
            .await
            .expect("Failed to open auth"),
    );
    (temp_dir, store, auth)
}

/// Sign-up parameters for a throwaway account
pub fn sign_up(email: &str) -> SignUp {
    SignUp {
        email: email.to_string(),
        password: "secret1".to_string(),
        display_name: "Traveller".to_string(),
    }
}
