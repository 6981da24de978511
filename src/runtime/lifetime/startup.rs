use crate::models::users::{entities::UserRole, requests::CreateUserRequest};
use crate::storage::Storage;
use crate::utils::password::hash_password;
use crate::utils::token::generate_password;
use std::sync::Arc;
use tracing::{debug, info, warn};

pub struct StartupContext {
    pub storage: Arc<dyn Storage>,
}

/// Create a default admin account when the users table is empty.
async fn seed_admin(storage: &Arc<dyn Storage>) {
    match storage.count_users().await {
        Ok(count) if count > 0 => {
            debug!("Database already has {} user(s), skipping admin seed", count);
            return;
        }
        Ok(_) => {
            info!("No users found in database, creating default admin account...");
        }
        Err(e) => {
            warn!("Failed to count users: {}, skipping admin seed", e);
            return;
        }
    }

    // Password from env, otherwise generated and printed once
    let password = std::env::var("ADMIN_PASSWORD").unwrap_or_else(|_| {
        let pwd = generate_password(16);
        warn!("==========================================================");
        warn!("  ADMIN PASSWORD NOT SET - USING GENERATED PASSWORD");
        warn!("  Generated admin password: {}", pwd);
        warn!("  Please save this password or set ADMIN_PASSWORD env var");
        warn!("==========================================================");
        pwd
    });

    let password_hash = match hash_password(&password) {
        Ok(hash) => hash,
        Err(e) => {
            warn!("Failed to hash admin password: {}, skipping admin seed", e);
            return;
        }
    };

    let admin_request = CreateUserRequest {
        email: "admin@localhost".to_string(),
        password,
        name: "Administrator".to_string(),
        role: UserRole::Admin,
        is_wali_kelas: false,
        assigned_class: None,
    };

    match storage.create_user(admin_request, password_hash).await {
        Ok(user) => {
            info!(
                "Default admin account created successfully (ID: {}, email: {})",
                user.id, user.email
            );
        }
        Err(e) => {
            warn!("Failed to create admin account: {}", e);
        }
    }
}

/// Remove stale session rows from previous runs.
async fn purge_expired_sessions(storage: &Arc<dyn Storage>) {
    let now = chrono::Utc::now().timestamp();
    match storage.delete_expired_sessions(now).await {
        Ok(0) => {}
        Ok(removed) => info!("Purged {} expired session(s)", removed),
        Err(e) => warn!("Failed to purge expired sessions: {}", e),
    }
}

/// Prepare everything the server needs before binding.
pub async fn prepare_server_startup() -> StartupContext {
    let storage = crate::storage::create_storage()
        .await
        .expect("Failed to create storage backend");
    warn!("Storage backend initialized and migrations completed");

    seed_admin(&storage).await;
    purge_expired_sessions(&storage).await;

    StartupContext { storage }
}
