//! Authentication gate.
//!
//! [`AuthGate`] is the identity contract the rest of the core depends on.
//! [`LocalAuth`] implements it on top of the local document store so the
//! signed-in identity survives restarts of the process.
//!
//! Credential checks from [`crate::params`] run before any storage access.

use std::sync::RwLock;

use async_trait::async_trait;
use jiff::Timestamp;
use log::{debug, info};

use crate::{
    db::AccountRecord,
    documents::{new_document_id, DocumentStore},
    error::{ExploreoError, Result},
    models::UserProfile,
    params::{SignIn, SignUp},
    store::ProfileStore,
};

const INVALID_CREDENTIALS: &str = "invalid email or password";
const EMAIL_TAKEN: &str = "email already registered";

/// Identity provider contract.
#[async_trait]
pub trait AuthGate: Send + Sync {
    /// Id of the signed-in identity, if any.
    fn current_user_id(&self) -> Option<String>;

    /// Signs in and returns the identity id.
    async fn sign_in(&self, params: &SignIn) -> Result<String>;

    /// Creates an identity, signs it in and returns its id.
    async fn sign_up(&self, params: &SignUp) -> Result<String>;

    /// Forgets the signed-in identity.
    async fn sign_out(&self) -> Result<()>;
}

/// Registers a new identity and upserts its profile document.
pub async fn register(
    auth: &dyn AuthGate,
    profiles: &dyn ProfileStore,
    params: &SignUp,
    preferred_language: &str,
) -> Result<UserProfile> {
    let uid = auth.sign_up(params).await?;
    let profile = UserProfile {
        id: uid,
        display_name: params.display_name.trim().to_string(),
        email: params.email.trim().to_string(),
        preferred_language: preferred_language.to_string(),
    };
    profiles.upsert(&profile).await?;
    info!("Registered {}", profile.id);
    Ok(profile)
}

/// Auth gate backed by the local document store.
pub struct LocalAuth {
    store: DocumentStore,
    current: RwLock<Option<String>>,
}

impl LocalAuth {
    /// Opens the gate, restoring any persisted sign-in.
    pub async fn open(store: DocumentStore) -> Result<Self> {
        let current = store.with_db(|db| db.current_session()).await?;
        debug!("Restored session: {}", current.is_some());
        Ok(Self {
            store,
            current: RwLock::new(current),
        })
    }

    fn set_current(&self, uid: Option<String>) {
        match self.current.write() {
            Ok(mut guard) => *guard = uid,
            Err(poisoned) => *poisoned.into_inner() = uid,
        }
    }
}

fn hash_password(salt: &str, password: &str) -> blake3::Hash {
    let mut hasher = blake3::Hasher::new();
    hasher.update(salt.as_bytes());
    hasher.update(password.as_bytes());
    hasher.finalize()
}

fn verify_password(record: &AccountRecord, password: &str) -> bool {
    blake3::Hash::from_hex(&record.password_hash)
        .map(|stored| stored == hash_password(&record.password_salt, password))
        .unwrap_or(false)
}

#[async_trait]
impl AuthGate for LocalAuth {
    fn current_user_id(&self) -> Option<String> {
        match self.current.read() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    async fn sign_in(&self, params: &SignIn) -> Result<String> {
        params.validate()?;
        let email = params.email.trim().to_string();
        let password = params.password.clone();

        let uid = self
            .store
            .with_db(move |db| {
                let record = db
                    .find_account_by_email(&email)?
                    .filter(|record| verify_password(record, &password))
                    .ok_or_else(|| ExploreoError::remote(INVALID_CREDENTIALS))?;
                db.set_session(&record.uid)?;
                Ok(record.uid)
            })
            .await?;

        info!("Signed in {uid}");
        self.set_current(Some(uid.clone()));
        Ok(uid)
    }

    async fn sign_up(&self, params: &SignUp) -> Result<String> {
        params.validate()?;
        let salt = new_document_id();
        let password_hash = hash_password(&salt, &params.password).to_hex().to_string();
        let record = AccountRecord {
            uid: new_document_id(),
            email: params.email.trim().to_string(),
            password_salt: salt,
            password_hash,
        };
        let created_at = Timestamp::now().as_millisecond();

        let uid = self
            .store
            .with_db(move |db| {
                if !db.create_account(&record, created_at)? {
                    return Err(ExploreoError::remote(EMAIL_TAKEN));
                }
                db.set_session(&record.uid)?;
                Ok(record.uid)
            })
            .await?;

        info!("Created identity {uid}");
        self.set_current(Some(uid.clone()));
        Ok(uid)
    }

    async fn sign_out(&self) -> Result<()> {
        self.store.with_db(|db| db.clear_session()).await?;
        self.set_current(None);
        info!("Signed out");
        Ok(())
    }
}
