//! Authentication and account service

use chrono::Utc;
use std::sync::Arc;
use tracing::{info, warn};
use wander_store::{BlobStore, UserRepository};
use wander_types::{AuthSession, Envelope, Registration, Role, User, UserStatus};

use crate::latency::Latency;
use crate::storage_failure;
use crate::token::TokenIssuer;

pub struct AuthService {
    users: UserRepository,
    tokens: TokenIssuer,
    latency: Latency,
}

impl AuthService {
    pub fn new(store: Arc<dyn BlobStore>, tokens: TokenIssuer, latency: Latency) -> Self {
        Self {
            users: UserRepository::new(store),
            tokens,
            latency,
        }
    }

    /// Log a user in by email. The password is accepted unchecked.
    pub async fn login(&self, email: &str, _password: &str) -> Envelope<AuthSession> {
        self.latency.simulate().await;
        info!("Login attempt for: {}", email);

        let users = match self.users.load().await {
            Ok(users) => users,
            Err(e) => return storage_failure("login", e),
        };

        let Some(user) = users
            .into_iter()
            .find(|u| u.email.eq_ignore_ascii_case(email))
        else {
            return Envelope::fail("user not found");
        };

        self.session_for(user)
    }

    /// Register a new account. Duplicate emails (case-insensitive) are
    /// rejected; merchants start Pending, every other role starts Active.
    pub async fn register(&self, registration: Registration) -> Envelope<AuthSession> {
        self.latency.simulate().await;
        info!("Registration attempt for: {}", registration.email);

        let mut users = match self.users.load().await {
            Ok(users) => users,
            Err(e) => return storage_failure("register", e),
        };

        if users
            .iter()
            .any(|u| u.email.eq_ignore_ascii_case(&registration.email))
        {
            return Envelope::fail("email already registered");
        }

        let status = if registration.role == Role::Merchant {
            UserStatus::Pending
        } else {
            UserStatus::Active
        };

        let user = User {
            id: format!("user-{}", uuid::Uuid::new_v4()),
            username: registration.username,
            email: registration.email,
            role: registration.role,
            status,
            qualification: registration.qualification,
            created_at: Utc::now(),
        };
        users.push(user.clone());

        if let Err(e) = self.users.save(&users).await {
            return storage_failure("register", e);
        }

        info!("Registered {} as {} ({:?})", user.email, user.role, status);
        self.session_for(user)
    }

    /// Admin approval: set an account's status. Not-found is a normal
    /// failure envelope, never a fault.
    pub async fn update_user_status(&self, id: &str, status: UserStatus) -> Envelope<bool> {
        self.latency.simulate().await;

        let mut users = match self.users.load().await {
            Ok(users) => users,
            Err(e) => return storage_failure("update user status", e),
        };

        let Some(user) = users.iter_mut().find(|u| u.id == id) else {
            return Envelope::fail(format!("user not found: {}", id));
        };
        user.status = status;

        if let Err(e) = self.users.save(&users).await {
            return storage_failure("update user status", e);
        }

        info!("User {} status set to {:?}", id, status);
        Envelope::ok(true)
    }

    /// Merchants awaiting admin approval.
    pub async fn pending_merchants(&self) -> Envelope<Vec<User>> {
        self.latency.simulate().await;

        let users = match self.users.load().await {
            Ok(users) => users,
            Err(e) => return storage_failure("pending merchants", e),
        };

        Envelope::ok(
            users
                .into_iter()
                .filter(|u| u.role == Role::Merchant && u.status == UserStatus::Pending)
                .collect(),
        )
    }

    fn session_for(&self, user: User) -> Envelope<AuthSession> {
        match self.tokens.issue(&user.id) {
            Ok(token) => Envelope::ok(AuthSession { user, token }),
            Err(e) => {
                warn!("Token issue failed: {}", e);
                Envelope::fail("could not issue session token")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wander_store::MemoryStore;

    fn service() -> AuthService {
        AuthService::new(
            Arc::new(MemoryStore::new()),
            TokenIssuer::new("test-secret"),
            Latency::none(),
        )
    }

    fn registration(email: &str, role: Role) -> Registration {
        Registration {
            username: "someone".to_string(),
            email: email.to_string(),
            role,
            password: "hunter2".to_string(),
            qualification: None,
        }
    }

    #[tokio::test]
    async fn test_merchant_registers_as_pending() {
        let auth = service();

        let merchant = auth
            .register(registration("shop@example.com", Role::Merchant))
            .await;
        assert!(merchant.success);
        assert_eq!(
            merchant.data.unwrap().user.status,
            UserStatus::Pending
        );

        let traveler = auth
            .register(registration("trip@example.com", Role::Traveler))
            .await;
        assert_eq!(traveler.data.unwrap().user.status, UserStatus::Active);
    }

    #[tokio::test]
    async fn test_duplicate_email_rejected_case_insensitive() {
        let auth = service();

        let first = auth
            .register(registration("dup@example.com", Role::Traveler))
            .await;
        assert!(first.success);

        let second = auth
            .register(registration("DUP@Example.com", Role::Traveler))
            .await;
        assert!(!second.success);
        assert!(second.message.is_some());
    }

    #[tokio::test]
    async fn test_login_token_derived_from_user_id() {
        let auth = service();

        let registered = auth
            .register(registration("lin2@example.com", Role::Traveler))
            .await
            .data
            .unwrap();

        // Any password is accepted
        let session = auth.login("lin2@example.com", "wrong-password").await;
        assert!(session.success);

        let session = session.data.unwrap();
        assert_eq!(session.user.id, registered.user.id);
        let issuer = TokenIssuer::new("test-secret");
        assert_eq!(issuer.subject(&session.token).unwrap(), session.user.id);
    }

    #[tokio::test]
    async fn test_login_unknown_email_fails() {
        let auth = service();
        let result = auth.login("nobody@example.com", "pw").await;
        assert!(!result.success);
    }

    #[tokio::test]
    async fn test_update_status_approves_merchant() {
        let auth = service();

        let merchant = auth
            .register(registration("approve@example.com", Role::Merchant))
            .await
            .data
            .unwrap();

        let queue = auth.pending_merchants().await.data.unwrap();
        assert!(queue.iter().any(|u| u.id == merchant.user.id));

        let updated = auth
            .update_user_status(&merchant.user.id, UserStatus::Active)
            .await;
        assert!(updated.success);

        let queue = auth.pending_merchants().await.data.unwrap();
        assert!(!queue.iter().any(|u| u.id == merchant.user.id));
    }

    #[tokio::test]
    async fn test_update_status_missing_user_fails() {
        let auth = service();
        let result = auth
            .update_user_status("user-missing", UserStatus::Rejected)
            .await;
        assert!(!result.success);
    }
}
