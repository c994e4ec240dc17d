#[cfg(test)]
use crate::features::auth::model::{AuthenticatedUser, User, UserRole};

#[cfg(test)]
use axum::{extract::Request, middleware::Next, Router};

#[cfg(test)]
use uuid::Uuid;

#[cfg(test)]
pub fn create_admin_user() -> AuthenticatedUser {
    AuthenticatedUser {
        token: "test-admin-token".to_string(),
        user: User {
            id: Uuid::new_v4(),
            name: "Commander Admin".to_string(),
            email: "admin@resq.test".to_string(),
            role: UserRole::Admin,
        },
    }
}

#[cfg(test)]
pub fn create_citizen_user() -> AuthenticatedUser {
    AuthenticatedUser {
        token: "test-citizen-token".to_string(),
        user: User {
            id: Uuid::new_v4(),
            name: "priya".to_string(),
            email: "priya@resq.test".to_string(),
            role: UserRole::Citizen,
        },
    }
}

/// Wrap a router so every request arrives as `user`, skipping the session lookup
#[cfg(test)]
pub fn with_auth(router: Router, user: AuthenticatedUser) -> Router {
    router.layer(axum::middleware::from_fn(
        move |mut request: Request, next: Next| {
            let user = user.clone();
            async move {
                request.extensions_mut().insert(user);
                next.run(request).await
            }
        },
    ))
}
