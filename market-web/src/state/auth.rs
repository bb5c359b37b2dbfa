//! Authenticated-user state shared across the view tree.

use leptos::prelude::*;
use uuid::Uuid;

use shared::{AuthUser, Profile};

use crate::services::remote::{client, Result};

/// Global auth context: who is signed in, their profile row, and whether the
/// initial session restore is still running.
#[derive(Clone, Copy)]
pub struct AuthContext {
    pub user: RwSignal<Option<AuthUser>>,
    pub profile: RwSignal<Option<Profile>>,
    pub loading: RwSignal<bool>,
}

impl AuthContext {
    fn new() -> Self {
        Self {
            user: RwSignal::new(None),
            profile: RwSignal::new(None),
            loading: RwSignal::new(true),
        }
    }

    pub fn user_id(&self) -> Option<Uuid> {
        self.user.with(|user| user.as_ref().map(|u| u.id))
    }

    /// Record a signed-in user and load the matching profile row.
    pub async fn establish(self, user: AuthUser) {
        let user_id = user.id;
        self.user.set(Some(user));
        match fetch_profile(user_id).await {
            Ok(profile) => self.profile.set(profile),
            Err(err) => log::error!("failed to load profile: {err}"),
        }
    }

    pub fn sign_out(self) {
        client().sign_out();
        self.user.set(None);
        self.profile.set(None);
    }
}

async fn fetch_profile(user_id: Uuid) -> Result<Option<Profile>> {
    client()
        .from("profiles")
        .select("*")
        .eq("id", user_id)
        .maybe_single()
        .await
}

/// Install the auth context and kick off the session restore.
pub fn provide_auth_context() -> AuthContext {
    let context = AuthContext::new();
    provide_context(context);
    leptos::task::spawn_local(async move {
        match client().current_user().await {
            Ok(Some(user)) => context.establish(user).await,
            Ok(None) => {}
            Err(err) => log::error!("session restore failed: {err}"),
        }
        context.loading.set(false);
    });
    context
}

pub fn use_auth_context() -> AuthContext {
    expect_context::<AuthContext>()
}
