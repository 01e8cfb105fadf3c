//! Settings screen controller: self-service profile and password
//! forms.

use std::sync::Arc;
use std::time::Instant;

use gestock_directory::{PasswordChange, ProfileUpdate};
use gestock_gateway::ProfileApi;

use crate::notification::Notifier;

pub struct SettingsScreen {
    api: Arc<dyn ProfileApi>,
    pub notifier: Notifier,
    pub profile: ProfileUpdate,
    pub password: PasswordChange,
}

impl SettingsScreen {
    pub fn new(api: Arc<dyn ProfileApi>) -> Self {
        Self {
            api,
            notifier: Notifier::new(),
            profile: ProfileUpdate::default(),
            password: PasswordChange::default(),
        }
    }

    /// Prefill the profile form from the session's identity claims.
    pub fn seed(&mut self, profile: ProfileUpdate) {
        self.profile = profile;
    }

    pub async fn save_profile(&mut self, now: Instant) {
        if let Err(err) = self.profile.validate() {
            self.notifier.error(err.to_string(), now);
            return;
        }
        match self.api.update_profile(&self.profile).await {
            Ok(()) => self.notifier.success("Profil mis à jour", now),
            Err(err) => self.notifier.error(
                err.user_message("Erreur lors de la mise à jour du profil"),
                now,
            ),
        }
    }

    /// Validate the two password fields locally, push the change, then
    /// blank the form so the password never lingers in memory.
    pub async fn change_password(&mut self, now: Instant) {
        if let Err(err) = self.password.validate() {
            self.notifier.error(err.to_string(), now);
            return;
        }
        let payload = std::mem::take(&mut self.password).into();
        match self.api.update_password(&payload).await {
            Ok(()) => self.notifier.success("Mot de passe mis à jour", now),
            Err(err) => self.notifier.error(
                err.user_message("Erreur lors du changement de mot de passe"),
                now,
            ),
        }
    }
}
