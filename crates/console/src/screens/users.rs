//! Users screen controller: list, search, creation, deletion, status
//! toggling, password reset, and single-business-role management.

use std::sync::Arc;
use std::time::Instant;

use tracing::warn;

use gestock_auth::BusinessRole;
use gestock_directory::{
    MIN_PASSWORD_LEN, NewUser, PasswordChange, RoleChange, UserAccount, plan_role_change,
};
use gestock_gateway::AdminApi;

use crate::notification::Notifier;
use crate::search::{self, UserField};

#[derive(Debug, Clone, PartialEq)]
pub enum UserModal {
    Closed,
    Creating,
    ConfirmDelete(UserAccount),
    /// Role picker, seeded with the role currently held.
    ManageRoles {
        user: UserAccount,
        current: Option<BusinessRole>,
    },
    /// Confirmation step before a role mutation is executed.
    ConfirmRoleChange {
        user: UserAccount,
        change: RoleChange,
    },
    ConfirmStatus(UserAccount),
    ResetPassword {
        user: UserAccount,
        form: PasswordChange,
    },
}

pub struct UsersScreen {
    api: Arc<dyn AdminApi>,
    pub notifier: Notifier,
    pub users: Vec<UserAccount>,
    pub loading: bool,
    pub search_term: String,
    pub search_field: UserField,
    pub modal: UserModal,
    pub draft: NewUser,
}

impl UsersScreen {
    pub fn new(api: Arc<dyn AdminApi>) -> Self {
        Self {
            api,
            notifier: Notifier::new(),
            users: Vec::new(),
            loading: false,
            search_term: String::new(),
            search_field: UserField::All,
            modal: UserModal::Closed,
            draft: NewUser::template(),
        }
    }

    pub async fn load(&mut self, now: Instant) {
        self.loading = true;
        match self.api.list_users().await {
            Ok(users) => self.users = users,
            Err(err) => {
                warn!(error = %err, "chargement des utilisateurs échoué");
                self.notifier.error(
                    err.user_message("Erreur lors du chargement des utilisateurs"),
                    now,
                );
            }
        }
        self.loading = false;
    }

    pub fn filtered(&self) -> Vec<&UserAccount> {
        self.users
            .iter()
            .filter(|u| search::user_matches(u, self.search_field, &self.search_term))
            .collect()
    }

    pub fn close_modal(&mut self) {
        self.modal = UserModal::Closed;
    }

    // ── creation ────────────────────────────────────────────────────

    pub fn open_create(&mut self) {
        self.draft = NewUser::template();
        self.modal = UserModal::Creating;
    }

    /// Validate, send, then prepend the created record so it shows
    /// before the reload lands.
    pub async fn create(&mut self, now: Instant) {
        if self.draft.password.chars().count() < MIN_PASSWORD_LEN {
            self.notifier.error(
                "Le mot de passe doit contenir au moins 8 caractères",
                now,
            );
            return;
        }
        let payload = match self.draft.clone().into_payload() {
            Ok(payload) => payload,
            Err(err) => {
                self.notifier.error(err.to_string(), now);
                return;
            }
        };
        match self.api.create_user(&payload).await {
            Ok(resp) => {
                if let Some(user) = resp.user {
                    self.users.insert(0, user);
                }
                self.notifier.success(
                    resp.message.unwrap_or_else(|| "Utilisateur créé".to_string()),
                    now,
                );
                self.modal = UserModal::Closed;
                self.load(now).await;
            }
            Err(err) => {
                self.notifier.error(
                    err.user_message("Erreur lors de la création de l'utilisateur"),
                    now,
                );
            }
        }
    }

    // ── deletion ────────────────────────────────────────────────────

    pub fn request_delete(&mut self, user: &UserAccount) {
        self.modal = UserModal::ConfirmDelete(user.clone());
    }

    pub async fn confirm_delete(&mut self, now: Instant) {
        let UserModal::ConfirmDelete(user) =
            std::mem::replace(&mut self.modal, UserModal::Closed)
        else {
            return;
        };
        let Some(id) = user.id else {
            return;
        };
        match self.api.delete_user(id).await {
            Ok(()) => {
                self.notifier.success("Utilisateur supprimé", now);
                self.load(now).await;
            }
            Err(err) => {
                self.notifier
                    .error(err.user_message("Erreur lors de la suppression"), now);
            }
        }
    }

    // ── role management ─────────────────────────────────────────────

    /// Open the role picker; the role currently held is read from the
    /// provider, skipping technical noise.
    pub async fn manage_roles(&mut self, user: &UserAccount, now: Instant) {
        let Some(id) = user.id else {
            return;
        };
        match self.api.user_roles(id).await {
            Ok(roles) => {
                let current = BusinessRole::first_in(roles.iter().map(|r| r.name.as_str()));
                self.modal = UserModal::ManageRoles {
                    user: user.clone(),
                    current,
                };
            }
            Err(err) => {
                self.notifier
                    .error(err.user_message("Erreur lors du chargement des rôles"), now);
            }
        }
    }

    /// Picking a role plans the mutation and asks for confirmation.
    /// Picking the role already held is a no-op.
    pub fn request_role(&mut self, target: BusinessRole) {
        let (user, current) = match &self.modal {
            UserModal::ManageRoles { user, current } => (user.clone(), *current),
            _ => return,
        };
        if let Some(change) = plan_role_change(current, target) {
            self.modal = UserModal::ConfirmRoleChange { user, change };
        }
    }

    /// Execute the confirmed mutation. A replace removes the old role
    /// before assigning the new one, keeping the single-role invariant
    /// on the provider side.
    pub async fn confirm_role_change(&mut self, now: Instant) {
        let UserModal::ConfirmRoleChange { user, change } =
            std::mem::replace(&mut self.modal, UserModal::Closed)
        else {
            return;
        };
        let Some(id) = user.id else {
            return;
        };
        let result = match &change {
            RoleChange::Assign(role) => self.api.assign_role(id, role.as_token()).await,
            RoleChange::Remove(role) => self.api.remove_role(id, role.as_token()).await,
            RoleChange::Replace { old, new } => {
                match self.api.remove_role(id, old.as_token()).await {
                    Ok(()) => self.api.assign_role(id, new.as_token()).await,
                    Err(err) => Err(err),
                }
            }
        };
        match result {
            Ok(()) => {
                self.notifier.success("Rôle mis à jour", now);
                self.load(now).await;
            }
            Err(err) => {
                self.notifier
                    .error(err.user_message("Erreur lors de la mise à jour du rôle"), now);
            }
        }
    }

    // ── status ──────────────────────────────────────────────────────

    pub fn request_status_toggle(&mut self, user: &UserAccount) {
        self.modal = UserModal::ConfirmStatus(user.clone());
    }

    pub async fn confirm_status_toggle(&mut self, now: Instant) {
        let UserModal::ConfirmStatus(user) =
            std::mem::replace(&mut self.modal, UserModal::Closed)
        else {
            return;
        };
        let Some(id) = user.id else {
            return;
        };
        let enable = !user.enabled;
        match self.api.toggle_status(id, enable).await {
            Ok(()) => {
                self.notifier.success(
                    if enable {
                        "Utilisateur activé"
                    } else {
                        "Utilisateur bloqué"
                    },
                    now,
                );
                self.load(now).await;
            }
            Err(err) => {
                self.notifier
                    .error(err.user_message("Erreur lors du changement de statut"), now);
            }
        }
    }

    // ── password reset ──────────────────────────────────────────────

    pub fn open_reset_password(&mut self, user: &UserAccount) {
        self.modal = UserModal::ResetPassword {
            user: user.clone(),
            form: PasswordChange::default(),
        };
    }

    /// Validate locally, then push the new password. The form stays
    /// open on a validation failure.
    pub async fn confirm_reset_password(&mut self, now: Instant) {
        let UserModal::ResetPassword { user, form } =
            std::mem::replace(&mut self.modal, UserModal::Closed)
        else {
            return;
        };
        if let Err(err) = form.validate() {
            self.notifier.error(err.to_string(), now);
            self.modal = UserModal::ResetPassword { user, form };
            return;
        }
        let Some(id) = user.id else {
            return;
        };
        match self.api.reset_password(id, &form.into()).await {
            Ok(()) => {
                self.notifier.success("Mot de passe réinitialisé", now);
            }
            Err(err) => {
                self.notifier.error(
                    err.user_message("Erreur lors de la réinitialisation du mot de passe"),
                    now,
                );
            }
        }
    }
}
