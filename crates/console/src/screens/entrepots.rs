//! Warehouses screen controller: list with fleet statistics, search,
//! create/edit modal, delete confirmation.

use std::sync::Arc;
use std::time::Instant;

use tracing::warn;

use gestock_auth::has_role;
use gestock_gateway::LogistiqueApi;
use gestock_logistics::{Entrepot, distinct_cities, total_capacity};

use crate::notification::Notifier;
use crate::search;

#[derive(Debug, Clone, PartialEq)]
pub enum EntrepotModal {
    Closed,
    Editor,
    ConfirmDelete(Entrepot),
}

pub struct EntrepotsScreen {
    api: Arc<dyn LogistiqueApi>,
    roles: Vec<String>,
    pub notifier: Notifier,
    pub entrepots: Vec<Entrepot>,
    pub loading: bool,
    pub search_term: String,
    pub modal: EntrepotModal,
    pub draft: Entrepot,
}

/// Headline numbers above the list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FleetStats {
    pub count: usize,
    pub cities: usize,
    pub capacity: i64,
}

impl EntrepotsScreen {
    pub fn new(api: Arc<dyn LogistiqueApi>, roles: Vec<String>) -> Self {
        Self {
            api,
            roles,
            notifier: Notifier::new(),
            entrepots: Vec::new(),
            loading: false,
            search_term: String::new(),
            modal: EntrepotModal::Closed,
            draft: Entrepot::template(),
        }
    }

    pub fn can_manage(&self) -> bool {
        has_role(&self.roles, "RESPONSABLE_LOGISTIQUE") || has_role(&self.roles, "ADMINISTRATEUR")
    }

    pub async fn load(&mut self, now: Instant) {
        self.loading = true;
        match self.api.entrepots().await {
            Ok(entrepots) => self.entrepots = entrepots,
            Err(err) => {
                warn!(error = %err, "chargement des entrepôts échoué");
                self.notifier
                    .error(err.user_message("Erreur lors du chargement des entrepôts"), now);
            }
        }
        self.loading = false;
    }

    pub fn filtered(&self) -> Vec<&Entrepot> {
        self.entrepots
            .iter()
            .filter(|e| search::entrepot_matches(e, &self.search_term))
            .collect()
    }

    pub fn stats(&self) -> FleetStats {
        FleetStats {
            count: self.entrepots.len(),
            cities: distinct_cities(&self.entrepots),
            capacity: total_capacity(&self.entrepots),
        }
    }

    pub fn open_create(&mut self) {
        self.draft = Entrepot::template();
        self.modal = EntrepotModal::Editor;
    }

    pub fn open_edit(&mut self, entrepot: &Entrepot) {
        self.draft = entrepot.clone();
        self.modal = EntrepotModal::Editor;
    }

    pub fn close_modal(&mut self) {
        self.modal = EntrepotModal::Closed;
    }

    pub async fn save(&mut self, now: Instant) {
        if let Err(err) = self.draft.validate() {
            self.notifier.error(err.to_string(), now);
            return;
        }

        let result = match self.draft.id {
            Some(id) => self.api.update_entrepot(id, &self.draft).await,
            None => self.api.create_entrepot(&self.draft).await,
        };
        match result {
            Ok(_) => {
                self.notifier.success(
                    if self.draft.id.is_none() {
                        "Entrepôt créé"
                    } else {
                        "Entrepôt mis à jour"
                    },
                    now,
                );
                self.modal = EntrepotModal::Closed;
                self.load(now).await;
            }
            Err(err) => {
                self.notifier
                    .error(err.user_message("Erreur lors de la sauvegarde de l'entrepôt"), now);
            }
        }
    }

    pub fn request_delete(&mut self, entrepot: &Entrepot) {
        self.modal = EntrepotModal::ConfirmDelete(entrepot.clone());
    }

    pub async fn confirm_delete(&mut self, now: Instant) {
        let EntrepotModal::ConfirmDelete(entrepot) =
            std::mem::replace(&mut self.modal, EntrepotModal::Closed)
        else {
            return;
        };
        let Some(id) = entrepot.id else {
            return;
        };
        match self.api.delete_entrepot(id).await {
            Ok(()) => {
                self.notifier.success("Entrepôt supprimé", now);
                self.load(now).await;
            }
            Err(err) => {
                self.notifier
                    .error(err.user_message("Erreur lors de la suppression"), now);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use async_trait::async_trait;
    use gestock_core::EntrepotId;
    use gestock_gateway::GatewayError;

    use super::*;

    #[derive(Default)]
    struct FakeLogistique {
        entrepots: Mutex<Vec<Entrepot>>,
        fail: bool,
    }

    #[async_trait]
    impl LogistiqueApi for FakeLogistique {
        async fn entrepots(&self) -> Result<Vec<Entrepot>, GatewayError> {
            if self.fail {
                return Err(GatewayError::Server {
                    status: 503,
                    message: None,
                });
            }
            Ok(self.entrepots.lock().unwrap().clone())
        }

        async fn create_entrepot(&self, entrepot: &Entrepot) -> Result<Entrepot, GatewayError> {
            let mut stored = entrepot.clone();
            let mut entrepots = self.entrepots.lock().unwrap();
            stored.id = Some((entrepots.len() as i64 + 1).into());
            entrepots.push(stored.clone());
            Ok(stored)
        }

        async fn update_entrepot(
            &self,
            id: EntrepotId,
            entrepot: &Entrepot,
        ) -> Result<Entrepot, GatewayError> {
            let mut entrepots = self.entrepots.lock().unwrap();
            if let Some(slot) = entrepots.iter_mut().find(|e| e.id == Some(id)) {
                *slot = entrepot.clone();
            }
            Ok(entrepot.clone())
        }

        async fn delete_entrepot(&self, id: EntrepotId) -> Result<(), GatewayError> {
            self.entrepots.lock().unwrap().retain(|e| e.id != Some(id));
            Ok(())
        }
    }

    fn nord() -> Entrepot {
        Entrepot {
            id: None,
            nom: "Nord".to_string(),
            adresse: "1 rue des Docks".to_string(),
            ville: "Lille".to_string(),
            taille: 500,
        }
    }

    fn screen(fake: FakeLogistique) -> EntrepotsScreen {
        EntrepotsScreen::new(Arc::new(fake), vec!["RESPONSABLE_LOGISTIQUE".into()])
    }

    #[tokio::test]
    async fn incomplete_draft_never_reaches_the_gateway() {
        let mut screen = screen(FakeLogistique::default());
        screen.open_create();
        screen.draft.nom = "Nord".to_string();

        let now = Instant::now();
        screen.save(now).await;
        assert_eq!(screen.modal, EntrepotModal::Editor);
        assert!(
            screen
                .notifier
                .current(now)
                .unwrap()
                .message
                .contains("champs obligatoires")
        );
    }

    #[tokio::test]
    async fn create_then_stats_reflect_the_fleet() {
        let mut screen = screen(FakeLogistique::default());
        screen.open_create();
        screen.draft = nord();
        screen.save(Instant::now()).await;

        screen.open_create();
        screen.draft = Entrepot {
            ville: "Marseille".to_string(),
            taille: 800,
            ..nord()
        };
        screen.save(Instant::now()).await;

        let stats = screen.stats();
        assert_eq!(stats.count, 2);
        assert_eq!(stats.cities, 2);
        assert_eq!(stats.capacity, 1300);
    }

    #[tokio::test]
    async fn delete_flow_requires_the_confirmation_step() {
        let fake = FakeLogistique::default();
        fake.entrepots.lock().unwrap().push(Entrepot {
            id: Some(1.into()),
            ..nord()
        });
        let mut screen = screen(fake);
        screen.load(Instant::now()).await;

        let target = screen.entrepots[0].clone();
        screen.request_delete(&target);
        assert_eq!(screen.entrepots.len(), 1);

        screen.confirm_delete(Instant::now()).await;
        assert!(screen.entrepots.is_empty());
    }

    #[tokio::test]
    async fn load_failure_surfaces_a_notification() {
        let mut screen = screen(FakeLogistique {
            fail: true,
            ..FakeLogistique::default()
        });
        let now = Instant::now();
        screen.load(now).await;
        assert!(
            screen
                .notifier
                .current(now)
                .unwrap()
                .message
                .contains("chargement des entrepôts")
        );
    }

    #[test]
    fn auditors_cannot_manage_the_fleet() {
        let screen = EntrepotsScreen::new(
            Arc::new(FakeLogistique::default()),
            vec!["AUDITEUR".to_string()],
        );
        assert!(!screen.can_manage());
    }
}
