//! Products screen controller: list, search, create/edit modal,
//! delete confirmation, image upload, associated-parts viewer.

use std::sync::Arc;
use std::time::Instant;

use tracing::warn;

use gestock_auth::has_role;
use gestock_catalog::Produit;
use gestock_gateway::CatalogApi;

use crate::image::{PendingImage, resolve_image_url};
use crate::notification::Notifier;
use crate::search::{self, ProduitField};

#[derive(Debug, Clone, PartialEq)]
pub enum ProduitModal {
    Closed,
    Editor,
    ConfirmDelete(Produit),
    /// Read-only view of a row's associated parts.
    Pieces(Produit),
}

pub struct ProduitsScreen {
    api: Arc<dyn CatalogApi>,
    roles: Vec<String>,
    pub notifier: Notifier,
    pub produits: Vec<Produit>,
    pub loading: bool,
    pub search_term: String,
    pub search_field: ProduitField,
    pub modal: ProduitModal,
    pub draft: Produit,
    pub pending_image: Option<PendingImage>,
}

impl ProduitsScreen {
    pub fn new(api: Arc<dyn CatalogApi>, roles: Vec<String>) -> Self {
        Self {
            api,
            roles,
            notifier: Notifier::new(),
            produits: Vec::new(),
            loading: false,
            search_term: String::new(),
            search_field: ProduitField::All,
            modal: ProduitModal::Closed,
            draft: Produit::template(),
            pending_image: None,
        }
    }

    pub fn can_manage(&self) -> bool {
        has_role(&self.roles, "MAGASINIER") || has_role(&self.roles, "ADMINISTRATEUR")
    }

    pub async fn load(&mut self, now: Instant) {
        self.loading = true;
        match self.api.produits().await {
            Ok(produits) => self.produits = produits,
            Err(err) => {
                warn!(error = %err, "chargement des produits échoué");
                self.notifier
                    .error(err.user_message("Erreur lors du chargement des produits"), now);
            }
        }
        self.loading = false;
    }

    pub fn filtered(&self) -> Vec<&Produit> {
        self.produits
            .iter()
            .filter(|p| search::produit_matches(p, self.search_field, &self.search_term))
            .collect()
    }

    pub fn open_create(&mut self) {
        self.draft = Produit::template();
        self.pending_image = None;
        self.modal = ProduitModal::Editor;
    }

    pub fn open_edit(&mut self, produit: &Produit) {
        self.draft = produit.clone();
        self.pending_image = None;
        self.modal = ProduitModal::Editor;
    }

    pub fn close_modal(&mut self) {
        self.modal = ProduitModal::Closed;
    }

    pub fn attach_image(&mut self, image: PendingImage) {
        self.pending_image = Some(image);
    }

    pub fn preview_url(&self, api_origin: &str) -> String {
        match &self.pending_image {
            Some(image) => image.preview_data_url(),
            None => resolve_image_url(self.draft.image_url.as_deref(), api_origin),
        }
    }

    /// Validate and send; an image picked in the editor is uploaded
    /// right after a successful save. Failure keeps the editor open.
    pub async fn save(&mut self, now: Instant) {
        if let Err(err) = self.draft.validate() {
            self.notifier.error(err.to_string(), now);
            return;
        }

        let result = match self.draft.id {
            Some(id) => self.api.update_produit(id, &self.draft).await,
            None => self.api.create_produit(&self.draft).await,
        };
        let saved = match result {
            Ok(saved) => saved,
            Err(err) => {
                self.notifier
                    .error(err.user_message("Erreur lors de la sauvegarde du produit"), now);
                return;
            }
        };

        let created = self.draft.id.is_none();
        self.modal = ProduitModal::Closed;
        if let (Some(image), Some(id)) = (self.pending_image.take(), saved.id) {
            if let Err(err) = self
                .api
                .upload_produit_image(id, &image.file_name, image.bytes)
                .await
            {
                // the record was saved but its image was not; the
                // upload outcome decides the notification
                self.notifier
                    .error(err.user_message("Erreur lors de l'envoi de l'image"), now);
                self.load(now).await;
                return;
            }
        }

        self.notifier.success(
            if created { "Produit créé" } else { "Produit mis à jour" },
            now,
        );
        self.load(now).await;
    }

    pub fn request_delete(&mut self, produit: &Produit) {
        self.modal = ProduitModal::ConfirmDelete(produit.clone());
    }

    pub async fn confirm_delete(&mut self, now: Instant) {
        let ProduitModal::ConfirmDelete(produit) =
            std::mem::replace(&mut self.modal, ProduitModal::Closed)
        else {
            return;
        };
        let Some(id) = produit.id else {
            return;
        };
        match self.api.delete_produit(id).await {
            Ok(()) => {
                self.notifier.success("Produit supprimé", now);
                self.load(now).await;
            }
            Err(err) => {
                self.notifier
                    .error(err.user_message("Erreur lors de la suppression"), now);
            }
        }
    }

    pub fn show_pieces(&mut self, produit: &Produit) {
        self.modal = ProduitModal::Pieces(produit.clone());
    }
}
