//! Parts screen controller: list, search, create/edit modal with
//! category quick-add and product associations, delete confirmation,
//! image upload.

use std::sync::Arc;
use std::time::Instant;

use tracing::warn;

use gestock_auth::has_role;
use gestock_catalog::{Categorie, Piece, Produit};
use gestock_gateway::CatalogApi;

use crate::image::{PendingImage, resolve_image_url};
use crate::notification::Notifier;
use crate::search::{self, PieceField};

/// Which overlay is open, if any. The editor serves both create and
/// edit; the draft's id decides which save path runs.
#[derive(Debug, Clone, PartialEq)]
pub enum PieceModal {
    Closed,
    Editor,
    ConfirmDelete(Piece),
    /// Category quick-add, opened on top of the editor.
    QuickCategorie(Categorie),
    /// Product quick-add, opened on top of the editor.
    QuickProduit {
        draft: Produit,
        image: Option<PendingImage>,
    },
    /// Read-only view of a row's associated products, with its own
    /// search box.
    Associations { piece: Piece, term: String },
}

pub struct PiecesScreen {
    api: Arc<dyn CatalogApi>,
    roles: Vec<String>,
    pub notifier: Notifier,
    pub pieces: Vec<Piece>,
    pub categories: Vec<Categorie>,
    pub produits: Vec<Produit>,
    pub loading: bool,
    pub search_term: String,
    pub search_field: PieceField,
    pub modal: PieceModal,
    pub draft: Piece,
    pub pending_image: Option<PendingImage>,
    /// Filter typed into the editor's product picker.
    pub produit_search: String,
}

impl PiecesScreen {
    pub fn new(api: Arc<dyn CatalogApi>, roles: Vec<String>) -> Self {
        Self {
            api,
            roles,
            notifier: Notifier::new(),
            pieces: Vec::new(),
            categories: Vec::new(),
            produits: Vec::new(),
            loading: false,
            search_term: String::new(),
            search_field: PieceField::All,
            modal: PieceModal::Closed,
            draft: Piece::template(),
            pending_image: None,
            produit_search: String::new(),
        }
    }

    /// Whether the current session may create, edit or delete parts.
    pub fn can_manage(&self) -> bool {
        has_role(&self.roles, "MAGASINIER") || has_role(&self.roles, "ADMINISTRATEUR")
    }

    /// Fetch parts plus the reference lists the editor needs. A parts
    /// failure surfaces; reference-list failures only degrade the
    /// pickers and are logged.
    pub async fn load(&mut self, now: Instant) {
        self.loading = true;
        match self.api.pieces().await {
            Ok(pieces) => self.pieces = pieces,
            Err(err) => {
                warn!(error = %err, "chargement des pièces échoué");
                self.notifier
                    .error(err.user_message("Erreur lors du chargement des pièces"), now);
            }
        }
        match self.api.categories().await {
            Ok(categories) => self.categories = categories,
            Err(err) => warn!(error = %err, "chargement des catégories échoué"),
        }
        match self.api.produits().await {
            Ok(produits) => self.produits = produits,
            Err(err) => warn!(error = %err, "chargement des produits échoué"),
        }
        self.loading = false;
    }

    /// Rows matching the current search.
    pub fn filtered(&self) -> Vec<&Piece> {
        self.pieces
            .iter()
            .filter(|p| search::piece_matches(p, self.search_field, &self.search_term))
            .collect()
    }

    // ── editor ──────────────────────────────────────────────────────

    pub fn open_create(&mut self) {
        self.draft = Piece::template();
        self.pending_image = None;
        self.produit_search.clear();
        self.modal = PieceModal::Editor;
    }

    pub fn open_edit(&mut self, piece: &Piece) {
        self.draft = piece.clone();
        if self.draft.categorie.is_none() {
            self.draft.categorie = Some(Categorie::default());
        }
        self.pending_image = None;
        self.produit_search.clear();
        self.modal = PieceModal::Editor;
    }

    pub fn close_modal(&mut self) {
        self.modal = PieceModal::Closed;
    }

    pub fn attach_image(&mut self, image: PendingImage) {
        self.pending_image = Some(image);
    }

    /// URL to show in the editor: the freshly picked file wins over
    /// whatever the record already carries.
    pub fn preview_url(&self, api_origin: &str) -> String {
        match &self.pending_image {
            Some(image) => image.preview_data_url(),
            None => resolve_image_url(self.draft.image_url.as_deref(), api_origin),
        }
    }

    /// Products offered by the editor's picker, narrowed by its search
    /// box.
    pub fn pickable_produits(&self) -> Vec<&Produit> {
        self.produits
            .iter()
            .filter(|p| search::produit_picker_matches(p, &self.produit_search))
            .collect()
    }

    pub fn toggle_association(&mut self, produit: &Produit) {
        self.draft.toggle_produit(produit);
    }

    /// Validate, send, then upload the pending image if any. The
    /// editor stays open on failure so nothing typed is lost.
    pub async fn save(&mut self, now: Instant) {
        if let Err(err) = self.draft.validate(&self.pieces) {
            self.notifier.error(err.to_string(), now);
            return;
        }
        self.draft.prepare_for_save();

        let result = match self.draft.id {
            Some(id) => self.api.update_piece(id, &self.draft).await,
            None => self.api.create_piece(&self.draft).await,
        };
        let saved = match result {
            Ok(saved) => saved,
            Err(err) => {
                self.notifier
                    .error(err.user_message("Erreur lors de la sauvegarde de la pièce"), now);
                return;
            }
        };

        let created = self.draft.id.is_none();
        self.modal = PieceModal::Closed;
        if let (Some(image), Some(id)) = (self.pending_image.take(), saved.id) {
            if let Err(err) = self
                .api
                .upload_piece_image(id, &image.file_name, image.bytes)
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
            if created { "Pièce créée" } else { "Pièce mise à jour" },
            now,
        );
        self.load(now).await;
    }

    // ── delete ──────────────────────────────────────────────────────

    pub fn request_delete(&mut self, piece: &Piece) {
        self.modal = PieceModal::ConfirmDelete(piece.clone());
    }

    /// Second step of the delete confirmation; the wire key is the
    /// barcode.
    pub async fn confirm_delete(&mut self, now: Instant) {
        let PieceModal::ConfirmDelete(piece) =
            std::mem::replace(&mut self.modal, PieceModal::Closed)
        else {
            return;
        };
        match self.api.delete_piece(&piece.code_barre).await {
            Ok(()) => {
                self.notifier.success("Pièce supprimée", now);
                self.load(now).await;
            }
            Err(err) => {
                self.notifier
                    .error(err.user_message("Erreur lors de la suppression"), now);
            }
        }
    }

    // ── category quick-add ──────────────────────────────────────────

    pub fn open_quick_categorie(&mut self) {
        self.modal = PieceModal::QuickCategorie(Categorie::default());
    }

    /// Create the category, assign it to the draft, and drop back to
    /// the editor. On failure the quick-add stays open.
    pub async fn save_quick_categorie(&mut self, now: Instant) {
        let mut categorie = match &mut self.modal {
            PieceModal::QuickCategorie(categorie) => std::mem::take(categorie),
            _ => return,
        };
        self.modal = PieceModal::Editor;
        categorie.ensure_code();
        if let Err(err) = categorie.validate() {
            self.notifier.error(err.to_string(), now);
            self.modal = PieceModal::QuickCategorie(categorie);
            return;
        }
        match self.api.create_categorie(&categorie).await {
            Ok(created) => {
                self.categories.push(created.clone());
                self.draft.categorie = Some(created);
                self.notifier.success("Catégorie créée", now);
            }
            Err(err) => {
                self.notifier
                    .error(err.user_message("Erreur lors de la création de la catégorie"), now);
                self.modal = PieceModal::QuickCategorie(categorie);
            }
        }
    }

    // ── product quick-add ───────────────────────────────────────────

    pub fn open_quick_produit(&mut self) {
        self.modal = PieceModal::QuickProduit {
            draft: Produit::template(),
            image: None,
        };
    }

    /// Create the product, associate it to the draft, and drop back to
    /// the editor.
    pub async fn save_quick_produit(&mut self, now: Instant) {
        let (draft, image) = match &mut self.modal {
            PieceModal::QuickProduit { draft, image } => (std::mem::take(draft), image.take()),
            _ => return,
        };
        self.modal = PieceModal::Editor;
        if let Err(err) = draft.validate() {
            self.notifier.error(err.to_string(), now);
            self.modal = PieceModal::QuickProduit { draft, image };
            return;
        }
        let mut created = match self.api.create_produit(&draft).await {
            Ok(created) => created,
            Err(err) => {
                self.notifier
                    .error(err.user_message("Erreur lors de la création du produit"), now);
                self.modal = PieceModal::QuickProduit { draft, image };
                return;
            }
        };
        let mut image_failed = false;
        if let (Some(file), Some(id)) = (image, created.id) {
            match self
                .api
                .upload_produit_image(id, &file.file_name, file.bytes)
                .await
            {
                Ok(updated) => created = updated,
                Err(err) => {
                    image_failed = true;
                    self.notifier
                        .error(err.user_message("Erreur lors de l'envoi de l'image"), now);
                }
            }
        }
        // the product exists either way; only the notification differs
        self.produits.push(created.clone());
        self.draft.add_produit(created);
        if !image_failed {
            self.notifier.success("Produit créé", now);
        }
    }

    // ── associations view ───────────────────────────────────────────

    pub fn show_associations(&mut self, piece: &Piece) {
        self.modal = PieceModal::Associations {
            piece: piece.clone(),
            term: String::new(),
        };
    }

    /// Associated products of the viewed row, narrowed by the modal's
    /// search box.
    pub fn associations_filtered(&self) -> Vec<&Produit> {
        match &self.modal {
            PieceModal::Associations { piece, term } => piece
                .produits_associes
                .iter()
                .filter(|p| search::produit_picker_matches(p, term))
                .collect(),
            _ => Vec::new(),
        }
    }
}
