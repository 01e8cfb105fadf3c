//! Screen controllers for the administration console.
//!
//! Everything here is head-less view logic: cached entity lists,
//! search, modal state machines, drafts, notifications, and the calls
//! into the gateway traits. Rendering is someone else's job.

pub mod image;
pub mod notification;
pub mod screens;
pub mod search;

pub use image::{DEFAULT_IMAGE, PendingImage, resolve_image_url};
pub use notification::{Level, Notice, Notifier};
pub use screens::{
    EntrepotModal, EntrepotsScreen, FleetStats, PieceModal, PiecesScreen, ProduitModal,
    ProduitsScreen, SettingsScreen, UserModal, UsersScreen,
};
pub use search::{PieceField, ProduitField, UserField};
