//! One controller per screen. Controllers own their view state (cached
//! lists, search, modal, draft, notifications) and talk to the backend
//! only through the gateway traits.

pub mod entrepots;
pub mod pieces;
pub mod produits;
pub mod settings;
pub mod users;

pub use entrepots::{EntrepotModal, EntrepotsScreen, FleetStats};
pub use pieces::{PieceModal, PiecesScreen};
pub use produits::{ProduitModal, ProduitsScreen};
pub use settings::SettingsScreen;
pub use users::{UserModal, UsersScreen};
