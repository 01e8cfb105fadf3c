//! `gestock-logistics` — warehouses (entrepôts).

pub mod entrepot;

pub use entrepot::{Entrepot, distinct_cities, total_capacity};
