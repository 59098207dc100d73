//! Entity module - Contains all SeaORM entity definitions for the database.
//! Each entity has a Model struct for data and an Entity struct for operations.
//! References between tables are plain identifier columns; nothing cascades.

pub mod appointment;
pub mod case;
pub mod case_update;
pub mod client;
pub mod document;

// Re-export specific types to avoid conflicts
pub use appointment::{
    Column as AppointmentColumn, Entity as Appointment, Model as AppointmentModel,
};
pub use case::{CaseStatus, CaseType, Column as CaseColumn, Entity as Case, Model as CaseModel};
pub use case_update::{
    Column as CaseUpdateColumn, Entity as CaseUpdate, Model as CaseUpdateModel,
};
pub use client::{ClientStatus, Column as ClientColumn, Entity as Client, Model as ClientModel};
pub use document::{Column as DocumentColumn, Entity as Document, Model as DocumentModel};
