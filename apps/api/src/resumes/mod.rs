// Résumé uploads: text extraction, storage, and the HTTP surface.

pub mod extract;
pub mod handlers;
pub mod store;
