pub mod analysis;
pub mod job_description;
pub mod resume;

/// Character limit of the `VARCHAR(255)` name, title, company and url columns.
pub const MAX_NAME_CHARS: usize = 255;
