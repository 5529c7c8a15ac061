/// Errors raised by store mutations.
///
/// Lookups of absent ids are not errors; repositories return `None` or
/// `false` for those.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Duplicate {entity} id: {id}")]
    DuplicateId { entity: &'static str, id: String },
}
