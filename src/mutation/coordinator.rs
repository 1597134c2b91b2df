use tracing::warn;

use crate::api::CatalogClient;
use crate::mutation::error::MutationError;
use crate::mutation::forms::{CreateForm, EditForm};
use crate::view::TableIntent;

/// Validate, round-trip the catalog service, and on success produce the
/// intent that merges the confirmed result into the view state. The local
/// set is only ever touched through that returned intent, so a failure at
/// any step leaves it exactly as it was.
pub async fn submit_edit(
    client: &CatalogClient,
    form: EditForm,
) -> Result<TableIntent, MutationError> {
    let edit = form.validate()?;
    let patch = client.update_product(form.id, &edit).await.map_err(|err| {
        warn!(id = form.id, error = %err, "product update failed");
        err
    })?;
    Ok(TableIntent::ProductMerged { id: form.id, patch })
}

/// Same contract as [`submit_edit`]; the created product is prepended to
/// the full set by the returned intent.
pub async fn submit_create(
    client: &CatalogClient,
    form: CreateForm,
) -> Result<TableIntent, MutationError> {
    let new = form.validate()?;
    let product = client.create_product(&new).await.map_err(|err| {
        warn!(error = %err, "product creation failed");
        err
    })?;
    Ok(TableIntent::ProductCreated { product })
}
