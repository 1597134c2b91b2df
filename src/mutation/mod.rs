//! Mutation coordinator: validate form input, call the remote service,
//! and only then touch local state via a view intent.

mod coordinator;
mod error;
mod forms;

pub use coordinator::{submit_create, submit_edit};
pub use error::MutationError;
pub use forms::{split_image_urls, CreateForm, EditForm};
