//! The view-state pipeline: a single owned record of the product set and
//! the filter/sort/page settings, mutated only through intents and a pure
//! reducer, with the visible slice derived fresh on every read.

mod intent;
pub mod mvi;
mod reducer;
mod state;

pub use intent::TableIntent;
pub use reducer::TableReducer;
pub use state::{
    PageSummary, SortColumn, SortOrder, SortState, TableState, DEFAULT_PAGE_SIZE, PAGE_SIZES,
};
