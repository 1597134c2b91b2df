use crate::view::intent::TableIntent;
use crate::view::mvi::Reducer;
use crate::view::state::{total_pages, TableState, PAGE_SIZES};

/// Pure reducer for the table view state.
///
/// Page-number rules, applied on every transition:
/// - changing the filter, the sort, or the page size resets to page 1;
/// - replacing or prepending to the product set resets to page 1;
/// - selecting a page clamps it into `1..=total_pages`;
/// - merging an edit keeps the page but clamps it, since the edit may
///   shrink the filtered set out from under the current page.
pub struct TableReducer;

impl Reducer for TableReducer {
    type State = TableState;
    type Intent = TableIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            TableIntent::ProductsLoaded { products } => TableState {
                products,
                page: 1,
                ..state
            },
            TableIntent::FilterChanged { text } => TableState {
                filter: text,
                page: 1,
                ..state
            },
            TableIntent::SortToggled { column } => TableState {
                sort: state.sort.toggled(column),
                page: 1,
                ..state
            },
            TableIntent::PageSizeChanged { size } => {
                debug_assert!(PAGE_SIZES.contains(&size), "page size {size} not allowed");
                TableState {
                    page_size: size,
                    page: 1,
                    ..state
                }
            }
            TableIntent::PageSelected { page } => {
                let clamped = page.clamp(1, state.total_pages());
                TableState {
                    page: clamped,
                    ..state
                }
            }
            TableIntent::ProductMerged { id, patch } => {
                let mut products = state.products;
                if let Some(existing) = products.iter_mut().find(|p| p.id == id) {
                    existing.apply(&patch);
                }
                let mut next = TableState { products, ..state };
                let max = total_pages(next.filtered_count(), next.page_size);
                next.page = next.page.clamp(1, max);
                next
            }
            TableIntent::ProductCreated { product } => {
                let mut products = state.products;
                products.insert(0, product);
                TableState {
                    products,
                    page: 1,
                    ..state
                }
            }
        }
    }
}
