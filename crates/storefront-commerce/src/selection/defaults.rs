//! Default selection from declared options.

use crate::catalog::ProductOption;
use crate::selection::SelectedOptions;

/// Select the first declared choice of every option.
///
/// Options without choices are left out, so the result has one entry per
/// option with at least one choice, in option order.
pub fn derive_default_selection(options: &[ProductOption]) -> SelectedOptions {
    options
        .iter()
        .filter_map(|option| {
            option
                .default_choice()
                .map(|choice| (option.name.clone(), choice.description.clone()))
        })
        .collect()
}
