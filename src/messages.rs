//! The shared per-field error messages.
//!
//! Every backend pairs its constraints with these exact strings, so switching
//! the active backend never changes what the user sees.

pub const TEXT_TOO_SHORT: &str = "Text must be at least 3 characters";
pub const SELECT_REQUIRED: &str = "Please select an option";
pub const NUMBER_TOO_SMALL: &str = "Number must be at least 1";
pub const RANGE_OUT_OF_BOUNDS: &str = "Range must be between 0 and 100";
pub const DATE_INVALID: &str = "Please enter a valid date";
pub const FILE_REQUIRED: &str = "Please upload a file";
pub const CHECKBOX_UNCHECKED: &str = "You must agree to continue";
pub const RADIO_INVALID: &str = "Please select an option";
pub const ARRAY_EMPTY: &str = "Array must have at least one item";
pub const ARRAY_ITEM_TOO_SHORT: &str = "Array item must be at least 5 characters";
