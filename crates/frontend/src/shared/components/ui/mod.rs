pub mod checkbox;
pub mod input;
pub mod select;
pub mod textarea;

pub use checkbox::Checkbox;
pub use input::{AmountInput, Input};
pub use select::{owned_options, Select};
pub use textarea::Textarea;
