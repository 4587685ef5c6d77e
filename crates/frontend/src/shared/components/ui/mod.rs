pub mod button;
pub mod checkbox;
pub mod input;
pub mod select;
pub mod textarea;

pub use button::{Button, ButtonStyle};
pub use checkbox::Checkbox;
pub use input::{Input, Suggestions};
pub use select::Select;
pub use textarea::Textarea;
