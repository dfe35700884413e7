mod binding;
pub use binding::*;

mod badge;
pub use badge::*;

mod button;
pub use button::*;
