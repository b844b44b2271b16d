pub mod money;
pub mod payback;
pub mod percentage;

pub use money::Money;
pub use payback::Payback;
pub use percentage::Percentage;
