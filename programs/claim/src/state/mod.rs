pub mod migration;
pub mod sale_state;
pub mod term;
pub mod whitelist;

pub use migration::*;
pub use sale_state::*;
pub use term::*;
pub use whitelist::*;
