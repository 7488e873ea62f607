pub mod initialize;
pub mod set_unit_price;
pub mod set_payment_mint;
pub mod toggle_sale;
pub mod set_whitelist;
pub mod set_term;
pub mod buy_allocation;
pub mod push_migration;
pub mod pull_migration;
pub mod withdraw;
pub mod set_admin;
pub mod emit_share_quote;

pub use initialize::*;
pub use set_unit_price::*;
pub use set_payment_mint::*;
pub use toggle_sale::*;
pub use set_whitelist::*;
pub use set_term::*;
pub use buy_allocation::*;
pub use push_migration::*;
pub use pull_migration::*;
pub use withdraw::*;
pub use set_admin::*;
pub use emit_share_quote::*;
