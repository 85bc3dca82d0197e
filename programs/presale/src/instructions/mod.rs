pub mod initialize_presale;
pub mod buy;
pub mod claim;
pub mod end_presale;
pub mod withdraw;
pub mod emit_presale_quote;

pub use initialize_presale::*;
pub use buy::*;
pub use claim::*;
pub use end_presale::*;
pub use withdraw::*;
pub use emit_presale_quote::*;
