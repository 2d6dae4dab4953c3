mod builders;
mod signer;

pub use builders::*;
pub use signer::*;
