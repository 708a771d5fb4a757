//! Options form binding — filling the character options form, greying out
//! items locked by level, and reading submissions back.

pub mod bindings;
pub mod disable;
pub mod init;
pub mod labels;
pub mod model;
pub mod submit;

pub use disable::{disable_unusable_dofus, disable_unusable_prysmaradites};
pub use init::initialize;
pub use model::{OptionValue, Options, Prysmaradites, UnusableSet};
pub use submit::{read_prysmaradite_submission, read_submission};
