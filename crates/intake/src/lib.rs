mod email;
mod error;
mod options;
mod submission;

pub use email::*;
pub use error::*;
pub use options::*;
pub use submission::*;
