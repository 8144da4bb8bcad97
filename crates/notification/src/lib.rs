mod mailer;
mod resend;
mod smtp;

pub use mailer::*;
pub use resend::*;
pub use smtp::*;
