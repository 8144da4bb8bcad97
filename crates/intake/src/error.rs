use thiserror::Error;

#[derive(Error, Debug)]
pub enum IntakeError {
    #[error("Name, email, and message are required")]
    MissingRequired,

    #[error("Failed to render inquiry email: {0}")]
    Render(#[from] askama::Error),
}
