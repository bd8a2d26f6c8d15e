use std::fmt::Display;

use crate::InternalError;

/// Attaches a human readable context to a failure and turns it into an [`InternalError`].
pub trait Context<T> {
    fn context<C>(self, context: C) -> Result<T, InternalError>
    where
        C: Display + Send + Sync + 'static;
}

impl<T, E> Context<T> for Result<T, E>
where
    E: Into<anyhow::Error> + std::error::Error + Send + Sync + 'static,
{
    fn context<C>(self, context: C) -> Result<T, InternalError>
    where
        C: Display + Send + Sync + 'static,
    {
        self.map_err(|e| InternalError(anyhow::Error::from(e).context(context)))
    }
}
