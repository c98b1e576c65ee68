mod config;
mod io;
mod parity;

pub use config::ConfigError;
pub use io::IoError;
pub use parity::ParityError;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Io(#[from] IoError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Parity(#[from] ParityError),
}

pub type Result<T> = std::result::Result<T, Error>;
