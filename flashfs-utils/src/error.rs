use derive_more::Display;
use flashfs::error::InputError;
use thiserror::Error;

#[derive(Debug, Display, Error)]
pub enum Error {
    #[display("Flash: {_0}")]
    Flash(#[from] flashfs::error::Error<std::io::Error>),
    #[display("Image: {_0}")]
    Image(#[from] std::io::Error),
    #[display("Input: {_0}")]
    Input(#[from] InputError),
}

