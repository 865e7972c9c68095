use thiserror::Error;

pub mod core_config;

#[cfg(test)]
mod test;

#[derive(Debug, Error)]
pub enum ConfigParsingError {
    #[error("Config parsing error: `{0}`")]
    GeneralParsingError(String),
}
