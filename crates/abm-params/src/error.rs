use thiserror::Error;

#[derive(Debug, Error)]
pub enum ParamsError {
    #[error("parameter parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type ParamsResult<T> = Result<T, ParamsError>;
