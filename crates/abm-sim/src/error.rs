use abm_agent::AgentError;
use abm_core::AbmError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("simulation configuration error: {0}")]
    Config(#[from] AbmError),

    #[error("population {expected} configured but {got} agents supplied")]
    AgentCountMismatch {
        expected: usize,
        got:      usize,
    },

    #[error("population does not fit the configured grid: {0}")]
    Population(#[from] AgentError),
}

pub type SimResult<T> = Result<T, SimError>;
