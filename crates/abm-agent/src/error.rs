use abm_core::{AbmError, AgentId, Grid, GridPos};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AgentError {
    #[error("a population must contain at least one agent")]
    Empty,

    #[error("{agent} at {pos} lies outside the {grid} grid")]
    OutOfBounds {
        agent: AgentId,
        pos:   GridPos,
        grid:  Grid,
    },

    #[error(transparent)]
    Config(#[from] AbmError),
}

pub type AgentResult<T> = Result<T, AgentError>;
