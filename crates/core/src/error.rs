use crate::types::Topology;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum Error {
    #[error("'{found}' is not a recognized chromosome type ('{linear}' for linear or '{circular}' for circular)")]
    MalformedTopology {
        found: char,
        linear: char,
        circular: char,
    },
    #[error("{count} {topology} chromosomes in one genome, at most {max} are supported")]
    TooManyChromosomes {
        topology: Topology,
        count: usize,
        max: usize,
    },
    #[error("no color defined for gene '{0}'")]
    UnresolvableColor(String),
}

impl Error {
    pub(crate) fn malformed_topology(found: char) -> Self {
        Error::MalformedTopology {
            found,
            linear: Topology::Linear.symbol(),
            circular: Topology::Circular.symbol(),
        }
    }
}
