pub mod entities {
    pub use fcs_entities::{comment::*, film::*, id::*, time::*};
}
pub mod gateways;
pub mod repositories;
pub mod usecases;
pub mod util;
