//! Tile-based, time-interpolated movement for grid roguelike actors.
//! Provides the [`Mover`] state machine, the capabilities it drives, concrete
//! actors composing it and a Bevy plugin advancing it every frame.
pub mod actor;
pub mod body;
pub mod collision;
pub mod config;
pub mod constants;
pub mod error;
pub mod grid;
pub mod logging;
pub mod mover;
pub mod plugin;
pub mod vector_math;
pub use constants::*;

// Re-export commonly used items
pub use actor::{Actor, Enemy, Player};
pub use body::{Body, PointBody};
pub use collision::{BlockingGrid, CollisionQuery, LayerMask};
pub use config::MoverConfig;
pub use error::{ConfigError, MoverError};
pub use grid::{Direction, GridPos};
pub use logging::init as init_logging;
pub use mover::{MoveCompletion, MoveTime, Mover, MoverState, StepOutcome};
pub use plugin::{advance_movers_system, MoveCompleted, MoveRequest, MoverPlugin, MoverSystems};
pub use vector_math::{move_towards, squared_distance};

pub mod prelude {
    //! Prelude exports used in documentation examples.
    //!
    //! ```rust,no_run
    //! use tilestep::prelude::*;
    //! ```

    pub use crate::Body;
    pub use crate::LayerMask;
    pub use crate::MoveCompletion;
    pub use crate::MoveTime;
    pub use crate::Mover;
    pub use crate::MoverPlugin;
    pub use crate::StepOutcome;
}
