pub mod buy_tickets;
pub mod capture_entropy;
pub mod complete_draw;
pub mod create_competition;
pub mod sweep_competition;
pub mod verify_draw;
pub mod withdraw_proceeds;

pub use buy_tickets::*;
pub use capture_entropy::*;
pub use complete_draw::*;
pub use create_competition::*;
pub use sweep_competition::*;
pub use verify_draw::*;
pub use withdraw_proceeds::*;
