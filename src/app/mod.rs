//! Interactive session: key parsing, state, frame composition, and the
//! controller loop that ties them to a [`Console`].

pub mod console;
pub mod controller;
pub mod interrupt;
pub mod keys;
pub mod state;
pub mod view;

pub use console::{Console, LineInput, TerminalConsole};
pub use controller::{Controller, Flow};
pub use interrupt::Interrupts;
pub use keys::Key;
pub use state::AppState;
