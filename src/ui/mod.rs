pub mod console;
pub mod messages;
pub mod render;
pub mod terminal;

pub use console::Console;
pub use terminal::TerminalConsole;
