pub mod console_operator;
pub mod parser;
pub mod script_operator;

pub use crate::console_operator::ConsoleOperator;
pub use crate::parser::CommandParser;
pub use crate::script_operator::ScriptOperator;
