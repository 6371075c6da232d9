//! Intake chat adapters.

mod scripted;

pub use scripted::ScriptedIntakeChat;
