use anyhow::Result;

/// A source-in, rendered-value-out runner. State carried between calls is up
/// to the implementation.
pub trait Engine {
    fn run(&mut self, input: &str) -> Result<String>;
}
