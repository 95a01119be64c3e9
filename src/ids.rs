/// Hands out node ids. Ids only go up and are never reused.
///
/// One generator is usually shared by every parse in a process so that ids
/// stay unique across files.
#[derive(Debug, Clone, Default)]
pub struct IdGenerator {
    current_id: u64,
}

impl IdGenerator {
    pub fn new() -> Self {
        IdGenerator::default()
    }

    /// Starts numbering at `first_id`, leaving lower ids free for the caller.
    pub fn starting_at(first_id: u64) -> Self {
        IdGenerator {
            current_id: first_id,
        }
    }

    /// Advances the counter and returns the previous value.
    pub fn gen_id(&mut self) -> u64 {
        let id = self.current_id;
        self.current_id += 1;
        id
    }

    /// The id the next call to `gen_id` will return.
    pub fn peek(&self) -> u64 {
        self.current_id
    }
}
