#[derive(Debug, Clone)]
pub struct Config {
    /// Number of nodes reserved up front. A tree rebuilt every frame from a
    /// known entity count can avoid regrowing its arena.
    pub pool_size: usize,
}

impl Default for Config {
    fn default() -> Self {
        Config { pool_size: 4000 }
    }
}
