//! Core domain: level sequencing resources.

use bevy::prelude::*;

/// Ordered level ids and the index of the one currently live.
#[derive(Resource, Debug, Clone)]
pub struct LevelProgress {
    pub levels: Vec<String>,
    pub current: usize,
}

impl Default for LevelProgress {
    fn default() -> Self {
        Self::new(vec!["level_1".to_string(), "level_2".to_string()])
    }
}

impl LevelProgress {
    pub fn new(levels: Vec<String>) -> Self {
        Self { levels, current: 0 }
    }

    pub fn current_id(&self) -> &str {
        self.levels
            .get(self.current)
            .map(String::as_str)
            .unwrap_or("level_1")
    }

    /// Step to the next level, wrapping back to the first after the last.
    pub fn advance(&mut self) {
        if self.levels.is_empty() {
            return;
        }
        self.current = (self.current + 1) % self.levels.len();
    }
}
