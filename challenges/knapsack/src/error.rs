use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum KnapsackError {
    #[error("capacity must be positive, got {capacity}")]
    InvalidCapacity { capacity: i64 },

    #[error(
        "round {round} selected nothing: {remaining_items} item(s) left but none fits, {remaining_slots} slot(s) unfilled"
    )]
    NoFeasibleItem {
        round: usize,
        remaining_slots: usize,
        remaining_items: usize,
    },

    #[error("duplicate item name: {name}")]
    DuplicateItemName { name: String },

    #[error("line {line}: {reason}")]
    ParseItem { line: usize, reason: String },
}

pub type Result<T> = std::result::Result<T, KnapsackError>;
