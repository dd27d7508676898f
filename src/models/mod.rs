pub mod quality;
pub mod review_session;
pub mod review_state;
pub mod sm2;
pub mod stats;
pub mod vocabulary_item;

pub use quality::Quality;
pub use review_session::{ReviewOutcome, ReviewSession, SessionSummary};
pub use review_state::ReviewState;
pub use stats::{ItemStatus, ReviewStats};
pub use vocabulary_item::{VocabularyItem, WordEntry};
