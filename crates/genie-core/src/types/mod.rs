mod timestamp;

pub use timestamp::Timestamp;
pub use ulid::Ulid;
