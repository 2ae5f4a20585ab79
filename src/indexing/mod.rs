pub mod file_info;
pub mod progress;
pub mod scanner;
pub mod walker;

pub use file_info::{FileInfo, calculate_hash, get_utc_timestamp};
pub use progress::ScanStats;
pub use scanner::ResourceScanner;
pub use walker::FileWalker;
