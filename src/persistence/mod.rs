pub mod files;
pub mod store;

pub use files::{
    atomic_write, ensure_quadrant_dir, get_quadrant_dir, read_file, LABELS_FILE, SETTINGS_FILE,
    TASKS_FILE,
};
pub use store::Store;
