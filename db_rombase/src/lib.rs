mod model;
mod store;

pub use model::RombaseEnum;
pub use store::RombaseStore;
