mod accuracy;
mod move_category;
mod move_data;

pub use accuracy::Accuracy;
pub use move_category::MoveCategory;
pub use move_data::MoveData;
