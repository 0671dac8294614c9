mod index;
mod kind;
mod product;

pub use index::{ApiIndex, ClassRecord, FunctionRecord, MethodRecord};
pub use kind::{EntityKind, KindInfo};
pub use product::Product;
