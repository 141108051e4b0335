mod catalog;
mod composer;
mod persistence;

pub use catalog::Catalog;
pub use composer::DishComposer;
pub use persistence::{
    build_record, export_breakdown_csv, load_catalog, new_dish_id, save_dish, unix_now,
};
