mod dish;

pub use dish::{Diet, Dish, DishPatch, NewDish};
