pub mod db;
pub mod food_item {
    pub mod entity;
    pub mod repository;
}
pub mod pantry_item {
    pub mod entity;
    pub mod repository;
}
pub mod meal_log {
    pub mod entity;
    pub mod repository;
}
pub mod recipe {
    pub mod entity;
    pub mod repository;
}
