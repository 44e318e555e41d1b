pub mod db;
pub mod wishlist {
    pub mod entity;
    pub mod repository;
}
