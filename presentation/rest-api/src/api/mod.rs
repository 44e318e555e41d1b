pub mod error;
pub mod security;
pub mod tags;

pub mod health {
    pub mod routes;
}
pub mod wishlist {
    pub mod dto;
    pub mod error_mapper;
    pub mod routes;
}
