pub mod application {
    pub mod wishlist {
        pub mod add_product;
        pub mod get_product;
        pub mod get_wishlist;
        pub mod remove_product;
    }
}

pub mod domain {
    pub mod errors;
    pub mod logger;
    pub mod shared {
        pub mod value_objects;
    }
    pub mod wishlist {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod use_cases {
            pub mod add_product;
            pub mod get_product;
            pub mod get_wishlist;
            pub mod remove_product;
        }
    }
}
