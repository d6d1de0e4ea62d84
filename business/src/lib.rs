pub mod application {
    pub mod product {
        pub mod add;
        pub mod list;
        pub mod low_stock;
        pub mod remove;
        pub mod search;
        pub mod update;
        pub mod update_stock;
    }
}

pub mod domain {
    pub mod logger;
    pub mod product {
        pub mod errors;
        pub mod model;
        pub mod patch;
        pub mod store;
        pub mod value_objects;
        pub mod use_cases {
            pub mod add;
            pub mod list;
            pub mod low_stock;
            pub mod remove;
            pub mod search;
            pub mod update;
            pub mod update_stock;
        }
    }
}
