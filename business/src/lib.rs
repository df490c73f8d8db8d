pub mod application {
    pub mod shopping_item {
        pub mod purchase_flow;
        pub mod store;
    }
    pub mod shopping_list {
        pub mod store;
    }
}

pub mod domain {
    pub mod errors;
    pub mod logger;
    pub mod shared {
        pub mod value_objects;
    }
    pub mod shopping_item {
        pub mod cart;
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod sections;
    }
    pub mod shopping_list {
        pub mod errors;
        pub mod model;
        pub mod repository;
    }
}
